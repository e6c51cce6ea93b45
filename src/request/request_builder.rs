use crate::errors::Error;
use crate::headers::{Headers, HostDirective};
use crate::helpers::parser::{read_line, split_lines};
use crate::request::query::decode_query;
use crate::request::request_line::parse_request_line;
use crate::request::{HttpMethod, Request};
use std::collections::HashMap;
use tokio::io::AsyncBufRead;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ParseState {
    RequestLine,
    Headers,
    Complete,
}

/// Assembles a [`Request`] one line at a time.
///
/// Lines are fed without their endings. The first is the request line, every
/// following non-empty line is a header and the first empty line closes the
/// block and resolves the host. `build` only succeeds after that.
#[derive(Debug)]
pub struct RequestBuilder {
    method: Option<HttpMethod>,
    path: Option<String>,
    query_parameters: HashMap<String, String>,
    protocol: Option<String>,
    headers: Headers,
    host: Option<String>,
    port: Option<String>,
    state: ParseState,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        RequestBuilder::new()
    }
}

impl RequestBuilder {
    pub fn new() -> RequestBuilder {
        RequestBuilder {
            method: None,
            path: None,
            query_parameters: HashMap::new(),
            protocol: None,
            headers: Headers::new(),
            host: None,
            port: None,
            state: ParseState::RequestLine,
        }
    }

    /// `false` once the blank line after the headers has been seen.
    pub fn can_parse_more(&self) -> bool {
        self.state != ParseState::Complete
    }

    pub fn parse_line(&mut self, line: &[u8]) -> Result<&mut RequestBuilder, Error> {
        match self.state {
            ParseState::RequestLine => {
                let request_line = parse_request_line(line)?;
                if let Some(query) = request_line.query {
                    self.query_parameters = decode_query(query);
                }

                self.method = Some(request_line.method);
                self.path = Some(request_line.path.to_string());
                self.protocol = Some(request_line.protocol.to_string());
                self.state = ParseState::Headers;
            }

            ParseState::Headers if line.is_empty() => {
                let (host, port) = HostDirective::resolve(&self.headers)?.into_parts();
                self.host = Some(host);
                self.port = Some(port);
                self.state = ParseState::Complete;
            }

            ParseState::Headers => {
                self.headers.parse_line(line)?;
            }

            // body bytes are never read
            ParseState::Complete => (),
        }

        Ok(self)
    }

    pub fn build(self) -> Result<Request, Error> {
        if self.can_parse_more() {
            return Err(Error::TruncatedRequest);
        }

        match (
            self.method,
            self.path,
            self.protocol,
            self.host,
            self.port,
        ) {
            (Some(method), Some(path), Some(protocol), Some(host), Some(port)) => {
                Ok(Request {
                    method,
                    path,
                    query_parameters: self.query_parameters,
                    protocol,
                    headers: self.headers,
                    host,
                    port,
                })
            }
            _ => Err(Error::MalformedRequest),
        }
    }

    pub(crate) fn parse(buf: &[u8]) -> Result<Request, Error> {
        let mut request_builder = RequestBuilder::new();

        for line in split_lines(buf) {
            if !request_builder.can_parse_more() {
                break;
            }
            request_builder.parse_line(line)?;
        }

        request_builder.build()
    }

    pub(crate) async fn read_from<R>(
        reader: &mut R,
        max_line_length: usize,
    ) -> Result<Request, Error>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut request_builder = RequestBuilder::new();

        while request_builder.can_parse_more() {
            match read_line(reader, max_line_length).await? {
                Some(line) => {
                    request_builder.parse_line(&line)?;
                }
                None => return Err(Error::TruncatedRequest),
            }
        }

        request_builder.build()
    }
}
