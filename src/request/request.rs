use crate::errors::Error;
use crate::headers::Headers;
use crate::request::{HttpMethod, RequestBuilder};
use std::collections::HashMap;
use tokio::io::AsyncBufRead;

/// A fully parsed request. Only [`RequestBuilder`] creates one, and only once
/// every field is known.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub(crate) method: HttpMethod,
    pub(crate) path: String,
    pub(crate) query_parameters: HashMap<String, String>,
    pub(crate) protocol: String,
    pub(crate) headers: Headers,
    pub(crate) host: String,
    pub(crate) port: String,
}

impl Request {
    /// Parses a complete request held in memory.
    pub fn parse(buf: &[u8]) -> Result<Request, Error> {
        RequestBuilder::parse(buf)
    }

    /// Reads the request line and header block from `reader`, leaving any
    /// bytes past the blank line unread.
    pub async fn read_from<R>(reader: &mut R, max_line_length: usize) -> Result<Request, Error>
    where
        R: AsyncBufRead + Unpin,
    {
        RequestBuilder::read_from(reader, max_line_length).await
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Absolute path of the target, or `""` when the line carried none.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_parameters(&self) -> &HashMap<String, String> {
        &self.query_parameters
    }

    pub fn query_parameter(&self, key: &str) -> Option<&str> {
        self.query_parameters.get(key).map(String::as_str)
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }
}
