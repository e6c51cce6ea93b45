use crate::errors::Error;
use crate::grammar::{is_digit, is_path_char, is_query_char, is_space, is_upper_alpha};
use crate::helpers::bytes::{ascii_str, Bytes};
use crate::request::HttpMethod;

pub const PROTOCOL: &str = "HTTP/1.1";

/// Tokens of a request line, borrowed from the line itself.
#[derive(Debug, PartialEq)]
pub(crate) struct RequestLine<'buf> {
    pub method: HttpMethod,
    pub path: &'buf str,
    pub query: Option<&'buf str>,
    pub protocol: &'buf str,
}

/// request-line = method SP [ path [ "?" query ] ] SP protocol
///
/// The path is only reported when the line contains `" /"`; a path token that
/// does not start with `/` is accepted by the grammar but comes back empty.
pub(crate) fn parse_request_line(line: &[u8]) -> Result<RequestLine<'_>, Error> {
    let mut bytes = Bytes::new(line);

    let method = bytes.take_while(is_upper_alpha);
    if method.is_empty() || !bytes.eat(b' ') {
        return Err(Error::MalformedRequest);
    }
    let method = HttpMethod::from_token(method)?;

    let target = bytes.take_while(is_path_char);
    let query = if !target.is_empty() && bytes.eat(b'?') {
        let query = bytes.take_while(is_query_char);
        if query.is_empty() {
            return Err(Error::MalformedRequest);
        }
        Some(ascii_str(query)?)
    } else {
        None
    };

    if !bytes.eat(b' ') {
        return Err(Error::MalformedRequest);
    }

    let protocol = bytes.rest();
    if !is_protocol_token(protocol) {
        return Err(Error::MalformedRequest);
    }
    if protocol != PROTOCOL.as_bytes() {
        tracing::debug!(protocol = %String::from_utf8_lossy(protocol), "unsupported protocol version");
        return Err(Error::MalformedRequest);
    }

    let path = if has_absolute_path(line) {
        ascii_str(target)?
    } else {
        ""
    };

    Ok(RequestLine {
        method,
        path,
        query,
        protocol: PROTOCOL,
    })
}

/// protocol = "HTTP/" DIGIT "." DIGIT
fn is_protocol_token(token: &[u8]) -> bool {
    match token {
        [b'H', b'T', b'T', b'P', b'/', major, b'.', minor] => is_digit(*major) && is_digit(*minor),
        _ => false,
    }
}

fn has_absolute_path(line: &[u8]) -> bool {
    line.windows(2).any(|pair| is_space(pair[0]) && pair[1] == b'/')
}
