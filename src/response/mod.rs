use crate::headers::CONNECTION_HEADER_NAME;
use crate::request::PROTOCOL;
use crate::status::StatusCode;
use bytes::{BufMut, BytesMut};
use std::collections::HashMap;

/// Response handed back by a dispatcher. It is serialized once by the
/// connection that owns it.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    status: StatusCode,
    reason: Option<String>,
    headers: HashMap<String, String>,
    body: Option<String>,
}

impl Response {
    pub fn new(status: StatusCode) -> Self {
        Response {
            status,
            reason: None,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Reason phrase written after the code. Without one the status line is
    /// just `HTTP/1.1 <code>`.
    pub fn with_reason(mut self, reason: &str) -> Self {
        self.reason = Some(reason.to_string());
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.set_header(name, value);
        self
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    /// Replaces any header with the same name, ignoring case.
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|key, _| !key.eq_ignore_ascii_case(name));
        self.headers.insert(name.to_string(), value.to_string());
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Forces `Connection: Close`; connections serve one exchange only.
    pub(crate) fn close_connection(&mut self) {
        self.set_header("Connection", "Close");
    }

    pub(crate) fn is_closing(&self) -> bool {
        self.header(CONNECTION_HEADER_NAME)
            .map_or(false, |value| value.eq_ignore_ascii_case("close"))
    }

    /// status-line CRLF *( name ": " value CRLF ) CRLF [ body ]
    pub fn encode(&self, buf: &mut BytesMut) {
        buf.put_slice(PROTOCOL.as_bytes());
        buf.put_u8(b' ');
        buf.put_slice(self.status.to_string().as_bytes());
        if let Some(reason) = &self.reason {
            buf.put_u8(b' ');
            buf.put_slice(reason.as_bytes());
        }
        buf.put_slice(b"\r\n");

        for (name, value) in &self.headers {
            buf.put_slice(name.as_bytes());
            buf.put_slice(b": ");
            buf.put_slice(value.as_bytes());
            buf.put_slice(b"\r\n");
        }
        buf.put_slice(b"\r\n");

        if let Some(body) = &self.body {
            buf.put_slice(body.as_bytes());
        }
    }
}
