use crate::errors::Error as HttpError;
use crate::grammar::{is_digit, is_field_name_char};
use crate::headers::Headers;
use crate::helpers::bytes::{ascii_str, Bytes};
use std::convert::TryFrom;

pub const DEFAULT_PORT: &str = "80";

/// Target of a request as named by its `Host` header.
#[derive(Clone, Debug, PartialEq)]
pub struct HostDirective {
    host: String,
    port: String,
}

impl HostDirective {
    /// Resolves the `host` entry of an already parsed header block. A request
    /// without one cannot be served.
    pub fn resolve(headers: &Headers) -> Result<HostDirective, HttpError> {
        let value = headers.host().ok_or(HttpError::MalformedRequest)?;
        HostDirective::try_from(value)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn into_parts(self) -> (String, String) {
        (self.host, self.port)
    }
}

/// host-value = host [ ":" 1*DIGIT ]
impl TryFrom<&str> for HostDirective {
    type Error = HttpError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut bytes = Bytes::new(value.as_bytes());

        let host = bytes.take_while(is_field_name_char);
        if host.is_empty() {
            return Err(HttpError::MalformedRequest);
        }

        let port = if bytes.eat(b':') {
            let port = bytes.take_while(is_digit);
            if port.is_empty() {
                return Err(HttpError::MalformedRequest);
            }
            ascii_str(port)?
        } else {
            DEFAULT_PORT
        };

        if !bytes.is_empty() {
            return Err(HttpError::MalformedRequest);
        }

        Ok(HostDirective {
            host: ascii_str(host)?.to_string(),
            port: port.to_string(),
        })
    }
}
