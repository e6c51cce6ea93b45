use crate::errors::Error as HttpError;
use crate::grammar::{is_field_name_char, is_field_value_char};
use crate::helpers::bytes::{ascii_str, Bytes};
use paste::paste;
use std::collections::hash_map::Iter;
use std::collections::HashMap;

mod host;
pub use host::*;

pub const HOST_HEADER_NAME: &str = "host";
pub const USER_AGENT_HEADER_NAME: &str = "user-agent";
pub const ACCEPT_HEADER_NAME: &str = "accept";
pub const CONTENT_TYPE_HEADER_NAME: &str = "content-type";
pub const CONNECTION_HEADER_NAME: &str = "connection";

macro_rules! get_header {
    ($(
        $(#[$docs:meta])*
        ($name1:ident, $name2:ident);
    )*) => {
        $(
            paste! {
                $(#[$docs])*
                pub fn [<$name1:snake>](&self) -> Option<&str> {
                    self.get($name2)
                }
            }
        )*
    };
}

/// Request header block. Names are lower-cased, values trimmed and
/// lower-cased; a repeated name keeps the last value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Headers {
    headers: HashMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Headers {
            headers: HashMap::new(),
        }
    }

    /// Parses one `name:value` line and stores it.
    pub fn parse_line(&mut self, line: &[u8]) -> Result<(), HttpError> {
        let (name, value) = parse_header_line(line)?;
        self.headers.insert(name, value);
        Ok(())
    }

    /// Lookup by lower-case name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.headers.iter()
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.headers
    }

    get_header! {
        (Host, HOST_HEADER_NAME);
        (UserAgent, USER_AGENT_HEADER_NAME);
        (Accept, ACCEPT_HEADER_NAME);
        (ContentType, CONTENT_TYPE_HEADER_NAME);
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.iter()
    }
}

/// field-line = name ":" value
///
/// `name` is 1*(%x20-7D except ":"), `value` is 1*%x20-7D. The whole line has
/// to match; the value is trimmed before the emptiness check.
pub(crate) fn parse_header_line(line: &[u8]) -> Result<(String, String), HttpError> {
    let mut bytes = Bytes::new(line);

    let name = bytes.take_while(is_field_name_char);
    if !bytes.eat(b':') {
        return Err(HttpError::MalformedRequest);
    }

    let value = bytes.take_while(is_field_value_char);
    if !bytes.is_empty() {
        return Err(HttpError::MalformedRequest);
    }

    let name = ascii_str(name)?.to_ascii_lowercase();
    let value = ascii_str(value)?.trim().to_ascii_lowercase();

    if name.is_empty() || value.is_empty() {
        return Err(HttpError::MalformedRequest);
    }

    Ok((name, value))
}
