use std::convert::From;
use std::{fmt, io, str};

impl From<Error> for io::Error {
    fn from(f: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, f)
    }
}

impl From<io::Error> for Error {
    fn from(f: io::Error) -> Self {
        Error::IoFailure(f.kind())
    }
}

impl From<str::Utf8Error> for Error {
    fn from(_: str::Utf8Error) -> Self {
        Error::MalformedRequest
    }
}

macro_rules! errors {
    (
        [
            $(
                $(#[$docs1:meta])*
                ($name1:ident, $phrase1:expr);
            )+
        ],
        [
            $(
                $(#[$docs2:meta])*
                ($name2:ident, $type:ty, $phrase2:expr);
            )+
        ]
    ) => {
        #[derive(Clone, Debug, PartialEq)]
        pub enum Error {
            $(
                $(#[$docs1])*
                $name1,
            )+
            $(
                $(#[$docs2])*
                $name2($type),
            )+
        }

        impl Error {
            fn desc(&self) -> String {
                match &*self {
                    $(
                        Error::$name1 => String::from($phrase1),
                    )+
                    $(
                        Error::$name2(val) => format!("{}: {:?}", $phrase2, val),
                    )+
                }
            }
        }

        impl fmt::Display for Error {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(&self.desc())
            }
        }

        impl std::error::Error for Error {}
    };
}

errors! {
    [
        /// Request line, method, protocol, header line or host directive
        /// broke its grammar.
        (MalformedRequest, "Can't parse request");
        /// The stream ended before the blank line closing the header block.
        (TruncatedRequest, "Request ended before the header block was terminated");
        (RequestTimeout, "Timed out while reading the request");
    ],
    [
        (IoFailure, io::ErrorKind, "I/O failure");
        (Dispatch, String, "Dispatcher failed");
        (Config, String, "Invalid configuration");
    ]
}

impl Error {
    /// Errors after which the peer can still be sent a response.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedRequest | Error::TruncatedRequest | Error::RequestTimeout
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::io;

    #[test]
    fn test_malformed_request_message() {
        assert_eq!(Error::MalformedRequest.to_string(), "Can't parse request");
    }

    #[test]
    fn test_io_error_keeps_kind() {
        let error: Error = io::Error::new(io::ErrorKind::ConnectionReset, "reset").into();
        assert_eq!(error, Error::IoFailure(io::ErrorKind::ConnectionReset));
        assert_eq!(error.to_string(), "I/O failure: ConnectionReset");
        assert!(!error.is_request_error());
    }

    #[test]
    fn test_payload_variant_message() {
        let error = Error::Config(String::from("bad port"));
        assert_eq!(error.to_string(), "Invalid configuration: \"bad port\"");
    }
}
