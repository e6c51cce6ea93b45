use crate::errors::Error;
use std::fmt;
use std::str::FromStr;

macro_rules! http_methods {
    (
        $(
            $(#[$docs:meta])*
            ($name:ident);
        )+
    ) => {
        /// Request methods the server accepts. Tokens are matched exactly, so
        /// `get` or `FETCH` never parse.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum HttpMethod {
            $(
                $(#[$docs])*
                $name,
            )+
        }

        impl HttpMethod {
            pub const ALL: &'static [HttpMethod] = &[$(HttpMethod::$name,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(
                        HttpMethod::$name => stringify!($name),
                    )+
                }
            }

            pub fn from_token(token: &[u8]) -> Result<HttpMethod, Error> {
                $(
                    if token == stringify!($name).as_bytes() {
                        return Ok(HttpMethod::$name);
                    }
                )+

                Err(Error::MalformedRequest)
            }
        }
    };
}

http_methods! {
    (GET);
    (OPTIONS);
    (HEAD);
    (POST);
    (PUT);
    (DELETE);
    (TRACE);
    (CONNECT);
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::from_token(s.as_bytes())
    }
}
