use std::fmt;
use std::num::NonZeroU16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StatusCode(NonZeroU16);

macro_rules! status_code {
    (
        $(
            ($code:literal, $name:ident, $phrase:expr);
        )+
    ) => {
        impl StatusCode {
            $(
                #[allow(dead_code)]
                pub const $name: StatusCode = StatusCode(
                    match NonZeroU16::new($code) {
                        Some(code) => code,
                        None => panic!("status code can not be zero"),
                    }
                );
            )+

            #[allow(dead_code)]
            pub fn reason(num: u16) -> Option<&'static str> {
                match num {
                    $(
                        $code => Some($phrase),
                    )+
                    _ => None
                }
            }
        }
    };
}

status_code! {
    (100, CONTINUE, "Continue");
    (200, OK, "OK");
    (201, CREATED, "Created");
    (204, NO_CONTENT, "No Content");
    (301, MOVED_PERMANENTLY, "Moved Permanently");
    (302, FOUND, "Found");
    (304, NOT_MODIFIED, "Not Modified");
    (400, BAD_REQUEST, "Bad Request");
    (403, FORBIDDEN, "Forbidden");
    (404, NOT_FOUND, "Not Found");
    (405, METHOD_NOT_ALLOWED, "Method Not Allowed");
    (408, REQUEST_TIMEOUT, "Request Timeout");
    (500, INTERNAL_SERVER_ERROR, "Internal Server Error");
    (501, NOT_IMPLEMENTED, "Not Implemented");
    (503, SERVICE_UNAVAILABLE, "Service Unavailable");
}

impl StatusCode {
    /// Any three digit code is accepted, known or not.
    pub fn from_u16(code: u16) -> Option<StatusCode> {
        if !(100..1000).contains(&code) {
            return None;
        }

        NonZeroU16::new(code).map(StatusCode)
    }

    pub fn as_u16(&self) -> u16 {
        self.0.get()
    }

    pub fn canonical_reason(&self) -> Option<&'static str> {
        StatusCode::reason(self.as_u16())
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}
