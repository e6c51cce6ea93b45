mod method;
mod query;
mod request;
mod request_builder;
mod request_line;

pub use method::*;
pub use query::decode_query;
pub use request::*;
pub use request_builder::*;
pub use request_line::PROTOCOL;
