#[macro_use]
pub(crate) mod macros;
pub(crate) mod bytes;
pub(crate) mod parser;
