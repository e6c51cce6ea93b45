//! Minimal HTTP/1.1 server front end.
//!
//! A connection carries exactly one exchange: the request line and header
//! block are parsed into a [`Request`], handed to a [`Dispatcher`], and the
//! returned [`Response`] is written back with `Connection: Close` before the
//! stream is shut down.

#[macro_use]
extern crate lazy_static;

#[macro_use]
mod helpers;

pub mod app;
pub mod config;
pub mod connection;
pub mod errors;
mod grammar;
pub mod headers;
mod http11_server;
mod request;
pub mod response;
pub mod status;

pub use app::{Dispatcher, EchoDispatcher, SharedDispatcher};
pub use config::ServerConfig;
pub use errors::Error;
pub use http11_server::*;
pub use request::*;
pub use response::Response;
pub use status::StatusCode;
