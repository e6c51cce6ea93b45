use crate::errors::Error;
use crate::request::Request;
use crate::response::Response;
use crate::status::StatusCode;
use futures::future::{self, BoxFuture, FutureExt};
use std::sync::Arc;

pub type SharedDispatcher = Arc<dyn Dispatcher>;

/// Decides what to answer for a parsed request.
pub trait Dispatcher: Send + Sync {
    fn dispatch<'a>(&'a self, request: &'a Request) -> BoxFuture<'a, Result<Response, Error>>;
}

impl<F> Dispatcher for F
where
    F: Fn(&Request) -> Result<Response, Error> + Send + Sync,
{
    fn dispatch<'a>(&'a self, request: &'a Request) -> BoxFuture<'a, Result<Response, Error>> {
        future::ready(self(request)).boxed()
    }
}

/// Answers every request with a plain-text summary of what was parsed.
#[derive(Clone, Copy, Debug, Default)]
pub struct EchoDispatcher;

impl EchoDispatcher {
    pub fn describe(request: &Request) -> String {
        let mut keys: Vec<&String> = request.query_parameters().keys().collect();
        keys.sort();

        let query = keys
            .iter()
            .map(|key| format!("{}={}", key, request.query_parameters()[*key]))
            .collect::<Vec<_>>()
            .join("&");

        format!(
            "method: {}\npath: {}\nquery: {}\nhost: {}\nport: {}\n",
            request.method(),
            request.path(),
            query,
            request.host(),
            request.port()
        )
    }
}

impl Dispatcher for EchoDispatcher {
    fn dispatch<'a>(&'a self, request: &'a Request) -> BoxFuture<'a, Result<Response, Error>> {
        let body = EchoDispatcher::describe(request);
        let response = Response::new(StatusCode::OK)
            .with_reason("OK")
            .with_header("Content-Type", "text/plain")
            .with_header("Content-Length", &body.len().to_string())
            .with_body(&body);

        future::ready(Ok(response)).boxed()
    }
}
