use crate::app::SharedDispatcher;
use crate::errors::Error;
use crate::request::Request;
use crate::response::Response;
use crate::status::StatusCode;
use bytes::BytesMut;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::time::timeout;

static FRAME_SIZE: usize = 1024;

static CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Lifecycle of a single exchange. States only move forward.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum ConnectionState {
    Idle,
    ReadingRequest,
    Dispatching,
    WritingResponse,
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectionLimits {
    /// Deadline for the request line plus header block. `None` waits forever.
    pub read_timeout: Option<Duration>,
    pub max_line_length: usize,
}

impl Default for ConnectionLimits {
    fn default() -> Self {
        ConnectionLimits {
            read_timeout: Some(Duration::from_secs(30)),
            max_line_length: 8 * 1024,
        }
    }
}

/// Owns one accepted stream for exactly one request/response exchange.
pub struct Connection<S> {
    id: u64,
    stream: BufReader<S>,
    dispatcher: SharedDispatcher,
    limits: ConnectionLimits,
    state: ConnectionState,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, dispatcher: SharedDispatcher, limits: ConnectionLimits) -> Self {
        Connection {
            id: CONNECTION_ID.fetch_add(1, Ordering::Relaxed),
            stream: BufReader::with_capacity(FRAME_SIZE, stream),
            dispatcher,
            limits,
            state: ConnectionState::Idle,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Runs the exchange and closes the stream. The error, if any, is the one
    /// that cut the exchange short; a rejection response may still have been
    /// written for it.
    pub async fn process_socket(mut self) -> Result<(), Error> {
        let result = self.exchange().await;

        match &result {
            Ok(()) => (),
            Err(Error::IoFailure(kind)) => {
                tracing::error!(connection_id = self.id, kind = ?kind, "connection failed");
            }
            Err(error) => {
                tracing::warn!(connection_id = self.id, error = %error, "exchange aborted");
            }
        }

        self.close().await;
        result
    }

    async fn exchange(&mut self) -> Result<(), Error> {
        self.transition(ConnectionState::ReadingRequest);

        let request = match self.read_request().await {
            Ok(request) => request,
            Err(error) if error.is_request_error() => {
                self.transition(ConnectionState::WritingResponse);
                self.send_response(rejection(&error)).await?;
                return Err(error);
            }
            Err(error) => return Err(error),
        };

        tracing::debug!(
            connection_id = self.id,
            method = %request.method(),
            path = request.path(),
            host = request.host(),
            "request parsed"
        );

        self.transition(ConnectionState::Dispatching);
        let dispatcher = self.dispatcher.clone();
        let (response, dispatch_error) = match dispatcher.dispatch(&request).await {
            Ok(response) => (response, None),
            Err(error) => {
                let response = Response::new(StatusCode::INTERNAL_SERVER_ERROR)
                    .with_reason("Internal Server Error");
                (response, Some(error))
            }
        };

        self.transition(ConnectionState::WritingResponse);
        self.send_response(response).await?;

        match dispatch_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn read_request(&mut self) -> Result<Request, Error> {
        let max_line_length = self.limits.max_line_length;
        let read = Request::read_from(&mut self.stream, max_line_length);

        match self.limits.read_timeout {
            Some(deadline) => timeout(deadline, read)
                .await
                .map_err(|_| Error::RequestTimeout)?,
            None => read.await,
        }
    }

    /// Buffers the whole response, then writes and flushes it in one go.
    async fn send_response(&mut self, mut response: Response) -> Result<(), Error> {
        response.close_connection();
        debug_assert!(response.is_closing());

        let mut buffer = BytesMut::with_capacity(FRAME_SIZE);
        response.encode(&mut buffer);

        let stream = self.stream.get_mut();
        stream.write_all(&buffer).await?;
        stream.flush().await?;

        tracing::trace!(
            connection_id = self.id,
            status = response.status().as_u16(),
            bytes = buffer.len(),
            "response written"
        );
        Ok(())
    }

    async fn close(&mut self) {
        if let Err(error) = self.stream.get_mut().shutdown().await {
            tracing::debug!(connection_id = self.id, error = %error, "shutdown failed");
        }
        self.transition(ConnectionState::Closed);
    }

    fn transition(&mut self, next: ConnectionState) {
        debug_assert!(next > self.state, "{:?} -> {:?}", self.state, next);
        tracing::trace!(connection_id = self.id, from = ?self.state, to = ?next, "state");
        self.state = next;
    }
}

/// Minimal answer for a request that never made it to the dispatcher.
fn rejection(error: &Error) -> Response {
    match error {
        Error::RequestTimeout => {
            Response::new(StatusCode::REQUEST_TIMEOUT).with_reason("Request Timeout")
        }
        _ => Response::new(StatusCode::INTERNAL_SERVER_ERROR).with_reason("Unable to parse request"),
    }
}

#[cfg(test)]
mod tests {
    use super::{Connection, ConnectionLimits, ConnectionState};
    use crate::app::SharedDispatcher;
    use crate::assert_match;
    use crate::errors::Error;
    use crate::request::{HttpMethod, Request};
    use crate::response::Response;
    use crate::status::StatusCode;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::io::{duplex, AsyncReadExt, AsyncWriteExt};

    fn ok_dispatcher() -> SharedDispatcher {
        Arc::new(|_: &Request| -> Result<Response, Error> {
            Ok(Response::new(StatusCode::OK).with_body("ok"))
        })
    }

    async fn exchange(
        raw: &[u8],
        dispatcher: SharedDispatcher,
        limits: ConnectionLimits,
    ) -> (Result<(), Error>, String) {
        let (mut client, server) = duplex(4096);
        client.write_all(raw).await.unwrap();
        client.shutdown().await.unwrap();

        let result = Connection::new(server, dispatcher, limits).process_socket().await;

        let mut response = Vec::new();
        client.read_to_end(&mut response).await.unwrap();
        (result, String::from_utf8(response).unwrap())
    }

    #[tokio::test]
    async fn test_response_round_trip() {
        let (result, response) = exchange(
            b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n",
            ok_dispatcher(),
            ConnectionLimits::default(),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(response, "HTTP/1.1 200\r\nConnection: Close\r\n\r\nok");
    }

    #[tokio::test]
    async fn test_dispatcher_sees_parsed_request() {
        let seen = Arc::new(Mutex::new(None));
        let recorder = seen.clone();
        let dispatcher: SharedDispatcher = Arc::new(move |request: &Request| -> Result<Response, Error> {
            *recorder.lock().unwrap() = Some(request.clone());
            Ok(Response::new(StatusCode::NO_CONTENT))
        });

        let (result, response) = exchange(
            b"PUT /a?x=1 HTTP/1.1\r\nHost: test.com:8080\r\n\r\n",
            dispatcher,
            ConnectionLimits::default(),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(response, "HTTP/1.1 204\r\nConnection: Close\r\n\r\n");

        let request = seen.lock().unwrap().take().unwrap();
        assert_eq!(request.method(), HttpMethod::PUT);
        assert_eq!(request.query_parameter("x"), Some("1"));
        assert_eq!(request.port(), "8080");
    }

    #[tokio::test]
    async fn test_malformed_request_is_rejected() {
        let (result, response) = exchange(
            b"FETCH / HTTP/1.1\r\nHost: a\r\n\r\n",
            ok_dispatcher(),
            ConnectionLimits::default(),
        )
        .await;

        assert_match!(result, Err(Error::MalformedRequest));
        assert_eq!(
            response,
            "HTTP/1.1 500 Unable to parse request\r\nConnection: Close\r\n\r\n"
        );
    }

    #[tokio::test]
    async fn test_truncated_request_is_rejected() {
        let (result, response) = exchange(
            b"GET / HTTP/1.1\r\nHost: a\r\n",
            ok_dispatcher(),
            ConnectionLimits::default(),
        )
        .await;

        assert_match!(result, Err(Error::TruncatedRequest));
        assert!(response.starts_with("HTTP/1.1 500 Unable to parse request\r\n"));
    }

    #[tokio::test]
    async fn test_overlong_line_is_rejected() {
        let limits = ConnectionLimits {
            read_timeout: None,
            max_line_length: 16,
        };
        let (result, _) = exchange(
            b"GET /a/very/long/path/indeed HTTP/1.1\r\nHost: a\r\n\r\n",
            ok_dispatcher(),
            limits,
        )
        .await;

        assert_match!(result, Err(Error::MalformedRequest));
    }

    #[tokio::test]
    async fn test_dispatch_error_becomes_500() {
        let dispatcher: SharedDispatcher = Arc::new(|_: &Request| -> Result<Response, Error> {
            Err(Error::Dispatch(String::from("no route")))
        });

        let (result, response) = exchange(
            b"GET / HTTP/1.1\r\nHost: a\r\n\r\n",
            dispatcher,
            ConnectionLimits::default(),
        )
        .await;

        assert_match!(result, Err(Error::Dispatch(_)));
        assert_eq!(
            response,
            "HTTP/1.1 500 Internal Server Error\r\nConnection: Close\r\n\r\n"
        );
    }

    #[tokio::test]
    async fn test_read_deadline() {
        let (mut client, server) = duplex(4096);
        client.write_all(b"GET / HTTP/1.1\r\nHost: a\r\n").await.unwrap();

        let limits = ConnectionLimits {
            read_timeout: Some(Duration::from_millis(50)),
            max_line_length: 1024,
        };
        let result = Connection::new(server, ok_dispatcher(), limits)
            .process_socket()
            .await;
        assert_match!(result, Err(Error::RequestTimeout));

        let mut response = Vec::new();
        client.read_to_end(&mut response).await.unwrap();
        assert_eq!(
            String::from_utf8(response).unwrap(),
            "HTTP/1.1 408 Request Timeout\r\nConnection: Close\r\n\r\n"
        );
    }

    #[tokio::test]
    async fn test_states_move_forward() {
        let (mut client, server) = duplex(4096);
        client
            .write_all(b"GET / HTTP/1.1\r\nHost: a\r\n\r\n")
            .await
            .unwrap();

        let mut connection = Connection::new(server, ok_dispatcher(), ConnectionLimits::default());
        assert_eq!(connection.state(), ConnectionState::Idle);

        connection.exchange().await.unwrap();
        assert_eq!(connection.state(), ConnectionState::WritingResponse);

        connection.close().await;
        assert_eq!(connection.state(), ConnectionState::Closed);
    }
}
