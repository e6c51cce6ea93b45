use crate::app::{Dispatcher, SharedDispatcher};
use crate::config::ServerConfig;
use crate::connection::{Connection, ConnectionLimits};
use crate::errors::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::Instrument;

/// Accept loop. Every connection runs in its own task and shares nothing
/// with the others but the dispatcher.
pub struct Http11Server {
    listener: TcpListener,
    limits: ConnectionLimits,
}

impl Http11Server {
    pub async fn bind(config: &ServerConfig) -> Result<Http11Server, Error> {
        config.validate()?;
        let listener = TcpListener::bind(config.socket_addr()?).await?;

        tracing::info!(
            address = %listener.local_addr()?,
            read_timeout_ms = config.read_timeout_ms,
            "listening"
        );

        Ok(Http11Server {
            listener,
            limits: config.connection_limits(),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, Error> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves until the task is dropped. Accept failures are logged and the
    /// loop keeps going.
    pub async fn serve<D>(self, dispatcher: D) -> Result<(), Error>
    where
        D: Dispatcher + 'static,
    {
        let dispatcher: SharedDispatcher = Arc::new(dispatcher);

        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(error) => {
                    tracing::warn!(error = %error, "accept failed");
                    continue;
                }
            };

            let connection = Connection::new(stream, dispatcher.clone(), self.limits);
            let span = tracing::debug_span!("connection", id = connection.id(), peer = %peer);

            tokio::spawn(
                async move {
                    tracing::trace!("accepted");
                    // failures are logged by the connection itself
                    let _ = connection.process_socket().await;
                }
                .instrument(span),
            );
        }
    }
}
