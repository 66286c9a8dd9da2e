//! Connection establishment for the relay WebSocket
//!
//! Handles plain and TLS WebSocket setup with proper error handling.

use rustls::RootCertStore;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async_tls_with_config, Connector, MaybeTlsStream, WebSocketStream,
};

use crate::error::{ClientError, Result};
use crate::validation::validate_server_url;

pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Create a rustls connector with webpki root certificates for cross-platform compatibility
pub fn create_tls_connector() -> Connector {
    let mut root_store = RootCertStore::empty();

    // Use webpki-roots for cross-platform compatibility
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    Connector::Rustls(Arc::new(config))
}

/// Open a WebSocket to the relay at `url`.
///
/// `wss://` URLs go through rustls; `ws://` URLs are plain TCP.
///
/// # Errors
/// Returns an error if the URL is invalid or the TCP, TLS or WebSocket
/// handshake fails.
pub async fn establish_connection(url: &str) -> Result<WsStream> {
    let parsed = validate_server_url(url).map_err(ClientError::InvalidUrl)?;

    let connector = if parsed.scheme() == "wss" {
        Some(create_tls_connector())
    } else {
        None
    };

    let (stream, response) =
        connect_async_tls_with_config(parsed.as_str(), None, false, connector).await?;
    tracing::debug!(url = %parsed, status = %response.status(), "websocket handshake complete");

    Ok(stream)
}
