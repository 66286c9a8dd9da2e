//! Error types for the chat client.
//!
//! Renderer paths never return these: malformed chat events are dropped
//! silently. Errors here come from the transport, the wire framing and
//! the settings file, and reach the user as `GuiEvent::Error` toasts.

use thiserror::Error;

/// Errors raised while encoding or decoding relay frames.
#[derive(Debug, Error)]
pub enum WireError {
    /// The relay sent something that is not valid JSON
    #[error("invalid JSON frame: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The frame is valid JSON but not an object
    #[error("frame is not a JSON object")]
    NotAnObject,

    /// The outbound frame has no encoding in the selected framing
    #[error("{frame} frames cannot be sent with {framing} framing")]
    Unrepresentable {
        frame: &'static str,
        framing: &'static str,
    },
}

/// Top-level client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server URL: {0}")]
    InvalidUrl(String),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error(transparent)]
    Wire(#[from] WireError),

    #[error("not connected")]
    NotConnected,

    #[error("backend channel closed")]
    ChannelClosed,

    #[error("settings I/O failed: {0}")]
    SettingsIo(#[from] std::io::Error),

    #[error("settings are not valid JSON: {0}")]
    SettingsFormat(#[from] serde_json::Error),

    #[error("failed to create Tokio runtime: {0}")]
    Runtime(String),
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;
