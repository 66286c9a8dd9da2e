use crate::wire::Framing;

/// What an inbound event means to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Ordinary chat message
    Chat,
    /// Relay-reported error, rendered like chat in the error style
    Error,
    /// "Start a new conversation": clears the log before anything else
    Control,
}

/// Canonical inbound chat event, independent of the wire framing.
///
/// `sender` and `message` stay optional because relays omit them; the
/// renderer discards events where either is missing or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEvent {
    pub sender: Option<String>,
    pub message: Option<String>,
    pub kind: EventKind,
}

impl ChatEvent {
    pub fn chat(sender: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sender: Some(sender.into()),
            message: Some(message.into()),
            kind: EventKind::Chat,
        }
    }

    pub fn error(sender: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sender: Some(sender.into()),
            message: Some(message.into()),
            kind: EventKind::Error,
        }
    }

    /// A bare "new conversation" signal with nothing to render.
    pub fn new_conversation() -> Self {
        Self {
            sender: None,
            message: None,
            kind: EventKind::Control,
        }
    }

    /// Sender and message, if both are present and non-empty.
    pub fn parts(&self) -> Option<(&str, &str)> {
        let sender = self.sender.as_deref().filter(|s| !s.is_empty())?;
        let message = self.message.as_deref().filter(|m| !m.is_empty())?;
        Some((sender, message))
    }
}

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone, PartialEq)]
pub enum BackendAction {
    /// Open the WebSocket and register under `name`
    Connect {
        url: String,
        name: String,
        framing: Framing,
    },
    /// Close the connection
    Disconnect,
    /// Send a chat message to the current conversation
    SendMessage(String),
    /// Ask the relay to start a conversation with `target`
    NewChat { target: String },
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone, PartialEq)]
pub enum GuiEvent {
    /// WebSocket handshake done and registration sent
    Connected,
    /// Connection closed, with a reason
    Disconnected(String),
    /// Transport or framing error
    Error(String),
    /// A chat event from the relay
    Chat(ChatEvent),
    /// The relay opened a conversation with `with`
    ChatStarted { with: String, ip: Option<String> },
    /// Diagnostic line for the system log
    Raw(String),
}
