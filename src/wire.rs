//! Relay wire framing.
//!
//! Relays in the wild speak one of two framings:
//! - `Json`: objects tagged by `type` (`register`, `message`, `new_chat`
//!   outbound; `message`, `error`, `start_chat` inbound)
//! - `Delimited`: plain text outbound, `"<sender>: <message>"` inbound
//!
//! Everything past this module sees only [`ChatEvent`].

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::WireError;
use crate::protocol::{ChatEvent, EventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Framing {
    #[default]
    Json,
    Delimited,
}

impl Framing {
    pub fn as_str(self) -> &'static str {
        match self {
            Framing::Json => "json",
            Framing::Delimited => "delimited",
        }
    }

    /// Decode one inbound text frame.
    pub fn decode(self, text: &str) -> Result<Inbound, WireError> {
        match self {
            Framing::Json => decode_json(text),
            Framing::Delimited => Ok(Inbound::Event(decode_delimited(text))),
        }
    }

    /// Encode one outbound frame.
    pub fn encode(self, frame: &Outbound<'_>) -> Result<String, WireError> {
        match self {
            Framing::Json => {
                let value = match frame {
                    Outbound::Register { name } => json!({ "type": "register", "name": name }),
                    Outbound::Message { text } => json!({ "type": "message", "message": text }),
                    Outbound::NewChat { target } => json!({ "type": "new_chat", "target": target }),
                };
                Ok(serde_json::to_string(&value)?)
            }
            Framing::Delimited => match frame {
                Outbound::Message { text } => Ok((*text).to_string()),
                other => Err(WireError::Unrepresentable {
                    frame: other.name(),
                    framing: self.as_str(),
                }),
            },
        }
    }
}

/// A decoded inbound frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    Event(ChatEvent),
    /// Relay opened a conversation; carries the peer for the system log
    ChatStarted { with: String, ip: Option<String> },
    /// Error addressed to us rather than to the chat (no sender)
    RelayError(String),
    /// Frame type this client does not know
    Ignored(String),
}

/// An outbound frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outbound<'a> {
    Register { name: &'a str },
    Message { text: &'a str },
    NewChat { target: &'a str },
}

impl Outbound<'_> {
    fn name(&self) -> &'static str {
        match self {
            Outbound::Register { .. } => "register",
            Outbound::Message { .. } => "message",
            Outbound::NewChat { .. } => "new_chat",
        }
    }
}

#[derive(Debug, Deserialize)]
struct JsonFrame {
    #[serde(rename = "type")]
    frame_type: Option<String>,
    sender: Option<String>,
    message: Option<String>,
    with: Option<String>,
    ip: Option<String>,
}

fn decode_json(text: &str) -> Result<Inbound, WireError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(WireError::NotAnObject);
    }
    let frame: JsonFrame = serde_json::from_value(value)?;

    let inbound = match frame.frame_type.as_deref() {
        // Untagged frames carrying chat fields are treated as messages
        None | Some("message") => Inbound::Event(ChatEvent {
            sender: frame.sender,
            message: frame.message,
            kind: EventKind::Chat,
        }),
        Some("error") => match (frame.sender, frame.message) {
            (None, Some(message)) if !message.is_empty() => Inbound::RelayError(message),
            (Some(sender), Some(message)) if sender.is_empty() && !message.is_empty() => {
                Inbound::RelayError(message)
            }
            (sender, message) => Inbound::Event(ChatEvent {
                sender,
                message,
                kind: EventKind::Error,
            }),
        },
        Some("start_chat") => match frame.with {
            Some(with) => Inbound::ChatStarted { with, ip: frame.ip },
            None => Inbound::Event(ChatEvent::new_conversation()),
        },
        Some(other) => Inbound::Ignored(other.to_string()),
    };
    Ok(inbound)
}

fn decode_delimited(text: &str) -> ChatEvent {
    match text.split_once(": ") {
        Some((sender, message)) => ChatEvent::chat(sender, message),
        None => ChatEvent {
            sender: None,
            message: Some(text.to_string()),
            kind: EventKind::Chat,
        },
    }
}
