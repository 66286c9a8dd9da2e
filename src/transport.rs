//! UI-side handle to the backend connection.

use crossbeam_channel::Sender;

use crate::error::{ClientError, Result};
use crate::protocol::BackendAction;
use crate::wire::Framing;

/// Outbound side of the chat transport as seen by the input panel.
pub trait ChatTransport {
    /// Whether the connection is open and registered.
    fn is_ready(&self) -> bool;

    /// Hand one chat message to the transport.
    fn send_chat(&mut self, text: String) -> Result<()>;
}

/// Sends [`BackendAction`]s to the backend thread and tracks readiness
/// from the `Connected`/`Disconnected` events it reports back.
#[derive(Clone)]
pub struct BackendLink {
    action_tx: Sender<BackendAction>,
    ready: bool,
}

impl BackendLink {
    pub fn new(action_tx: Sender<BackendAction>) -> Self {
        Self {
            action_tx,
            ready: false,
        }
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    pub fn connect(&self, url: &str, name: &str, framing: Framing) -> Result<()> {
        self.send(BackendAction::Connect {
            url: url.to_string(),
            name: name.to_string(),
            framing,
        })
    }

    pub fn disconnect(&self) -> Result<()> {
        self.send(BackendAction::Disconnect)
    }

    /// Ask the relay for a conversation with `target`.
    pub fn new_chat(&self, target: &str) -> Result<()> {
        if !self.ready {
            return Err(ClientError::NotConnected);
        }
        self.send(BackendAction::NewChat {
            target: target.to_string(),
        })
    }

    fn send(&self, action: BackendAction) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|_| ClientError::ChannelClosed)
    }
}

impl ChatTransport for BackendLink {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn send_chat(&mut self, text: String) -> Result<()> {
        if !self.ready {
            return Err(ClientError::NotConnected);
        }
        self.send(BackendAction::SendMessage(text))
    }
}
