//! Backend action handling and relay frame routing.

use crossbeam_channel::Sender;
use futures_util::SinkExt;
use tokio_tungstenite::tungstenite::Message;

use super::connection::{establish_connection, WsStream};
use crate::error::{ClientError, Result, WireError};
use crate::protocol::{BackendAction, GuiEvent};
use crate::wire::{Framing, Inbound, Outbound};

/// An open, registered relay connection.
pub(super) struct Session {
    pub stream: WsStream,
    pub framing: Framing,
    pub name: String,
}

impl Session {
    async fn send_frame(&mut self, frame: Outbound<'_>) -> Result<()> {
        let text = self.framing.encode(&frame)?;
        self.stream.send(Message::Text(text)).await?;
        Ok(())
    }

    pub async fn close(mut self) {
        if let Err(e) = self.stream.close(None).await {
            tracing::debug!(error = %e, "close handshake failed");
        }
    }
}

/// Connect and announce our name to the relay.
async fn open_session(url: &str, name: &str, framing: Framing) -> Result<Session> {
    let stream = establish_connection(url).await?;
    let mut session = Session {
        stream,
        framing,
        name: name.to_string(),
    };

    match session.send_frame(Outbound::Register { name }).await {
        Ok(()) => {}
        Err(ClientError::Wire(WireError::Unrepresentable { .. })) => {
            tracing::warn!(framing = framing.as_str(), "relay framing has no registration, skipping");
        }
        Err(e) => return Err(e),
    }
    Ok(session)
}

/// Handle one action from the UI.
pub(super) async fn handle_backend_action(
    action: BackendAction,
    session: &mut Option<Session>,
    event_tx: &Sender<GuiEvent>,
) {
    match action {
        BackendAction::Connect { url, name, framing } => {
            // The old session is gone whether or not the new one opens
            if let Some(old) = session.take() {
                old.close().await;
                tracing::info!("closed previous session to reconnect");
                let _ = event_tx.send(GuiEvent::Disconnected("Reconnecting".into()));
            }

            let _ = event_tx.send(GuiEvent::Raw(format!("Connecting to {}...", url)));
            match open_session(&url, &name, framing).await {
                Ok(s) => {
                    tracing::info!(%url, name = %s.name, "connected to relay");
                    *session = Some(s);
                    let _ = event_tx.send(GuiEvent::Raw(format!("→ registered as {}", name)));
                    let _ = event_tx.send(GuiEvent::Connected);
                }
                Err(e) => {
                    tracing::error!(%url, error = %e, "connection failed");
                    let _ = event_tx.send(GuiEvent::Error(format!("Connection failed: {}", e)));
                }
            }
        }

        BackendAction::Disconnect => {
            if let Some(s) = session.take() {
                s.close().await;
            }
            tracing::info!("disconnected by user");
            let _ = event_tx.send(GuiEvent::Disconnected("User disconnected".into()));
        }

        BackendAction::SendMessage(text) => {
            let Some(s) = session.as_mut() else {
                tracing::warn!("message dropped, not connected");
                let _ = event_tx.send(GuiEvent::Error("Not connected".into()));
                return;
            };
            if let Err(e) = s.send_frame(Outbound::Message { text: &text }).await {
                tracing::error!(error = %e, "failed to send message");
                let _ = event_tx.send(GuiEvent::Error(format!("Failed to send: {}", e)));
            }
        }

        BackendAction::NewChat { target } => {
            let Some(s) = session.as_mut() else {
                let _ = event_tx.send(GuiEvent::Error("Not connected".into()));
                return;
            };
            match s.send_frame(Outbound::NewChat { target: &target }).await {
                Ok(()) => {
                    let _ = event_tx.send(GuiEvent::Raw(format!("→ new chat with {}", target)));
                }
                Err(e) => {
                    tracing::warn!(%target, error = %e, "new chat request not sent");
                    let _ = event_tx.send(GuiEvent::Error(format!("New chat failed: {}", e)));
                }
            }
        }
    }
}

/// Route one frame from the relay. Returns a reason when the relay closed.
pub(super) fn handle_server_frame(
    message: Message,
    framing: Framing,
    event_tx: &Sender<GuiEvent>,
) -> Option<String> {
    match message {
        Message::Text(text) => {
            match framing.decode(&text) {
                Ok(Inbound::Event(event)) => {
                    let _ = event_tx.send(GuiEvent::Chat(event));
                }
                Ok(Inbound::ChatStarted { with, ip }) => {
                    let _ = event_tx.send(GuiEvent::ChatStarted { with, ip });
                }
                Ok(Inbound::RelayError(message)) => {
                    tracing::info!(%message, "relay reported an error");
                    let _ = event_tx.send(GuiEvent::Error(message));
                }
                Ok(Inbound::Ignored(frame_type)) => {
                    tracing::debug!(%frame_type, "ignoring unknown frame type");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "unreadable frame from relay");
                    let _ = event_tx.send(GuiEvent::Raw(format!("← unreadable frame: {}", e)));
                }
            }
            None
        }
        Message::Close(frame) => Some(
            frame
                .map(|f| format!("Closed by server ({} {})", f.code, f.reason))
                .unwrap_or_else(|| "Closed by server".to_string()),
        ),
        Message::Binary(data) => {
            tracing::debug!(len = data.len(), "ignoring binary frame");
            None
        }
        // Ping/pong are answered by tungstenite
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ChatEvent;
    use crossbeam_channel::unbounded;

    #[test]
    fn test_text_frame_becomes_chat_event() {
        let (tx, rx) = unbounded();
        let closed = handle_server_frame(
            Message::Text(r#"{"type":"message","sender":"bob","message":"yo"}"#.into()),
            Framing::Json,
            &tx,
        );
        assert!(closed.is_none());
        assert_eq!(rx.try_recv().unwrap(), GuiEvent::Chat(ChatEvent::chat("bob", "yo")));
    }

    #[test]
    fn test_senderless_relay_error_becomes_error_event() {
        let (tx, rx) = unbounded();
        handle_server_frame(
            Message::Text(r#"{"type":"error","message":"User 'x' is not online."}"#.into()),
            Framing::Json,
            &tx,
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            GuiEvent::Error("User 'x' is not online.".into())
        );
    }

    #[test]
    fn test_unknown_frame_sends_nothing() {
        let (tx, rx) = unbounded();
        handle_server_frame(Message::Text(r#"{"type":"typing"}"#.into()), Framing::Json, &tx);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_garbage_frame_logged() {
        let (tx, rx) = unbounded();
        handle_server_frame(Message::Text("{oops".into()), Framing::Json, &tx);
        assert!(matches!(rx.try_recv(), Ok(GuiEvent::Raw(_))));
    }

    #[test]
    fn test_close_frame_reports_reason() {
        let (tx, _rx) = unbounded();
        let closed = handle_server_frame(Message::Close(None), Framing::Json, &tx);
        assert_eq!(closed.as_deref(), Some("Closed by server"));
    }
}
