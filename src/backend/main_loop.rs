//! Backend main event loop.

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use futures_util::StreamExt;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::time::timeout;

use super::handlers::{self, Session};
use crate::error::ClientError;
use crate::protocol::{BackendAction, GuiEvent};

/// How long one socket read waits before checking for UI actions again
const READ_POLL: Duration = Duration::from_millis(50);

/// Run the backend event loop on a tokio runtime.
///
/// Returns once the UI side drops its action sender.
pub fn run_backend(action_rx: Receiver<BackendAction>, event_tx: Sender<GuiEvent>) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            let err = ClientError::Runtime(e.to_string());
            tracing::error!(error = %err, "backend not started");
            let _ = event_tx.send(GuiEvent::Error(err.to_string()));
            return;
        }
    };

    rt.block_on(async move {
        let mut session: Option<Session> = None;

        loop {
            // Check for actions from the UI (non-blocking)
            loop {
                match action_rx.try_recv() {
                    Ok(action) => {
                        handlers::handle_backend_action(action, &mut session, &event_tx).await;
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        if let Some(s) = session.take() {
                            s.close().await;
                        }
                        tracing::debug!("UI gone, backend stopping");
                        return;
                    }
                }
            }

            // Read from the network (with short timeout so we can check for actions)
            let Some(s) = session.as_mut() else {
                // No connection, sleep a bit to avoid busy-looping
                tokio::time::sleep(READ_POLL).await;
                continue;
            };

            let read = timeout(READ_POLL, s.stream.next()).await;
            match read {
                Ok(Some(Ok(message))) => {
                    if let Some(reason) = handlers::handle_server_frame(message, s.framing, &event_tx) {
                        tracing::info!(%reason, "relay closed the connection");
                        session = None;
                        let _ = event_tx.send(GuiEvent::Disconnected(reason));
                    }
                }
                Ok(Some(Err(e))) => {
                    tracing::error!(error = %e, "read error");
                    session = None;
                    let _ = event_tx.send(GuiEvent::Error(format!("Read error: {}", e)));
                    let _ = event_tx.send(GuiEvent::Disconnected("Read error".into()));
                }
                Ok(None) => {
                    // Connection closed
                    session = None;
                    let _ = event_tx.send(GuiEvent::Disconnected("Connection closed by server".into()));
                }
                Err(_) => {
                    // Timeout - this is normal, just loop
                }
            }
        }
    });
}
