//! Backend event processing (connection status, chat events, diagnostics).

use crate::protocol::{ChatEvent, GuiEvent};
use crate::renderer::HandleOutcome;
use crate::state::ClientState;

/// Apply one backend event to the session state.
///
/// Returns `Some(ready)` when the connection state changed so the caller
/// can update its transport handle.
pub fn process_single_event(state: &mut ClientState, event: GuiEvent) -> Option<bool> {
    match event {
        GuiEvent::Connected => {
            state.is_connected = true;
            state.push_system("✓ Connected and registered");
            state.push_status("Connected");
            Some(true)
        }

        GuiEvent::Disconnected(reason) => {
            state.is_connected = false;
            state.push_system(format!("✗ Disconnected: {}", reason));
            state.push_status("Disconnected");
            Some(false)
        }

        GuiEvent::Error(msg) => {
            state.push_system(format!("⚠ Error: {}", msg));
            state.push_status(format!("Error: {}", msg));
            None
        }

        GuiEvent::Chat(event) => {
            if state.handle_chat(&event) == HandleOutcome::Discarded {
                state.push_system("Ignored a message without sender or text");
            }
            None
        }

        GuiEvent::ChatStarted { with, ip } => {
            // A relay-pushed conversation start clears the log just like "New Chat"
            state.handle_chat(&ChatEvent::new_conversation());
            let line = match &ip {
                Some(ip) => format!("Chat started with {} ({})", with, ip),
                None => format!("Chat started with {}", with),
            };
            state.push_system(&line);
            state.push_status(line);
            state.peer = Some(with);
            None
        }

        GuiEvent::Raw(line) => {
            state.push_system(line);
            None
        }
    }
}
