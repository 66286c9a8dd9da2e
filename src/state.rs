//! Core application state, separated from UI logic.
//!
//! `ClientState` holds everything that represents the chat session: the
//! chat log and its renderer, connection status, the system log and
//! status toasts. UI components receive it as a parameter.

use chrono::Local;
use std::time::Instant;

use crate::buffer::ChatLog;
use crate::protocol::ChatEvent;
use crate::renderer::{HandleOutcome, MessageRenderer};

/// Maximum lines kept in the system log
const MAX_SYSTEM_LOG: usize = 500;

#[derive(Default)]
pub struct ClientState {
    /// Whether the relay connection is open and registered.
    pub is_connected: bool,

    /// Grouped chat messages shown in the central panel.
    pub chat_log: ChatLog,

    /// Grouping state and the local user's name.
    pub renderer: MessageRenderer,

    /// Current conversation partner, when the relay told us.
    pub peer: Option<String>,

    /// Diagnostic lines (shown in the collapsible System panel).
    pub system_log: Vec<String>,

    /// Status toast messages with creation time (auto-expire).
    pub status_messages: Vec<(String, Instant)>,
}

impl ClientState {
    pub fn new(local_user: &str) -> Self {
        let mut state = Self {
            renderer: MessageRenderer::new(local_user),
            ..Default::default()
        };
        state.push_system("Welcome to RelayChat!");
        state
    }

    /// Render an inbound chat event into the log.
    pub fn handle_chat(&mut self, event: &ChatEvent) -> HandleOutcome {
        self.renderer.handle(event, &mut self.chat_log)
    }

    /// Start a new conversation: clear the log and the grouping state.
    pub fn new_chat(&mut self) {
        self.renderer.clear(&mut self.chat_log);
        self.peer = None;
    }

    /// Append a timestamped line to the system log.
    pub fn push_system(&mut self, line: impl AsRef<str>) {
        let ts = Local::now().format("%H:%M:%S");
        self.system_log.push(format!("[{}] {}", ts, line.as_ref()));
        // Keep log from growing too large
        if self.system_log.len() > MAX_SYSTEM_LOG {
            self.system_log.remove(0);
        }
    }

    pub fn push_status(&mut self, message: impl Into<String>) {
        self.status_messages.push((message.into(), Instant::now()));
    }

    /// Purge status messages older than the given duration.
    pub fn purge_old_status_messages(&mut self, max_age_secs: u64) {
        self.status_messages
            .retain(|(_, created)| created.elapsed().as_secs() < max_age_secs);
    }
}
