//! Input state management for message composition and history.

use crate::transport::ChatTransport;

/// Maximum history entries kept (and persisted)
const MAX_HISTORY: usize = 100;

/// What happened to a submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Forwarded to the transport (trimmed text)
    Sent(String),
    /// Nothing but whitespace; nothing forwarded
    Empty,
    /// Transport not open; dropped, input left in place
    NotReady,
}

/// Manages the message input box and its history.
#[derive(Default)]
pub struct InputState {
    /// Current message being composed
    pub message_input: String,

    /// Sent message history (for up/down arrow navigation)
    pub history: Vec<String>,

    /// Current position in history (None = not navigating)
    pub history_pos: Option<usize>,

    /// Saved input when entering history mode
    pub history_saved_input: Option<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(history: Vec<String>) -> Self {
        let mut state = Self::new();
        state.history = history;
        state.trim_history();
        state
    }

    /// Send the current input through `transport`.
    ///
    /// The text is trimmed; blank input forwards nothing. When the transport
    /// is not ready the submission is dropped without queueing.
    pub fn submit<T: ChatTransport + ?Sized>(&mut self, transport: &mut T) -> SubmitOutcome {
        let text = self.message_input.trim().to_string();
        if text.is_empty() {
            return SubmitOutcome::Empty;
        }
        if !transport.is_ready() {
            tracing::warn!("transport is not open, message not sent");
            return SubmitOutcome::NotReady;
        }
        if let Err(e) = transport.send_chat(text.clone()) {
            tracing::warn!(error = %e, "message not sent");
            return SubmitOutcome::NotReady;
        }

        self.history.push(text.clone());
        self.trim_history();
        self.reset_navigation();
        self.message_input.clear();
        SubmitOutcome::Sent(text)
    }

    /// Step back through history (Up arrow).
    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        match self.history_pos {
            None => {
                // store current text to restore if user navigates back
                self.history_saved_input = Some(self.message_input.clone());
                self.history_pos = Some(self.history.len() - 1);
            }
            Some(pos) if pos > 0 => self.history_pos = Some(pos - 1),
            Some(_) => {}
        }
        if let Some(h) = self.history_pos.and_then(|pos| self.history.get(pos)) {
            self.message_input = h.clone();
        }
    }

    /// Step forward through history (Down arrow); past the end restores the draft.
    pub fn history_down(&mut self) {
        let Some(pos) = self.history_pos else {
            return;
        };
        if pos + 1 < self.history.len() {
            self.history_pos = Some(pos + 1);
            self.message_input = self.history[pos + 1].clone();
        } else {
            self.history_pos = None;
            self.message_input = self.history_saved_input.take().unwrap_or_default();
        }
    }

    /// Esc: drop the draft and leave history navigation.
    pub fn cancel(&mut self) {
        self.message_input.clear();
        self.reset_navigation();
    }

    fn reset_navigation(&mut self) {
        self.history_pos = None;
        self.history_saved_input = None;
    }

    fn trim_history(&mut self) {
        if self.history.len() > MAX_HISTORY {
            let excess = self.history.len() - MAX_HISTORY;
            self.history.drain(0..excess);
        }
    }
}
