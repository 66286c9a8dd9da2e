//! Message renderer: applies grouping plans to a visual log.
//!
//! The renderer owns its [`RenderState`]; there is no ambient state. Every
//! call to [`MessageRenderer::handle`] runs to completion on the UI thread,
//! so events are applied strictly in arrival order.

use chrono::Local;

use crate::buffer::{Bubble, VisualLog};
use crate::grouping::{self, RenderState, RenderStep};
use crate::protocol::ChatEvent;

/// What `handle` did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleOutcome {
    /// A bubble was appended, possibly in a new group
    Rendered { new_group: bool },
    /// A control event cleared the log and carried nothing to render
    Cleared,
    /// Missing sender or message; nothing changed
    Discarded,
}

#[derive(Debug, Clone, Default)]
pub struct MessageRenderer {
    state: RenderState,
    local_user: String,
}

impl MessageRenderer {
    pub fn new(local_user: impl Into<String>) -> Self {
        Self {
            state: RenderState::default(),
            local_user: local_user.into(),
        }
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn local_user(&self) -> &str {
        &self.local_user
    }

    /// Only affects groups started after the change.
    pub fn set_local_user(&mut self, name: impl Into<String>) {
        self.local_user = name.into();
    }

    /// Render one inbound event into `log`.
    pub fn handle<L: VisualLog + ?Sized>(&mut self, event: &ChatEvent, log: &mut L) -> HandleOutcome {
        let plan = grouping::plan(&self.state, event, &self.local_user);

        if !plan.accepted && !plan.clears() {
            tracing::debug!(
                sender = ?event.sender,
                has_message = event.message.is_some(),
                "discarding chat event without sender or message"
            );
            return HandleOutcome::Discarded;
        }

        let outcome = if plan.accepted {
            HandleOutcome::Rendered {
                new_group: plan.starts_group(),
            }
        } else {
            HandleOutcome::Cleared
        };

        let timestamp = Local::now().format("%H:%M:%S").to_string();
        for step in plan.steps {
            match step {
                RenderStep::Clear => log.clear(),
                RenderStep::StartGroup {
                    id,
                    speaker,
                    self_styled,
                } => log.start_group(id, &speaker, self_styled),
                RenderStep::AppendBubble { group, text, kind } => log.append_bubble(
                    group,
                    Bubble {
                        text,
                        kind,
                        timestamp: timestamp.clone(),
                    },
                ),
                RenderStep::ScrollToBottom => log.scroll_to_bottom(),
            }
        }
        self.state = plan.next;
        outcome
    }

    /// Drop every group and forget the last speaker.
    pub fn clear<L: VisualLog + ?Sized>(&mut self, log: &mut L) {
        log.clear();
        self.state = RenderState::default();
    }
}
