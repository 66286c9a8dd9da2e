//! Pure grouping decisions for the chat log.
//!
//! [`plan`] looks at the current [`RenderState`] and one [`ChatEvent`] and
//! returns the next state plus the steps a [`VisualLog`](crate::buffer::VisualLog)
//! must apply. Nothing here touches the UI, which keeps the grouping rules
//! testable without a surface.

use crate::buffer::BubbleKind;
use crate::protocol::{ChatEvent, EventKind};

/// Identifies a message group for the lifetime of one log (until cleared).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub u64);

/// Grouping state: who spoke last and which group is still open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderState {
    pub last_speaker: Option<String>,
    pub current_group: Option<GroupId>,
    next_group_id: u64,
}

impl RenderState {
    /// True when there is no open group.
    pub fn is_idle(&self) -> bool {
        self.last_speaker.is_none() && self.current_group.is_none()
    }
}

/// One mutation of the visual log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderStep {
    Clear,
    StartGroup {
        id: GroupId,
        speaker: String,
        self_styled: bool,
    },
    AppendBubble {
        group: GroupId,
        text: String,
        kind: BubbleKind,
    },
    ScrollToBottom,
}

/// Result of planning one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub next: RenderState,
    pub steps: Vec<RenderStep>,
    /// False when the event carried nothing renderable
    pub accepted: bool,
}

impl Plan {
    pub fn starts_group(&self) -> bool {
        self.steps
            .iter()
            .any(|s| matches!(s, RenderStep::StartGroup { .. }))
    }

    pub fn clears(&self) -> bool {
        self.steps.iter().any(|s| matches!(s, RenderStep::Clear))
    }
}

/// Decide how `event` changes the log.
///
/// Control events clear first and then render whatever they carry. An event
/// missing its sender or message yields no steps (beyond that clear) and
/// leaves the state untouched.
pub fn plan(state: &RenderState, event: &ChatEvent, local_user: &str) -> Plan {
    let mut steps = Vec::new();
    let mut next = state.clone();

    if event.kind == EventKind::Control {
        steps.push(RenderStep::Clear);
        next = RenderState::default();
    }

    let Some((sender, message)) = event.parts() else {
        return Plan {
            next,
            steps,
            accepted: false,
        };
    };

    let group = match (next.last_speaker.as_deref(), next.current_group) {
        (Some(last), Some(open)) if last == sender => open,
        _ => {
            let id = GroupId(next.next_group_id);
            next.next_group_id += 1;
            steps.push(RenderStep::StartGroup {
                id,
                speaker: sender.to_string(),
                self_styled: sender == local_user,
            });
            next.last_speaker = Some(sender.to_string());
            next.current_group = Some(id);
            id
        }
    };

    let kind = match event.kind {
        EventKind::Error => BubbleKind::Error,
        EventKind::Chat | EventKind::Control => BubbleKind::Chat,
    };
    steps.push(RenderStep::AppendBubble {
        group,
        text: message.to_string(),
        kind,
    });
    steps.push(RenderStep::ScrollToBottom);

    Plan {
        next,
        steps,
        accepted: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: &[ChatEvent], local: &str) -> (RenderState, Vec<RenderStep>) {
        let mut state = RenderState::default();
        let mut all = Vec::new();
        for event in events {
            let plan = plan(&state, event, local);
            state = plan.next;
            all.extend(plan.steps);
        }
        (state, all)
    }

    fn group_starts(steps: &[RenderStep]) -> usize {
        steps
            .iter()
            .filter(|s| matches!(s, RenderStep::StartGroup { .. }))
            .count()
    }

    #[test]
    fn test_first_event_starts_group() {
        let p = plan(&RenderState::default(), &ChatEvent::chat("alice", "hi"), "alice");
        assert!(p.accepted);
        assert_eq!(
            p.steps,
            vec![
                RenderStep::StartGroup {
                    id: GroupId(0),
                    speaker: "alice".into(),
                    self_styled: true,
                },
                RenderStep::AppendBubble {
                    group: GroupId(0),
                    text: "hi".into(),
                    kind: BubbleKind::Chat,
                },
                RenderStep::ScrollToBottom,
            ]
        );
        assert_eq!(p.next.last_speaker.as_deref(), Some("alice"));
        assert_eq!(p.next.current_group, Some(GroupId(0)));
    }

    #[test]
    fn test_same_sender_appends() {
        let events: Vec<_> = (0..5)
            .map(|i| ChatEvent::chat("bob", format!("msg{}", i)))
            .collect();
        let (state, steps) = run(&events, "alice");
        assert_eq!(group_starts(&steps), 1);

        let appended: Vec<&str> = steps
            .iter()
            .filter_map(|s| match s {
                RenderStep::AppendBubble { group, text, .. } => {
                    assert_eq!(*group, GroupId(0));
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect();
        assert_eq!(appended, vec!["msg0", "msg1", "msg2", "msg3", "msg4"]);
        assert_eq!(state.current_group, Some(GroupId(0)));
    }

    #[test]
    fn test_alternating_senders_start_new_groups() {
        let events = [
            ChatEvent::chat("a", "1"),
            ChatEvent::chat("b", "2"),
            ChatEvent::chat("a", "3"),
        ];
        let (state, steps) = run(&events, "a");
        assert_eq!(group_starts(&steps), 3);
        assert_eq!(state.current_group, Some(GroupId(2)));
    }

    #[test]
    fn test_malformed_event_leaves_state() {
        let (state, _) = run(&[ChatEvent::chat("alice", "hi")], "alice");

        let no_sender = ChatEvent {
            sender: None,
            message: Some("x".into()),
            kind: EventKind::Chat,
        };
        let no_message = ChatEvent {
            sender: Some("bob".into()),
            message: None,
            kind: EventKind::Chat,
        };
        for event in [no_sender, no_message] {
            let p = plan(&state, &event, "alice");
            assert!(!p.accepted);
            assert!(p.steps.is_empty());
            assert_eq!(p.next, state);
        }
    }

    #[test]
    fn test_control_event_clears_then_renders() {
        let (state, _) = run(&[ChatEvent::chat("alice", "hi")], "alice");

        let bare = plan(&state, &ChatEvent::new_conversation(), "alice");
        assert!(!bare.accepted);
        assert_eq!(bare.steps, vec![RenderStep::Clear]);
        assert!(bare.next.is_idle());

        // A control event that carries a message renders it into a fresh group,
        // even when the sender matches the previous speaker.
        let carrying = ChatEvent {
            sender: Some("alice".into()),
            message: Some("fresh start".into()),
            kind: EventKind::Control,
        };
        let p = plan(&state, &carrying, "alice");
        assert!(p.accepted);
        assert!(p.clears());
        assert!(p.starts_group());
    }

    #[test]
    fn test_error_event_bubble_kind() {
        let p = plan(
            &RenderState::default(),
            &ChatEvent::error("<strong>ERROR</strong>", "You're not in a chat."),
            "alice",
        );
        assert!(p.steps.iter().any(|s| matches!(
            s,
            RenderStep::AppendBubble {
                kind: BubbleKind::Error,
                ..
            }
        )));
    }
}
