use crate::grouping::GroupId;

/// Maximum groups to keep in the log before trimming
const MAX_LOG_GROUPS: usize = 500;
/// Number of oldest groups to remove when trimming
const GROUP_TRIM_COUNT: usize = 100;

/// Visual variant of a bubble
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleKind {
    Chat,
    /// Relay-reported error
    Error,
}

/// One rendered message inside a group. `text` may carry inline markup.
#[derive(Clone, Debug)]
pub struct Bubble {
    pub text: String,
    pub kind: BubbleKind,
    pub timestamp: String,
}

/// A visually contiguous run of bubbles from one speaker
#[derive(Clone, Debug)]
pub struct MessageGroup {
    pub id: GroupId,
    pub speaker: String,
    /// Rendered with the local user's variant
    pub self_styled: bool,
    pub bubbles: Vec<Bubble>,
}

/// The surface the renderer writes to.
pub trait VisualLog {
    fn start_group(&mut self, id: GroupId, speaker: &str, self_styled: bool);
    fn append_bubble(&mut self, group: GroupId, bubble: Bubble);
    fn clear(&mut self);
    fn scroll_to_bottom(&mut self);
}

/// Append-only chat log shown in the central panel.
#[derive(Default, Clone, Debug)]
pub struct ChatLog {
    groups: Vec<MessageGroup>,
    scroll_pending: bool,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[MessageGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn bubble_count(&self) -> usize {
        self.groups.iter().map(|g| g.bubbles.len()).sum()
    }

    /// Consume a pending scroll request (set after every append).
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }
}

impl VisualLog for ChatLog {
    fn start_group(&mut self, id: GroupId, speaker: &str, self_styled: bool) {
        self.groups.push(MessageGroup {
            id,
            speaker: speaker.to_string(),
            self_styled,
            bubbles: Vec::new(),
        });
        // Trim old groups if the log gets too large; the open group is last
        if self.groups.len() > MAX_LOG_GROUPS {
            self.groups.drain(0..GROUP_TRIM_COUNT);
        }
    }

    fn append_bubble(&mut self, group: GroupId, bubble: Bubble) {
        match self.groups.iter_mut().rev().find(|g| g.id == group) {
            Some(target) => target.bubbles.push(bubble),
            None => tracing::warn!(?group, "bubble for unknown group dropped"),
        }
    }

    fn clear(&mut self) {
        self.groups.clear();
        self.scroll_pending = false;
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_pending = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bubble(text: &str) -> Bubble {
        Bubble {
            text: text.into(),
            kind: BubbleKind::Chat,
            timestamp: "12:00:00".into(),
        }
    }

    #[test]
    fn test_append_to_group() {
        let mut log = ChatLog::new();
        log.start_group(GroupId(0), "alice", true);
        log.append_bubble(GroupId(0), bubble("hi"));
        log.append_bubble(GroupId(0), bubble("there"));

        assert_eq!(log.groups().len(), 1);
        assert_eq!(log.bubble_count(), 2);
        assert!(log.groups()[0].self_styled);
    }

    #[test]
    fn test_unknown_group_is_ignored() {
        let mut log = ChatLog::new();
        log.start_group(GroupId(0), "alice", false);
        log.append_bubble(GroupId(7), bubble("lost"));
        assert_eq!(log.bubble_count(), 0);
    }

    #[test]
    fn test_scroll_request_is_consumed() {
        let mut log = ChatLog::new();
        assert!(!log.take_scroll_request());
        log.scroll_to_bottom();
        assert!(log.take_scroll_request());
        assert!(!log.take_scroll_request());
    }

    #[test]
    fn test_trim_keeps_open_group() {
        let mut log = ChatLog::new();
        for i in 0..(MAX_LOG_GROUPS as u64 + 1) {
            log.start_group(GroupId(i), if i % 2 == 0 { "a" } else { "b" }, false);
        }
        assert!(log.groups().len() <= MAX_LOG_GROUPS);

        let open = GroupId(MAX_LOG_GROUPS as u64);
        log.append_bubble(open, bubble("still here"));
        assert_eq!(log.groups().last().map(|g| g.bubbles.len()), Some(1));
    }

    #[test]
    fn test_clear() {
        let mut log = ChatLog::new();
        log.start_group(GroupId(0), "alice", false);
        log.scroll_to_bottom();
        log.clear();
        assert!(log.is_empty());
        assert!(!log.take_scroll_request());
    }
}
