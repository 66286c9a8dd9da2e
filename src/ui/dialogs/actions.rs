//! Dialog action types - dialogs return actions instead of mutating state directly.

/// Actions that dialogs can return to the main application.
/// The app processes these in its update loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    /// Confirmed display name (already validated)
    SetName(String),

    /// Start a conversation with the named user
    StartChat(String),
}
