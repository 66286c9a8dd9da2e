//! Modal dialogs and windows - self-contained dialog components.
//!
//! Each dialog owns its editing state and returns a `DialogAction`
//! instead of mutating external state directly. Dialogs live in
//! `DialogManager` as `Option<Dialog>`: `None` is closed.

mod actions;
mod name_prompt;
mod new_chat;
mod status_toasts;

pub use actions::DialogAction;
pub use name_prompt::NamePromptDialog;
pub use new_chat::NewChatDialog;
pub use status_toasts::render_status_toasts;
