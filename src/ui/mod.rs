//! UI rendering modules for the RelayChat client.
//!
//! - `toolbar`: Top toolbar with connection controls
//! - `messages`: Grouped chat bubbles
//! - `dialogs`: Name prompt, new chat and toasts
//! - `theme`: Color schemes and styling utilities

mod dialogs;
mod messages;
pub mod theme;
mod toolbar;

pub use dialogs::*;
pub use messages::*;
pub use toolbar::*;
