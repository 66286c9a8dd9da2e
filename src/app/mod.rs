//! Application module structure for RelayChatApp
//!
//! - `core`: RelayChatApp struct and initialization
//! - `events`: Event processing from the backend
//! - `update`: Main update loop and global shortcuts
//! - `dialogs`: Dialog rendering and dialog actions
//! - `ui::panels`: Toolbar, chat panel and system log
//! - `ui::input`: Message input panel with history

pub mod core;
pub mod dialogs;
pub mod events;
pub mod update;
pub mod ui;

pub use core::RelayChatApp;
