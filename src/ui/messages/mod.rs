//! Chat bubble rendering for the central panel.

mod format;
mod render;

pub use render::render_messages;
