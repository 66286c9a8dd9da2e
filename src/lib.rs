//! RelayChat client library.
//!
//! A desktop chat client for WebSocket relays: the egui front end groups
//! incoming messages into speaker bubbles, and a backend thread owns the
//! single relay connection.

pub mod app;
pub mod backend;
pub mod buffer;
pub mod cli;
pub mod config;
pub mod dialog_manager;
pub mod error;
pub mod events;
pub mod grouping;
pub mod input_state;
pub mod protocol;
pub mod renderer;
pub mod state;
pub mod transport;
pub mod ui;
pub mod validation;
pub mod wire;

#[cfg(test)]
mod backend_tests;
