//! Panel rendering for RelayChatApp

mod input;
mod panels;
