//! Event processing from backend

use super::RelayChatApp;
use crate::events;

impl RelayChatApp {
    /// Drain pending backend events into the session state.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            if let Some(ready) = events::process_single_event(&mut self.state, event) {
                self.link.set_ready(ready);
            }
        }
    }
}
