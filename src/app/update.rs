//! Main update loop and global shortcuts

use eframe::egui;
use std::time::Duration;

use super::RelayChatApp;

/// Seconds a status toast stays visible
const TOAST_SECS: u64 = 4;

impl eframe::App for RelayChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_events();

        // Global keyboard shortcuts (work even when input doesn't have focus)
        ctx.input(|i| {
            // Ctrl+N: New chat
            if i.modifiers.ctrl && i.key_pressed(egui::Key::N) {
                self.dialogs.open_new_chat();
            }
            // F2: Toggle system log
            if i.key_pressed(egui::Key::F2) {
                self.show_system_log = !self.show_system_log;
            }
        });

        // Request repaint to keep checking for events
        ctx.request_repaint_after(Duration::from_millis(100));
        self.state.purge_old_status_messages(TOAST_SECS);

        self.render_toolbar(ctx);
        if self.show_system_log {
            self.render_system_panel(ctx);
        }
        self.render_input_panel(ctx);
        self.render_central_panel(ctx);
        self.render_dialogs(ctx);
    }
}
