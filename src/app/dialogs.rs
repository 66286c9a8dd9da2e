//! Dialog rendering orchestration

use eframe::egui;

use super::RelayChatApp;
use crate::ui;
use crate::ui::DialogAction;

impl RelayChatApp {
    /// Render all dialogs and handle their actions
    pub(super) fn render_dialogs(&mut self, ctx: &egui::Context) {
        let theme = self.get_theme();
        ui::render_status_toasts(ctx, &self.state.status_messages, &theme);

        for action in self.dialogs.render(ctx) {
            self.handle_dialog_action(action);
        }
    }

    fn handle_dialog_action(&mut self, action: DialogAction) {
        match action {
            DialogAction::SetName(name) => self.set_name(name),
            DialogAction::StartChat(target) => self.start_chat(&target),
        }
    }

    /// New Chat: ask the relay (when connected) and clear the log locally.
    pub(super) fn start_chat(&mut self, target: &str) {
        if let Err(e) = self.link.new_chat(target) {
            tracing::debug!(error = %e, "new chat not sent to relay");
        }
        self.state.new_chat();
        self.state.push_system(format!("New chat with {}", target));
    }
}
