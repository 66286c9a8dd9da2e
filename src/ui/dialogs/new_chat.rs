//! New chat dialog - names the user to start a conversation with.

use eframe::egui;

use super::DialogAction;

pub struct NewChatDialog {
    pub open: bool,
    pub target_input: String,
}

impl Default for NewChatDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl NewChatDialog {
    pub fn new() -> Self {
        Self {
            open: true,
            target_input: String::new(),
        }
    }

    fn confirm(&mut self) -> Option<DialogAction> {
        let target = self.target_input.trim();
        if target.is_empty() {
            return None;
        }
        self.open = false;
        Some(DialogAction::StartChat(target.to_string()))
    }

    /// Render the dialog. Returns `Some(DialogAction::StartChat)` on confirm.
    pub fn render(&mut self, ctx: &egui::Context) -> Option<DialogAction> {
        if !self.open {
            return None;
        }

        let mut action = None;
        let mut still_open = true;

        egui::Window::new("New Chat")
            .open(&mut still_open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Enter the name of the user to chat with:");

                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.target_input)
                        .hint_text("user name")
                        .desired_width(220.0),
                );
                response.request_focus();

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    let can_start = !self.target_input.trim().is_empty();
                    if ui.add_enabled(can_start, egui::Button::new("Start")).clicked() {
                        action = self.confirm();
                    }
                    if ui.button("Cancel").clicked() {
                        self.open = false;
                    }
                });

                if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    action = self.confirm();
                }
                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    self.open = false;
                }
            });

        if !still_open {
            self.open = false;
        }

        action
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
