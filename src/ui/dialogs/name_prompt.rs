//! Name prompt - asks for the display name at startup and on rename.

use eframe::egui;

use super::DialogAction;
use crate::validation::validate_display_name;

/// Self-contained display name dialog state.
pub struct NamePromptDialog {
    pub open: bool,
    pub name_input: String,
    /// Name in use right now; empty at first start
    current_name: String,
    /// Validation message from the last confirm attempt
    pub error: Option<String>,
}

impl NamePromptDialog {
    pub fn new(current_name: &str) -> Self {
        Self {
            open: true,
            name_input: current_name.to_string(),
            current_name: current_name.to_string(),
            error: None,
        }
    }

    /// First start: there is no name to fall back on, so the dialog
    /// cannot be dismissed without entering one.
    pub fn is_required(&self) -> bool {
        self.current_name.is_empty()
    }

    /// Validate the input. Closes the dialog on success.
    pub fn confirm(&mut self) -> Option<DialogAction> {
        match validate_display_name(&self.name_input) {
            Ok(name) if name == self.current_name => {
                self.open = false;
                None
            }
            Ok(name) => {
                self.open = false;
                self.error = None;
                Some(DialogAction::SetName(name))
            }
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        if !self.is_required() {
            self.open = false;
        }
    }

    /// Render the dialog. Returns `Some(DialogAction::SetName)` on confirm.
    pub fn render(&mut self, ctx: &egui::Context) -> Option<DialogAction> {
        if !self.open {
            return None;
        }

        let mut action = None;
        let title = if self.is_required() {
            "Welcome"
        } else {
            "Change Name"
        };

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Enter your name:");

                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.name_input)
                        .hint_text("display name")
                        .desired_width(220.0),
                );
                response.request_focus();

                if let Some(err) = &self.error {
                    ui.colored_label(ui.visuals().error_fg_color, err);
                }

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        action = self.confirm();
                    }
                    if !self.is_required() && ui.button("Cancel").clicked() {
                        self.cancel();
                    }
                });

                if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    action = self.confirm();
                }
                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    self.cancel();
                }
            });

        action
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
