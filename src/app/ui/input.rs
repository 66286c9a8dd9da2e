//! Message input panel with history

use eframe::egui;

use crate::app::RelayChatApp;
use crate::input_state::SubmitOutcome;

impl RelayChatApp {
    /// Render the input panel at the bottom of the window
    pub(in crate::app) fn render_input_panel(&mut self, ctx: &egui::Context) {
        let theme = self.get_theme();
        let blocked = self.dialogs.blocks_input();
        let mut submit = false;

        egui::TopBottomPanel::bottom("input_panel")
            .frame(
                egui::Frame::new()
                    .fill(theme.surface[1])
                    .inner_margin(egui::Margin::symmetric(12, 10))
                    .stroke(egui::Stroke::new(1.0, theme.border)),
            )
            .show(ctx, |ui| {
                ui.add_enabled_ui(!blocked, |ui| {
                    ui.horizontal(|ui| {
                        let send_clicked = ui
                            .with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                let send = ui.button("Send").clicked();

                                let input_frame = egui::Frame::new()
                                    .fill(theme.surface[2])
                                    .corner_radius(6.0)
                                    .inner_margin(egui::Margin::symmetric(10, 8));

                                input_frame.show(ui, |ui| {
                                    let response = ui.add(
                                        egui::TextEdit::multiline(&mut self.input.message_input)
                                            .desired_rows(1)
                                            .desired_width(ui.available_width())
                                            .frame(false)
                                            .hint_text("Type a message... (Enter to send)"),
                                    );

                                    // Enter sends; Shift+Enter inserts a newline
                                    if response.has_focus() {
                                        let (enter, up, down, esc) = ui.input(|i| {
                                            (
                                                i.key_pressed(egui::Key::Enter) && !i.modifiers.shift,
                                                i.key_pressed(egui::Key::ArrowUp),
                                                i.key_pressed(egui::Key::ArrowDown),
                                                i.key_pressed(egui::Key::Escape),
                                            )
                                        });
                                        if enter {
                                            // The text edit has already inserted the newline
                                            while self.input.message_input.ends_with('\n') {
                                                self.input.message_input.pop();
                                            }
                                            submit = true;
                                        }
                                        if up {
                                            self.input.history_up();
                                        }
                                        if down {
                                            self.input.history_down();
                                        }
                                        if esc {
                                            self.input.cancel();
                                        }
                                    }

                                    // Keep the cursor in the box after sending
                                    if submit {
                                        response.request_focus();
                                    }
                                });
                                send
                            })
                            .inner;
                        submit |= send_clicked;
                    });
                });
            });

        if submit {
            self.submit_input();
        }
    }

    fn submit_input(&mut self) {
        match self.input.submit(&mut self.link) {
            SubmitOutcome::Sent(text) => {
                tracing::debug!(len = text.len(), "message sent");
            }
            SubmitOutcome::NotReady => {
                self.state.push_system("⚠ Not connected: message not sent");
                self.state.push_status("Error: not connected");
            }
            SubmitOutcome::Empty => {}
        }
    }
}
