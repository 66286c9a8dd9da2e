//! Top toolbar rendering with connection controls.

use eframe::egui::{self, Color32, RichText, Stroke};

use crate::ui::theme::ChatTheme;

/// Actions that the toolbar can request
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarAction {
    Connect,
    Disconnect,
    /// Open the new chat dialog
    NewChat,
    /// Open the name prompt to rename
    ChangeName,
    ToggleSystemLog,
}

/// Render the top toolbar. Returns the action the user requested, if any.
pub fn render_toolbar(
    ui: &mut egui::Ui,
    server_input: &mut String,
    name: &str,
    peer: Option<&str>,
    is_connected: bool,
    theme: &ChatTheme,
) -> Option<ToolbarAction> {
    let mut toolbar_action: Option<ToolbarAction> = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        ui.spacing_mut().button_padding = egui::vec2(8.0, 4.0);

        if is_connected {
            if ui.button("Disconnect").clicked() {
                toolbar_action = Some(ToolbarAction::Disconnect);
            }
        } else {
            let response = ui.add(
                egui::TextEdit::singleline(server_input)
                    .hint_text("ws://host:port/ws")
                    .desired_width(220.0),
            );
            if ui.button("Connect").clicked()
                || (response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)))
            {
                toolbar_action = Some(ToolbarAction::Connect);
            }
        }

        ui.separator();

        let name_label = if name.is_empty() { "(no name)" } else { name };
        if ui
            .button(name_label)
            .on_hover_text("Change your name")
            .clicked()
        {
            toolbar_action = Some(ToolbarAction::ChangeName);
        }

        if ui.button("New Chat").clicked() {
            toolbar_action = Some(ToolbarAction::NewChat);
        }

        if let Some(peer) = peer {
            ui.label(
                RichText::new(format!("with {}", peer))
                    .color(theme.text_secondary)
                    .small(),
            );
        }

        // Right side - system log toggle and connection status indicator
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
            let center = rect.center();
            if is_connected {
                // Green glowing dot for connected
                ui.painter().circle_filled(center, 6.0, Color32::from_rgba_unmultiplied(34, 197, 94, 40));
                ui.painter().circle_filled(center, 4.0, Color32::from_rgb(34, 197, 94));
                ui.label(
                    RichText::new(server_input.as_str())
                        .color(theme.text_secondary)
                        .small(),
                );
            } else {
                ui.painter().circle_stroke(center, 4.0, Stroke::new(1.5, theme.text_muted));
            }

            if ui.small_button("Log").on_hover_text("Toggle system log (F2)").clicked() {
                toolbar_action = Some(ToolbarAction::ToggleSystemLog);
            }
        });
    });

    toolbar_action
}
