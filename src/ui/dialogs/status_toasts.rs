//! Status toasts - short-lived notices in the top-right corner.

use eframe::egui;
use std::time::Instant;

use crate::ui::theme::ChatTheme;

/// Render status toasts, newest first.
pub fn render_status_toasts(
    ctx: &egui::Context,
    status_messages: &[(String, Instant)],
    theme: &ChatTheme,
) {
    if status_messages.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("status_toast_area"))
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 46.0]) // Below the toolbar
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(theme.surface[2])
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .stroke(egui::Stroke::new(1.0, theme.border))
                .show(ui, |ui| {
                    for (msg, _) in status_messages.iter().rev() {
                        let color = if msg.starts_with("Error") {
                            theme.error
                        } else if msg.starts_with("Disconnected") {
                            theme.warning
                        } else {
                            theme.success
                        };
                        ui.label(egui::RichText::new(msg).color(color));
                    }
                });
        });
}
