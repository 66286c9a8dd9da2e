//! Grouped bubble rendering.
//!
//! Every group carries its speaker's name above the first bubble. The local
//! user's groups hug the right edge with the name in the accent color; other
//! speakers sit on the left in their nick color.

use eframe::egui::{self, Color32};

use crate::buffer::{BubbleKind, ChatLog, MessageGroup};
use crate::ui::theme::{self, ChatTheme};

use super::format::{plain_text, render_markup};

/// Fraction of the panel width a bubble may take
const BUBBLE_WIDTH_RATIO: f32 = 0.7;

/// Render the chat log. Scrolls to the newest bubble when the log asks.
pub fn render_messages(ui: &mut egui::Ui, chat_log: &mut ChatLog, theme: &ChatTheme) {
    let scroll_requested = chat_log.take_scroll_request();

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(8.0);

            if chat_log.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(
                        egui::RichText::new("No messages yet")
                            .size(13.0)
                            .color(theme.text_muted),
                    );
                });
            }

            let max_width = ui.available_width() * BUBBLE_WIDTH_RATIO;
            for group in chat_log.groups() {
                render_group(ui, group, max_width, theme);
            }

            ui.add_space(8.0);
            if scroll_requested {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
            }
        });
}

/// Name tag text and color for a group header.
fn speaker_label(group: &MessageGroup, theme: &ChatTheme) -> (String, Color32) {
    let color = if group.self_styled {
        theme.accent
    } else {
        theme::nick_color(&group.speaker)
    };
    (plain_text(&group.speaker), color)
}

fn render_group(ui: &mut egui::Ui, group: &MessageGroup, max_width: f32, theme: &ChatTheme) {
    ui.add_space(10.0);

    let align = if group.self_styled {
        egui::Align::Max
    } else {
        egui::Align::Min
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        ui.spacing_mut().item_spacing.y = 3.0;

        let (label, color) = speaker_label(group, theme);
        let row = if group.self_styled {
            egui::Layout::right_to_left(egui::Align::Min)
        } else {
            egui::Layout::left_to_right(egui::Align::Min)
        };
        ui.with_layout(row, |ui| {
            ui.add_space(12.0);
            ui.label(egui::RichText::new(label).size(12.0).strong().color(color));
        });

        for bubble in &group.bubbles {
            let (fill, text_color) = match (bubble.kind, group.self_styled) {
                (BubbleKind::Error, _) => (theme.error_bubble, theme.error),
                (BubbleKind::Chat, true) => (theme.self_bubble, theme.self_bubble_text),
                (BubbleKind::Chat, false) => (theme.other_bubble, theme.text_primary),
            };

            let response = egui::Frame::new()
                .fill(fill)
                .corner_radius(12.0)
                .inner_margin(egui::Margin::symmetric(12, 7))
                .outer_margin(egui::Margin::symmetric(12, 0))
                .show(ui, |ui| {
                    ui.set_max_width(max_width);
                    render_markup(ui, &bubble.text, text_color, 14.0);
                })
                .response;
            response.on_hover_text(&bubble.timestamp);
        }
    });
}
