//! Color themes and styling utilities for the chat client.
//!
//! Surfaces go from the app background (`surface[0]`) up to dialogs
//! (`surface[2]`). Bubbles have three variants: the local user's own
//! messages, everyone else's, and relay-reported errors.

use eframe::egui::{self, Color32};

/// Theme with semantic colors and bubble variants
#[derive(Clone, Debug)]
pub struct ChatTheme {
    pub name: String,
    pub surface: [Color32; 3],
    pub accent: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub border: Color32,
    pub self_bubble: Color32,
    pub self_bubble_text: Color32,
    pub other_bubble: Color32,
    pub error_bubble: Color32,
}

impl ChatTheme {
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            surface: [
                Color32::from_rgb(10, 10, 15),  // App background
                Color32::from_rgb(19, 19, 26),  // Panels
                Color32::from_rgb(56, 56, 74),  // Dialogs
            ],
            accent: Color32::from_rgb(88, 101, 242),
            success: Color32::from_rgb(67, 181, 129),
            warning: Color32::from_rgb(250, 166, 26),
            error: Color32::from_rgb(240, 71, 71),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(185, 187, 190),
            text_muted: Color32::from_rgb(114, 118, 125),
            border: Color32::from_rgb(47, 49, 54),
            self_bubble: Color32::from_rgb(71, 82, 196),
            self_bubble_text: Color32::WHITE,
            other_bubble: Color32::from_rgb(46, 46, 62),
            error_bubble: Color32::from_rgb(92, 32, 36),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            surface: [
                Color32::from_rgb(255, 255, 255),
                Color32::from_rgb(242, 243, 245),
                Color32::from_rgb(227, 229, 232),
            ],
            accent: Color32::from_rgb(88, 101, 242),
            success: Color32::from_rgb(45, 125, 70),
            warning: Color32::from_rgb(200, 120, 0),
            error: Color32::from_rgb(216, 58, 58),
            text_primary: Color32::from_rgb(6, 6, 7),
            text_secondary: Color32::from_rgb(79, 86, 96),
            text_muted: Color32::from_rgb(128, 132, 142),
            border: Color32::from_rgb(220, 221, 222),
            self_bubble: Color32::from_rgb(88, 101, 242),
            self_bubble_text: Color32::WHITE,
            other_bubble: Color32::from_rgb(235, 237, 240),
            error_bubble: Color32::from_rgb(253, 226, 226),
        }
    }

    /// "light" picks the light theme; anything else is dark.
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        if self.name == "Light" {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        }
    }
}

const NICK_COLORS: [Color32; 12] = [
    Color32::from_rgb(231, 76, 60),
    Color32::from_rgb(230, 126, 34),
    Color32::from_rgb(241, 196, 15),
    Color32::from_rgb(46, 204, 113),
    Color32::from_rgb(26, 188, 156),
    Color32::from_rgb(52, 152, 219),
    Color32::from_rgb(155, 89, 182),
    Color32::from_rgb(233, 30, 99),
    Color32::from_rgb(0, 188, 212),
    Color32::from_rgb(139, 195, 74),
    Color32::from_rgb(255, 152, 0),
    Color32::from_rgb(121, 134, 203),
];

/// Stable color for a speaker name (FNV-1a over the bytes).
pub fn nick_color(nick: &str) -> Color32 {
    let mut hash: u64 = 1469598103934665603u64;
    for b in nick.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(1099511628211u64);
    }
    NICK_COLORS[(hash as usize) % NICK_COLORS.len()]
}

/// Apply app-wide spacing.
pub fn apply_app_style(ctx: &egui::Context) {
    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 5.0);
    });
}
