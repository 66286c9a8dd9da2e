//! Dialog management for centralized dialog state and rendering.

use eframe::egui::Context;

use crate::ui::{DialogAction, NamePromptDialog, NewChatDialog};

/// Manages all application dialogs in one place.
///
/// Uses the Option<Dialog> pattern where None = closed, Some = open.
#[derive(Default)]
pub struct DialogManager {
    pub name_prompt: Option<NamePromptDialog>,
    pub new_chat: Option<NewChatDialog>,
}

impl DialogManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the name prompt prefilled with the current name.
    pub fn open_name_prompt(&mut self, current_name: &str) {
        self.name_prompt = Some(NamePromptDialog::new(current_name));
    }

    pub fn open_new_chat(&mut self) {
        self.new_chat = Some(NewChatDialog::new());
    }

    /// Whether a dialog that must be answered first is showing.
    pub fn blocks_input(&self) -> bool {
        self.name_prompt
            .as_ref()
            .is_some_and(|d| d.is_open() && d.is_required())
    }

    /// Render all dialogs and collect their actions.
    pub fn render(&mut self, ctx: &Context) -> Vec<DialogAction> {
        let mut actions: Vec<DialogAction> = Vec::new();

        if let Some(dialog) = self.name_prompt.as_mut() {
            actions.extend(dialog.render(ctx));
            if !dialog.is_open() {
                self.name_prompt = None;
            }
        }

        if let Some(dialog) = self.new_chat.as_mut() {
            actions.extend(dialog.render(ctx));
            if !dialog.is_open() {
                self.new_chat = None;
            }
        }

        actions
    }
}
