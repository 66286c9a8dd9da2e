//! Toolbar, chat panel and system log rendering

use eframe::egui;

use crate::app::RelayChatApp;
use crate::ui;
use crate::ui::ToolbarAction;

impl RelayChatApp {
    pub(in crate::app) fn render_toolbar(&mut self, ctx: &egui::Context) {
        let theme = self.get_theme();

        let action = egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::new()
                    .fill(theme.surface[1])
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .stroke(egui::Stroke::new(1.0, theme.border)),
            )
            .show(ctx, |ui| {
                ui::render_toolbar(
                    ui,
                    &mut self.server_input,
                    &self.name,
                    self.state.peer.as_deref(),
                    self.state.is_connected,
                    &theme,
                )
            })
            .inner;

        match action {
            Some(ToolbarAction::Connect) => self.do_connect(),
            Some(ToolbarAction::Disconnect) => self.do_disconnect(),
            Some(ToolbarAction::NewChat) => self.dialogs.open_new_chat(),
            Some(ToolbarAction::ChangeName) => self.dialogs.open_name_prompt(&self.name),
            Some(ToolbarAction::ToggleSystemLog) => self.show_system_log = !self.show_system_log,
            None => {}
        }
    }

    pub(in crate::app) fn render_central_panel(&mut self, ctx: &egui::Context) {
        let theme = self.get_theme();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.surface[0]))
            .show(ctx, |ui| {
                ui::render_messages(ui, &mut self.state.chat_log, &theme);
            });
    }

    /// Collapsible diagnostics panel (F2)
    pub(in crate::app) fn render_system_panel(&mut self, ctx: &egui::Context) {
        let theme = self.get_theme();

        egui::SidePanel::right("system_log")
            .resizable(true)
            .default_width(260.0)
            .frame(
                egui::Frame::new()
                    .fill(theme.surface[1])
                    .inner_margin(egui::Margin::symmetric(8, 8))
                    .stroke(egui::Stroke::new(1.0, theme.border)),
            )
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("SYSTEM")
                        .size(11.0)
                        .strong()
                        .color(theme.text_muted),
                );
                ui.separator();
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in &self.state.system_log {
                            ui.label(
                                egui::RichText::new(line)
                                    .size(12.0)
                                    .color(theme.text_secondary),
                            );
                        }
                    });
            });
    }
}
