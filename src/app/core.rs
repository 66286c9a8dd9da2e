//! Core RelayChatApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver};
use std::thread;

use crate::backend::run_backend;
use crate::config::{save_settings, Settings};
use crate::dialog_manager::DialogManager;
use crate::input_state::InputState;
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::ClientState;
use crate::transport::BackendLink;
use crate::ui;
use crate::validation::{validate_display_name, validate_server_url};
use crate::wire::Framing;

pub struct RelayChatApp {
    // Chat log, renderer and connection status
    pub state: ClientState,

    // Connection settings (form inputs)
    pub server_input: String,
    pub name: String,
    pub framing: Framing,

    // Backend communication
    pub link: BackendLink,
    pub event_rx: Receiver<GuiEvent>,

    // Message composition and history
    pub input: InputState,

    pub theme: String,
    pub show_system_log: bool,

    pub dialogs: DialogManager,
}

impl RelayChatApp {
    pub(super) fn get_theme(&self) -> ui::theme::ChatTheme {
        ui::theme::ChatTheme::by_name(&self.theme)
    }

    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let theme = ui::theme::ChatTheme::by_name(&settings.theme);
        cc.egui_ctx.set_visuals(theme.visuals());
        ui::theme::apply_app_style(&cc.egui_ctx);

        Self::with_settings(settings)
    }

    /// Build the app and spawn its backend thread. A valid saved name
    /// connects straight away; otherwise the name prompt opens first.
    pub fn with_settings(settings: Settings) -> Self {
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        thread::spawn(move || {
            run_backend(action_rx, event_tx);
        });

        let name = validate_display_name(&settings.name).unwrap_or_default();

        let mut app = Self {
            state: ClientState::new(&name),
            server_input: settings.server_url,
            name,
            framing: settings.framing,
            link: BackendLink::new(action_tx),
            event_rx,
            input: InputState::with_history(settings.history),
            theme: settings.theme,
            show_system_log: false,
            dialogs: DialogManager::new(),
        };

        if app.name.is_empty() {
            app.dialogs.open_name_prompt("");
        } else {
            app.do_connect();
        }
        app
    }

    pub(super) fn settings(&self) -> Settings {
        Settings {
            server_url: self.server_input.clone(),
            name: self.name.clone(),
            framing: self.framing,
            theme: self.theme.clone(),
            history: self.input.history.clone(),
        }
    }

    /// Adopt a new display name and (re)connect under it.
    pub(super) fn set_name(&mut self, name: String) {
        self.state.renderer.set_local_user(&name);
        self.state.push_system(format!("Name set to {}", name));
        self.name = name;
        self.do_connect();
    }

    /// Open the relay connection using the current inputs.
    pub(super) fn do_connect(&mut self) {
        if self.name.is_empty() {
            self.dialogs.open_name_prompt("");
            return;
        }
        let url = match validate_server_url(&self.server_input) {
            Ok(url) => url,
            Err(e) => {
                self.state.push_system(format!("⚠ {}", e));
                self.state.push_status(format!("Error: {}", e));
                return;
            }
        };
        if let Err(e) = self.link.connect(url.as_str(), &self.name, self.framing) {
            tracing::error!(error = %e, "failed to reach backend");
            self.state.push_system(format!("⚠ Error: {}", e));
        }
    }

    pub(super) fn do_disconnect(&mut self) {
        if let Err(e) = self.link.disconnect() {
            tracing::error!(error = %e, "failed to reach backend");
        }
    }
}

impl Drop for RelayChatApp {
    fn drop(&mut self) {
        // Persist settings on exit
        if let Err(e) = save_settings(&self.settings()) {
            tracing::warn!(error = %e, "failed to save settings");
        }
    }
}
