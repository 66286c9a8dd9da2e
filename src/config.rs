use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::wire::Framing;

// Default configuration
pub const DEFAULT_SERVER_URL: &str = "ws://127.0.0.1:8000/ws";
pub const DEFAULT_THEME: &str = "dark";

/// Persisted client settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    pub server_url: String,
    /// Last display name; empty means ask at startup
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub framing: Framing,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub history: Vec<String>,
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            name: String::new(),
            framing: Framing::default(),
            theme: default_theme(),
            history: Vec::new(),
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("net", "relaychat", "relaychat-client")?;
    Some(proj.config_dir().join("settings.json"))
}

/// Load settings from the platform config dir, falling back to defaults.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        return Settings::default();
    };
    match load_settings_from(&path) {
        Ok(settings) => settings,
        Err(e) => {
            if path.exists() {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable settings");
            }
            Settings::default()
        }
    }
}

pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    if let Some(path) = settings_path() {
        save_settings_to(settings, &path)?;
    }
    Ok(())
}

pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let data = serde_json::to_string_pretty(settings)?;
    fs::write(path, data)?;
    Ok(())
}
