//! Configuration System
//!
//! Loads `config.toml` from the platform config directory (or an explicit
//! path). Every field has a default, so a missing file or a partial file is
//! fine; a file that does not parse is an error.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{DashError, Result};
use crate::i18n::Locale;
use crate::state::Theme;

pub const APP_DIR_NAME: &str = "studydash";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub locale: Locale,

    /// Terminal widths at or below this many columns count as narrow: picking
    /// a section from the sidebar also closes it.
    #[serde(default = "default_narrow_width")]
    pub narrow_width: u16,
}

fn default_narrow_width() -> u16 {
    100
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            locale: Locale::default(),
            narrow_width: default_narrow_width(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Overrides the locale's canned reply.
    #[serde(default)]
    pub canned_reply: Option<String>,
}

fn default_reply_delay_ms() -> u64 {
    500
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            canned_reply: None,
        }
    }
}

impl ChatConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file; defaults to `studydash.log` inside the data directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Directory holding logs and any state left by earlier versions.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::data_dir()
                .map(|d| d.join(APP_DIR_NAME))
                .ok_or(DashError::NoPlatformDir("data")),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR_NAME).join("config.toml"))
            .ok_or(DashError::NoPlatformDir("config"))
    }

    /// Missing file means defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text).map_err(|source| DashError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn canned_reply(&self) -> &str {
        self.chat
            .canned_reply
            .as_deref()
            .unwrap_or(self.ui.locale.strings().canned_reply)
    }
}
