// Settings service
// Loads and saves the desktop host's TOML settings file

use crate::models::settings::Settings;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the settings file location.
pub const CONFIG_ENV_VAR: &str = "MONTH_CALENDAR_CONFIG";

const SETTINGS_FILE_NAME: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the settings location from `MONTH_CALENDAR_CONFIG`, falling back
    /// to the platform config directory.
    pub fn from_environment() -> Option<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
            return Some(Self::new(path));
        }

        ProjectDirs::from("com", "KenBoyle", "MonthCalendar")
            .map(|dirs| Self::new(dirs.config_dir().join(SETTINGS_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the settings file.
    pub fn get(&self) -> Result<Settings> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        Ok(settings)
    }

    /// Write the settings file, creating its directory if needed.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;
        Ok(())
    }

    /// Settings from disk, or the defaults when the file is missing or invalid.
    pub fn load_or_default(&self) -> Settings {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Settings::default();
        }

        match self.get() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                Settings::default()
            }
        }
    }
}
