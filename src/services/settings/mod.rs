//! File-backed settings persistence.
//! Settings live in a small TOML file; a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{Result, WeekViewError};
use crate::models::settings::WeekViewSettings;

const SETTINGS_FILE: &str = "week_view.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service pointed at the per-user config directory.
    pub fn with_default_path() -> Self {
        Self::new(default_settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when the file does not exist.
    pub fn get(&self) -> Result<WeekViewSettings> {
        WeekViewSettings::load(&self.path)
    }

    /// Validate and write settings, creating the parent directory if needed.
    pub fn update(&self, settings: &WeekViewSettings) -> Result<()> {
        settings.save(&self.path)
    }
}

impl WeekViewSettings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(data: &str) -> Result<Self> {
        let settings: Self = toml::from_str(data)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| WeekViewError::Config(e.to_string()))
    }

    /// Read settings from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path).map_err(|source| WeekViewError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&data)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let write_error = |source| WeekViewError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        let data = self.to_toml_string()?;
        fs::write(path, data).map_err(write_error)?;
        log::info!("Saved week view settings to {}", path.display());
        Ok(())
    }
}

/// `week_view.toml` in the platform config directory, or the working
/// directory when no home directory can be resolved.
pub fn default_settings_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "RustCalendar", "WeekView") {
        dirs.config_dir().join(SETTINGS_FILE)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for settings");
        PathBuf::from(SETTINGS_FILE)
    }
}
