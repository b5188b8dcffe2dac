//! Settings parser for the user config file

use std::path::{Path, PathBuf};

use lbacad_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "lb-academy";

/// Path of the user config file (`~/.config/lb-academy/config.toml` on
/// Linux), or `None` when the platform config dir is unknown.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the default location, falling back to defaults when
/// the file is missing or invalid.
pub fn load_settings() -> Settings {
    let Some(path) = config_file_path() else {
        debug!("No platform config directory; using default settings");
        return Settings::default();
    };

    match load_from(&path) {
        Ok(settings) => {
            info!("Loaded settings from {}", path.display());
            settings
        }
        Err(Error::ConfigNotFound { .. }) => Settings::default(),
        Err(e) => {
            warn!("Ignoring invalid config {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

/// Parse settings from a specific file
pub fn load_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(path)?;
    toml::from_str(&raw).map_err(|e| Error::config_invalid(e.to_string()))
}
