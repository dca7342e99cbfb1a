use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::path::settings_path;
use crate::term;

/// Display preferences read from `config.toml`.
///
/// ```toml
/// color = false
/// ```
///
/// The target file location is not configurable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub color: Option<bool>,
}

impl Settings {
    pub fn color_enabled(&self) -> bool {
        self.color.unwrap_or(true)
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Read settings from `path`. A missing file gives the defaults.
pub fn load_from(path: &Path) -> Result<Settings, SettingsError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => return Err(SettingsError::Read { path: path.to_path_buf(), source }),
    };
    let settings: Settings = toml::from_str(&content)
        .map_err(|source| SettingsError::Parse { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), ?settings, "settings loaded");
    Ok(settings)
}

/// Settings from the user config dir; problems are reported and ignored.
pub fn load() -> Settings {
    match load_from(&settings_path()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::debug!(error = %e, "falling back to default settings");
            term::warning(&format!("{e}. Using defaults."));
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(s, Settings::default());
        assert!(s.color_enabled());
    }

    #[test]
    fn reads_color_switch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "color = false\n").unwrap();

        let s = load_from(&path).unwrap();
        assert!(!s.color_enabled());
    }

    #[test]
    fn target_location_cannot_be_overridden() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        for line in ["base_dir = \"/tmp/other\"\n", "env_file = \"other/.env\"\n"] {
            fs::write(&path, line).unwrap();
            assert!(matches!(load_from(&path), Err(SettingsError::Parse { .. })), "{line}");
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "colour = true\n").unwrap();
        assert!(matches!(load_from(&path), Err(SettingsError::Parse { .. })));
    }
}
