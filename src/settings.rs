//! Page settings loaded from an optional YAML file.
//!
//! The settings file (`weekgrid.yml`) overrides the page title and subtitle
//! and controls whether the HTML output pulls in the Tailwind CDN script.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default settings file, relative to the working directory.
pub const SETTINGS_FILE: &str = "weekgrid.yml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageSettings {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Include the Tailwind Play CDN script in HTML output. Default: true.
    pub tailwind_cdn: bool,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: None,
            subtitle: None,
            tailwind_cdn: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl PageSettings {
    /// Load settings from a file path.
    ///
    /// Returns the default settings if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                if content.trim().is_empty() {
                    return Ok(Self::default());
                }
                let settings: PageSettings = serde_yaml::from_str(&content)?;
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(SettingsError::Io(e)),
        }
    }
}

/// Expand `~` in a user-supplied path.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.yml");

        let settings = PageSettings::load(&path).unwrap();
        assert_eq!(settings, PageSettings::default());
        assert!(settings.tailwind_cdn);
    }

    #[test]
    fn test_load_valid_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("weekgrid.yml");

        std::fs::write(
            &path,
            "title: Timetable\nsubtitle: Fall / 2026\ntailwind_cdn: false\n",
        )
        .unwrap();

        let settings = PageSettings::load(&path).unwrap();
        assert_eq!(settings.title.as_deref(), Some("Timetable"));
        assert_eq!(settings.subtitle.as_deref(), Some("Fall / 2026"));
        assert!(!settings.tailwind_cdn);
    }

    #[test]
    fn test_load_partial_settings_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("weekgrid.yml");

        std::fs::write(&path, "subtitle: Summer\n").unwrap();

        let settings = PageSettings::load(&path).unwrap();
        assert_eq!(settings.title, None);
        assert!(settings.tailwind_cdn);
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("weekgrid.yml");

        std::fs::write(&path, "").unwrap();

        let settings = PageSettings::load(&path).unwrap();
        assert_eq!(settings, PageSettings::default());
    }

    #[test]
    fn test_load_rejects_unknown_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("weekgrid.yml");

        std::fs::write(&path, "lunch_hour: 12\n").unwrap();

        let err = PageSettings::load(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();

        let err = PageSettings::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_expand_path_without_tilde_is_unchanged() {
        assert_eq!(expand_path("out/week.html"), PathBuf::from("out/week.html"));
    }
}
