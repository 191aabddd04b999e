use std::fmt;
use std::io;

use owo_colors::OwoColorize;

use crate::render::RenderError;
use crate::settings::SettingsError;

/// Application error with context for actionable error messages.
#[derive(Debug)]
pub enum AppError {
    /// IO error with context
    Io { context: String, source: io::Error },
    /// Settings file could not be loaded
    Settings { path: String, source: SettingsError },
    /// Template rendering failed
    Render(RenderError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io { context, source } => {
                write!(f, "{}", format_cli_error(&format!("{}: {}", context, source)))
            }
            AppError::Settings { path, source } => {
                write!(f, "{}", format_settings_error(source, path))
            }
            AppError::Render(source) => {
                write!(f, "{}", format_cli_error(&source.to_string()))
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        AppError::Render(e)
    }
}

/// Extension trait to add the settings path to settings results.
pub trait SettingsResultExt<T> {
    fn with_path(self, path: &str) -> Result<T, AppError>;
}

impl<T> SettingsResultExt<T> for Result<T, SettingsError> {
    fn with_path(self, path: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::Settings {
            path: path.to_string(),
            source: e,
        })
    }
}

/// Extension trait to add context to IO results.
pub trait IoResultExt<T> {
    fn with_context(self, context: &str) -> Result<T, AppError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn with_context(self, context: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::Io {
            context: context.to_string(),
            source: e,
        })
    }
}

// ============================================================================
// Formatting functions (internal implementation)
// ============================================================================

fn format_cli_error(message: &str) -> String {
    format!("{}: {}\n", "error".red().bold(), message)
}

fn format_settings_error(error: &SettingsError, path: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));

    match error {
        SettingsError::Io(io_err) => {
            out.push_str(&format!("could not read settings {}\n", path.cyan()));
            out.push('\n');
            out.push_str(&format!("  {}\n", io_err.to_string().dimmed()));
        }
        SettingsError::Parse(yaml_err) => {
            out.push_str(&format!("invalid YAML in {}\n", path.cyan()));
            out.push('\n');
            out.push_str(&format!("  {}\n", yaml_err.to_string().dimmed()));
            out.push('\n');
            out.push_str(&format!("  {}:\n", "Supported keys".bold()));
            out.push_str(&format!("      {}\n", "title: Week Schedule".dimmed()));
            out.push_str(&format!("      {}\n", "subtitle: Spring / 3rd / DSAI / 2025".dimmed()));
            out.push_str(&format!("      {}\n", "tailwind_cdn: true".dimmed()));
        }
    }

    out
}
