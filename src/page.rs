//! Page shell: a title band above the schedule grid in a narrow centered column.

use std::fmt;

use crate::schedule::Schedule;
use crate::settings::PageSettings;

pub const DEFAULT_TITLE: &str = "Week Schedule";
pub const DEFAULT_SUBTITLE: &str = "Spring / 3rd / DSAI / 2025";

/// Class lists for the fixed page layout.
pub mod classes {
    pub const ROOT: &str = "min-h-screen bg-white text-gray-900 font-sans flex flex-col";
    pub const HEADER: &str = "bg-white border-b border-gray-300 px-2 p-1";
    pub const HEADER_INNER: &str = "max-w-sm mx-auto";
    pub const TITLE: &str = "text-lg font-bold text-black leading-tight";
    pub const SUBTITLE: &str = "text-gray-500 text-[10px]";
    pub const MAIN: &str = "flex-1 max-w-sm w-full mx-auto p-1 overflow-hidden flex flex-col";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub subtitle: String,
    pub schedule: Schedule,
}

impl Page {
    pub fn new() -> Self {
        Page {
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            schedule: Schedule::week(),
        }
    }

    /// Apply title/subtitle overrides. A blank title keeps the default and
    /// is reported back as a warning.
    pub fn from_settings(settings: &PageSettings) -> (Self, Vec<PageWarning>) {
        let mut page = Page::new();
        let mut warnings = Vec::new();

        if let Some(title) = &settings.title {
            if title.trim().is_empty() {
                warnings.push(PageWarning::BlankTitle);
            } else {
                page.title = title.clone();
            }
        }

        if let Some(subtitle) = &settings.subtitle {
            page.subtitle = subtitle.clone();
        }

        (page, warnings)
    }
}

/// Settings that were ignored while building the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageWarning {
    BlankTitle,
}

impl fmt::Display for PageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageWarning::BlankTitle => {
                write!(f, "empty title in settings, using '{}'", DEFAULT_TITLE)
            }
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page() {
        let page = Page::new();
        assert_eq!(page.title, "Week Schedule");
        assert_eq!(page.subtitle, "Spring / 3rd / DSAI / 2025");
        assert_eq!(page.schedule, Schedule::week());
    }

    #[test]
    fn test_settings_override() {
        let settings = PageSettings {
            title: Some("Timetable".to_string()),
            subtitle: Some("Fall / 2nd / CS / 2026".to_string()),
            ..Default::default()
        };
        let (page, warnings) = Page::from_settings(&settings);
        assert!(warnings.is_empty());
        assert_eq!(page.title, "Timetable");
        assert_eq!(page.subtitle, "Fall / 2nd / CS / 2026");
    }

    #[test]
    fn test_blank_title_keeps_default() {
        let settings = PageSettings {
            title: Some("   ".to_string()),
            ..Default::default()
        };
        let (page, warnings) = Page::from_settings(&settings);
        assert_eq!(page.title, DEFAULT_TITLE);
        assert_eq!(page.subtitle, DEFAULT_SUBTITLE);
        assert_eq!(warnings, vec![PageWarning::BlankTitle]);
        assert!(warnings[0].to_string().contains("Week Schedule"));
    }

    #[test]
    fn test_empty_settings_match_default_page() {
        assert_eq!(Page::from_settings(&PageSettings::default()), (Page::new(), vec![]));
    }
}
