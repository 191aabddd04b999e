pub mod cell;
pub mod error_fmt;
pub mod page;
pub mod render;
pub mod schedule;
pub mod settings;

// Re-export commonly used types for convenience
pub use cell::{BASE_CLASSES, Cell, CellType, StyleBundle};
pub use page::{Page, PageWarning};
pub use render::RenderError;
pub use schedule::{DAYS, GridTemplate, Row, SLOTS, Schedule, Slot, SlotKind};
pub use settings::{PageSettings, SettingsError};
