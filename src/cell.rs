//! Grid cells and the style bundle attached to each visual type.
//!
//! A cell's final class list is always `BASE_CLASSES`, then the classes of
//! its type's bundle, then any caller-supplied extra class. Later classes win
//! under normal cascade rules, so callers can override type styling.

use serde::{Deserialize, Serialize};

/// Classes shared by every cell regardless of type.
pub const BASE_CLASSES: &str = "flex items-center justify-center px-0.5 py-6 text-center border border-gray-300 text-[8px] leading-none h-full break-words overflow-hidden";

/// Visual type of a cell. Selects the style bundle.
///
/// Deserializes through [`CellType::from_tag`], so unknown tags become `Default`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum CellType {
    #[default]
    Default,
    Idle,
    Header,
    Time,
    Break,
}

impl CellType {
    pub const ALL: [CellType; 5] = [
        CellType::Default,
        CellType::Idle,
        CellType::Header,
        CellType::Time,
        CellType::Break,
    ];

    /// Resolve a type tag. Unknown tags fall back to `Default`.
    pub fn from_tag(tag: &str) -> CellType {
        match tag.trim().to_lowercase().as_str() {
            "idle" => CellType::Idle,
            "header" => CellType::Header,
            "time" => CellType::Time,
            "break" => CellType::Break,
            _ => CellType::Default,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            CellType::Default => "default",
            CellType::Idle => "idle",
            CellType::Header => "header",
            CellType::Time => "time",
            CellType::Break => "break",
        }
    }

    pub fn bundle(self) -> &'static StyleBundle {
        match self {
            CellType::Default => &DEFAULT_BUNDLE,
            CellType::Idle => &IDLE_BUNDLE,
            CellType::Header => &HEADER_BUNDLE,
            CellType::Time => &TIME_BUNDLE,
            CellType::Break => &BREAK_BUNDLE,
        }
    }
}

impl From<String> for CellType {
    fn from(tag: String) -> Self {
        CellType::from_tag(&tag)
    }
}

/// Immutable style record for one visual type.
///
/// `classes` is the exact utility-class string used by the HTML output. The
/// remaining fields describe the same look for the terminal renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleBundle {
    pub classes: &'static str,
    pub bold: bool,
    pub italic: bool,
    pub dimmed: bool,
    pub uppercase: bool,
    /// Wide letter spacing (`tracking-widest`).
    pub spaced: bool,
    /// Background darker than the page (`bg-gray-100` and up).
    pub shaded: bool,
}

const DEFAULT_BUNDLE: StyleBundle = StyleBundle {
    classes: "bg-white text-black font-normal",
    bold: false,
    italic: false,
    dimmed: false,
    uppercase: false,
    spaced: false,
    shaded: false,
};

const IDLE_BUNDLE: StyleBundle = StyleBundle {
    classes: "bg-gray-50 text-gray-400 font-light italic",
    bold: false,
    italic: true,
    dimmed: true,
    uppercase: false,
    spaced: false,
    shaded: false,
};

const HEADER_BUNDLE: StyleBundle = StyleBundle {
    classes: "bg-gray-100 font-bold uppercase tracking-wider text-black text-[7px] py-3",
    bold: true,
    italic: false,
    dimmed: false,
    uppercase: true,
    spaced: false,
    shaded: true,
};

const TIME_BUNDLE: StyleBundle = StyleBundle {
    classes: "bg-white font-mono text-[7px] font-normal text-black align-middle rotate-0",
    bold: false,
    italic: false,
    dimmed: false,
    uppercase: false,
    spaced: false,
    shaded: false,
};

const BREAK_BUNDLE: StyleBundle = StyleBundle {
    classes: "bg-gray-200 text-black font-bold tracking-widest uppercase text-[7px]",
    bold: true,
    italic: false,
    dimmed: false,
    uppercase: true,
    spaced: true,
    shaded: true,
};

/// One renderable grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub content: Option<String>,
    pub cell_type: CellType,
    pub extra_class: String,
    span: u16,
}

impl Cell {
    /// An empty default cell spanning one column.
    pub fn new() -> Self {
        Cell {
            content: None,
            cell_type: CellType::Default,
            extra_class: String::new(),
            span: 1,
        }
    }

    pub fn typed(cell_type: CellType, content: impl Into<String>) -> Self {
        Cell::new().with_type(cell_type).with_content(content)
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_type(mut self, cell_type: CellType) -> Self {
        self.cell_type = cell_type;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.extra_class = class.into();
        self
    }

    /// Set the number of column tracks this cell occupies. Zero is clamped to 1.
    pub fn with_span(mut self, span: u16) -> Self {
        self.span = span.max(1);
        self
    }

    pub fn span(&self) -> u16 {
        self.span
    }

    /// Visible text; absent content renders as empty.
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    pub fn bundle(&self) -> &'static StyleBundle {
        self.cell_type.bundle()
    }

    /// Base classes, then type classes, then the extra class.
    pub fn class_list(&self) -> String {
        let mut classes = format!("{} {}", BASE_CLASSES, self.bundle().classes);
        let extra = self.extra_class.trim();
        if !extra.is_empty() {
            classes.push(' ');
            classes.push_str(extra);
        }
        classes
    }

    /// Spanning directive, present only when the cell covers more than one column.
    pub fn span_style(&self) -> Option<String> {
        let span = self.span();
        (span > 1).then(|| format!("grid-column: span {span} / span {span}"))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}
