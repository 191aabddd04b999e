//! The fixed weekly schedule: a header row followed by one row per hour slot.

use crate::cell::{Cell, CellType};

/// Weekday column labels in display order.
pub const DAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

/// Label of the header cell above the time column.
pub const TIME_HEADER: &str = "Time";

/// What occupies the day columns of one hour slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// One empty placeholder per weekday.
    Class,
    /// A single break cell merged across every weekday.
    Break { label: &'static str },
}

/// One hour of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub label: &'static str,
    pub kind: SlotKind,
}

impl Slot {
    const fn class(label: &'static str) -> Self {
        Slot {
            label,
            kind: SlotKind::Class,
        }
    }

    const fn lunch(label: &'static str) -> Self {
        Slot {
            label,
            kind: SlotKind::Break { label: "Lunch" },
        }
    }
}

/// Hour slots from 9:00 to 5:00. Lunch is the 1:00 slot.
pub const SLOTS: [Slot; 9] = [
    Slot::class("9:00"),
    Slot::class("10:00"),
    Slot::class("11:00"),
    Slot::class("12:00"),
    Slot::lunch("1:00"),
    Slot::class("2:00"),
    Slot::class("3:00"),
    Slot::class("4:00"),
    Slot::class("5:00"),
];

/// A row of the grid. The time-column cell is always first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Header { time: Cell, days: Vec<Cell> },
    Regular { time: Cell, days: Vec<Cell> },
    Merged { time: Cell, merged: Cell },
}

impl Row {
    fn header() -> Self {
        Row::Header {
            time: Cell::typed(CellType::Header, TIME_HEADER),
            days: DAYS
                .iter()
                .map(|day| Cell::typed(CellType::Header, *day))
                .collect(),
        }
    }

    fn from_slot(slot: &Slot) -> Self {
        let time = Cell::typed(CellType::Time, slot.label);
        match slot.kind {
            SlotKind::Class => Row::Regular {
                time,
                days: DAYS.iter().map(|_| Cell::new()).collect(),
            },
            SlotKind::Break { label } => Row::Merged {
                time,
                merged: Cell::typed(CellType::Break, label).with_span(DAYS.len() as u16),
            },
        }
    }

    pub fn time_cell(&self) -> &Cell {
        match self {
            Row::Header { time, .. } | Row::Regular { time, .. } | Row::Merged { time, .. } => time,
        }
    }

    /// Label in the time column ("Time" for the header row).
    pub fn label(&self) -> &str {
        self.time_cell().text()
    }

    /// Cells in document order.
    pub fn cells(&self) -> Vec<&Cell> {
        match self {
            Row::Header { time, days } | Row::Regular { time, days } => {
                std::iter::once(time).chain(days.iter()).collect()
            }
            Row::Merged { time, merged } => vec![time, merged],
        }
    }

    pub fn is_merged(&self) -> bool {
        matches!(self, Row::Merged { .. })
    }
}

/// Column template of the grid container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridTemplate {
    pub time_column_px: u16,
    pub day_columns: u16,
    pub gap_px: u16,
    pub min_width_px: u16,
}

impl GridTemplate {
    /// Outer wrapper that scrolls horizontally on narrow screens.
    pub const WRAPPER_CLASSES: &'static str = "w-full overflow-x-auto border border-gray-300 shadow-sm";

    /// CSS `grid-template-columns` value.
    pub fn columns_css(&self) -> String {
        format!("{}px repeat({}, 1fr)", self.time_column_px, self.day_columns)
    }

    /// Class list of the grid container itself.
    pub fn container_classes(&self) -> String {
        format!(
            "grid grid-cols-[{}px_repeat({},1fr)] bg-gray-300 min-w-[{}px] gap-[{}px] border border-gray-300",
            self.time_column_px, self.day_columns, self.min_width_px, self.gap_px
        )
    }

    /// Total column tracks, time column included.
    pub fn width(&self) -> usize {
        1 + self.day_columns as usize
    }
}

impl Default for GridTemplate {
    fn default() -> Self {
        GridTemplate {
            time_column_px: 40,
            day_columns: DAYS.len() as u16,
            gap_px: 1,
            min_width_px: 280,
        }
    }
}

/// The full week grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub template: GridTemplate,
    rows: Vec<Row>,
}

impl Schedule {
    /// Build the fixed week: header row, then one row per slot.
    pub fn week() -> Self {
        let rows = std::iter::once(Row::header())
            .chain(SLOTS.iter().map(Row::from_slot))
            .collect();

        Schedule {
            template: GridTemplate::default(),
            rows,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn header(&self) -> Option<&Row> {
        self.rows.iter().find(|r| matches!(r, Row::Header { .. }))
    }

    pub fn header_labels(&self) -> Vec<&str> {
        self.header()
            .map(|row| row.cells().into_iter().map(Cell::text).collect())
            .unwrap_or_default()
    }

    /// Hour row whose time label matches `label`.
    pub fn row_for(&self, label: &str) -> Option<&Row> {
        self.rows
            .iter()
            .filter(|r| !matches!(r, Row::Header { .. }))
            .find(|r| r.label() == label)
    }

    /// Every cell in document order, matching grid auto-placement.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|r| r.cells())
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::week()
    }
}
