//! Page layout for the printable entry document.
//!
//! Entries are placed four to a page in a 2x2 grid, row by row, in list
//! order. Slots past the end of the list stay blank.

use crate::entry::{Entry, FieldMap};
use crate::store::format::{PARENT_HEADING, STUDENT_HEADING};

/// Rows in each page grid.
pub const GRID_ROWS: usize = 2;

/// Columns in each page grid.
pub const GRID_COLS: usize = 2;

/// Entries placed on each page.
pub const ENTRIES_PER_PAGE: usize = GRID_ROWS * GRID_COLS;

/// Twentieths of a point per inch, the unit used for page geometry.
pub const TWIPS_PER_INCH: u16 = 1440;

/// Physical page geometry, in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSetup {
    /// Page width.
    pub width: u16,
    /// Page height.
    pub height: u16,
    /// Margin applied to all four sides.
    pub margin: u16,
    /// Font size for cell text, in half-points.
    pub font_half_points: u8,
}

impl PageSetup {
    /// US legal paper (8.5 x 14 in) with half-inch margins and 10 pt text.
    pub const LEGAL: Self = Self {
        width: TWIPS_PER_INCH * 17 / 2,
        height: TWIPS_PER_INCH * 14,
        margin: TWIPS_PER_INCH / 2,
        font_half_points: 20,
    };
}

/// One page: a grid of optional cell texts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    cells: [[Option<String>; GRID_COLS]; GRID_ROWS],
}

impl Page {
    /// Text of the cell at `(row, col)`, or `None` when blank or out of range.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col)?.as_deref()
    }

    /// Grid rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<String>; GRID_COLS]> {
        self.cells.iter()
    }

    /// Number of non-blank cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }
}

/// The full document: one page per group of four entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    /// Pages in print order.
    pub pages: Vec<Page>,
}

impl Layout {
    /// Arrange `entries` into pages.
    #[must_use]
    pub fn from_entries(entries: &[Entry]) -> Self {
        let pages = entries
            .chunks(ENTRIES_PER_PAGE)
            .map(|group| {
                let mut page = Page::default();
                for (slot, entry) in group.iter().enumerate() {
                    page.cells[slot / GRID_COLS][slot % GRID_COLS] = Some(cell_text(entry));
                }
                page
            })
            .collect();
        Self { pages }
    }

    /// Number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether there is nothing to print.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Text printed in a grid cell for one entry.
///
/// Fields appear in the order they are stored in the entry, which for a
/// hand-edited store file may differ from the editor's prompt order.
#[must_use]
pub fn cell_text(entry: &Entry) -> String {
    let mut lines = vec![PARENT_HEADING.to_string()];
    lines.extend(field_lines(&entry.parent));
    lines.push(String::new());
    lines.push(STUDENT_HEADING.to_string());
    lines.extend(field_lines(&entry.student));
    lines.join("\n")
}

fn field_lines(fields: &FieldMap) -> impl Iterator<Item = String> + '_ {
    fields.iter().map(|(name, value)| format!("{name}: {value}"))
}
