//! Deterministic snapshots
//!
//! Snapshots capture the complete screen state in a serializable form for
//! testing and the headless runner. Given the same byte stream, a replay
//! must produce an identical snapshot.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::screen::Screen;

/// A complete snapshot of the screen state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Screen dimensions
    pub width: usize,
    pub height: usize,
    /// Color mode byte from SETUP
    pub color_mode: u8,
    /// Cursor position
    pub cursor: CursorSnapshot,
    /// Grid content, row-major
    pub grid: Vec<Vec<CellSnapshot>>,
}

/// Snapshot of a single cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    /// Character content
    pub glyph: String,
    /// Attribute byte
    pub attr: u8,
}

/// Snapshot of the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorSnapshot {
    pub x: usize,
    pub y: usize,
}

impl From<&Cell> for CellSnapshot {
    fn from(cell: &Cell) -> Self {
        CellSnapshot {
            glyph: cell.glyph_char().to_string(),
            attr: cell.attr,
        }
    }
}

impl Snapshot {
    /// Capture the current screen state
    pub fn from_screen(screen: &Screen) -> Self {
        let mut grid = Vec::with_capacity(screen.height());
        for y in 0..screen.height() {
            let mut row = Vec::with_capacity(screen.width());
            for x in 0..screen.width() {
                if let Some(cell) = screen.cell(x, y) {
                    row.push(CellSnapshot::from(cell));
                }
            }
            grid.push(row);
        }

        Snapshot {
            width: screen.width(),
            height: screen.height(),
            color_mode: screen.color_mode(),
            cursor: CursorSnapshot {
                x: screen.cursor().x,
                y: screen.cursor().y,
            },
            grid,
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a snapshot back from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Plain-text rendering of the grid, one line per row with trailing
    /// blanks trimmed
    pub fn to_text(&self) -> String {
        let mut result = String::new();

        for row in &self.grid {
            for cell in row {
                result.push_str(&cell.glyph);
            }
            while result.ends_with(' ') {
                result.pop();
            }
            result.push('\n');
        }

        result
    }

    /// Compare grid content and cursor, ignoring nothing the stream can
    /// observe
    pub fn content_equals(&self, other: &Snapshot) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.cursor == other.cursor
            && self.grid == other.grid
    }
}
