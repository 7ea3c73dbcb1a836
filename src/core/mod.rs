//! Screen model
//!
//! The state a replay session mutates: the cell grid, the cursor, and the
//! screen dimensions and color mode established by SETUP.

mod cell;
mod cursor;
mod grid;
mod screen;
mod snapshot;

pub use cell::{Cell, BLANK_GLYPH, DEFAULT_ATTR};
pub use cursor::Cursor;
pub use grid::Grid;
pub use screen::Screen;
pub use snapshot::{CellSnapshot, CursorSnapshot, Snapshot};
