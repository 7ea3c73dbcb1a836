//! Screen cell
//!
//! One grid position: a single-byte glyph and its attribute (the color or
//! style index the stream selected; the crate stores it, the display
//! surface interprets it).

use serde::{Deserialize, Serialize};

/// The glyph a cleared cell holds
pub const BLANK_GLYPH: u8 = b' ';
/// The attribute a cleared cell holds
pub const DEFAULT_ATTR: u8 = 0;

/// A single cell in the screen grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Character code
    pub glyph: u8,
    /// Attribute byte
    pub attr: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: BLANK_GLYPH,
            attr: DEFAULT_ATTR,
        }
    }
}

impl Cell {
    /// Create a cell with a glyph and attribute
    pub fn new(glyph: u8, attr: u8) -> Self {
        Self { glyph, attr }
    }

    /// Check if this cell is blank with the default attribute
    pub fn is_blank(&self) -> bool {
        self.glyph == BLANK_GLYPH && self.attr == DEFAULT_ATTR
    }

    /// Reset the cell to the blank state
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The glyph as a char, for text rendering
    pub fn glyph_char(&self) -> char {
        self.glyph as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_default_is_blank() {
        let cell = Cell::default();
        assert!(cell.is_blank());
        assert_eq!(cell.glyph, b' ');
        assert_eq!(cell.attr, 0);
    }

    #[test]
    fn test_cell_new() {
        let cell = Cell::new(b'A', 2);
        assert!(!cell.is_blank());
        assert_eq!(cell.glyph_char(), 'A');
        assert_eq!(cell.attr, 2);
    }

    #[test]
    fn test_cell_clear() {
        let mut cell = Cell::new(b'A', 2);
        cell.clear();
        assert!(cell.is_blank());
    }

    #[test]
    fn test_blank_glyph_with_attribute_is_not_blank() {
        let cell = Cell::new(BLANK_GLYPH, 3);
        assert!(!cell.is_blank());
    }
}
