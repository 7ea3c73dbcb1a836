//! Cursor state
//!
//! Tracks the position DRAW_AT_CURSOR writes to. The screen validates every
//! move, so a cursor always points inside the grid.

use serde::{Deserialize, Serialize};

/// Cursor position, 0-indexed from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cursor {
    /// Column position
    pub x: usize,
    /// Row position
    pub y: usize,
}

impl Cursor {
    /// Create a cursor at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to an absolute position (already bounds-checked by the screen)
    pub fn move_to(&mut self, x: usize, y: usize) {
        self.x = x;
        self.y = y;
    }

    /// Reset to the origin
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
