//! Screen model
//!
//! Dimensions, color mode, cursor, and the backing cell grid. Every
//! mutation is bounds-checked: an out-of-range coordinate is a
//! `ProtocolError::OutOfBounds`, never a clamp and never a silent skip, so
//! replays stay predictable and testable.

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

use super::cell::Cell;
use super::cursor::Cursor;
use super::grid::Grid;

/// The screen state one replay session mutates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screen {
    width: usize,
    height: usize,
    /// Palette mode selected by SETUP; stored verbatim for the surface
    color_mode: u8,
    cursor: Cursor,
    grid: Grid,
}

impl Screen {
    /// Create a screen with blank cells and the cursor at the origin
    pub fn new(width: usize, height: usize, color_mode: u8) -> Self {
        Self {
            width,
            height,
            color_mode,
            cursor: Cursor::new(),
            grid: Grid::new(width, height),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn color_mode(&self) -> u8 {
        self.color_mode
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get a cell, if the coordinate is in range
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.grid.cell(x, y)
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), ProtocolError> {
        if self.grid.contains(x, y) {
            Ok(())
        } else {
            Err(ProtocolError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Write one cell at a validated coordinate
    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), ProtocolError> {
        self.check_bounds(x, y)?;
        // Index is valid after the check above
        if let Some(slot) = self.grid.cell_mut(x, y) {
            *slot = cell;
        }
        Ok(())
    }

    /// Write one cell at the current cursor position; the cursor does not
    /// move
    pub fn set_cell_at_cursor(&mut self, cell: Cell) {
        let Cursor { x, y } = self.cursor;
        if let Some(slot) = self.grid.cell_mut(x, y) {
            *slot = cell;
        }
    }

    /// Reposition the cursor; fails rather than clamps on an out-of-range
    /// target
    pub fn move_cursor(&mut self, x: usize, y: usize) -> Result<(), ProtocolError> {
        self.check_bounds(x, y)?;
        self.cursor.move_to(x, y);
        Ok(())
    }

    /// Blank every cell; cursor position is unaffected
    pub fn clear(&mut self) {
        self.grid.clear();
    }
}
