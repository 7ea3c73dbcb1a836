//! Screen grid
//!
//! A dense, fixed-size 2D array of cells stored row-major. Access goes
//! through bounds-checked accessors; the grid never grows or shrinks after
//! construction.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// The character grid backing the screen model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![Cell::default(); width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check whether a coordinate lies inside the grid
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Get a reference to a cell
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.contains(x, y).then(|| &self.cells[y * self.width + x])
    }

    /// Get a mutable reference to a cell
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        self.contains(x, y)
            .then(|| &mut self.cells[y * self.width + x])
    }

    /// Iterate one row of cells
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        (y < self.height).then(|| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// Reset every cell to the blank state
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new() {
        let grid = Grid::new(30, 20);
        assert_eq!(grid.width(), 30);
        assert_eq!(grid.height(), 20);
        assert!(grid.cell(29, 19).unwrap().is_blank());
    }

    #[test]
    fn test_grid_cell_access() {
        let mut grid = Grid::new(10, 5);

        if let Some(cell) = grid.cell_mut(3, 2) {
            *cell = Cell::new(b'A', 2);
        }

        assert_eq!(grid.cell(3, 2).unwrap().glyph, b'A');
        assert!(grid.cell(2, 3).unwrap().is_blank());
    }

    #[test]
    fn test_grid_out_of_range_access() {
        let mut grid = Grid::new(10, 5);
        assert!(grid.cell(10, 0).is_none());
        assert!(grid.cell(0, 5).is_none());
        assert!(grid.cell_mut(10, 5).is_none());
        assert!(grid.row(5).is_none());
    }

    #[test]
    fn test_grid_row_major_layout() {
        let mut grid = Grid::new(4, 3);
        *grid.cell_mut(0, 1).unwrap() = Cell::new(b'X', 1);

        let row = grid.row(1).unwrap();
        assert_eq!(row.len(), 4);
        assert_eq!(row[0].glyph, b'X');
        assert!(grid.row(0).unwrap().iter().all(Cell::is_blank));
    }

    #[test]
    fn test_grid_clear() {
        let mut grid = Grid::new(10, 5);
        *grid.cell_mut(1, 1).unwrap() = Cell::new(b'A', 2);
        *grid.cell_mut(9, 4).unwrap() = Cell::new(b'B', 3);

        grid.clear();
        assert!(grid.cell(1, 1).unwrap().is_blank());
        assert!(grid.cell(9, 4).unwrap().is_blank());
    }
}
