//! In-memory display surface
//!
//! Buffers cell writes in a flat grid and counts the capability calls it
//! receives. Tests use it to assert exactly what the session pushed to the
//! display, independent of the screen model's own grid.

use std::io;

use super::DisplaySurface;

/// A display surface backed by a plain vector of (glyph, attr) pairs
#[derive(Debug, Default, Clone)]
pub struct BufferSurface {
    width: usize,
    height: usize,
    cells: Vec<(u8, u8)>,
    initialized: bool,
    flushes: usize,
    dismissed: bool,
    shut_down: bool,
}

impl BufferSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// The (glyph, attr) pair at a coordinate
    pub fn cell(&self, x: usize, y: usize) -> Option<(u8, u8)> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    /// Plain-text view of the buffered display, for test assertions
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(self.cells[y * self.width + x].0 as char);
            }
            while out.ends_with(' ') {
                out.pop();
            }
            out.push('\n');
        }
        out
    }
}

impl DisplaySurface for BufferSurface {
    fn initialize(&mut self, width: usize, height: usize) -> io::Result<()> {
        self.width = width;
        self.height = height;
        self.cells = vec![(b' ', 0); width * height];
        self.initialized = true;
        Ok(())
    }

    fn set_cell(&mut self, x: usize, y: usize, glyph: u8, attr: u8) -> io::Result<()> {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = (glyph, attr);
        }
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        for cell in &mut self.cells {
            *cell = (b' ', 0);
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn await_dismissal(&mut self) -> io::Result<()> {
        self.dismissed = true;
        Ok(())
    }

    fn shutdown(&mut self) -> io::Result<()> {
        self.shut_down = true;
        Ok(())
    }
}
