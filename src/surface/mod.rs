//! Display surface capability
//!
//! The seam between the replay core and whatever actually shows the cells.
//! The session calls `initialize` once (on SETUP), `set_cell`/`clear` per
//! command, and `flush` after each applied frame. `await_dismissal` and
//! `shutdown` belong to the caller, which must run `shutdown` whether the
//! replay succeeded or failed.

use std::io;

mod buffer;
#[cfg(feature = "tui")]
mod term;

pub use buffer::BufferSurface;
#[cfg(feature = "tui")]
pub use term::TermSurface;

/// An addressable character display
pub trait DisplaySurface {
    /// Prepare a display of the given dimensions. Called exactly once.
    fn initialize(&mut self, width: usize, height: usize) -> io::Result<()>;

    /// Set the character and attribute at a coordinate
    fn set_cell(&mut self, x: usize, y: usize, glyph: u8, attr: u8) -> io::Result<()>;

    /// Blank the whole display
    fn clear(&mut self) -> io::Result<()>;

    /// Push pending writes to the physical output
    fn flush(&mut self) -> io::Result<()>;

    /// Block until the viewer dismisses the display (e.g. a keypress)
    fn await_dismissal(&mut self) -> io::Result<()>;

    /// Release the display
    fn shutdown(&mut self) -> io::Result<()>;
}

/// A surface that discards every write.
///
/// Headless replays use this; the screen model's backing grid already
/// holds everything a snapshot needs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl DisplaySurface for NullSurface {
    fn initialize(&mut self, _width: usize, _height: usize) -> io::Result<()> {
        Ok(())
    }

    fn set_cell(&mut self, _x: usize, _y: usize, _glyph: u8, _attr: u8) -> io::Result<()> {
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn await_dismissal(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn shutdown(&mut self) -> io::Result<()> {
        Ok(())
    }
}
