//! Live terminal display surface
//!
//! Renders cells to the real terminal with crossterm: alternate screen and
//! raw mode for the session, one queued MoveTo+Print per cell write, and a
//! keypress wait for dismissal. The terminal is restored on `shutdown` and
//! again from `Drop`, so a failed replay cannot leave the terminal raw.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, event, execute, queue,
    style::{self, Color},
    terminal::{self, ClearType},
};

use super::DisplaySurface;

/// A crossterm-backed display surface writing to stdout
pub struct TermSurface {
    stdout: Stdout,
    active: bool,
}

impl TermSurface {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            active: false,
        }
    }
}

impl Default for TermSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for TermSurface {
    fn initialize(&mut self, _width: usize, _height: usize) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        self.active = true;
        Ok(())
    }

    fn set_cell(&mut self, x: usize, y: usize, glyph: u8, attr: u8) -> io::Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(x as u16, y as u16),
            style::SetForegroundColor(Color::AnsiValue(attr)),
            style::Print(glyph as char)
        )
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }

    fn await_dismissal(&mut self) -> io::Result<()> {
        loop {
            if let event::Event::Key(_) = event::read()? {
                return Ok(());
            }
        }
    }

    fn shutdown(&mut self) -> io::Result<()> {
        if self.active {
            execute!(
                self.stdout,
                style::ResetColor,
                cursor::Show,
                terminal::LeaveAlternateScreen
            )?;
            terminal::disable_raw_mode()?;
            self.active = false;
        }
        Ok(())
    }
}

impl Drop for TermSurface {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}
