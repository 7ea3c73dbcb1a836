//! Replay session
//!
//! Ties together the frame decoder, the command decoder, the screen model,
//! and the display surface. Frames are applied strictly in stream order;
//! each frame is validated completely before any mutation, and the first
//! error stops the session (fail-fast) with the frame index, byte offset,
//! and command id attached.

use tracing::debug;

use crate::core::{Cell, Screen};
use crate::error::{ProtocolError, Result, SessionError};
use crate::protocol::{Command, FrameDecoder};
use crate::raster;
use crate::surface::DisplaySurface;

/// Where the session is in its linear lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No SETUP frame seen yet; only SETUP is legal
    Uninitialized,
    /// Screen established; drawing and cursor commands are legal
    Ready,
    /// END reached or input exhausted; no further frames accepted
    Terminated,
    /// A frame failed; no further frames accepted
    Failed,
}

/// A replay session owning the screen model and a display surface
#[derive(Debug)]
pub struct Session<S: DisplaySurface> {
    surface: S,
    screen: Option<Screen>,
    state: SessionState,
}

fn frame_err(index: usize, command: u8, offset: usize, source: ProtocolError) -> SessionError {
    SessionError::Frame {
        index,
        command,
        offset,
        source,
    }
}

impl<S: DisplaySurface> Session<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            screen: None,
            state: SessionState::Uninitialized,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The screen model, once SETUP has been processed
    pub fn screen(&self) -> Option<&Screen> {
        self.screen.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The surface, for the caller's `await_dismissal`/`shutdown` duties
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Decode and apply every frame of the stream, in order.
    ///
    /// Stops consuming at the first END frame; bytes after it are never
    /// interpreted. Returns the first error and refuses further replays
    /// afterward. The caller still owns surface shutdown on both paths.
    pub fn replay(&mut self, stream: &[u8]) -> Result<()> {
        if matches!(self.state, SessionState::Terminated | SessionState::Failed) {
            return Err(SessionError::Finished);
        }

        let mut frames_seen = 0;
        let decoder = FrameDecoder::new(stream);
        for item in decoder {
            let frame = match item {
                Ok(frame) => frame,
                Err(source) => {
                    self.state = SessionState::Failed;
                    let offset = match source {
                        ProtocolError::TruncatedFrame { offset, .. } => offset,
                        _ => stream.len(),
                    };
                    let command = stream.get(offset).copied().unwrap_or(0);
                    return Err(frame_err(frames_seen, command, offset, source));
                }
            };
            frames_seen = frame.index + 1;

            let command = match Command::decode(&frame) {
                Ok(command) => command,
                Err(source) => {
                    self.state = SessionState::Failed;
                    return Err(frame_err(frame.index, frame.command_id, frame.offset, source));
                }
            };

            debug!("frame {}: {}", frame.index, command.name());
            let done = match self.apply(frame.index, frame.offset, &command) {
                Ok(done) => done,
                Err(err) => {
                    self.state = SessionState::Failed;
                    return Err(err);
                }
            };
            if let Err(err) = self.surface.flush() {
                self.state = SessionState::Failed;
                return Err(err.into());
            }

            if done {
                self.state = SessionState::Terminated;
                return Ok(());
            }
        }

        // Clean exhaustion without an END frame also ends the session.
        self.state = SessionState::Terminated;
        Ok(())
    }

    /// Apply one decoded command; returns true when the command was END.
    ///
    /// Validation happens before any screen or surface write, so a failed
    /// frame leaves both exactly as the previous frame left them.
    fn apply(&mut self, index: usize, offset: usize, command: &Command) -> Result<bool> {
        if let Command::Setup {
            width,
            height,
            color_mode,
        } = command
        {
            if self.screen.is_some() {
                return Err(frame_err(
                    index,
                    command.id(),
                    offset,
                    ProtocolError::DuplicateSetup,
                ));
            }
            let (width, height) = (*width as usize, *height as usize);
            self.surface.initialize(width, height)?;
            self.screen = Some(Screen::new(width, height, *color_mode));
            self.state = SessionState::Ready;
            return Ok(false);
        }

        let screen = self.screen.as_mut().ok_or_else(|| {
            frame_err(
                index,
                command.id(),
                offset,
                ProtocolError::UninitializedAccess {
                    command: command.name(),
                },
            )
        })?;
        let ctx = |source| frame_err(index, command.id(), offset, source);

        match command {
            Command::Setup { .. } => unreachable!("handled above"),
            Command::DrawChar { x, y, attr, glyph } => {
                let (x, y) = (*x as usize, *y as usize);
                screen.set_cell(x, y, Cell::new(*glyph, *attr)).map_err(ctx)?;
                self.surface.set_cell(x, y, *glyph, *attr)?;
            }
            Command::DrawLine {
                x0,
                y0,
                x1,
                y1,
                attr,
                glyph,
            } => {
                // Every Bresenham point lies in the endpoints' bounding
                // box, so checking the endpoints covers the whole walk.
                for &(x, y) in &[(*x0, *y0), (*x1, *y1)] {
                    if screen.cell(x as usize, y as usize).is_none() {
                        return Err(ctx(ProtocolError::OutOfBounds {
                            x: x as usize,
                            y: y as usize,
                            width: screen.width(),
                            height: screen.height(),
                        }));
                    }
                }
                for (x, y) in
                    raster::line_points(*x0 as i32, *y0 as i32, *x1 as i32, *y1 as i32)
                {
                    let (x, y) = (x as usize, y as usize);
                    screen.set_cell(x, y, Cell::new(*glyph, *attr)).map_err(ctx)?;
                    self.surface.set_cell(x, y, *glyph, *attr)?;
                }
            }
            Command::RenderText { x, y, attr, text } => {
                let (x, y) = (*x as usize, *y as usize);
                // Validate the full run extent before the first write
                let end_x = x + text.len() - 1;
                if screen.cell(x, y).is_none() || screen.cell(end_x, y).is_none() {
                    let bad_x = if screen.cell(x, y).is_none() { x } else { end_x };
                    return Err(ctx(ProtocolError::OutOfBounds {
                        x: bad_x,
                        y,
                        width: screen.width(),
                        height: screen.height(),
                    }));
                }
                for (i, &glyph) in text.iter().enumerate() {
                    screen
                        .set_cell(x + i, y, Cell::new(glyph, *attr))
                        .map_err(ctx)?;
                    self.surface.set_cell(x + i, y, glyph, *attr)?;
                }
            }
            Command::MoveCursor { x, y } => {
                screen.move_cursor(*x as usize, *y as usize).map_err(ctx)?;
            }
            Command::DrawAtCursor { glyph, attr } => {
                let cursor = screen.cursor();
                screen.set_cell_at_cursor(Cell::new(*glyph, *attr));
                self.surface.set_cell(cursor.x, cursor.y, *glyph, *attr)?;
            }
            Command::ClearScreen => {
                screen.clear();
                self.surface.clear()?;
            }
            Command::End => return Ok(true),
        }

        Ok(false)
    }
}
