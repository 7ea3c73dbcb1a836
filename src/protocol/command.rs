//! Typed commands
//!
//! The closed set of operations the wire protocol can express. Decoding a
//! frame into a `Command` validates the payload shape up front, so an
//! unknown id or a bad length is a decode failure, never a runtime surprise
//! inside a handler.

use crate::error::ProtocolError;

use super::frame::Frame;

/// Initialize the screen: width, height, color mode
pub const SETUP: u8 = 0x01;
/// Write one cell: x, y, attribute, char code
pub const DRAW_CHAR: u8 = 0x02;
/// Rasterize a line of cells: x0, y0, x1, y1, attribute, char code
pub const DRAW_LINE: u8 = 0x03;
/// Write a run of cells: x, y, attribute, then one byte per character
pub const RENDER_TEXT: u8 = 0x04;
/// Reposition the cursor: x, y
pub const MOVE_CURSOR: u8 = 0x05;
/// Write one cell at the cursor: char code, attribute
pub const DRAW_AT_CURSOR: u8 = 0x06;
/// Blank every cell; empty payload
pub const CLEAR_SCREEN: u8 = 0x07;
/// Terminate the replay; empty payload
pub const END: u8 = 0xFF;

/// A decoded drawing command with its typed payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Setup {
        width: u8,
        height: u8,
        color_mode: u8,
    },
    DrawChar {
        x: u8,
        y: u8,
        attr: u8,
        glyph: u8,
    },
    DrawLine {
        x0: u8,
        y0: u8,
        x1: u8,
        y1: u8,
        attr: u8,
        glyph: u8,
    },
    RenderText {
        x: u8,
        y: u8,
        attr: u8,
        text: Vec<u8>,
    },
    MoveCursor {
        x: u8,
        y: u8,
    },
    DrawAtCursor {
        glyph: u8,
        attr: u8,
    },
    ClearScreen,
    End,
}

fn expect_len(
    command: &'static str,
    expected: &'static str,
    payload: &[u8],
    len: usize,
) -> Result<(), ProtocolError> {
    if payload.len() != len {
        return Err(ProtocolError::MalformedPayload {
            command,
            expected,
            actual: payload.len(),
        });
    }
    Ok(())
}

impl Command {
    /// Decode a frame into a typed command, validating the payload shape
    pub fn decode(frame: &Frame<'_>) -> Result<Command, ProtocolError> {
        let p = frame.payload;
        match frame.command_id {
            SETUP => {
                expect_len("SETUP", "3", p, 3)?;
                if p[0] == 0 || p[1] == 0 {
                    return Err(ProtocolError::MalformedPayload {
                        command: "SETUP",
                        expected: "nonzero width and height",
                        actual: p.len(),
                    });
                }
                Ok(Command::Setup {
                    width: p[0],
                    height: p[1],
                    color_mode: p[2],
                })
            }
            DRAW_CHAR => {
                expect_len("DRAW_CHAR", "4", p, 4)?;
                Ok(Command::DrawChar {
                    x: p[0],
                    y: p[1],
                    attr: p[2],
                    glyph: p[3],
                })
            }
            DRAW_LINE => {
                expect_len("DRAW_LINE", "6", p, 6)?;
                Ok(Command::DrawLine {
                    x0: p[0],
                    y0: p[1],
                    x1: p[2],
                    y1: p[3],
                    attr: p[4],
                    glyph: p[5],
                })
            }
            RENDER_TEXT => {
                // x, y, attribute, then at least one character
                if p.len() < 4 {
                    return Err(ProtocolError::MalformedPayload {
                        command: "RENDER_TEXT",
                        expected: "at least 4",
                        actual: p.len(),
                    });
                }
                Ok(Command::RenderText {
                    x: p[0],
                    y: p[1],
                    attr: p[2],
                    text: p[3..].to_vec(),
                })
            }
            MOVE_CURSOR => {
                expect_len("MOVE_CURSOR", "2", p, 2)?;
                Ok(Command::MoveCursor { x: p[0], y: p[1] })
            }
            DRAW_AT_CURSOR => {
                expect_len("DRAW_AT_CURSOR", "2", p, 2)?;
                Ok(Command::DrawAtCursor {
                    glyph: p[0],
                    attr: p[1],
                })
            }
            CLEAR_SCREEN => {
                expect_len("CLEAR_SCREEN", "0", p, 0)?;
                Ok(Command::ClearScreen)
            }
            END => {
                expect_len("END", "0", p, 0)?;
                Ok(Command::End)
            }
            id => Err(ProtocolError::UnknownCommand {
                id,
                offset: frame.offset,
            }),
        }
    }

    /// The wire id for this command
    pub fn id(&self) -> u8 {
        match self {
            Command::Setup { .. } => SETUP,
            Command::DrawChar { .. } => DRAW_CHAR,
            Command::DrawLine { .. } => DRAW_LINE,
            Command::RenderText { .. } => RENDER_TEXT,
            Command::MoveCursor { .. } => MOVE_CURSOR,
            Command::DrawAtCursor { .. } => DRAW_AT_CURSOR,
            Command::ClearScreen => CLEAR_SCREEN,
            Command::End => END,
        }
    }

    /// Human-readable command name, for logs and errors
    pub fn name(&self) -> &'static str {
        match self {
            Command::Setup { .. } => "SETUP",
            Command::DrawChar { .. } => "DRAW_CHAR",
            Command::DrawLine { .. } => "DRAW_LINE",
            Command::RenderText { .. } => "RENDER_TEXT",
            Command::MoveCursor { .. } => "MOVE_CURSOR",
            Command::DrawAtCursor { .. } => "DRAW_AT_CURSOR",
            Command::ClearScreen => "CLEAR_SCREEN",
            Command::End => "END",
        }
    }

    /// Encode this command as a complete wire frame
    pub fn encode(&self) -> Vec<u8> {
        let mut payload: Vec<u8> = Vec::new();
        match self {
            Command::Setup {
                width,
                height,
                color_mode,
            } => payload.extend([*width, *height, *color_mode]),
            Command::DrawChar { x, y, attr, glyph } => payload.extend([*x, *y, *attr, *glyph]),
            Command::DrawLine {
                x0,
                y0,
                x1,
                y1,
                attr,
                glyph,
            } => payload.extend([*x0, *y0, *x1, *y1, *attr, *glyph]),
            Command::RenderText { x, y, attr, text } => {
                payload.extend([*x, *y, *attr]);
                payload.extend_from_slice(text);
            }
            Command::MoveCursor { x, y } => payload.extend([*x, *y]),
            Command::DrawAtCursor { glyph, attr } => payload.extend([*glyph, *attr]),
            Command::ClearScreen | Command::End => {}
        }

        let mut bytes = Vec::with_capacity(2 + payload.len());
        bytes.push(self.id());
        bytes.push(payload.len() as u8);
        bytes.extend_from_slice(&payload);
        bytes
    }
}
