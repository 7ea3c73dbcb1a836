//! Error types for stream decoding and replay

use std::io;
use thiserror::Error;

/// Errors defined by the wire protocol and the screen-model invariants.
///
/// Every variant is detected at the frame boundary, before any mutation for
/// that frame is applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The length byte claims more payload than the stream holds
    #[error("truncated frame at byte {offset}: need {needed} more bytes, {available} remain")]
    TruncatedFrame {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Command id is not in the recognized set
    #[error("unknown command {id:#04x} at byte {offset}")]
    UnknownCommand { id: u8, offset: usize },

    /// Payload length inconsistent with the command's required shape
    #[error("malformed {command} payload: expected {expected} bytes, got {actual}")]
    MalformedPayload {
        command: &'static str,
        expected: &'static str,
        actual: usize,
    },

    /// Drawing, cursor, or clear command before SETUP
    #[error("{command} before SETUP")]
    UninitializedAccess { command: &'static str },

    /// A second SETUP frame in the same stream
    #[error("duplicate SETUP: screen already initialized")]
    DuplicateSetup,

    /// Coordinate outside the current grid
    #[error("coordinate ({x}, {y}) outside {width}x{height} screen")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Errors surfaced by a replay session
#[derive(Error, Debug)]
pub enum SessionError {
    /// A frame failed to decode or apply
    #[error("frame {index} (command {command:#04x}, byte offset {offset}): {source}")]
    Frame {
        index: usize,
        command: u8,
        offset: usize,
        source: ProtocolError,
    },

    /// The display surface reported an I/O failure
    #[error("display surface error: {0}")]
    Surface(#[from] io::Error),

    /// The session already reached END or a fatal error
    #[error("session already finished")]
    Finished,
}

/// Result type for replay operations
pub type Result<T> = std::result::Result<T, SessionError>;
