//! Binary drawing-command protocol
//!
//! Wire format: a stream is a plain sequence of frames, each
//! `[command_id: 1 byte][length: 1 byte][payload: length bytes]`. There is
//! no stream header, no checksum, and no frame count; a stream ends at the
//! END command or when the input runs out.

pub mod command;
mod decoder;
mod frame;

pub use command::Command;
pub use decoder::FrameDecoder;
pub use frame::Frame;
