//! Gridcast
//!
//! Replays compact binary drawing-command streams against an addressable
//! terminal character grid. The crate provides:
//!
//! - `protocol`: frame decoder and typed command decoder for the
//!   `[command_id][length][payload]` wire format
//! - `core`: screen model (cell grid, cursor, dimensions) and
//!   deterministic snapshots
//! - `raster`: Bresenham line rasterization
//! - `session`: the sequential dispatcher replaying a stream onto the
//!   screen model and a display surface
//! - `surface`: the display-surface capability with in-memory and
//!   (feature `tui`) live crossterm implementations

pub mod core;
mod error;
pub mod protocol;
pub mod raster;
pub mod session;
pub mod surface;

pub use error::{ProtocolError, Result, SessionError};
pub use session::{Session, SessionState};
