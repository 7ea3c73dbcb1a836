//! Gridcast Viewer
//!
//! Replays a binary drawing-command stream on the live terminal and waits
//! for a keypress before restoring the screen. Requires the `tui` feature.

use std::io;
use std::process::ExitCode;

use gridcast::surface::{DisplaySurface, TermSurface};
use gridcast::Session;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Log to stderr; stdout belongs to the display surface
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(path) = args.get(1).filter(|a| !a.starts_with('-')) else {
        eprintln!("Usage: gridcast-view <INPUT_FILE>");
        return ExitCode::FAILURE;
    };

    let stream = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    match run(&stream) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Replay failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(stream: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(TermSurface::new());

    // Shutdown must run whether or not the replay succeeded; TermSurface's
    // Drop covers panics and early returns as well.
    let replay_result = session.replay(stream);

    let surface = session.surface_mut();
    if replay_result.is_ok() {
        surface.await_dismissal()?;
    }
    surface.shutdown()?;

    replay_result?;
    Ok(())
}
