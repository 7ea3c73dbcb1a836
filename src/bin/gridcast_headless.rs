//! Gridcast Headless Runner
//!
//! Replays a binary drawing-command stream without touching the live
//! terminal and prints the resulting screen snapshot. Reads the stream
//! from a file or stdin.

use std::io::{self, Read};
use std::process::ExitCode;

use gridcast::core::Snapshot;
use gridcast::surface::NullSurface;
use gridcast::Session;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Parse command line arguments
    let mut input_file: Option<String> = None;
    let mut output_format = OutputFormat::Text;
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-f" | "--file" => {
                i += 1;
                if i < args.len() {
                    input_file = Some(args[i].clone());
                }
            }
            "-j" | "--json" => {
                output_format = OutputFormat::Json;
            }
            "-t" | "--text" => {
                output_format = OutputFormat::Text;
            }
            "-h" | "--help" => {
                show_help = true;
            }
            _ => {
                // Treat as input file if no flag
                if input_file.is_none() && !args[i].starts_with('-') {
                    input_file = Some(args[i].clone());
                }
            }
        }
        i += 1;
    }

    if show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    // Read the stream
    let stream = match &input_file {
        Some(path) => match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut data = Vec::new();
            if let Err(e) = io::stdin().read_to_end(&mut data) {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
            data
        }
    };

    // Replay it
    let mut session = Session::new(NullSurface);
    if let Err(e) = session.replay(&stream) {
        eprintln!("Replay failed: {}", e);
        return ExitCode::FAILURE;
    }

    let Some(screen) = session.screen() else {
        eprintln!("Empty stream: no screen was set up");
        return ExitCode::FAILURE;
    };
    let snapshot = Snapshot::from_screen(screen);

    // Output result
    match output_format {
        OutputFormat::Text => {
            println!("Screen ({}x{}):", snapshot.width, snapshot.height);
            println!("Cursor: ({}, {})", snapshot.cursor.x, snapshot.cursor.y);
            println!("---");
            print!("{}", snapshot.to_text());
            println!("---");
        }
        OutputFormat::Json => match snapshot.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing snapshot: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn print_help() {
    println!("Gridcast Headless Runner");
    println!();
    println!("Usage: gridcast-headless [OPTIONS] [INPUT_FILE]");
    println!();
    println!("Options:");
    println!("  -f, --file <PATH>  Read the command stream from a file");
    println!("  -j, --json         Output the snapshot as JSON");
    println!("  -t, --text         Output the snapshot as text (default)");
    println!("  -h, --help         Show this help message");
    println!();
    println!("If no input file is specified, reads from stdin.");
    println!();
    println!("Examples:");
    println!("  gridcast-headless demo.bin");
    println!("  gridcast-headless --json < demo.bin > snapshot.json");
}
