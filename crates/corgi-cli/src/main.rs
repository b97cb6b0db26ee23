//! corgi-hex CLI tool
//!
//! Inspects the hex grid geometry used by the Cows and Corgis board.
//!
//! Usage:
//!   corgi-hex board <radius>
//!   corgi-hex range <q> <r> <radius>
//!   corgi-hex ring <q> <r> <radius>
//!   corgi-hex neighbors <q> <r>
//!   corgi-hex distance <q1> <r1> <q2> <r2>
//!   corgi-hex to-pixel <q> <r>
//!   corgi-hex pixel <x> <y>
//!   corgi-hex direction <q1> <r1> <q2> <r2>
//!   corgi-hex opposite <cq> <cr> <rq> <rr>

mod commands;
mod config;
mod error;

use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::Command;
use crate::config::CliConfig;
use crate::error::{CliError, Result};

fn print_usage() {
    eprintln!("corgi-hex - Inspect Cows and Corgis hex grid geometry");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  corgi-hex board <radius>                   All hexes of a board centered on (0, 0)");
    eprintln!("  corgi-hex range <q> <r> <radius>           Hexes within radius of a hex");
    eprintln!("  corgi-hex ring <q> <r> <radius>            Hexes at exactly radius from a hex");
    eprintln!("  corgi-hex neighbors <q> <r>                The six neighbors, East first");
    eprintln!("  corgi-hex distance <q1> <r1> <q2> <r2>     Steps between two hexes");
    eprintln!("  corgi-hex to-pixel <q> <r>                 Pixel center of a hex");
    eprintln!("  corgi-hex pixel <x> <y>                    Hex under a pixel");
    eprintln!("  corgi-hex direction <q1> <r1> <q2> <r2>    Direction index between neighbors");
    eprintln!("  corgi-hex opposite <cq> <cr> <rq> <rr>     Reflect a neighbor through a center hex");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CORGI_HEX_SIZE   Hex circumradius in pixels (default: 32)");
    eprintln!("  CORGI_OFFSET_X   Pixel x of the origin hex (default: 0)");
    eprintln!("  CORGI_OFFSET_Y   Pixel y of the origin hex (default: 0)");
    eprintln!("  CORGI_OUTPUT     text or json (default: text)");
    eprintln!("  RUST_LOG         Log filter (default: corgi_hex=info,corgi_hexgrid=info)");
}

fn run(args: &[String]) -> Result<String> {
    let config = CliConfig::from_env()?;
    debug!(?config, "loaded config");

    let layout = config.layout()?;
    let command = Command::parse(args)?;
    debug!(?command, "running command");

    command.execute(&layout).render(config.output)
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "corgi_hex=info,corgi_hexgrid=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None => {
            print_usage();
            return ExitCode::from(2);
        }
        Some("-h" | "--help" | "help") => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Some(_) => {}
    }

    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, CliError::Usage(_)) {
                eprintln!();
                print_usage();
            }
            ExitCode::FAILURE
        }
    }
}
