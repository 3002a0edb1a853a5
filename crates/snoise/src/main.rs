//! Command‑line entry point for the `snoise` tool.
//!
//! Samples any registered noise function at a point, or lists them.

use std::{fmt::Display, io, process};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// CLI command implementations.
mod cmd;

#[derive(Parser)]
#[command(name = "snoise")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(
        short,
        action = clap::ArgAction::Count,
        global = true,
        help = "Sets the level of verbosity"
    )]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
/// Subcommands supported by the `snoise` tool.
enum Commands {
    #[command(about = "Sample a noise function at a point")]
    /// Sample a noise function at a point.
    Sample {
        #[arg(
            short = 's',
            long = "seed",
            default_value_t = 0,
            help = "Seed for the permutation table"
        )]
        /// Seed for the permutation table.
        seed: u32,

        #[arg(help = "Noise function name (see `snoise list`)")]
        /// Noise function name.
        name: String,

        #[arg(
            required = true,
            allow_negative_numbers = true,
            help = "Coordinates, one per dimension"
        )]
        /// Coordinates of the sample point.
        coords: Vec<f64>,
    },

    #[command(about = "List noise functions and their output ranges")]
    /// List noise functions and their output ranges.
    List,
}

/// Print a result or exit with an error.
fn report<T: Display>(result: Result<T>) {
    match result {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}

/// Install a stderr subscriber; `RUST_LOG` overrides the `-v` level.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Handle the `list` subcommand.
fn handle_list() {
    println!("Noise functions (key — description — range):");
    for line in cmd::list() {
        println!("{line}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);

    match cli.command {
        Commands::Sample { seed, name, coords } => report(cmd::sample(&name, seed, &coords)),
        Commands::List => handle_list(),
    }
}
