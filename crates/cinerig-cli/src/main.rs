//! Cinerig CLI - command-line interface for interchange files

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{info, roundtrip, validate};

#[derive(Parser)]
#[command(name = "cinerig")]
#[command(about = "Camera spline interchange tooling", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the contents of an interchange file
    Info {
        /// Path to the interchange file
        path: String,
    },

    /// Check an interchange file against the structural rules
    Validate {
        /// Path to the interchange file
        path: String,
    },

    /// Rebuild a scene from an interchange file and export it again
    Roundtrip {
        /// Input interchange file
        input: String,

        /// Output interchange file
        #[arg(short, long, default_value = "roundtrip.json")]
        output: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { path } => info::run(&path),
        Commands::Validate { path } => validate::run(&path),
        Commands::Roundtrip { input, output } => roundtrip::run(&input, &output),
    }
}
