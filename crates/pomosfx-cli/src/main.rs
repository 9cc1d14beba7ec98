//! PomoSFX CLI - Firmware audio asset preparation for the Pomodoro timer
//!
//! This binary provides the two asset-build tools: batch generation of the
//! stock notification sounds and WAV-to-C-array conversion.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use pomosfx_cli::commands;

/// PomoSFX - Pomodoro timer firmware audio asset tools
#[derive(Parser)]
#[command(name = "pomosfx")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the stock notification sounds as WAV files
    Sounds,

    /// Convert a WAV file to an embeddable C byte array on stdout
    Embed {
        /// Path to the input WAV file
        input: String,

        /// C identifier for the generated array
        name: String,
    },
}

fn main() -> ExitCode {
    // Route argument errors through the documented exit status 1 while
    // keeping --help and --version on the success path.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let result = match cli.command {
        Commands::Sounds => commands::sounds::run(),
        Commands::Embed { input, name } => commands::embed::run(&input, &name),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
