//! Sidenav CLI - Navigation descriptor toolkit.
//!
//! Provides commands for:
//! - `validate`: Load and validate the site descriptor
//! - `emit`: Write the descriptor as a JSON asset for the renderer
//! - `show`: Inspect the navigation tree and sidebar resolution

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{EmitArgs, ShowArgs, ValidateArgs};
use output::Output;

/// Sidenav - Navigation descriptor toolkit.
#[derive(Parser)]
#[command(name = "sidenav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the site descriptor.
    Validate(ValidateArgs),
    /// Emit the descriptor as a JSON asset.
    Emit(EmitArgs),
    /// Show the navigation tree and sidebar resolution.
    Show(ShowArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if the verbose flag is set for the invoked command
    let verbose = match &cli.command {
        Commands::Validate(args) => args.verbose,
        Commands::Emit(args) => args.verbose,
        Commands::Show(args) => args.verbose,
    };

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Validate(args) => args.execute(),
        Commands::Emit(args) => args.execute(),
        Commands::Show(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
