//! `sidenav emit` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use sidenav_config::{SiteConfig, SiteOptions};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the emit command.
#[derive(Args)]
pub(crate) struct EmitArgs {
    /// Path to descriptor file (default: auto-discover sidenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file for the JSON asset (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Site title (overrides descriptor).
    #[arg(long)]
    title: Option<String>,

    /// Site description (overrides descriptor).
    #[arg(long)]
    description: Option<String>,

    /// Logo asset path (overrides descriptor).
    #[arg(long)]
    logo: Option<String>,

    /// Enable verbose output (show descriptor warnings).
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl EmitArgs {
    /// Execute the emit command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading, validation, or writing fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let options = SiteOptions {
            title: self.title,
            description: self.description,
            logo: self.logo,
        };
        let config = SiteConfig::load(self.config.as_deref(), Some(&options))?;

        let json = config.to_json_pretty()?;
        match self.output {
            Some(path) => {
                std::fs::write(&path, json)?;
                output.success(&format!("Descriptor written to {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(json.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}
