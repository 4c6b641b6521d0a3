//! `sidenav validate` command implementation.

use std::path::PathBuf;

use clap::Args;
use sidenav_config::{SiteConfig, SiteOptions};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the validate command.
#[derive(Args)]
pub(crate) struct ValidateArgs {
    /// Path to descriptor file (default: auto-discover sidenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

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

impl ValidateArgs {
    /// Execute the validate command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading or validation fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let options = SiteOptions {
            title: self.title,
            description: self.description,
            logo: self.logo,
        };
        let config = SiteConfig::load(self.config.as_deref(), Some(&options))?;

        output.info(&format!("Site: {} - {}", config.title, config.description));
        output.info(&format!(
            "Nav entries: {}",
            config.theme_config.nav.len()
        ));
        output.info(&format!(
            "Sidebar prefixes: {}",
            config.theme_config.sidebar.len()
        ));
        output.success("Descriptor is valid");
        Ok(())
    }
}
