//! `sidenav show` command implementation.

use std::path::PathBuf;

use clap::Args;
use sidenav_config::SiteConfig;
use sidenav_menu::{NavItem, active_nav};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Path to descriptor file (default: auto-discover sidenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page path to resolve (shows sidebar sections, active nav entry,
    /// and the edit link for that page).
    #[arg(short, long)]
    path: Option<String>,

    /// Enable verbose output (show descriptor warnings).
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl ShowArgs {
    /// Execute the show command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading or validation fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = SiteConfig::load(self.config.as_deref(), None)?;

        output.highlight(&format!("{} - {}", config.title, config.description));
        output.separator();

        output.info("Navigation:");
        for item in &config.theme_config.nav {
            print_nav_item(&output, item, 1);
        }

        output.info("Sidebar prefixes:");
        for (prefix, sections) in config.theme_config.sidebar.iter() {
            let links: usize = sections.iter().map(|s| s.items.len()).sum();
            output.info(&format!(
                "  {prefix} ({} sections, {links} links)",
                sections.len()
            ));
        }

        if let Some(path) = self.path {
            output.separator();
            print_page_resolution(&output, &config, &path);
        }

        Ok(())
    }
}

/// Print one nav entry and its children, indented by depth.
fn print_nav_item(output: &Output, item: &NavItem, depth: usize) {
    let indent = "  ".repeat(depth);
    match &item.link {
        Some(link) => output.info(&format!("{indent}{} -> {link}", item.text)),
        None => output.info(&format!("{indent}{}", item.text)),
    }
    for child in &item.items {
        print_nav_item(output, child, depth + 1);
    }
}

/// Print the nav entry, sidebar sections, and edit link resolved for a page.
fn print_page_resolution(output: &Output, config: &SiteConfig, path: &str) {
    output.highlight(&format!("Resolution for {path}:"));

    match active_nav(&config.theme_config.nav, path) {
        Some(item) => output.info(&format!("  Active nav entry: {}", item.text)),
        None => output.warning("  No active nav entry"),
    }

    match config.theme_config.sidebar.sections_for(path) {
        Some(sections) => {
            for section in sections {
                output.info(&format!("  {}:", section.text));
                for link in &section.items {
                    output.info(&format!("    {} -> {}", link.text, link.link));
                }
            }
        }
        None => output.warning(&format!("  No sidebar sections for {path}")),
    }

    output.info(&format!(
        "  Edit link: {}",
        config.theme_config.edit_link.url_for(path)
    ));
}
