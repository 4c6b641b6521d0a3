//! Site descriptor management for sidenav.
//!
//! Parses `sidenav.toml` descriptor files with serde and provides
//! auto-discovery of descriptor files in parent directories. When no file
//! is found, the built-in snapshot content from [`defaults`] is used.
//!
//! Override settings can be applied during load via [`SiteOptions`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `title`
//! - `description`
//! - `themeConfig.editLink.pattern`
//! - `themeConfig.socialLinks[].link`

pub mod defaults;
mod expand;
mod theme;

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};
use sidenav_menu::NavItem;

pub use theme::{EditLink, Footer, PATH_TOKEN, SocialLink, ThemeConfig};

/// Override settings applied on top of loaded descriptor values.
///
/// All fields are optional. Only non-None values override the loaded
/// descriptor.
#[derive(Debug, Default)]
pub struct SiteOptions {
    /// Override site title.
    pub title: Option<String>,
    /// Override site description.
    pub description: Option<String>,
    /// Override logo asset path.
    pub logo: Option<String>,
}

/// Descriptor filename to search for.
const CONFIG_FILENAME: &str = "sidenav.toml";

/// Root site descriptor consumed by the external renderer.
///
/// A fully-constructed value is pure data: it is never mutated after
/// loading, and serializing it twice yields identical output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Whether the renderer shows last-modified timestamps.
    pub last_updated: bool,
    /// Logo asset path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Theme configuration (nav, sidebar, chrome).
    pub theme_config: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Vue3 & TypeScript".to_owned(),
            description: "Vue3 & TypeScript share".to_owned(),
            last_updated: true,
            logo: Some("logo.png".to_owned()),
            theme_config: ThemeConfig::default(),
        }
    }
}

/// Descriptor error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Descriptor file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Descriptor error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Descriptor field path (e.g. "`themeConfig.editLink.pattern`").
        field: String,
        /// Error message (e.g. "${`EDIT_BASE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a link field to be a non-empty site-absolute path.
fn require_absolute_link(link: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(link, field)?;
    if !link.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "{field} must start with / (got '{link}')"
        )));
    }
    Ok(())
}

impl SiteConfig {
    /// Load the descriptor with optional override settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `sidenav.toml` in the current directory and parents,
    /// falling back to the built-in snapshot content.
    ///
    /// Overrides are applied after loading, then the result is validated.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist,
    /// parsing fails, or the final descriptor fails validation.
    pub fn load(
        config_path: Option<&Path>,
        options: Option<&SiteOptions>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(options) = options {
            config.apply_options(options);
        }

        config.validate()?;

        Ok(config)
    }

    /// Apply override settings to the descriptor.
    fn apply_options(&mut self, options: &SiteOptions) {
        if let Some(title) = &options.title {
            self.title.clone_from(title);
        }
        if let Some(description) = &options.description {
            self.description.clone_from(description);
        }
        if let Some(logo) = &options.logo {
            self.logo = Some(logo.clone());
        }
    }

    /// Search for a descriptor file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load the descriptor from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        tracing::debug!(path = %path.display(), "loaded site descriptor");

        Ok(config)
    }

    /// Serialize the descriptor to pretty JSON for one-shot emission as a
    /// static asset.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Expand environment variable references in descriptor strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.title = expand::expand_env(&self.title, "title")?;
        self.description = expand::expand_env(&self.description, "description")?;

        let edit_link = &mut self.theme_config.edit_link;
        edit_link.pattern =
            expand::expand_env(&edit_link.pattern, "themeConfig.editLink.pattern")?;

        for (idx, social) in self.theme_config.social_links.iter_mut().enumerate() {
            social.link = expand::expand_env(
                &social.link,
                &format!("themeConfig.socialLinks[{idx}].link"),
            )?;
        }

        Ok(())
    }

    /// Validate descriptor values.
    ///
    /// Checks that all required fields are set after defaulting and that
    /// nav, sidebar, edit link, and social link values satisfy the shape
    /// the renderer depends on. Called automatically by [`Self::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_nav()?;
        self.validate_sidebar()?;
        self.validate_edit_link()?;
        self.validate_social_links()?;
        Ok(())
    }

    /// Validate site metadata.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.title, "title")?;
        require_non_empty(&self.description, "description")?;
        if let Some(logo) = &self.logo {
            require_non_empty(logo, "logo")?;
        }
        Ok(())
    }

    /// Validate top navigation entries.
    fn validate_nav(&self) -> Result<(), ConfigError> {
        for (idx, item) in self.theme_config.nav.iter().enumerate() {
            validate_nav_item(item, &format!("themeConfig.nav[{idx}]"))?;
        }
        Ok(())
    }

    /// Validate the sidebar mapping.
    fn validate_sidebar(&self) -> Result<(), ConfigError> {
        for (prefix, sections) in self.theme_config.sidebar.iter() {
            if !prefix.starts_with('/') || !prefix.ends_with('/') {
                return Err(ConfigError::Validation(format!(
                    "sidebar key '{prefix}' must start and end with /"
                )));
            }
            if sections.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "sidebar.'{prefix}' must contain at least one section"
                )));
            }
            for (s_idx, section) in sections.iter().enumerate() {
                let field = format!("sidebar.'{prefix}'[{s_idx}]");
                require_non_empty(&section.text, &format!("{field}.text"))?;
                if section.items.is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "{field} must contain at least one link"
                    )));
                }
                for (l_idx, link) in section.items.iter().enumerate() {
                    let link_field = format!("{field}.items[{l_idx}]");
                    require_non_empty(&link.text, &format!("{link_field}.text"))?;
                    require_absolute_link(&link.link, &format!("{link_field}.link"))?;
                    if !link.link.starts_with(prefix.as_str()) {
                        // Intentional cross-references are allowed.
                        tracing::warn!(
                            prefix = %prefix,
                            link = %link.link,
                            "sidebar link points outside its path prefix"
                        );
                    }
                }
            }
        }
        Ok(())
    }

    /// Validate the edit link template.
    fn validate_edit_link(&self) -> Result<(), ConfigError> {
        let edit_link = &self.theme_config.edit_link;
        require_http_url(&edit_link.pattern, "themeConfig.editLink.pattern")?;
        let token_count = edit_link.pattern.matches(PATH_TOKEN).count();
        if token_count != 1 {
            return Err(ConfigError::Validation(format!(
                "themeConfig.editLink.pattern must contain the {PATH_TOKEN} token exactly once \
                 (found {token_count})"
            )));
        }
        require_non_empty(&edit_link.text, "themeConfig.editLink.text")?;
        Ok(())
    }

    /// Validate social link entries.
    fn validate_social_links(&self) -> Result<(), ConfigError> {
        for (idx, social) in self.theme_config.social_links.iter().enumerate() {
            let field = format!("themeConfig.socialLinks[{idx}]");
            require_non_empty(&social.icon, &format!("{field}.icon"))?;
            require_http_url(&social.link, &format!("{field}.link"))?;
        }
        Ok(())
    }
}

/// Validate a single nav entry, recursing into group children.
fn validate_nav_item(item: &NavItem, field: &str) -> Result<(), ConfigError> {
    require_non_empty(&item.text, &format!("{field}.text"))?;

    if let Some(pattern) = &item.active_match {
        Regex::new(pattern).map_err(|e| {
            ConfigError::Validation(format!("{field}.activeMatch is not a valid pattern: {e}"))
        })?;
    }

    if item.is_group() {
        if item.link.is_some() {
            // Groups usually act as pure dropdowns.
            tracing::warn!(text = %item.text, "nav group also carries a link");
        }
        for (idx, child) in item.items.iter().enumerate() {
            validate_nav_item(child, &format!("{field}.items[{idx}]"))?;
        }
        return Ok(());
    }

    match &item.link {
        Some(link) => require_absolute_link(link, &format!("{field}.link")),
        None => Err(ConfigError::Validation(format!(
            "{field}.link is required for entries without items"
        ))),
    }
}
