//! Theme-level descriptor sections consumed by the site renderer.
//!
//! [`ThemeConfig`] aggregates the top navigation bar, the path-keyed
//! sidebar, and the remaining chrome the renderer reads: outline panel
//! title, social link icons, the per-page edit link template, and the
//! footer.

use serde::{Deserialize, Serialize};
use sidenav_menu::{NavItem, Sidebar};

use crate::defaults;

/// Placeholder substituted with the page's relative path in
/// [`EditLink::url_for`].
pub const PATH_TOKEN: &str = ":path";

/// Theme configuration consumed by the external renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    /// Top navigation bar entries, rendered in order.
    pub nav: Vec<NavItem>,
    /// Path-prefix keyed sidebar sections.
    pub sidebar: Sidebar,
    /// Label for the in-page outline panel.
    pub outline_title: String,
    /// Icon + external URL pairs.
    pub social_links: Vec<SocialLink>,
    /// Per-page "edit this page" link template.
    pub edit_link: EditLink,
    /// Static footer text.
    pub footer: Footer,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            nav: defaults::nav(),
            sidebar: defaults::sidebar(),
            outline_title: "大纲".to_owned(),
            social_links: vec![SocialLink {
                icon: "github".to_owned(),
                link: "https://github.com/vuejs/vitepress".to_owned(),
            }],
            edit_link: EditLink::default(),
            footer: Footer::default(),
        }
    }
}

/// Icon + external URL pair rendered in the navigation bar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name (e.g. `github`).
    pub icon: String,
    /// Absolute URL the icon links to.
    pub link: String,
}

/// URL template for the per-page "edit this page" link.
///
/// `pattern` contains the [`PATH_TOKEN`] placeholder exactly once; the
/// renderer substitutes the current page's relative source path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditLink {
    /// URL template containing the `:path` token.
    pub pattern: String,
    /// Link label.
    pub text: String,
}

impl EditLink {
    /// Build the edit URL for a page by substituting the `:path` token.
    ///
    /// A leading `/` on the page path is dropped so the substituted URL
    /// keeps a single separator.
    #[must_use]
    pub fn url_for(&self, page_path: &str) -> String {
        self.pattern
            .replacen(PATH_TOKEN, page_path.trim_start_matches('/'), 1)
    }
}

impl Default for EditLink {
    fn default() -> Self {
        Self {
            pattern: "https://github.com/lemonnuu/vitepress-demo/blob/master/docs/:path"
                .to_owned(),
            text: "Edit this page on GitHub".to_owned(),
        }
    }
}

/// Static footer text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    /// Message line.
    pub message: String,
    /// Copyright line.
    pub copyright: String,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            message: "Vue3 & TypeScript share.".to_owned(),
            copyright: "Copyright © 2019-present Mochi".to_owned(),
        }
    }
}
