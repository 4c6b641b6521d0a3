//! Top navigation bar model.
//!
//! Provides [`NavItem`] for the always-visible top bar and resolution of
//! the entry to highlight for the current page path.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// One entry in the top navigation bar.
///
/// An entry is either a leaf pointing directly at a page, or a dropdown
/// group carrying child entries. Groups usually have no `link` of their own.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    /// Display label.
    pub text: String,
    /// Link target path (leaves).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Pattern deciding when this entry is highlighted, matched as a regex
    /// against the current page path. Falls back to a link-prefix test
    /// when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_match: Option<String>,
    /// Child entries (dropdown groups).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavItem>,
}

impl NavItem {
    /// Create a leaf entry pointing at a page path.
    #[must_use]
    pub fn leaf(text: &str, link: &str) -> Self {
        Self {
            text: text.to_owned(),
            link: Some(link.to_owned()),
            active_match: None,
            items: Vec::new(),
        }
    }

    /// Create a dropdown group with child entries.
    #[must_use]
    pub fn group(text: &str, items: Vec<NavItem>) -> Self {
        Self {
            text: text.to_owned(),
            link: None,
            active_match: None,
            items,
        }
    }

    /// Set the highlight pattern for this entry.
    #[must_use]
    pub fn with_active_match(mut self, pattern: &str) -> Self {
        self.active_match = Some(pattern.to_owned());
        self
    }

    /// True if this entry is a direct link without children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.items.is_empty()
    }

    /// True if this entry is a dropdown group.
    #[must_use]
    pub fn is_group(&self) -> bool {
        !self.items.is_empty()
    }

    /// Whether this entry should be highlighted for the given page path.
    ///
    /// An explicit `active_match` pattern wins when present. Leaves fall
    /// back to a prefix test against the link's section (everything up to
    /// and including the last `/`). Groups are active when any child is.
    ///
    /// A pattern that fails to compile never matches; pattern validity is
    /// checked at descriptor load time.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        if let Some(pattern) = &self.active_match {
            return Regex::new(pattern).is_ok_and(|re| re.is_match(path));
        }
        if let Some(link) = &self.link {
            return match link.rfind('/') {
                Some(idx) => path.starts_with(&link[..=idx]),
                None => false,
            };
        }
        self.items.iter().any(|item| item.is_active(path))
    }
}

/// Find the nav entry to highlight for the given page path.
///
/// Entries are checked in order; the first active entry wins, so earlier
/// entries take precedence when patterns overlap.
#[must_use]
pub fn active_nav<'a>(items: &'a [NavItem], path: &str) -> Option<&'a NavItem> {
    items.iter().find(|item| item.is_active(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_leaf_classification() {
        let item = NavItem::leaf("Guide", "/guide/intro");
        assert!(item.is_leaf());
        assert!(!item.is_group());
        assert_eq!(item.link.as_deref(), Some("/guide/intro"));
    }

    #[test]
    fn test_group_classification() {
        let item = NavItem::group("More", vec![NavItem::leaf("Guide", "/guide/intro")]);
        assert!(item.is_group());
        assert!(!item.is_leaf());
        assert!(item.link.is_none());
        assert_eq!(item.items.len(), 1);
    }

    #[test]
    fn test_with_active_match() {
        let item = NavItem::leaf("Guide", "/guide/intro").with_active_match("/guide/");
        assert_eq!(item.active_match.as_deref(), Some("/guide/"));
    }

    #[test]
    fn test_is_active_pattern_wins() {
        let item = NavItem::leaf("Guide", "/guide/intro").with_active_match("/docs/");
        assert!(item.is_active("/docs/setup"));
        assert!(!item.is_active("/guide/intro"));
    }

    #[test]
    fn test_is_active_pattern_is_case_sensitive() {
        let item = NavItem::leaf("Vue3", "/Vue3/000_draft").with_active_match("/vue3/");
        assert!(!item.is_active("/Vue3/000_draft"));
        assert!(item.is_active("/vue3/000_draft"));
    }

    #[test]
    fn test_is_active_invalid_pattern_never_matches() {
        let item = NavItem::leaf("Guide", "/guide/intro").with_active_match("([");
        assert!(!item.is_active("/guide/intro"));
    }

    #[test]
    fn test_is_active_link_prefix_fallback() {
        let item = NavItem::leaf("Guide", "/guide/intro");
        assert!(item.is_active("/guide/intro"));
        assert!(item.is_active("/guide/setup"));
        assert!(!item.is_active("/reference/api"));
    }

    #[test]
    fn test_is_active_group_via_child() {
        let group = NavItem::group(
            "More",
            vec![
                NavItem::leaf("Guide", "/guide/intro"),
                NavItem::leaf("Reference", "/reference/api"),
            ],
        );
        assert!(group.is_active("/reference/api"));
        assert!(!group.is_active("/blog/post"));
    }

    #[test]
    fn test_active_nav_first_match_wins() {
        let nav = vec![
            NavItem::leaf("Guide", "/guide/intro"),
            NavItem::leaf("Deep Guide", "/guide/deep/intro").with_active_match("/guide/"),
        ];
        let active = active_nav(&nav, "/guide/setup");
        assert_eq!(active.map(|i| i.text.as_str()), Some("Guide"));
    }

    #[test]
    fn test_active_nav_none() {
        let nav = vec![NavItem::leaf("Guide", "/guide/intro")];
        assert!(active_nav(&nav, "/blog/post").is_none());
    }

    #[test]
    fn test_serialize_leaf_omits_empty_fields() {
        let item = NavItem::leaf("Guide", "/guide/intro");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "text": "Guide", "link": "/guide/intro" })
        );
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let item = NavItem::leaf("Guide", "/guide/intro").with_active_match("/guide/");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["activeMatch"], "/guide/");
    }

    #[test]
    fn test_deserialize_group() {
        let json = r#"{
            "text": "More",
            "items": [{ "text": "Guide", "link": "/guide/intro" }]
        }"#;
        let item: NavItem = serde_json::from_str(json).unwrap();
        assert_eq!(
            item,
            NavItem::group("More", vec![NavItem::leaf("Guide", "/guide/intro")])
        );
    }
}
