//! Sidebar model keyed by path prefix.
//!
//! Provides [`Sidebar`], a mapping from URL path prefixes to the ordered
//! [`SidebarSection`] sequences shown for pages under that prefix. Lookup
//! uses longest-prefix matching against the current page path.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single page reference within a sidebar section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarLink {
    /// Display label.
    pub text: String,
    /// Link target path.
    pub link: String,
}

impl SidebarLink {
    /// Create a link with the given label and target path.
    #[must_use]
    pub fn new(text: &str, link: &str) -> Self {
        Self {
            text: text.to_owned(),
            link: link.to_owned(),
        }
    }
}

/// A collapsible, titled group of links within a sidebar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSection {
    /// Group title.
    pub text: String,
    /// Whether the group can be collapsed in the UI.
    pub collapsible: bool,
    /// Links shown in the group, in order.
    #[serde(default)]
    pub items: Vec<SidebarLink>,
}

/// Mapping from URL path prefix to the sidebar sections shown for pages
/// under that prefix.
///
/// Keys are path prefixes starting and ending with `/` (e.g. `/guide/`).
/// The wire format is a plain map; storage is a `BTreeMap`, so iteration
/// order is deterministic and construction is idempotent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sidebar(BTreeMap<String, Vec<SidebarSection>>);

impl Sidebar {
    /// Create an empty sidebar mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the sections for a path prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: &str, sections: Vec<SidebarSection>) -> Self {
        self.0.insert(prefix.to_owned(), sections);
        self
    }

    /// Sections registered for an exact prefix key.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&[SidebarSection]> {
        self.0.get(prefix).map(Vec::as_slice)
    }

    /// Sections to show for a page, by longest-prefix match.
    ///
    /// Returns `None` when no registered prefix matches the page path.
    #[must_use]
    pub fn sections_for(&self, page_path: &str) -> Option<&[SidebarSection]> {
        self.0
            .iter()
            .filter(|(prefix, _)| page_path.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, sections)| sections.as_slice())
    }

    /// Iterate over `(prefix, sections)` entries in deterministic order.
    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, Vec<SidebarSection>> {
        self.0.iter()
    }

    /// Number of registered prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no prefixes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Sidebar {
    type Item = (&'a String, &'a Vec<SidebarSection>);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Vec<SidebarSection>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn section(text: &str, links: &[(&str, &str)]) -> SidebarSection {
        SidebarSection {
            text: text.to_owned(),
            collapsible: true,
            items: links
                .iter()
                .map(|(text, link)| SidebarLink::new(text, link))
                .collect(),
        }
    }

    #[test]
    fn test_get_exact_prefix() {
        let sidebar = Sidebar::new().with_prefix(
            "/guide/",
            vec![section("Guide", &[("Introduction", "/guide/intro")])],
        );
        assert!(sidebar.get("/guide/").is_some());
        assert!(sidebar.get("/guide").is_none());
    }

    #[test]
    fn test_sections_for_prefix_match() {
        let sidebar = Sidebar::new().with_prefix(
            "/guide/",
            vec![section("Guide", &[("Introduction", "/guide/intro")])],
        );
        let sections = sidebar.sections_for("/guide/intro").unwrap();
        assert_eq!(sections[0].text, "Guide");
    }

    #[test]
    fn test_sections_for_no_match() {
        let sidebar = Sidebar::new().with_prefix(
            "/guide/",
            vec![section("Guide", &[("Introduction", "/guide/intro")])],
        );
        assert!(sidebar.sections_for("/blog/post").is_none());
    }

    #[test]
    fn test_sections_for_longest_prefix_wins() {
        let sidebar = Sidebar::new()
            .with_prefix("/", vec![section("Root", &[("Home", "/index")])])
            .with_prefix(
                "/guide/",
                vec![section("Guide", &[("Introduction", "/guide/intro")])],
            )
            .with_prefix(
                "/guide/advanced/",
                vec![section("Advanced", &[("Tuning", "/guide/advanced/tuning")])],
            );

        assert_eq!(sidebar.sections_for("/index").unwrap()[0].text, "Root");
        assert_eq!(
            sidebar.sections_for("/guide/intro").unwrap()[0].text,
            "Guide"
        );
        assert_eq!(
            sidebar.sections_for("/guide/advanced/tuning").unwrap()[0].text,
            "Advanced"
        );
    }

    #[test]
    fn test_with_prefix_replaces_existing() {
        let sidebar = Sidebar::new()
            .with_prefix("/guide/", vec![section("Old", &[])])
            .with_prefix("/guide/", vec![section("New", &[])]);
        assert_eq!(sidebar.len(), 1);
        assert_eq!(sidebar.get("/guide/").unwrap()[0].text, "New");
    }

    #[test]
    fn test_serialize_as_plain_map() {
        let sidebar = Sidebar::new().with_prefix(
            "/guide/",
            vec![section("Guide", &[("Introduction", "/guide/intro")])],
        );
        let json = serde_json::to_value(&sidebar).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "/guide/": [{
                    "text": "Guide",
                    "collapsible": true,
                    "items": [{ "text": "Introduction", "link": "/guide/intro" }]
                }]
            })
        );
    }

    #[test]
    fn test_deserialize_round_trip() {
        let sidebar = Sidebar::new()
            .with_prefix("/guide/", vec![section("Guide", &[("Intro", "/guide/intro")])])
            .with_prefix("/reference/", vec![section("Reference", &[])]);
        let json = serde_json::to_string(&sidebar).unwrap();
        let parsed: Sidebar = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sidebar);
    }

    #[test]
    fn test_empty_sidebar() {
        let sidebar = Sidebar::new();
        assert!(sidebar.is_empty());
        assert_eq!(sidebar.len(), 0);
        assert!(sidebar.sections_for("/guide/intro").is_none());
    }
}
