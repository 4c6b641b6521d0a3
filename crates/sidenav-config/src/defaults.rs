//! Built-in descriptor content for the Vue documentation site.
//!
//! Each builder returns one independent fragment of the descriptor and can
//! be replaced wholesale by a configuration file. The builders are pure:
//! calling one twice yields structurally equal values.

use sidenav_menu::{NavItem, Sidebar, SidebarLink, SidebarSection};

/// Top navigation bar entries.
#[must_use]
pub fn nav() -> Vec<NavItem> {
    vec![
        NavItem::leaf("Vue3", "/Vue3/000_draft").with_active_match("/vue3/"),
        NavItem::leaf("TypeScript", "/TypeScript/001_introduction")
            .with_active_match("/TypeScript/"),
        NavItem::group(
            "下拉选择",
            vec![
                NavItem::leaf("Vue3", "/Vue3/000_draft"),
                NavItem::leaf("VueRouter", "/VueRouter/001_introduction"),
                NavItem::leaf("Vuex", "/Vuex/001_introduction"),
                NavItem::leaf("Pinia", "/Pinia/001_introduction"),
                NavItem::leaf("TypeScript", "/TypeScript/001_introduction"),
            ],
        ),
    ]
}

/// Full sidebar mapping covering all topic prefixes.
#[must_use]
pub fn sidebar() -> Sidebar {
    Sidebar::new()
        .with_prefix("/Vue3/", sidebar_vue3())
        .with_prefix("/VueRouter/", sidebar_vue_router())
        .with_prefix("/Vuex/", sidebar_vuex())
        .with_prefix("/Pinia/", sidebar_pinia())
        .with_prefix("/TypeScript/", sidebar_typescript())
}

/// Sidebar sections for pages under `/Vue3/`.
#[must_use]
pub fn sidebar_vue3() -> Vec<SidebarSection> {
    vec![SidebarSection {
        text: "Vue3".to_owned(),
        collapsible: true,
        items: vec![
            SidebarLink::new("draft", "/Vue3/000_draft"),
            SidebarLink::new("test", "/Vue3/999_test"),
        ],
    }]
}

/// Sidebar sections for pages under `/VueRouter/`.
#[must_use]
pub fn sidebar_vue_router() -> Vec<SidebarSection> {
    vec![SidebarSection {
        text: "VueRouter".to_owned(),
        collapsible: true,
        items: vec![SidebarLink::new(
            "introduction",
            "/VueRouter/001_introduction",
        )],
    }]
}

/// Sidebar sections for pages under `/Vuex/`.
#[must_use]
pub fn sidebar_vuex() -> Vec<SidebarSection> {
    vec![SidebarSection {
        text: "Vuex".to_owned(),
        collapsible: true,
        items: vec![SidebarLink::new("introduction", "/Vuex/001_introduction")],
    }]
}

/// Sidebar sections for pages under `/Pinia/`.
#[must_use]
pub fn sidebar_pinia() -> Vec<SidebarSection> {
    vec![SidebarSection {
        text: "Pinia".to_owned(),
        collapsible: true,
        items: vec![SidebarLink::new("introduction", "/Pinia/001_introduction")],
    }]
}

/// Sidebar sections for pages under `/TypeScript/`.
#[must_use]
pub fn sidebar_typescript() -> Vec<SidebarSection> {
    vec![SidebarSection {
        text: "TypeScript".to_owned(),
        collapsible: true,
        items: vec![SidebarLink::new(
            "introduction",
            "/TypeScript/001_introduction",
        )],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nav_first_entry() {
        let nav = nav();
        assert_eq!(nav[0].text, "Vue3");
        assert_eq!(nav[0].link.as_deref(), Some("/Vue3/000_draft"));
    }

    #[test]
    fn test_nav_shape() {
        let nav = nav();
        assert_eq!(nav.len(), 3);
        assert!(nav[0].is_leaf());
        assert!(nav[1].is_leaf());
        assert!(nav[2].is_group());
        assert_eq!(nav[2].items.len(), 5);
    }

    #[test]
    fn test_nav_is_pure() {
        assert_eq!(nav(), nav());
    }

    #[test]
    fn test_sidebar_vue3_fragment() {
        let expected = vec![SidebarSection {
            text: "Vue3".to_owned(),
            collapsible: true,
            items: vec![
                SidebarLink::new("draft", "/Vue3/000_draft"),
                SidebarLink::new("test", "/Vue3/999_test"),
            ],
        }];
        assert_eq!(sidebar_vue3(), expected);
    }

    #[test]
    fn test_sidebar_typescript_fragment() {
        let expected = vec![SidebarSection {
            text: "TypeScript".to_owned(),
            collapsible: true,
            items: vec![SidebarLink::new(
                "introduction",
                "/TypeScript/001_introduction",
            )],
        }];
        assert_eq!(sidebar_typescript(), expected);
    }

    #[test]
    fn test_sidebar_covers_all_prefixes() {
        let sidebar = sidebar();
        assert_eq!(sidebar.len(), 5);
        for prefix in ["/Vue3/", "/VueRouter/", "/Vuex/", "/Pinia/", "/TypeScript/"] {
            let sections = sidebar.get(prefix).unwrap();
            assert!(!sections.is_empty(), "no sections for {prefix}");
            assert!(!sections[0].items.is_empty(), "empty section for {prefix}");
        }
    }

    #[test]
    fn test_sidebar_links_stay_under_their_prefix() {
        let sidebar = sidebar();
        for (prefix, sections) in sidebar.iter() {
            for section in sections {
                for link in &section.items {
                    assert!(
                        link.link.starts_with(prefix),
                        "{} escapes {}",
                        link.link,
                        prefix
                    );
                }
            }
        }
    }

    #[test]
    fn test_sidebar_is_pure() {
        assert_eq!(sidebar(), sidebar());
    }
}
