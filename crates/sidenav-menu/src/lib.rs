//! Navigation data model for sidenav.
//!
//! This crate provides:
//! - [`NavItem`]: entries of the always-visible top navigation bar, either
//!   direct links or dropdown groups, with active-entry resolution
//! - [`Sidebar`]: path-prefix keyed sidebar sections with longest-prefix
//!   lookup against the current page path
//!
//! The model is pure data: construction is side-effect-free and two
//! structurally equal values serialize identically.
//!
//! # Quick Start
//!
//! ```
//! use sidenav_menu::{NavItem, Sidebar, SidebarLink, SidebarSection, active_nav};
//!
//! let nav = vec![
//!     NavItem::leaf("Guide", "/guide/intro"),
//!     NavItem::leaf("Reference", "/reference/api"),
//! ];
//! assert_eq!(active_nav(&nav, "/guide/setup").map(|i| i.text.as_str()), Some("Guide"));
//!
//! let sidebar = Sidebar::new().with_prefix(
//!     "/guide/",
//!     vec![SidebarSection {
//!         text: "Guide".to_owned(),
//!         collapsible: true,
//!         items: vec![SidebarLink::new("Introduction", "/guide/intro")],
//!     }],
//! );
//! assert!(sidebar.sections_for("/guide/intro").is_some());
//! ```

pub(crate) mod nav;
pub(crate) mod sidebar;

pub use nav::{NavItem, active_nav};
pub use sidebar::{Sidebar, SidebarLink, SidebarSection};
