//! Site navigation construction.
//!
//! Composes the dynamic collection tree with the curated static entries from
//! configuration. Static entries (home, curated category shortcuts) are
//! prepended to the main navigation in their configured order; the
//! sub-navigation is built solely from static entries.
//!
//! Locale handling: each static entry resolves its label through its
//! per-locale table with an English fallback, so a missing locale never
//! yields a blank label. The locale tables arrive as explicit configuration,
//! never ambient state.

pub mod tree;

use crate::config::NavConfig;
use crate::model::{FlatNode, NavigationRoot};

/// The two navigation trees a page layout consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteNavigation {
    pub navigation: NavigationRoot,
    pub subnavigation: NavigationRoot,
}

/// Build the main and sub navigation for one page load.
pub fn build_navigation(
    flat_collections: &[FlatNode],
    config: &NavConfig,
    locale: &str,
) -> SiteNavigation {
    let mut navigation = tree::build_tree(flat_collections);

    let static_main = config.main.iter().map(|e| e.to_node(locale));
    navigation.children.splice(0..0, static_main);

    let subnavigation = NavigationRoot {
        children: config.sub.iter().map(|e| e.to_node(locale)).collect(),
    };

    SiteNavigation {
        navigation,
        subnavigation,
    }
}
