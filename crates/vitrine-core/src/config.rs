//! Navigation configuration.
//!
//! Curated navigation entries and their per-locale labels. The core never
//! reads environment or global state; the page layer loads this once and
//! passes it into [`crate::navigation::build_navigation`] explicitly, which
//! keeps every build deterministic and testable without process-wide setup.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::errors::{VitrineError, VitrineResult};
use crate::model::TreeNode;

/// Static navigation configuration: curated main entries (prepended ahead of
/// the dynamic collection tree) and the static-only sub navigation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavConfig {
    pub main: Vec<StaticNavEntry>,
    pub sub: Vec<StaticNavEntry>,
}

/// One curated navigation entry with per-locale display labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticNavEntry {
    pub id: String,
    pub slug: String,
    /// Locale -> display label. Must contain the default locale.
    pub labels: BTreeMap<String, String>,
}

impl StaticNavEntry {
    /// Resolve the display label for a locale.
    ///
    /// Falls back to the default locale, then to the entry id, so a label is
    /// never blank.
    pub fn label(&self, locale: &str) -> &str {
        self.labels
            .get(locale)
            .or_else(|| self.labels.get(defaults::LOCALE))
            .map(String::as_str)
            .unwrap_or(&self.id)
    }

    /// Materialize this entry as a childless tree node for the given locale.
    pub fn to_node(&self, locale: &str) -> TreeNode {
        TreeNode::leaf(self.id.clone(), self.label(locale), self.slug.clone())
    }
}

/// Validate a navigation configuration:
/// - entry ids are unique within each list
/// - no entry id is empty
/// - every entry carries a default-locale label
pub fn validate_nav_config(config: &NavConfig) -> VitrineResult<()> {
    for (list_name, entries) in [("main", &config.main), ("sub", &config.sub)] {
        let mut ids = BTreeSet::new();
        for entry in entries {
            if entry.id.is_empty() {
                return Err(VitrineError::invalid_argument(format!(
                    "empty entry id in {list_name} navigation"
                )));
            }
            if !ids.insert(entry.id.as_str()) {
                return Err(VitrineError::invalid_argument(format!(
                    "duplicate entry id in {list_name} navigation: {}",
                    entry.id
                )));
            }
            if !entry.labels.contains_key(defaults::LOCALE) {
                return Err(VitrineError::invalid_argument(format!(
                    "entry {} is missing the {} label",
                    entry.id,
                    defaults::LOCALE
                )));
            }
        }
    }
    Ok(())
}
