//! Data models for the listing core.
//!
//! These types are mostly "dumb" data: they carry what the backend search and
//! collection queries returned, reshaped for rendering. Higher layers apply
//! policy and I/O; the only logic here is the handful of invariants the rest
//! of the crate relies on (page clamping, sort fallbacks, value membership).
//!
//! All keyed state uses `BTreeMap`/`BTreeSet` so iteration order is
//! deterministic and canonical encodings come out byte-identical.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::errors::{VitrineError, VitrineResult};

/// A single selectable attribute value, e.g. "red" under the "color" facet.
///
/// Immutable, sourced from the backend per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValue {
    pub id: String,
    pub code: String,
    pub name: String,
}

/// A facet value together with its hit count in the current result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValueCount {
    #[serde(flatten)]
    pub value: FacetValue,
    pub count: u64,
}

/// A displayable facet group: one facet with its distinct values.
///
/// `values` is ordered by `(count desc, name asc)`; `id` is unique among
/// groups within one response. Both invariants are established by
/// [`crate::facets::reduce_facets`] and checkable via [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetGroup {
    pub id: String,
    pub code: String,
    pub name: String,
    pub values: Vec<FacetValueCount>,
}

impl FacetGroup {
    /// True if `value_id` is one of this group's values.
    pub fn contains_value(&self, value_id: &str) -> bool {
        self.values.iter().any(|v| v.value.id == value_id)
    }
}

/// Active filter state: facet group id -> selected facet value ids.
///
/// Set semantics per group (no duplicates, order irrelevant). Every value id
/// must belong to the group's values in the current result set; the query
/// decoder enforces this by dropping stale selections.
pub type FilterSelection = BTreeMap<String, BTreeSet<String>>;

/// Fields a listing can be sorted by. Closed set; unknown keys fall back to
/// the default sort at the decode boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Price,
}

impl SortKey {
    /// Parse a sort key string (e.g. "price").
    pub fn parse(s: &str) -> VitrineResult<Self> {
        match s {
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            _ => Err(VitrineError::invalid_argument(format!(
                "unsupported sort key: {s}"
            ))),
        }
    }

    /// Canonical string representation, as used in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
        }
    }
}

/// Sort direction. Serialized uppercase for the GraphQL boundary; query
/// parameters use the lowercase form and accept any case on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a direction string, case-insensitively.
    pub fn parse(s: &str) -> VitrineResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(VitrineError::invalid_argument(format!(
                "unsupported sort direction: {s}"
            ))),
        }
    }

    /// Lowercase form used in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A complete sort specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Name,
            direction: SortDirection::Asc,
        }
    }
}

impl SortSpec {
    /// Parse the `"<key>-<direction>"` query form (e.g. `"price-desc"`).
    pub fn parse_query(s: &str) -> VitrineResult<Self> {
        let (key, direction) = s.split_once('-').ok_or_else(|| {
            VitrineError::invalid_argument(format!("sort must be <key>-<direction>, got: {s}"))
        })?;
        Ok(Self {
            key: SortKey::parse(key)?,
            direction: SortDirection::parse(direction)?,
        })
    }

    /// Render the canonical `"<key>-<direction>"` query form.
    pub fn to_query_value(&self) -> String {
        format!("{}-{}", self.key.as_str(), self.direction.as_str())
    }
}

/// Pagination state for one listing response.
///
/// The requested page is clamped into `[1, total_pages]` at construction, so
/// a `PageState` is always internally consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    page: u32,
    total_items: u64,
    page_size: u32,
}

impl PageState {
    /// Build a page state, clamping `requested_page` into range.
    ///
    /// A `page_size` of zero is treated as one.
    pub fn new(requested_page: u32, total_items: u64, page_size: u32) -> Self {
        let page_size = page_size.max(1);
        let mut state = Self {
            page: 1,
            total_items,
            page_size,
        };
        state.page = requested_page.clamp(1, state.total_pages());
        state
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of pages; zero items still yields one (empty) page.
    pub fn total_pages(&self) -> u32 {
        let pages = self.total_items.div_ceil(u64::from(self.page_size));
        u32::try_from(pages.max(1)).unwrap_or(u32::MAX)
    }

    /// Offset of the first item on the current page.
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }
}

/// A raw collection record before tree conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatNode {
    pub id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

/// A node of the assembled navigation tree. Built fresh per request and never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// A childless node, as produced for static navigation entries.
    pub fn leaf(id: impl Into<String>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            children: Vec::new(),
        }
    }
}

/// Root wrapper around the top-level navigation entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationRoot {
    pub children: Vec<TreeNode>,
}

/// Structural invariant checks for collaborator-supplied facet data.
///
/// These are sanity checks a caller can run on groups it did not obtain from
/// [`crate::facets::reduce_facets`]; reduction itself always establishes the
/// invariants.
pub mod validate {
    use super::*;
    use crate::determinism::ensure_sorted;
    use std::cmp::Reverse;

    /// Check basic invariants of a facet group list:
    /// - group ids are unique
    /// - value ids are unique within each group
    /// - values are ordered by `(count desc, name asc)`
    pub fn facet_groups_basic(groups: &[FacetGroup]) -> VitrineResult<()> {
        let mut group_ids = BTreeSet::new();
        for g in groups {
            if !group_ids.insert(g.id.as_str()) {
                return Err(VitrineError::invalid_argument(format!(
                    "duplicate facet group id: {}",
                    g.id
                )));
            }

            let mut value_ids = BTreeSet::new();
            for v in &g.values {
                if !value_ids.insert(v.value.id.as_str()) {
                    return Err(VitrineError::invalid_argument(format!(
                        "duplicate facet value id {} in group {}",
                        v.value.id, g.id
                    )));
                }
            }

            ensure_sorted(&g.values, |v| (Reverse(v.count), v.value.name.clone()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(id: &str, name: &str, count: u64) -> FacetValueCount {
        FacetValueCount {
            value: FacetValue {
                id: id.to_string(),
                code: id.to_string(),
                name: name.to_string(),
            },
            count,
        }
    }

    #[test]
    fn sort_spec_parses_query_form() {
        let s = SortSpec::parse_query("price-desc").unwrap();
        assert_eq!(s.key, SortKey::Price);
        assert_eq!(s.direction, SortDirection::Desc);
        assert_eq!(s.to_query_value(), "price-desc");
    }

    #[test]
    fn sort_direction_is_case_insensitive() {
        assert_eq!(SortDirection::parse("DESC").unwrap(), SortDirection::Desc);
        assert_eq!(SortDirection::parse("Asc").unwrap(), SortDirection::Asc);
    }

    #[test]
    fn sort_spec_rejects_unknown_key() {
        assert!(SortSpec::parse_query("rating-asc").is_err());
        assert!(SortSpec::parse_query("name").is_err());
    }

    #[test]
    fn page_state_clamps_into_range() {
        let s = PageState::new(99, 50, 24);
        assert_eq!(s.total_pages(), 3);
        assert_eq!(s.page(), 3);

        let s = PageState::new(0, 50, 24);
        assert_eq!(s.page(), 1);
    }

    #[test]
    fn page_state_zero_items_is_one_page() {
        let s = PageState::new(1, 0, 24);
        assert_eq!(s.total_pages(), 1);
        assert_eq!(s.page(), 1);
        assert_eq!(s.skip(), 0);
    }

    #[test]
    fn page_state_tolerates_zero_page_size() {
        let s = PageState::new(2, 5, 0);
        assert_eq!(s.page_size(), 1);
        assert_eq!(s.total_pages(), 5);
        assert_eq!(s.skip(), 1);
    }

    #[test]
    fn validate_accepts_canonical_groups() {
        let groups = vec![FacetGroup {
            id: "color".to_string(),
            code: "color".to_string(),
            name: "Color".to_string(),
            values: vec![value("blue", "Blue", 5), value("red", "Red", 5)],
        }];
        validate::facet_groups_basic(&groups).unwrap();
    }

    #[test]
    fn validate_rejects_duplicate_group_id() {
        let g = FacetGroup {
            id: "color".to_string(),
            code: "color".to_string(),
            name: "Color".to_string(),
            values: vec![],
        };
        let err = validate::facet_groups_basic(&[g.clone(), g]).unwrap_err();
        assert!(err.to_string().contains("duplicate facet group id"));
    }

    #[test]
    fn validate_rejects_unsorted_values() {
        let groups = vec![FacetGroup {
            id: "color".to_string(),
            code: "color".to_string(),
            name: "Color".to_string(),
            values: vec![value("red", "Red", 2), value("blue", "Blue", 5)],
        }];
        assert!(validate::facet_groups_basic(&groups).is_err());
    }
}
