//! Filter query codec.
//!
//! Bidirectional mapping between the URL query representation of a listing
//! (`?page=2&sort=price-desc&q=board&color=blue,red`) and the structured
//! [`ListingQuery`] state, plus the GraphQL-ready per-group filter clauses.
//!
//! The query string is the one wire-level contract worth preserving exactly:
//! bookmarked URLs must keep meaning the same listing. Reserved parameters:
//! - `page` — positive integer, omitted at the default 1
//! - `sort` — `<key>-<direction>`, lowercase direction accepted on input
//! - `q` — free-text search term, omitted when empty
//! - any other key naming a known facet group (by id or code) — a comma
//!   separated or repeated-parameter list of selected facet value ids
//!
//! Decode never fails; malformed input degrades to defaults. Encode is
//! canonical: set-equal filter selections produce byte-identical query
//! strings regardless of insertion order.

mod decode;
mod encode;
mod filter_input;

pub use decode::{decode, decode_query_str, parse_query_string};
pub use encode::{encode, to_query_string};
pub use filter_input::{to_filter_input, FacetFilterClause, FacetFilterKind};

use crate::model::{FilterSelection, SortSpec};

/// Reserved query parameter names. Facet parameters use the facet group's
/// own id (or code, accepted on decode only).
pub mod params {
    pub const PAGE: &str = "page";
    pub const SORT: &str = "sort";
    pub const SEARCH: &str = "q";
}

/// Decoded listing state for one page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    /// 1-based page number.
    pub page: u32,
    pub sort: SortSpec,
    pub filters: FilterSelection,
    /// Trimmed free-text search term; empty when absent.
    pub search_term: String,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            page: 1,
            sort: SortSpec::default(),
            filters: FilterSelection::new(),
            search_term: String::new(),
        }
    }
}
