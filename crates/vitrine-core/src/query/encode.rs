//! Canonical query encoding.
//!
//! Encode is the inverse of decode for well-formed states, with two
//! canonicalization rules:
//! - defaults are omitted (`page=1`, the default sort, an empty search term)
//! - ordering is fixed: `q`, `sort`, `page`, then facet parameters sorted by
//!   group id with value ids sorted lexicographically
//!
//! Two set-equal filter selections therefore encode to byte-identical query
//! strings no matter how they were built up.

use itertools::Itertools;

use crate::model::SortSpec;
use crate::query::{params, ListingQuery};

/// Encode a listing query into canonical key/value pairs.
///
/// Facet selections are keyed by group id; each group's value ids are joined
/// with commas in lexicographic order. `BTreeMap`/`BTreeSet` iteration makes
/// both orderings deterministic without an explicit sort.
pub fn encode(query: &ListingQuery) -> Vec<(String, String)> {
    let mut out = Vec::new();

    if !query.search_term.is_empty() {
        out.push((params::SEARCH.to_string(), query.search_term.clone()));
    }

    if query.sort != SortSpec::default() {
        out.push((params::SORT.to_string(), query.sort.to_query_value()));
    }

    if query.page > 1 {
        out.push((params::PAGE.to_string(), query.page.to_string()));
    }

    for (group_id, selected) in &query.filters {
        if selected.is_empty() {
            continue;
        }
        out.push((group_id.clone(), selected.iter().join(",")));
    }

    out
}

/// Render the canonical percent-encoded query string (no leading `?`).
pub fn to_query_string(query: &ListingQuery) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in encode(query) {
        serializer.append_pair(&key, &value);
    }
    serializer.finish()
}
