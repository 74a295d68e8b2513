//! Query parameter decoding.
//!
//! Decode is best-effort by contract: it sits on the critical path of page
//! rendering, so a malformed parameter must never break the page. Every
//! anomaly has a defined resolution:
//! - non-integer or non-positive `page` -> 1
//! - unknown sort key or direction -> default sort
//! - parameter key naming no known facet group -> dropped
//! - facet value id not present in the group -> dropped (stale selection)

use crate::model::{FacetGroup, SortSpec};
use crate::query::{params, ListingQuery};

/// Parse a raw query string (with or without a leading `?`) into decoded
/// key/value pairs, preserving repeats and order.
pub fn parse_query_string(raw: &str) -> Vec<(String, String)> {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect()
}

/// Decode query parameters into a [`ListingQuery`], validating facet
/// selections against the facet groups of the current result set.
///
/// Parameters may repeat; repeated facet parameters accumulate into the same
/// selection set, while repeated reserved parameters are last-wins. Facet
/// parameters are matched by group id or code but always keyed by group id in
/// the output, so the encode side stays canonical.
pub fn decode(query: &[(String, String)], known_facets: &[FacetGroup]) -> ListingQuery {
    let mut out = ListingQuery::default();

    for (key, value) in query {
        match key.as_str() {
            params::PAGE => {
                if let Ok(page) = value.trim().parse::<u32>() {
                    if page >= 1 {
                        out.page = page;
                    }
                }
            }
            params::SORT => {
                if let Ok(sort) = SortSpec::parse_query(value.trim()) {
                    out.sort = sort;
                }
            }
            params::SEARCH => {
                out.search_term = value.trim().to_string();
            }
            other => {
                let Some(group) = known_facets
                    .iter()
                    .find(|g| g.id == other || g.code == other)
                else {
                    continue;
                };

                let selected = out.filters.entry(group.id.clone()).or_default();
                for candidate in value.split(',') {
                    let candidate = candidate.trim();
                    if !candidate.is_empty() && group.contains_value(candidate) {
                        selected.insert(candidate.to_string());
                    }
                }
            }
        }
    }

    // A parameter whose values were all stale leaves an empty set behind;
    // an empty selection and no selection must be the same state.
    out.filters.retain(|_, selected| !selected.is_empty());

    out
}

/// Decode a raw query string in one step.
pub fn decode_query_str(raw: &str, known_facets: &[FacetGroup]) -> ListingQuery {
    decode(&parse_query_string(raw), known_facets)
}
