//! Facet aggregation reduction.
//!
//! The backend search returns one row per (facet value, count) pair, with the
//! owning facet embedded in each row. This module collapses those rows into
//! displayable [`FacetGroup`]s:
//!
//! - rows are grouped by `facet_value.facet.id`
//! - groups keep their first-seen order (the backend's aggregation priority)
//! - values within a group are ordered by `(count desc, name asc)`
//! - a value id repeated under the same facet is upstream data inconsistency:
//!   the first occurrence wins, the duplicate is reported as a warning
//!   diagnostic, and counts are never summed silently

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::determinism::dedup_first_seen;
use crate::diagnostics::Diagnostic;
use crate::model::{FacetGroup, FacetValue, FacetValueCount};

/// The facet a raw aggregation row belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFacet {
    pub id: String,
    pub code: String,
    pub name: String,
}

/// A facet value as embedded in a raw aggregation row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFacetValue {
    pub id: String,
    pub code: String,
    pub name: String,
    pub facet: RawFacet,
}

/// One raw (facet value, count) aggregation row from the search backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAggregationRow {
    pub count: u64,
    pub facet_value: RawFacetValue,
}

/// Result of [`reduce_facets`]: the grouped facets plus any data-quality
/// diagnostics detected along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetReduction {
    pub groups: Vec<FacetGroup>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Collapse raw aggregation rows into displayable facet groups.
///
/// Empty input yields an empty group list. The output ordering is fully
/// deterministic; calling twice on the same input (even with values reordered
/// within a group) yields identical groups.
pub fn reduce_facets(rows: &[RawAggregationRow]) -> FacetReduction {
    let mut order: Vec<String> = Vec::new();
    let mut grouped: BTreeMap<String, Vec<&RawAggregationRow>> = BTreeMap::new();

    for row in rows {
        let facet_id = &row.facet_value.facet.id;
        grouped
            .entry(facet_id.clone())
            .or_insert_with(|| {
                order.push(facet_id.clone());
                Vec::new()
            })
            .push(row);
    }

    let mut groups = Vec::with_capacity(order.len());
    let mut diagnostics = Vec::new();

    for id in order {
        let Some(group_rows) = grouped.remove(&id) else {
            continue;
        };

        let (kept, duplicates) = dedup_first_seen(group_rows, |r| r.facet_value.id.clone());
        for dup in duplicates {
            diagnostics.push(Diagnostic::warning(
                "facet.duplicate_value",
                format!(
                    "facet value {} appears more than once under facet {}; keeping the first occurrence",
                    dup.facet_value.id, id
                ),
            ));
        }

        let Some(first) = kept.first() else {
            continue;
        };
        let facet = &first.facet_value.facet;
        let mut values: Vec<FacetValueCount> = kept
            .iter()
            .map(|r| FacetValueCount {
                value: FacetValue {
                    id: r.facet_value.id.clone(),
                    code: r.facet_value.code.clone(),
                    name: r.facet_value.name.clone(),
                },
                count: r.count,
            })
            .collect();
        values.sort_by_key(|v| (Reverse(v.count), v.value.name.clone()));

        groups.push(FacetGroup {
            id: facet.id.clone(),
            code: facet.code.clone(),
            name: facet.name.clone(),
            values,
        });
    }

    FacetReduction {
        groups,
        diagnostics,
    }
}
