//! GraphQL-ready filter clauses.
//!
//! Filter semantics are OR within a facet group and AND across groups:
//! selecting both "red" and "blue" under "color" returns items matching
//! either, while also selecting "snowboard" under "category" narrows to
//! items matching both facets.
//!
//! This module emits one clause per non-empty group; the caller combines the
//! clause list into its search input, and that combination is itself the
//! cross-group AND. The single/multi distinction is an explicit tagged
//! variant so the branch logic stays exhaustive.

use serde::Serialize;

use crate::model::FilterSelection;

/// The per-group clause body: a single required value id, or a union of ids.
///
/// Serializes to the backend's filter-input shape: `{"and": "id"}` or
/// `{"or": ["id1", "id2"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetFilterKind {
    And(String),
    Or(Vec<String>),
}

/// One filter-input entry for one facet group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetFilterClause {
    pub facet_id: String,
    #[serde(flatten)]
    pub kind: FacetFilterKind,
}

/// Build the per-group clause list from a filter selection.
///
/// Groups with no selected values are omitted. Clauses come out ordered by
/// group id and value ids in lexicographic order (both inherited from the
/// selection's BTree ordering), so the emitted GraphQL input is stable.
pub fn to_filter_input(filters: &FilterSelection) -> Vec<FacetFilterClause> {
    let mut clauses = Vec::new();

    for (group_id, selected) in filters {
        let mut ids: Vec<String> = selected.iter().cloned().collect();
        let kind = match ids.len() {
            0 => continue,
            1 => FacetFilterKind::And(ids.swap_remove(0)),
            _ => FacetFilterKind::Or(ids),
        };
        clauses.push(FacetFilterClause {
            facet_id: group_id.clone(),
            kind,
        });
    }

    clauses
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::BTreeSet;

    fn selection(entries: &[(&str, &[&str])]) -> FilterSelection {
        entries
            .iter()
            .map(|(g, ids)| {
                (
                    g.to_string(),
                    ids.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
                )
            })
            .collect()
    }

    #[test]
    fn single_selection_becomes_and_clause() {
        let clauses = to_filter_input(&selection(&[("color", &["red"])]));
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].facet_id, "color");
        assert_matches!(&clauses[0].kind, FacetFilterKind::And(id) if id == "red");
    }

    #[test]
    fn multi_selection_becomes_or_clause() {
        let clauses = to_filter_input(&selection(&[("color", &["red", "blue"])]));
        assert_matches!(
            &clauses[0].kind,
            FacetFilterKind::Or(ids) if ids == &["blue".to_string(), "red".to_string()]
        );
    }

    #[test]
    fn empty_groups_are_omitted() {
        let clauses = to_filter_input(&selection(&[("color", &[]), ("size", &["m"])]));
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].facet_id, "size");
    }

    #[test]
    fn one_clause_per_group_in_id_order() {
        let clauses = to_filter_input(&selection(&[
            ("size", &["m"]),
            ("color", &["red", "blue"]),
        ]));
        let ids: Vec<&str> = clauses.iter().map(|c| c.facet_id.as_str()).collect();
        assert_eq!(ids, vec!["color", "size"]);
    }

    #[test]
    fn serializes_to_backend_shape() {
        let clauses = to_filter_input(&selection(&[
            ("color", &["red", "blue"]),
            ("size", &["m"]),
        ]));
        let json = serde_json::to_value(&clauses).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"facetId": "color", "or": ["blue", "red"]},
                {"facetId": "size", "and": "m"},
            ])
        );
    }
}
