//! Parsing helpers for inbound collaborator payloads.
//!
//! The page layer fetches search results and collection lists over GraphQL
//! and hands the relevant fragments to this core as JSON bytes. Helpers here
//! operate purely in memory:
//! - strict JSON parsing with an explicit size limit
//! - typed decoding of the two payload shapes the core consumes
//!
//! Parsing is deterministic given the same bytes; callers provide explicit
//! limits rather than relying on environment.

use serde_json::Value;

use crate::errors::{VitrineError, VitrineResult};
use crate::facets::RawAggregationRow;
use crate::model::FlatNode;

/// Default maximum JSON bytes accepted by helpers (2 MiB).
pub const DEFAULT_MAX_JSON_BYTES: usize = 2 * 1024 * 1024;

/// Parse JSON bytes into `serde_json::Value` with a hard size limit.
pub fn parse_json_bytes(bytes: &[u8], max_bytes: usize) -> VitrineResult<Value> {
    if bytes.len() > max_bytes {
        return Err(VitrineError::invalid_argument(format!(
            "JSON payload too large ({} bytes > limit {})",
            bytes.len(),
            max_bytes
        )));
    }

    serde_json::from_slice(bytes)
        .map_err(|e| VitrineError::serialization(format!("failed to parse JSON: {e}")))
}

/// Decode the raw facet aggregation rows of a search response.
///
/// Expects the `facetValues` fragment: a JSON array of
/// `{"count": N, "facetValue": {"id", "code", "name", "facet": {...}}}`.
pub fn parse_aggregation_rows(bytes: &[u8], max_bytes: usize) -> VitrineResult<Vec<RawAggregationRow>> {
    let v = parse_json_bytes(bytes, max_bytes)?;
    serde_json::from_value(v)
        .map_err(|e| VitrineError::serialization(format!("failed to decode aggregation rows: {e}")))
}

/// Decode a flat collection list.
///
/// Expects a JSON array of `{"id", "parentId"?, "name", "slug"?}` records.
pub fn parse_flat_nodes(bytes: &[u8], max_bytes: usize) -> VitrineResult<Vec<FlatNode>> {
    let v = parse_json_bytes(bytes, max_bytes)?;
    serde_json::from_value(v)
        .map_err(|e| VitrineError::serialization(format!("failed to decode collection list: {e}")))
}
