//! vitrine-core
//!
//! Deterministic listing and navigation core for the Vitrine storefront:
//! - Facet aggregation reduction (raw search rows -> grouped facet definitions)
//! - Filter query codec (URL query parameters <-> structured listing state)
//! - GraphQL-ready per-group filter clauses
//! - Pagination window computation
//! - Flat collection list -> navigation tree construction
//!
//! The crate is pure and deterministic: no filesystem, network, clock, or
//! environment reads. All inputs come from the page-rendering layer already
//! materialized in memory, and every operation on the render path degrades to
//! a well-defined default instead of failing.

pub mod config;
pub mod determinism;
pub mod diagnostics;
pub mod errors;
pub mod facets;
pub mod model;
pub mod navigation;
pub mod pagination;
pub mod parse;
pub mod query;

pub use crate::errors::{VitrineError, VitrineResult};

/// Default values shared by the codec and the page layer.
///
/// These must remain stable: they define which query parameters are omitted
/// from canonical URLs.
pub mod defaults {
    /// Fallback locale for static navigation labels.
    pub const LOCALE: &str = "en";
    /// Default listing page size.
    pub const PAGE_SIZE: u32 = 24;
    /// Default pagination window width.
    pub const MAX_VISIBLE_PAGES: u32 = 7;
}

/// Convenience re-exports.
pub mod prelude {
    pub use crate::config::{NavConfig, StaticNavEntry};
    pub use crate::diagnostics::{Diagnostic, DiagnosticLevel};
    pub use crate::facets::{reduce_facets, FacetReduction, RawAggregationRow};
    pub use crate::model::{
        FacetGroup, FacetValue, FacetValueCount, FilterSelection, FlatNode, NavigationRoot,
        PageState, SortDirection, SortKey, SortSpec, TreeNode,
    };
    pub use crate::navigation::{build_navigation, tree::build_tree, SiteNavigation};
    pub use crate::pagination::{window, PageLink};
    pub use crate::query::{
        decode, decode_query_str, encode, to_filter_input, to_query_string, FacetFilterClause,
        FacetFilterKind, ListingQuery,
    };
    pub use crate::{VitrineError, VitrineResult};
}
