//! # vivero-search
//!
//! Filtering, scoring, and discovery engine for the vivero startup
//! directory.
//!
//! This crate provides:
//! - Multi-dimensional filter pipeline with compatibility annotation
//! - Weighted compatibility scoring over the active filter dimensions
//! - Concept-expansion semantic search with a literal fallback
//! - Keyword relevance ranking for the quick-search box
//! - Rule-based filter suggestions with ready-to-apply patches
//! - Chart dataset generation and ecosystem analytics
//!
//! ## Example
//!
//! ```
//! use vivero_search::{apply_filters, FilterState, StartupRecord};
//!
//! let startups = vec![StartupRecord {
//!     id: "agroia".into(),
//!     name: "AgroIA".into(),
//!     region: "Madrid".into(),
//!     technologies: "AI, IoT".into(),
//!     ..StartupRecord::default()
//! }];
//!
//! let filters = FilterState::new()
//!     .with_location("Madrid")
//!     .with_technology("AI");
//!
//! let results = apply_filters(&startups, &filters);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].compatibility, 100);
//! ```

pub mod analytics;
pub mod compatibility;
pub mod engine;
pub mod relevance;
pub mod semantic;
pub mod sort;
pub mod suggestions;
pub mod visualizations;

// Re-export core types
pub use vivero_core::*;

// Re-export engine types
pub use analytics::{
    compute_analytics, DistributionEntry, EcosystemAnalytics, RecentStartupEntry, StageFunding,
    TopFundedEntry, TrendPoint, YearFunding,
};
pub use compatibility::compute_compatibility;
pub use engine::{apply_filters, apply_filters_with};
pub use relevance::{rank_by_relevance, RelevanceHit};
pub use semantic::{expand_and_search, expand_semantic_query, semantic_matches};
pub use sort::{sort_scored, SortKey, SortOrder};
pub use suggestions::{
    generate_suggestions, generate_suggestions_with_limit, FilterSuggestion, SuggestionKind,
};
pub use visualizations::{
    generate_visualizations, is_priority_region, lookup_coordinates, ChartKind, SeriesPoint,
    VisualizationDataset, PRIORITY_REGIONS,
};
