//! # vivero-core
//!
//! Core types and data-model utilities for the vivero startup directory.
//!
//! This crate provides the strict record shape, filter state, and leaf
//! parsing/formatting helpers that the vivero-search crate builds on.

pub mod cache;
pub mod defaults;
pub mod error;
pub mod facets;
pub mod filter;
pub mod format;
pub mod funding;
pub mod logging;
pub mod model;
pub mod normalize;

// Re-export commonly used types at crate root
pub use cache::{CacheStats, DatasetCache};
pub use error::{Error, Result};
pub use facets::{
    all_funding_stages, all_impact_types, all_locations, all_team_diversity, all_technologies,
    all_verticals, FacetSummary,
};
pub use filter::{FilterPatch, FilterState, FundingRange, YearRange};
pub use format::format_funding;
pub use funding::{parse_funding_amount, parse_labeled_funding};
pub use model::{split_multi_value, ScoredStartup, StartupRecord};
pub use normalize::{normalize_row, normalize_rows};
