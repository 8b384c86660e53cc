//! Unified filter state for multi-dimensional startup filtering.
//!
//! This module provides the `FilterState` type that composes all filtering
//! dimensions into a single, cohesive filtering interface:
//!
//! - **Text**: case-insensitive substring search over name, description,
//!   and technologies
//! - **Categorical**: locations, technologies, funding stages, impact
//!   types, team-diversity labels (OR within a dimension, AND across
//!   dimensions)
//! - **Ranges**: funding amount and founding year, inactive until set
//! - **Compatibility**: minimum weighted match score
//! - **Semantic**: concept query expanded to technology tags
//!
//! Every dimension is optional; a dimension left empty is a pass-through.
//! `FilterState::default()` therefore matches every record.
//!
//! # Example
//!
//! ```
//! use vivero_core::{FilterState, FundingRange};
//!
//! let filter = FilterState::new()
//!     .with_location("Madrid")
//!     .with_technology("AI")
//!     .with_funding_range(FundingRange::new(0.0, 600_000.0));
//!
//! assert!(!filter.is_empty());
//! assert!(filter.has_location_constraints());
//! assert_eq!(filter.active_dimension_count(), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::defaults::{
    DEFAULT_FUNDING_MAX, DEFAULT_FUNDING_MIN, DEFAULT_YEAR_MAX, DEFAULT_YEAR_MIN,
};

// =============================================================================
// RANGES
// =============================================================================

/// Closed funding interval in euros.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FundingRange {
    pub min: f64,
    pub max: f64,
}

impl FundingRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both bounds inclusive. An inverted range contains nothing.
    pub fn contains(&self, amount: f64) -> bool {
        amount >= self.min && amount <= self.max
    }
}

impl Default for FundingRange {
    /// The slider bounds shown before the user touches the control.
    fn default() -> Self {
        Self {
            min: DEFAULT_FUNDING_MIN,
            max: DEFAULT_FUNDING_MAX,
        }
    }
}

/// Closed founding-year interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Both bounds inclusive. An inverted range contains nothing.
    pub fn contains(&self, year: i32) -> bool {
        year >= self.min && year <= self.max
    }
}

impl Default for YearRange {
    /// The slider bounds shown before the user touches the control.
    fn default() -> Self {
        Self {
            min: DEFAULT_YEAR_MIN,
            max: DEFAULT_YEAR_MAX,
        }
    }
}

// =============================================================================
// UNIFIED FILTER STATE
// =============================================================================

/// Complete, serializable set of active filter constraints.
///
/// Owned and mutated only by the presentation layer; the engine reads it
/// and never writes back. Range dimensions are `Option`al: `None` means
/// the dimension takes no part in filtering or scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text substring query over name, description, technologies.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search_text: String,

    /// Accepted regions, OR semantics.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<String>,

    /// Accepted technology tags, OR semantics within the dimension.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,

    /// Accepted maturity-stage labels, OR semantics.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub funding_stages: Vec<String>,

    /// Accepted impact-type labels, OR semantics within the dimension.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub impact_types: Vec<String>,

    /// Accepted team-diversity labels, OR semantics.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub founder_genders: Vec<String>,

    /// Funding interval; `None` leaves the dimension inactive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_range: Option<FundingRange>,

    /// Founding-year interval; `None` leaves the dimension inactive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_range: Option<YearRange>,

    /// Minimum compatibility score in 0..=100; 0 disables the check.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub compatibility_threshold: u8,

    /// Concept query for semantic expansion.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub semantic_query: String,

    /// Name of a reference startup for similarity suggestions. Never a
    /// filter predicate; only the suggestion rules read it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity: Option<String>,
}

fn is_zero(n: &u8) -> bool {
    *n == 0
}

impl FilterState {
    /// Create a new empty filter (matches all startups).
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // BUILDER METHODS
    // =========================================================================

    /// Set the free-text query.
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Add an accepted region.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.locations.push(location.into());
        self
    }

    /// Add an accepted technology tag.
    pub fn with_technology(mut self, technology: impl Into<String>) -> Self {
        self.technologies.push(technology.into());
        self
    }

    /// Add an accepted maturity stage.
    pub fn with_funding_stage(mut self, stage: impl Into<String>) -> Self {
        self.funding_stages.push(stage.into());
        self
    }

    /// Add an accepted impact type.
    pub fn with_impact_type(mut self, impact: impl Into<String>) -> Self {
        self.impact_types.push(impact.into());
        self
    }

    /// Add an accepted team-diversity label.
    pub fn with_founder_gender(mut self, gender: impl Into<String>) -> Self {
        self.founder_genders.push(gender.into());
        self
    }

    /// Set the funding range dimension.
    pub fn with_funding_range(mut self, range: FundingRange) -> Self {
        self.funding_range = Some(range);
        self
    }

    /// Set the founding-year range dimension.
    pub fn with_year_range(mut self, range: YearRange) -> Self {
        self.year_range = Some(range);
        self
    }

    /// Require a minimum compatibility score.
    pub fn with_min_compatibility(mut self, threshold: u8) -> Self {
        self.compatibility_threshold = threshold;
        self
    }

    /// Set the semantic concept query.
    pub fn with_semantic_query(mut self, query: impl Into<String>) -> Self {
        self.semantic_query = query.into();
        self
    }

    /// Set the reference startup for similarity suggestions.
    pub fn near_startup(mut self, name: impl Into<String>) -> Self {
        self.proximity = Some(name.into());
        self
    }

    // =========================================================================
    // CONSTRAINT CHECKS
    // =========================================================================

    /// Check if the filter matches every record (no predicate active).
    ///
    /// `proximity` is deliberately ignored here: it feeds suggestions but
    /// never narrows the result set.
    pub fn is_empty(&self) -> bool {
        !self.has_search_constraints()
            && !self.has_location_constraints()
            && !self.has_technology_constraints()
            && !self.has_stage_constraints()
            && !self.has_impact_constraints()
            && !self.has_gender_constraints()
            && !self.has_funding_range_constraints()
            && !self.has_year_range_constraints()
            && !self.has_compatibility_constraints()
            && !self.has_semantic_constraints()
    }

    /// Check if free-text search is active.
    pub fn has_search_constraints(&self) -> bool {
        !self.search_text.is_empty()
    }

    /// Check if there are any region constraints.
    pub fn has_location_constraints(&self) -> bool {
        !self.locations.is_empty()
    }

    /// Check if there are any technology constraints.
    pub fn has_technology_constraints(&self) -> bool {
        !self.technologies.is_empty()
    }

    /// Check if there are any maturity-stage constraints.
    pub fn has_stage_constraints(&self) -> bool {
        !self.funding_stages.is_empty()
    }

    /// Check if there are any impact-type constraints.
    pub fn has_impact_constraints(&self) -> bool {
        !self.impact_types.is_empty()
    }

    /// Check if there are any team-diversity constraints.
    pub fn has_gender_constraints(&self) -> bool {
        !self.founder_genders.is_empty()
    }

    /// Check if the funding range dimension is active.
    pub fn has_funding_range_constraints(&self) -> bool {
        self.funding_range.is_some()
    }

    /// Check if the founding-year range dimension is active.
    pub fn has_year_range_constraints(&self) -> bool {
        self.year_range.is_some()
    }

    /// Check if a minimum compatibility score is required.
    pub fn has_compatibility_constraints(&self) -> bool {
        self.compatibility_threshold > 0
    }

    /// Check if a semantic query is active.
    pub fn has_semantic_constraints(&self) -> bool {
        !self.semantic_query.is_empty()
    }

    /// Get the number of active filter dimensions.
    pub fn active_dimension_count(&self) -> usize {
        let mut count = 0;
        if self.has_search_constraints() {
            count += 1;
        }
        if self.has_location_constraints() {
            count += 1;
        }
        if self.has_technology_constraints() {
            count += 1;
        }
        if self.has_stage_constraints() {
            count += 1;
        }
        if self.has_impact_constraints() {
            count += 1;
        }
        if self.has_gender_constraints() {
            count += 1;
        }
        if self.has_funding_range_constraints() {
            count += 1;
        }
        if self.has_year_range_constraints() {
            count += 1;
        }
        if self.has_compatibility_constraints() {
            count += 1;
        }
        if self.has_semantic_constraints() {
            count += 1;
        }
        count
    }
}

// =============================================================================
// FILTER PATCH
// =============================================================================

/// Partial filter update carried by a suggestion.
///
/// Every field is optional; applying a patch replaces exactly the fields
/// it sets and leaves the rest of the base state untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_stages: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_types: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub founder_genders: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_range: Option<FundingRange>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_range: Option<YearRange>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compatibility_threshold: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_query: Option<String>,
}

impl FilterPatch {
    /// Produce the filter state that results from applying this patch to
    /// `base`. Set fields replace, unset fields pass through.
    pub fn apply(&self, base: &FilterState) -> FilterState {
        let mut next = base.clone();

        if let Some(text) = &self.search_text {
            next.search_text = text.clone();
        }
        if let Some(locations) = &self.locations {
            next.locations = locations.clone();
        }
        if let Some(technologies) = &self.technologies {
            next.technologies = technologies.clone();
        }
        if let Some(stages) = &self.funding_stages {
            next.funding_stages = stages.clone();
        }
        if let Some(impacts) = &self.impact_types {
            next.impact_types = impacts.clone();
        }
        if let Some(genders) = &self.founder_genders {
            next.founder_genders = genders.clone();
        }
        if let Some(range) = self.funding_range {
            next.funding_range = Some(range);
        }
        if let Some(range) = self.year_range {
            next.year_range = Some(range);
        }
        if let Some(threshold) = self.compatibility_threshold {
            next.compatibility_threshold = threshold;
        }
        if let Some(query) = &self.semantic_query {
            next.semantic_query = query.clone();
        }

        next
    }
}

// =============================================================================
// TESTS
// =============================================================================
