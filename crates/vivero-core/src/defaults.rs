//! Centralized default constants for the vivero system.
//!
//! **This module is the single source of truth** for all shared default values.
//! Both crates reference these constants instead of defining their own magic
//! numbers.
//!
//! Organized by domain area. When adding new constants, place them in the
//! appropriate section and document the rationale for the chosen value.

// =============================================================================
// FUNDING PARSER
// =============================================================================

/// Amounts below this value that carry a decimal separator are read as
/// millions of euros ("2.5" means €2,500,000 on the source sheets).
pub const MILLIONS_SHORTHAND_THRESHOLD: f64 = 1000.0;

/// Multiplier applied by the millions shorthand rule.
pub const MILLIONS_MULTIPLIER: f64 = 1_000_000.0;

// =============================================================================
// FILTER RANGES
// =============================================================================

/// Lower bound of the funding slider when first shown (euros).
pub const DEFAULT_FUNDING_MIN: f64 = 0.0;

/// Upper bound of the funding slider when first shown (euros).
pub const DEFAULT_FUNDING_MAX: f64 = 50_000_000.0;

/// Lower bound of the founding-year slider when first shown.
pub const DEFAULT_YEAR_MIN: i32 = 2008;

/// Upper bound of the founding-year slider when first shown.
pub const DEFAULT_YEAR_MAX: i32 = 2024;

// =============================================================================
// COMPATIBILITY WEIGHTS
// =============================================================================

/// Weight of an exact region match in the compatibility score.
pub const WEIGHT_LOCATION: f32 = 20.0;

/// Weight of technology overlap in the compatibility score.
/// Scaled by the fraction of requested technologies the startup has.
pub const WEIGHT_TECHNOLOGY: f32 = 30.0;

/// Weight of an exact maturity-stage match in the compatibility score.
pub const WEIGHT_FUNDING_STAGE: f32 = 25.0;

/// Weight of the funding amount lying inside the requested range.
pub const WEIGHT_FUNDING_RANGE: f32 = 25.0;

// =============================================================================
// SUGGESTIONS
// =============================================================================

/// Maximum number of filter suggestions emitted per evaluation.
pub const SUGGESTION_LIMIT: usize = 5;

/// Confidence of the AI + precision-agriculture combination rule (highest).
pub const SUGGEST_CONFIDENCE_AI_COMBO: f32 = 0.9;

/// Confidence of the female-leadership combination rule.
pub const SUGGEST_CONFIDENCE_FEMALE_LEADERSHIP: f32 = 0.88;

/// Confidence of the Barcelona foodtech cluster rule.
pub const SUGGEST_CONFIDENCE_BARCELONA: f32 = 0.85;

/// Confidence of the sustainable-innovation semantic rule.
pub const SUGGEST_CONFIDENCE_SUSTAINABLE: f32 = 0.8;

/// Confidence of the similar-startup proximity rule (lowest).
pub const SUGGEST_CONFIDENCE_PROXIMITY: f32 = 0.75;

// =============================================================================
// VISUALIZATIONS
// =============================================================================

/// Number of technologies shown in the bar chart dataset.
pub const BAR_TOP_TECHNOLOGIES: usize = 8;

// =============================================================================
// ANALYTICS
// =============================================================================

/// Number of startups in the top-funded table.
pub const TOP_FUNDED_LIMIT: usize = 10;

/// Number of startups in the recently-founded table.
pub const RECENT_STARTUPS_LIMIT: usize = 10;

/// A startup founded within this many years of the reference year counts
/// as recent.
pub const RECENT_YEARS_WINDOW: i32 = 5;

/// Floor applied to the minimum of the observed founding-year range so the
/// ecosystem summary never starts before the sector existed.
pub const STATS_YEAR_FLOOR: i32 = 2010;

// =============================================================================
// RELEVANCE SEARCH
// =============================================================================

/// Queries shorter than this (after trimming) skip scoring entirely.
pub const SHORT_QUERY_MIN_LEN: usize = 2;

/// Number of records returned for queries too short to score.
pub const SHORT_QUERY_RESULT_LIMIT: usize = 10;

/// Minimum token length kept after query tokenization.
pub const RELEVANCE_TOKEN_MIN_LEN: usize = 3;

/// Relevance weight of a term hit in the startup name (strongest signal).
pub const RELEVANCE_WEIGHT_NAME: u32 = 10;

/// Relevance weight of a term hit in the vertical.
pub const RELEVANCE_WEIGHT_VERTICAL: u32 = 5;

/// Relevance weight of a term hit in the technologies field.
pub const RELEVANCE_WEIGHT_TECHNOLOGY: u32 = 4;

/// Relevance weight of a term hit in the subvertical.
pub const RELEVANCE_WEIGHT_SUBVERTICAL: u32 = 3;

/// Relevance weight of a term hit in the description.
pub const RELEVANCE_WEIGHT_DESCRIPTION: u32 = 2;

/// Relevance weight of a term hit in the region (weakest signal).
pub const RELEVANCE_WEIGHT_REGION: u32 = 1;

// =============================================================================
// CACHING
// =============================================================================

/// Default time-to-live for cached datasets in seconds (5 minutes).
pub const CACHE_TTL_SECS: i64 = 300;

// =============================================================================
// COMPATIBILITY WEIGHT CONFIGURATION
// =============================================================================

/// Weights applied by the compatibility scorer, one per filter dimension.
///
/// Only dimensions that are active in the evaluated `FilterState` contribute
/// their weight to the achievable maximum, so these values set the relative
/// importance of dimensions rather than absolute point totals.
#[derive(Debug, Clone, PartialEq)]
pub struct CompatibilityWeights {
    /// Weight of an exact region match.
    pub location: f32,
    /// Weight of technology overlap (scaled by match fraction).
    pub technology: f32,
    /// Weight of an exact maturity-stage match.
    pub funding_stage: f32,
    /// Weight of the funding amount lying inside the requested range.
    pub funding_range: f32,
}

impl Default for CompatibilityWeights {
    fn default() -> Self {
        Self {
            location: WEIGHT_LOCATION,
            technology: WEIGHT_TECHNOLOGY,
            funding_stage: WEIGHT_FUNDING_STAGE,
            funding_range: WEIGHT_FUNDING_RANGE,
        }
    }
}

impl CompatibilityWeights {
    /// Load weights from environment variables with fallback to defaults.
    ///
    /// Each weight is clamped to `[0, 100]`; unparseable values are ignored
    /// with a warning.
    pub fn from_env() -> Self {
        let mut weights = Self::default();

        for (var, slot) in [
            ("VIVERO_WEIGHT_LOCATION", &mut weights.location),
            ("VIVERO_WEIGHT_TECHNOLOGY", &mut weights.technology),
            ("VIVERO_WEIGHT_STAGE", &mut weights.funding_stage),
            ("VIVERO_WEIGHT_FUNDING", &mut weights.funding_range),
        ] {
            if let Ok(val) = std::env::var(var) {
                if let Ok(w) = val.parse::<f32>() {
                    *slot = w.clamp(0.0, 100.0);
                } else {
                    tracing::warn!(value = %val, "Invalid {}, using default", var);
                }
            }
        }

        weights
    }
}

// =============================================================================
// ENGINE CONFIGURATION
// =============================================================================

/// Tunable limits for the filter engine and its auxiliary generators.
///
/// Read from environment variables on demand (no restart required for
/// changes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum suggestions emitted per evaluation.
    pub suggestion_limit: usize,
    /// Dataset cache time-to-live in seconds.
    pub cache_ttl_secs: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: SUGGESTION_LIMIT,
            cache_ttl_secs: CACHE_TTL_SECS,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables with fallback to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("VIVERO_SUGGESTION_LIMIT") {
            if let Ok(n) = val.parse::<usize>() {
                config.suggestion_limit = n.clamp(1, 20);
            } else {
                tracing::warn!(value = %val, "Invalid VIVERO_SUGGESTION_LIMIT, using default");
            }
        }

        if let Ok(val) = std::env::var("VIVERO_CACHE_TTL_SECS") {
            if let Ok(secs) = val.parse::<i64>() {
                config.cache_ttl_secs = secs.clamp(1, 86_400);
            } else {
                tracing::warn!(value = %val, "Invalid VIVERO_CACHE_TTL_SECS, using default");
            }
        }

        config
    }
}
