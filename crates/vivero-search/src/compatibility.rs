//! Weighted compatibility scoring between a startup and the active filters.
//!
//! The score answers "how well does this startup match what the user is
//! currently asking for" as a percentage. Each dimension carries a fixed
//! weight and participates only while its filter dimension is active:
//!
//! | Dimension      | Weight | Contribution                               |
//! |----------------|--------|--------------------------------------------|
//! | Location       | 20     | all-or-nothing region membership           |
//! | Technology     | 30     | fraction of requested tags the startup has |
//! | Funding stage  | 25     | all-or-nothing stage membership            |
//! | Funding range  | 25     | all-or-nothing range membership            |
//!
//! The result is `round(100 × achieved / maximum)` over the active
//! dimensions, so a perfect match scores 100 no matter how many
//! dimensions are in play. With no active dimension the score is 0.

use vivero_core::defaults::CompatibilityWeights;
use vivero_core::{FilterState, StartupRecord};

/// Score one startup against the active filter state, 0..=100.
pub fn compute_compatibility(
    startup: &StartupRecord,
    filters: &FilterState,
    weights: &CompatibilityWeights,
) -> u8 {
    let mut achieved = 0.0f32;
    let mut maximum = 0.0f32;

    if filters.has_location_constraints() {
        maximum += weights.location;
        if filters.locations.iter().any(|l| *l == startup.region) {
            achieved += weights.location;
        }
    }

    if filters.has_technology_constraints() {
        maximum += weights.technology;

        let mut requested: Vec<&String> = filters.technologies.iter().collect();
        requested.sort();
        requested.dedup();

        let startup_techs = startup.split_technologies();
        let matching = requested
            .iter()
            .filter(|tech| startup_techs.iter().any(|t| t == **tech))
            .count();

        achieved += weights.technology * (matching as f32 / requested.len() as f32);
    }

    if filters.has_stage_constraints() {
        maximum += weights.funding_stage;
        if filters
            .funding_stages
            .iter()
            .any(|s| *s == startup.funding_stage)
        {
            achieved += weights.funding_stage;
        }
    }

    if let Some(range) = filters.funding_range {
        maximum += weights.funding_range;
        if range.contains(startup.funding_amount()) {
            achieved += weights.funding_range;
        }
    }

    if maximum == 0.0 {
        return 0;
    }

    (100.0 * achieved / maximum).round().clamp(0.0, 100.0) as u8
}
