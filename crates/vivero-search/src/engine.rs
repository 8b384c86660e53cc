//! The filter pipeline: every active dimension, AND-combined.
//!
//! `apply_filters` is the single entry point the directory UI calls on
//! each filter change. Dimensions left inactive pass everything through;
//! active dimensions exclude any record missing the data they need. The
//! pipeline never mutates its inputs and returns freshly-owned results,
//! so calling it twice with the same arguments yields identical output.
//!
//! Predicate order follows the narrowing power observed on the real
//! dataset: semantic expansion first, then text, then the categorical
//! and range dimensions, with compatibility scoring last because it is
//! the only step that needs the other dimensions' definitions.

use tracing::debug;
use vivero_core::defaults::CompatibilityWeights;
use vivero_core::{FilterState, ScoredStartup, StartupRecord};

use crate::compatibility::compute_compatibility;
use crate::semantic::{expand_semantic_query, semantic_matches};

/// Apply the full filter state with the default compatibility weights.
pub fn apply_filters(startups: &[StartupRecord], filters: &FilterState) -> Vec<ScoredStartup> {
    apply_filters_with(startups, filters, &CompatibilityWeights::default())
}

/// Apply the full filter state with explicit compatibility weights.
///
/// Every survivor carries its compatibility score, whether or not the
/// threshold dimension was active.
pub fn apply_filters_with(
    startups: &[StartupRecord],
    filters: &FilterState,
    weights: &CompatibilityWeights,
) -> Vec<ScoredStartup> {
    let expanded = if filters.has_semantic_constraints() {
        expand_semantic_query(&filters.semantic_query)
    } else {
        Vec::new()
    };
    let needle = filters.search_text.to_lowercase();

    let mut results = Vec::new();
    for startup in startups {
        if !passes_dimensions(startup, filters, &expanded, &needle) {
            continue;
        }

        let compatibility = compute_compatibility(startup, filters, weights);
        if filters.has_compatibility_constraints()
            && compatibility < filters.compatibility_threshold
        {
            continue;
        }

        results.push(ScoredStartup {
            startup: startup.clone(),
            compatibility,
        });
    }

    debug!(
        input_count = startups.len(),
        result_count = results.len(),
        active_dimensions = filters.active_dimension_count(),
        "Filter pipeline complete"
    );

    results
}

fn passes_dimensions(
    startup: &StartupRecord,
    filters: &FilterState,
    expanded: &[String],
    needle: &str,
) -> bool {
    if filters.has_semantic_constraints()
        && !semantic_matches(startup, &filters.semantic_query, expanded)
    {
        return false;
    }

    if filters.has_search_constraints() {
        let hit = startup.name.to_lowercase().contains(needle)
            || startup.description.to_lowercase().contains(needle)
            || startup.technologies.to_lowercase().contains(needle);
        if !hit {
            return false;
        }
    }

    if filters.has_location_constraints() && !filters.locations.iter().any(|l| *l == startup.region)
    {
        return false;
    }

    if filters.has_stage_constraints()
        && !filters
            .funding_stages
            .iter()
            .any(|s| *s == startup.funding_stage)
    {
        return false;
    }

    if filters.has_technology_constraints() {
        let techs = startup.split_technologies();
        if !techs
            .iter()
            .any(|t| filters.technologies.iter().any(|f| f == t))
        {
            return false;
        }
    }

    if filters.has_impact_constraints() {
        let impacts = startup.split_impact_types();
        if !impacts
            .iter()
            .any(|i| filters.impact_types.iter().any(|f| f == i))
        {
            return false;
        }
    }

    if filters.has_gender_constraints()
        && !filters
            .founder_genders
            .iter()
            .any(|g| *g == startup.team_diversity)
    {
        return false;
    }

    if let Some(range) = filters.funding_range {
        if !range.contains(startup.funding_amount()) {
            return false;
        }
    }

    if let Some(range) = filters.year_range {
        if !range.contains(startup.founding_year_value()) {
            return false;
        }
    }

    true
}
