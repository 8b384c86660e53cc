//! Rule-based filter suggestions.
//!
//! Each rule watches the active filter state for a pattern users
//! commonly start from and offers a curated next step as a ready-to-apply
//! [`FilterPatch`]. Rules are additive and independent; firing order
//! never matters because the result is sorted by confidence before the
//! limit is applied.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;
use vivero_core::defaults::{
    SUGGESTION_LIMIT, SUGGEST_CONFIDENCE_AI_COMBO, SUGGEST_CONFIDENCE_BARCELONA,
    SUGGEST_CONFIDENCE_FEMALE_LEADERSHIP, SUGGEST_CONFIDENCE_PROXIMITY,
    SUGGEST_CONFIDENCE_SUSTAINABLE,
};
use vivero_core::{FilterPatch, FilterState, FundingRange, StartupRecord};

/// What kind of reasoning produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Combination,
    Semantic,
    Proximity,
}

/// One offered refinement of the current filter state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSuggestion {
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
    pub patch: FilterPatch,
    /// Heuristic confidence in 0..1, drives presentation order.
    pub confidence: f32,
}

/// Generate suggestions for the current filter state, best first.
pub fn generate_suggestions(
    filters: &FilterState,
    startups: &[StartupRecord],
) -> Vec<FilterSuggestion> {
    generate_suggestions_with_limit(filters, startups, SUGGESTION_LIMIT)
}

/// Generate suggestions with an explicit result limit.
pub fn generate_suggestions_with_limit(
    filters: &FilterState,
    startups: &[StartupRecord],
    limit: usize,
) -> Vec<FilterSuggestion> {
    let mut suggestions = Vec::new();

    if filters.technologies.iter().any(|t| t == "AI") {
        suggestions.push(FilterSuggestion {
            kind: SuggestionKind::Combination,
            title: "IA + Agricultura de Precisión".to_string(),
            description: "Startups que combinan IA con tecnologías de agricultura inteligente"
                .to_string(),
            patch: FilterPatch {
                technologies: Some(vec![
                    "AI".to_string(),
                    "Precision Ag".to_string(),
                    "Data Analytics".to_string(),
                ]),
                funding_stages: Some(vec!["Series A".to_string(), "Series B".to_string()]),
                ..FilterPatch::default()
            },
            confidence: SUGGEST_CONFIDENCE_AI_COMBO,
        });
    }

    if filters.locations.iter().any(|l| l == "Barcelona") {
        suggestions.push(FilterSuggestion {
            kind: SuggestionKind::Combination,
            title: "Ecosistema Barcelona Foodtech".to_string(),
            description: "Cluster de innovación alimentaria en Barcelona".to_string(),
            patch: FilterPatch {
                locations: Some(vec!["Barcelona".to_string()]),
                technologies: Some(vec![
                    "Foodtech".to_string(),
                    "Plant-based".to_string(),
                    "Biotech".to_string(),
                ]),
                ..FilterPatch::default()
            },
            confidence: SUGGEST_CONFIDENCE_BARCELONA,
        });
    }

    if filters.founder_genders.iter().any(|g| g == "Female") {
        suggestions.push(FilterSuggestion {
            kind: SuggestionKind::Combination,
            title: "Liderazgo Femenino en Agritech".to_string(),
            description: "Startups fundadas por mujeres en el sector agroalimentario".to_string(),
            patch: FilterPatch {
                founder_genders: Some(vec!["Female".to_string()]),
                funding_stages: Some(vec!["Seed".to_string(), "Series A".to_string()]),
                ..FilterPatch::default()
            },
            confidence: SUGGEST_CONFIDENCE_FEMALE_LEADERSHIP,
        });
    }

    if filters.semantic_query.contains("sostenible") {
        suggestions.push(FilterSuggestion {
            kind: SuggestionKind::Semantic,
            title: "Innovación Sostenible Completa".to_string(),
            description: "Todas las startups enfocadas en sostenibilidad y economía circular"
                .to_string(),
            patch: FilterPatch {
                semantic_query: Some("sostenibilidad".to_string()),
                funding_range: Some(FundingRange::new(1_000_000.0, 50_000_000.0)),
                ..FilterPatch::default()
            },
            confidence: SUGGEST_CONFIDENCE_SUSTAINABLE,
        });
    }

    if let Some(reference) = &filters.proximity {
        if let Some(startup) = startups.iter().find(|s| s.name == *reference) {
            suggestions.push(FilterSuggestion {
                kind: SuggestionKind::Proximity,
                title: format!("Similares a {}", startup.name),
                description: "Startups con tecnologías y modelos de negocio similares".to_string(),
                patch: FilterPatch {
                    technologies: Some(startup.split_technologies()),
                    funding_stages: Some(vec![startup.funding_stage.clone()]),
                    ..FilterPatch::default()
                },
                confidence: SUGGEST_CONFIDENCE_PROXIMITY,
            });
        }
    }

    suggestions.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });
    suggestions.truncate(limit);

    debug!(
        suggestion_count = suggestions.len(),
        "Filter suggestions generated"
    );

    suggestions
}
