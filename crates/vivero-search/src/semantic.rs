//! Concept-expansion semantic search.
//!
//! Users search in Spanish domain language ("sostenibilidad", "agricultura
//! inteligente") while records carry English technology tags. A curated
//! concept table bridges the two: every concept whose key appears inside
//! the lowercased query contributes its technology tags to a candidate
//! set, and startups carrying at least one candidate tag match.
//!
//! A query that touches no concept falls back to a direct substring
//! search, so an unknown phrase degrades to literal matching instead of
//! returning nothing.

use once_cell::sync::Lazy;
use tracing::debug;
use vivero_core::StartupRecord;

/// Concept key → technology tags it expands to. Keys are lowercase and
/// matched by substring against the lowercased query, accents included.
static CONCEPT_MAPPINGS: Lazy<Vec<(&'static str, &'static [&'static str])>> = Lazy::new(|| {
    vec![
        (
            "sostenibilidad",
            &["Plant-based", "Sustainability", "Circular Economy", "Food Upcycling"][..],
        ),
        (
            "inteligencia artificial",
            &["AI", "Data Analytics", "Remote Sensing", "Hyperspectral Imaging"][..],
        ),
        (
            "biotecnología",
            &["Biotech", "Cultured Meat", "Cellular Agriculture", "Plant Health"][..],
        ),
        (
            "agricultura inteligente",
            &["Agtech", "Precision Ag", "Smart Irrigation", "Farm Management"][..],
        ),
        (
            "innovación alimentaria",
            &["Foodtech", "Food Safety", "Nutrition", "Encapsulation"][..],
        ),
        (
            "tecnología verde",
            &["Sustainability", "Vertical Farming", "Hydroponics", "Smart Villages"][..],
        ),
    ]
});

/// Expand a free-form query into the technology tags of every concept it
/// mentions. Unknown queries expand to nothing.
pub fn expand_semantic_query(query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    let mut expanded: Vec<String> = Vec::new();

    for (concept, technologies) in CONCEPT_MAPPINGS.iter() {
        if needle.contains(concept) {
            for tech in *technologies {
                if !expanded.iter().any(|t| t == tech) {
                    expanded.push((*tech).to_string());
                }
            }
        }
    }

    expanded
}

/// Check one startup against an already-expanded query.
///
/// With candidate tags present this is exact tag membership; with none it
/// is the literal substring fallback over name, description, and tags.
pub fn semantic_matches(startup: &StartupRecord, query: &str, expanded: &[String]) -> bool {
    if !expanded.is_empty() {
        let techs = startup.split_technologies();
        return techs.iter().any(|t| expanded.iter().any(|e| e == t));
    }

    let needle = query.to_lowercase();
    startup.name.to_lowercase().contains(&needle)
        || startup.description.to_lowercase().contains(&needle)
        || startup
            .split_technologies()
            .iter()
            .any(|t| t.to_lowercase().contains(&needle))
}

/// Run a semantic search over the whole dataset.
///
/// An empty query matches everything; this function never narrows on
/// whitespace alone.
pub fn expand_and_search(query: &str, startups: &[StartupRecord]) -> Vec<StartupRecord> {
    if query.trim().is_empty() {
        return startups.to_vec();
    }

    let expanded = expand_semantic_query(query);
    let results: Vec<StartupRecord> = startups
        .iter()
        .filter(|s| semantic_matches(s, query, &expanded))
        .cloned()
        .collect();

    debug!(
        query = %query,
        expanded_tech_count = expanded.len(),
        result_count = results.len(),
        "Semantic search complete"
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn startup(name: &str, description: &str, tech: &str) -> StartupRecord {
        StartupRecord {
            id: name.to_lowercase(),
            name: name.to_string(),
            description: description.to_string(),
            technologies: tech.to_string(),
            ..StartupRecord::default()
        }
    }

    #[test]
    fn concept_expands_to_its_tags() {
        let expanded = expand_semantic_query("inteligencia artificial");
        assert_eq!(
            expanded,
            vec!["AI", "Data Analytics", "Remote Sensing", "Hyperspectral Imaging"]
        );
    }

    #[test]
    fn concept_matches_as_substring_of_longer_query() {
        let expanded = expand_semantic_query("startups de SOSTENIBILIDAD en España");
        assert!(expanded.iter().any(|t| t == "Plant-based"));
        assert!(expanded.iter().any(|t| t == "Circular Economy"));
    }

    #[test]
    fn multiple_concepts_union_without_duplicates() {
        // Both concepts carry "Sustainability"; the union keeps it once.
        let expanded = expand_semantic_query("tecnología verde y sostenibilidad");
        let count = expanded.iter().filter(|t| *t == "Sustainability").count();
        assert_eq!(count, 1);
        assert!(expanded.iter().any(|t| t == "Vertical Farming"));
        assert!(expanded.iter().any(|t| t == "Food Upcycling"));
    }

    #[test]
    fn unknown_query_expands_to_nothing() {
        assert!(expand_semantic_query("nonexistent-concept-xyz").is_empty());
    }

    #[test]
    fn expanded_query_requires_exact_tag_membership() {
        let startups = vec![
            startup("Alga", "Cultivo de algas", "Biotech, Plant Health"),
            startup("Riego", "Riego inteligente", "Smart Irrigation"),
        ];

        let results = expand_and_search("biotecnología", &startups);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Alga");
    }

    #[test]
    fn fallback_equals_direct_substring_search() {
        let startups = vec![
            startup("Drone Sur", "Drones para viñedos", "Drones, Remote Sensing"),
            startup("Otro", "Sin relación", "Foodtech"),
        ];

        // No concept mentions "drones"; the literal fallback finds it in
        // the name, description, and tags alike.
        let results = expand_and_search("drones", &startups);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Drone Sur");
    }

    #[test]
    fn unaccented_concept_spelling_falls_back_to_literal() {
        let startups = vec![startup("Alga", "Biotecnologia marina", "Biotech")];

        // "biotecnologia" without the accent is not a concept key; the
        // literal fallback still matches the description text.
        let results = expand_and_search("biotecnologia", &startups);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn empty_query_returns_everything() {
        let startups = vec![startup("A", "", "AI"), startup("B", "", "IoT")];
        assert_eq!(expand_and_search("   ", &startups).len(), 2);
    }
}
