//! Keyword relevance ranking for the quick-search box.
//!
//! Unlike the filter pipeline, which is exact and binary, the quick
//! search tolerates partial language: it tokenizes the query, expands
//! known sector terms into their related vocabulary, and scores each
//! startup by which fields the terms land in. A name hit is worth five
//! times a description hit, so "heura" surfaces Heura Foods first even
//! when the word also appears in competitors' descriptions.
//!
//! Queries shorter than two characters are treated as "show me
//! something": the first few records come back unscored.

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;
use vivero_core::defaults::{
    RELEVANCE_TOKEN_MIN_LEN, RELEVANCE_WEIGHT_DESCRIPTION, RELEVANCE_WEIGHT_NAME,
    RELEVANCE_WEIGHT_REGION, RELEVANCE_WEIGHT_SUBVERTICAL, RELEVANCE_WEIGHT_TECHNOLOGY,
    RELEVANCE_WEIGHT_VERTICAL, SHORT_QUERY_MIN_LEN, SHORT_QUERY_RESULT_LIMIT,
};
use vivero_core::StartupRecord;

/// Sector term → related vocabulary it expands to. Lookup is by exact
/// token, so only tokens that survive the length filter can expand.
static SECTOR_KEYWORDS: Lazy<Vec<(&'static str, &'static [&'static str])>> = Lazy::new(|| {
    vec![
        ("proteina", &["plant-based", "vegetal", "alternativa", "heura", "carne"][..]),
        ("carne", &["cultivada", "celular", "biotech", "proteina"][..]),
        ("agricultura", &["precision", "agtech", "sensores", "drones", "iot"][..]),
        ("sostenibilidad", &["circular", "desperdicio", "residuos", "envases"][..]),
        ("biotecnologia", &["fermentacion", "ingredientes", "funcional"][..]),
        ("ia", &["inteligencia artificial", "machine learning", "datos", "prediccion"][..]),
        ("iot", &["sensores", "conectividad", "smart", "precision"][..]),
    ]
});

/// One ranked quick-search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelevanceHit {
    pub startup: StartupRecord,
    /// Accumulated field-weight score; 0 on the short-query path.
    pub score: u32,
}

/// Rank the dataset against a free-text query.
pub fn rank_by_relevance(startups: &[StartupRecord], query: &str) -> Vec<RelevanceHit> {
    if query.trim().len() < SHORT_QUERY_MIN_LEN {
        return startups
            .iter()
            .take(SHORT_QUERY_RESULT_LIMIT)
            .map(|s| RelevanceHit {
                startup: s.clone(),
                score: 0,
            })
            .collect();
    }

    let terms = expand_terms(query);

    let mut hits: Vec<RelevanceHit> = startups
        .iter()
        .map(|startup| RelevanceHit {
            startup: startup.clone(),
            score: score_startup(startup, &terms),
        })
        .filter(|hit| hit.score > 0)
        .collect();

    hits.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(
        query = %query,
        term_count = terms.len(),
        result_count = hits.len(),
        "Relevance search complete"
    );

    hits
}

/// Tokenize and expand the query. Tokens must exceed the minimum length
/// to count; expansion keeps first-seen order without duplicates.
fn expand_terms(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split_whitespace()
        .filter(|t| t.chars().count() >= RELEVANCE_TOKEN_MIN_LEN)
        .collect();

    let mut expanded: Vec<String> = Vec::new();
    let mut push = |term: &str, expanded: &mut Vec<String>| {
        if !expanded.iter().any(|t| t == term) {
            expanded.push(term.to_string());
        }
    };

    for token in &tokens {
        push(token, &mut expanded);
    }
    for token in &tokens {
        if let Some((_, related)) = SECTOR_KEYWORDS.iter().find(|(key, _)| key == token) {
            for term in *related {
                push(term, &mut expanded);
            }
        }
    }

    expanded
}

fn score_startup(startup: &StartupRecord, terms: &[String]) -> u32 {
    let name = startup.name.to_lowercase();
    let vertical = startup.vertical.to_lowercase();
    let technologies = startup.technologies.to_lowercase();
    let subvertical = startup.subvertical.to_lowercase();
    let description = startup.description.to_lowercase();
    let region = startup.region.to_lowercase();

    let mut score = 0;
    for term in terms {
        if name.contains(term.as_str()) {
            score += RELEVANCE_WEIGHT_NAME;
        }
        if vertical.contains(term.as_str()) {
            score += RELEVANCE_WEIGHT_VERTICAL;
        }
        if technologies.contains(term.as_str()) {
            score += RELEVANCE_WEIGHT_TECHNOLOGY;
        }
        if subvertical.contains(term.as_str()) {
            score += RELEVANCE_WEIGHT_SUBVERTICAL;
        }
        if description.contains(term.as_str()) {
            score += RELEVANCE_WEIGHT_DESCRIPTION;
        }
        if region.contains(term.as_str()) {
            score += RELEVANCE_WEIGHT_REGION;
        }
    }
    score
}
