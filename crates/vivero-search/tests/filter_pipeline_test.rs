//! End-to-end tests for the filter pipeline over realistic directory data.
//!
//! This test suite validates:
//! - Location and technology filtering with compatibility annotation
//! - Funding-range filtering over parsed amounts, shorthand included
//! - Semantic expansion composed with range dimensions and sorting
//! - Raw rows flowing from normalization into the pipeline
//! - Locale-aware and numeric sort orders over scored results

mod fixtures;

use vivero_search::{
    apply_filters, normalize_rows, sort_scored, FilterState, FundingRange, ScoredStartup, SortKey,
    SortOrder, YearRange,
};

fn names(results: &[ScoredStartup]) -> Vec<&str> {
    results.iter().map(|r| r.startup.name.as_str()).collect()
}

// ============================================================================
// ACCEPTANCE SCENARIO - three startups, two Madrid AI, one Barcelona
// ============================================================================

#[test]
fn test_location_and_technology_filter_scores_full_matches() {
    let startups = fixtures::scenario_trio();
    let filters = FilterState::new()
        .with_location("Madrid")
        .with_technology("AI");

    let mut results = apply_filters(&startups, &filters);
    sort_scored(&mut results, SortKey::Name, SortOrder::Ascending);

    assert_eq!(names(&results), vec!["A", "C"]);
    assert!(results.iter().all(|r| r.compatibility == 100));
}

#[test]
fn test_funding_range_excludes_millions_shorthand() {
    let startups = fixtures::scenario_trio();
    let filters = FilterState::new().with_funding_range(FundingRange::new(0.0, 600_000.0));

    let mut results = apply_filters(&startups, &filters);
    sort_scored(&mut results, SortKey::Name, SortOrder::Ascending);

    // B's "2.5" reads as 2,500,000 and falls outside; A's 500,000 and
    // C's literal 100 stay in.
    assert_eq!(names(&results), vec!["A", "C"]);
    assert!(results.iter().all(|r| r.compatibility == 100));
}

#[test]
fn test_combined_dimensions_stay_conjunctive() {
    let startups = fixtures::scenario_trio();
    let filters = FilterState::new()
        .with_location("Madrid")
        .with_technology("AI")
        .with_funding_range(FundingRange::new(0.0, 600_000.0));

    let mut results = apply_filters(&startups, &filters);
    sort_scored(&mut results, SortKey::Name, SortOrder::Ascending);

    assert_eq!(names(&results), vec!["A", "C"]);
    assert!(results.iter().all(|r| r.compatibility == 100));
}

// ============================================================================
// PIPELINE OVER THE CATALOG
// ============================================================================

#[test]
fn test_empty_filter_passes_catalog_through_unscored() {
    let startups = fixtures::catalog();
    let results = apply_filters(&startups, &FilterState::new());

    assert_eq!(results.len(), startups.len());
    assert_eq!(results[0].startup.name, "Heura Foods");
    assert_eq!(results[7].startup.name, "VeganFruits");
    assert!(results.iter().all(|r| r.compatibility == 0));
}

#[test]
fn test_semantic_query_composes_with_year_range() {
    let startups = fixtures::catalog();
    let filters = FilterState::new()
        .with_semantic_query("inteligencia artificial")
        .with_year_range(YearRange::new(2020, 2024));

    let mut results = apply_filters(&startups, &filters);
    sort_scored(&mut results, SortKey::Year, SortOrder::Descending);

    // The concept expands to AI / Data Analytics / Remote Sensing tags;
    // Biome Makers carries one but was founded in 2015.
    assert_eq!(names(&results), vec!["AgroIA Labs", "Agrow Analytics"]);
    // Neither dimension scores, so survivors stay at zero.
    assert!(results.iter().all(|r| r.compatibility == 0));
}

#[test]
fn test_text_search_reaches_raw_technology_text() {
    let startups = fixtures::catalog();
    let filters = FilterState::new().with_search_text("smart irrigation");

    let results = apply_filters(&startups, &filters);
    assert_eq!(names(&results), vec!["Agrow Analytics"]);
}

#[test]
fn test_impact_and_diversity_dimensions_require_data() {
    let startups = fixtures::catalog();

    let by_gender = apply_filters(&startups, &FilterState::new().with_founder_gender("Female"));
    assert_eq!(names(&by_gender), vec!["Nucaps", "Área Verde"]);

    let by_impact = apply_filters(
        &startups,
        &FilterState::new().with_impact_type("Sostenibilidad"),
    );
    assert_eq!(names(&by_impact), vec!["Heura Foods", "VeganFruits"]);
}

#[test]
fn test_narrowing_keeps_results_a_subset() {
    let startups = fixtures::catalog();
    let base = FilterState::new().with_location("Valencia");
    let narrower = base.clone().with_funding_stage("Seed");

    let wide = apply_filters(&startups, &base);
    let narrow = apply_filters(&startups, &narrower);

    assert_eq!(names(&wide), vec!["Agrow Analytics", "Biome Makers"]);
    assert_eq!(names(&narrow), vec!["Agrow Analytics"]);
    for hit in &narrow {
        assert!(wide.iter().any(|w| w.startup.id == hit.startup.id));
    }
}

#[test]
fn test_threshold_composes_with_partial_technology_match() {
    let startups = fixtures::catalog();
    let filters = FilterState::new()
        .with_location("Madrid")
        .with_technology("AI")
        .with_technology("Biotech");

    // AgroIA Labs carries one of the two requested technologies:
    // 20/20 location + 15/30 technology = 70.
    let strict = apply_filters(&startups, &filters.clone().with_min_compatibility(80));
    assert!(strict.is_empty());

    let relaxed = apply_filters(&startups, &filters.with_min_compatibility(70));
    assert_eq!(names(&relaxed), vec!["AgroIA Labs"]);
    assert_eq!(relaxed[0].compatibility, 70);
}

// ============================================================================
// NORMALIZATION INTO THE PIPELINE
// ============================================================================

#[test]
fn test_normalized_rows_flow_through_the_pipeline() {
    fixtures::init_tracing();

    let records = normalize_rows(&fixtures::raw_rows());
    // Two rows are unusable: one has no name, one is not an object.
    assert_eq!(records.len(), 3);

    let by_tech = apply_filters(&records, &FilterState::new().with_technology("IoT"));
    assert_eq!(names(&by_tech), vec!["AgroSmart"]);
    assert_eq!(by_tech[0].compatibility, 100);

    // European thousands separators parse into real euro amounts.
    let by_funding = apply_filters(
        &records,
        &FilterState::new().with_funding_range(FundingRange::new(10_000_000.0, 30_000_000.0)),
    );
    assert_eq!(names(&by_funding), vec!["Heura Foods"]);
}

// ============================================================================
// SORTING SCORED RESULTS
// ============================================================================

#[test]
fn test_sort_treats_accents_as_base_letters() {
    let startups = fixtures::catalog();
    let mut results = apply_filters(&startups, &FilterState::new());
    sort_scored(&mut results, SortKey::Name, SortOrder::Ascending);

    assert_eq!(
        names(&results),
        vec![
            "AgroIA Labs",
            "Agrow Analytics",
            "Área Verde",
            "Biome Makers",
            "Cocuus",
            "Heura Foods",
            "Nucaps",
            "VeganFruits",
        ]
    );
}

#[test]
fn test_sort_by_funding_descending_uses_parsed_amounts() {
    let startups = fixtures::catalog();
    let mut results = apply_filters(&startups, &FilterState::new());
    sort_scored(&mut results, SortKey::Funding, SortOrder::Descending);

    assert_eq!(
        names(&results),
        vec![
            "Heura Foods",     // 20,000,000
            "Biome Makers",    // 15,000,000
            "Área Verde",      // 4,000,000
            "Cocuus",          // 2,500,000
            "Nucaps",          // "1,2" reads as 1,200,000
            "Agrow Analytics", // 750,000
            "AgroIA Labs",     // 300,000
            "VeganFruits",     // no funding data
        ]
    );
}
