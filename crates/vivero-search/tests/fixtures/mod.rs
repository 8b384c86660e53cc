//! Test fixtures for the discovery and pipeline integration tests.
//!
//! Provides a small but realistic slice of the agrifood directory,
//! the three-startup scenario used by the pipeline acceptance tests,
//! and raw rows in the three historical key shapes.

use serde_json::{json, Value};
use vivero_search::StartupRecord;

/// Route pipeline tracing to the test writer, honoring `RUST_LOG`.
///
/// Safe to call from any test; repeated initialization is ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Eight-record catalog with a realistic spread of regions, stages,
/// technologies, and data gaps.
pub fn catalog() -> Vec<StartupRecord> {
    vec![
        StartupRecord {
            id: "heura-foods".to_string(),
            name: "Heura Foods".to_string(),
            description: "Carne vegetal a partir de proteína de legumbres".to_string(),
            region: "Barcelona".to_string(),
            founding_year: "2017".to_string(),
            vertical: "Foodtech".to_string(),
            subvertical: "Plant-based".to_string(),
            technologies: "Plant-based, Foodtech".to_string(),
            impact_types: "Sostenibilidad, Social".to_string(),
            funding_stage: "Series B".to_string(),
            team_diversity: "Mixed".to_string(),
            total_funding: "20.000.000".to_string(),
            website: Some("https://heurafoods.com".to_string()),
        },
        StartupRecord {
            id: "agrow-analytics".to_string(),
            name: "Agrow Analytics".to_string(),
            description: "Optimización de riego con inteligencia artificial".to_string(),
            region: "Valencia".to_string(),
            founding_year: "2020".to_string(),
            vertical: "Agtech".to_string(),
            subvertical: "Water management".to_string(),
            technologies: "AI, Data Analytics, Smart Irrigation".to_string(),
            impact_types: "Medioambiental".to_string(),
            funding_stage: "Seed".to_string(),
            team_diversity: "Mixed".to_string(),
            total_funding: "750000".to_string(),
            website: Some("https://agrowanalytics.com".to_string()),
        },
        StartupRecord {
            id: "cocuus".to_string(),
            name: "Cocuus".to_string(),
            description: "Impresión 3D de alimentos y análogos cárnicos".to_string(),
            region: "Pamplona".to_string(),
            founding_year: "2017".to_string(),
            vertical: "Foodtech".to_string(),
            subvertical: "Alt-protein".to_string(),
            technologies: "3D Printing, Cultured Meat".to_string(),
            impact_types: "Económico".to_string(),
            funding_stage: "Series A".to_string(),
            team_diversity: "Male".to_string(),
            total_funding: "2.500.000".to_string(),
            website: None,
        },
        StartupRecord {
            id: "biome-makers".to_string(),
            name: "Biome Makers".to_string(),
            description: "Análisis microbiano del suelo para viticultura".to_string(),
            region: "Valencia".to_string(),
            founding_year: "2015".to_string(),
            vertical: "Biotech".to_string(),
            subvertical: "Soil health".to_string(),
            technologies: "Biotech, Data Analytics".to_string(),
            impact_types: "Medioambiental".to_string(),
            funding_stage: "Series B".to_string(),
            team_diversity: "Mixed".to_string(),
            total_funding: "15.000.000".to_string(),
            website: Some("https://biomemakers.com".to_string()),
        },
        StartupRecord {
            id: "nucaps".to_string(),
            name: "Nucaps".to_string(),
            description: "Nanocápsulas de probióticos e ingredientes funcionales".to_string(),
            region: "Pamplona".to_string(),
            founding_year: "2018".to_string(),
            vertical: "Foodtech".to_string(),
            subvertical: "Nutrition".to_string(),
            technologies: "Encapsulation, Nutrition".to_string(),
            impact_types: "Social".to_string(),
            funding_stage: "Seed".to_string(),
            team_diversity: "Female".to_string(),
            total_funding: "1,2".to_string(),
            website: None,
        },
        StartupRecord {
            id: "agroia-labs".to_string(),
            name: "AgroIA Labs".to_string(),
            description: "Monitorización de cultivos con visión aérea".to_string(),
            region: "Madrid".to_string(),
            founding_year: "2021".to_string(),
            vertical: "Agtech".to_string(),
            subvertical: "Crop monitoring".to_string(),
            technologies: "AI, Drones, Remote Sensing".to_string(),
            impact_types: "Medioambiental".to_string(),
            funding_stage: "Seed".to_string(),
            team_diversity: "Mixed".to_string(),
            total_funding: "300000".to_string(),
            website: None,
        },
        StartupRecord {
            id: "area-verde".to_string(),
            name: "Área Verde".to_string(),
            description: "Invernaderos hidropónicos de bajo consumo".to_string(),
            region: "Almería".to_string(),
            founding_year: "2019".to_string(),
            vertical: "Agtech".to_string(),
            subvertical: "Greenhouse".to_string(),
            technologies: "Hydroponics, Vertical Farming".to_string(),
            impact_types: "Medioambiental".to_string(),
            funding_stage: "Series A".to_string(),
            team_diversity: "Female".to_string(),
            total_funding: "4.000.000".to_string(),
            website: None,
        },
        StartupRecord {
            id: "veganfruits".to_string(),
            name: "VeganFruits".to_string(),
            description: "Aprovechamiento de excedentes de fruta".to_string(),
            region: "Murcia".to_string(),
            founding_year: "2016".to_string(),
            vertical: "Foodtech".to_string(),
            subvertical: "Upcycling".to_string(),
            technologies: "Food Upcycling, Circular Economy".to_string(),
            impact_types: "Sostenibilidad".to_string(),
            funding_stage: "Growth".to_string(),
            team_diversity: String::new(),
            total_funding: String::new(),
            website: None,
        },
    ]
}

/// The three-startup acceptance scenario: two Madrid AI startups at
/// Seed stage and one Barcelona plant-based Series A.
pub fn scenario_trio() -> Vec<StartupRecord> {
    vec![
        StartupRecord {
            id: "a".to_string(),
            name: "A".to_string(),
            region: "Madrid".to_string(),
            technologies: "AI,IoT".to_string(),
            funding_stage: "Seed".to_string(),
            total_funding: "500000".to_string(),
            ..StartupRecord::default()
        },
        StartupRecord {
            id: "b".to_string(),
            name: "B".to_string(),
            region: "Barcelona".to_string(),
            technologies: "Plant-based".to_string(),
            funding_stage: "Series A".to_string(),
            total_funding: "2.5".to_string(),
            ..StartupRecord::default()
        },
        StartupRecord {
            id: "c".to_string(),
            name: "C".to_string(),
            region: "Madrid".to_string(),
            technologies: "AI".to_string(),
            funding_stage: "Seed".to_string(),
            total_funding: "100".to_string(),
            ..StartupRecord::default()
        },
    ]
}

/// Raw rows in the three key shapes the normalizer accepts, plus two
/// rows it must reject.
pub fn raw_rows() -> Vec<Value> {
    vec![
        json!({
            "id": "heura-foods",
            "nombre": "Heura Foods",
            "descripcion": "Proteína vegetal",
            "region": "Barcelona",
            "year": 2017,
            "tecnologia": "Plant-based, Foodtech",
            "nivel_madurez": "Series B",
            "inversion_total": "20.000.000"
        }),
        json!({
            "Nombre": "AgroSmart",
            "Descripción": "Sensores de riego",
            "Región (CCAA)": "Murcia",
            "Año": "2020",
            "Tecnología": "IoT, Smart Irrigation",
            "Nivel de madurez": "Seed",
            "Inversión total (€)": "500000"
        }),
        json!({
            "name": "BioCultivo",
            "description": "Fermentación de precisión",
            "location": "Valencia",
            "foundingYear": "2019",
            "technologyFocus": "Biotech",
            "fundingStage": "Series A",
            "totalFunding": "3.200.000"
        }),
        json!({ "region": "Madrid" }),
        json!("not a row"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let records = catalog();
        let mut ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn scenario_trio_matches_its_contract() {
        let trio = scenario_trio();
        assert_eq!(trio.len(), 3);
        assert_eq!(trio[0].name, "A");
        assert_eq!(trio[1].region, "Barcelona");
        assert_eq!(trio[2].total_funding, "100");
    }
}
