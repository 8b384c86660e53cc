//! Chart-ready datasets derived from the filtered result set.
//!
//! Four fixed datasets, always in the same order: technology bar chart,
//! maturity-stage pie, geographic map, and founding-year timeline. All
//! of them describe the FILTERED subset, never the whole dataset, so the
//! charts update in lockstep with the listing.
//!
//! Ordering is fully deterministic: frequency charts sort count-desc
//! with the label as tiebreak, the timeline sorts by year ascending.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use vivero_core::defaults::BAR_TOP_TECHNOLOGIES;
use vivero_core::StartupRecord;

/// Label used when a record carries no value for a charted dimension.
const UNKNOWN_LABEL: &str = "Desconocido";

/// Latitude/longitude per region, for the map dataset.
static LOCATION_COORDINATES: Lazy<Vec<(&'static str, (f64, f64))>> = Lazy::new(|| {
    vec![
        ("Barcelona", (41.3851, 2.1734)),
        ("Madrid", (40.4168, -3.7038)),
        ("Valencia", (39.4699, -0.3763)),
        ("Seville", (37.3886, -5.9823)),
        ("San Sebastián", (43.3183, -1.9812)),
        ("Pamplona", (42.8169, -1.6432)),
        ("Elche", (38.2622, -0.7011)),
        ("Zaragoza", (41.6488, -0.8891)),
        ("Galicia", (42.5751, -8.1339)),
        ("Murcia", (37.9922, -1.1307)),
        ("Almería", (36.8381, -2.4597)),
    ]
});

/// Regions highlighted on the map.
pub const PRIORITY_REGIONS: &[&str] = &["Valencia", "Barcelona", "Seville"];

/// Coordinates for a region; unknown regions plot at the origin.
pub fn lookup_coordinates(location: &str) -> (f64, f64) {
    LOCATION_COORDINATES
        .iter()
        .find(|(name, _)| *name == location)
        .map(|(_, coords)| *coords)
        .unwrap_or((0.0, 0.0))
}

pub fn is_priority_region(location: &str) -> bool {
    PRIORITY_REGIONS.contains(&location)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
    Map,
    Timeline,
}

/// One point of a chart series. Coordinates and the priority flag are
/// present only on map points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<(f64, f64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<bool>,
}

impl SeriesPoint {
    fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            coordinates: None,
            priority: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationDataset {
    pub kind: ChartKind,
    pub title: String,
    pub series: Vec<SeriesPoint>,
}

/// Build the four chart datasets for a filtered result set.
pub fn generate_visualizations(filtered: &[StartupRecord]) -> Vec<VisualizationDataset> {
    vec![
        technology_bar(filtered),
        stage_pie(filtered),
        geographic_map(filtered),
        founding_timeline(filtered),
    ]
}

fn technology_bar(filtered: &[StartupRecord]) -> VisualizationDataset {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for startup in filtered {
        for tech in startup.split_technologies() {
            *counts.entry(tech).or_insert(0) += 1;
        }
    }

    let mut series = ranked_series(counts);
    series.truncate(BAR_TOP_TECHNOLOGIES);

    VisualizationDataset {
        kind: ChartKind::Bar,
        title: "Distribución por Tecnología".to_string(),
        series,
    }
}

fn stage_pie(filtered: &[StartupRecord]) -> VisualizationDataset {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for startup in filtered {
        let stage = if startup.funding_stage.is_empty() {
            UNKNOWN_LABEL.to_string()
        } else {
            startup.funding_stage.clone()
        };
        *counts.entry(stage).or_insert(0) += 1;
    }

    VisualizationDataset {
        kind: ChartKind::Pie,
        title: "Distribución por Etapa".to_string(),
        series: ranked_series(counts),
    }
}

fn geographic_map(filtered: &[StartupRecord]) -> VisualizationDataset {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for startup in filtered {
        let location = if startup.region.is_empty() {
            UNKNOWN_LABEL.to_string()
        } else {
            startup.region.clone()
        };
        *counts.entry(location).or_insert(0) += 1;
    }

    let series = ranked_series(counts)
        .into_iter()
        .map(|mut point| {
            point.coordinates = Some(lookup_coordinates(&point.label));
            point.priority = Some(is_priority_region(&point.label));
            point
        })
        .collect();

    VisualizationDataset {
        kind: ChartKind::Map,
        title: "Distribución Geográfica".to_string(),
        series,
    }
}

fn founding_timeline(filtered: &[StartupRecord]) -> VisualizationDataset {
    let mut counts: BTreeMap<i32, u64> = BTreeMap::new();
    for startup in filtered {
        let year = startup.founding_year_value();
        if year > 0 {
            *counts.entry(year).or_insert(0) += 1;
        }
    }

    VisualizationDataset {
        kind: ChartKind::Timeline,
        title: "Línea Temporal de Fundación".to_string(),
        series: counts
            .into_iter()
            .map(|(year, count)| SeriesPoint::new(year.to_string(), count as f64))
            .collect(),
    }
}

/// Count map → series sorted by count desc, label asc on ties.
fn ranked_series(counts: HashMap<String, u64>) -> Vec<SeriesPoint> {
    let mut entries: Vec<(String, u64)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
        .into_iter()
        .map(|(label, count)| SeriesPoint::new(label, count as f64))
        .collect()
}
