//! Ecosystem-wide aggregate metrics for the analytics dashboard.
//!
//! One pure pass over the dataset produces every panel the dashboard
//! shows: funding totals, per-stage and per-year aggregates, location
//! and technology distributions, cumulative trends, and the top-funded
//! and recently-founded shortlists. All monetary figures run through
//! the canonical funding parser, and `current_year` is injected so the
//! "recent" window is reproducible under test.
//!
//! Records whose founding year cannot be parsed participate in the
//! dataset-wide totals but are left out of the year series; a phantom
//! "this year" bucket would say more about data quality than about the
//! ecosystem.

use serde::Serialize;
use tracing::debug;
use vivero_core::defaults::{RECENT_STARTUPS_LIMIT, RECENT_YEARS_WINDOW, TOP_FUNDED_LIMIT};
use vivero_core::StartupRecord;

const UNKNOWN_LABEL: &str = "Desconocido";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageFunding {
    pub stage: String,
    pub amount: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearFunding {
    pub year: i32,
    pub amount: f64,
    pub count: u64,
}

/// Share of the dataset carrying one label of a dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionEntry {
    pub label: String,
    pub count: u64,
    /// Percent of all startups, 0..=100.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub year: i32,
    pub cumulative_funding: f64,
    pub cumulative_startups: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopFundedEntry {
    pub name: String,
    pub funding: f64,
    pub stage: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentStartupEntry {
    pub name: String,
    pub year: i32,
    pub funding: f64,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EcosystemAnalytics {
    pub total_startups: usize,
    pub total_funding: f64,
    pub average_funding: f64,
    pub funding_by_stage: Vec<StageFunding>,
    pub funding_by_year: Vec<YearFunding>,
    pub location_distribution: Vec<DistributionEntry>,
    pub technology_distribution: Vec<DistributionEntry>,
    pub funding_trends: Vec<TrendPoint>,
    pub top_funded: Vec<TopFundedEntry>,
    pub recent_startups: Vec<RecentStartupEntry>,
}

/// Compute the full analytics snapshot for a dataset.
pub fn compute_analytics(startups: &[StartupRecord], current_year: i32) -> EcosystemAnalytics {
    let total_startups = startups.len();
    if total_startups == 0 {
        return EcosystemAnalytics::default();
    }

    let total_funding: f64 = startups.iter().map(|s| s.funding_amount()).sum();
    let average_funding = total_funding / total_startups as f64;

    let by_year = funding_by_year(startups);
    let analytics = EcosystemAnalytics {
        total_startups,
        total_funding,
        average_funding,
        funding_by_stage: funding_by_stage(startups),
        location_distribution: location_distribution(startups, total_startups),
        technology_distribution: technology_distribution(startups, total_startups),
        funding_trends: funding_trends(&by_year),
        top_funded: top_funded(startups),
        recent_startups: recent_startups(startups, current_year),
        funding_by_year: by_year,
    };

    debug!(
        total_startups,
        total_funding,
        stage_count = analytics.funding_by_stage.len(),
        year_count = analytics.funding_by_year.len(),
        "Analytics snapshot computed"
    );

    analytics
}

fn funding_by_stage(startups: &[StartupRecord]) -> Vec<StageFunding> {
    let mut buckets: Vec<StageFunding> = Vec::new();
    for startup in startups {
        let stage = if startup.funding_stage.is_empty() {
            UNKNOWN_LABEL
        } else {
            startup.funding_stage.as_str()
        };
        match buckets.iter_mut().find(|b| b.stage == stage) {
            Some(bucket) => {
                bucket.amount += startup.funding_amount();
                bucket.count += 1;
            }
            None => buckets.push(StageFunding {
                stage: stage.to_string(),
                amount: startup.funding_amount(),
                count: 1,
            }),
        }
    }

    buckets.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.stage.cmp(&b.stage))
    });
    buckets
}

fn funding_by_year(startups: &[StartupRecord]) -> Vec<YearFunding> {
    let mut buckets: Vec<YearFunding> = Vec::new();
    for startup in startups {
        let year = startup.founding_year_value();
        if year == 0 {
            continue;
        }
        match buckets.iter_mut().find(|b| b.year == year) {
            Some(bucket) => {
                bucket.amount += startup.funding_amount();
                bucket.count += 1;
            }
            None => buckets.push(YearFunding {
                year,
                amount: startup.funding_amount(),
                count: 1,
            }),
        }
    }

    buckets.sort_by_key(|b| b.year);
    buckets
}

fn distribution(counts: Vec<(String, u64)>, total: usize) -> Vec<DistributionEntry> {
    let mut entries: Vec<DistributionEntry> = counts
        .into_iter()
        .map(|(label, count)| DistributionEntry {
            label,
            count,
            percentage: (count as f64 / total as f64) * 100.0,
        })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    entries
}

fn location_distribution(startups: &[StartupRecord], total: usize) -> Vec<DistributionEntry> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    for startup in startups {
        let location = if startup.region.is_empty() {
            UNKNOWN_LABEL
        } else {
            startup.region.as_str()
        };
        match counts.iter_mut().find(|(label, _)| label == location) {
            Some((_, count)) => *count += 1,
            None => counts.push((location.to_string(), 1)),
        }
    }
    distribution(counts, total)
}

fn technology_distribution(startups: &[StartupRecord], total: usize) -> Vec<DistributionEntry> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    for startup in startups {
        for tech in startup.split_technologies() {
            match counts.iter_mut().find(|(label, _)| *label == tech) {
                Some((_, count)) => *count += 1,
                None => counts.push((tech, 1)),
            }
        }
    }
    distribution(counts, total)
}

fn funding_trends(by_year: &[YearFunding]) -> Vec<TrendPoint> {
    let mut cumulative_funding = 0.0;
    let mut cumulative_startups = 0;

    by_year
        .iter()
        .map(|bucket| {
            cumulative_funding += bucket.amount;
            cumulative_startups += bucket.count;
            TrendPoint {
                year: bucket.year,
                cumulative_funding,
                cumulative_startups,
            }
        })
        .collect()
}

fn top_funded(startups: &[StartupRecord]) -> Vec<TopFundedEntry> {
    let mut ranked: Vec<&StartupRecord> = startups.iter().collect();
    ranked.sort_by(|a, b| {
        b.funding_amount()
            .partial_cmp(&a.funding_amount())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
        .into_iter()
        .take(TOP_FUNDED_LIMIT)
        .map(|startup| TopFundedEntry {
            name: startup.name.clone(),
            funding: startup.funding_amount(),
            stage: fallback_label(&startup.funding_stage),
            location: fallback_label(&startup.region),
        })
        .collect()
}

fn recent_startups(startups: &[StartupRecord], current_year: i32) -> Vec<RecentStartupEntry> {
    let cutoff = current_year - RECENT_YEARS_WINDOW;

    let mut recent: Vec<&StartupRecord> = startups
        .iter()
        .filter(|s| {
            let year = s.founding_year_value();
            year > 0 && year >= cutoff
        })
        .collect();
    recent.sort_by_key(|s| std::cmp::Reverse(s.founding_year_value()));

    recent
        .into_iter()
        .take(RECENT_STARTUPS_LIMIT)
        .map(|startup| RecentStartupEntry {
            name: startup.name.clone(),
            year: startup.founding_year_value(),
            funding: startup.funding_amount(),
            location: fallback_label(&startup.region),
        })
        .collect()
}

fn fallback_label(raw: &str) -> String {
    if raw.is_empty() {
        UNKNOWN_LABEL.to_string()
    } else {
        raw.to_string()
    }
}
