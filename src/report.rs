//! Dashboard Report
//! Computes every view from one catalog and packages them for the renderers.

use crate::config::ReportConfig;
use crate::data::{EarthquakeCatalog, EarthquakeRecord};
use crate::stats::{histogram, CategoryAggregate, HistogramBin, StatsCalculator, SummaryStats};
use crate::views::{spatial_sample, top_n};
use serde::Serialize;

/// Format the record count for the summary card.
///
/// From 1000 upwards the count is shown in thousands with one decimal
/// (`12345` → `"12.3K"`), below that as a plain grouped integer.
pub fn format_total_count(count: usize) -> String {
    if count >= 1000 {
        format!("{:.1}K", count as f64 / 1000.0)
    } else {
        group_thousands(count)
    }
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Display strings for the four summary cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCards {
    pub total_count: String,
    pub max_magnitude: Option<String>,
    pub strong_count: String,
    pub avg_depth: Option<String>,
}

impl SummaryCards {
    pub fn from_summary(summary: &SummaryStats) -> Self {
        Self {
            total_count: format_total_count(summary.total_count),
            max_magnitude: summary.max_magnitude.map(|m| format!("{m:.1}")),
            strong_count: group_thousands(summary.strong_count),
            avg_depth: summary.avg_depth.map(|d| format!("{d:.1} km")),
        }
    }
}

/// Every view the dashboard renders, computed from the same catalog.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub summary: SummaryStats,
    pub cards: SummaryCards,
    pub spatial_sample: Vec<EarthquakeRecord>,
    pub top_quakes: Vec<EarthquakeRecord>,
    pub category_stats: Vec<CategoryAggregate>,
    pub magnitude_histogram: Vec<HistogramBin>,
    pub depth_histogram: Vec<HistogramBin>,
    pub config: ReportConfig,
}

impl DashboardReport {
    /// Compute all views. They only read the catalog, so they run in parallel.
    pub fn build(catalog: &EarthquakeCatalog, config: &ReportConfig) -> Self {
        let (
            (summary, category_stats),
            ((spatial_sample, top_quakes), (magnitude_histogram, depth_histogram)),
        ) = rayon::join(
            || {
                rayon::join(
                    || StatsCalculator::summarize(catalog),
                    || StatsCalculator::category_aggregates(catalog),
                )
            },
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || {
                                spatial_sample(
                                    catalog,
                                    config.sample_magnitude_floor,
                                    config.sample_size,
                                    config.sample_seed,
                                )
                            },
                            || top_n(catalog, config.top_magnitude_floor, config.top_n),
                        )
                    },
                    || {
                        rayon::join(
                            || {
                                histogram(
                                    &catalog.magnitudes(),
                                    config.magnitude_bin_width,
                                    config.max_histogram_bins,
                                )
                            },
                            || {
                                histogram(
                                    &catalog.depths(),
                                    config.depth_bin_width,
                                    config.max_histogram_bins,
                                )
                            },
                        )
                    },
                )
            },
        );

        log::info!(
            "Report: {} records, {} mapped, {} ranked, {} categories",
            summary.total_count,
            spatial_sample.len(),
            top_quakes.len(),
            category_stats.len()
        );

        Self {
            cards: SummaryCards::from_summary(&summary),
            summary,
            spatial_sample,
            top_quakes,
            category_stats,
            magnitude_histogram,
            depth_histogram,
            config: config.clone(),
        }
    }

    /// Whether the catalog had nothing to report on.
    pub fn is_empty(&self) -> bool {
        self.summary.total_count == 0
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
