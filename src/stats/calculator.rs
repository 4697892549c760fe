//! Statistics Calculator Module
//! Summary figures and per-category aggregates over the cleaned catalog.

use crate::config::STRONG_MAGNITUDE;
use crate::data::{EarthquakeCatalog, EarthquakeRecord, MagnitudeCategory};
use rayon::prelude::*;
use serde::Serialize;
use statrs::statistics::Statistics;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("No records available to compute {0}")]
    EmptyDataset(&'static str),
}

/// Headline figures of the dashboard.
///
/// `None` marks a statistic that has no data to work from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total_count: usize,
    pub max_magnitude: Option<f64>,
    pub strong_count: usize,
    pub avg_depth: Option<f64>,
}

/// Aggregate row for one magnitude category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAggregate {
    pub category: MagnitudeCategory,
    pub count: usize,
    /// Percentage of the whole catalog, 1 decimal.
    pub share_pct: f64,
    pub mean_magnitude: f64,
    pub max_magnitude: f64,
    pub mean_depth: Option<f64>,
    pub max_depth: Option<f64>,
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Handles the descriptive statistics of the dashboard.
pub struct StatsCalculator;

impl StatsCalculator {
    pub fn total_count(catalog: &EarthquakeCatalog) -> usize {
        catalog.len()
    }

    /// Largest magnitude, 1 decimal.
    pub fn max_magnitude(catalog: &EarthquakeCatalog) -> Result<f64, StatsError> {
        if catalog.is_empty() {
            return Err(StatsError::EmptyDataset("max_magnitude"));
        }
        let max = Statistics::max(catalog.records().iter().map(|r| r.magnitude));
        Ok(round_to(max, 1))
    }

    pub fn strong_count(catalog: &EarthquakeCatalog) -> usize {
        catalog.at_or_above(STRONG_MAGNITUDE).count()
    }

    /// Mean of the reported depths, 1 decimal. Records without depth are skipped.
    pub fn avg_depth(catalog: &EarthquakeCatalog) -> Result<f64, StatsError> {
        let depths = catalog.depths();
        if depths.is_empty() {
            return Err(StatsError::EmptyDataset("avg_depth"));
        }
        Ok(round_to(depths.iter().mean(), 1))
    }

    /// All headline figures, with empty-data failures turned into `None`.
    pub fn summarize(catalog: &EarthquakeCatalog) -> SummaryStats {
        let max_magnitude = Self::max_magnitude(catalog)
            .map_err(|e| log::warn!("{e}; reporting no data"))
            .ok();
        let avg_depth = Self::avg_depth(catalog)
            .map_err(|e| log::warn!("{e}; reporting no data"))
            .ok();

        SummaryStats {
            total_count: Self::total_count(catalog),
            max_magnitude,
            strong_count: Self::strong_count(catalog),
            avg_depth,
        }
    }

    /// Aggregate one category's members. Returns `None` for an empty group.
    fn aggregate_group(
        category: MagnitudeCategory,
        members: &[&EarthquakeRecord],
        total: usize,
    ) -> Option<CategoryAggregate> {
        if members.is_empty() {
            return None;
        }

        let magnitudes: Vec<f64> = members.iter().map(|r| r.magnitude).collect();
        let depths: Vec<f64> = members.iter().filter_map(|r| r.focal_depth).collect();
        let (mean_depth, max_depth) = if depths.is_empty() {
            (None, None)
        } else {
            (
                Some(round_to(depths.iter().mean(), 1)),
                Some(round_to(Statistics::max(depths.iter()), 1)),
            )
        };

        Some(CategoryAggregate {
            category,
            count: members.len(),
            share_pct: round_to(members.len() as f64 * 100.0 / total as f64, 1),
            mean_magnitude: round_to(magnitudes.iter().mean(), 2),
            max_magnitude: round_to(Statistics::max(magnitudes.iter()), 2),
            mean_depth,
            max_depth,
        })
    }

    /// One row per category present, sorted by mean magnitude, highest first.
    pub fn category_aggregates(catalog: &EarthquakeCatalog) -> Vec<CategoryAggregate> {
        let mut groups: BTreeMap<MagnitudeCategory, Vec<&EarthquakeRecord>> = BTreeMap::new();
        for record in catalog.records() {
            groups.entry(record.category()).or_default().push(record);
        }

        let total = catalog.len();
        let mut rows: Vec<CategoryAggregate> = groups
            .into_par_iter()
            .filter_map(|(category, members)| Self::aggregate_group(category, &members, total))
            .collect();

        // Stable, so equal means keep category order
        rows.sort_by(|a, b| b.mean_magnitude.total_cmp(&a.mean_magnitude));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quake(magnitude: f64, focal_depth: Option<f64>) -> EarthquakeRecord {
        EarthquakeRecord {
            latitude: 0.0,
            longitude: 0.0,
            magnitude,
            focal_depth,
        }
    }

    fn sample_catalog() -> EarthquakeCatalog {
        EarthquakeCatalog::from_records(vec![
            quake(4.2, Some(10.0)),
            quake(5.5, None),
            quake(6.8, Some(33.0)),
            quake(7.9, Some(70.5)),
            quake(4.6, Some(12.0)),
        ])
    }

    #[test]
    fn summary_of_sample_catalog() {
        let summary = StatsCalculator::summarize(&sample_catalog());
        assert_eq!(summary.total_count, 5);
        assert_eq!(summary.max_magnitude, Some(7.9));
        assert_eq!(summary.strong_count, 2);
        // (10 + 33 + 70.5 + 12) / 4 = 31.375
        assert_eq!(summary.avg_depth, Some(31.4));
    }

    #[test]
    fn empty_catalog_fails_max_magnitude() {
        let empty = EarthquakeCatalog::default();
        assert_eq!(StatsCalculator::total_count(&empty), 0);
        assert_eq!(
            StatsCalculator::max_magnitude(&empty),
            Err(StatsError::EmptyDataset("max_magnitude"))
        );

        let summary = StatsCalculator::summarize(&empty);
        assert_eq!(summary.max_magnitude, None);
        assert_eq!(summary.avg_depth, None);
    }

    #[test]
    fn avg_depth_needs_at_least_one_depth() {
        let catalog = EarthquakeCatalog::from_records(vec![quake(5.0, None)]);
        assert!(StatsCalculator::avg_depth(&catalog).is_err());
        assert_eq!(StatsCalculator::max_magnitude(&catalog), Ok(5.0));
    }

    #[test]
    fn aggregates_sorted_by_mean_magnitude() {
        let rows = StatsCalculator::category_aggregates(&sample_catalog());
        let order: Vec<MagnitudeCategory> = rows.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![
                MagnitudeCategory::Major,
                MagnitudeCategory::Strong,
                MagnitudeCategory::Moderate,
                MagnitudeCategory::Minor,
            ]
        );

        let minor = &rows[3];
        assert_eq!(minor.count, 2);
        assert_eq!(minor.mean_magnitude, 4.4);
        assert_eq!(minor.max_magnitude, 4.6);
        assert_eq!(minor.mean_depth, Some(11.0));
        assert_eq!(minor.max_depth, Some(12.0));
        assert_eq!(minor.share_pct, 40.0);

        let moderate = &rows[2];
        assert_eq!(moderate.mean_depth, None);
        assert_eq!(moderate.max_depth, None);
    }

    #[test]
    fn aggregate_counts_sum_to_total_and_skip_empty_categories() {
        let catalog = EarthquakeCatalog::from_records(vec![
            quake(4.1, Some(5.0)),
            quake(4.9, Some(6.0)),
            quake(7.2, Some(100.0)),
        ]);
        let rows = StatsCalculator::category_aggregates(&catalog);

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.count > 0));
        let sum: usize = rows.iter().map(|r| r.count).sum();
        assert_eq!(sum, StatsCalculator::total_count(&catalog));
    }

    #[test]
    fn rounding_helper() {
        assert_eq!(round_to(31.375, 1), 31.4);
        assert_eq!(round_to(4.456, 2), 4.46);
        assert_eq!(round_to(-2.25, 0), -2.0);
    }
}
