//! Ranking Module
//! The strongest earthquakes, for the ranked table.

use crate::data::{EarthquakeCatalog, EarthquakeRecord};

/// The `n` strongest records at or above `floor`, strongest first.
///
/// Equal magnitudes keep their catalog order.
pub fn top_n(catalog: &EarthquakeCatalog, floor: f64, n: usize) -> Vec<EarthquakeRecord> {
    let mut ranked: Vec<EarthquakeRecord> = catalog.at_or_above(floor).copied().collect();
    ranked.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    ranked.truncate(n);
    ranked
}
