//! Spatial Sampler Module
//! Seeded subset of the catalog for the map.

use crate::data::{EarthquakeCatalog, EarthquakeRecord};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Records for the map: a seeded uniform sample, without replacement, of
/// the records at or above `floor`.
///
/// The sample holds `min(max_size, candidates)` records. The same catalog,
/// floor and seed always give the same records in the same order.
pub fn spatial_sample(
    catalog: &EarthquakeCatalog,
    floor: f64,
    max_size: usize,
    seed: u64,
) -> Vec<EarthquakeRecord> {
    let candidates: Vec<&EarthquakeRecord> = catalog.at_or_above(floor).collect();
    let amount = max_size.min(candidates.len());
    if amount == 0 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let picked: Vec<EarthquakeRecord> = rand::seq::index::sample(&mut rng, candidates.len(), amount)
        .into_iter()
        .map(|i| *candidates[i])
        .collect();

    log::debug!(
        "Sampled {} of {} records at magnitude >= {floor}",
        picked.len(),
        candidates.len()
    );
    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(n: usize) -> EarthquakeCatalog {
        EarthquakeCatalog::from_records(
            (0..n)
                .map(|i| EarthquakeRecord {
                    latitude: i as f64 * 0.01,
                    longitude: -(i as f64) * 0.01,
                    magnitude: 3.0 + (i % 50) as f64 * 0.1,
                    focal_depth: Some(i as f64),
                })
                .collect(),
        )
    }

    #[test]
    fn same_seed_same_sample() {
        let catalog = catalog(2000);
        let first = spatial_sample(&catalog, 4.0, 800, 42);
        let second = spatial_sample(&catalog, 4.0, 800, 42);
        assert_eq!(first.len(), 800);
        assert_eq!(first, second);
    }

    #[test]
    fn sample_respects_floor_without_duplicates() {
        let catalog = catalog(2000);
        let sample = spatial_sample(&catalog, 4.0, 800, 7);
        assert!(sample.iter().all(|r| r.magnitude >= 4.0));

        // focal_depth doubles as a unique row id here
        let mut ids: Vec<i64> = sample
            .iter()
            .filter_map(|r| r.focal_depth)
            .map(|d| d as i64)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), sample.len());
    }

    #[test]
    fn small_candidate_set_is_taken_whole() {
        let catalog = catalog(30);
        let eligible = catalog.at_or_above(4.0).count();
        let sample = spatial_sample(&catalog, 4.0, 800, 42);
        assert_eq!(sample.len(), eligible);
    }

    #[test]
    fn no_candidates_gives_empty_sample() {
        let catalog = catalog(10);
        assert!(spatial_sample(&catalog, 9.0, 800, 42).is_empty());
        assert!(spatial_sample(&EarthquakeCatalog::default(), 4.0, 800, 42).is_empty());
    }
}
