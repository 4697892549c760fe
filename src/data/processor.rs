//! Record Cleaner Module
//! Drops rows without a location or magnitude and builds the typed catalog.

use super::loader::{FOCAL_DEPTH, LATITUDE, LONGITUDE, MAGNITUDE};
use super::model::{EarthquakeCatalog, EarthquakeRecord};
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Cleans raw frames into the record set every view reads from.
pub struct RecordCleaner;

impl RecordCleaner {
    /// Keep only rows with numeric latitude, longitude and magnitude.
    ///
    /// The measurement columns are cast to `Float64` (values that do not parse
    /// become null). Other columns pass through untouched and row order is kept,
    /// so cleaning an already cleaned frame is a no-op.
    pub fn clean(df: &DataFrame) -> Result<DataFrame, ProcessorError> {
        let cleaned = df
            .clone()
            .lazy()
            .with_columns([
                col(LATITUDE).cast(DataType::Float64),
                col(LONGITUDE).cast(DataType::Float64),
                col(MAGNITUDE).cast(DataType::Float64),
                col(FOCAL_DEPTH).cast(DataType::Float64),
            ])
            .filter(Self::required_fields_present())
            .collect()?;

        Ok(cleaned)
    }

    fn required_fields_present() -> Expr {
        let present = |name: &str| col(name).is_not_null().and(col(name).is_not_nan());
        present(LATITUDE)
            .and(present(LONGITUDE))
            .and(present(MAGNITUDE))
    }

    /// Materialize a cleaned frame into typed records.
    ///
    /// Rows still missing a required field are skipped; a NaN depth reads as absent.
    pub fn to_catalog(cleaned: &DataFrame) -> Result<EarthquakeCatalog, ProcessorError> {
        let latitudes = cleaned.column(LATITUDE)?.f64()?;
        let longitudes = cleaned.column(LONGITUDE)?.f64()?;
        let magnitudes = cleaned.column(MAGNITUDE)?.f64()?;
        let depths = cleaned.column(FOCAL_DEPTH)?.f64()?;

        let records: Vec<EarthquakeRecord> = latitudes
            .into_iter()
            .zip(longitudes)
            .zip(magnitudes)
            .zip(depths)
            .filter_map(|(((latitude, longitude), magnitude), depth)| {
                Some(EarthquakeRecord {
                    latitude: latitude?,
                    longitude: longitude?,
                    magnitude: magnitude?,
                    focal_depth: depth.filter(|d| !d.is_nan()),
                })
            })
            .collect();

        Ok(EarthquakeCatalog::from_records(records))
    }

    /// Clean a raw frame and build the catalog in one step.
    pub fn build_catalog(raw: &DataFrame) -> Result<EarthquakeCatalog, ProcessorError> {
        let cleaned = Self::clean(raw)?;
        let dropped = raw.height() - cleaned.height();
        if dropped > 0 {
            log::info!(
                "Dropped {dropped} of {} rows missing latitude, longitude or magnitude",
                raw.height()
            );
        }

        let catalog = Self::to_catalog(&cleaned)?;
        log::debug!("Catalog holds {} records", catalog.len());
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_frame() -> DataFrame {
        df!(
            "latitude" => [Some(35.0f64), Some(36.1), None, Some(38.0), Some(40.2)],
            "longitude" => [Some(139.0f64), Some(140.2), Some(141.0), Some(142.5), Some(143.0)],
            "richter" => [Some(4.2f64), Some(5.5), Some(6.1), None, Some(f64::NAN)],
            "focal_depth" => [Some(10.0f64), None, Some(30.0), Some(40.0), Some(50.0)],
            "place" => ["a", "b", "c", "d", "e"]
        )
        .unwrap()
    }

    #[test]
    fn drops_rows_missing_required_fields() {
        let cleaned = RecordCleaner::clean(&raw_frame()).unwrap();
        assert_eq!(cleaned.height(), 2);

        let places: Vec<&str> = cleaned
            .column("place")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(places, vec!["a", "b"]);
    }

    #[test]
    fn missing_depth_does_not_drop_row() {
        let catalog = RecordCleaner::build_catalog(&raw_frame()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].focal_depth, Some(10.0));
        assert_eq!(catalog.records()[1].focal_depth, None);
    }

    #[test]
    fn cleaning_is_idempotent() {
        let once = RecordCleaner::clean(&raw_frame()).unwrap();
        let twice = RecordCleaner::clean(&once).unwrap();
        assert!(once.equals_missing(&twice));
    }

    #[test]
    fn non_numeric_text_counts_as_missing() {
        let df = df!(
            "latitude" => ["10.5", "north", "12.0"],
            "longitude" => ["20.0", "21.0", "22.0"],
            "richter" => ["5.1", "5.2", "strong"],
            "focal_depth" => ["", "7.0", "8.0"]
        )
        .unwrap();

        let catalog = RecordCleaner::build_catalog(&df).unwrap();
        assert_eq!(catalog.len(), 1);
        let record = catalog.records()[0];
        assert_eq!(record.latitude, 10.5);
        assert_eq!(record.magnitude, 5.1);
        assert_eq!(record.focal_depth, None);
    }
}
