//! Earthquake CSV Loader Module
//! Reads the catalog file with Polars and checks the required columns.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";
/// Magnitude column, named after the Richter scale in the source data.
pub const MAGNITUDE: &str = "richter";
pub const FOCAL_DEPTH: &str = "focal_depth";

/// Columns every input file must carry. Anything else is ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [LATITUDE, LONGITUDE, MAGNITUDE, FOCAL_DEPTH];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read CSV {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("No data loaded")]
    NoData,
}

/// Loads the earthquake table and keeps it for later queries.
pub struct EarthquakeLoader {
    df: Option<DataFrame>,
    file_path: Option<PathBuf>,
}

impl Default for EarthquakeLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl EarthquakeLoader {
    pub fn new() -> Self {
        Self {
            df: None,
            file_path: None,
        }
    }

    /// Load a CSV file and validate its schema.
    ///
    /// Column types are inferred from every row, so a decimal value after a
    /// long run of whole numbers still widens the column to float. Cells that
    /// fail to parse are read as null; the cleaner drops the affected rows later.
    pub fn load_csv(&mut self, file_path: impl AsRef<Path>) -> Result<&DataFrame, LoaderError> {
        let path = file_path.as_ref().to_path_buf();

        let df = LazyCsvReader::new(&path)
            .with_infer_schema_length(None)
            .with_ignore_errors(true)
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(|source| LoaderError::Unreadable {
                path: path.clone(),
                source,
            })?;

        log::info!(
            "Loaded {} rows x {} columns from {}",
            df.height(),
            df.width(),
            path.display()
        );

        self.file_path = Some(path);
        self.set_dataframe(df)
    }

    /// Install an already-built frame, applying the same schema check as `load_csv`.
    pub fn set_dataframe(&mut self, df: DataFrame) -> Result<&DataFrame, LoaderError> {
        Self::validate_schema(&df)?;
        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Fail with every required column the frame lacks.
    pub fn validate_schema(df: &DataFrame) -> Result<(), LoaderError> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| df.column(name).is_err())
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(LoaderError::MissingColumns(missing))
        }
    }

    /// Columns present in the file beyond the required ones.
    pub fn get_extra_columns(&self) -> Vec<String> {
        self.df
            .as_ref()
            .map(|df| {
                df.get_column_names()
                    .iter()
                    .map(|s| s.to_string())
                    .filter(|name| !REQUIRED_COLUMNS.contains(&name.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    pub fn get_dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }

    pub fn get_file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }
}
