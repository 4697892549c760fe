//! Load-and-clean entry point used by the binary and integration tests.

use crate::data::{EarthquakeCatalog, EarthquakeLoader, LoaderError, ProcessorError, RecordCleaner};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Schema(#[from] LoaderError),
    #[error(transparent)]
    Processing(#[from] ProcessorError),
}

/// Read the CSV at `path` and clean it into a catalog.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<EarthquakeCatalog, PipelineError> {
    let mut loader = EarthquakeLoader::new();
    loader.load_csv(path)?;

    let extra = loader.get_extra_columns();
    if !extra.is_empty() {
        log::debug!("Ignoring columns: {}", extra.join(", "));
    }

    let raw = loader.get_dataframe().ok_or(LoaderError::NoData)?;
    Ok(RecordCleaner::build_catalog(raw)?)
}
