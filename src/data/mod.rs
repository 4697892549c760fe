//! Data module - CSV loading, cleaning and the typed record model

mod loader;
mod model;
mod processor;

pub use loader::{
    EarthquakeLoader, LoaderError, FOCAL_DEPTH, LATITUDE, LONGITUDE, MAGNITUDE, REQUIRED_COLUMNS,
};
pub use model::{EarthquakeCatalog, EarthquakeRecord, MagnitudeCategory};
pub use processor::{ProcessorError, RecordCleaner};
