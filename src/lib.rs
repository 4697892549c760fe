//! Quake Dashboard - Earthquake CSV processing for a static dashboard
//!
//! Cleans an earthquake catalog and derives the read-only views a
//! dashboard renders: summary figures, a map sample, a ranked table,
//! per-category aggregates and distribution histograms.

pub mod config;
pub mod data;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod views;

pub use config::ReportConfig;
pub use data::{EarthquakeCatalog, EarthquakeRecord, MagnitudeCategory};
pub use pipeline::{load_catalog, PipelineError};
pub use report::{format_total_count, DashboardReport};
