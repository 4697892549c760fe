//! Report Configuration
//! Parameters of the derived views, with the dashboard's defaults.

use serde::{Deserialize, Serialize};

/// Magnitude floor for records plotted on the map.
pub const SAMPLE_MAGNITUDE_FLOOR: f64 = 4.0;
/// Maximum number of points plotted on the map.
pub const SAMPLE_SIZE: usize = 800;
/// Fixed seed so the map sample is identical across builds.
pub const SAMPLE_SEED: u64 = 42;
/// Magnitude from which an earthquake counts as strong.
pub const STRONG_MAGNITUDE: f64 = 6.0;
/// Magnitude floor for the ranked table.
pub const TOP_MAGNITUDE_FLOOR: f64 = STRONG_MAGNITUDE;
/// Number of rows in the ranked table.
pub const TOP_N: usize = 20;
/// Magnitude histogram bin width (Richter units).
pub const MAGNITUDE_BIN_WIDTH: f64 = 0.5;
/// Depth histogram bin width (km).
pub const DEPTH_BIN_WIDTH: f64 = 50.0;
/// Upper bound on bins per histogram; wider value ranges produce no histogram.
pub const MAX_HISTOGRAM_BINS: usize = 1000;

/// Parameters for every view in a [`crate::DashboardReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub sample_magnitude_floor: f64,
    pub sample_size: usize,
    pub sample_seed: u64,
    pub top_magnitude_floor: f64,
    pub top_n: usize,
    pub magnitude_bin_width: f64,
    pub depth_bin_width: f64,
    pub max_histogram_bins: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sample_magnitude_floor: SAMPLE_MAGNITUDE_FLOOR,
            sample_size: SAMPLE_SIZE,
            sample_seed: SAMPLE_SEED,
            top_magnitude_floor: TOP_MAGNITUDE_FLOOR,
            top_n: TOP_N,
            magnitude_bin_width: MAGNITUDE_BIN_WIDTH,
            depth_bin_width: DEPTH_BIN_WIDTH,
            max_histogram_bins: MAX_HISTOGRAM_BINS,
        }
    }
}
