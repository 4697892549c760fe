//! Earthquake Data Model
//! Typed records, magnitude categories and the cleaned catalog.

use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// MagnitudeCategory
// ---------------------------------------------------------------------------

/// Magnitude class of an earthquake.
///
/// Ordered from weakest to strongest so categories can key a `BTreeMap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MagnitudeCategory {
    Minor,
    Moderate,
    Strong,
    Major,
}

impl MagnitudeCategory {
    pub const ALL: [MagnitudeCategory; 4] = [
        MagnitudeCategory::Minor,
        MagnitudeCategory::Moderate,
        MagnitudeCategory::Strong,
        MagnitudeCategory::Major,
    ];

    /// Classify a Richter magnitude.
    ///
    /// Intervals are half-open on the right: `[5.0, 6.0)` is Moderate,
    /// `[6.0, 7.0)` Strong, and everything from 7.0 upwards Major.
    pub fn from_magnitude(magnitude: f64) -> Self {
        if magnitude < 5.0 {
            MagnitudeCategory::Minor
        } else if magnitude < 6.0 {
            MagnitudeCategory::Moderate
        } else if magnitude < 7.0 {
            MagnitudeCategory::Strong
        } else {
            MagnitudeCategory::Major
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MagnitudeCategory::Minor => "Minor",
            MagnitudeCategory::Moderate => "Moderate",
            MagnitudeCategory::Strong => "Strong",
            MagnitudeCategory::Major => "Major",
        }
    }
}

impl fmt::Display for MagnitudeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// EarthquakeRecord – one cleaned row
// ---------------------------------------------------------------------------

/// A single earthquake observation that survived cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EarthquakeRecord {
    pub latitude: f64,
    pub longitude: f64,
    /// Richter magnitude.
    pub magnitude: f64,
    /// Focal depth in km, when reported.
    pub focal_depth: Option<f64>,
}

impl EarthquakeRecord {
    pub fn category(&self) -> MagnitudeCategory {
        MagnitudeCategory::from_magnitude(self.magnitude)
    }
}

// ---------------------------------------------------------------------------
// EarthquakeCatalog – the cleaned record set
// ---------------------------------------------------------------------------

/// The cleaned record set. Built once per run and only ever read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EarthquakeCatalog {
    records: Vec<EarthquakeRecord>,
}

impl EarthquakeCatalog {
    /// Build a catalog from records that already carry every required field.
    pub fn from_records(records: Vec<EarthquakeRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[EarthquakeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records at or above `floor`, in catalog order.
    pub fn at_or_above(&self, floor: f64) -> impl Iterator<Item = &EarthquakeRecord> + '_ {
        self.records.iter().filter(move |r| r.magnitude >= floor)
    }

    /// Depths of the records that report one.
    pub fn depths(&self) -> Vec<f64> {
        self.records.iter().filter_map(|r| r.focal_depth).collect()
    }

    pub fn magnitudes(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.magnitude).collect()
    }
}
