//! Stats module - descriptive statistics and distributions

mod calculator;
mod histogram;

pub use calculator::{round_to, CategoryAggregate, StatsCalculator, StatsError, SummaryStats};
pub use histogram::{histogram, HistogramBin};
