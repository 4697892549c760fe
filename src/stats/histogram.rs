//! Histogram Module
//! Fixed-width histograms feeding the distribution charts.

use super::calculator::round_to;
use serde::Serialize;

/// One bin covering `[lower, upper)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Bin `values` into consecutive bins of `bin_width`.
///
/// Bins start at the multiple of `bin_width` at or below the smallest value and
/// run until the bin holding the largest value, empty bins included. Non-finite
/// values are ignored. Returns no bins for empty input, a non-positive width, or
/// a value range that would need more than `max_bins` bins.
pub fn histogram(values: &[f64], bin_width: f64, max_bins: usize) -> Vec<HistogramBin> {
    if !(bin_width.is_finite() && bin_width > 0.0) {
        return Vec::new();
    }

    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let Some(min) = finite.iter().copied().reduce(f64::min) else {
        return Vec::new();
    };
    let max = finite.iter().copied().fold(min, f64::max);

    let start = (min / bin_width).floor() * bin_width;
    let span = ((max - start) / bin_width).floor();
    // span is a whole number here, so `span < max_bins` means at most max_bins bins
    if !(span.is_finite() && span >= 0.0 && span < max_bins as f64) {
        log::warn!(
            "Histogram over [{min}, {max}] needs more than {max_bins} bins of width {bin_width}; skipping"
        );
        return Vec::new();
    }
    let n_bins = span as usize + 1;

    let mut counts = vec![0usize; n_bins];
    for v in finite {
        let idx = (((v - start) / bin_width).floor() as usize).min(n_bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: round_to(start + i as f64 * bin_width, 6),
            upper: round_to(start + (i + 1) as f64 * bin_width, 6),
            count,
        })
        .collect()
}
