//! Numeric kernels shared by the profiling and insight passes.
//!
//! All functions take plain slices of present (non-missing) values; callers
//! are responsible for dropping missing cells first.

use std::cmp::Ordering;

/// Sums of powers below this magnitude are treated as floating-point noise.
const FP_NOISE: f64 = 1e-14;

// =============================================================================
// RUNNING MOMENTS
// =============================================================================

/// Running mean and variance using Welford's online algorithm.
#[derive(Debug, Clone)]
pub(crate) struct Moments {
    count: usize,
    mean: f64,
    m2: f64, // Sum of squared differences from mean
    min: f64,
    max: f64,
}

impl Moments {
    pub(crate) fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    pub(crate) fn from_values(values: &[f64]) -> Self {
        let mut moments = Self::new();
        for &value in values {
            moments.add(value);
        }
        moments
    }

    pub(crate) fn add(&mut self, value: f64) {
        self.count += 1;

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    pub(crate) fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    pub(crate) fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }

    /// Population standard deviation (ddof = 0).
    pub(crate) fn population_std(&self) -> Option<f64> {
        (self.count > 0).then(|| (self.m2 / self.count as f64).sqrt())
    }

    /// Sample standard deviation (ddof = 1).
    pub(crate) fn sample_std(&self) -> Option<f64> {
        (self.count > 1).then(|| (self.m2 / (self.count - 1) as f64).sqrt())
    }
}

// =============================================================================
// ORDER STATISTICS
// =============================================================================

/// Sort values ascending.
pub(crate) fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

/// Quantile `p` in `[0, 1]` of sorted values, interpolating linearly between
/// the two closest ranks.
pub(crate) fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let position = p.clamp(0.0, 1.0) * last as f64;
    let lo = position.floor() as usize;
    let hi = position.ceil() as usize;
    let (low, high) = (sorted[lo], sorted[hi.min(last)]);
    Some(low + (high - low) * (position - lo as f64))
}

// =============================================================================
// SHAPE AND ASSOCIATION
// =============================================================================

/// Adjusted Fisher-Pearson sample skewness (G1).
///
/// Undefined for fewer than three values. A constant sample has skewness 0.
pub(crate) fn skewness(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 3 {
        return None;
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let (mut m2, mut m3) = (0.0, 0.0);
    for &value in values {
        let d = value - mean;
        m2 += d * d;
        m3 += d * d * d;
    }
    if m2.abs() < FP_NOISE {
        m2 = 0.0;
    }
    if m3.abs() < FP_NOISE {
        m3 = 0.0;
    }
    if m2 == 0.0 {
        return Some(0.0);
    }

    let n = n as f64;
    let result = (n * (n - 1.0).sqrt() / (n - 2.0)) * (m3 / m2.powf(1.5));
    result.is_finite().then_some(result)
}

/// Pearson correlation over pairwise-complete observations.
///
/// Rows where either side is missing are skipped. Undefined when fewer than
/// two complete pairs remain or either side is constant.
pub(crate) fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| match (a, b) {
            (Some(a), Some(b)) if !a.is_nan() && !b.is_nan() => Some((*a, *b)),
            _ => None,
        })
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for &(a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    let divisor = (sxx * syy).sqrt();
    if divisor == 0.0 || !divisor.is_finite() {
        return None;
    }
    Some((sxy / divisor).clamp(-1.0, 1.0))
}

// =============================================================================
// PERCENTAGES AND ROUNDING
// =============================================================================

/// `part / whole * 100`, or 0 when `whole` is 0.
pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Round to two decimal places for display.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Descending comparison for floats; NaN sorts last.
pub(crate) fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}
