//! Single-pass summary helpers.
//!
//! Every function here skips NaN entries, treating them as missing
//! observations. When no valid observation remains the result is NaN
//! (except [`sum`], which is `0.0` for an empty set).

use crate::percentiles;

/// Arithmetic mean of the valid values.
///
/// # Examples
///
/// ```
/// use corrkit_stats::descriptive::mean;
///
/// assert_eq!(mean(&[54.0, 93.0, 87.0, 3.5, 10.0, 12.0]), 43.25);
/// assert_eq!(mean(&[1.0, f64::NAN, 3.0]), 2.0);
/// assert!(mean(&[]).is_nan());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    let (sum, count) = valid(values).fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    sum / count as f64
}

/// Sum of the valid values.
///
/// # Examples
///
/// ```
/// use corrkit_stats::descriptive::sum;
///
/// assert_eq!(sum(&[54.0, 93.0, 87.0, 3.5, 10.0, 12.0]), 259.5);
/// assert_eq!(sum(&[]), 0.0);
/// ```
#[must_use]
pub fn sum(values: &[f64]) -> f64 {
    valid(values).sum()
}

/// Smallest valid value.
///
/// # Examples
///
/// ```
/// use corrkit_stats::descriptive::min;
///
/// assert_eq!(min(&[54.0, 93.0, f64::NAN, 3.5]), 3.5);
/// assert!(min(&[f64::NAN]).is_nan());
/// ```
#[must_use]
pub fn min(values: &[f64]) -> f64 {
    valid(values).reduce(f64::min).unwrap_or(f64::NAN)
}

/// Largest valid value.
///
/// # Examples
///
/// ```
/// use corrkit_stats::descriptive::max;
///
/// assert_eq!(max(&[54.0, 93.0, f64::NAN, 3.5]), 93.0);
/// assert!(max(&[]).is_nan());
/// ```
#[must_use]
pub fn max(values: &[f64]) -> f64 {
    valid(values).reduce(f64::max).unwrap_or(f64::NAN)
}

/// Sample standard deviation (denominator `n - 1`) of the valid values.
///
/// Uses the sum-of-squares identity `sqrt((Σx² − (Σx)²/n) / (n − 1))`,
/// the same form the Pearson coefficient uses. Fewer than two valid
/// values yield NaN.
///
/// # Examples
///
/// ```
/// use corrkit_stats::descriptive::standard_deviation;
///
/// assert_eq!(standard_deviation(&[1.0, 2.0, 3.0]), 1.0);
/// assert!(standard_deviation(&[1.0]).is_nan());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn standard_deviation(values: &[f64]) -> f64 {
    let (sum, sum_sq, count) = valid(values).fold((0.0, 0.0, 0_usize), |(s, sq, c), v| {
        (s + v, sq + v * v, c + 1)
    });
    if count < 2 {
        return f64::NAN;
    }
    let n = count as f64;
    // Cancellation can leave a tiny negative residue for constant input.
    let centered = (sum_sq - sum * sum / n).max(0.0);
    (centered / (n - 1.0)).sqrt()
}

fn valid(values: &[f64]) -> impl Iterator<Item = f64> + '_ {
    values.iter().copied().filter(|v| !v.is_nan())
}

/// Descriptive statistics summarizing a dataset.
///
/// NaN entries are counted in [`missing`](Self::missing) and excluded from
/// every other field.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// Number of valid (non-NaN) values.
    pub count: usize,
    /// Number of NaN entries that were skipped.
    pub missing: usize,
    /// Sum of the valid values.
    pub sum: f64,
    /// The arithmetic mean of the dataset.
    pub mean: f64,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The interpolated median (50th percentile).
    pub median: f64,
    /// The sample standard deviation; NaN when `count < 2`.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one valid value
    /// * `None` - if the dataset is empty or entirely NaN
    ///
    /// # Examples
    ///
    /// ```
    /// # use corrkit_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new(&[5.0, 2.0, f64::NAN, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.count, 5);
    /// assert_eq!(stats.missing, 1);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        let sorted = percentiles::sorted_valid(values);
        Self::from_sorted(&sorted, values.len() - sorted.len())
    }

    /// Computes descriptive statistics from pre-sorted, NaN-free values.
    ///
    /// `missing` is recorded as-is; it does not affect any other field.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order or contains NaN.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], missing: usize) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order and NaN-free"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let sum = sorted_values.iter().sum::<f64>();
        let mean = sum / count as f64;
        let median = percentiles::percentile_sorted(sorted_values, 50.0);
        let std_dev = standard_deviation(sorted_values);

        Some(Self {
            count,
            missing,
            sum,
            mean,
            min,
            max,
            median,
            std_dev,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [f64; 6] = [54.0, 93.0, 87.0, 3.5, 10.0, 12.0];

    #[test]
    fn test_linear_pass_helpers() {
        assert_eq!(mean(&SAMPLE), 43.25);
        assert_eq!(sum(&SAMPLE), 259.5);
        assert_eq!(min(&SAMPLE), 3.5);
        assert_eq!(max(&SAMPLE), 93.0);
    }

    #[test]
    fn test_nan_is_skipped() {
        let values = [f64::NAN, 2.0, 4.0, f64::NAN];
        assert_eq!(mean(&values), 3.0);
        assert_eq!(sum(&values), 6.0);
        assert_eq!(min(&values), 2.0);
        assert_eq!(max(&values), 4.0);
        assert!((standard_deviation(&values) - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_all_missing() {
        let values = [f64::NAN, f64::NAN];
        assert!(mean(&values).is_nan());
        assert_eq!(sum(&values), 0.0);
        assert!(min(&values).is_nan());
        assert!(max(&values).is_nan());
        assert!(standard_deviation(&values).is_nan());
    }

    #[test]
    fn test_standard_deviation() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((standard_deviation(&values) - 2.138_089_935_299_395).abs() < 1e-12);
        assert_eq!(standard_deviation(&[3.0, 3.0, 3.0]), 0.0);
    }

    #[test]
    fn test_descriptive_stats() {
        let stats = DescriptiveStats::new(&SAMPLE).unwrap();
        assert_eq!(stats.count, 6);
        assert_eq!(stats.missing, 0);
        assert_eq!(stats.sum, 259.5);
        assert_eq!(stats.mean, 43.25);
        assert_eq!(stats.min, 3.5);
        assert_eq!(stats.max, 93.0);
        assert_eq!(stats.median, 33.0);
        assert!((stats.std_dev - standard_deviation(&SAMPLE)).abs() < 1e-12);
    }

    #[test]
    fn test_descriptive_stats_empty() {
        assert!(DescriptiveStats::new(&[]).is_none());
        assert!(DescriptiveStats::new(&[f64::NAN]).is_none());
    }

    #[test]
    fn test_descriptive_stats_single() {
        let stats = DescriptiveStats::new(&[7.0, f64::NAN]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.missing, 1);
        assert_eq!(stats.median, 7.0);
        assert!(stats.std_dev.is_nan());
    }
}
