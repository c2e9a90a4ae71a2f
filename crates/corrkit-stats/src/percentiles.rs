//! Interpolated percentiles, quartiles and outlier fences.
//!
//! NaN entries are dropped before any percentile is taken. The value at
//! percentile `p` of `n` sorted values sits at the 0-based fractional index
//!
//! ```text
//! index = (n + 1) * (p / 100) - 1
//! ```
//!
//! and is linearly interpolated between the two neighbouring elements when
//! the index is not integral. Indices that fall outside the data (small `n`
//! with `p` near 0 or 100) are clamped to the first or last element.
//!
//! The "regular" range is the Tukey fence `[Q1 - 1.5 IQR, Q3 + 1.5 IQR]`;
//! values outside it are conventionally treated as outliers.

/// Multiplier applied to the interquartile range to obtain the fences.
pub const TUKEY_FENCE: f64 = 1.5;

/// Precomputed percentile values for a dataset.
///
/// This structure stores percentile-value pairs for efficient lookup
/// of commonly used percentile points.
///
/// # Examples
///
/// ```
/// use corrkit_stats::percentiles::Percentiles;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]);
///
/// assert_eq!(percentiles.get(50.0), Some(5.5));
/// assert_eq!(percentiles.get(25.0), Some(2.75));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Percentiles {
    /// Percentile-value pairs in the order they were requested.
    /// Each tuple contains (percentile, value) where percentile is 0.0-100.0.
    values: Vec<(f64, f64)>,
}

impl Percentiles {
    /// Computes percentiles from sorted, NaN-free values.
    ///
    /// Points outside `[0, 100]` are kept with a NaN value.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order or contains NaN.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], percentile_points: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order and NaN-free"
        );

        let values = percentile_points
            .iter()
            .map(|&p| {
                let value = if check_percentile(p) {
                    percentile_sorted(sorted_values, p)
                } else {
                    f64::NAN
                };
                (p, value)
            })
            .collect();
        Self { values }
    }

    /// Computes percentiles from unsorted values, skipping NaN entries.
    #[must_use]
    pub fn new(values: &[f64], percentile_points: &[f64]) -> Self {
        Self::from_sorted(&sorted_valid(values), percentile_points)
    }

    /// Gets the value at a specific percentile.
    ///
    /// Returns `None` if the percentile was not precomputed.
    ///
    /// # Examples
    ///
    /// ```
    /// use corrkit_stats::percentiles::Percentiles;
    ///
    /// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    /// let percentiles = Percentiles::new(&values, &[50.0, 95.0]);
    ///
    /// assert_eq!(percentiles.get(50.0), Some(3.0));
    /// assert_eq!(percentiles.get(95.0), Some(5.0));
    /// assert_eq!(percentiles.get(25.0), None); // Not precomputed
    /// ```
    #[must_use]
    pub fn get(&self, percentile: f64) -> Option<f64> {
        self.values.iter().find_map(|(p, value)| {
            if (*p - percentile).abs() < f64::EPSILON {
                Some(*value)
            } else {
                None
            }
        })
    }

    /// Returns an iterator over all (percentile, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied()
    }

    /// Returns all percentile-value pairs as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[(f64, f64)] {
        &self.values
    }
}

/// Returns the valid (non-NaN) values sorted ascending.
#[must_use]
pub fn sorted_valid(values: &[f64]) -> Vec<f64> {
    let mut sorted = values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .collect::<Vec<_>>();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Computes the value at `percentile` (0.0 to 100.0) of `values`.
///
/// NaN entries are skipped. Returns NaN if no valid value remains, or if
/// `percentile` is outside `[0, 100]`; the latter is also reported as a
/// warning through the `log` facade.
///
/// # Examples
///
/// ```
/// use corrkit_stats::percentiles::percentile;
///
/// let values = [54.0, 93.0, 87.0, 3.5, 10.0, 12.0];
/// assert_eq!(percentile(&values, 25.0), 8.375);
/// assert!(percentile(&values, 101.0).is_nan());
/// assert!(percentile(&[f64::NAN], 50.0).is_nan());
/// ```
#[must_use]
pub fn percentile(values: &[f64], percentile: f64) -> f64 {
    if !check_percentile(percentile) {
        return f64::NAN;
    }
    percentile_sorted(&sorted_valid(values), percentile)
}

/// Interpolates the value at `percentile` over sorted, NaN-free values.
///
/// The percentile is not range-checked; out-of-range indices are clamped.
/// Returns NaN for empty input.
///
/// # Examples
///
/// ```
/// use corrkit_stats::percentiles::percentile_sorted;
///
/// let sorted = [3.5, 10.0, 12.0, 54.0, 87.0, 93.0];
/// assert_eq!(percentile_sorted(&sorted, 75.0), 88.5);
/// assert_eq!(percentile_sorted(&sorted, 0.0), 3.5);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn percentile_sorted(sorted_values: &[f64], percentile: f64) -> f64 {
    let Some(last) = sorted_values.len().checked_sub(1) else {
        return f64::NAN;
    };
    let index = (sorted_values.len() + 1) as f64 * (percentile / 100.0) - 1.0;
    if index.is_nan() {
        return f64::NAN;
    }
    let index = index.clamp(0.0, last as f64);
    let floor = index.floor();
    let ceil = index.ceil();
    let (lo, hi) = (floor as usize, ceil as usize);
    if lo == hi {
        return sorted_values[lo];
    }
    (ceil - index) * sorted_values[lo] + (index - floor) * sorted_values[hi]
}

/// Interpolated median (50th percentile), skipping NaN entries.
///
/// # Examples
///
/// ```
/// use corrkit_stats::percentiles::median;
///
/// assert_eq!(median(&[3.5, 10.0, 93.0, 12.0, 54.0]), 12.0);
/// assert_eq!(median(&[54.0, 93.0, 87.2, 3.5, 10.0, 12.0]), 33.0);
/// ```
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    percentile(values, 50.0)
}

/// The 25th percentile.
#[must_use]
pub fn first_quartile(values: &[f64]) -> f64 {
    percentile(values, 25.0)
}

/// The 75th percentile.
#[must_use]
pub fn third_quartile(values: &[f64]) -> f64 {
    percentile(values, 75.0)
}

/// Returns `(Q1, Q3)`, sorting the data only once.
///
/// # Examples
///
/// ```
/// use corrkit_stats::percentiles::quartile_range;
///
/// let values = [54.0, 93.0, 87.0, 3.5, 10.0, 12.0];
/// assert_eq!(quartile_range(&values), (8.375, 88.5));
/// ```
#[must_use]
pub fn quartile_range(values: &[f64]) -> (f64, f64) {
    let sorted = sorted_valid(values);
    (
        percentile_sorted(&sorted, 25.0),
        percentile_sorted(&sorted, 75.0),
    )
}

/// Returns the Tukey fences `(Q1 - 1.5 IQR, Q3 + 1.5 IQR)`.
///
/// # Examples
///
/// ```
/// use corrkit_stats::percentiles::regular_range;
///
/// let values = [54.0, 93.0, 87.0, 3.5, 10.0, 12.0];
/// assert_eq!(regular_range(&values), (-111.8125, 208.6875));
/// ```
#[must_use]
pub fn regular_range(values: &[f64]) -> (f64, f64) {
    fences(quartile_range(values))
}

/// Smallest value that would not be considered an outlier.
#[must_use]
pub fn min_regular(values: &[f64]) -> f64 {
    regular_range(values).0
}

/// Largest value that would not be considered an outlier.
#[must_use]
pub fn max_regular(values: &[f64]) -> f64 {
    regular_range(values).1
}

/// Turns a quartile pair into the Tukey fences.
#[must_use]
pub fn fences((q1, q3): (f64, f64)) -> (f64, f64) {
    let iqr = q3 - q1;
    (q1 - TUKEY_FENCE * iqr, q3 + TUKEY_FENCE * iqr)
}

fn check_percentile(percentile: f64) -> bool {
    let valid = (0.0..=100.0).contains(&percentile);
    if !valid {
        log::warn!("invalid percentile value specified: {percentile}");
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [f64; 6] = [54.0, 93.0, 87.0, 3.5, 10.0, 12.0];

    #[test]
    fn test_quartiles() {
        assert_eq!(first_quartile(&SAMPLE), 8.375);
        assert_eq!(third_quartile(&SAMPLE), 88.5);
        assert_eq!(quartile_range(&SAMPLE), (8.375, 88.5));
    }

    #[test]
    fn test_regular_range() {
        assert_eq!(regular_range(&SAMPLE), (-111.8125, 208.6875));
        assert_eq!(min_regular(&SAMPLE), -111.8125);
        assert_eq!(max_regular(&SAMPLE), 208.6875);
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[3.5, 10.0, 93.0, 12.0, 54.0]), 12.0);
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(&[54.0, 93.0, 87.2, 3.5, 10.0, 12.0]), 33.0);
    }

    #[test]
    fn test_nan_entries_are_skipped() {
        let values = [f64::NAN, 54.0, 93.0, f64::NAN, 87.0, 3.5, 10.0, 12.0];
        assert_eq!(quartile_range(&values), (8.375, 88.5));
        assert_eq!(median(&values), 33.0);
    }

    #[test]
    fn test_invalid_percentile() {
        assert!(percentile(&SAMPLE, -0.5).is_nan());
        assert!(percentile(&SAMPLE, 100.5).is_nan());
        assert!(percentile(&SAMPLE, f64::NAN).is_nan());
    }

    #[test]
    fn test_extreme_percentiles_are_clamped() {
        assert_eq!(percentile(&SAMPLE, 0.0), 3.5);
        assert_eq!(percentile(&SAMPLE, 100.0), 93.0);
        assert_eq!(percentile(&[1.0, 2.0], 10.0), 1.0);
        assert_eq!(percentile(&[1.0, 2.0], 90.0), 2.0);
    }

    #[test]
    fn test_empty() {
        assert!(percentile(&[], 50.0).is_nan());
        assert!(median(&[f64::NAN, f64::NAN]).is_nan());
        let (q1, q3) = regular_range(&[]);
        assert!(q1.is_nan());
        assert!(q3.is_nan());
    }

    #[test]
    fn test_single() {
        assert_eq!(first_quartile(&[42.0]), 42.0);
        assert_eq!(median(&[42.0]), 42.0);
        assert_eq!(regular_range(&[42.0]), (42.0, 42.0));
    }

    #[test]
    fn test_interpolation_weights() {
        // index = 5 * 0.3 - 1 = 0.5, halfway between 10 and 20
        assert!((percentile(&[40.0, 10.0, 30.0, 20.0], 30.0) - 15.0).abs() < 1e-12);
        // index = 5 * 0.35 - 1 = 0.75, nearer the upper neighbour
        assert!((percentile(&[40.0, 10.0, 30.0, 20.0], 35.0) - 17.5).abs() < 1e-12);
    }

    #[test]
    fn test_percentiles_table() {
        let percentiles = Percentiles::new(&SAMPLE, &[25.0, 50.0, 75.0, 150.0]);
        assert_eq!(percentiles.get(25.0), Some(8.375));
        assert_eq!(percentiles.get(50.0), Some(33.0));
        assert_eq!(percentiles.get(75.0), Some(88.5));
        assert!(percentiles.get(150.0).unwrap().is_nan());
        assert_eq!(percentiles.get(90.0), None);
        assert_eq!(percentiles.iter().count(), 4);
        assert_eq!(percentiles.as_slice()[0], (25.0, 8.375));
    }

    #[test]
    #[should_panic(expected = "values must be sorted")]
    fn test_percentiles_from_unsorted_panics() {
        let _ = Percentiles::from_sorted(&[2.0, 1.0], &[50.0]);
    }
}
