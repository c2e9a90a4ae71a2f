use crate::{
    descriptive::DescriptiveStats,
    percentiles::{self, Percentiles},
};

/// One-call overview of a sample.
///
/// Combines:
/// - Basic descriptive statistics (count, sum, mean, min, max, median, standard deviation)
/// - The quartiles and the regular (non-outlier) range derived from them
/// - Percentile values for any additional quantile points
///
/// The data is filtered and sorted once and shared by every measure.
///
/// # Examples
///
/// ```
/// use corrkit_stats::summary::Summary;
///
/// let values = [54.0, 93.0, 87.0, 3.5, 10.0, 12.0];
/// let summary = Summary::new(&values, &[10.0, 90.0]).unwrap();
///
/// assert_eq!(summary.stats.mean, 43.25);
/// assert_eq!(summary.quartiles, (8.375, 88.5));
/// assert_eq!(summary.regular_range, (-111.8125, 208.6875));
/// assert_eq!(summary.percentiles.get(90.0), Some(93.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Basic descriptive statistics for the dataset.
    pub stats: DescriptiveStats,
    /// First and third quartiles.
    pub quartiles: (f64, f64),
    /// Tukey fences computed from the quartiles.
    pub regular_range: (f64, f64),
    /// Precomputed percentile values for quick lookup.
    pub percentiles: Percentiles,
}

impl Summary {
    /// Summarizes unsorted values, skipping NaN entries.
    ///
    /// Returns `None` if no valid value remains.
    #[must_use]
    pub fn new(values: &[f64], percentile_points: &[f64]) -> Option<Self> {
        let sorted = percentiles::sorted_valid(values);
        Self::from_sorted(&sorted, values.len() - sorted.len(), percentile_points)
    }

    /// Summarizes pre-sorted, NaN-free values.
    ///
    /// `missing` is the number of NaN entries dropped by the caller.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order or contains NaN.
    #[must_use]
    pub fn from_sorted(
        sorted_values: &[f64],
        missing: usize,
        percentile_points: &[f64],
    ) -> Option<Self> {
        let stats = DescriptiveStats::from_sorted(sorted_values, missing)?;
        let quartiles = (
            percentiles::percentile_sorted(sorted_values, 25.0),
            percentiles::percentile_sorted(sorted_values, 75.0),
        );
        let regular_range = percentiles::fences(quartiles);
        let percentiles = Percentiles::from_sorted(sorted_values, percentile_points);

        Some(Self {
            stats,
            quartiles,
            regular_range,
            percentiles,
        })
    }

    /// Interquartile range `Q3 - Q1`.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.quartiles.1 - self.quartiles.0
    }
}
