//! Descriptive statistics and correlation coefficients over `f64` samples.
//!
//! This crate provides:
//!
//! - **Lockstep sorting**: sort one slice while permuting companion slices with it
//! - **Rank assignment**: 0-based ranks with midpoint ranks for ties
//! - **Correlation**: Pearson, Spearman and tie-corrected Kendall tau
//! - **Percentiles**: interpolated percentiles, quartiles and Tukey fences
//! - **Descriptive statistics**: mean, sum, min, max and standard deviation
//!
//! NaN marks a missing or invalid observation throughout. Summary functions
//! skip it, sorting places it last, and functions whose result is undefined
//! for their input return NaN instead of failing.
//!
//! # Modules
//!
//! - [`co_sort`]: Tandem and triplet sorting
//! - [`rank`]: Tie-aware rank assignment
//! - [`correlation`]: Correlation coefficients built on ranks
//! - [`percentiles`]: Percentile computation and outlier fences
//! - [`descriptive`]: Single-pass summary helpers
//! - [`summary`]: Combined overview of a sample
//!
//! # Examples
//!
//! ## Correlating two samples
//!
//! ```
//! use corrkit_stats::correlation::{kendall, spearman};
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [5.0, 4.0, 3.0, 2.0, 1.0];
//! assert_eq!(spearman(&x, &y), -1.0);
//! assert_eq!(kendall(&x, &y), -1.0);
//! ```
//!
//! ## Computing outlier fences
//!
//! ```
//! use corrkit_stats::percentiles::{first_quartile, regular_range, third_quartile};
//!
//! let values = [54.0, 93.0, 87.0, 3.5, 10.0, 12.0];
//! assert_eq!(first_quartile(&values), 8.375);
//! assert_eq!(third_quartile(&values), 88.5);
//! assert_eq!(regular_range(&values), (-111.8125, 208.6875));
//! ```

pub mod co_sort;
pub mod correlation;
pub mod descriptive;
pub mod percentiles;
pub mod rank;
pub mod summary;
