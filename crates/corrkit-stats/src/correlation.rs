//! Pearson, Spearman and Kendall correlation coefficients.
//!
//! Every coefficient takes two samples of equal length with at least
//! [`MIN_SAMPLES`] entries. Inputs of any other shape produce NaN rather
//! than an error, and so does degenerate data such as a constant sample.
//! Callers that want the reason spelled out can go through
//! [`CorrelationMethod::try_compute`] instead.
//!
//! Spearman and Kendall both work on the ranks computed by
//! [`rank::ranks`](crate::rank::ranks), so ties are handled identically by
//! the two. A NaN entry ranks after every valid value; in Pearson it
//! propagates to a NaN result.
//!
//! # Examples
//!
//! ```
//! use corrkit_stats::correlation::{kendall, pearson, spearman};
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [1.0, 4.0, 9.0, 16.0, 25.0];
//!
//! assert!(pearson(&x, &y) > 0.95);
//! assert_eq!(spearman(&x, &y), 1.0);
//! assert_eq!(kendall(&x, &y), 1.0);
//! assert!(pearson(&x, &y[..4]).is_nan());
//! ```

use std::cmp::Ordering;

use crate::rank::ranks;

/// Smallest sample size for which a coefficient is computed.
pub const MIN_SAMPLES: usize = 3;

/// Correlation coefficient selector.
///
/// Parses from its name, case-insensitively, and displays in lowercase.
///
/// ```
/// use corrkit_stats::correlation::CorrelationMethod;
///
/// let method = "spearman".parse::<CorrelationMethod>().unwrap();
/// assert_eq!(method, CorrelationMethod::Spearman);
/// assert_eq!(method.to_string(), "spearman");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::FromStr,
)]
pub enum CorrelationMethod {
    #[display("pearson")]
    Pearson,
    #[display("spearman")]
    Spearman,
    #[display("kendall")]
    Kendall,
}

impl CorrelationMethod {
    pub const ALL: [Self; 3] = [Self::Pearson, Self::Spearman, Self::Kendall];

    /// Computes this coefficient, returning NaN when it is undefined.
    #[must_use]
    pub fn compute(self, x: &[f64], y: &[f64]) -> f64 {
        match self {
            Self::Pearson => pearson(x, y),
            Self::Spearman => spearman(x, y),
            Self::Kendall => kendall(x, y),
        }
    }

    /// Computes this coefficient, reporting why it is undefined.
    ///
    /// # Examples
    ///
    /// ```
    /// use corrkit_stats::correlation::{CorrelationError, CorrelationMethod};
    ///
    /// let method = CorrelationMethod::Pearson;
    /// assert_eq!(
    ///     method.try_compute(&[1.0, 2.0], &[1.0, 2.0]),
    ///     Err(CorrelationError::TooFewSamples { len: 2 }),
    /// );
    /// assert_eq!(
    ///     method.try_compute(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]),
    ///     Err(CorrelationError::Undefined { method }),
    /// );
    /// ```
    pub fn try_compute(self, x: &[f64], y: &[f64]) -> Result<f64, CorrelationError> {
        check_shape(x, y)?;
        let value = self.compute(x, y);
        if value.is_nan() {
            return Err(CorrelationError::Undefined { method: self });
        }
        Ok(value)
    }
}

/// Reason a correlation coefficient could not be computed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CorrelationError {
    #[display("sample lengths differ: x has {x_len} values, y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },
    #[display("at least 3 paired values are required, got {len}")]
    TooFewSamples { len: usize },
    #[display("{method} correlation is undefined for this data")]
    Undefined { method: CorrelationMethod },
}

fn check_shape(x: &[f64], y: &[f64]) -> Result<usize, CorrelationError> {
    if x.len() != y.len() {
        return Err(CorrelationError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.len() < MIN_SAMPLES {
        return Err(CorrelationError::TooFewSamples { len: x.len() });
    }
    Ok(x.len())
}

/// Pearson product-moment correlation coefficient.
///
/// ```text
///                 Σ (x_i - x̄)(y_i - ȳ)
/// r = -------------------------------------
///               (n - 1) · Sx · Sy
/// ```
///
/// where `Sx` and `Sy` are the sample standard deviations, each computed as
/// `sqrt((Σx² - (Σx)²/n) / (n - 1))`. Zero variance in either sample
/// yields NaN.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let Ok(n) = check_shape(x, y) else {
        return f64::NAN;
    };
    let n = n as f64;

    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let (mut sum_x, mut sum_y, mut sum_x_sq, mut sum_y_sq) = (0.0, 0.0, 0.0, 0.0);
    for (&xi, &yi) in x.iter().zip(y) {
        numerator += (xi - mean_x) * (yi - mean_y);
        sum_x += xi;
        sum_y += yi;
        sum_x_sq += xi * xi;
        sum_y_sq += yi * yi;
    }
    let sx = ((sum_x_sq - sum_x * sum_x / n) / (n - 1.0)).sqrt();
    let sy = ((sum_y_sq - sum_y * sum_y / n) / (n - 1.0)).sqrt();

    numerator / ((n - 1.0) * sx * sy)
}

/// Spearman rank correlation coefficient.
///
/// ```text
///            6 · Σ (Rx_i - Ry_i)²
/// ρ = 1 - ----------------------
///              n · (n² - 1)
/// ```
///
/// where `Rx` and `Ry` are the tie-averaged ranks of `x` and `y`.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn spearman(x: &[f64], y: &[f64]) -> f64 {
    let Ok(n) = check_shape(x, y) else {
        return f64::NAN;
    };
    let n = n as f64;

    let rx = ranks(x);
    let ry = ranks(y);
    let sum_sq = rx
        .iter()
        .zip(&ry)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>();

    1.0 - (6.0 * sum_sq) / (n * (n * n - 1.0))
}

/// Kendall tau rank correlation coefficient, corrected for ties.
///
/// Every pair `(i, j)` is classified by comparing the ranks of `x` and `y`.
/// A pair tied in `x` counts towards `Tx`, a pair tied in `y` towards `Ty`
/// (a pair tied in both counts towards both), and neither kind is
/// concordant or discordant.
///
/// ```text
///                      concordant - discordant
/// τ = ---------------------------------------------------------
///      sqrt((n(n-1)/2 - Tx) · (n(n-1)/2 - Ty))
/// ```
///
/// # Complexity
///
/// Time: O(n²), Space: O(n)
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn kendall(x: &[f64], y: &[f64]) -> f64 {
    let Ok(n) = check_shape(x, y) else {
        return f64::NAN;
    };

    let rx = ranks(x);
    let ry = ranks(y);

    let PairCounts {
        concordant,
        discordant,
        x_ties,
        y_ties,
    } = count_pairs(&rx, &ry);

    let pairs = (n * (n - 1) / 2) as f64;
    (concordant as f64 - discordant as f64)
        / ((pairs - x_ties as f64) * (pairs - y_ties as f64)).sqrt()
}

#[derive(Debug, Default, PartialEq, Eq)]
struct PairCounts {
    concordant: u64,
    discordant: u64,
    x_ties: u64,
    y_ties: u64,
}

fn count_pairs(rx: &[f64], ry: &[f64]) -> PairCounts {
    let mut counts = PairCounts::default();
    for (i, (xi, yi)) in rx.iter().zip(ry).enumerate() {
        for (xj, yj) in rx[i + 1..].iter().zip(&ry[i + 1..]) {
            match (xj.total_cmp(xi), yj.total_cmp(yi)) {
                (Ordering::Equal, Ordering::Equal) => {
                    counts.x_ties += 1;
                    counts.y_ties += 1;
                }
                (Ordering::Equal, _) => counts.x_ties += 1,
                (_, Ordering::Equal) => counts.y_ties += 1,
                (x_rel, y_rel) if x_rel == y_rel => counts.concordant += 1,
                _ => counts.discordant += 1,
            }
        }
    }
    counts
}
