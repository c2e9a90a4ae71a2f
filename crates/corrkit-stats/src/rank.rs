//! Tie-aware rank assignment.
//!
//! The rank of a value is its 0-based position once the sequence is sorted
//! ascending. Values that compare equal form a run and all receive the
//! midpoint of the positions the run occupies, so a two-way tie at sorted
//! positions 3 and 4 ranks 3.5 and a three-way tie at 5, 6, 7 ranks 6.0.
//!
//! NaN values sort last and never tie, with each other or with valid
//! values, so every NaN keeps its own raw position.

use crate::co_sort;

/// Returns the rank of each element of `values`, in input order.
///
/// The input is copied before sorting and left untouched.
///
/// # Complexity
///
/// Time: O(n log n), Space: O(n)
///
/// # Examples
///
/// ```
/// use corrkit_stats::rank::ranks;
///
/// assert_eq!(ranks(&[10.0, 30.0, 20.0]), [0.0, 2.0, 1.0]);
/// assert_eq!(ranks(&[1.0, 3.0, 2.0, 2.0]), [0.0, 3.0, 1.5, 1.5]);
/// assert_eq!(ranks(&[4.0, 4.0, 4.0]), [1.0, 1.0, 1.0]);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut sorted = values.to_vec();
    let mut order = (0..n).collect::<Vec<usize>>();
    co_sort::tandem_sort(&mut sorted, &mut order);

    let mut sorted_ranks = (0..n).map(|i| i as f64).collect::<Vec<_>>();
    let mut run_start = 0;
    for i in 1..=n {
        if i < n && !starts_new_run(sorted[run_start], sorted[i]) {
            continue;
        }
        if i - run_start > 1 {
            let midpoint = (run_start + i - 1) as f64 / 2.0;
            sorted_ranks[run_start..i].fill(midpoint);
        }
        run_start = i;
    }

    let mut ranks = vec![0.0; n];
    for (rank, original) in sorted_ranks.into_iter().zip(order) {
        ranks[original] = rank;
    }
    ranks
}

// `value` follows `run_value` in sorted order.
fn starts_new_run(run_value: f64, value: f64) -> bool {
    value > run_value || value.is_nan() || run_value.is_nan()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strictly_decreasing() {
        let values = (0..1000).map(|i| f64::from(1000 - i)).collect::<Vec<_>>();
        let result = ranks(&values);
        for i in 1..values.len() {
            assert!(result[i - 1] > result[i], "ranks not decreasing at {i}");
        }
        assert_eq!(result[0], 999.0);
        assert_eq!(result[999], 0.0);
    }

    #[test]
    fn test_forced_duplicate_pair() {
        let mut values = (0..1000).map(|i| f64::from(999 - i)).collect::<Vec<_>>();
        values[200] = 800.0;
        let result = ranks(&values);
        assert_eq!(result[199], 799.5);
        assert_eq!(result[200], 799.5);
        assert_eq!(result[198], 801.0);
        assert_eq!(result[201], 798.0);
    }

    #[test]
    fn test_three_way_tie() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 5.0, 5.0, 8.0];
        assert_eq!(
            ranks(&values),
            [0.0, 1.0, 2.0, 3.0, 4.0, 6.0, 6.0, 6.0, 8.0]
        );
    }

    #[test]
    fn test_trailing_tie_run_gets_midpoint() {
        // The last run has no larger value after it and must still be averaged.
        assert_eq!(ranks(&[2.0, 1.0, 2.0]), [1.5, 0.0, 1.5]);
        assert_eq!(ranks(&[3.0, 3.0, 1.0, 3.0, 2.0]), [3.0, 3.0, 0.0, 3.0, 1.0]);
    }

    #[test]
    fn test_nan_ranks_last_without_ties() {
        let result = ranks(&[f64::NAN, 1.0, f64::NAN, 0.0]);
        assert_eq!(result[3], 0.0);
        assert_eq!(result[1], 1.0);
        let mut nan_ranks = [result[0], result[2]];
        nan_ranks.sort_by(f64::total_cmp);
        assert_eq!(nan_ranks, [2.0, 3.0]);
    }

    #[test]
    fn test_tie_before_nan() {
        assert_eq!(ranks(&[2.0, f64::NAN, 2.0]), [0.5, 2.0, 0.5]);
    }

    #[test]
    fn test_input_untouched() {
        let values = [3.0, 1.0, 2.0];
        let _ = ranks(&values);
        assert_eq!(values, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(ranks(&[]).is_empty());
        assert_eq!(ranks(&[7.0]), [0.0]);
    }
}
