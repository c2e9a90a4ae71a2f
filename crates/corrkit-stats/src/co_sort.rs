//! Lockstep ("tandem" and "triplet") sorting.
//!
//! Sorting a primary slice while applying every exchange to one or two
//! companion slices keeps the elements at each index paired. Rank
//! assignment uses this to remember where each sorted value came from.
//!
//! # Ordering
//!
//! Values are sorted ascending. NaN sorts after every valid number; the
//! relative order of NaNs among themselves is unspecified. The sort is not
//! stable.
//!
//! # Examples
//!
//! ```
//! use corrkit_stats::co_sort::tandem_sort;
//!
//! let mut values = [3.0, f64::NAN, 1.0, 2.0];
//! let mut labels = ['c', 'x', 'a', 'b'];
//! tandem_sort(&mut values, &mut labels);
//!
//! assert_eq!(&values[..3], &[1.0, 2.0, 3.0]);
//! assert!(values[3].is_nan());
//! assert_eq!(labels, ['a', 'b', 'c', 'x']);
//! ```

use std::cmp::Ordering;

/// Slices below this length are sorted by insertion sort.
const INSERTION_SORT_THRESHOLD: usize = 12;

/// A collection that can be sorted by index comparisons and exchanges.
///
/// Implementors compare elements of a primary sequence and apply every
/// exchange to all of their sequences, so the sort routine never needs to
/// know how many companions are carried along.
pub trait CoSort {
    /// Number of elements in the primary sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the primary sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the element at `i` must sort before the element at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at `i` and `j` in every sequence.
    fn swap(&mut self, i: usize, j: usize);
}

/// Primary slice paired with one companion slice.
#[derive(Debug)]
pub struct Tandem<'a, C> {
    primary: &'a mut [f64],
    companion: &'a mut [C],
}

impl<'a, C> Tandem<'a, C> {
    /// Pairs `primary` with `companion`.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the slices differ in length.
    #[must_use]
    pub fn new(primary: &'a mut [f64], companion: &'a mut [C]) -> Self {
        debug_assert_eq!(
            primary.len(),
            companion.len(),
            "companion must have the same length as the primary slice"
        );
        Self { primary, companion }
    }
}

impl<C> CoSort for Tandem<'_, C> {
    fn len(&self) -> usize {
        self.primary.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        sentinel_last_less(self.primary[i], self.primary[j])
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.primary.swap(i, j);
        self.companion.swap(i, j);
    }
}

/// Primary slice paired with two companion slices.
#[derive(Debug)]
pub struct Triplet<'a, C1, C2> {
    primary: &'a mut [f64],
    companion: &'a mut [C1],
    companion2: &'a mut [C2],
}

impl<'a, C1, C2> Triplet<'a, C1, C2> {
    /// Groups `primary` with `companion` and `companion2`.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the slices differ in length.
    #[must_use]
    pub fn new(
        primary: &'a mut [f64],
        companion: &'a mut [C1],
        companion2: &'a mut [C2],
    ) -> Self {
        debug_assert_eq!(
            primary.len(),
            companion.len(),
            "companion must have the same length as the primary slice"
        );
        debug_assert_eq!(
            primary.len(),
            companion2.len(),
            "second companion must have the same length as the primary slice"
        );
        Self {
            primary,
            companion,
            companion2,
        }
    }
}

impl<C1, C2> CoSort for Triplet<'_, C1, C2> {
    fn len(&self) -> usize {
        self.primary.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        sentinel_last_less(self.primary[i], self.primary[j])
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.primary.swap(i, j);
        self.companion.swap(i, j);
        self.companion2.swap(i, j);
    }
}

/// Strict "sorts before" relation with NaN placed after every valid value.
///
/// # Examples
///
/// ```
/// use corrkit_stats::co_sort::sentinel_last_less;
///
/// assert!(sentinel_last_less(1.0, 2.0));
/// assert!(sentinel_last_less(1e300, f64::NAN));
/// assert!(!sentinel_last_less(f64::NAN, 1.0));
/// assert!(!sentinel_last_less(f64::NAN, f64::NAN));
/// ```
#[must_use]
pub fn sentinel_last_less(a: f64, b: f64) -> bool {
    a < b || (!a.is_nan() && b.is_nan())
}

/// Total ordering consistent with [`sentinel_last_less`].
#[must_use]
pub fn sentinel_last_cmp(a: f64, b: f64) -> Ordering {
    if sentinel_last_less(a, b) {
        Ordering::Less
    } else if sentinel_last_less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Sorts `primary` ascending, moving `companion` in lockstep.
///
/// # Examples
///
/// ```
/// use corrkit_stats::co_sort::tandem_sort;
///
/// let mut x = [5.0, 1.0, 3.0];
/// let mut y = [50.0, 10.0, 30.0];
/// tandem_sort(&mut x, &mut y);
/// assert_eq!(x, [1.0, 3.0, 5.0]);
/// assert_eq!(y, [10.0, 30.0, 50.0]);
/// ```
pub fn tandem_sort<C>(primary: &mut [f64], companion: &mut [C]) {
    sort(&mut Tandem::new(primary, companion));
}

/// Sorts `primary` ascending, moving both companions in lockstep.
///
/// # Examples
///
/// ```
/// use corrkit_stats::co_sort::triplet_sort;
///
/// let mut x = [2.0, 1.0];
/// let mut y = [20.0, 10.0];
/// let mut z = ["two", "one"];
/// triplet_sort(&mut x, &mut y, &mut z);
/// assert_eq!(x, [1.0, 2.0]);
/// assert_eq!(y, [10.0, 20.0]);
/// assert_eq!(z, ["one", "two"]);
/// ```
pub fn triplet_sort<C1, C2>(primary: &mut [f64], companion: &mut [C1], companion2: &mut [C2]) {
    sort(&mut Triplet::new(primary, companion, companion2));
}

/// Sorts any [`CoSort`] collection in place.
///
/// Heapsort with an insertion-sort path for short inputs: O(n log n)
/// comparisons and exchanges in the worst case, no allocation.
pub fn sort<S>(data: &mut S)
where
    S: CoSort + ?Sized,
{
    let n = data.len();
    if n < 2 {
        return;
    }
    if n <= INSERTION_SORT_THRESHOLD {
        insertion_sort(data, n);
        return;
    }

    for root in (0..n / 2).rev() {
        sift_down(data, root, n);
    }
    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(data, 0, end);
    }
}

fn insertion_sort<S>(data: &mut S, n: usize)
where
    S: CoSort + ?Sized,
{
    for i in 1..n {
        let mut j = i;
        while j > 0 && data.less(j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

// Restores the max-heap property for the subtree at `root` within `data[..end]`.
fn sift_down<S>(data: &mut S, mut root: usize, end: usize)
where
    S: CoSort + ?Sized,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && data.less(child, child + 1) {
            child += 1;
        }
        if !data.less(root, child) {
            break;
        }
        data.swap(root, child);
        root = child;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_ascending(values: &[f64]) -> bool {
        values.is_sorted_by(|a, b| !sentinel_last_less(*b, *a))
    }

    #[expect(clippy::cast_precision_loss)]
    fn reversed(n: usize) -> Vec<f64> {
        (0..n).map(|i| (n - i) as f64).collect()
    }

    #[test]
    fn test_tandem_sort_reversed() {
        let mut primary = reversed(1000);
        let mut companion = reversed(1000);
        tandem_sort(&mut primary, &mut companion);
        assert!(is_ascending(&primary));
        assert!(is_ascending(&companion));
    }

    #[test]
    fn test_triplet_sort_reversed() {
        let mut primary = reversed(1000);
        let mut companion = reversed(1000);
        let mut companion2 = reversed(1000);
        triplet_sort(&mut primary, &mut companion, &mut companion2);
        assert!(is_ascending(&primary));
        assert!(is_ascending(&companion));
        assert!(is_ascending(&companion2));
    }

    #[test]
    fn test_companion_stays_paired() {
        let mut primary = vec![
            4.0, 8.0, 1.0, 9.0, 2.0, 7.0, 3.0, 6.0, 5.0, 0.0, 11.0, 10.0, 12.0,
        ];
        let mut squares = primary.iter().map(|v| v * v).collect::<Vec<_>>();
        let mut labels = primary.iter().map(ToString::to_string).collect::<Vec<_>>();
        triplet_sort(&mut primary, &mut squares, &mut labels);

        assert!(is_ascending(&primary));
        for ((value, square), label) in primary.iter().zip(&squares).zip(&labels) {
            assert_eq!(value * value, *square);
            assert_eq!(value.to_string(), *label);
        }
    }

    #[test]
    fn test_nan_sorts_last() {
        let mut primary = vec![f64::NAN, 3.0, f64::NAN, -1.0, 2.0];
        let mut index = (0..primary.len()).collect::<Vec<_>>();
        tandem_sort(&mut primary, &mut index);

        assert_eq!(&primary[..3], &[-1.0, 2.0, 3.0]);
        assert!(primary[3].is_nan());
        assert!(primary[4].is_nan());
        assert_eq!(&index[..3], &[3, 4, 1]);
        let mut nan_index = index[3..].to_vec();
        nan_index.sort_unstable();
        assert_eq!(nan_index, [0, 2]);
    }

    #[test]
    fn test_nan_sorts_last_long_input() {
        let mut primary = (0..100)
            .map(|i| if i % 7 == 0 { f64::NAN } else { f64::from(100 - i) })
            .collect::<Vec<_>>();
        let mut companion = vec![(); primary.len()];
        tandem_sort(&mut primary, &mut companion);

        let first_nan = primary.iter().position(|v| v.is_nan()).unwrap();
        assert_eq!(first_nan, 100 - 15);
        assert!(primary[first_nan..].iter().all(|v| v.is_nan()));
        assert!(primary[..first_nan].is_sorted());
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut primary = vec![
            3.0, 1.0, 2.0, 2.0, 5.0, 4.0, 1.0, 9.0, 0.5, 7.0, 6.0, 8.0, 2.0, 3.0,
        ];
        let mut companion = vec![0.0; primary.len()];
        tandem_sort(&mut primary, &mut companion);
        let once = primary.clone();
        tandem_sort(&mut primary, &mut companion);
        assert_eq!(primary, once);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: [f64; 0] = [];
        let mut empty_companion: [f64; 0] = [];
        tandem_sort(&mut empty, &mut empty_companion);

        let mut single = [42.0];
        let mut single_companion = ["only"];
        tandem_sort(&mut single, &mut single_companion);
        assert_eq!(single, [42.0]);
        assert_eq!(single_companion, ["only"]);
    }

    #[test]
    fn test_sentinel_last_cmp() {
        assert_eq!(sentinel_last_cmp(1.0, 2.0), Ordering::Less);
        assert_eq!(sentinel_last_cmp(2.0, 1.0), Ordering::Greater);
        assert_eq!(sentinel_last_cmp(2.0, 2.0), Ordering::Equal);
        assert_eq!(sentinel_last_cmp(f64::NAN, 2.0), Ordering::Greater);
        assert_eq!(sentinel_last_cmp(f64::NAN, f64::NAN), Ordering::Equal);
    }
}
