//! Lazy enumeration of fixed size subsets.

use itertools::{Combinations, Itertools};
use math_lib::polynomial::{point::Point, point_sequence::PointSequence};
use std::slice::Iter;

/// Every `size`-sized subset of a slice of points, produced one at a time.
///
/// Subsets come in lexicographic order of the indices of their points. Cloning a `Subsets` before consuming it
/// allows restarting the enumeration.
#[derive(Clone)]
pub struct Subsets<'a> {
    inner: Combinations<Iter<'a, Point>>,
}

impl<'a> Subsets<'a> {
    /// Constructs the enumeration.
    pub fn new(points: &'a [Point], size: usize) -> Self {
        Self { inner: points.iter().combinations(size) }
    }
}

impl Iterator for Subsets<'_> {
    type Item = PointSequence;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|subset| subset.into_iter().copied().collect())
    }
}

/// Computes the binomial coefficient `C(n, k)`, returning `None` if it doesn't fit in a `u64`.
pub fn binomial(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n.checked_sub(k)?);
    let n = u128::try_from(n).ok()?;
    let mut result: u128 = 1;
    for i in 0..u128::try_from(k).ok()? {
        // C(n, i) * (n - i) / (i + 1) is C(n, i + 1), always an integer.
        result = result.checked_mul(n.checked_sub(i)?)?.checked_div(i.checked_add(1)?)?;
        if result > u128::from(u64::MAX) {
            return None;
        }
    }
    u64::try_from(result).ok()
}
