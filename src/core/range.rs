/*!
 * Pair Ranges
 *
 * Turn a (begin, end) position pair over a slice into something a `for`
 * loop can consume. Search helpers such as `equal_range` hand back such a
 * pair; wrapping it avoids re-slicing by hand at every call site.
 */

use super::errors::{UtilError, UtilResult};
use std::ops::Range;

/// Half-open window `[begin, end)` over a slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairRange<'a, T> {
    items: &'a [T],
    begin: usize,
    end: usize,
}

impl<'a, T> PairRange<'a, T> {
    /// Build a range, checking `begin <= end <= items.len()`
    pub fn new(items: &'a [T], begin: usize, end: usize) -> UtilResult<Self> {
        if begin > end || end > items.len() {
            return Err(UtilError::InvalidRange {
                begin,
                end,
                len: items.len(),
            });
        }
        Ok(Self { items, begin, end })
    }

    #[inline]
    pub fn begin(&self) -> usize {
        self.begin
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Distance from begin to end
    #[inline]
    pub fn size(&self) -> usize {
        self.end - self.begin
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// The window as a plain slice
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        &self.items[self.begin..self.end]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for PairRange<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &PairRange<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Create a range from two positions
#[inline]
pub fn make_range<T>(items: &[T], begin: usize, end: usize) -> UtilResult<PairRange<'_, T>> {
    PairRange::new(items, begin, end)
}

/// Create a range from a position pair, as returned by [`equal_range`]
#[inline]
pub fn make_range_from_pair<T>(
    items: &[T],
    (begin, end): (usize, usize),
) -> UtilResult<PairRange<'_, T>> {
    PairRange::new(items, begin, end)
}

impl<'a, T> TryFrom<(&'a [T], Range<usize>)> for PairRange<'a, T> {
    type Error = UtilError;

    fn try_from((items, range): (&'a [T], Range<usize>)) -> UtilResult<Self> {
        PairRange::new(items, range.start, range.end)
    }
}

/// Positions bounding every element equal to `key` in a sorted slice
///
/// Both positions equal the insertion point when `key` is absent.
pub fn equal_range<T: Ord>(items: &[T], key: &T) -> (usize, usize) {
    let begin = items.partition_point(|item| item < key);
    let end = begin + items[begin..].partition_point(|item| item <= key);
    (begin, end)
}
