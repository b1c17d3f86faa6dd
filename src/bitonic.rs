//! Search in [bitonic] arrays in `O(log n)` time.
//!
//! A bitonic array strictly increases up to a single peak and strictly decreases after it.
//! Arrays that only increase or only decrease, and arrays with a single element, are
//! bitonic as well.
//!
//! Looking at the middle element `mid` of a range and its two neighbours, one of these
//! must hold:
//!
//! 1. `left < mid < right`: the range up to `mid` is ascending.
//! 2. `left > mid > right`: the range from `mid` is descending.
//! 3. `left < mid > right`: `mid` is the peak.
//!
//! Any other shape means the array is not bitonic, which is reported as
//! `Error::InvalidInput`.
//! The array is not checked up front, only the windows the search looks at are.
//!
//! [bitonic]: https://en.wikipedia.org/wiki/Bitonic_sorter

use {
    std::cmp::Ordering,
    crate::error::{Error, Result},
};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// The direction in which a slice is sorted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Every element is larger than the one before it.
    Ascending,
    /// Every element is smaller than the one before it.
    Descending,
}

/// Searches `target` in the bitonic `array`.
///
/// Returns the index of `target`, or `None` if it is not in `array`.
///
/// # Errors
///
/// Returns `Error::InvalidInput` when the search comes across three consecutive elements
/// that are neither ascending, descending nor a peak.
/// A broken array may also be searched without noticing, the search never returns the
/// index of an element that is not equal to `target`.
///
/// # Examples
///
/// ```
/// use bitonic_union::{bitonic, Error};
///
/// # fn main() -> Result<(), Error> {
/// let array = [1, 2, 3, 5, 4];
///
/// assert!(bitonic::search(&array, &5)? == Some(3));
/// assert!(bitonic::search(&array, &4)? == Some(4));
/// assert!(bitonic::search(&array, &6)? == None);
///
/// // The middle element is smaller than both its neighbours.
/// assert!(bitonic::search(&[3, 1, 2], &7) == Err(Error::InvalidInput { index: 1 }));
/// # Ok(())
/// # }
/// ```
pub fn search<T: Ord>(array: &[T], target: &T) -> Result<Option<usize>> {
    let mut start = 0;
    let mut end = array.len();

    loop {
        // With less than 3 elements we check for a match one by one.
        if end - start <= 2 {
            return Ok((start .. end).find(|&index| array[index] == *target))
        }

        // There is at least one element at each side of the middle.
        let mid = start + (end - start) / 2;
        let middle = &array[mid];

        if middle == target {
            return Ok(Some(mid))
        }

        trace!("searching bitonic range {} .. {} around {}", start, end, mid);

        match (Ord::cmp(&array[mid - 1], middle), Ord::cmp(middle, &array[mid + 1])) {
            (Ordering::Less, Ordering::Less) => {
                // The range up to `mid` is ascending.
                if target < middle {
                    let found = search_range(array, start, mid, target, Order::Ascending);
                    if found.is_some() {
                        return Ok(found)
                    }
                }

                start = mid + 1;
            },
            (Ordering::Greater, Ordering::Greater) => {
                // The range from `mid` is descending.
                if target < middle {
                    let found = search_range(array, mid + 1, end, target, Order::Descending);
                    if found.is_some() {
                        return Ok(found)
                    }
                }

                end = mid;
            },
            (Ordering::Less, Ordering::Greater) => {
                // We found the peak, nothing is larger than it.
                if target > middle {
                    return Ok(None)
                }

                return Ok(search_range(array, start, mid, target, Order::Ascending)
                    .or_else(|| search_range(array, mid + 1, end, target, Order::Descending)))
            },
            _ => return Err(Error::InvalidInput { index: mid }),
        }
    }
}

/// Searches `target` in `array` which is sorted in the given `order`.
///
/// Returns the index of `target`, or `None` if it is not in `array`.
/// The result is meaningless if `array` is not sorted.
///
/// # Examples
///
/// ```
/// use bitonic_union::bitonic::{self, Order};
///
/// assert!(bitonic::search_sorted(&[1, 3, 5, 7], &5, Order::Ascending) == Some(2));
/// assert!(bitonic::search_sorted(&[7, 5, 3, 1], &5, Order::Descending) == Some(1));
/// assert!(bitonic::search_sorted(&[7, 5, 3, 1], &4, Order::Descending) == None);
/// ```
#[inline]
pub fn search_sorted<T: Ord>(array: &[T], target: &T, order: Order) -> Option<usize> {
    search_range(array, 0, array.len(), target, order)
}

/// Searches `target` in `array[start .. end]` which is sorted in the given `order`.
fn search_range<T: Ord>(
    array: &[T],
    start: usize,
    end: usize,
    target: &T,
    order: Order,
) -> Option<usize> {
    let found = match order {
        Order::Ascending => array[start .. end].binary_search_by(|probe| probe.cmp(target)),
        Order::Descending => array[start .. end].binary_search_by(|probe| target.cmp(probe)),
    };

    found.ok().map(|offset| start + offset)
}

/// Searches every element of `targets` in the bitonic `array` in parallel.
///
/// The result at each position is what `search` returns for the target at that position.
///
/// # Errors
///
/// Returns `Error::InvalidInput` if any of the searches finds that `array` is not bitonic.
///
/// # Examples
///
/// ```
/// use bitonic_union::bitonic;
///
/// # fn main() -> Result<(), bitonic_union::Error> {
/// let found = bitonic::par_search_all(&[1, 4, 9, 7, 2], &[9, 2, 3])?;
///
/// assert!(found == vec![Some(2), Some(4), None]);
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "rayon")]
pub fn par_search_all<T: Ord + Sync>(array: &[T], targets: &[T]) -> Result<Vec<Option<usize>>> {
    targets.par_iter().map(|target| search(array, target)).collect()
}

/// A strategy for bitonic vectors of distinct values with a length in `1 .. max_len`.
///
/// The peak may be anywhere, including the first and the last position.
///
/// # Panics
///
/// If `max_len` is smaller than 2.
#[cfg(feature = "proptest")]
pub fn bitonic_vec(max_len: usize) -> BoxedStrategy<Vec<i64>> {
    proptest::collection::btree_set(any::<i32>(), 1 .. max_len).prop_flat_map(|values| {
        let len = values.len();
        (Just(values), proptest::collection::vec(any::<bool>(), len))
    }).prop_map(|(values, sides)| {
        // The largest value is the peak, every other value goes left or right of it.
        let mut values: Vec<i64> = values.into_iter().map(i64::from).collect();
        let peak = values.pop();

        let mut left = Vec::with_capacity(values.len() + 1);
        let mut right = Vec::with_capacity(values.len());
        for (value, go_left) in values.into_iter().zip(sides) {
            if go_left {
                left.push(value);
            } else {
                right.push(value);
            }
        }

        left.extend(peak);
        left.extend(right.into_iter().rev());
        left
    }).boxed()
}
