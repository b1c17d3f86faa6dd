//! Two classic building blocks: a [disjoint-sets/union-find] over the elements `0 .. n` that
//! also knows the largest element of every set, and a search for [bitonic] arrays.
//!
//! The main struct of this crate is [`DisjointSet`].
//! The elements each start in their own set and these sets can be joined with the `union`
//! method.
//! You can check if elements share a set with the `connected` method, count the sets with
//! `count` and ask for the largest element of a set with `find_max`.
//! These methods have an amortized complexity of `O(α(n))` where 'α' is the inverse Ackermann
//! function.
//! The [`clustering`] module uses it to divide elements in clusters with a maximum spacing.
//!
//! The [`bitonic`] module searches arrays that first strictly increase and then strictly
//! decrease in `O(log n)` time.
//!
//! Some functionality depends on features, all of them are enabled by default:
//!
//! - `rayon`: searching many targets in parallel with `bitonic::par_search_all`.
//! - `proptest`: an `Arbitrary` implementation for [`DisjointSet`] and the
//!   `bitonic::bitonic_vec` strategy.
//! - `cli`: the `bitonic-union` command line program.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [bitonic]: https://en.wikipedia.org/wiki/Bitonic_sorter
//! [`DisjointSet`]: disjoint_sets/disjoint_set/struct.DisjointSet.html
//! [`clustering`]: clustering/index.html
//! [`bitonic`]: bitonic/index.html

extern crate bit_vec;
#[macro_use]
extern crate log;
#[cfg(feature = "rayon")]
extern crate rayon;
#[cfg(feature = "proptest")]
extern crate proptest;

/// A convenient macro to create a `BitVec` similar to `vec!`.
macro_rules! bit_vec {
    ($element: expr; $len: expr) => {
        bit_vec::BitVec::from_elem($len, $element)
    };
}

mod error;
pub mod bitonic;
pub mod clustering;
pub mod disjoint_sets;

pub use {
    disjoint_sets::disjoint_set::{AllSets, DisjointSet},
    error::{Error, Result},
};
