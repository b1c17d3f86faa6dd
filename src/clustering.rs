//! Max-spacing k-clustering on top of the [`DisjointSet`].
//!
//! [`DisjointSet`]: ../disjoint_sets/disjoint_set/struct.DisjointSet.html

use crate::{
    disjoint_sets::disjoint_set::DisjointSet,
    error::{Error, Result},
};

/// An undirected edge between two elements, weighted by their distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge<D> {
    pub distance: D,
    pub first: usize,
    pub second: usize,
}

impl<D> Edge<D> {
    pub fn new(distance: D, first: usize, second: usize) -> Self {
        Self { distance, first, second }
    }
}

/// The result of [`max_spacing`](fn.max_spacing.html).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clustering<D> {
    /// The smallest distance between two elements of different clusters,
    /// `None` if no edge connects two clusters.
    pub spacing: Option<D>,
    /// The clusters, each in ascending order and ordered by their smallest element.
    pub clusters: Vec<Vec<usize>>,
}

/// Divides the elements `0 .. len` in `k` clusters with the largest possible spacing.
///
/// Edges are taken from short to long and their elements joined until `k` clusters are
/// left, like Kruskal's algorithm stopped early.
/// Edges of the same distance are taken in the order they are given.
/// If the edges run out first there will be more than `k` clusters.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `len` is 0, or if `k` is 0 or larger than `len`.
/// Returns `Error::IndexOutOfRange` if an edge has an element outside of `0 .. len`.
///
/// # Examples
///
/// ```
/// use bitonic_union::clustering::{self, Edge};
///
/// # fn main() -> Result<(), bitonic_union::Error> {
/// let edges = [Edge::new(1, 0, 1), Edge::new(3, 0, 2), Edge::new(2, 1, 2)];
/// let clustering = clustering::max_spacing(3, &edges, 2)?;
///
/// assert!(clustering.spacing == Some(2));
/// assert!(clustering.clusters == vec![vec![0, 1], vec![2]]);
/// # Ok(())
/// # }
/// ```
pub fn max_spacing<D: Ord + Copy>(len: usize, edges: &[Edge<D>], k: usize) -> Result<Clustering<D>> {
    let mut disjoint_set = DisjointSet::new(len)?;

    if k == 0 || k > len {
        return Err(Error::InvalidArgument(
            format!("cannot divide {} elements in {} clusters", len, k),
        ))
    }

    // Every edge is checked before we join anything.
    for edge in edges {
        disjoint_set.root(edge.first)?;
        disjoint_set.root(edge.second)?;
    }

    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|edge| edge.distance);
    let mut sorted = sorted.into_iter();

    while disjoint_set.count() > k {
        match sorted.next() {
            Some(edge) => {
                disjoint_set.union(edge.first, edge.second)?;
            },
            None => break,
        }
    }

    let mut spacing = None;
    for edge in sorted {
        if !disjoint_set.connected(edge.first, edge.second)? {
            spacing = Some(edge.distance);
            break
        }
    }

    debug!(
        "clustered {} elements in {} clusters using {} edges",
        len,
        disjoint_set.count(),
        edges.len(),
    );

    Ok(Clustering {
        spacing,
        clusters: disjoint_set.all_sets().collect(),
    })
}
