//! A [disjoint-sets/union-find] over the dense universe `0 .. len` that also
//! tracks the largest element of every set.
//!
//! See [`DisjointSet`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSet`]: struct.DisjointSet.html

use {
    std::{
        ops,
        cmp::Ordering,
        iter::FusedIterator,
    },
    crate::{
        disjoint_sets::metadata::Metadata,
        error::{Error, Result},
    },
};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// A [disjoint-sets/union-find] of the elements `0 .. len`.
///
/// Initially each element has its own set but sets can be joined with the `union` method.
/// For each set we keep its size and its largest element, so `len_of_set` and `find_max`
/// only need to find the root of the set.
///
/// Finding a root halves the path it walks: every visited element is pointed to its
/// grandparent. Together with attaching the smaller tree under the larger one in `union`
/// this gives an amortized complexity of `O(α(n))` per operation, where `α` is the inverse
/// Ackermann function.
///
/// Every method that takes an element validates it before changing anything, so a call
/// that returns an error leaves the `DisjointSet` as it was.
///
/// Path compression happens through a shared reference, which makes a `DisjointSet`
/// `Send` but not `Sync`. Concurrent use needs an outside lock.
///
/// # Examples
///
/// ```
/// use bitonic_union::DisjointSet;
///
/// # fn main() -> Result<(), bitonic_union::Error> {
/// let mut disjoint_set = DisjointSet::new(4)?;
/// disjoint_set.union(1, 2)?;
/// disjoint_set.union(2, 3)?;
///
/// assert!(disjoint_set.connected(1, 3)?);
/// assert!(!disjoint_set.connected(0, 3)?);
/// assert!(disjoint_set.count() == 2);
/// assert!(disjoint_set.find_max(1)? == 3);
/// # Ok(())
/// # }
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
#[derive(Clone)]
pub struct DisjointSet {
    /// The parent, size and maximum of each element.
    meta: Metadata,
    /// The amount of roots in `meta`.
    count: usize,
}

/// Creates a [`DisjointSet`] and joins the given pairs.
///
/// Evaluates to a `Result<DisjointSet>` because the length or an index might be invalid.
///
/// - Create a [`DisjointSet`] of singletons:
///
/// ```
/// # #[macro_use]
/// # extern crate bitonic_union;
/// #
/// # fn main() -> Result<(), bitonic_union::Error> {
/// let disjoint_set = disjoint_set![3]?;
///
/// assert!(disjoint_set.count() == 3);
/// assert!(disjoint_set.is_singleton(0)?);
/// # Ok(())
/// # }
/// ```
///
/// - Create a [`DisjointSet`] with some sets already joined:
///
/// ```
/// # #[macro_use]
/// # extern crate bitonic_union;
/// #
/// # fn main() -> Result<(), bitonic_union::Error> {
/// let disjoint_set = disjoint_set![5;
///     0 => 4,
///     1 => 3,
/// ]?;
///
/// assert!(disjoint_set.connected(0, 4)?);
/// assert!(disjoint_set.connected(1, 3)?);
/// assert!(disjoint_set.is_singleton(2)?);
/// assert!(disjoint_set.count() == 3);
/// # Ok(())
/// # }
/// ```
///
/// [`DisjointSet`]: disjoint_sets/disjoint_set/struct.DisjointSet.html
#[macro_export]
macro_rules! disjoint_set {
    ($len: expr) => {
        $crate::DisjointSet::new($len)
    };
    ($len: expr; $($first: expr => $second: expr),*) => {
        $crate::DisjointSet::new($len).and_then(|mut disjoint_set| {
            $(
                disjoint_set.union($first, $second)?;
            )*

            Ok(disjoint_set)
        })
    };
    ($len: expr; $($first: expr => $second: expr,)*) => {
        disjoint_set![$len; $($first => $second),*]
    };
}

impl DisjointSet {
    /// Constructs a `DisjointSet` of `len` singleton sets `{0}, {1}, .., {len - 1}`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `len` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitonic_union::{DisjointSet, Error};
    ///
    /// # fn main() -> Result<(), Error> {
    /// let disjoint_set = DisjointSet::new(10)?;
    /// assert!(disjoint_set.count() == 10);
    /// assert!(disjoint_set.len() == 10);
    ///
    /// assert!(matches!(DisjointSet::new(0), Err(Error::InvalidArgument(_))));
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::InvalidArgument(
                "a disjoint set needs at least one element".to_owned(),
            ))
        }

        debug!("creating a disjoint set of {} elements", len);

        Ok(Self::singletons(len))
    }

    /// Constructs `len` singleton sets without checking `len`.
    pub(crate) fn singletons(len: usize) -> Self {
        Self {
            meta: Metadata::new(len),
            count: len,
        }
    }

    /// Returns the amount of elements, which is fixed at construction.
    #[inline]
    pub fn len(&self) -> usize {
        self.meta.len()
    }

    /// Returns the current amount of disjoint sets.
    ///
    /// This is kept up to date by `union` and runs in `O(1)` time.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Joins the sets of `first_index` and `second_index`.
    ///
    /// The root of the smaller set is attached under the root of the larger set.
    /// When both sets have the same size the set of `second_index` is attached under the
    /// set of `first_index`.
    /// Returns `true` if two different sets were joined and `false` if both elements
    /// already shared a set, in which case nothing changes.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `first_index` or `second_index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitonic_union::DisjointSet;
    ///
    /// # fn main() -> Result<(), bitonic_union::Error> {
    /// let mut disjoint_set = DisjointSet::new(4)?;
    ///
    /// assert!(disjoint_set.union(1, 2)?);
    /// assert!(disjoint_set.len_of_set(1)? == 2);
    /// assert!(disjoint_set.count() == 3);
    ///
    /// // Joining elements that already share a set changes nothing.
    /// assert!(!disjoint_set.union(2, 1)?);
    /// assert!(disjoint_set.count() == 3);
    /// # Ok(())
    /// # }
    /// ```
    pub fn union(&mut self, first_index: usize, second_index: usize) -> Result<bool> {
        self.check(first_index)?;
        self.check(second_index)?;

        Ok(self.merge(first_index, second_index))
    }

    /// Returns `true` if `first_index` and `second_index` are in the same set.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `first_index` or `second_index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate bitonic_union;
    /// #
    /// # fn main() -> Result<(), bitonic_union::Error> {
    /// let disjoint_set = disjoint_set![4; 1 => 3, 0 => 1]?;
    ///
    /// assert!(disjoint_set.connected(0, 3)?);
    /// assert!(!disjoint_set.connected(0, 2)?);
    /// assert!(disjoint_set.connected(2, 2)?);
    /// # Ok(())
    /// # }
    /// ```
    #[inline]
    pub fn connected(&self, first_index: usize, second_index: usize) -> Result<bool> {
        Ok(self.root(first_index)? == self.root(second_index)?)
    }

    /// Returns the largest element in the set of `index`.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate bitonic_union;
    /// #
    /// # fn main() -> Result<(), bitonic_union::Error> {
    /// let disjoint_set = disjoint_set![10; 0 => 8, 3 => 2]?;
    ///
    /// assert!(disjoint_set.find_max(0)? == 8);
    /// assert!(disjoint_set.find_max(2)? == 3);
    /// assert!(disjoint_set.find_max(9)? == 9);
    /// # Ok(())
    /// # }
    /// ```
    pub fn find_max(&self, index: usize) -> Result<usize> {
        let root = self.root(index)?;

        Ok(self.meta.max(root))
    }

    /// Gives the representative of the set that `index` belongs to.
    ///
    /// Every element of a set gives the same root, but which element is the root may change
    /// when sets are joined.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` is out of bounds.
    pub fn root(&self, index: usize) -> Result<usize> {
        self.check(index)?;

        Ok(self.find(index))
    }

    /// Returns the amount of elements in the set of `index`.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate bitonic_union;
    /// #
    /// # fn main() -> Result<(), bitonic_union::Error> {
    /// let mut disjoint_set = disjoint_set![3]?;
    /// disjoint_set.union(0, 2)?;
    ///
    /// assert!(disjoint_set.len_of_set(0)? == 2);
    /// assert!(disjoint_set.len_of_set(1)? == 1);
    /// assert!(disjoint_set.len_of_set(2)? == 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn len_of_set(&self, index: usize) -> Result<usize> {
        let root = self.root(index)?;

        Ok(self.meta.size(root))
    }

    /// Returns `true` if `index` is the only element of its set.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` is out of bounds.
    #[inline]
    pub fn is_singleton(&self, index: usize) -> Result<bool> {
        Ok(self.len_of_set(index)? == 1)
    }

    /// Returns the elements in the set of `index` in ascending order.
    ///
    /// This takes `O(n α(n))` time.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate bitonic_union;
    /// #
    /// # fn main() -> Result<(), bitonic_union::Error> {
    /// let disjoint_set = disjoint_set![6; 5 => 1, 3 => 5]?;
    ///
    /// assert!(disjoint_set.members(3)? == vec![1, 3, 5]);
    /// assert!(disjoint_set.members(0)? == vec![0]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn members(&self, index: usize) -> Result<Vec<usize>> {
        let root = self.root(index)?;

        Ok((0 .. self.len()).filter(|&member| self.find(member) == root).collect())
    }

    /// Returns an iterator over all sets.
    ///
    /// Each set is given as its elements in ascending order.
    /// The sets are ordered by their smallest element.
    /// The roots are resolved when this method is called, which takes `O(n α(n))` time,
    /// afterwards each set is produced in time linear in its size.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate bitonic_union;
    /// #
    /// # fn main() -> Result<(), bitonic_union::Error> {
    /// let disjoint_set = disjoint_set![5; 3 => 0, 4 => 2]?;
    /// let sets: Vec<Vec<usize>> = disjoint_set.all_sets().collect();
    ///
    /// assert!(sets == vec![vec![0, 3], vec![1], vec![2, 4]]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn all_sets(&self) -> AllSets {
        let len = self.len();
        let roots: Vec<usize> = (0 .. len).map(|index| self.find(index)).collect();

        // We chain the elements of each set from small to large, `len` ends a chain.
        let mut head = vec![len; len];
        let mut next = vec![len; len];
        for index in (0 .. len).rev() {
            next[index] = head[roots[index]];
            head[roots[index]] = index;
        }

        AllSets {
            roots,
            head,
            next,
            done: bit_vec![false; len],
            range: 0 .. len,
        }
    }

    /// Joins the sets of two valid indices.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    pub(crate) fn merge(&mut self, first_index: usize, second_index: usize) -> bool {
        let i = self.find(first_index);
        let j = self.find(second_index);

        if i == j {
            return false
        }

        let size_i = self.meta.size(i);
        let size_j = self.meta.size(j);

        // We add to the tree with the largest size.
        let (child, root) = match Ord::cmp(&size_i, &size_j) {
            Ordering::Less => (i, j),
            Ordering::Equal | Ordering::Greater => (j, i),
        };

        let max = usize::max(self.meta.max(i), self.meta.max(j));

        self.meta.set_parent(child, root);
        self.meta.set_size(root, size_i + size_j);
        self.meta.set_max(root, max);
        self.count -= 1;

        trace!("joined root {} under root {}, {} sets left", child, root, self.count);

        true
    }

    /// Gives the root of a valid index.
    ///
    /// Each element on the way to the root is pointed to its grandparent.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    pub(crate) fn find(&self, mut index: usize) -> usize {
        loop {
            let parent = self.meta.parent(index);

            // If the node is its own parent we have found the root.
            if parent == index {
                return index
            }

            let grandparent = self.meta.parent(parent);
            self.meta.set_parent(index, grandparent);
            index = grandparent;
        }
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }
}

impl std::fmt::Debug for DisjointSet {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.debug_list().entries(self.all_sets()).finish()
    }
}

/// Two `DisjointSet`s are equal when they partition the same universe in the same sets,
/// regardless of the shape of their trees.
impl PartialEq for DisjointSet {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() || self.count != other.count {
            return false
        }

        // We map the roots of self to the roots of other.
        // With the same amount of sets on both sides a consistent map is a bijection.
        let mut map = std::collections::HashMap::with_capacity(self.count);

        for i in 0 .. self.len() {
            let self_root = self.find(i);
            let other_root = other.find(i);

            if let Some(&root) = map.get(&self_root) {
                // If we have seen this root we check if we have the same map.
                if root != other_root {
                    return false
                }
            } else {
                // If we have not seen this root we add the relation to the map.
                map.insert(self_root, other_root);
            }
        }

        true
    }
}

impl Eq for DisjointSet {}

#[cfg(feature = "proptest")]
impl Arbitrary for DisjointSet {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_params: Self::Parameters) -> Self::Strategy {
        (1usize .. 64).prop_flat_map(|len| {
            (Just(len), proptest::collection::vec((0 .. len, 0 .. len), 0 .. 2 * len))
        }).prop_map(|(len, pairs)| {
            let mut disjoint_set = Self::singletons(len);

            for (first, second) in pairs {
                disjoint_set.merge(first, second);
            }

            disjoint_set
        }).boxed()
    }
}

/// An iterator over all sets in a `DisjointSet`.
///
/// This struct is created by the [`all_sets`] method on [`DisjointSet`].
/// See its documentation for more information.
///
/// [`all_sets`]: struct.DisjointSet.html#method.all_sets
/// [`DisjointSet`]: struct.DisjointSet.html
#[derive(Clone, Debug)]
pub struct AllSets {
    /// The root of every element.
    roots: Vec<usize>,
    /// The smallest element of the set of each root.
    head: Vec<usize>,
    /// The next larger element in the same set.
    next: Vec<usize>,
    /// The roots of the sets we have returned.
    done: bit_vec::BitVec,
    range: ops::Range<usize>,
}

impl AllSets {
    /// Collect the set that `root` represents and mark it as done.
    fn take(&mut self, root: usize) -> Vec<usize> {
        let end = self.roots.len();
        let mut set = Vec::new();
        let mut current = self.head[root];

        while current != end {
            set.push(current);
            current = self.next[current];
        }

        self.done.set(root, true);

        set
    }
}

impl Iterator for AllSets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        // We keep going until we find a set we have not returned yet.
        loop {
            let index = self.range.next()?;
            let root = self.roots[index];

            if !self.done[root] {
                return Some(self.take(root))
            }
        }
    }
}

impl DoubleEndedIterator for AllSets {
    fn next_back(&mut self) -> Option<Vec<usize>> {
        // We keep going until we find a set we have not returned yet.
        loop {
            let index = self.range.next_back()?;
            let root = self.roots[index];

            if !self.done[root] {
                return Some(self.take(root))
            }
        }
    }
}

impl FusedIterator for AllSets {}
