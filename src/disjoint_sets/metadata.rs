use std::cell::Cell;

/// The bookkeeping a `DisjointSet` keeps for its elements.
///
/// This is stored as three parallel columns indexed by element.
/// They are allocated once and never change length.
#[derive(Clone, Debug)]
pub(crate) struct Metadata {
    /// The parent of each element in its sets tree.
    /// These form an upside down tree where each child has the index of its parent.
    /// A `Cell` so that lookups through a shared reference can compress paths.
    parent: Box<[Cell<usize>]>,
    /// The amount of elements in the tree.
    /// Only meaningful for roots.
    size: Box<[usize]>,
    /// The largest element in the tree.
    /// Only meaningful for roots.
    max: Box<[usize]>,
}

impl Metadata {
    /// Create the `Metadata` of `len` singleton sets.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            parent: (0 .. len).map(Cell::new).collect(),
            size: vec![1; len].into_boxed_slice(),
            max: (0 .. len).collect(),
        }
    }

    /// Return the amount of elements.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.parent.len()
    }

    /// Return the parent of `index`.
    #[inline]
    pub(crate) fn parent(&self, index: usize) -> usize {
        self.parent[index].get()
    }

    /// Set the parent of `index`.
    #[inline]
    pub(crate) fn set_parent(&self, index: usize, value: usize) {
        self.parent[index].set(value);
    }

    /// Return the size of the tree rooted at `root`.
    #[inline]
    pub(crate) fn size(&self, root: usize) -> usize {
        self.size[root]
    }

    /// Set the size of the tree rooted at `root`.
    #[inline]
    pub(crate) fn set_size(&mut self, root: usize, value: usize) {
        self.size[root] = value;
    }

    /// Return the largest element of the tree rooted at `root`.
    #[inline]
    pub(crate) fn max(&self, root: usize) -> usize {
        self.max[root]
    }

    /// Set the largest element of the tree rooted at `root`.
    #[inline]
    pub(crate) fn set_max(&mut self, root: usize, value: usize) {
        self.max[root] = value;
    }
}
