//! The errors returned by this crate.

use std::fmt;

/// Everything that can go wrong when searching a bitonic array or working with a
/// [`DisjointSet`].
///
/// Errors are detected before any state is changed, so a failed call leaves a
/// `DisjointSet` exactly as it was.
///
/// [`DisjointSet`]: disjoint_sets/disjoint_set/struct.DisjointSet.html
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The searched array is not bitonic.
    ///
    /// This is only noticed when the search visits the offending window, `index` is the
    /// middle element of that window.
    InvalidInput {
        /// Middle of the window that is neither ascending, descending nor a peak.
        index: usize,
    },
    /// An argument is outside of its domain, for example an empty universe.
    InvalidArgument(String),
    /// An element index is not part of the universe `0 .. len`.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Size of the universe.
        len: usize,
    },
}

/// A `Result` with this crate's [`Error`](enum.Error.html).
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput { index } => {
                write!(formatter, "array is not bitonic around index {}", index)
            },
            Error::InvalidArgument(message) => write!(formatter, "invalid argument: {}", message),
            Error::IndexOutOfRange { index, len } => write!(
                formatter,
                "index {} is out of range for a universe of {} elements",
                index,
                len,
            ),
        }
    }
}

impl std::error::Error for Error {}
