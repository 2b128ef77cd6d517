//! The search algorithms under test, and dispatch from `SearchAlgorithm`.
//!
//! Every algorithm reports an `Outcome`. Binary searches require the input to
//! be sorted ascending; this is not checked.

use std::ops::Range;

use serde::Serialize;

use crate::approach::SearchAlgorithm;
use crate::error::{Error, Result};
use crate::tree::Tree;

/// Result of a single search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Outcome {
    pub found: bool,
    /// Position of a matching element. Always `None` for tree lookups.
    pub index: Option<usize>,
}

impl Outcome {
    pub const MISSING: Outcome = Outcome {
        found: false,
        index: None,
    };

    pub fn at(index: usize) -> Self {
        Outcome {
            found: true,
            index: Some(index),
        }
    }

    /// Found, without a position.
    pub fn present(found: bool) -> Self {
        Outcome { found, index: None }
    }
}

impl From<Option<usize>> for Outcome {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Outcome::MISSING, Outcome::at)
    }
}

/// Index of the first element equal to `target`.
pub fn linear_search<T: PartialEq>(vals: &[T], target: &T) -> Outcome {
    vals.iter().position(|v| v == target).into()
}

// Inclusive bounds `[left, right]` are kept as the half-open `left..right + 1`
// so that an empty range never underflows.
pub fn binary_search_iterative<T: PartialOrd>(vals: &[T], target: &T) -> Outcome {
    let mut l = 0;
    let mut r = vals.len();
    while l < r {
        let m = (l + r - 1) / 2;
        let v = &vals[m];
        if v == target {
            return Outcome::at(m);
        } else if v < target {
            l = m + 1;
        } else {
            r = m;
        }
    }
    Outcome::MISSING
}

pub fn binary_search_recursive<T: PartialOrd>(vals: &[T], target: &T) -> Outcome {
    binary_search_recursive_in(vals, target, 0..vals.len())
}

/// Recursive binary search restricted to `bounds`, clamped to the slice.
pub fn binary_search_recursive_in<T: PartialOrd>(
    vals: &[T],
    target: &T,
    bounds: Range<usize>,
) -> Outcome {
    let Range { start: l, end: r } = bounds;
    let r = r.min(vals.len());
    if l >= r {
        return Outcome::MISSING;
    }
    let m = (l + r - 1) / 2;
    let v = &vals[m];
    if v == target {
        Outcome::at(m)
    } else if v < target {
        binary_search_recursive_in(vals, target, m + 1..r)
    } else {
        binary_search_recursive_in(vals, target, l..m)
    }
}

pub fn bst_search<T: PartialOrd>(tree: &Tree<T>, target: &T) -> Outcome {
    Outcome::present(tree.search(target))
}

/// What a search algorithm runs on.
#[derive(Debug)]
pub enum Container<'a, T> {
    List(&'a [T]),
    Tree(&'a Tree<T>),
}

// Derives would require `T: Clone`.
impl<T> Clone for Container<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Container<'_, T> {}

impl<T> Container<'_, T> {
    pub fn kind(&self) -> &'static str {
        match self {
            Container::List(_) => "list",
            Container::Tree(_) => "tree",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Container::List(vals) => vals.len(),
            Container::Tree(tree) => tree.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SearchAlgorithm {
    /// Run one search. List algorithms need a list and `BstSearch` needs a tree.
    pub fn search<T: PartialOrd>(self, container: Container<'_, T>, target: &T) -> Result<Outcome> {
        Ok(match (self, container) {
            (SearchAlgorithm::LinearSearch, Container::List(vals)) => linear_search(vals, target),
            (SearchAlgorithm::BinarySearchIterative, Container::List(vals)) => {
                binary_search_iterative(vals, target)
            }
            (SearchAlgorithm::BinarySearchRecursive, Container::List(vals)) => {
                binary_search_recursive(vals, target)
            }
            (SearchAlgorithm::BstSearch, Container::Tree(tree)) => bst_search(tree, target),
            (algorithm, container) => return Err(algorithm.incompatible(container)),
        })
    }

    pub(crate) fn incompatible<T>(self, container: Container<'_, T>) -> Error {
        Error::IncompatibleContainer {
            algorithm: self,
            container: container.kind(),
        }
    }
}
