//! Unbalanced binary search tree with a balanced bulk construction.
//!
//! Values smaller than a node go left, everything else (including equal
//! values) goes right, so duplicates are kept rather than overwritten.
//! The tree never rebalances. For distinct values `Tree::build_balanced`
//! bounds the height to `floor(lg n) + 1`. Duplicates break that bound: an
//! equal value from the left half is sent right of its twin, so a run of `k`
//! equal values forms a right spine of length `k`, and later inserts can grow
//! one as well. All traversals are iterative, so even a degenerate tree does
//! not recurse per level.

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

#[derive(Debug)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Tree { root: None, len: 0 }
    }

    /// Number of stored values, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&T> {
        self.root.as_ref().map(|n| &n.value)
    }

    /// Number of nodes on the longest root-to-leaf path. A single node has height 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> = self.root.iter().map(|n| (&**n, 1)).collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.iter().map(|n| (&**n, depth + 1)));
            stack.extend(node.right.iter().map(|n| (&**n, depth + 1)));
        }
        height
    }

    /// In-order iteration, i.e. values in non-decreasing order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: vec![] };
        iter.push_left(self.root.as_deref());
        iter
    }
}

impl<T: PartialOrd> Tree<T> {
    /// Insert `value`, descending left when it is strictly smaller than a node
    /// and right otherwise.
    pub fn insert(&mut self, value: T) {
        self.len += 1;
        let mut node = match self.root {
            Some(ref mut root) => root,
            None => {
                self.root = Some(Node::boxed(value));
                return;
            }
        };
        loop {
            let next = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
            match next {
                Some(child) => node = child,
                None => {
                    *next = Some(Node::boxed(value));
                    return;
                }
            }
        }
    }

    /// Whether `target` is stored in the tree.
    pub fn search(&self, target: &T) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            if *target == node.value {
                return true;
            }
            link = if *target < node.value {
                &node.left
            } else {
                &node.right
            };
        }
        false
    }
}

impl<T: PartialOrd + Clone> Tree<T> {
    /// Build a tree from values sorted in ascending order.
    ///
    /// The midpoint of the remaining range is inserted first, followed by the
    /// midpoints of its left and right halves. The height is minimal when the
    /// values are distinct; `n` equal values still end up in a chain of
    /// height `n`. Recursion depth is logarithmic in the input length either
    /// way.
    pub fn build_balanced(sorted: &[T]) -> Self {
        fn recurse<T: PartialOrd + Clone>(tree: &mut Tree<T>, vals: &[T]) {
            if vals.is_empty() {
                return;
            }
            let mid = (vals.len() - 1) / 2;
            tree.insert(vals[mid].clone());
            recurse(tree, &vals[..mid]);
            recurse(tree, &vals[mid + 1..]);
        }

        let mut tree = Tree::new();
        recurse(&mut tree, sorted);
        tree
    }
}

impl<T> Drop for Tree<T> {
    // Unlink nodes one at a time; the default drop would recurse once per level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: PartialOrd> FromIterator<T> for Tree<T> {
    /// Insert values in iteration order, without any balancing.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Tree::new();
        for v in iter {
            tree.insert(v);
        }
        tree
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    fn sample() -> Tree<i32> {
        [50, 30, 70, 20, 40, 60, 80].into_iter().collect()
    }

    #[test]
    fn insert_root() {
        let mut tree = Tree::new();
        tree.insert(10);
        assert_eq!(tree.root(), Some(&10));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn search_sample() {
        let tree = sample();
        assert_eq!(tree.root(), Some(&50));
        assert!(tree.search(&60));
        assert!(!tree.search(&99));
        assert!(tree.search(&20));
        assert!(tree.search(&80));
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn search_empty() {
        let tree = Tree::<i32>::new();
        assert!(tree.is_empty());
        assert!(!tree.search(&5));
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.iter().next(), None);
    }

    #[test]
    fn duplicates_go_right() {
        let mut tree = sample();
        tree.insert(70);
        tree.insert(30);
        assert!(tree.search(&70));
        assert!(tree.search(&30));
        assert_eq!(tree.len(), 9);
        assert_eq!(
            tree.iter().copied().collect_vec(),
            vec![20, 30, 30, 40, 50, 60, 70, 70, 80]
        );
    }

    #[test]
    fn balanced_height() {
        let vals = (0..1023).collect_vec();
        let tree = Tree::build_balanced(&vals);
        assert_eq!(tree.len(), 1023);
        assert_eq!(tree.height(), 10);
        assert_eq!(tree.root(), Some(&511));
        assert!(vals.iter().all(|v| tree.search(v)));
        assert!(!tree.search(&-1));
        assert!(!tree.search(&1023));
    }

    #[test]
    fn balanced_with_duplicates() {
        let vals = vec![1, 1, 1, 2, 2, 3, 5, 5, 8];
        let tree = Tree::build_balanced(&vals);
        assert_eq!(tree.iter().copied().collect_vec(), vals);
        assert!(tree.height() <= 5);
        assert!(!tree.search(&4));
    }

    #[test]
    fn balanced_all_equal_is_a_chain() {
        let vals = vec![7; 40];
        let tree = Tree::build_balanced(&vals);
        assert_eq!(tree.len(), 40);
        assert_eq!(tree.height(), 40);
        assert!(tree.search(&7));
        assert!(!tree.search(&6));
    }

    #[test]
    fn balanced_empty_and_single() {
        assert!(Tree::<u8>::build_balanced(&[]).is_empty());
        let tree = Tree::build_balanced(&["only"]);
        assert_eq!(tree.root(), Some(&"only"));
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn degenerate_tree_drops() {
        // Ascending inserts build a right spine as deep as the input is long.
        let tree: Tree<u32> = (0..10_000).collect();
        assert_eq!(tree.height(), 10_000);
        assert!(tree.search(&9_999));
        drop(tree);
    }

    #[test]
    fn floats() {
        let tree = Tree::build_balanced(&[0.5, 1.25, 2.0, 7.75]);
        assert!(tree.search(&2.0));
        assert!(!tree.search(&2.5));
        assert!(!tree.search(&f64::NAN));
    }
}
