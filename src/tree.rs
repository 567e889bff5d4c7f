//! An unbalanced BST of unique keys. Keys are stored exactly where recursive
//! descent first finds an empty child slot and nothing is ever rotated or
//! removed, so the shape of the tree is fully determined by insertion order.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&5));
//!
//! for key in [5, 3, 8, 1, 4] {
//!     tree.insert(key);
//! }
//!
//! // Inserting an existing key leaves the tree alone.
//! assert!(!tree.insert(4));
//!
//! assert!(tree.contains(&4));
//! assert!(!tree.contains(&9));
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
//! assert_eq!(tree.iter().rev().copied().collect::<Vec<_>>(), [8, 5, 4, 3, 1]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

type Link<K> = Option<Box<Node<K>>>;

/// A single key with the two subtrees it exclusively owns.
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }
}

/// A Binary Search Tree holding a set of unique keys. Supports insertion,
/// membership tests, and sorted iteration in either direction.
///
/// The tree is never rebalanced. Inserting keys in sorted order builds a
/// chain whose height equals its length, which makes every operation linear.
/// All operations walk the tree with a loop or an explicit stack so that even
/// such a chain never exhausts the call stack.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        // Detach children before each node drops so dropping a degenerate tree
        // doesn't recurse once per level.
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `key` into the tree. Returns `true` if a new node was created
    /// and `false` if the key was already present, in which case the tree is
    /// left exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(10));
    /// assert!(!tree.insert(10));
    /// assert!(!tree.insert(10));
    ///
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&10]);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
        }

        *cursor = Some(Node::new_boxed(key));
        self.len += 1;
        true
    }

    /// Returns whether `key` has been inserted into the tree. An empty tree
    /// contains nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(!tree.contains(&1));
    ///
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }

        false
    }

    /// Returns an iterator over the keys in ascending order. The iterator is
    /// double ended, so `tree.iter().rev()` visits the keys in descending
    /// order. Each call starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let tree: Tree<_> = [2, 3, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &2, &3]);
    /// assert_eq!(tree.iter().rev().collect::<Vec<_>>(), [&3, &2, &1]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Returns an iterator over the keys in descending order. Shorthand for
    /// `self.iter().rev()`.
    pub fn iter_rev(&self) -> std::iter::Rev<Iter<'_, K>> {
        self.iter().rev()
    }

    /// The number of unique keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether anything has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An
    /// empty tree has a height of 0 and a single node has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let balanced: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let chain: Tree<_> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(balanced.height(), 2);
    /// assert_eq!(chain.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<K>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }

        height
    }

    /// The smallest key in the tree, if any.
    pub fn first(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// The largest key in the tree, if any.
    pub fn last(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A lazy in-order traversal of a [`Tree`]. Created by [`Tree::iter`].
///
/// Rather than recursing, each end of the traversal keeps a stack of the
/// nodes whose keys it hasn't yielded yet. Moving forward pops the next
/// smallest node and pushes the left spine of its right subtree; moving
/// backward mirrors that. Both ends share a count of keys left to yield, so
/// they never pass each other.
pub struct Iter<'a, K> {
    front: Vec<&'a Node<K>>,
    back: Vec<&'a Node<K>>,
    remaining: usize,
}

/// Manual implementation of `Clone` so iterators can be cloned even when `K` isn't `Clone`.
impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K> Iter<'a, K> {
    fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            front: Vec::new(),
            back: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter.push_right_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.front.push(n);
            node = n.left.as_deref();
        }
    }

    fn push_right_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.back.push(n);
            node = n.right.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> DoubleEndedIterator for Iter<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back.pop()?;
        self.push_right_spine(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeSet`.
    /// This way we can ensure that after a random smattering of inserts
    /// the tree agrees with the standard library at every step.
    fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>) -> bool
    where
        K: Ord + Clone,
    {
        ops.iter().all(|op| match op {
            Op::Insert(k) => tree.insert(k.clone()) == set.insert(k.clone()),
            Op::Contains(k) => tree.contains(k) == set.contains(k),
            Op::Iter => tree.iter().eq(set.iter()) && tree.iter().rev().eq(set.iter().rev()),
        })
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set) && tree.len() == set.len()
        }
    }

    quickcheck::quickcheck! {
        fn ascending_is_sorted_and_descending_is_its_reverse(xs: Vec<i32>) -> bool {
            let tree: Tree<_> = xs.iter().copied().collect();
            let ascending: Vec<_> = tree.iter().copied().collect();
            let mut descending: Vec<_> = tree.iter_rev().copied().collect();
            descending.reverse();

            ascending.windows(2).all(|w| w[0] < w[1]) && ascending == descending
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(*x);
            }

            xs.iter().all(|x| tree.contains(x))
        }
    }

    quickcheck::quickcheck! {
        fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
            let tree: Tree<_> = xs.iter().copied().collect();
            let added: BTreeSet<_> = xs.into_iter().collect();

            nots.iter().filter(|x| !added.contains(*x)).all(|x| !tree.contains(x))
        }
    }

    quickcheck::quickcheck! {
        fn inserting_twice_matches_inserting_once(xs: Vec<i8>) -> bool {
            let once: Tree<_> = xs.iter().copied().collect();
            let twice: Tree<_> = xs.iter().chain(xs.iter()).copied().collect();

            once.iter().eq(twice.iter()) && once.height() == twice.height()
        }
    }
}
