//! This crate exposes an ordered set built on a plain Binary Search Tree,
//! plus a small library-visitor report that shows it in use.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored keys. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores one key and may have up to
//! two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because the inequalities are strict, a key is stored at most once and
//! inserting it again does nothing. Searching takes `O(height)` where
//! `height` is the longest path from the root `Node` to a leaf `Node`.
//! [`tree::Tree`] never rebalances, so inserting keys in sorted order
//! produces a tree whose height is the number of keys. BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree (or the mirror image for descending order).
//!
//! ## Report
//!
//! [`report`] records the IDs of library visitors in a [`tree::Tree`] and
//! joins them against a [`registry::Registry`] of ages to produce a daily
//! summary. The `library-report` binary prints it.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod registry;
pub mod report;
pub mod tree;

#[cfg(test)]
mod test;
