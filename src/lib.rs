//! This crate exposes [`OrderedTree`], an ordered set of distinct elements stored in a Binary
//! Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, search, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element
//! and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Together these mean no two nodes hold equal elements. Searching for an
//! element takes `O(height)` (where `height` is defined as the longest path from
//! the root `Node` to a leaf `Node`). This tree does no rebalancing, so the height
//! depends on insertion order: anywhere from `O(lg N)` to `N` for already sorted input.
//! BSTs also naturally support sorted iteration by visiting the left subtree, then
//! the subtree root, then the right subtree; see [`OrderedTree::inorder`].
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree: OrderedTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert_eq!(tree.len(), 7);
//! assert!(tree.search(&4));
//!
//! assert!(tree.delete(&5));
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 3, 4, 7, 8, 9]);
//! assert_eq!(tree.breadth_first().copied().collect::<Vec<_>>(), [4, 3, 8, 1, 7, 9]);
//! ```
//!
//! ## Logging
//!
//! Structural edits emit `trace`-level [`tracing`] events. The crate never installs a
//! subscriber.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod ordered;
pub mod traversal;

pub use ordered::{OrderedTree, TreeNode};
pub use traversal::{BreadthFirst, Inorder, Postorder, Preorder};
