//! This crate exposes a generic Binary Search Tree (BST) container: a set of unique, ordered
//! elements supporting insert, find, and remove, three depth-first traversals, and a text diagram
//! of the tree's shape.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the number of `Node`s
//! on the longest path from the root `Node` to a leaf `Node`). This tree does not rebalance
//! itself, so the height depends entirely on insertion order: random insertions tend towards
//! `O(lg N)` while sorted insertions build a chain of height `N`. BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Elements
//!
//! Elements need a total order ([`Ord`]) to be stored and searched for, and a text form
//! ([`Display`][std::fmt::Display]) to appear in listings and structure diagrams. Elements that
//! compare equal are the same element: inserting one that's already present does nothing.
//!
//! # Examples
//!
//! ```
//! use bst_container::{Order, Tree};
//!
//! let mut tree = Tree::new();
//! for n in &[5, 3, 8, 1, 4] {
//!     tree.insert(*n);
//! }
//!
//! assert_eq!(tree.in_order(), Some(vec![&1, &3, &4, &5, &8]));
//! assert_eq!(tree.height(), 3);
//!
//! // `3` has two children so its predecessor `1` takes its place.
//! assert!(tree.remove(&3));
//! assert_eq!(tree.traverse(Order::Pre), Some(vec![&5, &1, &4, &8]));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod structure;
pub mod traversal;
pub mod tree;

pub use structure::Structure;
pub use traversal::{Listing, Order};
pub use tree::Tree;
