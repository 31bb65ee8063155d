//! Depth-first traversals of a [`Tree`].
//!
//! Collecting the elements and printing them are kept apart: [`Tree::traverse`] and friends hand
//! back the elements in order, [`Listing`] renders them as text, and the `*_traversal` methods
//! print that text to standard output.
//!
//! # Examples
//!
//! ```
//! use bst_container::{Order, Tree};
//!
//! let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
//!
//! assert_eq!(tree.traverse(Order::Pre), Some(vec![&2, &1, &3]));
//! assert_eq!(tree.listing(Order::In).to_string(), "1\n2\n3\n\n");
//!
//! // An empty tree says so instead of producing an empty sequence.
//! let empty: Tree<i32> = Tree::new();
//! assert_eq!(empty.traverse(Order::In), None);
//! assert_eq!(empty.listing(Order::In).to_string(), "Tree is empty\n");
//! ```

use std::fmt;

use crate::tree::{Node, Tree};

/// The position of a node relative to its subtrees when visiting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. This visits elements in ascending
    /// order.
    In,
    /// The left subtree, then the right subtree, then the node.
    Post,
}

impl<T> Tree<T> {
    /// Collects references to every element in the given order. Returns `None` when the tree is
    /// empty.
    pub fn traverse(&self, order: Order) -> Option<Vec<&T>> {
        let root = self.root()?;
        let mut items = Vec::new();
        root.collect(order, &mut items);
        Some(items)
    }

    /// Shorthand for [`Tree::traverse`] with [`Order::Pre`].
    pub fn pre_order(&self) -> Option<Vec<&T>> {
        self.traverse(Order::Pre)
    }

    /// Shorthand for [`Tree::traverse`] with [`Order::In`].
    pub fn in_order(&self) -> Option<Vec<&T>> {
        self.traverse(Order::In)
    }

    /// Shorthand for [`Tree::traverse`] with [`Order::Post`].
    pub fn post_order(&self) -> Option<Vec<&T>> {
        self.traverse(Order::Post)
    }

    /// The traversal in the given order, ready to be displayed.
    pub fn listing(&self, order: Order) -> Listing<'_, T> {
        Listing {
            items: self.traverse(order),
        }
    }
}

impl<T> Tree<T>
where
    T: fmt::Display,
{
    /// Prints the pre-order [`Listing`] to standard output.
    pub fn pre_order_traversal(&self) {
        print!("{}", self.listing(Order::Pre));
    }

    /// Prints the in-order [`Listing`] to standard output.
    pub fn in_order_traversal(&self) {
        print!("{}", self.listing(Order::In));
    }

    /// Prints the post-order [`Listing`] to standard output.
    pub fn post_order_traversal(&self) {
        print!("{}", self.listing(Order::Post));
    }
}

impl<T> Node<T> {
    fn collect<'a>(&'a self, order: Order, items: &mut Vec<&'a T>) {
        if order == Order::Pre {
            items.push(&self.item);
        }
        if let Some(left) = self.left() {
            left.collect(order, items);
        }
        if order == Order::In {
            items.push(&self.item);
        }
        if let Some(right) = self.right() {
            right.collect(order, items);
        }
        if order == Order::Post {
            items.push(&self.item);
        }
    }
}

/// The text form of a traversal: one element per line followed by a blank line, or
/// `Tree is empty` on its own line when there is nothing to list.
pub struct Listing<'a, T> {
    items: Option<Vec<&'a T>>,
}

impl<'a, T> Listing<'a, T> {
    /// The elements being listed, or `None` for an empty tree.
    pub fn items(&self) -> Option<&[&'a T]> {
        self.items.as_deref()
    }
}

impl<T> fmt::Display for Listing<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(items) = &self.items else {
            return writeln!(f, "Tree is empty");
        };

        for item in items {
            writeln!(f, "{}", item)?;
        }
        writeln!(f)
    }
}
