//! An owned, unbalanced BST. Every node is exclusively owned by the link that points at it (its
//! parent's child link or the tree's root link), so there is no sharing between trees and no
//! `unsafe` anywhere.
//!
//! # Examples
//!
//! ```
//! use bst_container::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(!tree.find(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.find(&1));
//!
//! // Inserting an equal element is rejected.
//! assert!(!tree.insert(1));
//!
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

/// An ownership link to a subtree. `None` marks the empty spot below a leaf.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree of unique elements. Nothing rebalances the tree so inserting sorted
/// elements produces a chain as tall as the number of elements.
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    /// Deep copies the tree node by node. The copy has the same shape as `self` and shares no
    /// nodes with it.
    fn clone(&self) -> Self {
        Self {
            root: self.root().map(Node::copy_boxed),
        }
    }

    /// Releases every node of `self` and then deep copies `source` into it.
    ///
    /// Assigning a tree to itself can't happen here: `tree.clone_from(&tree)` is rejected by the
    /// borrow checker.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.root = source.root().map(Node::copy_boxed);
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.in_order().into_iter().flatten())
            .finish()
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given element. Returns `false` (and leaves the tree untouched) if an equal
    /// element is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_container::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    ///
    /// assert_eq!(tree.in_order(), Some(vec![&1, &2]));
    /// ```
    pub fn insert(&mut self, item: T) -> bool
    where
        T: Ord,
    {
        match self.root.as_mut() {
            Some(root) => root.insert(item),
            None => {
                self.root = Some(Node::new_boxed(item));
                true
            }
        }
    }

    /// Returns `true` if an element equal to `item` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_container::Tree;
    ///
    /// let tree: Tree<_> = vec![5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.find(&3));
    /// assert!(!tree.find(&42));
    /// ```
    pub fn find(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.root().map_or(false, |root| root.find(item))
    }

    /// Removes the element equal to `item`. Returns `false` if the tree is empty or holds no such
    /// element.
    ///
    /// A node with two children takes over its in-order predecessor's element and the
    /// predecessor's node is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_container::Tree;
    ///
    /// let mut tree: Tree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert!(tree.remove(&3));
    /// assert!(!tree.remove(&99));
    ///
    /// assert_eq!(tree.in_order(), Some(vec![&1, &4, &5, &8]));
    /// ```
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: Ord,
    {
        if self.is_empty() {
            return false;
        }

        let removed = Node::remove(&mut self.root, item);

        if cfg!(debug_assertions) {
            if let Some(root) = self.root() {
                root.assert_ordered_children();
            }
        }

        removed
    }

    /// Releases every node, children before their parent, leaving the tree empty. Clearing an
    /// empty tree does nothing.
    ///
    /// This walks the tree with an explicit stack instead of recursing, so it is safe to call on
    /// degenerate trees of any height.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();

        while let Some(mut node) = stack.pop() {
            match node.left.take().or_else(|| node.right.take()) {
                // Revisit `node` once `child`'s subtree is gone.
                Some(child) => {
                    stack.push(node);
                    stack.push(child);
                }
                None => drop(node),
            }
        }
    }

    /// The number of nodes on the longest path from the root down to a leaf. An empty tree has a
    /// height of 0 and a single node has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_container::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.extend(1..=4);
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

/// A `Node` holds one element and the links to its two subtrees, either of which may be empty.
pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(item: T) -> Box<Self> {
        Box::new(Self {
            item,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn copy_boxed(&self) -> Box<Self>
    where
        T: Clone,
    {
        Box::new(Self {
            item: self.item.clone(),
            left: self.left().map(Self::copy_boxed),
            right: self.right().map(Self::copy_boxed),
        })
    }

    fn height(&self) -> usize {
        let left_height = self.left().map_or(0, Self::height);
        let right_height = self.right().map_or(0, Self::height);

        left_height.max(right_height) + 1
    }

    fn find(&self, item: &T) -> bool
    where
        T: Ord,
    {
        match item.cmp(&self.item) {
            Ordering::Less => self.left().map_or(false, |n| n.find(item)),
            Ordering::Equal => true,
            Ordering::Greater => self.right().map_or(false, |n| n.find(item)),
        }
    }

    fn insert(&mut self, item: T) -> bool
    where
        T: Ord,
    {
        let inserted = match item.cmp(&self.item) {
            Ordering::Less => match self.left.as_mut() {
                Some(left) => left.insert(item),
                None => {
                    self.left = Some(Self::new_boxed(item));
                    true
                }
            },
            Ordering::Equal => false,
            Ordering::Greater => match self.right.as_mut() {
                Some(right) => right.insert(item),
                None => {
                    self.right = Some(Self::new_boxed(item));
                    true
                }
            },
        };

        if cfg!(debug_assertions) {
            self.assert_ordered_children();
        }

        inserted
    }

    /// Removes `item` from the subtree owned by `link`, rewriting `link` itself when the node it
    /// points at goes away.
    fn remove(link: &mut Link<T>, item: &T) -> bool
    where
        T: Ord,
    {
        let Some(node) = link.as_mut() else {
            return false;
        };

        match item.cmp(&node.item) {
            Ordering::Less => Self::remove(&mut node.left, item),
            Ordering::Greater => Self::remove(&mut node.right, item),
            Ordering::Equal if node.left.is_some() && node.right.is_some() => {
                // The predecessor is the largest element of the left subtree. Moving it up keeps
                // everything on the left smaller and everything on the right larger.
                if let Some(predecessor) = Self::take_largest(&mut node.left) {
                    node.item = predecessor;
                }
                true
            }
            Ordering::Equal => {
                // Zero or one child: splice whatever is below into our parent's link.
                *link = node.left.take().or_else(|| node.right.take());
                true
            }
        }
    }

    /// Detaches the rightmost node of the subtree owned by `link` and returns its element. That
    /// node has no right child, so its left subtree takes its place.
    fn take_largest(link: &mut Link<T>) -> Option<T> {
        let node = link.as_mut()?;
        if node.right.is_some() {
            return Self::take_largest(&mut node.right);
        }

        let mut largest = link.take()?;
        *link = largest.left.take();
        Some(largest.item)
    }

    fn assert_ordered_children(&self)
    where
        T: Ord,
    {
        if let Some(left) = self.left() {
            assert!(self.item > left.item);
        }
        if let Some(right) = self.right() {
            assert!(self.item < right.item);
        }
    }
}
