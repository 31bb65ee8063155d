//! A level-by-level text diagram of a [`Tree`].
//!
//! Every row reserves a slot for each position the level could hold in a full tree, filled or
//! not. Slot spacing only depends on the level, never on how wide the elements render, so the
//! diagram lines up for elements up to three characters wide.
//!
//! # Examples
//!
//! ```
//! use bst_container::Tree;
//!
//! let tree: Tree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
//!
//! assert_eq!(
//!     tree.structure('A').to_string(),
//!     "BST ID A:\n       5\n   3     8\n 1 4 --- ---\n\n"
//! );
//! ```

use std::fmt;

use crate::tree::{Node, Tree};

/// Printed in place of a position with no node.
pub const EMPTY_POSITION: &str = "---";

impl<T> Tree<T> {
    /// The structure diagram of this tree under a heading naming it `label`.
    pub fn structure<L>(&self, label: L) -> Structure<'_, T, L> {
        Structure { tree: self, label }
    }
}

impl<T> Tree<T>
where
    T: fmt::Display,
{
    /// Prints the [`Structure`] diagram to standard output.
    pub fn show_structure<L>(&self, label: L)
    where
        L: fmt::Display,
    {
        print!("{}", self.structure(label));
    }
}

/// The structure diagram of a tree: a `BST ID <label>:` heading, one line per level from the
/// root down, then a blank line.
pub struct Structure<'a, T, L> {
    tree: &'a Tree<T>,
    label: L,
}

impl<T, L> fmt::Display for Structure<'_, T, L>
where
    T: fmt::Display,
    L: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BST ID {}:", self.label)?;

        let height = self.tree.height();
        for row in (1..=height).rev() {
            write_row(f, self.tree.root(), row, height, true)?;
            writeln!(f)?;
        }

        writeln!(f)
    }
}

/// Writes the slots of `row` found under the position at `level`. Levels count down from the
/// tree's height at the root to 1 at the deepest leaves.
fn write_row<T>(
    f: &mut fmt::Formatter<'_>,
    node: Option<&Node<T>>,
    row: usize,
    level: usize,
    leftmost: bool,
) -> fmt::Result
where
    T: fmt::Display,
{
    if level == row {
        let spaces = if leftmost {
            pow2(level) - 1
        } else {
            pow2(level + 1) - 3
        };
        write!(f, "{:width$}", "", width = spaces)?;

        return match node {
            Some(node) => write!(f, "{}", node.item),
            None => f.write_str(EMPTY_POSITION),
        };
    }

    // Nothing below `row` gets printed on this pass.
    if level > row {
        let (left, right) = match node {
            Some(node) => (node.left(), node.right()),
            None => (None, None),
        };
        write_row(f, left, row, level - 1, leftmost)?;
        write_row(f, right, row, level - 1, false)?;
    }

    Ok(())
}

fn pow2(exponent: usize) -> usize {
    2usize.saturating_pow(exponent as u32)
}
