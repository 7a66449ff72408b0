//! Human-readable dumps of a tree, for debugging and test failure output.
//!
//! Nothing in here is needed for the tree to work; it only reads the tree
//! through the same [`Visitor`] walk any other consumer would use.

use std::fmt::{self, Display, Write};

use super::node::{Color, Node};
use super::traverse::Visitor;
use super::RBTree;


/// Draws the shape of `tree`, one node per line, indented two spaces per level.
///
/// Children are listed left before right, and each key carries its color:
///
/// ```text
/// 20B
///   10B
///     15R
///   30B
/// ```
pub fn render<K: Display, C>(tree: &RBTree<K, C>) -> String {
    let mut shape = Shape { out: String::new(), depth: 0 };
    tree.traverse(&mut shape);
    if shape.out.is_empty() {
        shape.out.push_str("(empty)\n");
    }
    shape.out
}

struct Shape {
    out: String,
    depth: usize,
}

impl<K: Display> Visitor<K> for Shape {
    fn pre(&mut self, node: &Node<K>) {
        let color = match node.color() {
            Color::Red => 'R',
            Color::Black => 'B',
        };
        writeln!(self.out, "{:indent$}{}{color}", "", node.key(), indent = self.depth * 2)
            .expect("writing to a String can't fail");
        self.depth += 1;
    }

    fn post(&mut self, _node: &Node<K>) {
        self.depth -= 1;
    }
}

/// Flattened in-order key list, e.g. `[10, 20, 25]`.
impl<K: Display, C> Display for RBTree<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, key) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}")?;
        }
        f.write_str("]")
    }
}

impl<K: fmt::Debug, C> fmt::Debug for RBTree<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
