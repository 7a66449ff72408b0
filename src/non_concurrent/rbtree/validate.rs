use std::cmp::Ordering;

use super::compare::Comparator;
use super::lookup::black_height;
use super::node::{Link, Side};


/// A red-black property that doesn't hold.
///
/// Seeing one of these means the insertion or removal code is broken; there is
/// nothing a caller can do to recover from it. Depths count from the root at 0.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("root node is red")]
    RedRoot,

    #[error("red node at depth {depth} has a red child")]
    RedRed { depth: usize },

    #[error("black height {found} at depth {depth} doesn't match the expected {expected}")]
    BlackHeight { expected: usize, found: usize, depth: usize },

    #[error("key at depth {depth} is out of order with one of its ancestors")]
    Ordering { depth: usize },

    #[error("tree holds {counted} nodes but records a length of {recorded}")]
    LenMismatch { counted: usize, recorded: usize },
}

/// Audits the whole tree at `root` in O(n).
///
/// On success, returns the black height of the tree (nil positions don't count).
pub(crate) fn validate<K, C: Comparator<K>>(root: &Link<K>, len: usize, cmp: &C) -> Result<usize, InvariantViolation> {
    if root.as_deref().is_some_and(|root| root.is_red()) {
        return Err(InvariantViolation::RedRoot)
    }

    // every path has to match the leftmost one
    let expected = black_height(root);

    let mut audit = Audit { cmp, expected, counted: 0 };
    audit.visit(root, None, None, 0, 0)?;

    if audit.counted != len {
        return Err(InvariantViolation::LenMismatch { counted: audit.counted, recorded: len })
    }
    Ok(expected)
}

struct Audit<'a, C> {
    cmp: &'a C,
    expected: usize,
    counted: usize,
}

impl<C> Audit<'_, C> {
    /// `blacks` is the number of black nodes strictly above `link`.
    fn visit<K>(&mut self, link: &Link<K>, low: Option<&K>, high: Option<&K>, depth: usize, blacks: usize) -> Result<(), InvariantViolation>
    where C: Comparator<K> {
        let Some(node) = link.as_deref() else {
            if blacks != self.expected {
                return Err(InvariantViolation::BlackHeight { expected: self.expected, found: blacks, depth })
            }
            return Ok(())
        };
        self.counted += 1;

        let above_low = low.is_none_or(|low| self.cmp.compare(&node.key, low) == Ordering::Greater);
        let below_high = high.is_none_or(|high| self.cmp.compare(&node.key, high) == Ordering::Less);
        if !above_low || !below_high {
            return Err(InvariantViolation::Ordering { depth })
        }

        if node.is_red() && (node.left().is_some_and(|n| n.is_red()) || node.right().is_some_and(|n| n.is_red())) {
            return Err(InvariantViolation::RedRed { depth })
        }

        let blacks = blacks + usize::from(!node.is_red());
        self.visit(&node[Side::Left], low, Some(&node.key), depth + 1, blacks)?;
        self.visit(&node[Side::Right], Some(&node.key), high, depth + 1, blacks)
    }
}
