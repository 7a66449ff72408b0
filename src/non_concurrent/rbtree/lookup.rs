use std::cmp::Ordering;

use super::compare::Comparator;
use super::node::{Link, Node, Side};


/// Binary search from `root` down to the node holding `key`.
///
/// Complexity: O(log(n))
pub(crate) fn find<'a, K, C: Comparator<K>>(root: &'a Link<K>, key: &K, cmp: &C) -> Option<&'a Node<K>> {
    let mut cursor = root.as_deref();
    while let Some(node) = cursor {
        cursor = match cmp.compare(key, &node.key) {
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
            Ordering::Equal => return Some(node),
        };
    }
    None
}

/// The outermost node on `side`: the minimum for [`Side::Left`], the maximum for [`Side::Right`].
pub(crate) fn edge<K>(root: &Link<K>, side: Side) -> Option<&Node<K>> {
    let mut node = root.as_deref()?;
    while let Some(next) = node.child(side) {
        node = next;
    }
    Some(node)
}

/// Number of nodes on the longest downward path.
pub(crate) fn height<K>(link: &Link<K>) -> usize {
    match link.as_deref() {
        Some(node) => 1 + height(&node[Side::Left]).max(height(&node[Side::Right])),
        None => 0,
    }
}

/// Black nodes on the leftmost path, which is every path's count in a valid tree.
pub(crate) fn black_height<K>(root: &Link<K>) -> usize {
    let mut count = 0;
    let mut cursor = root.as_deref();
    while let Some(node) = cursor {
        count += usize::from(!node.is_red());
        cursor = node.left();
    }
    count
}
