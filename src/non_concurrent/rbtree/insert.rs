use std::cmp::Ordering;

use log::trace;

use super::compare::Comparator;
use super::node::{is_red, paint, Color, Link, Node, Side};
use super::rotate::rotate;


/// Inserts `key` below `link`, returning the new subtree root and whether a node was added.
///
/// The returned subtree may have a red root with a red child on its way back up;
/// that is repaired one level higher, by whichever call owns the grandparent.
/// The tree root itself is blackened by the caller.
pub(crate) fn insert<K, C: Comparator<K>>(link: Link<K>, key: K, cmp: &C) -> (Box<Node<K>>, bool) {
    let Some(mut node) = link else {
        return (Node::new(key), true)
    };

    let side = match cmp.compare(&key, &node.key) {
        Ordering::Less => Side::Left,
        Ordering::Greater => Side::Right,
        // first insert wins; the new key is dropped
        Ordering::Equal => return (node, false),
    };

    let (child, inserted) = insert(node[side].take(), key, cmp);
    node[side] = Some(child);

    if inserted {
        node = fix_red_red(node, side);
    }
    (node, inserted)
}

/// Repairs a red-red violation between `grandparent[side]` and one of its children.
///
/// `grandparent` is black whenever a violation is present, since its child was
/// already red before the insertion started.
fn fix_red_red<K>(mut grandparent: Box<Node<K>>, side: Side) -> Box<Node<K>> {
    let outer = match grandparent[side].as_deref() {
        Some(parent) if parent.is_red() => {
            if is_red(&parent[side]) {
                side
            } else if is_red(&parent[side.opposite()]) {
                side.opposite()
            } else {
                return grandparent
            }
        }
        _ => return grandparent,
    };

    if is_red(&grandparent[side.opposite()]) {
        // red uncle: push the blackness down a level and carry on further up
        trace!("insert: red uncle, recoloring");
        grandparent.color = Color::Red;
        paint(&mut grandparent[Side::Left], Color::Black);
        paint(&mut grandparent[Side::Right], Color::Black);
        return grandparent
    }

    if outer != side {
        // triangle: turn it into a line first
        trace!("insert: triangle, rotating parent {:?}", side);
        if let Some(parent) = grandparent[side].take() {
            grandparent[side] = Some(rotate(parent, side));
        }
    }

    trace!("insert: line, rotating grandparent {:?}", side.opposite());
    let mut top = rotate(grandparent, side.opposite());
    top.color = Color::Black;
    paint(&mut top[side.opposite()], Color::Red);
    top
}
