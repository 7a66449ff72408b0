use std::cmp::Ordering;
use std::mem;

use log::trace;

use super::compare::Comparator;
use super::node::{is_red, paint, Color, Link, Node, Side};
use super::rotate::rotate;


/// What came out of a subtree, and whether that subtree is now one black node short
/// on the path the removed node used to sit on.
pub(crate) struct Removed<K> {
    pub key: K,
    pub short: bool,
}

/// Removes the node matching `key` from the subtree at `link`.
///
/// Returns `None` (and leaves the subtree alone) if there is no such node.
pub(crate) fn remove<K, C: Comparator<K>>(link: &mut Link<K>, key: &K, cmp: &C) -> Option<Removed<K>> {
    let ordering = cmp.compare(key, &link.as_deref()?.key);
    let side = match ordering {
        Ordering::Less => Side::Left,
        Ordering::Greater => Side::Right,
        Ordering::Equal => return remove_here(link),
    };

    let node = link.as_deref_mut()?;
    let mut removed = remove(&mut node[side], key, cmp)?;
    if removed.short {
        removed.short = repair(link, side);
    }
    Some(removed)
}

/// Removes the outermost node on `side` of the subtree at `link`:
/// the minimum for [`Side::Left`], the maximum for [`Side::Right`].
pub(crate) fn remove_edge<K>(link: &mut Link<K>, side: Side) -> Option<Removed<K>> {
    let node = link.as_deref_mut()?;
    if node[side].is_none() {
        return splice(link)
    }

    let mut removed = remove_edge(&mut node[side], side)?;
    if removed.short {
        removed.short = repair(link, side);
    }
    Some(removed)
}

/// Removes the root of the subtree at `link`.
fn remove_here<K>(link: &mut Link<K>) -> Option<Removed<K>> {
    let node = link.as_deref_mut()?;
    if node[Side::Left].is_none() || node[Side::Right].is_none() {
        return splice(link)
    }

    // two children: steal the in-order successor's key and remove that node instead,
    // which has no left child by construction
    let successor = remove_edge(&mut node[Side::Right], Side::Left)?;
    let key = mem::replace(&mut node.key, successor.key);
    let short = successor.short && repair(link, Side::Right);
    Some(Removed { key, short })
}

/// Unlinks a node with at most one child, promoting that child into its place.
///
/// The node's storage is freed here.
fn splice<K>(link: &mut Link<K>) -> Option<Removed<K>> {
    let mut node = link.take()?;
    debug_assert!(node[Side::Left].is_none() || node[Side::Right].is_none());

    let child = node[Side::Left].take().or_else(|| node[Side::Right].take());
    *link = child;

    // a red node costs no black height, and a red replacement can absorb the deficit
    let short = if node.is_red() {
        false
    } else if is_red(link) {
        paint(link, Color::Black);
        false
    } else {
        true
    };

    Some(Removed { key: node.key, short })
}

/// Repairs the subtree at `link` after its `side` subtree lost one black node.
///
/// Returns whether the deficit survives and has to be handled by the caller,
/// i.e. whether the whole subtree at `link` is now one black node short.
fn repair<K>(link: &mut Link<K>, side: Side) -> bool {
    match link.take() {
        Some(parent) => {
            let (parent, short) = rebalance(parent, side);
            *link = Some(parent);
            short
        }
        None => true,
    }
}

fn rebalance<K>(mut parent: Box<Node<K>>, side: Side) -> (Box<Node<K>>, bool) {
    let far = side.opposite();

    if is_red(&parent[side]) {
        trace!("remove: red replacement absorbs the deficit");
        paint(&mut parent[side], Color::Black);
        return (parent, false)
    }

    // the deficient side had at least one black node before, so the sibling exists
    let Some(sibling) = parent[far].as_deref() else {
        unreachable!("black-height invariant guarantees a sibling opposite a deficient subtree")
    };
    let sibling_red = sibling.is_red();
    let far_nephew_red = is_red(&sibling[far]);
    let near_nephew_red = is_red(&sibling[side]);

    if sibling_red {
        // make the sibling black by rotating it above the parent, then retry one level down
        trace!("remove: red sibling, rotating parent {:?}", side);
        let mut top = rotate(parent, side);
        top.color = Color::Black;
        let mut parent = match top[side].take() {
            Some(parent) => parent,
            None => unreachable!("rotation moves the parent under the sibling"),
        };
        parent.color = Color::Red;
        let (parent, short) = rebalance(parent, side);
        top[side] = Some(parent);
        return (top, short)
    }

    if !far_nephew_red && !near_nephew_red {
        trace!("remove: black sibling without red children, recoloring");
        paint(&mut parent[far], Color::Red);
        if parent.is_red() {
            parent.color = Color::Black;
            return (parent, false)
        }
        return (parent, true)
    }

    if !far_nephew_red {
        // near nephew only: rotate it above the sibling so that it sits on the far side
        trace!("remove: red near nephew, rotating sibling {:?}", far);
        if let Some(sibling) = parent[far].take() {
            let mut sibling = rotate(sibling, far);
            sibling.color = Color::Black;
            paint(&mut sibling[far], Color::Red);
            parent[far] = Some(sibling);
        }
    }

    trace!("remove: red far nephew, rotating parent {:?}", side);
    let color = parent.color;
    let mut top = rotate(parent, side);
    top.color = color;
    paint(&mut top[side], Color::Black);
    paint(&mut top[far], Color::Black);
    (top, false)
}
