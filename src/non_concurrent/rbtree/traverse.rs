use std::iter::FusedIterator;

use super::node::{Link, Node, Side};


/// Callbacks for a depth-first walk over a tree.
///
/// All three hooks see every node once; `pre` before either subtree, `in_order`
/// between them and `post` after both. Unused hooks can be left as the defaults.
pub trait Visitor<K> {
    fn pre(&mut self, _node: &Node<K>) {}
    fn in_order(&mut self, _node: &Node<K>) {}
    fn post(&mut self, _node: &Node<K>) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Pre,
    In,
    Post,
}

/// Adapts a closure into a [`Visitor`] that only fires at one point of the walk.
pub(crate) struct OrderedFn<F> {
    pub order: Order,
    pub f: F,
}

impl<K, F: FnMut(&Node<K>)> Visitor<K> for OrderedFn<F> {
    fn pre(&mut self, node: &Node<K>) {
        if self.order == Order::Pre { (self.f)(node) }
    }
    fn in_order(&mut self, node: &Node<K>) {
        if self.order == Order::In { (self.f)(node) }
    }
    fn post(&mut self, node: &Node<K>) {
        if self.order == Order::Post { (self.f)(node) }
    }
}

/// Recursion depth is bounded by the tree height.
pub(crate) fn walk<K, V: Visitor<K> + ?Sized>(link: &Link<K>, visitor: &mut V) {
    let Some(node) = link.as_deref() else { return };
    visitor.pre(node);
    walk(&node[Side::Left], visitor);
    visitor.in_order(node);
    walk(&node[Side::Right], visitor);
    visitor.post(node);
}

/// An in-order iterator over the keys of a tree.
///
/// Holds at most one pending node per level, so O(log(n)) extra space.
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: &'a Link<K>, len: usize) -> Self {
        let mut iter = Self { stack: Vec::new(), remaining: len };
        iter.descend(root.as_deref());
        iter
    }

    fn descend(&mut self, mut cursor: Option<&'a Node<K>>) {
        while let Some(node) = cursor {
            self.stack.push(node);
            cursor = node.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend(node.right());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self { stack: self.stack.clone(), remaining: self.remaining }
    }
}
