//! A red-black tree: an ordered set of keys with O(log(n)) insert, lookup and removal.
//!
//! Every node is owned by its parent through a [`Box`], with no back-pointers.
//! Rebalancing works by handing each subtree root down by value and taking the
//! (possibly different) root back, so a rotation is just a few `Option::take`s.

// PROVE: any node with height `h` has black height at least `h/2`
// PROVE: the subtree located at any node `x` contains at least `2^bh(x) - 1` nodes (use induction)
// LEMMA: An RBTree with `n` internal nodes has height at most `2*log₂(n+1)`

use log::debug;

mod compare;
mod display;
mod insert;
mod lookup;
mod node;
mod remove;
mod rotate;
mod traverse;
mod validate;

pub use compare::{Comparator, Descending, Natural};
pub use display::render;
pub use node::{Color, Node, Side};
pub use traverse::{Iter, Order, Visitor};
pub use validate::InvariantViolation;

use node::Link;


pub struct RBTree<K, C = Natural> {
    root: Link<K>,
    len: usize,
    comparator: C,
}

impl<K: Ord> RBTree<K> {
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, C: Default> Default for RBTree<K, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, C> RBTree<K, C> {
    /// Creates an empty tree that orders its keys with `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self { root: None, len: 0, comparator }
    }

    /// The amount of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// The smallest key, if any.
    ///
    /// Complexity: O(log(n))
    pub fn first(&self) -> Option<&K> {
        lookup::edge(&self.root, Side::Left).map(Node::key)
    }

    /// The largest key, if any.
    ///
    /// Complexity: O(log(n))
    pub fn last(&self) -> Option<&K> {
        lookup::edge(&self.root, Side::Right).map(Node::key)
    }

    /// Removes and returns the smallest key.
    pub fn pop_first(&mut self) -> Option<K> {
        self.pop(Side::Left)
    }

    /// Removes and returns the largest key.
    pub fn pop_last(&mut self) -> Option<K> {
        self.pop(Side::Right)
    }

    fn pop(&mut self, side: Side) -> Option<K> {
        let removed = remove::remove_edge(&mut self.root, side)?;
        self.removed(removed.short);
        Some(removed.key)
    }

    /// Number of nodes on the longest root-to-leaf path. Never more than `2*log₂(len+1)`.
    pub fn height(&self) -> usize {
        lookup::height(&self.root)
    }

    /// Number of black nodes on any root-to-nil path, assuming the tree is valid.
    pub fn black_height(&self) -> usize {
        lookup::black_height(&self.root)
    }

    /// Walks the tree depth-first, calling every hook of `visitor` on each node.
    pub fn traverse<V: Visitor<K> + ?Sized>(&self, visitor: &mut V) {
        traverse::walk(&self.root, visitor);
    }

    /// Calls `f` on every node, at the point of the walk given by `order`.
    pub fn for_each<F: FnMut(&Node<K>)>(&self, order: Order, f: F) {
        traverse::walk(&self.root, &mut traverse::OrderedFn { order, f });
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.root, self.len)
    }

    /// Bookkeeping shared by every removal path.
    fn removed(&mut self, short: bool) {
        self.len -= 1;
        if short {
            // the deficit made it all the way up, so every path lost a black node
            debug!("rbtree: black height shrank to {}", self.black_height());
        }
        if self.root.is_none() {
            debug!("rbtree: last node removed");
        }
    }
}

impl<K, C: Comparator<K>> RBTree<K, C> {
    /// Inserts `key`, returning whether it was added.
    ///
    /// If an equal key is already present, the tree is left untouched and `key` is dropped.
    ///
    /// Complexity: O(log(n))
    pub fn insert(&mut self, key: K) -> bool {
        let (mut root, inserted) = insert::insert(self.root.take(), key, &self.comparator);
        if root.is_red() {
            debug!("rbtree: blackening red root");
            root.color = Color::Black;
        }
        self.root = Some(root);
        self.len += usize::from(inserted);
        inserted
    }

    /// The node holding `key`, if any.
    ///
    /// Complexity: O(log(n))
    pub fn find(&self, key: &K) -> Option<&Node<K>> {
        lookup::find(&self.root, key, &self.comparator)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// The stored key equal to `key`, if any.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.find(key).map(Node::key)
    }

    /// Removes the key equal to `key` and hands it back. Absent keys leave the tree untouched.
    ///
    /// Complexity: O(log(n))
    pub fn remove(&mut self, key: &K) -> Option<K> {
        let removed = remove::remove(&mut self.root, key, &self.comparator)?;
        self.removed(removed.short);
        Some(removed.key)
    }

    /// Checks every red-black property (plus key order and the length counter) in O(n).
    ///
    /// Returns the tree's black height. Insertion and removal never call this; it's
    /// for tests and audits.
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        validate::validate(&self.root, self.len, &self.comparator)
    }
}

impl<K, C: Comparator<K>> Extend<K> for RBTree<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K, C: Comparator<K> + Default> FromIterator<K> for RBTree<K, C> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::default();
        tree.extend(keys);
        tree
    }
}

impl<'a, K, C> IntoIterator for &'a RBTree<K, C> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
