use std::ops::{Index, IndexMut};


/// An owning edge in the tree. `None` is a nil position, which counts as black.
pub type Link<K> = Option<Box<Node<K>>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Which child of a node we're talking about.
///
/// Every rebalancing case is written once against a `Side` and its `opposite`,
/// so the left and right mirrors can't drift apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    const fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// A single tree node.
///
/// Nodes are only ever reachable through a shared borrow of the tree that owns
/// them, so a node can't be observed after it has been removed.
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    pub(crate) children: [Link<K>; 2],
}

impl<K> Node<K> {
    /// Fresh nodes are always red, so attaching one never changes a black height.
    pub(crate) fn new(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            color: Color::Red,
            children: [None, None],
        })
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub fn child(&self, side: Side) -> Option<&Node<K>> {
        self[side].as_deref()
    }

    pub fn left(&self) -> Option<&Node<K>> {
        self.child(Side::Left)
    }

    pub fn right(&self) -> Option<&Node<K>> {
        self.child(Side::Right)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}

impl<K> Index<Side> for Node<K> {
    type Output = Link<K>;

    fn index(&self, side: Side) -> &Self::Output {
        &self.children[side.index()]
    }
}

impl<K> IndexMut<Side> for Node<K> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.children[side.index()]
    }
}

/// Nil positions are black.
pub(crate) fn is_red<K>(link: &Link<K>) -> bool {
    link.as_deref().is_some_and(Node::is_red)
}

pub(crate) fn paint<K>(link: &mut Link<K>, color: Color) {
    if let Some(node) = link.as_deref_mut() {
        node.color = color;
    }
}
