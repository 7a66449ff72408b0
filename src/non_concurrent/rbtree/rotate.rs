use super::node::{Node, Side};


/// Rotates the subtree rooted at `node` towards `side`, returning the new subtree root.
///
/// The child on `side.opposite()` is promoted, `node` becomes its `side` child, and
/// the promoted child's inner grandchild is handed over to `node`. In-order key
/// sequence is unchanged; colors are left alone and are the caller's problem.
///
/// ```text
///        node                    pivot
///       /    \     rotate(L)    /     \
///      a    pivot   ------>   node     c
///           /   \            /    \
///          b     c          a      b
/// ```
pub(crate) fn rotate<K>(mut node: Box<Node<K>>, side: Side) -> Box<Node<K>> {
    let mut pivot = node[side.opposite()]
        .take()
        .expect("rotation requires a child opposite the rotation side");
    node[side.opposite()] = pivot[side].take();
    pivot[side] = Some(node);
    pivot
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::non_concurrent::rbtree::node::Link;

    fn keys(link: &Link<char>, out: &mut String) {
        if let Some(node) = link.as_deref() {
            keys(&node[Side::Left], out);
            out.push(node.key);
            keys(&node[Side::Right], out);
        }
    }

    /// Builds the left-hand shape from the diagram on [`rotate`].
    fn sample() -> Box<Node<char>> {
        let mut pivot = Node::new('p');
        pivot[Side::Left] = Some(Node::new('b'));
        pivot[Side::Right] = Some(Node::new('c'));
        let mut node = Node::new('n');
        node[Side::Left] = Some(Node::new('a'));
        node[Side::Right] = Some(pivot);
        node
    }

    #[test]
    fn rotate_left_promotes_right_child() {
        let top = rotate(sample(), Side::Left);
        assert_eq!(top.key, 'p');
        let node = top.left().unwrap();
        assert_eq!(node.key, 'n');
        assert_eq!(node.left().unwrap().key, 'a');
        assert_eq!(node.right().unwrap().key, 'b');
        assert_eq!(top.right().unwrap().key, 'c');

        let mut order = String::new();
        keys(&Some(top), &mut order);
        assert_eq!(order, "anbpc");
    }

    #[test]
    fn rotations_are_inverse() {
        let top = rotate(rotate(sample(), Side::Left), Side::Right);
        assert_eq!(top.key, 'n');
        assert_eq!(top.right().unwrap().key, 'p');
        assert_eq!(top.right().unwrap().left().unwrap().key, 'b');
    }

    #[test]
    fn rotation_keeps_colors() {
        let mut tree = sample();
        tree.color = crate::non_concurrent::rbtree::Color::Black;
        let top = rotate(tree, Side::Left);
        assert!(top.is_red());
        assert!(!top.left().unwrap().is_red());
    }

    #[test]
    #[should_panic(expected = "rotation requires")]
    fn rotate_without_child_panics() {
        rotate(Node::new('x'), Side::Left);
    }
}
