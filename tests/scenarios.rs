//! End-to-end scenarios against the public API.

use rbtree::{render, Color, InvariantViolation, Node, Order, RBTree, Visitor};


fn init_logging() {
    use simplelog::*;
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

fn six_keys() -> RBTree<i32> {
    let mut tree = RBTree::new();
    for key in [10, 20, 30, 40, 50, 25] {
        assert!(tree.insert(key));
        assert!(tree.validate().is_ok(), "invalid after inserting {key}:\n{}", render(&tree));
    }
    tree
}

fn keys(tree: &RBTree<i32>) -> Vec<i32> {
    tree.iter().copied().collect()
}

#[test]
fn six_key_insertion() {
    init_logging();
    let tree = six_keys();
    assert_eq!(keys(&tree), [10, 20, 25, 30, 40, 50]);
    assert_eq!(tree.root().map(Node::color), Some(Color::Black));
    assert_eq!(tree.root().map(Node::key), Some(&20));
    assert_eq!(tree.validate(), Ok(2));
}

#[test]
fn removing_absent_key_changes_nothing() {
    let mut tree = six_keys();
    let shape = render(&tree);
    assert_eq!(tree.remove(&35), None);
    assert_eq!(keys(&tree), [10, 20, 25, 30, 40, 50]);
    assert_eq!(render(&tree), shape);
    assert_eq!(tree.len(), 6);
}

#[test]
fn removing_thirty() {
    init_logging();
    let mut tree = six_keys();
    assert_eq!(tree.remove(&30), Some(30));
    assert_eq!(keys(&tree), [10, 20, 25, 40, 50]);
    assert!(tree.validate().is_ok());
    assert!(tree.find(&30).is_none());
    assert_eq!(tree.len(), 5);
}

#[test]
fn find_after_insert() {
    let mut tree = six_keys();
    assert!(tree.insert(35));
    let node = tree.find(&35).expect("just inserted");
    assert_eq!(*node.key(), 35);
    assert!(tree.contains(&35));

    let shape = render(&tree);
    assert!(!tree.insert(35));
    assert_eq!(render(&tree), shape);
    assert_eq!(tree.len(), 7);
}

#[test]
fn source_test_sequence() {
    // the keys `|(9 - i) * 7| % 39` for i in 0..20, repeats included
    init_logging();
    let mut tree = RBTree::new();
    let mut expected = std::collections::BTreeSet::new();
    for i in 0..20i32 {
        let key = ((9 - i) * 7).abs() % 39;
        assert_eq!(tree.insert(key), expected.insert(key));
        tree.validate().unwrap();
    }
    assert!(tree.iter().eq(expected.iter()));

    assert_eq!(tree.remove(&35), Some(35));
    expected.remove(&35);
    tree.validate().unwrap();
    assert!(tree.iter().eq(expected.iter()));
}

/// Counts black nodes on the way down with `pre` and back up with `post`, the same
/// way a printer tracks its indentation.
#[test]
fn visitor_tracks_black_depth() {
    #[derive(Default)]
    struct BlackDepth {
        current: usize,
        at_leaves: Vec<usize>,
    }

    impl Visitor<i32> for BlackDepth {
        fn pre(&mut self, node: &Node<i32>) {
            self.current += usize::from(node.color() == Color::Black);
            if node.left().is_none() || node.right().is_none() {
                self.at_leaves.push(self.current);
            }
        }
        fn post(&mut self, node: &Node<i32>) {
            self.current -= usize::from(node.color() == Color::Black);
        }
    }

    let tree: RBTree<i32> = (0..100).collect();
    let mut visitor = BlackDepth::default();
    tree.traverse(&mut visitor);
    assert_eq!(visitor.current, 0);
    let height = tree.validate().unwrap();
    assert!(visitor.at_leaves.iter().all(|&blacks| blacks == height));
}

#[test]
fn traversal_orders() {
    let tree = six_keys();
    let mut in_order = vec![];
    tree.for_each(Order::In, |node| in_order.push(*node.key()));
    assert_eq!(in_order, keys(&tree));

    let mut pre = vec![];
    tree.for_each(Order::Pre, |node| pre.push(*node.key()));
    assert_eq!(pre.first(), Some(&20));

    let mut post = vec![];
    tree.for_each(Order::Post, |node| post.push(*node.key()));
    assert_eq!(post.last(), Some(&20));
}

#[test]
fn violations_read_well() {
    let violation = InvariantViolation::BlackHeight { expected: 3, found: 2, depth: 4 };
    assert_eq!(violation.to_string(), "black height 2 at depth 4 doesn't match the expected 3");
}

#[test]
fn string_keys() {
    let mut tree: RBTree<String> = ["pear", "apple", "fig", "kiwi"].into_iter().map(String::from).collect();
    assert_eq!(tree.to_string(), "[apple, fig, kiwi, pear]");
    assert_eq!(tree.remove(&"fig".to_string()).as_deref(), Some("fig"));
    assert_eq!(tree.first().map(String::as_str), Some("apple"));
    tree.validate().unwrap();
}

#[test]
fn descending_sits_beside_std_reverse() {
    use rbtree::Descending;
    use std::cmp::Reverse;

    init_logging();
    let tree: RBTree<i32, Descending> = [3, 1, 2].into_iter().collect();
    let wrapped: RBTree<Reverse<i32>> = [3, 1, 2].into_iter().map(Reverse).collect();
    assert!(tree.iter().copied().eq(wrapped.iter().map(|key| key.0)));
    assert_eq!(tree.to_string(), "[3, 2, 1]");
    tree.validate().unwrap();
}
