//! Ordered-key data structures.
//!
//! The main type is [`RBTree`], a red-black tree set of keys:
//!
//! ```
//! use rbtree::RBTree;
//!
//! let mut tree = RBTree::new();
//! for key in [10, 20, 30, 40, 50, 25] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.validate(), Ok(2));
//! assert_eq!(tree.to_string(), "[10, 20, 25, 30, 40, 50]");
//!
//! tree.remove(&30);
//! assert!(tree.find(&30).is_none());
//! ```
#![forbid(unsafe_code)]

// not concurrent
pub mod non_concurrent;

pub use non_concurrent::rbtree::{
    render, Color, Comparator, Descending, InvariantViolation, Iter, Natural, Node, Order, RBTree, Side, Visitor,
};
