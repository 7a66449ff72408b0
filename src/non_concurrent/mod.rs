// single-threaded data structures; callers serialize access themselves

pub mod rbtree;
