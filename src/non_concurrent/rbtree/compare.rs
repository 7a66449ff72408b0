use std::cmp::Ordering;


/// The ordering a tree sorts its keys by.
///
/// Two keys that compare [`Ordering::Equal`] are the same key as far as the
/// tree is concerned: only the first one inserted is ever stored.
pub trait Comparator<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Sorts by `K`'s own [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<K: ?Sized + Ord> Comparator<K> for Natural {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Sorts by `K`'s [`Ord`] implementation, largest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Descending;

impl<K: ?Sized + Ord> Comparator<K> for Descending {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}

impl<K: ?Sized, F> Comparator<K> for F where F: Fn(&K, &K) -> Ordering {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
