use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use super::Iter;
use crate::binary_tree::map::TreeMap;

/// A set of ordered elements, stored as the keys of a [`TreeMap`] with no values.
///
/// Like the map, the underlying tree is never rebalanced. See [`TreeMap`] for the complexity of
/// each operation.
pub struct TreeSet<T: Ord> {
    pub(crate) inner: TreeMap<T, ()>,
}

impl<T: Ord> TreeSet<T> {
    /// Creates a new, empty TreeSet.
    pub const fn new() -> TreeSet<T> {
        TreeSet {
            inner: TreeMap::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Inserts `item` into the set, returning true if it wasn't already present. If an equal item
    /// is already in the set, the set is left unchanged.
    pub fn insert(&mut self, item: T) -> bool {
        if self.inner.contains(&item) {
            return false;
        }
        self.inner.insert(item, ());
        true
    }

    /// Removes `item` from the set, returning true if it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.remove(item).is_some()
    }

    /// Removes and returns the element equal to `item`, if there is one.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.remove_entry(item).map(|e| e.0)
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.contains(item)
    }

    /// Returns a reference to the element equal to `item`, if there is one.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.get_entry(item).map(|e| e.0)
    }

    /// Returns the smallest element.
    pub fn first(&self) -> Option<&T> {
        self.inner.first().map(|e| e.0)
    }

    /// Returns the largest element.
    pub fn last(&self) -> Option<&T> {
        self.inner.last().map(|e| e.0)
    }

    /// Returns an iterator over the elements in ascending order, starting at `item`. If `item`
    /// isn't present, the iterator is empty.
    pub fn find<Q>(&self, item: &Q) -> Iter<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Iter(self.inner.find(item))
    }

    /// Returns an iterator over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Ord> Default for TreeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> Clone for TreeSet<T> {
    fn clone(&self) -> Self {
        TreeSet {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Ord> PartialEq for TreeSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Ord> Eq for TreeSet<T> {}

impl<T: Ord> Extend<T> for TreeSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for TreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = TreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for TreeSet<T> {
    fn from(value: [T; N]) -> Self {
        Self::from_iter(value)
    }
}

impl<T: Ord + Debug> Debug for TreeSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord + Display> Display for TreeSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}
