use std::iter::FusedIterator;

use super::TreeSet;
use crate::binary_tree::map;

impl<T: Ord> IntoIterator for TreeSet<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_iter())
    }
}

/// An owned iterator over the elements of a [`TreeSet`], in ascending order.
pub struct IntoIter<T: Ord>(pub(crate) map::IntoIter<T, ()>);

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T: Ord> ExactSizeIterator for IntoIter<T> {}

impl<T: Ord> FusedIterator for IntoIter<T> {}

impl<'a, T: Ord> IntoIterator for &'a TreeSet<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.inner.iter())
    }
}

/// A borrowed iterator over the elements of a [`TreeSet`], in ascending order.
pub struct Iter<'a, T: Ord>(pub(crate) map::Iter<'a, T, ()>);

impl<'a, T: Ord> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }
}

impl<T: Ord> FusedIterator for Iter<'_, T> {}

impl<T: Ord> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}
