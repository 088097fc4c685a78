use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::{mem, slice, vec};

use super::{Bin, Entry, HashMap};

impl<K: Hash + Eq, V, B: BuildHasher> IntoIterator for HashMap<K, V, B> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter {
            len: self.len,
            bins: mem::take(&mut self.bins).into_vec().into_iter(),
            chain: None,
        }
    }
}

/// An owned iterator over the entries of a [`HashMap`], in bin order.
pub struct IntoIter<K, V> {
    pub(crate) bins: vec::IntoIter<Bin<K, V>>,
    pub(crate) chain: Bin<K, V>,
    pub(crate) len: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(mut entry) = self.chain.take() {
                self.chain = entry.next.take();
                self.len -= 1;
                let Entry { key, value, .. } = *entry;
                return Some((key, value));
            }
            self.chain = self.bins.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> Drop for IntoIter<K, V> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a HashMap<K, V, B> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            bins: self.bins.iter(),
            chain: None,
            len: self.len,
        }
    }
}

/// A borrowed iterator over the entries of a [`HashMap`], in bin order.
pub struct Iter<'a, K, V> {
    pub(crate) bins: slice::Iter<'a, Bin<K, V>>,
    pub(crate) chain: Option<&'a Entry<K, V>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain {
                self.chain = entry.next.as_deref();
                self.len -= 1;
                return Some((&entry.key, &entry.value));
            }
            self.chain = self.bins.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            bins: self.bins.clone(),
            chain: self.chain,
            len: self.len,
        }
    }
}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a mut HashMap<K, V, B> {
    type Item = (&'a K, &'a mut V);

    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            bins: self.bins.iter_mut(),
            chain: None,
            len: self.len,
        }
    }
}

/// A borrowed iterator over the entries of a [`HashMap`], in bin order, with mutable references
/// to the values.
pub struct IterMut<'a, K, V> {
    pub(crate) bins: slice::IterMut<'a, Bin<K, V>>,
    pub(crate) chain: Option<&'a mut Entry<K, V>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.take() {
                let Entry { key, value, next } = entry;
                self.chain = next.as_deref_mut();
                self.len -= 1;
                return Some((&*key, value));
            }
            self.chain = self.bins.next()?.as_deref_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// An iterator over the keys of a [`HashMap`], in bin order.
pub struct Keys<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a [`HashMap`], in bin order.
pub struct Values<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// An iterator over the values of a [`HashMap`], in bin order, as mutable references.
pub struct ValuesMut<'a, K, V>(pub(crate) IterMut<'a, K, V>);

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}

impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}
