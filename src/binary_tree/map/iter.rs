use std::borrow::Borrow;
use std::cmp::Ordering;
use std::iter::FusedIterator;

use super::{Branch, Node, TreeMap};
use crate::contiguous::Stack;

impl<K: Ord, V> IntoIterator for TreeMap<K, V> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter {
            pending: Stack::new(),
            len: self.len,
        };
        iter.push_left_spine(self.root.0.take());
        iter
    }
}

/// An owned iterator over the entries of a [`TreeMap`], in ascending order.
///
/// Each node is detached from its children as it's visited, so any entries that remain when the
/// iterator is dropped are torn down in the same way as the map's.
pub struct IntoIter<K: Ord, V> {
    pending: Stack<Box<Node<K, V>>>,
    len: usize,
}

impl<K: Ord, V> IntoIter<K, V> {
    fn push_left_spine(&mut self, mut next: Option<Box<Node<K, V>>>) {
        while let Some(mut node) = next {
            next = node.left.0.take();
            self.pending.push(node);
        }
    }
}

impl<K: Ord, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.pending.try_pop().ok()?;
        self.push_left_spine(node.right.0.take());
        self.len -= 1;
        let Node { key, value, .. } = *node;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K: Ord, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K: Ord, V> FusedIterator for IntoIter<K, V> {}

impl<'a, K: Ord, V> IntoIterator for &'a TreeMap<K, V> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            ancestors: Stack::new(),
        };
        iter.push_left_spine(&self.root);
        iter
    }
}

/// A borrowed iterator over the entries of a [`TreeMap`], in ascending order.
///
/// The iterator keeps a stack of the ancestors that it has yet to visit. To advance, it descends
/// into the leftmost path of the current node's right subtree if there is one, and otherwise
/// returns to the closest unvisited ancestor.
pub struct Iter<'a, K: Ord, V> {
    ancestors: Stack<&'a Node<K, V>>,
}

impl<'a, K: Ord, V> Iter<'a, K, V> {
    fn push_left_spine(&mut self, mut branch: &'a Branch<K, V>) {
        while let Some(node) = branch.0.as_deref() {
            self.ancestors.push(node);
            branch = &node.left;
        }
    }

    /// Creates an iterator that starts at the node holding `key`, with the same ancestors that it
    /// would have had if it had been advanced there from the first entry.
    pub(crate) fn starting_at<Q>(root: &'a Branch<K, V>, key: &Q) -> Iter<'a, K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut ancestors = Stack::new();
        let mut branch = root;
        while let Some(node) = branch.0.as_deref() {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => {
                    ancestors.push(node);
                    branch = &node.left;
                },
                Ordering::Greater => branch = &node.right,
                Ordering::Equal => {
                    ancestors.push(node);
                    return Iter { ancestors };
                },
            }
        }

        Iter {
            ancestors: Stack::new(),
        }
    }
}

impl<'a, K: Ord, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.ancestors.try_pop().ok()?;
        self.push_left_spine(&node.right);
        Some(node.tuple())
    }
}

impl<K: Ord, V> FusedIterator for Iter<'_, K, V> {}

impl<K: Ord, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            ancestors: self.ancestors.clone(),
        }
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a mut TreeMap<K, V> {
    type Item = (&'a K, &'a mut V);

    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = IterMut {
            ancestors: Stack::new(),
        };
        iter.push_left_spine(&mut self.root);
        iter
    }
}

/// A borrowed iterator over the entries of a [`TreeMap`], in ascending order, with mutable
/// references to the values.
///
/// Each node is split into its parts as it's pushed, so that the key, value and right subtree can
/// be borrowed independently.
pub struct IterMut<'a, K: Ord, V> {
    ancestors: Stack<(&'a K, &'a mut V, &'a mut Branch<K, V>)>,
}

impl<'a, K: Ord, V> IterMut<'a, K, V> {
    fn push_left_spine(&mut self, mut branch: &'a mut Branch<K, V>) {
        while let Some(node) = branch.0.as_deref_mut() {
            let Node {
                left,
                right,
                key,
                value,
            } = node;
            self.ancestors.push((&*key, value, right));
            branch = left;
        }
    }
}

impl<'a, K: Ord, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value, right) = self.ancestors.try_pop().ok()?;
        self.push_left_spine(right);
        Some((key, value))
    }
}

impl<K: Ord, V> FusedIterator for IterMut<'_, K, V> {}

/// An iterator over the keys of a [`TreeMap`], in ascending order.
pub struct Keys<'a, K: Ord, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K: Ord, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }
}

impl<K: Ord, V> FusedIterator for Keys<'_, K, V> {}

impl<K: Ord, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys(self.0.clone())
    }
}

/// An iterator over the values of a [`TreeMap`], in ascending order of their keys.
pub struct Values<'a, K: Ord, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K: Ord, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }
}

impl<K: Ord, V> FusedIterator for Values<'_, K, V> {}
