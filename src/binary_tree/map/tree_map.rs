use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter, Write};
use std::mem;
use std::ops::Index;

use super::{Branch, Iter, IterMut, Keys, Node, Values};
use crate::contiguous::Stack;
use crate::util::error::BadKey;
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

/// A map of keys to values, stored in an unbalanced binary search tree and ordered by `K`'s [`Ord`]
/// implementation.
///
/// The tree is never rebalanced, so its shape depends on the order of insertion: random insertions
/// keep it at around `log n` levels, while sorted insertions degrade it into a list. None of the
/// operations here are recursive, so even a degenerate tree can't exhaust the call stack.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the TreeMap.
/// - `d`: The depth of the tree, which is `O(log n)` on average but `O(n)` in the worst case.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(d)` |
/// | `remove` | `O(d)` |
/// | `get` / `at` / `contains` | `O(d)` |
/// | `first` / `last` | `O(d)` |
/// | `find` | `O(d)` |
/// | `iter` (whole iteration) | `O(n)` |
/// | `clone` / `drop` | `O(n)` |
pub struct TreeMap<K: Ord, V> {
    pub(crate) root: Branch<K, V>,
    pub(crate) len: usize,
}

impl<K: Ord, V> TreeMap<K, V> {
    /// Creates a new, empty TreeMap.
    pub const fn new() -> TreeMap<K, V> {
        TreeMap {
            root: Branch(None),
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `value` under `key`. If the key was already present, its value is replaced and the
    /// previous value is returned, while the original key is kept.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let branch = self.root.seek(&key);
        match &mut branch.0 {
            Some(node) => Some(mem::replace(&mut node.value, value)),
            None => {
                branch.0 = Some(Box::new(Node::new(key, value)));
                self.len += 1;
                None
            },
        }
    }

    /// Removes the entry for `key` and returns it. Nothing happens if the key isn't present.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.root.seek(key).unlink()?;
        self.len -= 1;
        let Node { key, value, .. } = *node;
        Some((key, value))
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).map(|e| e.1)
    }

    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.find(key).0.as_deref().map(Node::tuple)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_entry(key).map(|e| e.1)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.seek(key).0.as_deref_mut().map(|node| &mut node.value)
    }

    /// Returns a reference to the value stored under `key`, or a [`BadKey`] error if there isn't
    /// one.
    pub fn try_at<Q>(&self, key: &Q) -> Result<&V, BadKey>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).ok_or(BadKey)
    }

    /// # Panics
    /// Panics if `key` isn't present in the TreeMap.
    pub fn at<Q>(&self, key: &Q) -> &V
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.try_at(key).throw()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.find(key).is_some()
    }

    /// Returns a mutable reference to the value stored under `key`, inserting [`V::default()`]
    /// first if the key isn't present.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let len = &mut self.len;
        let branch = self.root.seek(&key);
        &mut branch
            .0
            .get_or_insert_with(|| {
                *len += 1;
                Box::new(Node::new(key, V::default()))
            })
            .value
    }

    /// Returns the entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.root.first().map(Node::tuple)
    }

    /// Returns the entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.root.last().map(Node::tuple)
    }

    /// Returns an iterator over the entries in ascending order, starting at `key`. If `key` isn't
    /// present, the iterator is empty.
    pub fn find<Q>(&self, key: &Q) -> Iter<'_, K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Iter::starting_at(&self.root, key)
    }

    /// Returns an iterator over all entries in ascending order of their keys.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all entries in ascending order, with mutable references to the
    /// values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.into_iter()
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Ord, V> Default for TreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V: Clone> Clone for TreeMap<K, V> {
    fn clone(&self) -> Self {
        enum Step<'a, K: Ord, V> {
            Visit(&'a Branch<K, V>),
            Build(&'a Node<K, V>),
        }

        // Visit every node in post-order, so that both subtrees of a node have been copied before
        // the node itself.
        let mut steps = Stack::new();
        let mut built = Stack::new();
        steps.push(Step::Visit(&self.root));

        while let Ok(step) = steps.try_pop() {
            match step {
                Step::Visit(branch) => match branch.0.as_deref() {
                    Some(node) => {
                        steps.push(Step::Build(node));
                        steps.push(Step::Visit(&node.right));
                        steps.push(Step::Visit(&node.left));
                    },
                    None => built.push(Branch(None)),
                },
                Step::Build(node) => {
                    let right = built.try_pop().unwrap_or_default();
                    let left = built.try_pop().unwrap_or_default();
                    built.push(Branch(Some(Box::new(Node {
                        left,
                        right,
                        key: node.key.clone(),
                        value: node.value.clone(),
                    }))));
                },
            }
        }

        TreeMap {
            root: built.try_pop().unwrap_or_default(),
            len: self.len,
        }
    }
}

impl<K: Ord, V: PartialEq> PartialEq for TreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Ord, V: Eq> Eq for TreeMap<K, V> {}

impl<K: Ord, V> Extend<(K, V)> for TreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for TreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = TreeMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for TreeMap<K, V> {
    fn from(value: [(K, V); N]) -> Self {
        Self::from_iter(value)
    }
}

impl<K, Q, V> Index<&Q> for TreeMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Output = V;

    fn index(&self, index: &Q) -> &Self::Output {
        self.at(index)
    }
}

impl<K: Ord + Debug, V: Debug> Debug for TreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Sideways, with the right subtree above each node.
        let mut nodes = String::new();
        let mut pending = Stack::new();
        let mut curr = (&self.root, 0);
        loop {
            let (mut branch, mut depth) = curr;
            while let Some(node) = branch.0.as_deref() {
                pending.push((node, depth));
                branch = &node.right;
                depth += 1;
            }
            match pending.try_pop() {
                Ok((node, depth)) => {
                    writeln!(
                        nodes,
                        "{}({:?}: {:?})",
                        "    ".repeat(depth),
                        node.key,
                        node.value
                    )?;
                    curr = (&node.left, depth + 1);
                },
                Err(_) => break,
            }
        }

        f.debug_struct("TreeMap")
            .field("nodes", &DebugRaw(format!("\n{nodes}")))
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Ord + Display, V: Display> Display for TreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key} -> {value}")?;
        }
        write!(f, "}}")
    }
}
