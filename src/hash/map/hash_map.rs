use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::iter;
use std::mem;
use std::ops::Index;

use super::{Iter, IterMut, Keys, Values, ValuesMut};
use crate::util::error::BadKey;
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

pub(crate) const INITIAL_BIN_COUNT: usize = 8;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 4;
const LOAD_FACTOR_DENOMINATOR: usize = 5;

/// A map of keys to values which relies on the keys implementing [`Hash`].
///
/// Entries are kept in an array of bins, each holding a chain of the entries whose keys hash to
/// it. The map starts with 8 bins, and doubles the number of bins before an insertion whenever the
/// average chain would be longer than 4/5. Growth moves the existing entries into their new bins,
/// rather than copying them.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(n)` |
/// | `get` / `at` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `iter` (whole iteration) | `O(n)` |
///
/// \* In the event of a hash collision, these functions will have to walk the chain of the bin.
/// Collisions are unlikely with a good hasher, and the load factor keeps chains short.
///
/// \** If the HashMap is over the load factor, `insert` will grow it first, taking `O(n)`.
/// \* applies as well.
pub struct HashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) bins: Box<[Bin<K, V>]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

pub(crate) type Bin<K, V> = Option<Box<Entry<K, V>>>;

pub(crate) struct Entry<K, V> {
    pub key: K,
    pub value: V,
    pub next: Bin<K, V>,
}

impl<K: Hash + Eq, V> HashMap<K, V> {
    /// Creates a new HashMap with the initial number of bins, using [`RandomState`] for hashing.
    /// Use [`HashMap::default`] or [`HashMap::with_hasher`] for other hashers.
    pub fn new() -> HashMap<K, V> {
        HashMap::with_hasher(RandomState::new())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Creates a new HashMap with the initial number of bins and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashMap<K, V, B> {
        HashMap {
            bins: empty_bins(INITIAL_BIN_COUNT),
            len: 0,
            hasher,
        }
    }

    /// Returns the length of the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current number of bins in the HashMap.
    pub fn bins(&self) -> usize {
        self.bins.len()
    }

    /// Returns a reference to the hasher used by the HashMap.
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Inserts the provided `key`-`value` pair into the HashMap, growing it first if required. If
    /// the key was already associated with a value, the previous value is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.should_grow() {
            self.grow();
        }

        let link = self.find_link(&key);
        match link.as_deref_mut() {
            Some(existing) => Some(mem::replace(&mut existing.value, value)),
            None => {
                *link = Some(Box::new(Entry {
                    key,
                    value,
                    next: None,
                }));
                self.len += 1;
                None
            },
        }
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut entry = self.bins[self.bin_index(key)].as_deref();
        while let Some(existing) = entry {
            if existing.key.borrow() == key {
                return Some((&existing.key, &existing.value));
            }
            entry = existing.next.as_deref();
        }
        None
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no values for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no values for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_link(key).as_deref_mut().map(|e| &mut e.value)
    }

    /// Returns a reference to the value associated with `key`, or a [`BadKey`] error if there isn't
    /// one.
    pub fn try_at<Q>(&self, key: &Q) -> Result<&V, BadKey>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).ok_or(BadKey)
    }

    /// # Panics
    /// Panics if there is no value associated with `key`.
    pub fn at<Q>(&self, key: &Q) -> &V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.try_at(key).throw()
    }

    /// Returns a mutable reference to the value associated with `key`, inserting
    /// [`V::default()`](Default::default) first if there isn't one.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        if self.should_grow() && self.find_link(&key).is_none() {
            self.grow();
        }

        let len = &mut self.len;
        let link = find_link(&mut self.bins, &self.hasher, &key);
        &mut link
            .get_or_insert_with(|| {
                *len += 1;
                Box::new(Entry {
                    key,
                    value: V::default(),
                    next: None,
                })
            })
            .value
    }

    /// Removes the entry associated with `key`, returning it if it exists. Nothing happens if the
    /// map doesn't contain `key`.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let link = self.find_link(key);
        let mut removed = link.take()?;
        *link = removed.next.take();
        self.len -= 1;

        let Entry { key, value, .. } = *removed;
        Some((key, value))
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Returns an iterator over all key-value pairs in the HashMap, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all key-value pairs in the HashMap, with mutable references to the
    /// values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over all values in the HashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Determines whether the HashMap's occupancy exceeds the load factor, suggesting that it
    /// should grow before inserting new entries.
    pub(crate) fn should_grow(&self) -> bool {
        self.len * LOAD_FACTOR_DENOMINATOR > self.bins.len() * LOAD_FACTOR_NUMERATOR
    }

    /// Multiplies the number of bins by the growth factor, relinking every entry into its new bin.
    pub(crate) fn grow(&mut self) {
        let new_count = self.bins().max(1) * GROWTH_FACTOR;
        let old_bins = mem::replace(&mut self.bins, empty_bins(new_count));

        for mut chain in old_bins.into_vec() {
            while let Some(mut entry) = chain {
                chain = entry.next.take();
                let index = self.bin_index(&entry.key);
                entry.next = self.bins[index].take();
                self.bins[index] = Some(entry);
            }
        }
    }

    /// Calculates the index of the bin that the provided `hashable` belongs in.
    pub(crate) fn bin_index<H: Hash + ?Sized>(&self, hashable: &H) -> usize {
        bin_index(&self.bins, &self.hasher, hashable)
    }

    /// Finds the link in the chain of `key`'s bin that either holds the entry for `key`, or is the
    /// empty link at the end of the chain.
    pub(crate) fn find_link<Q>(&mut self, key: &Q) -> &mut Bin<K, V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        find_link(&mut self.bins, &self.hasher, key)
    }
}

fn empty_bins<K, V>(count: usize) -> Box<[Bin<K, V>]> {
    iter::repeat_with(|| None).take(count).collect()
}

fn bin_index<K, V, B, H>(bins: &[Bin<K, V>], hasher: &B, hashable: &H) -> usize
where
    B: BuildHasher,
    H: Hash + ?Sized,
{
    (hasher.hash_one(hashable) % bins.len() as u64) as usize
}

fn find_link<'a, K, V, B, Q>(bins: &'a mut [Bin<K, V>], hasher: &B, key: &Q) -> &'a mut Bin<K, V>
where
    K: Borrow<Q>,
    B: BuildHasher,
    Q: Hash + Eq + ?Sized,
{
    let index = bin_index(bins, hasher, key);
    let mut link = &mut bins[index];
    while link.as_ref().is_some_and(|entry| entry.key.borrow() != key) {
        // SAFETY: The loop condition has just checked that link is a Some.
        link = &mut unsafe { link.as_mut().unwrap_unchecked() }.next;
    }
    link
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashMap<K, V, B> {
    fn default() -> Self {
        HashMap::with_hasher(B::default())
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for HashMap<K, V, B> {
    /// Copies every chain in order, so the clone has the same layout as the original.
    fn clone(&self) -> Self {
        let bins = self
            .bins
            .iter()
            .map(|chain| {
                let mut copy = None;
                let mut tail = &mut copy;
                let mut entry = chain.as_deref();
                while let Some(existing) = entry {
                    tail = &mut tail
                        .insert(Box::new(Entry {
                            key: existing.key.clone(),
                            value: existing.value.clone(),
                            next: None,
                        }))
                        .next;
                    entry = existing.next.as_deref();
                }
                copy
            })
            .collect();

        HashMap {
            bins,
            len: self.len,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Drop for HashMap<K, V, B> {
    fn drop(&mut self) {
        // Unlink each chain one entry at a time, rather than recursively through Box's drop.
        for bin in self.bins.iter_mut() {
            let mut chain = bin.take();
            while let Some(mut entry) = chain {
                chain = entry.next.take();
            }
        }
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for HashMap<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|v| *value == *v))
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for HashMap<K, V, B> {}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashMap<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::default();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for HashMap<K, V> {
    fn from(value: [(K, V); N]) -> Self {
        Self::from_iter(value)
    }
}

impl<K, Q, V, B> Index<&Q> for HashMap<K, V, B>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    B: BuildHasher,
{
    type Output = V;

    fn index(&self, index: &Q) -> &Self::Output {
        self.at(index)
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let bins = self.bins.iter().map(|chain| {
            let mut entries = Vec::new();
            let mut entry = chain.as_deref();
            while let Some(existing) = entry {
                entries.push(format!("({:?}: {:?})", existing.key, existing.value));
                entry = existing.next.as_deref();
            }
            if entries.is_empty() {
                DebugRaw("-".into())
            } else {
                DebugRaw(entries.join(" -> "))
            }
        });

        f.debug_struct("HashMap")
            .field("bins", &bins.collect::<Vec<_>>())
            .field("len", &self.len)
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Hash + Eq + Display, V: Display, B: BuildHasher> Display for HashMap<K, V, B> {
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
