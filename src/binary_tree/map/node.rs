use std::borrow::Borrow;
use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};

pub(crate) struct Branch<K: Ord, V>(pub Option<Box<Node<K, V>>>);

pub(crate) struct Node<K: Ord, V> {
    pub left: Branch<K, V>,
    pub right: Branch<K, V>,
    pub key: K,
    pub value: V,
}

impl<K: Ord, V> Node<K, V> {
    pub const fn new(key: K, value: V) -> Node<K, V> {
        Node {
            left: Branch(None),
            right: Branch(None),
            key,
            value,
        }
    }

    pub const fn tuple(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}

impl<K: Ord, V> Branch<K, V> {
    /// Returns the branch holding `key`, or the empty branch where it would be inserted.
    pub fn find<Q>(&self, key: &Q) -> &Branch<K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut branch = self;
        while let Some(node) = &branch.0 {
            branch = match key.cmp(node.key.borrow()) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => break,
            };
        }
        branch
    }

    /// The mutable version of [`Branch::find`].
    pub fn seek<Q>(&mut self, key: &Q) -> &mut Branch<K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut branch = self;
        loop {
            let ordering = match &branch.0 {
                Some(node) => key.cmp(node.key.borrow()),
                None => return branch,
            };
            if ordering == Ordering::Equal {
                return branch;
            }

            // SAFETY: We've already matched branch.0 as a Some, but the mutable reference can only
            // be taken once we know that we aren't returning this branch.
            let node = unsafe { branch.0.as_mut().unwrap_unchecked() };
            branch = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }

    pub fn first(&self) -> Option<&Node<K, V>> {
        let mut node = self.0.as_deref()?;
        while let Some(left) = node.left.0.as_deref() {
            node = left;
        }
        Some(node)
    }

    pub fn last(&self) -> Option<&Node<K, V>> {
        let mut node = self.0.as_deref()?;
        while let Some(right) = node.right.0.as_deref() {
            node = right;
        }
        Some(node)
    }

    /// Unlinks the leftmost node under this branch, replacing it with its right subtree.
    pub fn take_first(&mut self) -> Option<Box<Node<K, V>>> {
        let mut branch = self;
        while branch.0.as_ref().is_some_and(|node| node.left.0.is_some()) {
            // SAFETY: The loop condition has just checked that branch.0 is a Some.
            branch = &mut unsafe { branch.0.as_mut().unwrap_unchecked() }.left;
        }
        let mut node = branch.0.take()?;
        branch.0 = node.right.0.take();
        Some(node)
    }

    /// Unlinks the node at the root of this branch and returns it, keeping every other node below
    /// it in order. A node with two children is replaced by its in-order successor.
    pub fn unlink(&mut self) -> Option<Box<Node<K, V>>> {
        let mut node = self.0.take()?;
        self.0 = if node.left.is_none() {
            node.right.0.take()
        } else if let Some(mut successor) = node.right.take_first() {
            successor.left.0 = node.left.0.take();
            successor.right.0 = node.right.0.take();
            Some(successor)
        } else {
            node.left.0.take()
        };
        Some(node)
    }
}

impl<K: Ord, V> Default for Branch<K, V> {
    fn default() -> Self {
        Branch(None)
    }
}

impl<K: Ord, V> Drop for Branch<K, V> {
    fn drop(&mut self) {
        // Rotate left children up until there are none, so that every node is freed without
        // recursion or any extra allocation.
        let mut curr = self.0.take();
        while let Some(mut node) = curr {
            curr = match node.left.0.take() {
                Some(mut left) => {
                    node.left.0 = left.right.0.take();
                    left.right.0 = Some(node);
                    Some(left)
                },
                None => node.right.0.take(),
            };
        }
    }
}

impl<K: Ord, V> Deref for Branch<K, V> {
    type Target = Option<Box<Node<K, V>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K: Ord, V> DerefMut for Branch<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
