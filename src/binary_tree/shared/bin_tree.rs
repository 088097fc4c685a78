use std::cell::Cell;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::contiguous::Stack;
use crate::traits::{write_pre_order, BinaryTree, IN_ORDER_EMPTY};

/// A shared binary tree which counts the handles to each of its nodes manually.
///
/// Every node stores the number of handles that refer to it directly, either held by a caller or
/// by a parent node. Cloning a handle, joining it into a new node or taking
/// [`left`](BinaryTree::left) / [`right`](BinaryTree::right) increments the count, and dropping a
/// handle decrements it. A node is freed when its count reaches zero, at which point its children
/// are released by the same rule. This means that a subtree taken from a tree outlives the tree
/// itself.
///
/// Handles never mutate the nodes that they refer to, so sharing is never observable, apart from
/// [`handle_count`](BinaryTree::handle_count) and [`ptr_eq`](BinaryTree::ptr_eq).
///
/// Trees are neither [`Send`] nor [`Sync`], because the counts aren't atomic.
///
/// # Time Complexity
/// See [`BinaryTree`] for the complexity of the provided methods. Additionally, `clone` is `O(1)`
/// and `drop` is `O(1)`, or `O(n)` for the last handle to `n` otherwise unreachable nodes.
pub struct BinTree<T> {
    pub(crate) root: Option<NodePtr<T>>,
    pub(crate) _phantom: PhantomData<T>,
}

pub(crate) struct Node<T> {
    pub elem: T,
    pub left: BinTree<T>,
    pub right: BinTree<T>,
    pub refs: Cell<usize>,
}

pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    pub fn node<'a>(self) -> &'a Node<T> {
        // SAFETY: A NodePtr is only created from a leaked Box and is only freed by
        // NodePtr::release, once no handles can reach it.
        unsafe { self.0.as_ref() }
    }

    pub fn retain(self) {
        let refs = &self.node().refs;
        refs.set(refs.get() + 1);
    }

    /// Decrements the count of the node, returning ownership of the node if that was the last
    /// reference to it.
    pub fn release(self) -> Option<Box<Node<T>>> {
        let refs = &self.node().refs;
        refs.set(refs.get() - 1);
        if refs.get() == 0 {
            // SAFETY: The count has reached zero, so no other handle can access the node.
            Some(unsafe { Box::from_raw(self.0.as_ptr()) })
        } else {
            None
        }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> BinTree<T> {
    /// Creates a new, empty tree.
    pub const fn new() -> BinTree<T> {
        BinTree {
            root: None,
            _phantom: PhantomData,
        }
    }
}

impl<T> BinaryTree<T> for BinTree<T> {
    fn empty() -> Self {
        Self::new()
    }

    fn join(left: &Self, elem: T, right: &Self) -> Self {
        BinTree {
            root: Some(NodePtr::from_node(Node {
                elem,
                left: left.clone(),
                right: right.clone(),
                refs: Cell::new(1),
            })),
            _phantom: PhantomData,
        }
    }

    fn parts(&self) -> Option<(&T, &Self, &Self)> {
        self.root.map(|ptr| {
            let node = ptr.node();
            (&node.elem, &node.left, &node.right)
        })
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        match (self.root, other.root) {
            (Some(lhs), Some(rhs)) => lhs.0 == rhs.0,
            (None, None) => true,
            _ => false,
        }
    }

    fn handle_count(&self) -> usize {
        self.root.map_or(0, |ptr| ptr.node().refs.get())
    }
}

impl<T> Default for BinTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for BinTree<T> {
    fn clone(&self) -> Self {
        if let Some(ptr) = self.root {
            ptr.retain();
        }
        BinTree {
            root: self.root,
            _phantom: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if !self.ptr_eq(source) {
            *self = source.clone();
        }
    }
}

impl<T> Drop for BinTree<T> {
    fn drop(&mut self) {
        let Some(root) = self.root.take().and_then(NodePtr::release) else {
            return;
        };

        let mut pending = Stack::new();
        pending.push(root);
        while let Ok(mut node) = pending.try_pop() {
            for child in [node.left.root.take(), node.right.root.take()] {
                if let Some(child) = child.and_then(NodePtr::release) {
                    pending.push(child);
                }
            }
        }
    }
}

impl<T: PartialEq> PartialEq for BinTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

impl<T: Eq> Eq for BinTree<T> {}

impl<T: Debug> Debug for BinTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BinTree(")?;
        write_pre_order::<T, Self, _, _>(self, f, IN_ORDER_EMPTY, |f, elem| {
            write!(f, "{elem:?}")
        })?;
        write!(f, ")")
    }
}

impl<T: Display> Display for BinTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}
