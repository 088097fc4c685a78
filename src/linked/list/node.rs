use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated through Box<T> rather than alloc directly, because Box<T> has the
// special property that dereferencing it allows a value to be moved back out of the heap.

/// A copyable pointer to a heap allocated [`Node`]. A NodePtr is only ever created for a node
/// that is owned by a live list, and is never dereferenced after [`take_node`](NodePtr::take_node)
/// has been called on any copy of it.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was created by Box::leak in from_node and, per the type's
        // invariant, hasn't been reclaimed yet.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(self) -> &'a T {
        // SAFETY: The node is live and the returned lifetime is bound by the owning list's
        // methods.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: As above, with the owning list borrowed mutably by the caller.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev(self) -> Link<T> {
        // SAFETY: The node is live.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub fn next(self) -> Link<T> {
        // SAFETY: The node is live.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_prev(self, prev: Link<T>) {
        // SAFETY: The node is live and no references to its links are held.
        unsafe { (*self.0.as_ptr()).prev = prev }
    }

    pub fn set_next(self, next: Link<T>) {
        // SAFETY: The node is live and no references to its links are held.
        unsafe { (*self.0.as_ptr()).next = next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
