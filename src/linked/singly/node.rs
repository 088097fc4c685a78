use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

/// A copyable pointer to a heap allocated [`Node`], with the same ownership rules as the doubly
/// linked list's node pointer: it is only created for nodes owned by a live list and never used
/// after the node has been taken back.
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak and hasn't been reclaimed.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(self) -> &'a T {
        // SAFETY: The node is live for as long as the owning list is borrowed.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: As above, with the owning list borrowed mutably.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn next(self) -> Link<T> {
        // SAFETY: The node is live.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_next(self, next: Link<T>) {
        // SAFETY: The node is live and no references to its link are held.
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

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
