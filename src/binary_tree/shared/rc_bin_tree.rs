use std::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;

use crate::contiguous::Stack;
use crate::traits::{write_pre_order, BinaryTree, IN_ORDER_EMPTY};

/// A shared binary tree whose nodes are owned through [`Rc`].
///
/// The behaviour is identical to [`BinTree`](super::BinTree), but the handle counts are kept by
/// [`Rc`] instead of by the tree itself. Dropping a handle still tears down unreachable nodes
/// iteratively, so that the last handle to a deep tree can be dropped safely.
///
/// # Time Complexity
/// See [`BinaryTree`] for the complexity of the provided methods. Additionally, `clone` is `O(1)`
/// and `drop` is `O(1)`, or `O(n)` for the last handle to `n` otherwise unreachable nodes.
pub struct RcBinTree<T> {
    pub(crate) root: Option<Rc<RcNode<T>>>,
}

pub(crate) struct RcNode<T> {
    pub elem: T,
    pub left: RcBinTree<T>,
    pub right: RcBinTree<T>,
}

impl<T> RcBinTree<T> {
    /// Creates a new, empty tree.
    pub const fn new() -> RcBinTree<T> {
        RcBinTree { root: None }
    }
}

impl<T> BinaryTree<T> for RcBinTree<T> {
    fn empty() -> Self {
        Self::new()
    }

    fn join(left: &Self, elem: T, right: &Self) -> Self {
        RcBinTree {
            root: Some(Rc::new(RcNode {
                elem,
                left: left.clone(),
                right: right.clone(),
            })),
        }
    }

    fn parts(&self) -> Option<(&T, &Self, &Self)> {
        self.root
            .as_deref()
            .map(|node| (&node.elem, &node.left, &node.right))
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (Some(lhs), Some(rhs)) => Rc::ptr_eq(lhs, rhs),
            (None, None) => true,
            _ => false,
        }
    }

    fn handle_count(&self) -> usize {
        self.root.as_ref().map_or(0, Rc::strong_count)
    }
}

impl<T> Default for RcBinTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RcBinTree<T> {
    fn clone(&self) -> Self {
        RcBinTree {
            root: self.root.clone(),
        }
    }
}

impl<T> Drop for RcBinTree<T> {
    fn drop(&mut self) {
        let Some(Ok(root)) = self.root.take().map(Rc::try_unwrap) else {
            return;
        };

        let mut pending = Stack::new();
        pending.push(root);
        while let Ok(mut node) = pending.try_pop() {
            for child in [node.left.root.take(), node.right.root.take()] {
                if let Some(Ok(child)) = child.map(Rc::try_unwrap) {
                    pending.push(child);
                }
            }
        }
    }
}

impl<T: PartialEq> PartialEq for RcBinTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

impl<T: Eq> Eq for RcBinTree<T> {}

impl<T: Debug> Debug for RcBinTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "RcBinTree(")?;
        write_pre_order::<T, Self, _, _>(self, f, IN_ORDER_EMPTY, |f, elem| {
            write!(f, "{elem:?}")
        })?;
        write!(f, ")")
    }
}

impl<T: Display> Display for RcBinTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}
