use std::fmt::{self, Display, Write};
use std::io::BufRead;
use std::str::FromStr;

use crate::binary_tree::Tokens;
use crate::contiguous::Stack;
use crate::linked::{DoublyLinkedList, Queue};
use crate::util::error::{EmptyStructure, ParseTreeError, Structure};
use crate::util::result::ResultExtension;

/// The number of spaces that each level of a tree is indented by when rendered.
pub const TREE_INDENTATION: usize = 4;

/// The token that represents an empty subtree in the parenthesised in-order format.
pub const IN_ORDER_EMPTY: &str = ".";

const TOP_BANNER: &str = "==== Tree =====";

const BOTTOM_BANNER: &str = "===============";

/// A handle to an immutable, possibly shared binary tree.
///
/// A tree is either empty or a node holding an element and two subtrees. Several handles can
/// refer to the same node: [`left`](BinaryTree::left) and [`right`](BinaryTree::right) return
/// new handles into the existing structure rather than copies of it, and cloning a handle only
/// shares its root. A node lives as long as any handle can reach it.
///
/// Implementors only provide construction and access to a node's parts. All of the algorithms in
/// this trait are iterative, so degenerate (list-like) trees don't exhaust the call stack.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of nodes reachable from the handle.
/// - `d`: The depth of the tree.
///
/// | Method | Complexity |
/// |-|-|
/// | `join` / `leaf` | `O(1)` |
/// | `elem` / `left` / `right` | `O(1)` |
/// | `pre_order` / `in_order` / `post_order` / `levels` | `O(n)` |
/// | `node_count` / `depth` / `leaf_count` | `O(n)` |
/// | `structural_eq` | `O(n)` |
/// | `render` | `O(n)` |
/// | `read_pre_order` / `read_in_order` | `O(n)` |
///
/// All traversals use `O(d)` auxiliary space, apart from `levels` which holds at most one level
/// of the tree at a time.
pub trait BinaryTree<T>: Clone + Sized {
    /// Creates an empty tree.
    fn empty() -> Self;

    /// Creates a new node holding `elem`, with the roots of `left` and `right` as its children.
    /// The children are shared with the provided handles, not copied.
    fn join(left: &Self, elem: T, right: &Self) -> Self;

    /// Returns the element and both subtrees of the root node, or [`None`] if the tree is empty.
    fn parts(&self) -> Option<(&T, &Self, &Self)>;

    /// Returns true if both handles refer to the same root node, or are both empty.
    fn ptr_eq(&self, other: &Self) -> bool;

    /// Returns the number of live handles referring to the root node, or 0 if the tree is empty.
    fn handle_count(&self) -> usize;

    /// Creates a tree with a single node and no children.
    fn leaf(elem: T) -> Self {
        Self::join(&Self::empty(), elem, &Self::empty())
    }

    fn is_empty(&self) -> bool {
        self.parts().is_none()
    }

    fn try_elem(&self) -> Result<&T, EmptyStructure> {
        self.parts()
            .map(|(elem, _, _)| elem)
            .ok_or(EmptyStructure(Structure::Tree))
    }

    /// Returns a reference to the element at the root of the tree.
    ///
    /// # Panics
    /// Panics if the tree is empty.
    fn elem(&self) -> &T {
        self.try_elem().throw()
    }

    /// Returns a new handle to the left subtree, sharing its nodes.
    fn try_left(&self) -> Result<Self, EmptyStructure> {
        self.parts()
            .map(|(_, left, _)| left.clone())
            .ok_or(EmptyStructure(Structure::Tree))
    }

    /// # Panics
    /// Panics if the tree is empty.
    fn left(&self) -> Self {
        self.try_left().throw()
    }

    /// Returns a new handle to the right subtree, sharing its nodes.
    fn try_right(&self) -> Result<Self, EmptyStructure> {
        self.parts()
            .map(|(_, _, right)| right.clone())
            .ok_or(EmptyStructure(Structure::Tree))
    }

    /// # Panics
    /// Panics if the tree is empty.
    fn right(&self) -> Self {
        self.try_right().throw()
    }

    /// Returns the elements of the tree with each node before its left and then right subtree.
    fn pre_order(&self) -> DoublyLinkedList<T>
    where
        T: Clone,
    {
        let mut list = DoublyLinkedList::new();
        let mut pending = Stack::new();
        pending.push(self);

        while let Ok(tree) = pending.try_pop() {
            if let Some((elem, left, right)) = tree.parts() {
                list.push_back(elem.clone());
                pending.push(right);
                pending.push(left);
            }
        }
        list
    }

    /// Returns the elements of the tree with each node between its left and right subtree.
    fn in_order(&self) -> DoublyLinkedList<T>
    where
        T: Clone,
    {
        let mut list = DoublyLinkedList::new();
        let mut pending = Stack::new();
        let mut curr = self;

        loop {
            while let Some((elem, left, right)) = curr.parts() {
                pending.push((elem, right));
                curr = left;
            }
            match pending.try_pop() {
                Ok((elem, right)) => {
                    list.push_back(elem.clone());
                    curr = right;
                },
                Err(_) => break list,
            }
        }
    }

    /// Returns the elements of the tree with each node after its left and then right subtree.
    fn post_order(&self) -> DoublyLinkedList<T>
    where
        T: Clone,
    {
        // Root, right, left, built back to front.
        let mut list = DoublyLinkedList::new();
        let mut pending = Stack::new();
        pending.push(self);

        while let Ok(tree) = pending.try_pop() {
            if let Some((elem, left, right)) = tree.parts() {
                list.push_front(elem.clone());
                pending.push(left);
                pending.push(right);
            }
        }
        list
    }

    /// Returns the elements of the tree level by level, from the root down and left to right
    /// within each level.
    fn levels(&self) -> DoublyLinkedList<T>
    where
        T: Clone,
    {
        let mut list = DoublyLinkedList::new();
        let mut pending = Queue::new();
        pending.push_back(self);

        while let Ok(tree) = pending.try_pop_front() {
            if let Some((elem, left, right)) = tree.parts() {
                list.push_back(elem.clone());
                pending.push_back(left);
                pending.push_back(right);
            }
        }
        list
    }

    /// Returns the number of nodes in the tree.
    fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = Stack::new();
        pending.push(self);

        while let Ok(tree) = pending.try_pop() {
            if let Some((_, left, right)) = tree.parts() {
                count += 1;
                pending.push(left);
                pending.push(right);
            }
        }
        count
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, or 0 for an empty
    /// tree.
    fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = Stack::new();
        pending.push((self, 0));

        while let Ok((tree, depth)) = pending.try_pop() {
            match tree.parts() {
                Some((_, left, right)) => {
                    pending.push((left, depth + 1));
                    pending.push((right, depth + 1));
                },
                None => deepest = deepest.max(depth),
            }
        }
        deepest
    }

    /// Returns the number of nodes without any children.
    fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut pending = Stack::new();
        pending.push(self);

        while let Ok(tree) = pending.try_pop() {
            if let Some((_, left, right)) = tree.parts() {
                if left.is_empty() && right.is_empty() {
                    count += 1;
                }
                pending.push(left);
                pending.push(right);
            }
        }
        count
    }

    /// Compares two trees by shape and elements, rather than by identity. Subtrees that are
    /// shared between both trees aren't visited.
    fn structural_eq(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        let mut pending = Stack::new();
        pending.push((self, other));

        while let Ok((lhs, rhs)) = pending.try_pop() {
            if lhs.ptr_eq(rhs) {
                continue;
            }
            match (lhs.parts(), rhs.parts()) {
                (Some((lhs_elem, lhs_left, lhs_right)), Some((rhs_elem, rhs_left, rhs_right))) => {
                    if lhs_elem != rhs_elem {
                        return false;
                    }
                    pending.push((lhs_left, rhs_left));
                    pending.push((lhs_right, rhs_right));
                },
                (None, None) => (),
                _ => return false,
            }
        }
        true
    }

    /// Writes the tree sideways, with the right subtree above the root and the left subtree below
    /// it. Each level is indented by [`TREE_INDENTATION`] more spaces than its parent, and the
    /// whole tree is surrounded by a pair of banner lines.
    ///
    /// ```text
    /// ==== Tree =====
    ///     3
    ///  1
    ///     2
    /// ===============
    /// ```
    fn render<W: Write>(&self, out: &mut W) -> fmt::Result
    where
        T: Display,
    {
        writeln!(out, "{TOP_BANNER}")?;

        let mut pending = Stack::new();
        let mut curr = (self, 0);
        loop {
            let (mut tree, mut indent) = curr;
            while let Some((elem, left, right)) = tree.parts() {
                pending.push((elem, left, indent));
                tree = right;
                indent += TREE_INDENTATION;
            }
            match pending.try_pop() {
                Ok((elem, left, indent)) => {
                    writeln!(out, "{:>indent$}{elem}", " ")?;
                    curr = (left, indent + TREE_INDENTATION);
                },
                Err(_) => break,
            }
        }

        writeln!(out, "{BOTTOM_BANNER}")
    }

    /// Returns the tree in pre-order, with `empty` in place of every empty subtree. The result can
    /// be read back with [`read_pre_order`](BinaryTree::read_pre_order), as long as no element is
    /// written as `empty`.
    fn to_pre_order_tokens(&self, empty: &str) -> String
    where
        T: Display,
    {
        let mut out = String::new();
        // Writing to a String can't fail.
        let _ = write_pre_order::<T, Self, _, _>(self, &mut out, empty, |out, elem| {
            write!(out, "{elem}")
        });
        out
    }

    /// Returns the tree in the parenthesised in-order format read by
    /// [`read_in_order`](BinaryTree::read_in_order).
    fn to_in_order_tokens(&self) -> String
    where
        T: Display,
    {
        enum Step<'a, T, S> {
            Tree(&'a S),
            Elem(&'a T),
            Close,
        }

        let mut out = String::new();
        let mut pending = Stack::new();
        pending.push(Step::Tree(self));

        while let Ok(step) = pending.try_pop() {
            if !out.is_empty() {
                out.push(' ');
            }
            match step {
                Step::Tree(tree) => match tree.parts() {
                    Some((elem, left, right)) => {
                        out.push('(');
                        pending.push(Step::Close);
                        pending.push(Step::Tree(right));
                        pending.push(Step::Elem(elem));
                        pending.push(Step::Tree(left));
                    },
                    None => out.push_str(IN_ORDER_EMPTY),
                },
                Step::Elem(elem) => {
                    let _ = write!(out, "{elem}");
                },
                Step::Close => out.push(')'),
            }
        }
        out
    }

    /// Builds a tree from pre-order tokens, where the token `empty` stands for an empty subtree.
    /// A tree of `n` elements is exactly `2n + 1` tokens long, and only those tokens are taken
    /// from `tokens`.
    ///
    /// # Errors
    /// Returns a [`ParseTreeError`] if the tokens run out before the tree is complete, or if a
    /// token can't be parsed as an element.
    fn read_pre_order<I, S>(mut tokens: I, empty: &str) -> Result<Self, ParseTreeError>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
        T: FromStr,
    {
        enum Pending<T, S> {
            Elem(T),
            ElemLeft(T, S),
        }

        let mut pending = Stack::new();
        loop {
            let token = tokens.next().ok_or(ParseTreeError::UnexpectedEnd)?;
            let token = token.as_ref();
            if token != empty {
                pending.push(Pending::Elem(parse_elem(token)?));
                continue;
            }

            let mut tree = Self::empty();
            loop {
                match pending.try_pop() {
                    Ok(Pending::Elem(elem)) => {
                        pending.push(Pending::ElemLeft(elem, tree));
                        break;
                    },
                    Ok(Pending::ElemLeft(elem, left)) => tree = Self::join(&left, elem, &tree),
                    Err(_) => return Ok(tree),
                }
            }
        }
    }

    /// Builds a tree from the parenthesised in-order format, where `.` is an empty subtree and a
    /// node is written as `( <left> <elem> <right> )`. Only the tokens that make up the tree are
    /// taken from `tokens`.
    ///
    /// ```text
    /// ( ( . 2 . ) 1 ( . 3 . ) )
    /// ```
    ///
    /// # Errors
    /// Returns a [`ParseTreeError`] if the tokens run out before the tree is complete, if a
    /// delimiter is missing or if a token can't be parsed as an element.
    fn read_in_order<I, S>(mut tokens: I) -> Result<Self, ParseTreeError>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
        T: FromStr,
    {
        enum Pending<T, S> {
            Open,
            Right(S, T),
        }

        let mut pending = Stack::new();
        loop {
            let token = tokens.next().ok_or(ParseTreeError::UnexpectedEnd)?;
            match token.as_ref() {
                "(" => {
                    pending.push(Pending::Open);
                    continue;
                },
                IN_ORDER_EMPTY => (),
                found => {
                    return Err(ParseTreeError::Expected {
                        expected: "(",
                        found: found.to_owned(),
                    });
                },
            }

            let mut tree = Self::empty();
            loop {
                match pending.try_pop() {
                    Ok(Pending::Open) => {
                        let token = tokens.next().ok_or(ParseTreeError::UnexpectedEnd)?;
                        pending.push(Pending::Right(tree, parse_elem(token.as_ref())?));
                        break;
                    },
                    Ok(Pending::Right(left, elem)) => {
                        let token = tokens.next().ok_or(ParseTreeError::UnexpectedEnd)?;
                        if token.as_ref() != ")" {
                            return Err(ParseTreeError::Expected {
                                expected: ")",
                                found: token.as_ref().to_owned(),
                            });
                        }
                        tree = Self::join(&left, elem, &tree);
                    },
                    Err(_) => return Ok(tree),
                }
            }
        }
    }

    /// Parses a whole string of whitespace-separated pre-order tokens.
    ///
    /// # Errors
    /// As for [`read_pre_order`](BinaryTree::read_pre_order), with the addition of
    /// [`ParseTreeError::TrailingInput`] if any tokens are left over.
    fn parse_pre_order(input: &str, empty: &str) -> Result<Self, ParseTreeError>
    where
        T: FromStr,
    {
        let mut tokens = input.split_whitespace();
        let tree = Self::read_pre_order(&mut tokens, empty)?;
        reject_trailing(tokens)?;
        Ok(tree)
    }

    /// Parses a whole string in the parenthesised in-order format.
    ///
    /// # Errors
    /// As for [`read_in_order`](BinaryTree::read_in_order), with the addition of
    /// [`ParseTreeError::TrailingInput`] if any tokens are left over.
    fn parse_in_order(input: &str) -> Result<Self, ParseTreeError>
    where
        T: FromStr,
    {
        let mut tokens = input.split_whitespace();
        let tree = Self::read_in_order(&mut tokens)?;
        reject_trailing(tokens)?;
        Ok(tree)
    }

    /// Reads pre-order tokens from `reader` until the tree is complete. Anything after the line
    /// holding the last token is left unread.
    fn from_reader_pre_order<R: BufRead>(reader: R, empty: &str) -> Result<Self, ParseTreeError>
    where
        T: FromStr,
    {
        let mut tokens = Tokens::new(reader);
        let tree = Self::read_pre_order(&mut tokens, empty);
        tokens.check(tree)
    }

    /// Reads the parenthesised in-order format from `reader` until the tree is complete.
    fn from_reader_in_order<R: BufRead>(reader: R) -> Result<Self, ParseTreeError>
    where
        T: FromStr,
    {
        let mut tokens = Tokens::new(reader);
        let tree = Self::read_in_order(&mut tokens);
        tokens.check(tree)
    }
}

/// Writes `tree` in pre-order, using `write_elem` for each element and `empty` for each empty
/// subtree.
pub(crate) fn write_pre_order<T, B, W, F>(
    tree: &B,
    out: &mut W,
    empty: &str,
    mut write_elem: F,
) -> fmt::Result
where
    B: BinaryTree<T>,
    W: Write,
    F: FnMut(&mut W, &T) -> fmt::Result,
{
    let mut pending = Stack::new();
    pending.push(tree);
    let mut first = true;

    while let Ok(tree) = pending.try_pop() {
        if !first {
            out.write_char(' ')?;
        }
        first = false;

        match tree.parts() {
            Some((elem, left, right)) => {
                write_elem(out, elem)?;
                pending.push(right);
                pending.push(left);
            },
            None => out.write_str(empty)?,
        }
    }
    Ok(())
}

fn parse_elem<T: FromStr>(token: &str) -> Result<T, ParseTreeError> {
    token.parse().map_err(|_| ParseTreeError::InvalidElement {
        token: token.to_owned(),
    })
}

fn reject_trailing<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<(), ParseTreeError> {
    match tokens.next() {
        Some(token) => Err(ParseTreeError::TrailingInput {
            token: token.to_owned(),
        }),
        None => Ok(()),
    }
}
