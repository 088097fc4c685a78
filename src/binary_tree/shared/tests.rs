#![cfg(test)]

use std::fmt::Debug;
use std::io::{self, BufRead, BufReader, Cursor, Read};

use proptest::prelude::*;

use super::*;
use crate::traits::BinaryTree;
use crate::util::alloc::CountedDrop;
use crate::util::error::{EmptyStructure, Structure};
use crate::util::panic::assert_panics;

fn sample<B: BinaryTree<i32>>() -> B {
    // 1 has the children 2 and 3, and 3 has a left child of 4.
    B::join(
        &B::leaf(2),
        1,
        &B::join(&B::leaf(4), 3, &B::empty()),
    )
}

fn check_pre_order_scenario<B: BinaryTree<i32> + Debug>() {
    let tree = B::parse_pre_order("1 2 X X 3 X X", "X").expect("input is valid");
    assert_eq!(tree.node_count(), 3);
    assert_eq!(tree.depth(), 2);
    assert_eq!(tree.leaf_count(), 2);
    assert_eq!(tree.in_order(), [2, 1, 3]);
}

fn check_traversals<B: BinaryTree<i32>>() {
    let tree: B = sample();
    assert_eq!(tree.pre_order(), [1, 2, 3, 4]);
    assert_eq!(tree.in_order(), [2, 1, 4, 3]);
    assert_eq!(tree.post_order(), [2, 4, 3, 1]);
    assert_eq!(tree.levels(), [1, 2, 3, 4]);
    assert_eq!((tree.node_count(), tree.depth(), tree.leaf_count()), (4, 3, 2));

    let empty = B::empty();
    assert!(empty.pre_order().is_empty());
    assert!(empty.levels().is_empty());
    assert_eq!((empty.node_count(), empty.depth(), empty.leaf_count()), (0, 0, 0));
}

fn check_empty_access<B: BinaryTree<i32> + Debug>() {
    let tree = B::empty();
    assert!(tree.is_empty());
    assert_eq!(tree.handle_count(), 0);
    assert_eq!(tree.try_elem(), Err(EmptyStructure(Structure::Tree)));
    assert_eq!(tree.try_left().err(), Some(EmptyStructure(Structure::Tree)));
    assert_eq!(tree.try_right().err(), Some(EmptyStructure(Structure::Tree)));
    assert_panics!({ tree.elem(); });
    assert_panics!({ tree.left(); });
    assert_panics!({ tree.right(); });
}

fn check_subtrees_are_shared<B: BinaryTree<i32>>() {
    let tree: B = sample();
    let right = tree.right();
    assert!(
        right.ptr_eq(&tree.right()),
        "Taking a subtree twice should return handles to the same node."
    );
    assert_eq!(right.handle_count(), 2);
    assert_eq!(tree.handle_count(), 1);

    let copy = tree.clone();
    assert!(copy.ptr_eq(&tree));
    assert_eq!(tree.handle_count(), 2);
    drop(copy);
    assert_eq!(tree.handle_count(), 1);

    drop(tree);
    assert_eq!(
        right.handle_count(),
        1,
        "Dropping the parent should release its reference to the subtree."
    );
    assert_eq!(*right.elem(), 3);
    assert_eq!(*right.left().elem(), 4);
    assert!(right.right().is_empty());
}

fn check_structural_eq<B: BinaryTree<i32>>() {
    let lhs: B = sample();
    let rhs: B = sample();
    assert!(!lhs.ptr_eq(&rhs));
    assert!(lhs.structural_eq(&rhs), "Identically built trees should be equal.");
    assert!(lhs.structural_eq(&lhs));
    assert!(B::empty().structural_eq(&B::empty()));

    let changed = B::join(&lhs.left(), 1, &B::join(&B::leaf(5), 3, &B::empty()));
    assert!(!lhs.structural_eq(&changed), "A different element should break equality.");

    let reshaped = B::join(&lhs.left(), 1, &B::join(&B::empty(), 3, &B::leaf(4)));
    assert!(!lhs.structural_eq(&reshaped), "A different shape should break equality.");
    assert!(!lhs.structural_eq(&B::empty()));
}

fn check_formats<B: BinaryTree<i32> + Debug>() {
    let tree: B = sample();
    assert_eq!(tree.to_pre_order_tokens("X"), "1 2 X X 3 4 X X X");
    assert_eq!(tree.to_in_order_tokens(), "( ( . 2 . ) 1 ( ( . 4 . ) 3 . ) )");
    assert_eq!(B::empty().to_pre_order_tokens("X"), "X");
    assert_eq!(B::empty().to_in_order_tokens(), ".");

    let from_in_order = B::parse_in_order("( ( . 2 . ) 1 ( ( . 4 . ) 3 . ) )").expect("valid");
    assert!(from_in_order.structural_eq(&tree));

    let mut rendered = String::new();
    tree.render(&mut rendered).expect("writing to a String can't fail");
    assert_eq!(
        rendered,
        "==== Tree =====\n    3\n        4\n 1\n    2\n===============\n",
        "Trees should be rendered sideways, with the right subtree on top."
    );
}

fn check_parse_errors<B: BinaryTree<i32> + Debug>() {
    assert!(B::parse_pre_order("1 X", "X").unwrap_err().is_unexpected_end());
    assert!(B::parse_pre_order("1 X X X", "X").unwrap_err().is_trailing_input());
    assert!(B::parse_pre_order("one X X", "X").unwrap_err().is_invalid_element());
    assert!(B::parse_pre_order("", "X").unwrap_err().is_unexpected_end());

    assert!(B::parse_in_order("( . 1 .").unwrap_err().is_unexpected_end());
    assert!(B::parse_in_order("( . 1 . ]").unwrap_err().is_expected());
    assert!(B::parse_in_order("1").unwrap_err().is_expected());
    assert!(B::parse_in_order("( . x . )").unwrap_err().is_invalid_element());
    assert!(B::parse_in_order("( . 1 . ) 2").unwrap_err().is_trailing_input());
    assert_eq!(
        B::parse_in_order("( . 1 . ]").unwrap_err().to_string(),
        "expected `)` but found `]`"
    );
}

fn check_deep_tree<B: BinaryTree<usize>>() {
    let mut tree = B::empty();
    for i in 0..100_000 {
        tree = B::join(&tree, i, &B::empty());
    }
    assert_eq!(tree.node_count(), 100_000);
    assert_eq!(tree.depth(), 100_000);
    assert_eq!(tree.leaf_count(), 1);

    let tokens = tree.to_pre_order_tokens("X");
    let copy = B::parse_pre_order(&tokens, "X").expect("tokens are valid");
    assert!(copy.structural_eq(&tree));
}

#[test]
fn test_pre_order_scenario() {
    check_pre_order_scenario::<BinTree<_>>();
    check_pre_order_scenario::<RcBinTree<_>>();
}

#[test]
fn test_traversals() {
    check_traversals::<BinTree<_>>();
    check_traversals::<RcBinTree<_>>();
}

#[test]
fn test_empty_access() {
    check_empty_access::<BinTree<_>>();
    check_empty_access::<RcBinTree<_>>();
}

#[test]
fn test_subtrees_are_shared() {
    check_subtrees_are_shared::<BinTree<_>>();
    check_subtrees_are_shared::<RcBinTree<_>>();
}

#[test]
fn test_structural_eq() {
    check_structural_eq::<BinTree<_>>();
    check_structural_eq::<RcBinTree<_>>();
    assert_eq!(sample::<BinTree<_>>(), sample::<BinTree<_>>());
    assert_ne!(sample::<RcBinTree<_>>(), RcBinTree::leaf(1));
}

#[test]
fn test_formats() {
    check_formats::<BinTree<_>>();
    check_formats::<RcBinTree<_>>();
    assert_eq!(
        sample::<BinTree<_>>().to_string(),
        sample::<RcBinTree<_>>().to_string()
    );
    assert_eq!(format!("{:?}", BinTree::leaf(1)), "BinTree(1 . .)");
}

#[test]
fn test_parse_errors() {
    check_parse_errors::<BinTree<_>>();
    check_parse_errors::<RcBinTree<_>>();
}

#[test]
fn test_deep_tree() {
    check_deep_tree::<BinTree<_>>();
    check_deep_tree::<RcBinTree<_>>();
}

#[test]
fn test_clone_from() {
    let mut lhs: BinTree<i32> = sample();
    let rhs = BinTree::leaf(7);
    lhs.clone_from(&rhs);
    assert!(lhs.ptr_eq(&rhs));
    assert_eq!(rhs.handle_count(), 2);

    lhs = BinTree::new();
    assert_eq!(rhs.handle_count(), 1, "Assignment should release the previous tree.");
    assert!(lhs.is_empty());
}

#[test]
fn test_release_cascades() {
    let counter = CountedDrop::new();
    let tree = BinTree::join(
        &BinTree::leaf(counter.clone()),
        counter.clone(),
        &BinTree::leaf(counter.clone()),
    );
    let left = tree.left();
    assert_eq!(counter.dropped(), 0);

    drop(tree);
    assert_eq!(
        counter.dropped(),
        2,
        "Only the root and the unshared right subtree should be dropped."
    );

    drop(left);
    assert_eq!(counter.dropped(), 3);

    let counter = CountedDrop::new();
    let tree = RcBinTree::join(
        &RcBinTree::leaf(counter.clone()),
        counter.clone(),
        &RcBinTree::leaf(counter.clone()),
    );
    let right = tree.right();
    drop(tree);
    assert_eq!(counter.dropped(), 2);
    drop(right);
    assert_eq!(counter.dropped(), 3);
}

#[test]
fn test_reader_leaves_remaining_input() {
    let mut reader = Cursor::new("1 2 X X\n3 X X\nleft over");
    let tree = BinTree::<i32>::from_reader_pre_order(&mut reader, "X").expect("input is valid");
    assert_eq!(tree.in_order(), [2, 1, 3]);

    let mut rest = String::new();
    reader.read_to_string(&mut rest).expect("reading from a Cursor can't fail");
    assert_eq!(rest, "left over");

    let tree = RcBinTree::<i32>::from_reader_in_order(Cursor::new("(\n. 1\n.\n)"))
        .expect("input is valid");
    assert_eq!(*tree.elem(), 1);
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("disconnected"))
    }
}

#[test]
fn test_reader_errors() {
    let result = BinTree::<i32>::from_reader_pre_order(BufReader::new(FailingReader), "X");
    assert!(
        result.unwrap_err().is_io(),
        "An I/O error should take priority over running out of tokens."
    );

    let mut tokens = Tokens::new(BufReader::new(FailingReader));
    assert_eq!(tokens.next(), None);
    assert!(tokens.take_error().is_some());

    let mut tokens = Tokens::new(Cursor::new("a  b\n\n c"));
    assert_eq!(tokens.by_ref().collect::<Vec<_>>(), ["a", "b", "c"]);
    assert!(tokens.take_error().is_none());
    assert!(tokens.into_inner().fill_buf().expect("cursor").is_empty());
}

fn arb_tree() -> impl Strategy<Value = BinTree<i32>> {
    let leaf = prop_oneof![Just(BinTree::new()), any::<i32>().prop_map(BinTree::leaf)];
    leaf.prop_recursive(8, 64, 2, |inner| {
        (inner.clone(), any::<i32>(), inner).prop_map(|(left, elem, right)| {
            BinTree::join(&left, elem, &right)
        })
    })
}

proptest! {
    #[test]
    fn prop_pre_order_round_trip(tree in arb_tree()) {
        let tokens = tree.to_pre_order_tokens("X");
        let copy = BinTree::<i32>::parse_pre_order(&tokens, "X").expect("tokens are valid");
        prop_assert_eq!(&copy, &tree);

        let other = RcBinTree::<i32>::parse_pre_order(&tokens, "X").expect("tokens are valid");
        prop_assert_eq!(other.in_order(), tree.in_order());
        prop_assert_eq!(other.to_string(), tree.to_string());
    }

    #[test]
    fn prop_in_order_round_trip(tree in arb_tree()) {
        let copy = BinTree::<i32>::parse_in_order(&tree.to_in_order_tokens())
            .expect("tokens are valid");
        prop_assert_eq!(copy, tree);
    }
}
