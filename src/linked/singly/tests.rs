#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::{EmptyStructure, IndexOutOfBounds, Structure};
use crate::util::panic::assert_panics;

#[test]
fn test_both_ends() {
    let mut list = SinglyLinkedList::new();
    list.push_back(2);
    list.push_front(1);
    list.push_back(3);

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!((*list.front(), *list.back()), (1, 3));

    assert_eq!(list.pop_back(), 3);
    assert_eq!(*list.back(), 2, "Popping the back should move the tail pointer back.");
    list.push_back(4);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 4]);

    assert_eq!(list.pop_front(), 1);
    assert_eq!(list.pop_back(), 4);
    assert_eq!(list.pop_back(), 2);
    assert!(list.is_empty());

    list.push_back(5);
    assert_eq!(
        (*list.front(), *list.back()),
        (5, 5),
        "A list emptied from the back should be reusable."
    );
}

#[test]
fn test_empty_access() {
    let mut list = SinglyLinkedList::<char>::new();
    assert_eq!(list.try_front(), Err(EmptyStructure(Structure::List)));
    assert_eq!(list.try_back(), Err(EmptyStructure(Structure::List)));
    assert_eq!(list.try_pop_front(), Err(EmptyStructure(Structure::List)));
    assert_eq!(list.try_pop_back(), Err(EmptyStructure(Structure::List)));
    assert_panics!({
        SinglyLinkedList::<char>::new().pop_front();
    });
}

#[test]
fn test_at() {
    let mut list: SinglyLinkedList<_> = "abcd".chars().collect();
    assert_eq!(*list.at(0), 'a');
    assert_eq!(*list.at(3), 'd');
    *list.at_mut(1) = 'B';
    assert_eq!(list.to_string(), "a B c d");
    assert_eq!(list.try_at(4), Err(IndexOutOfBounds { index: 4, len: 4 }));
}

#[test]
fn test_clone_and_eq() {
    let list: SinglyLinkedList<_> = (0..5).collect();
    let mut copy = list.clone();
    assert!(list == copy);

    for i in copy.iter_mut() {
        *i += 1;
    }
    assert!(list != copy, "Mutating a clone shouldn't affect the original.");
    assert_eq!(copy.into_iter().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let list: SinglyLinkedList<_> = std::iter::repeat_with(|| counter.clone()).take(6).collect();
    drop(list);
    assert_eq!(counter.dropped(), 6);
}
