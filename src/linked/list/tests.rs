#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

impl<T> DoublyLinkedList<T> {
    fn verify_double_links(&self) {
        let mut count = 0;
        let mut prev = None;
        let mut curr = self.head();
        while let Some(ptr) = curr {
            assert!(ptr.prev() == prev, "Each node should link back to its predecessor.");
            prev = curr;
            curr = ptr.next();
            count += 1;
        }
        assert!(prev == self.tail(), "The last node reached should be the tail.");
        assert_eq!(count, self.len(), "The length should match the number of nodes.");
    }
}

#[test]
fn test_push_and_pop() {
    let mut list = DoublyLinkedList::new();
    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    list.verify_double_links();

    assert_eq!(list, [1, 2, 3]);
    assert_eq!(*list.front(), 1);
    assert_eq!(*list.back(), 3);

    assert_eq!(list.pop_back(), 3);
    assert_eq!(list.pop_front(), 1);
    list.verify_double_links();
    assert_eq!(list.pop_front(), 2);
    assert!(list.is_empty());
    list.verify_double_links();
}

#[test]
fn test_empty_access() {
    let mut list = DoublyLinkedList::<u8>::new();
    assert_eq!(list.try_front(), Err(EmptyStructure(Structure::List)));
    assert_eq!(list.try_back(), Err(EmptyStructure(Structure::List)));
    assert_eq!(list.try_pop_front(), Err(EmptyStructure(Structure::List)));
    assert_eq!(list.try_pop_back(), Err(EmptyStructure(Structure::List)));

    assert_panics!({
        DoublyLinkedList::<u8>::new().pop_back();
    });
    assert_panics!({
        let list = DoublyLinkedList::<u8>::new();
        list.front();
    });
}

#[test]
fn test_indexing() {
    let mut list: DoublyLinkedList<_> = (0..7).collect();
    for i in 0..7 {
        assert_eq!(list[i], i, "Seeking from either end should reach the same element.");
    }

    list[5] = 50;
    assert_eq!(*list.at(5), 50);
    assert_eq!(
        list.try_at(7),
        Err(IndexOutOfBounds { index: 7, len: 7 }),
        "Indexing past the end should be an error."
    );
    assert_panics!({
        let list: DoublyLinkedList<u8> = DoublyLinkedList::new();
        list.at(0);
    });
}

#[test]
fn test_iterators() {
    let mut list: DoublyLinkedList<_> = (1..=4).collect();

    for i in list.iter_mut() {
        *i *= 10;
    }
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [40, 30, 20, 10]);

    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&10));
    assert_eq!(iter.next_back(), Some(&40));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next(), Some(&20));
    assert_eq!(iter.next_back(), Some(&30));
    assert_eq!(iter.next(), None, "Iterators from both ends shouldn't cross.");

    let mut owned = list.into_iter();
    assert_eq!(owned.next_back(), Some(40));
    assert_eq!(owned.collect::<Vec<_>>(), [10, 20, 30]);
}

#[test]
fn test_append() {
    let mut list: DoublyLinkedList<_> = (0..3).collect();
    list.append((3..5).collect());
    list.append(DoublyLinkedList::new());
    list.verify_double_links();
    assert_eq!(list, [0, 1, 2, 3, 4]);

    let mut empty = DoublyLinkedList::new();
    empty.append(list.clone());
    assert_eq!(empty, list, "Appending onto an empty list should take the other list whole.");
}

#[test]
fn test_cursor_editing() {
    let mut list: DoublyLinkedList<_> = [1, 2, 4].into_iter().collect();

    let mut cursor = list.cursor_front_mut();
    assert_eq!(*cursor.current(), 1);
    cursor.insert_before(0);
    assert_eq!(cursor.index(), Some(1));
    cursor.move_next();
    cursor.move_next();
    assert_eq!(*cursor.current(), 4);
    cursor.insert_before(3);

    assert_eq!(cursor.remove_current(), 4);
    assert!(cursor.is_end(), "Removing the last element should move the cursor to the end.");
    assert_eq!(cursor.try_current(), Err(InvalidAccess));
    assert_eq!(cursor.try_move_next(), Err(InvalidAccess));
    assert_eq!(cursor.try_remove_current(), Err(InvalidAccess));

    cursor.insert_before(5);
    list.verify_double_links();
    assert_eq!(list, [0, 1, 2, 3, 5]);

    let mut cursor = list.cursor_front_mut();
    assert_eq!(cursor.remove_current(), 0);
    *cursor.current_mut() = 10;
    list.verify_double_links();
    assert_eq!(list, [10, 2, 3, 5]);
}

#[test]
fn test_display() {
    let list: DoublyLinkedList<_> = ["a", "b", "c"].into_iter().collect();
    assert_eq!(list.to_string(), "(a) -> (b) -> (c)");
    assert_eq!(DoublyLinkedList::<u8>::new().to_string(), "");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut list: DoublyLinkedList<_> = std::iter::repeat_with(|| counter.clone()).take(10).collect();
    drop(list.pop_front());
    drop(list.pop_back());
    assert_eq!(counter.dropped(), 2);

    let mut iter = list.into_iter();
    iter.next();
    drop(iter);
    assert_eq!(counter.dropped(), 10, "Dropping an owned iterator should drop the rest.");
}

proptest! {
    #[test]
    fn prop_matches_vec_deque_model(ops in proptest::collection::vec((0u8..4, any::<i32>()), 0..200)) {
        let mut list = DoublyLinkedList::new();
        let mut model = std::collections::VecDeque::new();

        for (op, value) in ops {
            match op {
                0 => {
                    list.push_front(value);
                    model.push_front(value);
                },
                1 => {
                    list.push_back(value);
                    model.push_back(value);
                },
                2 => prop_assert_eq!(list.try_pop_front().ok(), model.pop_front()),
                _ => prop_assert_eq!(list.try_pop_back().ok(), model.pop_back()),
            }
        }

        list.verify_double_links();
        prop_assert!(list.iter().eq(model.iter()));
    }
}
