#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::util::error::{EmptyStructure, Structure};
use crate::util::panic::assert_panics;

#[test]
fn test_fifo_order() {
    let mut queue = Queue::new();
    queue.push_back('a');
    queue.push_back('b');
    assert_eq!((*queue.front(), *queue.back()), ('a', 'b'));

    assert_eq!(queue.pop_front(), 'a');
    queue.push_back('c');
    assert_eq!(queue.to_string(), "b c");
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_empty_access() {
    let mut queue = Queue::<u32>::new();
    assert_eq!(queue.try_pop_front(), Err(EmptyStructure(Structure::Queue)));
    assert_eq!(queue.try_front(), Err(EmptyStructure(Structure::Queue)));
    assert_eq!(queue.try_back(), Err(EmptyStructure(Structure::Queue)));
    assert_panics!({
        Queue::<u32>::new().pop_front();
    });

    queue.push_back(1);
    queue.pop_front();
    assert!(queue.try_front().is_err(), "A drained queue should be empty again.");
}

#[test]
fn test_clone_and_eq() {
    let queue: Queue<_> = (0..3).collect();
    let mut copy = queue.clone();
    assert_eq!(queue, copy);
    copy.pop_front();
    copy.push_back(0);
    assert_ne!(queue, copy, "Equal elements in a different order aren't equal queues.");
}

proptest! {
    #[test]
    fn prop_matches_vec_deque_model(ops in proptest::collection::vec(any::<Option<i64>>(), 0..200)) {
        let mut queue = Queue::new();
        let mut model = std::collections::VecDeque::new();

        for op in ops {
            match op {
                Some(value) => {
                    queue.push_back(value);
                    model.push_back(value);
                },
                None => prop_assert_eq!(queue.try_pop_front().ok(), model.pop_front()),
            }
            prop_assert_eq!(queue.try_front().ok(), model.front());
            prop_assert_eq!(queue.try_back().ok(), model.back());
        }
        prop_assert!(queue.into_iter().eq(model.into_iter()));
    }
}
