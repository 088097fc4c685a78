#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_lifo_order() {
    let mut stack = Stack::new();
    for i in 0..5 {
        stack.push(i);
    }

    assert_eq!(*stack.top(), 4, "The last pushed element should be on top.");
    assert_eq!(stack.pop(), 4);
    assert_eq!(stack.pop(), 3);
    stack.push(10);
    assert_eq!(
        stack.iter().copied().collect::<Vec<_>>(),
        [10, 2, 1, 0],
        "Borrowed iteration should run from top to bottom."
    );
    assert_eq!(stack.len(), 4);
}

#[test]
fn test_empty_access() {
    let mut stack = Stack::<u8>::new();
    assert!(stack.is_empty());
    assert_eq!(stack.try_pop(), Err(EmptyStructure(Structure::Stack)));
    assert_eq!(stack.try_top(), Err(EmptyStructure(Structure::Stack)));

    assert_panics!({
        Stack::<u8>::new().pop();
    });
    assert_panics!({
        let stack = Stack::<u8>::new();
        stack.top();
    });

    stack.push(1);
    assert_eq!(stack.try_pop(), Ok(1));
    assert!(
        stack.try_pop().is_err(),
        "A failed pop should leave the stack empty and usable."
    );
}

#[test]
fn test_growth() {
    let mut stack = Stack::new();
    assert!(stack.cap() >= 10, "A new stack should start with the initial capacity.");

    for i in 0..10 {
        stack.push(i);
    }
    assert!(stack.cap() >= 10);
    stack.push(10);
    assert!(stack.cap() >= 20, "A full stack should double its capacity.");
    assert_eq!(stack.into_iter().collect::<Vec<_>>(), (0..=10).rev().collect::<Vec<_>>());
}

#[test]
fn test_clone_and_eq() {
    let stack: Stack<_> = (0..4).collect();
    let mut copy = stack.clone();
    assert_eq!(stack, copy, "A cloned stack should be equal.");

    *copy.top_mut() = 7;
    assert_ne!(stack, copy, "Changing the copy shouldn't affect the original.");
    assert_eq!(*stack.top(), 3);
}

#[test]
fn test_display() {
    let stack: Stack<_> = [1, 2].into_iter().collect();
    assert_eq!(stack.to_string(), "| 2 |\n| 1 |\n|---|\n");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut stack = Stack::new();
    for _ in 0..12 {
        stack.push(counter.clone());
    }
    drop(stack.pop());
    assert_eq!(counter.dropped(), 1);

    drop(stack);
    assert_eq!(counter.dropped(), 12, "Dropping a stack should drop every element.");
}

proptest! {
    #[test]
    fn prop_matches_vec_model(ops in proptest::collection::vec(any::<Option<u16>>(), 0..200)) {
        let mut stack = Stack::new();
        let mut model = Vec::new();

        for op in ops {
            match op {
                Some(value) => {
                    stack.push(value);
                    model.push(value);
                },
                None => prop_assert_eq!(stack.try_pop().ok(), model.pop()),
            }
            prop_assert_eq!(stack.len(), model.len());
            prop_assert_eq!(stack.try_top().ok(), model.last());
        }
    }
}
