#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::util::error::{EmptyStructure, Structure};

#[test]
fn test_lifo_order() {
    let mut stack: LinkedStack<_> = (1..=3).collect();
    assert_eq!(*stack.top(), 3);
    *stack.top_mut() = 30;
    assert_eq!(stack.pop(), 30);
    assert_eq!(stack.to_string(), "| 2 |\n| 1 |\n|---|\n");
    assert_eq!(stack.into_iter().collect::<Vec<_>>(), [2, 1]);
}

#[test]
fn test_empty_access() {
    let mut stack = LinkedStack::<u8>::new();
    assert_eq!(stack.try_pop(), Err(EmptyStructure(Structure::Stack)));
    assert_eq!(stack.try_top(), Err(EmptyStructure(Structure::Stack)));
    assert_eq!(stack.try_top_mut(), Err(EmptyStructure(Structure::Stack)));
}

proptest! {
    #[test]
    fn prop_agrees_with_vec(ops in proptest::collection::vec(any::<Option<u8>>(), 0..200)) {
        let mut stack = LinkedStack::new();
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
            prop_assert!(stack.iter().eq(model.iter().rev()));
        }
    }
}
