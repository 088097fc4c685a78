use std::cell::Cell;
use std::rc::Rc;

/// A value that counts how many of its clones have been dropped, shared through an [`Rc`]. Used
/// to check when collections release their elements.
#[derive(Debug, Clone, Default)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop::default()
    }

    /// The number of values sharing this counter that have been dropped so far.
    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
