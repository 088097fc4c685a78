use std::num::NonZero;

/// The length of a non-empty list. Keeping it non-zero lets the Empty / Full states of a list
/// carry the distinction instead of a zero length.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Increments the length by one.
    ///
    /// # Panics
    /// Panics if the length would overflow, which can't happen for a list of allocated nodes.
    pub fn inc(self) -> Length {
        Length(self.0.checked_add(1).expect("Capacity overflow!"))
    }

    /// Decrements the length by one, returning None if the list would become empty.
    pub const fn dec(self) -> Option<Length> {
        match NonZero::new(self.0.get() - 1) {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }

    pub fn add(self, other: Length) -> Length {
        Length(self.0.checked_add(other.get()).expect("Capacity overflow!"))
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
