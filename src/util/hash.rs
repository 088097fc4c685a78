use std::hash::{BuildHasher, Hash, Hasher};

/// A value carrying its own hash, so that tests can place entries in chosen bins and force
/// collisions.
#[derive(Debug, Clone)]
pub struct ManualHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> ManualHash<T> {
    pub const fn new(hash: u64, value: T) -> ManualHash<T> {
        ManualHash { hash, value }
    }

    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Eq> Hash for ManualHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: Eq> PartialEq for ManualHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for ManualHash<T> {}

/// A hasher that returns the last `u64` written to it unchanged.
#[derive(Debug)]
pub struct PassThroughHasher {
    state: u64,
}

impl Hasher for PassThroughHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = (self.state << 8) | *byte as u64;
        }
    }

    fn write_u64(&mut self, value: u64) {
        self.state = value;
    }
}

#[derive(Debug, Default, Clone)]
pub struct PassThroughBuilder;

impl BuildHasher for PassThroughBuilder {
    type Hasher = PassThroughHasher;

    fn build_hasher(&self) -> Self::Hasher {
        PassThroughHasher { state: 0 }
    }
}
