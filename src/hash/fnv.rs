use std::hash::{BuildHasher, Hasher};

const FNV_PRIME: u32 = 16_777_619;

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// A [`BuildHasher`] that creates [`FnvHasher`]s. It carries no state, so every map using it
/// hashes keys in the same way.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FnvBuildHasher;

impl BuildHasher for FnvBuildHasher {
    type Hasher = FnvHasher;

    fn build_hasher(&self) -> Self::Hasher {
        FnvHasher::new()
    }
}

/// A 32-bit Fowler/Noll/Vo (FNV-1a) hasher, with an additional mix of the final hash to spread
/// similar keys across the bins of a [`HashMap`](super::HashMap).
///
/// FNV is fast for short keys, but it isn't resistant to collision attacks, so it shouldn't be used
/// with untrusted keys.
#[derive(Debug, Clone, Copy)]
pub struct FnvHasher {
    hash: u32,
}

impl FnvHasher {
    pub const fn new() -> FnvHasher {
        FnvHasher {
            hash: FNV_OFFSET_BASIS,
        }
    }
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FnvHasher {
    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.hash = (self.hash ^ *byte as u32).wrapping_mul(FNV_PRIME);
        }
    }

    fn finish(&self) -> u64 {
        let mut hash = self.hash;
        hash = hash.wrapping_add(hash << 13);
        hash ^= hash >> 7;
        hash = hash.wrapping_add(hash << 3);
        hash ^= hash >> 17;
        hash = hash.wrapping_add(hash << 5);
        hash as u64
    }
}
