//! Stable string hashing for bone paths.
//!
//! Rig binding (out of scope here) keys bones by hashed path strings; the
//! hash must be stable across runs and platforms, so this is a fixed FNV-1a
//! over the UTF-8 bytes rather than the std hasher. The empty string hashes
//! to 0, which doubles as the "no path" sentinel.

use serde::{Deserialize, Serialize};

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Stable 32-bit hash of a bone path string. `StringHash(0)` means "none".
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct StringHash(pub u32);

impl StringHash {
    pub const NONE: StringHash = StringHash(0);

    /// Hash a path string. Empty input yields [`StringHash::NONE`].
    pub fn of(s: &str) -> StringHash {
        if s.is_empty() {
            return StringHash::NONE;
        }
        let mut h = FNV_OFFSET;
        for b in s.as_bytes() {
            h ^= u32::from(*b);
            h = h.wrapping_mul(FNV_PRIME);
        }
        StringHash(h)
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

impl From<&str> for StringHash {
    fn from(s: &str) -> Self {
        StringHash::of(s)
    }
}
