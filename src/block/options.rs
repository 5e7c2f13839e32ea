use serde::{Serialize, Deserialize};

use super::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningOptions {
    /// Amount of leading zero bytes the block's hash
    /// must have to be accepted as a proof of work.
    ///
    /// Every additional byte multiplies the average
    /// mining time by 256. Can't be larger than the
    /// hash length.
    ///
    /// Default is 2.
    pub difficulty: u8,

    /// Maximal nonce value to try before giving up.
    ///
    /// Default is `u64::MAX`.
    pub max_nonce: u64
}

impl MiningOptions {
    /// Check if the hashing primitive can satisfy the difficulty.
    #[inline]
    pub fn is_supported(&self) -> bool {
        self.difficulty as usize <= Hash::BYTES
    }
}

impl Default for MiningOptions {
    fn default() -> Self {
        Self {
            difficulty: 2,
            max_nonce: u64::MAX
        }
    }
}
