use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HashError {
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),

    #[error("Invalid hash length. 32 bytes expected, got {0}")]
    InvalidHashLength(usize)
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash([u8; 32]);

impl Hash {
    /// Amount of bytes in the hash.
    pub const BYTES: usize = 32;

    /// Minimal possible hash value.
    pub const MIN: Hash = Hash([0; 32]);

    #[inline]
    pub fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Amount of zero bytes in the beginning of the hash.
    ///
    /// Used as the proof of work target.
    pub fn leading_zero_bytes(&self) -> usize {
        self.0.iter()
            .take_while(|byte| **byte == 0)
            .count()
    }

    #[inline]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(hash: impl AsRef<str>) -> Result<Self, HashError> {
        let mut hash_slice = [0; 32];

        let hash = hex::decode(hash.as_ref())?;

        if hash.len() != Self::BYTES {
            return Err(HashError::InvalidHashLength(hash.len()));
        }

        hash_slice.copy_from_slice(&hash);

        Ok(Self(hash_slice))
    }
}

impl From<blake3::Hash> for Hash {
    #[inline]
    fn from(value: blake3::Hash) -> Self {
        Self(*value.as_bytes())
    }
}

impl std::fmt::Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
