use serde::{Serialize, Deserialize};

pub(crate) mod hash;
pub(crate) mod options;
pub(crate) mod builder;

pub use hash::*;
pub use options::*;
pub use builder::*;

pub mod prelude {
    pub use super::{
        LedgerBlock,
        Block,
        BlockError,
        BlockBuilder,
        MiningOptions,
        Hash,
        HashError
    };
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    #[error("Hash can't satisfy difficulty of {difficulty} leading zero bytes, at most {max} supported")]
    UnsupportedDifficulty {
        difficulty: u8,
        max: usize
    },

    #[error("No nonce up to {max_nonce} satisfies the proof of work for block {number}")]
    NonceExhausted {
        number: u64,
        max_nonce: u64
    }
}

/// Ledger entry stored in the chain.
///
/// The chain doesn't know how blocks are hashed or
/// what makes them valid. It only uses the values
/// exposed by this trait.
pub trait LedgerBlock: std::fmt::Display {
    /// Make a new block with given number (index in the chain),
    /// amount and hash of the previous block.
    ///
    /// `previous_block` is `None` only for the genesis block.
    fn mine(
        number: u64,
        amount: i32,
        previous_block: Option<Hash>,
        options: &MiningOptions
    ) -> Result<Self, BlockError> where Self: Sized;

    /// Number of the block in the chain.
    fn number(&self) -> u64;

    /// Hash of the previous block.
    fn previous_block(&self) -> Option<Hash>;

    /// Hash of the current block.
    fn get_hash(&self) -> Hash;

    /// Amount of leading zero bytes the block's
    /// proof of work was made for.
    ///
    /// Chains compare it with their own difficulty
    /// so blocks mined for an easier target are refused.
    fn difficulty(&self) -> u8;

    /// Check that the block's hash is correct
    /// and satisfies the proof of work.
    fn is_hash_valid(&self) -> bool;

    /// Amount the block was mined with.
    fn amount(&self) -> i32;

    /// Signed balance change of the ledger.
    fn data(&self) -> i32;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    // Header
    pub(crate) previous_block: Option<Hash>,
    pub(crate) hash: Hash,
    pub(crate) number: u64,

    // Proof of work
    pub(crate) nonce: u64,
    pub(crate) difficulty: u8,

    // Body
    pub(crate) amount: i32
}

impl Block {
    #[inline]
    /// Nonce found by the miner.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Calculate hash of the block.
    ///
    /// Unlike `get_hash` this will hash the block's
    /// content so the result can be trusted.
    pub fn calculate_hash(&self) -> Hash {
        let mut hasher = blake3::Hasher::new();

        if let Some(hash) = &self.previous_block {
            hasher.update(&hash.as_bytes());
        }

        hasher.update(&self.number.to_be_bytes());
        hasher.update(&self.amount.to_be_bytes());
        hasher.update(&self.nonce.to_be_bytes());

        hasher.finalize().into()
    }
}

impl LedgerBlock for Block {
    fn mine(
        number: u64,
        amount: i32,
        previous_block: Option<Hash>,
        options: &MiningOptions
    ) -> Result<Self, BlockError> {
        let builder = BlockBuilder::new(number, amount);

        match previous_block {
            Some(hash) => builder.with_previous(hash).mine(options),
            None => builder.mine(options)
        }
    }

    #[inline]
    fn number(&self) -> u64 {
        self.number
    }

    #[inline]
    fn previous_block(&self) -> Option<Hash> {
        self.previous_block
    }

    #[inline]
    fn get_hash(&self) -> Hash {
        self.hash
    }

    #[inline]
    fn difficulty(&self) -> u8 {
        self.difficulty
    }

    fn is_hash_valid(&self) -> bool {
        self.hash.leading_zero_bytes() >= self.difficulty as usize &&
            self.calculate_hash() == self.hash
    }

    #[inline]
    fn amount(&self) -> i32 {
        self.amount
    }

    #[inline]
    fn data(&self) -> i32 {
        self.amount
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Block {} (Amount: {}, Nonce: {}, prevHash: ", self.number, self.amount, self.nonce)?;

        match &self.previous_block {
            Some(hash) => write!(f, "{hash}")?,
            None => f.write_str("null")?
        }

        write!(f, ", hash: {})", self.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mine() -> Result<(), BlockError> {
        let options = builder::tests::get_options();

        let root = Block::mine(0, 300, None, &options)?;
        let block = Block::mine(1, -50, Some(root.get_hash()), &options)?;

        assert!(root.is_hash_valid());
        assert!(block.is_hash_valid());

        assert_eq!(block.number(), 1);
        assert_eq!(block.previous_block(), Some(root.get_hash()));
        assert_eq!(block.amount(), -50);
        assert_eq!(block.data(), -50);

        Ok(())
    }

    #[test]
    fn tampered() -> Result<(), BlockError> {
        let (mut block, _) = builder::tests::get_chained()?;

        block.amount += 1;

        assert!(!block.is_hash_valid());

        Ok(())
    }

    #[test]
    fn render() -> Result<(), BlockError> {
        let (block, root) = builder::tests::get_chained()?;

        assert_eq!(root.to_string(), format!(
            "Block 0 (Amount: 300, Nonce: {}, prevHash: null, hash: {})",
            root.nonce(),
            root.get_hash()
        ));

        assert_eq!(block.to_string(), format!(
            "Block 1 (Amount: -50, Nonce: {}, prevHash: {}, hash: {})",
            block.nonce(),
            root.get_hash(),
            block.get_hash()
        ));

        Ok(())
    }

    #[test]
    fn serialize() -> Result<(), Box<dyn std::error::Error>> {
        let block = builder::tests::get_chained()?.0;

        let json = serde_json::to_string(&block)?;

        assert_eq!(serde_json::from_str::<Block>(&json)?, block);

        Ok(())
    }
}
