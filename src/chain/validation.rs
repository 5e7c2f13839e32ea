use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChainValidationResult {
    /// Block's hash is wrong or doesn't satisfy its proof of work.
    InvalidHash {
        number: u64,
        hash: Hash
    },

    /// Running balance went below zero after this block.
    NegativeBalance {
        number: u64,
        balance: i64
    },

    /// Invalid previous block hash.
    InvalidPreviousBlockReference {
        number: u64,
        expected_previous: Option<Hash>,
        got_previous: Option<Hash>
    },

    /// Chain is valid.
    Valid
}

impl ChainValidationResult {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self == &Self::Valid
    }
}

impl<B: LedgerBlock> Chain<B> {
    /// Validate chain structure.
    ///
    /// This method will walk the chain from the genesis
    /// block to the tail and for each block:
    ///
    /// 1. Verify the block's hash and that it was mined
    ///    for at least the chain's difficulty.
    ///
    /// 2. Add the block's data to the running balance
    ///    and verify that it didn't go below zero.
    ///
    /// 3. Verify that the block references the previous one.
    ///
    /// The first found problem is returned.
    pub fn validate(&self) -> ChainValidationResult {
        let mut balance = 0i64;
        let mut previous_block = None;

        let difficulty = self.options.mining.difficulty;

        for block in self.blocks() {
            let number = block.number();
            let hash = block.get_hash();

            balance += i64::from(block.data());

            tracing::trace!(number, balance, %hash, "validating block");

            let result = if !block.is_hash_valid() || block.difficulty() < difficulty {
                ChainValidationResult::InvalidHash {
                    number,
                    hash
                }
            } else if balance < 0 {
                ChainValidationResult::NegativeBalance {
                    number,
                    balance
                }
            } else if block.previous_block() != previous_block {
                ChainValidationResult::InvalidPreviousBlockReference {
                    number,
                    expected_previous: previous_block,
                    got_previous: block.previous_block()
                }
            } else {
                previous_block = Some(hash);

                continue;
            };

            tracing::warn!(?result, "chain validation failed");

            return result;
        }

        ChainValidationResult::Valid
    }

    #[inline]
    /// Check that every block has a valid hash meeting the
    /// chain's difficulty, the running balance never goes
    /// below zero, and every block references the previous one.
    ///
    /// The reference check can only fail for chains
    /// created with `verify_appends` disabled.
    pub fn is_valid_block_chain(&self) -> bool {
        self.validate().is_valid()
    }
}
