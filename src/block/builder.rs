use super::*;

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct BlockBuilder {
    previous_block: Option<Hash>,
    number: u64,
    amount: i32,
    nonce: u64
}

impl BlockBuilder {
    pub fn new(number: u64, amount: i32) -> Self {
        Self {
            previous_block: None,
            number,
            amount,
            nonce: 0
        }
    }

    /// Set reference to the previous block.
    pub fn with_previous(self, previous_block: Hash) -> Self {
        Self {
            previous_block: Some(previous_block),
            ..self
        }
    }

    /// Change the nonce from which mining starts.
    pub fn with_nonce(self, nonce: u64) -> Self {
        Self {
            nonce,
            ..self
        }
    }

    /// Build block by searching for a nonce which
    /// makes its hash satisfy the proof of work.
    pub fn mine(self, options: &MiningOptions) -> Result<Block, BlockError> {
        if !options.is_supported() {
            return Err(BlockError::UnsupportedDifficulty {
                difficulty: options.difficulty,
                max: Hash::BYTES
            });
        }

        let mut block = Block {
            previous_block: self.previous_block,
            hash: Hash::MIN,
            number: self.number,
            nonce: self.nonce,
            difficulty: options.difficulty,
            amount: self.amount
        };

        for nonce in self.nonce..=options.max_nonce {
            block.nonce = nonce;

            let hash = block.calculate_hash();

            if hash.leading_zero_bytes() >= options.difficulty as usize {
                block.hash = hash;

                tracing::trace!(number = block.number, nonce, %hash, "block mined");

                return Ok(block);
            }
        }

        Err(BlockError::NonceExhausted {
            number: self.number,
            max_nonce: options.max_nonce
        })
    }
}
