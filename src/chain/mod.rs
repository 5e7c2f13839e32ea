use crate::block::{
    LedgerBlock,
    Block,
    BlockError,
    Hash
};

mod options;
mod validation;
mod balances;

pub use options::*;
pub use validation::*;
pub use balances::*;

pub mod prelude {
    pub use super::{
        Chain,
        ChainError,
        ChainOptions,
        ChainValidationResult,
        Balances
    };
}

/// Position of the genesis node in the arena.
const HEAD: usize = 0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("Failed to mine block: {0}")]
    Block(#[from] BlockError),

    #[error("Block {number} with difficulty {difficulty} can't be appended after block {expected_number} with hash {tail} (difficulty {expected_difficulty} required)")]
    InvalidAppend {
        number: u64,
        expected_number: u64,
        tail: Hash,
        previous_block: Option<Hash>,
        difficulty: u8,
        expected_difficulty: u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node<B> {
    block: B,

    /// Arena position of the next node.
    next: Option<usize>
}

/// Singly linked chain of ledger blocks.
///
/// Nodes are stored in an arena and linked by their
/// positions. The genesis node always lives at the
/// arena's beginning and can't be removed, so the
/// chain is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<B = Block> {
    nodes: Vec<Node<B>>,
    tail: usize,
    length: usize,
    options: ChainOptions
}

impl Chain<Block> {
    /// Create new chain with default options.
    ///
    /// ```
    /// use ledger_chain::prelude::*;
    ///
    /// let chain = Chain::new(300).unwrap();
    ///
    /// assert_eq!(chain.len(), 1);
    /// assert_eq!(chain.balances().to_string(), "Alice: 300, Bob: 0");
    /// ```
    pub fn new(initial_amount: i32) -> Result<Self, ChainError> {
        Self::create(initial_amount, ChainOptions::default())
    }

    /// Create new chain with given options.
    pub fn with_options(initial_amount: i32, options: ChainOptions) -> Result<Self, ChainError> {
        Self::create(initial_amount, options)
    }
}

impl<B: LedgerBlock> Chain<B> {
    /// Create new chain by mining its genesis block.
    pub fn create(initial_amount: i32, options: ChainOptions) -> Result<Self, ChainError> {
        let genesis = B::mine(0, initial_amount, None, &options.mining)?;

        tracing::debug!(
            amount = initial_amount,
            hash = %genesis.get_hash(),
            "created chain"
        );

        Ok(Self {
            nodes: vec![Node {
                block: genesis,
                next: None
            }],
            tail: HEAD,
            length: 1,
            options
        })
    }

    #[inline]
    pub fn options(&self) -> &ChainOptions {
        &self.options
    }

    #[inline]
    /// Amount of blocks in the chain.
    pub fn len(&self) -> usize {
        self.length
    }

    #[inline]
    /// Always false: the genesis block can't be removed.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    /// Get the genesis block.
    pub fn genesis(&self) -> &B {
        &self.nodes[HEAD].block
    }

    #[inline]
    /// Get the last block.
    pub fn tail(&self) -> &B {
        &self.nodes[self.tail].block
    }

    #[inline]
    /// Get hash of the last block.
    pub fn get_hash(&self) -> Hash {
        self.tail().get_hash()
    }

    /// Get block by its number.
    pub fn get_block(&self, number: u64) -> Option<&B> {
        self.blocks().nth(usize::try_from(number).ok()?)
    }

    /// Iterate over blocks from the genesis to the tail.
    pub fn blocks(&self) -> Blocks<'_, B> {
        Blocks {
            nodes: &self.nodes,
            current: Some(HEAD)
        }
    }

    /// Mine a candidate block referencing the current tail.
    ///
    /// The chain is not changed. The candidate becomes
    /// stale once another block is appended.
    pub fn mine(&self, amount: i32) -> Result<B, ChainError> {
        let block = B::mine(
            self.length as u64,
            amount,
            Some(self.get_hash()),
            &self.options.mining
        )?;

        tracing::debug!(
            number = block.number(),
            amount,
            hash = %block.get_hash(),
            "mined candidate block"
        );

        Ok(block)
    }

    /// Append block to the chain.
    ///
    /// When `verify_appends` is enabled the block must reference
    /// the current tail, have the next number and be mined for
    /// at least the chain's difficulty, otherwise
    /// `ChainError::InvalidAppend` is returned and the chain
    /// stays unchanged.
    pub fn append(&mut self, block: B) -> Result<(), ChainError> {
        let tail = self.get_hash();
        let expected_number = self.length as u64;
        let expected_difficulty = self.options.mining.difficulty;

        let linked = block.previous_block() == Some(tail) && block.number() == expected_number;

        if self.options.verify_appends && (!linked || block.difficulty() < expected_difficulty) {
            tracing::warn!(
                number = block.number(),
                expected_number,
                difficulty = block.difficulty(),
                expected_difficulty,
                %tail,
                "rejected block append"
            );

            return Err(ChainError::InvalidAppend {
                number: block.number(),
                expected_number,
                tail,
                previous_block: block.previous_block(),
                difficulty: block.difficulty(),
                expected_difficulty
            });
        }

        tracing::debug!(
            number = block.number(),
            hash = %block.get_hash(),
            "appended block"
        );

        let position = self.nodes.len();

        self.nodes.push(Node {
            block,
            next: None
        });

        self.nodes[self.tail].next = Some(position);
        self.tail = position;
        self.length += 1;

        Ok(())
    }

    /// Remove the last block from the chain.
    ///
    /// Returns false and does nothing if only
    /// the genesis block is left.
    pub fn remove_last(&mut self) -> bool {
        if self.length == 1 {
            return false;
        }

        let tail = self.tail;

        let Some(previous) = self.positions().find(|position| self.nodes[*position].next == Some(tail)) else {
            return false;
        };

        self.nodes[previous].next = None;
        self.tail = previous;
        self.length -= 1;

        // Tail is always the latest pushed node.
        if let Some(node) = self.nodes.pop() {
            tracing::debug!(
                number = node.block.number(),
                hash = %node.block.get_hash(),
                "removed last block"
            );
        }

        true
    }

    fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(HEAD), |position| self.nodes[*position].next)
    }
}

impl<B: LedgerBlock> std::fmt::Display for Chain<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for block in self.blocks() {
            writeln!(f, "{block}")?;
        }

        Ok(())
    }
}

/// Iterator over the chain's blocks following nodes' links.
pub struct Blocks<'a, B> {
    nodes: &'a [Node<B>],
    current: Option<usize>
}

impl<'a, B> Iterator for Blocks<'a, B> {
    type Item = &'a B;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.current?)?;

        self.current = node.next;

        Some(&node.block)
    }
}
