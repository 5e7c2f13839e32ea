use serde::{Serialize, Deserialize};

use super::*;

/// Balances of the two ledger parties.
///
/// Alice owns the sum of all the blocks' data, Bob
/// owns the rest of the genesis amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Balances {
    pub alice: i64,
    pub bob: i64
}

impl std::fmt::Display for Balances {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Alice: {}, Bob: {}", self.alice, self.bob)
    }
}

impl<B: LedgerBlock> Chain<B> {
    /// Calculate parties' balances.
    pub fn balances(&self) -> Balances {
        let alice = self.blocks()
            .map(|block| i64::from(block.data()))
            .sum::<i64>();

        Balances {
            alice,
            bob: i64::from(self.genesis().amount()) - alice
        }
    }

    /// Print parties' balances to stdout
    /// in form of `Alice: 300, Bob: 0`.
    pub fn print_balances(&self) {
        println!("{}", self.balances());
    }
}
