use serde::{Serialize, Deserialize};

use crate::block::MiningOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainOptions {
    /// Options used to mine the genesis block
    /// and every candidate block.
    pub mining: MiningOptions,

    /// If true, the chain will refuse to append blocks
    /// which don't reference its current tail block
    /// or have a wrong number.
    ///
    /// If disabled, any block will be appended and
    /// broken references will only be reported by
    /// the chain validation.
    ///
    /// Default is true.
    pub verify_appends: bool
}

impl Default for ChainOptions {
    fn default() -> Self {
        Self {
            mining: MiningOptions::default(),
            verify_appends: true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize() -> Result<(), serde_json::Error> {
        let options = serde_json::from_str::<ChainOptions>(r#"{
            "mining": {
                "difficulty": 3
            },
            "verify_appends": false
        }"#)?;

        assert_eq!(options.mining.difficulty, 3);
        assert_eq!(options.mining.max_nonce, u64::MAX);
        assert!(!options.verify_appends);

        assert_eq!(serde_json::from_str::<ChainOptions>("{}")?, ChainOptions::default());

        Ok(())
    }
}
