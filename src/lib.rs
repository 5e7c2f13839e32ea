pub mod block;
pub mod chain;

pub mod prelude {
    pub use super::block::prelude::*;
    pub use super::chain::prelude::*;
}
