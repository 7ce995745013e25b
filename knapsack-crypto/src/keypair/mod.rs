pub mod chain;
pub mod helper;
pub mod keys;
pub mod params;
pub mod sequence;

pub use chain::PrivateKeyChain;
pub use keys::{ModulusRange, PrivateKeyRound, PublicKey};
pub use params::{KnapsackParams, ModulusPolicy};
pub use sequence::SuperincreasingSequence;
