//! # Knapsack Crypto
//!
//! The Merkle-Hellman knapsack cryptosystem: super-increasing trapdoor
//! sequences, modular disguise into a public knapsack, subset-sum encryption,
//! greedy decryption and the iterated (multi-round) trapdoor.

pub mod errors;
pub mod exchange;
pub mod keypair;
pub mod knapsack;
pub mod preset;
pub mod protocol;
pub mod ring;

pub use errors::KnapsackError;
pub use keypair::{
    KnapsackParams, ModulusPolicy, PrivateKeyChain, PrivateKeyRound, PublicKey,
    SuperincreasingSequence,
};
pub use knapsack::Message;
pub use protocol::{build_chain, decrypt, derive_public_key, encrypt, generate_private_key};
