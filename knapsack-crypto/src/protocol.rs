//! The five entry points of the cryptosystem, using the thread-local rng and
//! default [`KnapsackParams`].
//!
//! Callers that need a seeded rng, a prime modulus or a custom retry bound go
//! through [`PrivateKeyRound::generate`] and [`PrivateKeyChain::generate`] directly.

use crate::errors::KnapsackError;
use crate::keypair::{KnapsackParams, PrivateKeyChain, PrivateKeyRound, PublicKey};
use crate::knapsack::Message;

use num_bigint::BigUint;

/// Generates one private round for messages of `size` bits.
pub fn generate_private_key(size: usize) -> Result<PrivateKeyRound, KnapsackError> {
    let params = KnapsackParams::try_with(size, 1)?;
    PrivateKeyRound::generate(&params, &mut rand::rng())
}

pub fn derive_public_key(round: &PrivateKeyRound) -> PublicKey {
    round.public_key()
}

pub fn encrypt(message: &Message, key: &PublicKey) -> Result<BigUint, KnapsackError> {
    key.encrypt(message)
}

pub fn decrypt(chain: &PrivateKeyChain, ciphertext: &BigUint) -> Result<Message, KnapsackError> {
    chain.decrypt(ciphertext)
}

/// Generates a chain of `rounds` trapdoor rounds for messages of `size` bits.
pub fn build_chain(size: usize, rounds: usize) -> Result<PrivateKeyChain, KnapsackError> {
    let params = KnapsackParams::try_with(size, rounds)?;
    PrivateKeyChain::generate(&params, &mut rand::rng())
}
