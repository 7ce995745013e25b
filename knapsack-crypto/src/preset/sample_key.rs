//! The small textbook key, handy for demonstrations and known-answer tests.

use crate::errors::KnapsackError;
use crate::keypair::PrivateKeyRound;
use crate::knapsack::Message;

use num_bigint::BigUint;

pub const SAMPLE_MODULUS: u32 = 2113;
pub const SAMPLE_MULTIPLIER: u32 = 988;
pub const SAMPLE_SEQUENCE: [u32; 5] = [3, 42, 105, 249, 495];
pub const SAMPLE_MESSAGE: [u8; 5] = [0, 0, 0, 1, 1];

pub fn sample_round() -> Result<PrivateKeyRound, KnapsackError> {
    PrivateKeyRound::try_with(
        BigUint::from(SAMPLE_MODULUS),
        BigUint::from(SAMPLE_MULTIPLIER),
        SAMPLE_SEQUENCE.map(BigUint::from).to_vec(),
    )
}

pub fn sample_message() -> Result<Message, KnapsackError> {
    Message::try_from(SAMPLE_MESSAGE.as_slice())
}
