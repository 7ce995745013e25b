//! # Knapsack Module
//!
//! The subset-sum side of the cryptosystem: weighting a binary message by a
//! knapsack vector, and recovering the subset from a sum when the vector is
//! super-increasing.

pub mod message;

pub use message::Message;

use crate::errors::KnapsackError;

use itertools::Itertools;
use num_bigint::BigUint;
use num_traits::Zero;

/// Result of a greedy decomposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    pub message: Message,
    /// What was left of the target after subtracting every selected term.
    /// Zero whenever the target was a genuine subset sum of a super-increasing vector.
    pub residual: BigUint,
}

/// Computes `Σ message_i * weights_i`.
pub fn subset_sum(message: &Message, weights: &[BigUint]) -> Result<BigUint, KnapsackError> {
    if message.len() != weights.len() {
        return Err(KnapsackError::LengthMismatch {
            message: message.len(),
            key: weights.len(),
        });
    }

    Ok(message
        .bits()
        .iter()
        .zip_eq(weights)
        .filter(|(bit, _)| **bit)
        .map(|(_, weight)| weight)
        .sum())
}

/// Greedy decomposition of `target` over `sequence`, largest term first.
///
/// Yields the unique subset summing to `target` only when `sequence` is
/// super-increasing. Otherwise the result is still a well-formed message, just
/// not the right one; no error is raised.
pub fn greedy_decompose(sequence: &[BigUint], target: &BigUint) -> Decomposition {
    let mut remaining = target.clone();
    let mut bits = vec![false; sequence.len()];

    for (index, term) in sequence.iter().enumerate().rev() {
        if remaining >= *term {
            remaining -= term;
            bits[index] = true;
        }
    }

    Decomposition {
        message: Message::new(bits),
        residual: remaining,
    }
}

impl Decomposition {
    pub fn is_exact(&self) -> bool {
        self.residual.is_zero()
    }
}
