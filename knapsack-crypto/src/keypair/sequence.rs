use crate::errors::KnapsackError;
use crate::keypair::helper::sum;
use crate::ring::{pow2, sample_in_range};

use num_bigint::BigUint;
use num_traits::Zero;
use rand::RngCore;

/// The private trapdoor: every term exceeds the sum of all terms before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperincreasingSequence {
    terms: Vec<BigUint>,
}

impl SuperincreasingSequence {
    /// Draws a fresh sequence of `size` terms.
    ///
    /// Term `i` (1-based) is sampled uniformly from
    /// `[(2^(i-1) - 1) * 2^n + 1, 2^(i-1) * 2^n]`. The lower bound is one more
    /// than the largest possible sum of the terms before it, so the invariant
    /// holds without rejection.
    pub fn generate<R: RngCore + ?Sized>(size: usize, rng: &mut R) -> Result<Self, KnapsackError> {
        if size == 0 {
            return Err(KnapsackError::InvalidParameters(
                "Sequence length must be > 0".to_string(),
            ));
        }

        let scale = pow2(size);
        let mut terms = Vec::with_capacity(size);
        for i in 1..=size {
            let upper = pow2(i - 1) * &scale;
            let lower = &upper - &scale + 1u32;
            terms.push(sample_in_range(rng, &lower, &upper)?);
        }

        Ok(Self { terms })
    }

    pub fn terms(&self) -> &[BigUint] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn sum(&self) -> BigUint {
        sum(&self.terms)
    }

    pub fn into_inner(self) -> Vec<BigUint> {
        self.terms
    }
}

impl TryFrom<Vec<BigUint>> for SuperincreasingSequence {
    type Error = KnapsackError;

    fn try_from(terms: Vec<BigUint>) -> Result<Self, Self::Error> {
        if terms.is_empty() {
            return Err(KnapsackError::InvalidKey(
                "Sequence must not be empty".to_string(),
            ));
        }
        if !is_superincreasing(&terms) {
            return Err(KnapsackError::InvalidKey(
                "Sequence is not super-increasing".to_string(),
            ));
        }

        Ok(Self { terms })
    }
}

impl From<SuperincreasingSequence> for Vec<BigUint> {
    fn from(sequence: SuperincreasingSequence) -> Self {
        sequence.terms
    }
}

/// Checks that every term is positive and strictly greater than the sum of its predecessors.
pub fn is_superincreasing(terms: &[BigUint]) -> bool {
    let mut running = BigUint::zero();
    for term in terms {
        if term.is_zero() || *term <= running {
            return false;
        }
        running += term;
    }
    true
}
