//! Single trapdoor rounds, their public keys and the modulus/multiplier draws.

use crate::errors::KnapsackError;
use crate::keypair::helper::{map_vector, sum};
use crate::keypair::params::{KnapsackParams, MILLER_RABIN_ROUNDS, ModulusPolicy};
use crate::keypair::sequence::SuperincreasingSequence;
use crate::knapsack::{Message, greedy_decompose, subset_sum};
use crate::ring::{Ring, gcd, is_probable_prime, pow2, sample_in_range};

use itertools::Itertools;
use log::{debug, trace, warn};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::RngCore;

use std::fmt;

/// One trapdoor round: `(modulus, multiplier, sequence)`.
///
/// Fields are private so that a constructed round always satisfies
/// `modulus > Σ sequence`, `1 < multiplier < modulus` and
/// `gcd(modulus, multiplier) = 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKeyRound {
    modulus: BigUint,
    multiplier: BigUint,
    sequence: Vec<BigUint>,
}

/// The published knapsack vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    elements: Vec<BigUint>,
}

/// Closed interval the modulus is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulusRange {
    pub low: BigUint,
    pub high: BigUint,
}

impl ModulusRange {
    /// `[2^(2n+1) + 1, 2^(2n+2) - 1]`, used for the super-increasing round.
    pub fn for_size(size: usize) -> Self {
        Self {
            low: pow2(2 * size + 1) + 1u32,
            high: pow2(2 * size + 2) - 1u32,
        }
    }

    /// `[sum + 1, 2 * sum]`, used when wrapping an already disguised vector.
    ///
    /// The floor of 5 keeps the multiplier range `[2, modulus - 2]` non-empty.
    pub fn above(sequence_sum: &BigUint) -> Self {
        let low = (sequence_sum + 1u32).max(BigUint::from(5u32));
        let high = (sequence_sum * 2u32).max(low.clone());
        Self { low, high }
    }
}

impl PrivateKeyRound {
    /// Generates a fresh round over a new super-increasing sequence of `params.size` terms.
    pub fn generate<R: RngCore + ?Sized>(
        params: &KnapsackParams,
        rng: &mut R,
    ) -> Result<Self, KnapsackError> {
        let sequence = SuperincreasingSequence::generate(params.size, rng)?;
        let range = ModulusRange::for_size(params.size);
        Self::wrap(sequence.into_inner(), &range, params, rng)
    }

    /// Accepts a caller-supplied key after checking every round invariant.
    pub fn try_with(
        modulus: BigUint,
        multiplier: BigUint,
        sequence: Vec<BigUint>,
    ) -> Result<Self, KnapsackError> {
        if sequence.is_empty() {
            return Err(KnapsackError::InvalidKey(
                "Sequence must not be empty".to_string(),
            ));
        }
        if sequence.iter().any(Zero::is_zero) {
            return Err(KnapsackError::InvalidKey(
                "Sequence elements must be positive".to_string(),
            ));
        }

        let sequence_sum = sum(&sequence);
        if modulus <= sequence_sum {
            return Err(KnapsackError::InvalidKey(format!(
                "Modulus {} must exceed the sequence sum {}",
                modulus, sequence_sum
            )));
        }
        if multiplier <= BigUint::one() || multiplier >= modulus {
            return Err(KnapsackError::InvalidKey(format!(
                "Multiplier {} must lie strictly between 1 and {}",
                multiplier, modulus
            )));
        }
        let g = gcd(&modulus, &multiplier);
        if !g.is_one() {
            return Err(KnapsackError::InvalidKey(format!(
                "gcd(modulus, multiplier) must be 1, got {}",
                g
            )));
        }

        Ok(Self {
            modulus,
            multiplier,
            sequence,
        })
    }

    /// Picks a modulus from `range` and a multiplier for it, disguising `sequence`.
    pub(crate) fn wrap<R: RngCore + ?Sized>(
        sequence: Vec<BigUint>,
        range: &ModulusRange,
        params: &KnapsackParams,
        rng: &mut R,
    ) -> Result<Self, KnapsackError> {
        let sequence_sum = sum(&sequence);
        let modulus = sample_modulus(range, &sequence_sum, params, rng)?;
        let multiplier = sample_multiplier(&modulus, params.max_attempts, rng)?;

        debug!(
            "Generated round: n={}, modulus bits={}, policy={:?}",
            sequence.len(),
            modulus.bits(),
            params.modulus_policy
        );

        Ok(Self {
            modulus,
            multiplier,
            sequence,
        })
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn multiplier(&self) -> &BigUint {
        &self.multiplier
    }

    pub fn sequence(&self) -> &[BigUint] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    fn ring(&self) -> Result<Ring, KnapsackError> {
        Ring::try_with(self.modulus.clone()).map_err(|e| KnapsackError::InvalidKey(e.to_string()))
    }

    /// `public_i = multiplier * sequence_i mod modulus`.
    pub fn public_key(&self) -> PublicKey {
        let disguise = |term: &BigUint| (&self.multiplier * term) % &self.modulus;
        PublicKey {
            elements: map_vector(&self.sequence, &disguise),
        }
    }

    /// Undoes this round's disguise: `multiplier^-1 * value mod modulus`.
    pub fn reduce(&self, value: &BigUint) -> Result<BigUint, KnapsackError> {
        let ring = self.ring()?;
        let inverse = ring
            .inv(&self.multiplier)
            .map_err(|e| KnapsackError::InvalidKey(e.to_string()))?;

        Ok(ring.mul(&inverse, value))
    }

    /// Single-round decryption: reduce, then decompose greedily over this round's sequence.
    pub fn decrypt(&self, ciphertext: &BigUint) -> Result<Message, KnapsackError> {
        let reduced = self.reduce(ciphertext)?;
        let decomposition = greedy_decompose(&self.sequence, &reduced);
        if !decomposition.is_exact() {
            debug!(
                "Greedy decomposition left residual {}; the decoded message is unreliable",
                decomposition.residual
            );
        }

        Ok(decomposition.message)
    }
}

impl PublicKey {
    pub fn elements(&self) -> &[BigUint] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn sum(&self) -> BigUint {
        sum(&self.elements)
    }

    pub fn into_elements(self) -> Vec<BigUint> {
        self.elements
    }

    /// `ciphertext = Σ message_i * public_i`.
    pub fn encrypt(&self, message: &Message) -> Result<BigUint, KnapsackError> {
        subset_sum(message, &self.elements)
    }
}

impl From<Vec<BigUint>> for PublicKey {
    fn from(elements: Vec<BigUint>) -> Self {
        Self { elements }
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.elements.iter().join(", "))
    }
}

fn sample_modulus<R: RngCore + ?Sized>(
    range: &ModulusRange,
    sequence_sum: &BigUint,
    params: &KnapsackParams,
    rng: &mut R,
) -> Result<BigUint, KnapsackError> {
    for attempt in 1..=params.max_attempts {
        let candidate = sample_in_range(rng, &range.low, &range.high)?;
        if candidate <= *sequence_sum {
            trace!("Modulus candidate #{} does not exceed the sequence sum", attempt);
            continue;
        }
        if !admits_multiplier(&candidate) {
            trace!("Modulus candidate #{} has no usable multiplier", attempt);
            continue;
        }
        if params.modulus_policy == ModulusPolicy::Prime
            && !is_probable_prime(&candidate, MILLER_RABIN_ROUNDS, rng)
        {
            trace!("Modulus candidate #{} is composite", attempt);
            continue;
        }

        return Ok(candidate);
    }

    warn!("No modulus found after {} attempts", params.max_attempts);
    Err(KnapsackError::KeyGenerationExhausted {
        what: "modulus",
        attempts: params.max_attempts,
    })
}

/// Whether some `w` with `1 < w < modulus - 1` is coprime to `modulus`.
///
/// That holds exactly when `φ(modulus) > 2`, i.e. for every modulus except
/// 1, 2, 3, 4 and 6.
fn admits_multiplier(modulus: &BigUint) -> bool {
    *modulus >= BigUint::from(5u32) && *modulus != BigUint::from(6u32)
}

fn sample_multiplier<R: RngCore + ?Sized>(
    modulus: &BigUint,
    max_attempts: usize,
    rng: &mut R,
) -> Result<BigUint, KnapsackError> {
    let two = BigUint::from(2u32);
    if *modulus < BigUint::from(4u32) {
        return Err(KnapsackError::InvalidParameters(format!(
            "Modulus {} leaves no room for a multiplier",
            modulus
        )));
    }
    let high = modulus - 2u32;

    for attempt in 1..=max_attempts {
        let candidate = sample_in_range(rng, &two, &high)?;
        let common = gcd(modulus, &candidate);
        let multiplier = candidate / common;
        if multiplier > BigUint::one() && gcd(modulus, &multiplier).is_one() {
            return Ok(multiplier);
        }
        trace!("Multiplier candidate #{} shares a factor with the modulus", attempt);
    }

    warn!("No multiplier found after {} attempts", max_attempts);
    Err(KnapsackError::KeyGenerationExhausted {
        what: "multiplier",
        attempts: max_attempts,
    })
}
