//! Iterated (cascaded) trapdoor.
//!
//! Round 0 wraps a super-increasing sequence. Round `j` wraps the public
//! vector of round `j - 1` under a fresh modulus and multiplier. Decryption
//! peels the rounds from the outermost inwards and decomposes greedily once,
//! over round 0's sequence.

use crate::errors::KnapsackError;
use crate::keypair::keys::{ModulusRange, PrivateKeyRound, PublicKey};
use crate::keypair::params::KnapsackParams;
use crate::knapsack::Message;

use log::debug;
use num_bigint::BigUint;
use rand::RngCore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKeyChain {
    rounds: Vec<PrivateKeyRound>,
}

impl PrivateKeyChain {
    /// Generates a base round and iterates it up to `params.rounds` rounds.
    pub fn generate<R: RngCore + ?Sized>(
        params: &KnapsackParams,
        rng: &mut R,
    ) -> Result<Self, KnapsackError> {
        let base = PrivateKeyRound::generate(params, rng)?;
        Self::iterate(base, params, rng)
    }

    /// Extends a caller-supplied base round to `params.rounds` rounds.
    pub fn iterate<R: RngCore + ?Sized>(
        base: PrivateKeyRound,
        params: &KnapsackParams,
        rng: &mut R,
    ) -> Result<Self, KnapsackError> {
        let mut rounds = Vec::with_capacity(params.rounds);
        rounds.push(base);

        while rounds.len() < params.rounds {
            let Some(previous) = rounds.last() else {
                return Err(KnapsackError::InvalidKey("Chain has no base round".into()));
            };
            let disguised = previous.public_key();
            let range = ModulusRange::above(&disguised.sum());
            let next = PrivateKeyRound::wrap(disguised.into_elements(), &range, params, rng)?;

            debug!("Extended chain to {} rounds", rounds.len() + 1);
            rounds.push(next);
        }

        Ok(Self { rounds })
    }

    /// Accepts caller-supplied rounds, innermost first.
    ///
    /// Each round after the first must wrap exactly the public vector of the round before it.
    pub fn try_from_rounds(rounds: Vec<PrivateKeyRound>) -> Result<Self, KnapsackError> {
        if rounds.is_empty() {
            return Err(KnapsackError::InvalidKey(
                "Chain must contain at least one round".to_string(),
            ));
        }

        for (index, pair) in rounds.windows(2).enumerate() {
            let expected = pair[0].public_key();
            if pair[1].sequence() != expected.elements() {
                return Err(KnapsackError::InvalidKey(format!(
                    "Round {} does not wrap the public vector of round {}",
                    index + 1,
                    index
                )));
            }
        }

        Ok(Self { rounds })
    }

    pub fn rounds(&self) -> &[PrivateKeyRound] {
        &self.rounds
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Message length the chain encrypts.
    pub fn size(&self) -> usize {
        self.innermost().len()
    }

    /// Round 0, which holds the super-increasing sequence.
    pub fn innermost(&self) -> &PrivateKeyRound {
        &self.rounds[0]
    }

    /// The last round applied; the published key comes from it.
    pub fn outermost(&self) -> &PrivateKeyRound {
        &self.rounds[self.rounds.len() - 1]
    }

    pub fn public_key(&self) -> PublicKey {
        self.outermost().public_key()
    }

    /// Reduces through every round from the outermost to round 1, then decrypts with round 0.
    pub fn decrypt(&self, ciphertext: &BigUint) -> Result<Message, KnapsackError> {
        let inner_sum = self
            .rounds
            .iter()
            .skip(1)
            .rev()
            .try_fold(ciphertext.clone(), |value, round| round.reduce(&value))?;

        self.innermost().decrypt(&inner_sum)
    }
}

impl From<PrivateKeyRound> for PrivateKeyChain {
    fn from(round: PrivateKeyRound) -> Self {
        Self {
            rounds: vec![round],
        }
    }
}
