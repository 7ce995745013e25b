//! Full sender/receiver exchanges: encrypt under the published key, decrypt
//! through the private chain, and count how many bits came back wrong.

use crate::errors::KnapsackError;
use crate::keypair::{KnapsackParams, ModulusPolicy, PrivateKeyChain};
use crate::knapsack::Message;

use log::{debug, info};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// Smallest message length a random batch trial uses.
pub const MIN_TRIAL_SIZE: usize = 3;

/// What one exchange produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialOutcome {
    pub size: usize,
    pub rounds: usize,
    pub message: String,
    /// Decimal rendering of the ciphertext.
    pub ciphertext: String,
    pub decoded: String,
    /// Mismatching bits between `message` and `decoded`.
    pub errors: usize,
}

/// Configuration for [`run_batch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    pub trials: usize,
    /// Sizes are drawn from `MIN_TRIAL_SIZE..=max_size`.
    pub max_size: usize,
    /// Round counts are drawn from `1..=max_rounds`.
    pub max_rounds: usize,
    pub modulus_policy: ModulusPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub outcomes: Vec<TrialOutcome>,
    pub total_errors: usize,
}

impl BatchConfig {
    pub fn try_with(
        trials: usize,
        max_size: usize,
        max_rounds: usize,
    ) -> Result<Self, KnapsackError> {
        if max_size < MIN_TRIAL_SIZE {
            return Err(KnapsackError::InvalidParameters(format!(
                "max_size must be >= {}, got {}",
                MIN_TRIAL_SIZE, max_size
            )));
        }

        if max_rounds == 0 {
            return Err(KnapsackError::InvalidParameters(
                "max_rounds must be > 0".to_string(),
            ));
        }

        Ok(Self {
            trials,
            max_size,
            max_rounds,
            modulus_policy: ModulusPolicy::Any,
        })
    }

    pub fn with_policy(mut self, modulus_policy: ModulusPolicy) -> Self {
        self.modulus_policy = modulus_policy;
        self
    }
}

/// Runs one exchange of `message` against an existing chain.
pub fn run_trial(chain: &PrivateKeyChain, message: &Message) -> Result<TrialOutcome, KnapsackError> {
    let ciphertext = chain.public_key().encrypt(message)?;
    let decoded = chain.decrypt(&ciphertext)?;
    let errors = message.count_mismatches(&decoded)?;

    Ok(TrialOutcome {
        size: chain.size(),
        rounds: chain.len(),
        message: message.to_string(),
        ciphertext: ciphertext.to_string(),
        decoded: decoded.to_string(),
        errors,
    })
}

/// Generates a fresh chain and a random message for `params`, then runs one exchange.
pub fn run_random_trial<R: RngCore + ?Sized>(
    params: &KnapsackParams,
    rng: &mut R,
) -> Result<TrialOutcome, KnapsackError> {
    let chain = PrivateKeyChain::generate(params, rng)?;
    let message = Message::random(params.size, rng);
    run_trial(&chain, &message)
}

/// Runs `config.trials` random exchanges with random sizes and round counts.
pub fn run_batch<R: RngCore + ?Sized>(
    config: &BatchConfig,
    rng: &mut R,
) -> Result<BatchSummary, KnapsackError> {
    let mut outcomes = Vec::with_capacity(config.trials);

    for trial in 1..=config.trials {
        let size = rng.random_range(MIN_TRIAL_SIZE..=config.max_size);
        let rounds = rng.random_range(1..=config.max_rounds);
        let params = KnapsackParams::try_with(size, rounds)?.with_policy(config.modulus_policy);

        let outcome = run_random_trial(&params, rng)?;
        debug!(
            "Trial {}: n={}, rounds={}, errors={}",
            trial, outcome.size, outcome.rounds, outcome.errors
        );
        outcomes.push(outcome);
    }

    let total_errors = outcomes.iter().map(|outcome| outcome.errors).sum();
    info!(
        "Finished {} trials with {} total errors",
        outcomes.len(),
        total_errors
    );

    Ok(BatchSummary {
        outcomes,
        total_errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::preset::{sample_message, sample_round};

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TEST_SEED: u64 = 42;

    #[test]
    fn test_sample_trial() -> Result<(), KnapsackError> {
        let chain = PrivateKeyChain::from(sample_round()?);
        let outcome = run_trial(&chain, &sample_message()?)?;

        assert_eq!(outcome.size, 5);
        assert_eq!(outcome.rounds, 1);
        assert_eq!(outcome.ciphertext, "1861");
        assert_eq!(outcome.decoded, "00011");
        assert_eq!(outcome.errors, 0);
        Ok(())
    }

    #[test]
    fn test_trial_with_wrong_length_message() -> Result<(), KnapsackError> {
        let chain = PrivateKeyChain::from(sample_round()?);
        let message: Message = "0101".parse()?;
        assert!(matches!(
            run_trial(&chain, &message),
            Err(KnapsackError::LengthMismatch { message: 4, key: 5 })
        ));
        Ok(())
    }

    #[test]
    fn test_batch_has_no_errors() -> Result<(), KnapsackError> {
        let mut rng = StdRng::seed_from_u64(TEST_SEED);
        let config = BatchConfig::try_with(20, 24, 4)?;
        let summary = run_batch(&config, &mut rng)?;

        assert_eq!(summary.outcomes.len(), 20);
        assert_eq!(summary.total_errors, 0);
        for outcome in &summary.outcomes {
            assert!((MIN_TRIAL_SIZE..=24).contains(&outcome.size));
            assert!((1..=4).contains(&outcome.rounds));
            assert_eq!(outcome.message, outcome.decoded);
        }
        Ok(())
    }

    #[test]
    fn test_batch_config_validation() {
        assert!(BatchConfig::try_with(10, 2, 1).is_err());
        assert!(BatchConfig::try_with(10, 3, 0).is_err());
        assert!(BatchConfig::try_with(0, 3, 1).is_ok());
    }

    #[test]
    fn test_outcome_serializes() -> Result<(), KnapsackError> {
        let chain = PrivateKeyChain::from(sample_round()?);
        let outcome = run_trial(&chain, &sample_message()?)?;
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"ciphertext\":\"1861\""));
        assert!(json.contains("\"errors\":0"));
        Ok(())
    }
}
