use crate::errors::KnapsackError;

use serde::{Deserialize, Serialize};

/// Upper bound on attempts for every rejection-sampling loop in key generation.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

/// Witness count for the Miller-Rabin test under [`ModulusPolicy::Prime`].
pub const MILLER_RABIN_ROUNDS: usize = 32;

/// Which modulus candidates key generation accepts.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModulusPolicy {
    /// Any candidate exceeding the sequence sum.
    #[default]
    Any,
    /// Only probable primes exceeding the sequence sum.
    Prime,
}

/// Parameters for key generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnapsackParams {
    /// Message length n, also the length of every key vector.
    pub size: usize,
    /// Number of trapdoor rounds in the chain (1 is the basic cryptosystem).
    pub rounds: usize,
    /// Retry bound for the modulus and multiplier searches.
    pub max_attempts: usize,
    pub modulus_policy: ModulusPolicy,
}

impl KnapsackParams {
    /// Creates a new KnapsackParams instance with the given message length and round count.
    pub fn try_with(size: usize, rounds: usize) -> Result<Self, KnapsackError> {
        if size == 0 {
            return Err(KnapsackError::InvalidParameters(
                "Message length n must be > 0".to_string(),
            ));
        }

        if rounds == 0 {
            return Err(KnapsackError::InvalidParameters(
                "Number of rounds must be > 0".to_string(),
            ));
        }

        Ok(Self {
            size,
            rounds,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            modulus_policy: ModulusPolicy::Any,
        })
    }

    pub fn with_policy(mut self, modulus_policy: ModulusPolicy) -> Self {
        self.modulus_policy = modulus_policy;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Result<Self, KnapsackError> {
        if max_attempts == 0 {
            return Err(KnapsackError::InvalidParameters(
                "max_attempts must be > 0".to_string(),
            ));
        }

        self.max_attempts = max_attempts;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() -> Result<(), KnapsackError> {
        let params = KnapsackParams::try_with(5, 1)?;
        assert_eq!(params.size, 5);
        assert_eq!(params.rounds, 1);
        assert_eq!(params.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(params.modulus_policy, ModulusPolicy::Any);
        Ok(())
    }

    #[test]
    fn test_invalid_values() {
        assert!(KnapsackParams::try_with(0, 1).is_err());
        assert!(KnapsackParams::try_with(5, 0).is_err());

        let params = KnapsackParams::try_with(5, 1).unwrap();
        assert!(params.with_max_attempts(0).is_err());
    }

    #[test]
    fn test_builder_methods() -> Result<(), KnapsackError> {
        let params = KnapsackParams::try_with(8, 3)?
            .with_policy(ModulusPolicy::Prime)
            .with_max_attempts(50)?;
        assert_eq!(params.modulus_policy, ModulusPolicy::Prime);
        assert_eq!(params.max_attempts, 50);
        Ok(())
    }

    #[test]
    fn test_policy_serializes_as_snake_case() {
        let json = serde_json::to_string(&ModulusPolicy::Prime).unwrap();
        assert_eq!(json, "\"prime\"");
    }
}
