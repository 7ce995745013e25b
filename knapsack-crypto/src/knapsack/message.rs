use crate::errors::KnapsackError;

use itertools::Itertools;
use rand::{Rng, RngCore};

use std::fmt;
use std::str::FromStr;

/// A fixed-length binary message, one bit per knapsack position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message {
    bits: Vec<bool>,
}

impl Message {
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Uniformly random message of `size` bits.
    pub fn random<R: RngCore + ?Sized>(size: usize, rng: &mut R) -> Self {
        let bits = (0..size).map(|_| rng.random_bool(0.5)).collect();
        Self { bits }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of positions where `self` and `other` differ.
    ///
    /// Decoding never fails on a broken trapdoor, it yields a wrong message
    /// instead; this count is how a caller measures that. `self` fixes the
    /// expected length.
    pub fn count_mismatches(&self, other: &Message) -> Result<usize, KnapsackError> {
        if self.len() != other.len() {
            return Err(KnapsackError::MessageLengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }

        Ok(self
            .bits
            .iter()
            .zip_eq(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count())
    }
}

impl From<Vec<bool>> for Message {
    fn from(bits: Vec<bool>) -> Self {
        Self::new(bits)
    }
}

impl TryFrom<&[u8]> for Message {
    type Error = KnapsackError;

    /// Accepts only 0 and 1 entries.
    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        let bits = values
            .iter()
            .enumerate()
            .map(|(position, &value)| match value {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(KnapsackError::InvalidMessage(format!(
                    "Value {} at position {} is not a bit",
                    other, position
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { bits })
    }
}

impl FromStr for Message {
    type Err = KnapsackError;

    /// Parses a string of `0` and `1` characters, e.g. `"00011"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(KnapsackError::InvalidMessage(format!(
                    "Character '{}' at position {} is not a bit",
                    other, position
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { bits })
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.bits.iter().map(|&bit| u8::from(bit)).join("");
        f.write_str(&rendered)
    }
}
