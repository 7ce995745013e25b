//! Implementation of ring ops using modular arithmetic.

use crate::errors::KnapsackError;

use super::extended_gcd;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Represents the ring Z_m using arbitrary-precision modular arithmetic.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ring {
    pub modulus: BigUint,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: BigUint) -> Result<Self, KnapsackError> {
        if modulus <= BigUint::one() {
            return Err(KnapsackError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use knapsack_crypto::ring::Ring;
    /// # use num_bigint::BigUint;
    /// let ring = Ring::try_with(BigUint::from(13u32)).unwrap();
    /// assert_eq!(ring.modulus(), &BigUint::from(13u32));
    /// ```
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    pub fn normalize(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    /// Computes `(a + b) mod modulus`.
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use knapsack_crypto::ring::Ring;
    /// # use num_bigint::BigUint;
    /// let ring = Ring::try_with(BigUint::from(2113u32)).unwrap();
    /// let product = ring.mul(&BigUint::from(988u32), &BigUint::from(3u32));
    /// assert_eq!(product, BigUint::from(851u32)); // 2964 mod 2113
    /// ```
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm.
    ///
    /// # Errors
    ///
    /// Returns `KnapsackError::NoInverse` if the inverse does not exist or `a` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use knapsack_crypto::ring::Ring;
    /// # use num_bigint::BigUint;
    /// let ring = Ring::try_with(BigUint::from(10u32)).unwrap();
    /// assert_eq!(ring.inv(&BigUint::from(3u32)).unwrap(), BigUint::from(7u32));
    /// assert!(ring.inv(&BigUint::from(2u32)).is_err()); // gcd(2, 10) = 2
    /// assert!(ring.inv(&BigUint::from(0u32)).is_err());
    /// ```
    pub fn inv(&self, a: &BigUint) -> Result<BigUint, KnapsackError> {
        let a_norm = self.normalize(a);
        if a_norm.is_zero() {
            return Err(KnapsackError::NoInverse(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        let modulus = BigInt::from(self.modulus.clone());
        let (g, x, _) = extended_gcd(&BigInt::from(a_norm.clone()), &modulus);
        if !g.is_one() {
            return Err(KnapsackError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        x.mod_floor(&modulus).to_biguint().ok_or_else(|| {
            KnapsackError::NoInverse(format!("Negative inverse for {} mod {}", a_norm, modulus))
        })
    }
}
