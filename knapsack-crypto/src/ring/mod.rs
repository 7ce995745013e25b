//! # Ring Module
//!
//! Provides the [`Ring`] struct for representing Z_m over arbitrary-precision
//! integers, together with the gcd helpers, uniform sampling and the
//! probable-prime test used during key generation.

pub mod helper;
pub mod math;
pub mod primality;
pub mod sampling;

pub use helper::{extended_gcd, gcd, pow2};
pub use math::Ring;
pub use primality::is_probable_prime;
pub use sampling::{sample_below, sample_in_range};
