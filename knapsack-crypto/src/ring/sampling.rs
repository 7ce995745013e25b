//! Uniform sampling of `BigUint` values below a bound or within a closed range.

use crate::errors::KnapsackError;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::RngCore;

/// Unbiased sampling of a uniform integer in `[0, bound)`.
pub fn sample_below<R: RngCore + ?Sized>(rng: &mut R, bound: &BigUint) -> BigUint {
    if bound.is_zero() {
        return BigUint::zero();
    }
    let nbytes = bound.bits().div_ceil(8) as usize;
    let max = BigUint::one() << (nbytes * 8);
    // largest multiple of bound below 2^(8*nbytes)
    let limit = &max - (&max % bound);

    let mut buf = vec![0u8; nbytes];
    loop {
        rng.fill_bytes(&mut buf);
        let r = BigUint::from_bytes_le(&buf);
        if r < limit {
            return r % bound;
        }
    }
}

/// Uniform integer in the closed interval `[low, high]`.
pub fn sample_in_range<R: RngCore + ?Sized>(
    rng: &mut R,
    low: &BigUint,
    high: &BigUint,
) -> Result<BigUint, KnapsackError> {
    if low > high {
        return Err(KnapsackError::InvalidParameters(format!(
            "Empty sampling range [{}, {}]",
            low, high
        )));
    }

    let width = high - low + 1u32;
    Ok(low + sample_below(rng, &width))
}
