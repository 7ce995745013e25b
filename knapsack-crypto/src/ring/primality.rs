//! Miller-Rabin probable-prime test over `BigUint`.
//!
//! With `rounds` random witnesses the probability of accepting a composite is
//! at most `4^(-rounds)`.

use super::sampling::sample_below;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::RngCore;

const SMALL_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

pub fn is_probable_prime<R: RngCore + ?Sized>(n: &BigUint, rounds: usize, rng: &mut R) -> bool {
    if n < &BigUint::from(2u32) {
        return false;
    }

    // Trial division also settles every n <= 97.
    for &p in SMALL_PRIMES.iter() {
        let p = BigUint::from(p);
        if n == &p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    // n - 1 = 2^s * d with d odd
    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;
    let two = BigUint::from(2u32);
    let witness_span = n - 3u32;

    'witness: for _ in 0..rounds {
        // a in [2, n - 2]
        let a = &two + sample_below(rng, &witness_span);
        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }

    true
}
