use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Computes the greatest common divisor of two numbers.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b).
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() {
        if b.is_negative() {
            return (-b, BigInt::zero(), -BigInt::one());
        }

        return (b.clone(), BigInt::zero(), BigInt::one());
    }

    let (g, x1, y1) = extended_gcd(&(b % a), a);
    let x = y1 - (b / a) * &x1;
    let y = x1;
    (g, x, y)
}

/// Returns `2^exponent`.
pub fn pow2(exponent: usize) -> BigUint {
    BigUint::one() << exponent
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: i64) -> BigInt {
        BigInt::from(v)
    }

    fn ubig(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_simple_gcd() {
        assert_eq!(gcd(&ubig(1), &ubig(6)), ubig(1));
        assert_eq!(gcd(&ubig(4), &ubig(6)), ubig(2));
        assert_eq!(gcd(&ubig(6), &ubig(6)), ubig(6));
        assert_eq!(gcd(&ubig(10), &ubig(0)), ubig(10));
        assert_eq!(gcd(&ubig(0), &ubig(5)), ubig(5));
        assert_eq!(gcd(&ubig(54), &ubig(24)), ubig(6));
        assert_eq!(gcd(&ubig(2113), &ubig(988)), ubig(1));
    }

    #[test]
    fn test_extended_gcd_basic() {
        let (g, x, y) = extended_gcd(&big(12), &big(8));
        assert_eq!(g, big(4));
        assert_eq!(big(12) * x + big(8) * y, g);

        let (g, x, y) = extended_gcd(&big(988), &big(2113));
        assert_eq!(g, big(1));
        assert_eq!(big(988) * x + big(2113) * y, g);
    }

    #[test]
    fn test_extended_gcd_zero() {
        let (g, x, y) = extended_gcd(&big(0), &big(15));
        assert_eq!(g, big(15));
        assert_eq!(x, big(0));
        assert_eq!(y, big(1));

        let (g, x, _y) = extended_gcd(&big(15), &big(0));
        assert_eq!(g, big(15));
        assert_eq!(big(15) * x, g);
    }

    #[test]
    fn test_extended_gcd_negative() {
        let (g, x, y) = extended_gcd(&big(-15), &big(10));
        assert_eq!(g, big(5));
        assert_eq!(big(-15) * x + big(10) * y, g);
    }

    #[test]
    fn test_extended_gcd_large() {
        let a = BigInt::from(pow2(130)) + 1u32;
        let b = BigInt::from(pow2(97)) + 3u32;
        let (g, x, y) = extended_gcd(&a, &b);
        assert_eq!(&a * x + &b * y, g);
    }

    #[test]
    fn test_pow2() {
        assert_eq!(pow2(0), ubig(1));
        assert_eq!(pow2(10), ubig(1024));
        assert_eq!(pow2(64), ubig(u64::MAX) + 1u32);
    }
}
