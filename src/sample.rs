use crate::arith::{check_modulus, gcd};
use crate::error::Result;
use num_bigint_dig::prime::probably_prime;
use num_bigint_dig::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;

/// Draw a random prime in `(1, n)` that is coprime to `n`.
///
/// With a semiprime `n` only its two factors are excluded, so the
/// rejection loop terminates almost immediately. For a general modulus
/// the rejection rate can be far higher; callers are expected to pass
/// an RSA-style semiprime.
pub fn sample_coprime<R: Rng + ?Sized>(n: &BigUint, rng: &mut R) -> Result<BigUint> {
    check_modulus(n)?;
    let low = BigUint::from(2u8);
    let mut draws = 0usize;
    loop {
        let candidate = rng.gen_biguint_range(&low, n);
        draws += 1;
        if probably_prime(&candidate, 20) && gcd(&candidate, n).is_one() {
            log::debug!("sampled coprime prime after {} draws", draws);
            return Ok(candidate);
        }
    }
}

/// Random decimal numeral of `len` digits, parsed as an integer.
///
/// Digits are drawn independently, so the numeral may carry leading
/// zeros and the resulting integer may print shorter than `len`.
pub fn random_identifier<R: Rng + ?Sized>(len: usize, rng: &mut R) -> BigUint {
    if len == 0 {
        return BigUint::zero();
    }
    let digits: String = (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();
    BigUint::parse_bytes(digits.as_bytes(), 10).unwrap()
}
