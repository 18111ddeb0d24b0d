use crate::error::{Error, Result};
use num_bigint_dig::{BigUint, ModInverse};
use num_integer::Integer;

/// Euclidean greatest common divisor.
///
/// Callers testing coprimality must compare the result against one;
/// a merely non-zero gcd holds for every pair of positive integers.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// `base^exponent mod modulus` by square-and-multiply.
pub fn modpow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    check_modulus(modulus)?;
    Ok(base.modpow(exponent, modulus))
}

/// The unique `v` in `[0, modulus)` with `value * v = 1 (mod modulus)`.
pub fn modinv(value: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    check_modulus(modulus)?;
    value
        .mod_inverse(modulus)
        .and_then(|v| v.to_biguint())
        .ok_or_else(|| Error::NoInverse {
            value: value.clone(),
            modulus: modulus.clone(),
        })
}

// A modulus of 2 or less is a caller configuration bug, not a
// recoverable condition. Every operation taking a modulus goes
// through this check before touching the arithmetic.
pub(crate) fn check_modulus(modulus: &BigUint) -> Result<()> {
    if *modulus <= BigUint::from(2u8) {
        return Err(Error::InvalidModulus(modulus.clone()));
    }
    Ok(())
}
