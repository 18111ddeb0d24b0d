mod arith;
mod blind;
mod codec;
mod error;
mod sample;

pub use crate::arith::{gcd, modinv, modpow};
pub use crate::blind::{demask, mask, sign, sign_list, unsign, unsign_list};
pub use crate::codec::{pack, unpack, TAG_WIDTH};
pub use crate::error::{Error, Result};
pub use crate::sample::{random_identifier, sample_coprime};
