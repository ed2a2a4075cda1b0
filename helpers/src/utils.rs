use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use rand::distr::Alphanumeric;
use rand::rngs::OsRng;
use rand::{Rng, TryRngCore};

use crate::constants::{AES_IV_SIZE, DATE_TIME_FORMAT};
use crate::error::{CryptoError, CryptoResult};

/**
    Generate a fresh 16-byte IV from the operating system's CSPRNG.

    Fails with `RandomSource` if the OS cannot provide entropy.
*/
pub fn generate_iv() -> CryptoResult<[u8; AES_IV_SIZE]> {
    let mut iv = [0u8; AES_IV_SIZE];
    OsRng
        .try_fill_bytes(&mut iv)
        .map_err(|e| CryptoError::RandomSource(e.to_string()))?;
    Ok(iv)
}

/**
    Random string of `len` characters drawn uniformly from `[A-Za-z0-9]`.

    Uses the thread-local CSPRNG, so the output is suitable for tokens.
*/
pub fn random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/**
    Format a timestamp as `Y-m-d H:i:s` in its own time zone.
*/
pub fn to_date_time_string<Tz>(date_time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date_time.format(DATE_TIME_FORMAT).to_string()
}
