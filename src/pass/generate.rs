//! Character password generation.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::{CharacterSet, GeneratedPassword, GenerationConfig, PasswordKind};
use crate::error::{Error, Result};
use crate::rng::SecureRandom;
use crate::strength::calculate_entropy;

/// Generate a single password based on `config`.
pub fn generate<R: RngCore + CryptoRng>(
    config: &GenerationConfig,
    rng: &mut SecureRandom<R>,
) -> Result<GeneratedPassword> {
    let charset = CharacterSet::build(config)?;
    check_length(config.length)?;

    let mut buf = String::with_capacity(config.length);
    generate_from_charset(&charset, config.length, rng, &mut buf)?;

    log::debug!(
        "generated {}-char password from {}-symbol alphabet",
        config.length,
        charset.len()
    );
    Ok(finish(buf, &charset, config.length))
}

/// Generate `count` passwords, building the alphabet once.
pub fn generate_batch<R: RngCore + CryptoRng>(
    config: &GenerationConfig,
    count: usize,
    rng: &mut SecureRandom<R>,
) -> Result<Vec<GeneratedPassword>> {
    let charset = CharacterSet::build(config)?;
    check_length(config.length)?;

    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        let mut buf = String::with_capacity(config.length);
        generate_from_charset(&charset, config.length, rng, &mut buf)?;
        passwords.push(finish(buf, &charset, config.length));
    }

    log::debug!("generated batch of {count} password(s)");
    Ok(passwords)
}

fn check_length(length: usize) -> Result<()> {
    if length == 0 {
        return Err(Error::invalid("password length must be positive"));
    }
    Ok(())
}

fn finish(value: String, charset: &CharacterSet, length: usize) -> GeneratedPassword {
    let entropy = calculate_entropy(length, charset.len());
    GeneratedPassword::new(value, charset.len(), length, entropy, PasswordKind::Charset)
}

/// Fill `buf` with `length` characters drawn from `charset`.
/// Caller owns the buffer; it is cleared first.
#[inline]
fn generate_from_charset<R: RngCore + CryptoRng>(
    charset: &CharacterSet,
    length: usize,
    rng: &mut SecureRandom<R>,
    buf: &mut String,
) -> Result<()> {
    let mut draws = rng.next_int_batch(length)?;
    buf.clear();
    buf.extend(draws.iter().map(|&raw| random_char(charset.as_slice(), raw)));
    draws.zeroize();
    Ok(())
}

// Plain modulo reduction: alphabets that do not divide 2^32 carry a bias
// below 2^-25 per draw for the sizes this crate builds.
#[inline]
fn random_char(chars: &[char], raw: u32) -> char {
    chars[raw as usize % chars.len()]
}
