//! Secure random number generation.
//!
//! Every draw comes from a cryptographically secure generator. The
//! `RngCore + CryptoRng` bound keeps fast non-crypto PRNGs out at compile
//! time, and a failing source surfaces as an error instead of degrading.

mod source;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::{Error, Result};

pub use source::source_name;

// =============================================================================
// RNG
// =============================================================================

pub struct SecureRandom<R = OsRng> {
    rng: R,
}

impl SecureRandom<OsRng> {
    /// Random source backed by the operating system CSPRNG.
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for SecureRandom<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> SecureRandom<R> {
    /// Wrap another cryptographically secure generator.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Fill `dest` with raw random bytes.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        self.rng.try_fill_bytes(dest).map_err(|e| {
            log::error!("entropy source failed: {e}");
            Error::EntropySourceUnavailable(e.to_string())
        })
    }

    #[inline]
    pub fn next_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf)?;
        let value = u32::from_le_bytes(buf);
        buf.zeroize();
        Ok(value)
    }

    /// Uniform integer in `[0, bound)`.
    ///
    /// Draws below `2^32 mod bound` are discarded and redrawn, so every
    /// residue is equally likely.
    pub fn next_int(&mut self, bound: u32) -> Result<u32> {
        if bound == 0 {
            return Err(Error::invalid("random bound must be positive"));
        }

        let threshold = bound.wrapping_neg() % bound;
        loop {
            let value = self.next_u32()?;
            if value >= threshold {
                return Ok(value % bound);
            }
        }
    }

    /// Uniform integer in `[low, high]`.
    pub fn next_in_range(&mut self, low: u32, high: u32) -> Result<u32> {
        if high < low {
            return Err(Error::invalid(format!("empty range {low}..={high}")));
        }
        match (high - low).checked_add(1) {
            Some(span) => Ok(low + self.next_int(span)?),
            None => self.next_u32(),
        }
    }

    /// `count` raw 32-bit values for bulk sampling, filled in one read.
    pub fn next_int_batch(&mut self, count: usize) -> Result<Vec<u32>> {
        let mut bytes = vec![0u8; count * 4];
        self.fill_bytes(&mut bytes)?;

        let values = bytes
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();

        bytes.zeroize();
        Ok(values)
    }
}

#[cfg(test)]
pub(crate) fn seeded(seed: u64) -> SecureRandom<rand_chacha::ChaCha20Rng> {
    use rand::SeedableRng;
    SecureRandom::from_rng(rand_chacha::ChaCha20Rng::seed_from_u64(seed))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Source that always reports failure.
    pub(crate) struct DeadSource;

    impl RngCore for DeadSource {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, _: &mut [u8]) {}
        fn try_fill_bytes(&mut self, _: &mut [u8]) -> std::result::Result<(), rand::Error> {
            Err(rand::Error::new("entropy pool closed"))
        }
    }

    impl CryptoRng for DeadSource {}

    #[test]
    fn next_int_stays_below_bound() {
        let mut rng = seeded(1);
        for bound in [1, 2, 3, 7, 26, 94, 1000, u32::MAX] {
            for _ in 0..200 {
                assert!(rng.next_int(bound).unwrap() < bound);
            }
        }
    }

    #[test]
    fn next_int_rejects_zero_bound() {
        let mut rng = seeded(2);
        assert!(matches!(
            rng.next_int(0),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn next_in_range_is_inclusive() {
        let mut rng = seeded(3);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..2000 {
            let v = rng.next_in_range(5, 8).unwrap();
            assert!((5..=8).contains(&v));
            seen_low |= v == 5;
            seen_high |= v == 8;
        }
        assert!(seen_low && seen_high);
        assert!(rng.next_in_range(9, 8).is_err());
        assert!(rng.next_in_range(0, u32::MAX).is_ok());
    }

    #[test]
    fn batch_has_requested_count() {
        let mut rng = seeded(4);
        assert_eq!(rng.next_int_batch(0).unwrap().len(), 0);
        let batch = rng.next_int_batch(64).unwrap();
        assert_eq!(batch.len(), 64);
        // 64 identical u32 draws from a CSPRNG would be astronomically unlikely
        assert!(batch.iter().any(|&v| v != batch[0]));
    }

    #[test]
    fn failing_source_is_fatal() {
        let mut rng = SecureRandom::from_rng(DeadSource);
        assert!(matches!(
            rng.next_int(10),
            Err(Error::EntropySourceUnavailable(_))
        ));
        assert!(matches!(
            rng.next_int_batch(4),
            Err(Error::EntropySourceUnavailable(_))
        ));
    }

    #[test]
    fn os_source_produces_values() {
        let mut rng = SecureRandom::new();
        let mut buf = [0u8; 32];
        rng.fill_bytes(&mut buf).unwrap();
        assert!(buf.iter().any(|&b| b != 0));
    }
}
