//! Sequence generation for binseq.
//!
//! This module exposes the `BitSource` trait (the uniform-bit provider the
//! generator draws from), the pure `sequence` builder, and the `generate`
//! convenience entry used by the CLI. The bit source is an explicit argument
//! so tests can inject a seeded RNG and check sequences deterministically.

use rand::rngs::OsRng;
use rand::{Rng, RngCore, thread_rng};

use crate::Error;

/// A provider of independent uniform random bits.
///
/// Implemented for every `rand::Rng`, so the CLI passes `thread_rng()` and
/// tests pass a seeded `StdRng`.
pub trait BitSource {
    /// Draw the next bit, 0 or 1 with probability 0.5 each.
    fn next_bit(&mut self) -> u8;
}

impl<R: Rng> BitSource for R {
    fn next_bit(&mut self) -> u8 {
        self.gen_range(0..2)
    }
}

/// Build a binary sequence of `size` characters from `source`.
///
/// Each position is an independent draw. A non-positive `size` yields the
/// empty string; negative input is handled here explicitly instead of being
/// left to loop behavior.
pub fn sequence<S: BitSource>(source: &mut S, size: i64) -> String {
    let len = usize::try_from(size).unwrap_or(0);
    (0..len).map(|_| char::from(b'0' + source.next_bit())).collect()
}

/// Generate a sequence of `size` uniform random bits using the thread RNG.
///
/// Probes the OS entropy source first: `thread_rng` aborts the process when
/// entropy is unavailable at first use, and the probe turns that condition
/// into a reportable `RandomSourceUnavailable` instead.
pub fn generate(size: i64) -> Result<String, Error> {
    let mut probe = [0u8; 1];
    OsRng
        .try_fill_bytes(&mut probe)
        .map_err(|e| Error::RandomSourceUnavailable(e.to_string()))?;
    Ok(sequence(&mut thread_rng(), size))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_sequence_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in [0i64, 1, 5, 128] {
            assert_eq!(sequence(&mut rng, size).len(), size as usize);
        }
    }

    #[test]
    fn test_negative_size_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(sequence(&mut rng, -3), "");
    }

    #[test]
    fn test_only_binary_digits() {
        let mut rng = StdRng::seed_from_u64(11);
        let out = sequence(&mut rng, 256);
        assert!(out.chars().all(|c| c == '0' || c == '1'));
    }

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(sequence(&mut a, 64), sequence(&mut b, 64));
    }

    #[test]
    fn test_ones_proportion_converges() {
        // With n = 100_000 the sampling std of the proportion is ~0.0016,
        // so a 0.01 margin leaves over six sigma of slack.
        let mut rng = StdRng::seed_from_u64(3);
        let out = sequence(&mut rng, 100_000);
        let ones = out.chars().filter(|c| *c == '1').count();
        let proportion = ones as f64 / 100_000.0;
        assert!((proportion - 0.5).abs() < 0.01, "proportion = {}", proportion);
    }

    #[test]
    fn test_generate_uses_thread_rng() {
        let out = generate(32).expect("generate");
        assert_eq!(out.len(), 32);
    }
}
