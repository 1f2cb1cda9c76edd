//! Statistical quality tests for binary sequences.
//!
//! Three tests from the NIST SP 800-22 battery, sized for the short
//! sequences this tool produces: the frequency (monobit) test, the runs
//! test, and the longest-run-of-ones test over 8-bit blocks. Each test
//! returns a p-value in [0, 1]; a sequence passes a test when the p-value is
//! at least `ALPHA`.

use statrs::function::erf::erfc;
use statrs::function::gamma::gamma_ur;

use crate::Error;

/// Significance level used for pass/fail verdicts.
pub const ALPHA: f64 = 0.01;

/// Block size for the longest-run test. The category probabilities below are
/// the NIST parameter set for this block size, valid from 128 bits up.
const BLOCK_SIZE: usize = 8;
const MIN_BITS_FOR_BLOCKS: usize = 128;

/// Probabilities of the longest run in an 8-bit block falling in each
/// category: <=1, 2, 3, >=4.
const BLOCK_PI: [f64; 4] = [0.2148, 0.3672, 0.2305, 0.1875];

/// p-values of the full battery for one sequence.
#[derive(Debug)]
pub struct TestReport {
    pub frequency: f64,
    pub runs: f64,
    pub longest_run: f64,
}

impl TestReport {
    /// Run all three tests over `bits`.
    ///
    /// Fails if `bits` contains anything other than '0'/'1' or is shorter
    /// than the longest-run test's 128-bit minimum.
    pub fn for_bits(bits: &str) -> Result<Self, Error> {
        Ok(TestReport {
            frequency: frequency_test(bits)?,
            runs: runs_test(bits)?,
            longest_run: longest_run_test(bits)?,
        })
    }

    /// True when every test clears `ALPHA`.
    pub fn passed(&self) -> bool {
        self.frequency >= ALPHA && self.runs >= ALPHA && self.longest_run >= ALPHA
    }
}

fn validate(bits: &str) -> Result<(), Error> {
    match bits.chars().find(|c| *c != '0' && *c != '1') {
        Some(c) => Err(Error::InvalidInput(format!(
            "sequence contains {:?}, expected only '0' and '1'",
            c
        ))),
        None => Ok(()),
    }
}

/// Frequency (monobit) test.
///
/// Maps bits to +1/-1, sums, and compares the normalized deviation against
/// the half-normal distribution: p = erfc(|s| / sqrt(n) / sqrt(2)).
pub fn frequency_test(bits: &str) -> Result<f64, Error> {
    validate(bits)?;
    let n = bits.len();
    if n == 0 {
        return Err(Error::InvalidInput("empty sequence".into()));
    }
    let sum: i64 = bits.chars().map(|c| if c == '1' { 1 } else { -1 }).sum();
    let s_obs = (sum as f64).abs() / (n as f64).sqrt();
    Ok(erfc(s_obs / 2f64.sqrt()))
}

/// Runs test: compares the number of runs against its expectation under a
/// fair source with the sequence's observed ones proportion.
pub fn runs_test(bits: &str) -> Result<f64, Error> {
    validate(bits)?;
    let n = bits.len();
    if n < 2 {
        return Err(Error::InvalidInput(format!(
            "runs test needs at least 2 bits, got {}",
            n
        )));
    }
    let ones = bits.chars().filter(|c| *c == '1').count();
    let pi = ones as f64 / n as f64;
    // Frequency prerequisite: a grossly unbalanced sequence fails outright
    // without computing the runs statistic.
    if (pi - 0.5).abs() >= 2.0 / (n as f64).sqrt() {
        return Ok(0.0);
    }
    let bytes = bits.as_bytes();
    let runs = 1 + bytes.windows(2).filter(|w| w[0] != w[1]).count();
    let expected = 2.0 * n as f64 * pi * (1.0 - pi);
    let denom = 2.0 * (2.0 * n as f64).sqrt() * pi * (1.0 - pi);
    Ok(erfc((runs as f64 - expected).abs() / denom))
}

/// Longest-run-of-ones test over 8-bit blocks.
///
/// Tallies the longest run of ones in each block into the categories
/// <=1, 2, 3, >=4, then chi-square-compares the tallies against `BLOCK_PI`:
/// p = igamc(K/2, chi^2/2) with K = 3 degrees of freedom.
pub fn longest_run_test(bits: &str) -> Result<f64, Error> {
    validate(bits)?;
    let n = bits.len();
    if n < MIN_BITS_FOR_BLOCKS {
        return Err(Error::InvalidInput(format!(
            "longest-run test needs at least {} bits, got {}",
            MIN_BITS_FOR_BLOCKS, n
        )));
    }
    let blocks = n / BLOCK_SIZE;
    let mut counts = [0usize; 4];
    for block in bits.as_bytes().chunks_exact(BLOCK_SIZE) {
        let mut longest = 0usize;
        let mut current = 0usize;
        for &b in block {
            if b == b'1' {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 0;
            }
        }
        let category = match longest {
            0 | 1 => 0,
            2 => 1,
            3 => 2,
            _ => 3,
        };
        counts[category] += 1;
    }
    let chi_squared: f64 = counts
        .iter()
        .zip(BLOCK_PI.iter())
        .map(|(&observed, &pi)| {
            let expected = blocks as f64 * pi;
            (observed as f64 - expected).powi(2) / expected
        })
        .sum();
    let degrees = (BLOCK_PI.len() - 1) as f64;
    Ok(gamma_ur(degrees / 2.0, chi_squared / 2.0))
}
