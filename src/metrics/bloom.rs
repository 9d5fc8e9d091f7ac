//! Bloom filter digests and the distance between them.
//!
//! Burton Bloom, "Space/time trade-offs in hash coding with allowable errors",
//! Communications of the ACM, 7, 13, 422-426, July 1970.
//!
//! The input is hashed in overlapping windows of [`WINDOW`] bytes that slide
//! one byte at a time. Each window is hashed with Adler-32 modulo the number
//! of bits in the digest, and that bit is set. Unlike a cryptographic digest,
//! similar inputs produce similar digests, so the fraction of shared bits is a
//! (cheap, approximate) similarity between the inputs.
use crate::error::{Error, Result};
use crate::Seq;

/// Number of bytes hashed per window.
pub const WINDOW: usize = 4;

/// Largest prime smaller than 2^16.
const ADLER_BASE: u32 = 65521;

fn adler32(data: &[u8]) -> u32 {
    let (mut s1, mut s2) = (1u32, 0u32);
    for &x in data {
        s1 = (s1 + x as u32) % ADLER_BASE;
        s2 = (s2 + s1) % ADLER_BASE;
    }
    (s2 << 16) | s1
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BloomDigest {
    words: Vec<u32>,
}

impl BloomDigest {
    /// Digest `data` into `len_bytes` bytes. `len_bytes` must be a positive
    /// multiple of 4.
    pub fn new(data: Seq, len_bytes: usize) -> Result<Self> {
        if len_bytes == 0 || len_bytes % 4 != 0 {
            return Err(Error::InvalidDigestLength(len_bytes));
        }
        let mut digest = BloomDigest {
            words: vec![0; len_bytes / 4],
        };
        if data.len() <= WINDOW {
            if !data.is_empty() {
                digest.set(adler32(data));
            }
        } else {
            for w in data.windows(WINDOW) {
                digest.set(adler32(w));
            }
        }
        Ok(digest)
    }

    fn set(&mut self, hash: u32) {
        let bit = hash as usize % self.num_bits();
        self.words[bit / 32] |= 1 << (bit % 32);
    }

    pub fn num_bits(&self) -> usize {
        self.words.len() * 32
    }

    pub fn count_ones(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// `1 - |A & B| / max(|A|, |B|)`.
    ///
    /// Two empty digests are at distance 0; digests that share no bit are at
    /// distance 1. Digests of different sizes are compared as if the shorter
    /// were padded with zeros.
    pub fn distance(&self, other: &BloomDigest) -> f64 {
        let ones = self.count_ones().max(other.count_ones());
        if ones == 0 {
            return 0.;
        }
        let common: u32 = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| (a & b).count_ones())
            .sum();
        1. - common as f64 / ones as f64
    }
}

/// Bloom distance between `a` and `b` using digests of `len_bytes` bytes.
pub fn bloom(a: Seq, b: Seq, len_bytes: usize) -> Result<f64> {
    Ok(BloomDigest::new(a, len_bytes)?.distance(&BloomDigest::new(b, len_bytes)?))
}
