//! # Gene Encoding
//!
//! A gene is the binary offset of an aircraft's landing time from its earliest
//! allowed time, written most-significant-bit first. Freshly encoded genes have
//! no leading zeros, so their length depends on the value (`0` encodes as the
//! single bit `0`). Crossover can later splice genes of different lengths and
//! introduce leading zeros; decoding simply reads the bits as written.
//!
//! Bit positions are counted from the most significant end: position `0` is
//! the first bit of the string form.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::problem::Aircraft;

/// Maximum number of bits a gene can carry.
pub const MAX_GENE_BITS: u32 = u64::BITS;

fn low_mask(len: u32) -> u64 {
    if len >= MAX_GENE_BITS {
        u64::MAX
    } else {
        (1u64 << len) - 1
    }
}

/// An explicit bit vector with its own length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawGene"))]
pub struct Gene {
    bits: u64,
    len: u32,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawGene {
    bits: u64,
    len: u32,
}

#[cfg(feature = "serde")]
impl From<RawGene> for Gene {
    fn from(raw: RawGene) -> Self {
        Gene::from_bits(raw.bits, raw.len)
    }
}

impl Gene {
    /// Builds the canonical gene for `value`: no leading zeros, `0` is one bit.
    pub fn from_value(value: u64) -> Self {
        let len = (MAX_GENE_BITS - value.leading_zeros()).max(1);
        Self { bits: value, len }
    }

    /// Builds a gene from raw bits; bits above `len` are discarded.
    pub fn from_bits(bits: u64, len: u32) -> Self {
        let len = len.min(MAX_GENE_BITS);
        Self {
            bits: bits & low_mask(len),
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The unsigned value of the bit string.
    pub fn value(&self) -> u64 {
        self.bits
    }

    /// Reads the bit at `position` (0 = most significant).
    pub fn bit(&self, position: usize) -> bool {
        debug_assert!(position < self.len());
        (self.bits >> (self.len as usize - 1 - position)) & 1 == 1
    }

    /// Forces the bit at `position` to `1`. Never lowers the value.
    pub fn set_bit(&mut self, position: usize) {
        debug_assert!(position < self.len());
        self.bits |= 1u64 << (self.len as usize - 1 - position);
    }

    /// `self[..point] + other[point..]`, with string slice semantics: a prefix
    /// or suffix that runs past the end of its gene is simply shorter.
    pub fn splice(&self, other: &Gene, point: usize) -> Gene {
        let point = point.min(MAX_GENE_BITS as usize) as u32;

        let prefix_len = point.min(self.len);
        let prefix = self
            .bits
            .checked_shr(self.len - prefix_len)
            .unwrap_or(0);

        let suffix_len = other.len.saturating_sub(point);
        let suffix = other.bits & low_mask(suffix_len);

        let bits = prefix.checked_shl(suffix_len).unwrap_or(0) | suffix;
        Gene::from_bits(bits, prefix_len + suffix_len)
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len == 0 {
            return Ok(());
        }
        write!(f, "{:0width$b}", self.bits, width = self.len as usize)
    }
}

/// Encodes `time` for `aircraft`. `time` must not precede the earliest time.
pub fn encode(aircraft: &Aircraft, time: i64) -> Gene {
    debug_assert!(time >= aircraft.earliest_time);
    Gene::from_value((time - aircraft.earliest_time) as u64)
}

/// Decodes `gene` back to an absolute time. No upper clamp is applied.
pub fn decode(aircraft: &Aircraft, gene: &Gene) -> i64 {
    aircraft.earliest_time + gene.value() as i64
}
