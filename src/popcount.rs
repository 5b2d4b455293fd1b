//! Popcount strategies for 32-bit words.
//!
//! This module provides four equivalent implementations that can be
//! selected at runtime for differential testing and benchmarking:
//!
//! - [`popcount_scan`]: tests all 32 bit positions, one per iteration
//! - [`popcount_kernighan`]: clears the lowest set bit until zero
//! - [`popcount_table`]: four byte lookups in a 256-entry table
//! - [`popcount_native`]: `u32::count_ones()`, the hardware popcount
//!   where the target has one
//!
//! All four are total over the `u32` domain and return a value in `0..=32`.
//! [`popcount_native`] is the oracle the others are tested against.

use crate::table::BYTE_WEIGHTS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Count set bits by scanning every bit position.
///
/// Runs exactly 32 iterations regardless of input: each iteration tests the
/// least-significant bit of a working copy and shifts it out.
#[inline]
pub fn popcount_scan(n: u32) -> u32 {
    let mut val = n;
    let mut total = 0u32;
    for _ in 0..u32::BITS {
        total += val & 1;
        val >>= 1;
    }
    total
}

/// Count set bits with Kernighan's bit-clearing loop.
///
/// `val & (val - 1)` clears the lowest set bit, so the loop runs once per
/// set bit: sparse inputs finish early, `u32::MAX` takes the full 32 rounds.
#[inline]
pub fn popcount_kernighan(n: u32) -> u32 {
    let mut val = n;
    let mut total = 0u32;
    while val != 0 {
        val &= val - 1; // Clear lowest set bit
        total += 1;
    }
    total
}

/// Count set bits via the byte lookup table.
///
/// Splits the word into its four bytes, low byte first, and sums the
/// precomputed per-byte weights. Four shifts and four loads, independent of
/// the bit pattern.
#[inline]
pub fn popcount_table(n: u32) -> u32 {
    let mut val = n;
    let mut total = 0u32;
    for _ in 0..u32::BITS / 8 {
        total += BYTE_WEIGHTS[(val & 0xFF) as usize] as u32;
        val >>= 8;
    }
    total
}

/// Count set bits with the platform intrinsic.
///
/// `count_ones` compiles to a single POPCNT (x86_64) or CNT (aarch64)
/// instruction when the target supports it, and to LLVM's bitwise fallback
/// otherwise.
#[inline(always)]
pub fn popcount_native(n: u32) -> u32 {
    n.count_ones()
}

/// Runtime-selectable popcount strategy.
///
/// All variants compute the same function; the enum exists so harnesses can
/// iterate over implementations in one binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Bit-at-a-time scan, fixed 32 iterations.
    Scan,
    /// Kernighan's bit-clearing loop, one iteration per set bit.
    Kernighan,
    /// Byte-table lookup, four loads.
    Table,
    /// `u32::count_ones()` intrinsic.
    Native,
}

impl Strategy {
    /// All strategies, in documentation order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Scan,
        Strategy::Kernighan,
        Strategy::Table,
        Strategy::Native,
    ];

    /// Stable name for display and reports.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Scan => "scan",
            Strategy::Kernighan => "kernighan",
            Strategy::Table => "table",
            Strategy::Native => "native",
        }
    }

    /// Count set bits in a single word with this strategy.
    #[inline]
    pub fn count(self, n: u32) -> u32 {
        match self {
            Strategy::Scan => popcount_scan(n),
            Strategy::Kernighan => popcount_kernighan(n),
            Strategy::Table => popcount_table(n),
            Strategy::Native => popcount_native(n),
        }
    }

    /// Count set bits across a slice of words.
    ///
    /// The total is accumulated in `u64`: a `u32` total would overflow once
    /// the slice exceeds 2^27 fully-set words.
    #[inline]
    pub fn count_all(self, words: &[u32]) -> u64 {
        let mut total = 0u64;
        for &word in words {
            total += self.count(word) as u64;
        }
        total
    }
}
