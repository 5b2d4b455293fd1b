//! # Bitweight
//!
//! Hamming weight (population count) strategies for 32-bit words.
//!
//! This crate implements four equivalent ways of counting the set bits in a
//! `u32` and keeps them all selectable at runtime, so they can be checked
//! against each other and benchmarked against the hardware popcount.
//!
//! ## Quick Start
//!
//! ```
//! use bitweight::{popcount_kernighan, Strategy};
//!
//! // 0b1011 has three set bits
//! assert_eq!(popcount_kernighan(11), 3);
//!
//! // Every strategy computes the same function
//! for strategy in Strategy::ALL {
//!     assert_eq!(strategy.count(0xF0F0_F0F0), 16);
//! }
//! ```
//!
//! ## Strategies
//!
//! - `scan`: test all 32 bit positions, one per iteration
//! - `kernighan`: clear the lowest set bit until none remain
//! - `table`: four lookups in a 256-entry byte table
//! - `native`: `u32::count_ones()`, a single instruction on most targets
//!
//! ## Features
//!
//! - `std` (default) - required by the `cli` verification harness
//! - `serde` - serialization support for [`Strategy`]
//! - `cli` - build the `bitweight` binary (check/count commands)

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod popcount;
mod table;

pub use popcount::{
    popcount_kernighan, popcount_native, popcount_scan, popcount_table, Strategy,
};
