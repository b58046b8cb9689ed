//! Error correction code construction.
//!
//! This module provides the single-error-correcting Hamming code used by the
//! line driver:
//! - Parity-bit counting for an arbitrary data word length
//! - Code word assembly with parity bits at power-of-two positions
//! - Per-position parity evaluation and syndrome computation
//!
//! # Examples
//!
//! ```
//! use hamming_coder::ecc::{DataWord, HammingCode};
//!
//! let data: DataWord = "1011".parse().unwrap();
//! let code = HammingCode::for_data_bits(data.len()).encode(&data).unwrap();
//! assert_eq!(code.to_string(), "0110011");
//! ```

pub use crate::error::Result;

/// Hamming code construction
pub mod hamming;
/// Data and code word containers
pub mod word;

pub use hamming::{
    assemble, code_length, is_parity_position, parity_bit, parity_bit_count, syndrome,
    HammingCode,
};
pub use word::{CodeWord, DataWord};
