//! Hamming code encoding for files of binary words.
//!
//! The [`ecc`] module builds single-error-correcting Hamming code words and the [`driver`] module
//! applies it to line-oriented word files.

pub mod driver;
pub mod ecc;
pub mod error;

pub use driver::{encode_file, encode_lines, EncodeSummary};
pub use ecc::{CodeWord, DataWord, HammingCode};
pub use error::{Error, Result};
