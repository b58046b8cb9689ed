//! Hamming error correction code construction.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in 1950.
//! A word of `n` data bits is extended with `r` parity bits, where `r` is the smallest value
//! satisfying `2^r >= n + r + 1`. The most common variant is the (7,4) code, which encodes 4 data
//! bits into 7 bits by adding 3 parity bits.
//!
//! Code word positions are 1-based. Every power-of-two position holds a parity bit; the remaining
//! positions hold the data bits in their original order. The parity bit at position `2^k` covers
//! every position whose binary index has bit `k` set, and is chosen so that the number of ones in
//! its covering set is even. A single flipped bit therefore fails exactly the parity checks whose
//! positions sum to its own index (the syndrome).
//!
//! This implementation provides:
//! - Parity-bit counting for any data length
//! - Code word assembly for words of arbitrary length
//! - Single parity-bit evaluation and syndrome computation
//!
//! # Applications
//!
//! - Computer memory (ECC RAM)
//! - Satellite communications
//! - Data storage systems

use crate::ecc::{CodeWord, DataWord};
use crate::error::{Error, Result};
use bitvec::prelude::*;
use std::cmp::min;

/// Parameters of a Hamming code for one data word length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HammingCode {
    /// Number of data bits per word
    data_bits: usize,
    /// Number of parity bits per word
    parity_bits: usize,
}

impl HammingCode {
    /// Creates the Hamming code for words of `data_bits` bits.
    ///
    /// A zero-length word has no parity bits and an empty code word.
    pub fn for_data_bits(data_bits: usize) -> Self {
        HammingCode {
            data_bits,
            parity_bits: parity_bit_count(data_bits),
        }
    }

    /// Creates a standard (7,4) Hamming code
    pub fn standard_7_4() -> Self {
        Self::for_data_bits(4)
    }

    /// Gets the number of data bits per word
    pub fn data_bits(&self) -> usize {
        self.data_bits
    }

    /// Gets the number of parity bits per word
    pub fn parity_bits(&self) -> usize {
        self.parity_bits
    }

    /// Gets the total code word length (data bits + parity bits)
    pub fn code_length(&self) -> usize {
        self.data_bits + self.parity_bits
    }

    /// Encodes one data word.
    ///
    /// # Arguments
    ///
    /// * `data` - Data word whose length must equal `data_bits`
    ///
    /// # Returns
    ///
    /// The code word, or an error if the word has the wrong length
    pub fn encode(&self, data: &DataWord) -> Result<CodeWord> {
        if data.len() != self.data_bits {
            return Err(Error::InvalidInput(format!(
                "Data word has {} bits, code expects {}",
                data.len(),
                self.data_bits
            )));
        }

        assemble(data, self.code_length())
    }
}

/// Returns the number of parity bits needed for `data_len` data bits.
///
/// This is the smallest `r` with `2^r >= data_len + r + 1`, and 0 for an empty word.
pub fn parity_bit_count(data_len: usize) -> usize {
    if data_len == 0 {
        return 0;
    }

    // ceil(log2(n + 1)) satisfies 2^r >= n + 1; the bound needs at most one more bit
    let r = (data_len + 1).next_power_of_two().trailing_zeros() as usize;
    if (1usize << r) < data_len + r + 1 {
        r + 1
    } else {
        r
    }
}

/// Total code word length for `data_len` data bits.
pub fn code_length(data_len: usize) -> usize {
    data_len + parity_bit_count(data_len)
}

/// Whether a 1-based code word position holds a parity bit.
pub fn is_parity_position(position: usize) -> bool {
    position.is_power_of_two()
}

/// Assembles a code word from a data word.
///
/// Data bits fill the non-power-of-two positions in order, then each parity bit is computed in
/// increasing position order. A parity bit's covering set never contains another parity
/// position, so the placeholders are never read.
///
/// # Arguments
///
/// * `data` - Data bits in input order
/// * `code_length` - Total length of the code word, `data.len()` plus its parity bit count
///
/// # Returns
///
/// The code word, or an error if `code_length` does not fit the data word
pub fn assemble(data: &DataWord, code_length: usize) -> Result<CodeWord> {
    let expected = self::code_length(data.len());
    if code_length != expected {
        return Err(Error::InvalidInput(format!(
            "Code length {} does not fit a {}-bit data word, expected {}",
            code_length,
            data.len(),
            expected
        )));
    }

    let mut code = bitvec![u8, Msb0; 0; code_length];

    let mut data_bits = data.as_bitslice().iter().by_vals();
    for position in 1..=code_length {
        if is_parity_position(position) {
            continue;
        }
        if let Some(bit) = data_bits.next() {
            code.set(position - 1, bit);
        }
    }

    let mut position = 1;
    while position <= code_length {
        let parity = parity_bit(&code, position)?;
        code.set(position - 1, parity);
        position <<= 1;
    }

    Ok(CodeWord::from_bitvec(code))
}

/// Computes the value of the parity bit at `position`.
///
/// The result is the XOR of every bit whose 1-based position shares the parity position's set
/// bit, excluding the parity position itself.
///
/// # Arguments
///
/// * `code` - Code word bits, indexed from position 1
/// * `position` - A power of two no greater than `code.len()`
///
/// # Returns
///
/// The parity value, or an error if `position` is not a parity position of this word
pub fn parity_bit(code: &BitSlice<u8, Msb0>, position: usize) -> Result<bool> {
    if !is_parity_position(position) || position > code.len() {
        return Err(Error::InvalidInput(format!(
            "Position {} is not a parity position in a {}-bit code word",
            position,
            code.len()
        )));
    }

    // Covered positions come in runs of `position` bits, one run every `2 * position`
    let mut ones = 0;
    for run_start in (position..=code.len()).step_by(2 * position) {
        let run_end = min(run_start + position - 1, code.len());
        ones += code[run_start - 1..run_end].count_ones();
    }
    if code[position - 1] {
        ones -= 1;
    }

    Ok(ones % 2 == 1)
}

/// Computes the syndrome of a code word.
///
/// Returns 0 when every parity check passes. After a single bit flip the syndrome is the 1-based
/// position of the flipped bit.
pub fn syndrome(code: &BitSlice<u8, Msb0>) -> usize {
    code.iter_ones().fold(0, |acc, idx| acc ^ (idx + 1))
}
