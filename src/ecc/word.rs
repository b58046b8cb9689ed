//! Bit containers for uncoded data words and assembled code words.
//!
//! Both wrap a `BitVec<u8, Msb0>` so a word's bits can be handed to the
//! encoder as a `BitSlice` without copying.

use crate::error::{Error, Result};
use bitvec::prelude::*;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// An uncoded word, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataWord {
    bits: BitVec<u8, Msb0>,
}

impl DataWord {
    /// Number of data bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_bitslice(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }
}

impl FromStr for DataWord {
    type Err = Error;

    /// Parses a line of '0'/'1' characters. Anything else is rejected with the
    /// 1-based column of the first offending character.
    fn from_str(line: &str) -> Result<Self> {
        let mut bits = BitVec::with_capacity(line.len());
        for (idx, ch) in line.chars().enumerate() {
            match ch {
                '0' => bits.push(false),
                '1' => bits.push(true),
                found => {
                    return Err(Error::InvalidBit {
                        column: idx + 1,
                        found,
                    })
                }
            }
        }
        Ok(DataWord { bits })
    }
}

impl From<&[bool]> for DataWord {
    fn from(bits: &[bool]) -> Self {
        bits.iter().copied().collect()
    }
}

impl FromIterator<bool> for DataWord {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        DataWord {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Display for DataWord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_bits(f, &self.bits)
    }
}

/// A Hamming code word. Positions are 1-based; powers of two hold parity bits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeWord {
    bits: BitVec<u8, Msb0>,
}

impl CodeWord {
    pub(crate) fn from_bitvec(bits: BitVec<u8, Msb0>) -> Self {
        CodeWord { bits }
    }

    /// Total number of bits (data + parity)
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit at a 1-based position, or `None` when out of range
    pub fn bit(&self, position: usize) -> Option<bool> {
        position
            .checked_sub(1)
            .and_then(|idx| self.bits.get(idx))
            .map(|bit| *bit)
    }

    pub fn as_bitslice(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    pub fn into_bitvec(self) -> BitVec<u8, Msb0> {
        self.bits
    }
}

impl Display for CodeWord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_bits(f, &self.bits)
    }
}

fn write_bits(f: &mut Formatter<'_>, bits: &BitSlice<u8, Msb0>) -> fmt::Result {
    for bit in bits.iter().by_vals() {
        f.write_str(if bit { "1" } else { "0" })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_binary_line() {
        let word: DataWord = "1011".parse().unwrap();
        assert_eq!(word.len(), 4);
        assert_eq!(
            word.as_bitslice().iter().by_vals().collect::<Vec<_>>(),
            vec![true, false, true, true]
        );
        assert_eq!(word.to_string(), "1011");
    }

    #[test]
    fn test_parse_empty_line() {
        let word: DataWord = "".parse().unwrap();
        assert!(word.is_empty());
        assert_eq!(word.to_string(), "");
    }

    #[test]
    fn test_parse_rejects_non_binary() {
        match "10a1".parse::<DataWord>() {
            Err(Error::InvalidBit { column, found }) => {
                assert_eq!(column, 3);
                assert_eq!(found, 'a');
            }
            other => panic!("expected InvalidBit, got {:?}", other),
        }

        // Digits other than 0/1 are rejected too
        assert!(matches!(
            "2".parse::<DataWord>(),
            Err(Error::InvalidBit { column: 1, found: '2' })
        ));
        assert!(matches!(
            "01 ".parse::<DataWord>(),
            Err(Error::InvalidBit { column: 3, found: ' ' })
        ));
    }

    #[test]
    fn test_from_bools() {
        let word = DataWord::from(&[true, true, false][..]);
        assert_eq!(word.to_string(), "110");
    }

    #[test]
    fn test_code_word_positions() {
        let code = CodeWord::from_bitvec(bitvec![u8, Msb0; 0, 1, 1]);
        assert_eq!(code.bit(0), None);
        assert_eq!(code.bit(1), Some(false));
        assert_eq!(code.bit(3), Some(true));
        assert_eq!(code.bit(4), None);
        assert_eq!(code.to_string(), "011");
    }
}
