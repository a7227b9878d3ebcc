use super::params::is_parity_position;
use crate::error::{Error, Result};
use bitvec::prelude::*;
use std::fmt;

/// Owned bit vector used for information vectors, codewords, matrix rows and syndromes
pub type BitVector = BitVec<u8, Lsb0>;

/// Renders a bit slice as `[1 0 1 1]`.
pub struct DisplayBits<'a>(pub &'a BitSlice<u8, Lsb0>);

impl fmt::Display for DisplayBits<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, bit) in self.0.iter().by_vals().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(if bit { "1" } else { "0" })?;
        }
        f.write_str("]")
    }
}

/// An `n`-bit Hamming codeword.
///
/// Bits are stored 0-indexed; the codeword position `p` used throughout the
/// code's definition lives at index `p - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codeword {
    bits: BitVector,
}

impl Codeword {
    pub fn from_bits(bits: BitVector) -> Self {
        Codeword { bits }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_bits(&self) -> &BitSlice<u8, Lsb0> {
        &self.bits
    }

    pub fn into_bits(self) -> BitVector {
        self.bits
    }

    /// Bit at a 1-indexed codeword position
    pub fn bit(&self, position: usize) -> Option<bool> {
        position
            .checked_sub(1)
            .and_then(|index| self.bits.get(index).map(|bit| *bit))
    }

    /// Flips the bit at a 0-indexed position in place
    pub fn flip(&mut self, index: usize) -> Result<()> {
        let length = self.bits.len();
        let current = self
            .bits
            .get(index)
            .map(|bit| *bit)
            .ok_or(Error::PositionOutOfRange {
                position: index,
                length,
            })?;
        self.bits.set(index, !current);
        Ok(())
    }

    /// Extracts the payload from the non-power-of-two positions, in order
    pub fn information_bits(&self) -> BitVector {
        self.bits
            .iter()
            .by_vals()
            .enumerate()
            .filter(|(index, _)| !is_parity_position(index + 1))
            .map(|(_, bit)| bit)
            .collect()
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&DisplayBits(&self.bits), f)
    }
}

/// Result of re-evaluating every parity check, one bit per matrix row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syndrome {
    bits: BitVector,
}

impl Syndrome {
    pub fn from_bits(bits: BitVector) -> Self {
        Syndrome { bits }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_bits(&self) -> &BitSlice<u8, Lsb0> {
        &self.bits
    }

    /// True when every parity check holds
    pub fn is_zero(&self) -> bool {
        self.bits.not_any()
    }

    /// The syndrome read as a binary number, row 0 as the least significant bit
    pub fn value(&self) -> usize {
        self.bits
            .iter_ones()
            .fold(0usize, |value, row| value | (1 << row))
    }

    /// Position of the single flipped bit this syndrome points at
    pub fn error_position(&self) -> ErrorPosition {
        match self.value() {
            0 => ErrorPosition::None,
            position => ErrorPosition::At(position),
        }
    }
}

impl fmt::Display for Syndrome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&DisplayBits(&self.bits), f)
    }
}

/// Where the decoder located an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorPosition {
    /// All parity checks hold
    None,
    /// 1-indexed codeword position of the flipped bit
    At(usize),
}

impl ErrorPosition {
    /// 0-indexed bit index, if an error was located
    pub fn index(&self) -> Option<usize> {
        match *self {
            ErrorPosition::None => None,
            ErrorPosition::At(position) => Some(position - 1),
        }
    }
}
