//! Error correction code implementations.
//!
//! Currently implemented:
//! - Hamming codes built from a parity bit count `m`, with length `2^m - 1`
//!
//! # Examples
//!
//! ```rust
//! use hamming::{BlockCode, HammingCode};
//! use bitvec::prelude::*;
//!
//! let code = HammingCode::new(3).unwrap();
//! let mut word = code.encode(bits![u8, Lsb0; 1, 0, 1, 1]).unwrap();
//! word.flip(4).unwrap();
//!
//! let syndrome = code.syndrome(&word).unwrap();
//! assert_eq!(syndrome.value(), 5);
//! ```

use self::hamming::{CodeParameters, Codeword, ErrorPosition, Syndrome};
use crate::error::Result;
use bitvec::prelude::*;

/// Trait for linear block codes that correct a single flipped bit
pub trait BlockCode {
    /// Codeword length, information length and parity bit count of the code
    fn parameters(&self) -> CodeParameters;

    /// Encode an information vector into a codeword
    fn encode(&self, information: &BitSlice<u8, Lsb0>) -> Result<Codeword>;

    /// Evaluate every parity check against a (possibly corrupted) codeword
    fn syndrome(&self, word: &Codeword) -> Result<Syndrome>;

    /// Flip the bit the syndrome points at, if any
    fn correct(
        &self,
        word: &mut Codeword,
        syndrome: &Syndrome,
    ) -> Result<ErrorPosition>;
}

/// Hamming single-error-correcting codes
pub mod hamming;
