//! Hamming error correction code implementation.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in 1950.
//! A code with `m` parity bits protects `k = 2^m - 1 - m` information bits in a codeword of
//! `n = 2^m - 1` bits and corrects any single flipped bit. The most common variant is the
//! (7,4) code with three parity bits.
//!
//! This implementation provides:
//! - Construction of the `m x n` parity-check matrix from `m` alone
//! - Encoding of an information vector with parity bits at the power-of-two positions
//! - Syndrome decoding with single-bit error correction
//!
//! Two or more flipped bits are outside what the code can handle: they either
//! produce a zero syndrome or point at the wrong position.

use crate::ecc::BlockCode;
use crate::error::{Error, Result};
use bitvec::prelude::*;
use log::{debug, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

mod bits;
pub mod inject;
mod matrix;
mod params;

pub use bits::{BitVector, Codeword, DisplayBits, ErrorPosition, Syndrome};
pub use inject::{inject_error, inject_random_error, random_information};
pub use matrix::ParityCheckMatrix;
pub use params::{is_parity_position, CodeParameters, MAX_PARITY_BITS};

/// A Hamming code together with its parity-check matrix.
#[derive(Debug, Clone)]
pub struct HammingCode {
    params: CodeParameters,
    matrix: ParityCheckMatrix,
}

/// Outcome of decoding a single codeword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Syndrome of the received word
    pub syndrome: Syndrome,
    /// Where the error was found, if anywhere
    pub error: ErrorPosition,
    /// Received word after correction
    pub codeword: Codeword,
    /// Payload read from the corrected word
    pub information: BitVector,
}

impl HammingCode {
    /// Creates the Hamming code with `parity_bits` parity bits.
    ///
    /// # Returns
    ///
    /// A new `HammingCode`, or `InvalidParameter` if `parity_bits` is zero or too large
    pub fn new(parity_bits: usize) -> Result<Self> {
        Ok(Self::from_parameters(CodeParameters::new(parity_bits)?))
    }

    pub fn from_parameters(params: CodeParameters) -> Self {
        HammingCode {
            params,
            matrix: ParityCheckMatrix::new(params),
        }
    }

    /// Creates the standard (7,4) Hamming code
    pub fn standard_7_4() -> Self {
        Self::from_parameters(
            CodeParameters::new(3).expect("three parity bits is always a valid code"),
        )
    }

    pub fn matrix(&self) -> &ParityCheckMatrix {
        &self.matrix
    }

    /// Places the payload and solves for the parity bits.
    ///
    /// Information bits fill the non-power-of-two positions in order. Row `i`
    /// covers exactly one parity position, `2^i`, so its parity bit is the XOR
    /// of the information bits the row covers.
    fn encode_bits(&self, information: &BitSlice<u8, Lsb0>) -> Result<Codeword> {
        let k = self.params.information_bits();
        if information.len() != k {
            return Err(Error::SizeMismatch {
                what: "information vector",
                expected: k,
                actual: information.len(),
            });
        }

        let n = self.params.length();
        let mut word = bitvec![u8, Lsb0; 0; n];
        let mut payload = information.iter().by_vals();
        for index in 0..n {
            if !is_parity_position(index + 1) {
                if let Some(bit) = payload.next() {
                    word.set(index, bit);
                }
            }
        }

        for (i, row) in self.matrix.rows().iter().enumerate() {
            let parity = covered_parity(row, &word);
            word.set((1 << i) - 1, parity);
        }

        debug!("encoded {} information bits into {} bits", k, n);
        Ok(Codeword::from_bits(word))
    }

    fn check_length(&self, word: &Codeword) -> Result<()> {
        if word.len() != self.params.length() {
            return Err(Error::SizeMismatch {
                what: "codeword",
                expected: self.params.length(),
                actual: word.len(),
            });
        }
        Ok(())
    }

    /// Computes the syndrome, corrects a copy of `word` and extracts the payload.
    pub fn decode(&self, word: &Codeword) -> Result<Decoded> {
        let syndrome = self.syndrome(word)?;
        let mut codeword = word.clone();
        let error = self.correct(&mut codeword, &syndrome)?;
        let information = codeword.information_bits();

        Ok(Decoded {
            syndrome,
            error,
            codeword,
            information,
        })
    }
}

impl BlockCode for HammingCode {
    fn parameters(&self) -> CodeParameters {
        self.params
    }

    fn encode(&self, information: &BitSlice<u8, Lsb0>) -> Result<Codeword> {
        self.encode_bits(information)
    }

    fn syndrome(&self, word: &Codeword) -> Result<Syndrome> {
        self.check_length(word)?;
        let bits = word.as_bits();

        #[cfg(feature = "parallel")]
        let checks: Vec<bool> = self
            .matrix
            .rows()
            .par_iter()
            .map(|row| covered_parity(row, bits))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let checks: Vec<bool> = self
            .matrix
            .rows()
            .iter()
            .map(|row| covered_parity(row, bits))
            .collect();

        let syndrome = Syndrome::from_bits(checks.into_iter().collect());
        debug!("syndrome {}", syndrome);
        Ok(syndrome)
    }

    fn correct(&self, word: &mut Codeword, syndrome: &Syndrome) -> Result<ErrorPosition> {
        self.check_length(word)?;
        if syndrome.len() != self.params.parity_bits() {
            return Err(Error::SizeMismatch {
                what: "syndrome",
                expected: self.params.parity_bits(),
                actual: syndrome.len(),
            });
        }

        let position = syndrome.error_position();
        match position.index() {
            Some(index) => {
                word.flip(index)?;
                debug!("corrected bit at position {}", index + 1);
            }
            None => debug!("no error detected"),
        }
        Ok(position)
    }
}

/// XOR of the bits of `word` at the columns `row` covers.
fn covered_parity(row: &BitSlice<u8, Lsb0>, word: &BitSlice<u8, Lsb0>) -> bool {
    row.iter_ones().filter(|&j| word[j]).count() % 2 == 1
}

/// Compares a (possibly corrected) codeword with the original bit for bit.
pub fn verify(corrected: &Codeword, original: &Codeword) -> bool {
    let matches = corrected == original;
    if !matches {
        warn!("corrected codeword {} differs from original {}", corrected, original);
    }
    matches
}

/// Creates a Hamming code with `parity_bits` parity bits
pub fn create_hamming(parity_bits: usize) -> Result<HammingCode> {
    HammingCode::new(parity_bits)
}
