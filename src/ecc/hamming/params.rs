use crate::error::{Error, Result};
use log::debug;

/// Largest supported parity bit count.
///
/// At `m = 24` the code is already 16 million bits long and the dense
/// parity-check matrix takes about 48 MiB.
pub const MAX_PARITY_BITS: usize = 24;

/// Dimensions of a Hamming code derived from its parity bit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeParameters {
    /// Number of parity bits (`m`), one per parity-check row
    parity_bits: usize,
    /// Codeword length (`n = 2^m - 1`)
    length: usize,
    /// Number of information bits (`k = n - m`)
    information_bits: usize,
}

impl CodeParameters {
    /// Derives `n` and `k` from the number of parity bits.
    ///
    /// # Arguments
    ///
    /// * `parity_bits` - Number of parity bits `m`, between 1 and [`MAX_PARITY_BITS`]
    ///
    /// # Returns
    ///
    /// The code dimensions, or `InvalidParameter` if `m` is out of range
    pub fn new(parity_bits: usize) -> Result<Self> {
        if parity_bits == 0 {
            return Err(Error::InvalidParameter(
                "number of parity bits must be positive".to_string(),
            ));
        }
        if parity_bits > MAX_PARITY_BITS {
            return Err(Error::InvalidParameter(format!(
                "number of parity bits must be at most {}, got {}",
                MAX_PARITY_BITS, parity_bits
            )));
        }

        let length = (1usize << parity_bits) - 1;
        // n - m >= 0 for every m >= 1, so this cannot underflow
        let information_bits = length - parity_bits;

        debug!(
            "derived Hamming({}, {}) code from m = {}",
            length, information_bits, parity_bits
        );

        Ok(CodeParameters {
            parity_bits,
            length,
            information_bits,
        })
    }

    /// Number of parity bits `m`
    pub fn parity_bits(&self) -> usize {
        self.parity_bits
    }

    /// Codeword length `n`
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of information bits `k`
    pub fn information_bits(&self) -> usize {
        self.information_bits
    }
}

impl TryFrom<i64> for CodeParameters {
    type Error = Error;

    fn try_from(parity_bits: i64) -> Result<Self> {
        if parity_bits <= 0 {
            return Err(Error::InvalidParameter(format!(
                "number of parity bits must be positive, got {}",
                parity_bits
            )));
        }
        let parity_bits = usize::try_from(parity_bits).map_err(|_| {
            Error::InvalidParameter(format!("number of parity bits {} is too large", parity_bits))
        })?;
        CodeParameters::new(parity_bits)
    }
}

/// Whether a 1-indexed codeword position holds a parity bit.
///
/// Parity bits sit at the powers of two; everything else carries information.
pub fn is_parity_position(position: usize) -> bool {
    position.is_power_of_two()
}
