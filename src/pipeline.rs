//! One encode, corrupt, decode and correct pass over a single codeword.

use crate::ecc::hamming::{
    inject_error, inject_random_error, random_information, verify, BitVector, CodeParameters,
    Codeword, ErrorPosition, HammingCode, ParityCheckMatrix, Syndrome,
};
use crate::ecc::BlockCode;
use crate::error::{Error, Result};
use log::debug;
use rand::Rng;

/// Which bit, if any, to corrupt between encoding and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Injection {
    /// Flip one bit chosen uniformly over the codeword
    #[default]
    Random,
    /// Flip the bit at this 1-indexed position
    At(usize),
    /// Leave the codeword intact
    Skip,
}

/// Everything a run produced, in pipeline order.
#[derive(Debug, Clone)]
pub struct RunRecord {
    pub parameters: CodeParameters,
    pub matrix: ParityCheckMatrix,
    pub information: BitVector,
    pub encoded: Codeword,
    /// 1-indexed position that was flipped, if any
    pub injected_at: Option<usize>,
    pub corrupted: Codeword,
    pub syndrome: Syndrome,
    pub error: ErrorPosition,
    /// The corrupted word after correction
    pub corrected: Codeword,
    pub decoded_information: BitVector,
    /// Whether `corrected` equals `encoded`
    pub matches_original: bool,
}

/// Runs the pipeline on a given information vector.
pub fn run<R: Rng + ?Sized>(
    code: &HammingCode,
    information: BitVector,
    injection: Injection,
    rng: &mut R,
) -> Result<RunRecord> {
    let encoded = code.encode(&information)?;

    let (corrupted, injected_at) = match injection {
        Injection::Random => match inject_random_error(&encoded, rng) {
            Some((corrupted, index)) => (corrupted, Some(index + 1)),
            None => (encoded.clone(), None),
        },
        Injection::At(position) => {
            let index = position.checked_sub(1).ok_or(Error::PositionOutOfRange {
                position: 0,
                length: encoded.len(),
            })?;
            (inject_error(&encoded, index)?, Some(position))
        }
        Injection::Skip => (encoded.clone(), None),
    };

    let syndrome = code.syndrome(&corrupted)?;
    let mut corrected = corrupted.clone();
    let error = code.correct(&mut corrected, &syndrome)?;
    let matches_original = verify(&corrected, &encoded);
    let decoded_information = corrected.information_bits();

    debug!(
        "run finished: injected {:?}, located {:?}, matches {}",
        injected_at, error, matches_original
    );

    Ok(RunRecord {
        parameters: code.parameters(),
        matrix: code.matrix().clone(),
        information,
        encoded,
        injected_at,
        corrupted,
        syndrome,
        error,
        corrected,
        decoded_information,
        matches_original,
    })
}

/// Draws a random information vector and runs the pipeline on it.
pub fn run_random<R: Rng + ?Sized>(
    code: &HammingCode,
    injection: Injection,
    rng: &mut R,
) -> Result<RunRecord> {
    let information = random_information(code.parameters().information_bits(), rng);
    run(code, information, injection, rng)
}
