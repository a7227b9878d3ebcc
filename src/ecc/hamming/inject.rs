//! Random payloads and single-bit corruption for exercising a code.

use super::bits::{BitVector, Codeword};
use crate::error::Result;
use log::debug;
use rand::Rng;

/// Draws `k` independent, uniformly distributed information bits.
pub fn random_information<R: Rng + ?Sized>(k: usize, rng: &mut R) -> BitVector {
    (0..k).map(|_| rng.gen::<bool>()).collect()
}

/// Returns a copy of `word` with the bit at 0-indexed `index` flipped.
pub fn inject_error(word: &Codeword, index: usize) -> Result<Codeword> {
    let mut corrupted = word.clone();
    corrupted.flip(index)?;
    debug!("injected error at position {}", index + 1);
    Ok(corrupted)
}

/// Flips one bit chosen uniformly over the whole codeword.
///
/// Returns the corrupted copy together with the 0-indexed position flipped,
/// or `None` for an empty word.
pub fn inject_random_error<R: Rng + ?Sized>(
    word: &Codeword,
    rng: &mut R,
) -> Option<(Codeword, usize)> {
    if word.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..word.len());
    inject_error(word, index).ok().map(|corrupted| (corrupted, index))
}
