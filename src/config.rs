use crate::ecc::hamming::CodeParameters;
use crate::error::{Error, Result};
use crate::pipeline::Injection;
use crate::report::DEFAULT_REPORT_PATH;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::path::PathBuf;

/// Settings for a single run of the demo pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Requested number of parity bits, validated by [`RunConfig::validate`]
    pub parity_bits: i64,
    pub injection: Injection,
    /// Fixed seed for reproducible runs; entropy is used when absent
    pub seed: Option<u64>,
    pub output: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            parity_bits: 3,
            injection: Injection::Random,
            seed: None,
            output: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}

impl RunConfig {
    /// Derives the code dimensions and checks the injection fits inside them.
    pub fn validate(&self) -> Result<CodeParameters> {
        let params = CodeParameters::try_from(self.parity_bits)?;
        if let Injection::At(position) = self.injection {
            if position == 0 || position > params.length() {
                return Err(Error::PositionOutOfRange {
                    position,
                    length: params.length(),
                });
            }
        }
        Ok(params)
    }

    /// The random source for information bits and error positions.
    pub fn rng(&self) -> ChaCha20Rng {
        match self.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        }
    }
}
