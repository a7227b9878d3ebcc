pub mod config;
pub mod ecc;
pub mod error;
pub mod pipeline;
pub mod report;

pub use ecc::hamming::{
    BitVector, CodeParameters, Codeword, DisplayBits, ErrorPosition, HammingCode,
    ParityCheckMatrix, Syndrome,
};
pub use ecc::BlockCode;
pub use error::{Error, Result};
