use thiserror::Error;

/// Errors raised while building, applying or reporting on a Hamming code.
#[derive(Debug, Error)]
pub enum Error {
    /// The parity bit count does not describe a usable code.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A vector's length disagrees with the dimensions of the code.
    #[error("size mismatch: {what} has length {actual}, expected {expected}")]
    SizeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A 0-indexed bit position past the end of a codeword.
    #[error("position {position} is out of range for a codeword of length {length}")]
    PositionOutOfRange { position: usize, length: usize },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
