use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid hex digit {character:?} at index {index}")]
    MalformedHex { index: usize, character: char },

    #[error("hex input has odd length {len}")]
    OddLength { len: usize },

    #[error("decoded {actual} bytes but expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("position {position} is out of range for a number printed with {len} characters")]
    IndexOutOfRange { position: usize, len: usize },

    #[error("character {character:?} at position {position} is not a digit")]
    NotADigit { position: usize, character: char },

    #[error("invalid MAC address: {0}")]
    InvalidMac(String),
}
