//! Errors returned while building a [ChainHash](super::ChainHash) from bytes or from its
//! display string. Hashing and packing never fail, so this is all there is.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The byte slice isn't exactly [HASH_SIZE](super::chain_hash::HASH_SIZE) long
    #[error("invalid hash length of {actual}, want {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The display string has more than
    /// [MAX_HASH_STRING_SIZE](super::chain_hash::MAX_HASH_STRING_SIZE) characters
    #[error("max hash string length is {max} bytes, got {actual}")]
    StringTooLong { max: usize, actual: usize },

    #[error("invalid hex in hash string: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
