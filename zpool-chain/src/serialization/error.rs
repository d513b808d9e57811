use std::{io, num::TryFromIntError};

use thiserror::Error;

/// Errors from reading consensus-encoded data or address strings.
#[derive(Error, Debug)]
pub enum SerializationError {
    /// The reader failed, or ran out of data.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The data was read, but it is not valid.
    #[error("parse error: {0}")]
    Parse(&'static str),

    /// A length does not fit in a `usize` on this platform.
    #[error("compactsize too large: {0}")]
    TryFromIntError(#[from] TryFromIntError),

    /// An amount is outside its valid range.
    #[error("invalid zatoshi amount: {source}")]
    Amount {
        /// The range error.
        #[from]
        source: crate::amount::Error,
    },

    /// A string is not valid base58check.
    #[error("invalid base58check encoding: {0}")]
    Base58(#[from] bs58::decode::Error),
}
