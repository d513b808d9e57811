//! Errors that can occur when configuring reward schedules or generating
//! coinbase transactions.
//!
//! No partial results are returned: every failure aborts generation.

use std::{fmt, io};

use thiserror::Error;

use zpool_chain::{amount, block, serialization::SerializationError};

/// A reward stream that diverts part of the block subsidy.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RewardStream {
    /// The founders reward, paid to a rotating address until a maximum height.
    Founders,

    /// The treasury reward, paid to a rotating address from a start height.
    Treasury,
}

impl fmt::Display for RewardStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RewardStream::Founders => "founders",
            RewardStream::Treasury => "treasury",
        })
    }
}

/// Reward configuration errors.
///
/// Most of these are found when the schedule is created at startup.
/// Recipient percentages are checked on each call, because they are supplied
/// with the block template parameters.
#[derive(Error, Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("{stream} reward percent {percent} must be a finite number between 0 and 100")]
    InvalidPercent { stream: RewardStream, percent: f64 },

    #[error("{stream} reward address change interval must be greater than zero")]
    ZeroChangeInterval { stream: RewardStream },

    #[error("{stream} reward address list is empty")]
    EmptyAddressList { stream: RewardStream },

    #[error(
        "{stream} reward address index {index} at height {height} is out of range \
         for {len} configured addresses"
    )]
    AddressIndexOutOfRange {
        stream: RewardStream,
        height: block::Height,
        index: usize,
        len: usize,
    },

    #[error("recipient {address} percent {percent} must be a finite, non-negative number")]
    InvalidRecipientPercent { address: String, percent: f64 },

    #[error("reward and fee percents add up to {total}%, which is more than 100%")]
    PercentOverflow { total: f64 },

    #[error("coinbase tag is {len} bytes, but the limit is {limit} bytes")]
    TagTooLong { len: usize, limit: usize },

    #[error("only one of coinbase_tag and coinbase_tag_hex can be set")]
    ConflictingTags,

    #[error("coinbase_tag_hex {tag:?} is not valid hex: {source}")]
    InvalidTagHex {
        tag: String,
        #[source]
        source: hex::FromHexError,
    },
}

/// Coinbase generation errors.
#[derive(Error, Debug)]
pub enum CoinbaseError {
    /// The reward schedule or recipients are misconfigured.
    #[error("invalid reward configuration: {0}")]
    Config(#[from] ConfigError),

    /// A pool, recipient, founders or treasury address could not be decoded.
    #[error("could not decode address {address:?}: {source}")]
    Address {
        /// The address string that failed to decode.
        address: String,
        /// The decoding error.
        #[source]
        source: SerializationError,
    },

    /// The daemon-provided coinbase transaction could not be decoded.
    #[error("could not decode daemon coinbase transaction: {0}")]
    DaemonCoinbase(#[source] SerializationError),

    /// An output amount was outside the valid zatoshi range.
    #[error("coinbase output amount is invalid: {0}")]
    Amount(#[from] amount::Error),

    /// The transaction could not be encoded.
    #[error("could not encode coinbase transaction: {0}")]
    Io(#[from] io::Error),
}
