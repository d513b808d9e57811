//! Founders and treasury reward schedules.
//!
//! A [`RewardSchedule`] is a validated [`Config`]. It selects the reward
//! branch for each block height, and the rotating address that branch pays.

use zpool_chain::{
    block::Height,
    transparent::{MAX_COINBASE_DATA_LEN, MAX_COINBASE_HEIGHT_PUSH_LEN},
};

use crate::{
    config::{Config, FoundersConfig, TreasuryConfig},
    error::{ConfigError, RewardStream},
};


/// The longest coinbase tag that fits in a coinbase script after any height push.
pub const MAX_COINBASE_TAG_LEN: usize = MAX_COINBASE_DATA_LEN - MAX_COINBASE_HEIGHT_PUSH_LEN;

/// The coinbase tag used when none is configured.
///
/// Block explorers and pool trackers use it to attribute blocks, so it is
/// kept identical to the tag used by existing Z-NOMP pools.
pub const DEFAULT_COINBASE_TAG: &[u8] = b"Z-NOMP! https://github.com/DeckerSU/z-nomp";

/// The reward branch selected for a block height.
///
/// Exactly one branch applies to each coinbase transaction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RewardBranch<'a> {
    /// Pay `percent` of the block reward to the founders `address`.
    Founders {
        /// The founders address for this height.
        address: &'a str,
        /// The founders share of the block reward.
        percent: f64,
    },

    /// Pay `percent` of the block reward to the treasury `address`.
    Treasury {
        /// The treasury address for this height.
        address: &'a str,
        /// The treasury share of the block reward.
        percent: f64,
    },

    /// Only the pool and its fee recipients are paid.
    NoReward,
}

impl<'a> RewardBranch<'a> {
    /// Returns the reward stream paid by this branch, if any.
    pub fn stream(&self) -> Option<RewardStream> {
        match self {
            RewardBranch::Founders { .. } => Some(RewardStream::Founders),
            RewardBranch::Treasury { .. } => Some(RewardStream::Treasury),
            RewardBranch::NoReward => None,
        }
    }

    /// Returns the percentage of the block reward diverted by this branch.
    pub fn percent(&self) -> f64 {
        match self {
            RewardBranch::Founders { percent, .. } | RewardBranch::Treasury { percent, .. } => {
                *percent
            }
            RewardBranch::NoReward => 0.0,
        }
    }

    /// Returns the address paid by this branch, if any.
    pub fn address(&self) -> Option<&'a str> {
        match self {
            RewardBranch::Founders { address, .. } | RewardBranch::Treasury { address, .. } => {
                Some(*address)
            }
            RewardBranch::NoReward => None,
        }
    }
}

/// A validated founders and treasury reward schedule.
///
/// Created once at startup, then shared by every coinbase generation call.
#[derive(Clone, Debug, PartialEq)]
pub struct RewardSchedule {
    founders: FoundersConfig,
    treasury: TreasuryConfig,
    coinbase_tag: Vec<u8>,
}

impl RewardSchedule {
    /// Validates `config`, and returns a reward schedule that uses it.
    ///
    /// Checks the percentages, address change intervals and address lists of
    /// every stream that can be paid, and checks that the founders address
    /// list covers every height that pays the founders.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let Config {
            founders,
            treasury,
            coinbase_tag,
            coinbase_tag_hex,
        } = config;

        if founders.enabled {
            check_stream(
                RewardStream::Founders,
                founders.percent,
                founders.address_change_interval,
                founders.addresses.len(),
            )?;

            // Heights below the treasury start always take the founders branch,
            // even after `max_block_height`.
            let last_founders_height = match treasury.start_height() {
                Some(start) => start - 1,
                None => founders.max_block_height,
            };
            founders_index(&founders, Height(last_founders_height))?;

            if treasury.start_height().is_some() {
                check_stream(
                    RewardStream::Treasury,
                    treasury.percent,
                    treasury.address_change_interval,
                    treasury.addresses.len(),
                )?;
            }
        } else if let Some(start) = treasury.start_height() {
            tracing::warn!(
                treasury_start = start,
                "treasury rewards are configured, but founders rewards are disabled: \
                 treasury rewards will not be paid"
            );
        }

        let coinbase_tag = match (coinbase_tag, coinbase_tag_hex) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingTags),
            (Some(text), None) => text.into_bytes(),
            (None, Some(tag)) => {
                hex::decode(&tag).map_err(|source| ConfigError::InvalidTagHex { tag, source })?
            }
            (None, None) => DEFAULT_COINBASE_TAG.to_vec(),
        };
        if coinbase_tag.len() > MAX_COINBASE_TAG_LEN {
            return Err(ConfigError::TagTooLong {
                len: coinbase_tag.len(),
                limit: MAX_COINBASE_TAG_LEN,
            });
        }

        Ok(Self {
            founders,
            treasury,
            coinbase_tag,
        })
    }

    /// Returns the reward branch for `height`.
    ///
    /// Founders rewards are paid up to the founders maximum height, or until
    /// the treasury starts. Treasury rewards are paid from the treasury start
    /// height onwards.
    pub fn branch(&self, height: Height) -> Result<RewardBranch<'_>, ConfigError> {
        let treasury_start = self.treasury.start_height();

        if !self.founders.enabled
            || (height.0 > self.founders.max_block_height && treasury_start.is_none())
        {
            return Ok(RewardBranch::NoReward);
        }

        match treasury_start {
            Some(start) if height.0 >= start => {
                let index = treasury_index(&self.treasury, start, height)?;

                Ok(RewardBranch::Treasury {
                    address: &self.treasury.addresses[index],
                    percent: self.treasury.percent,
                })
            }
            _ => {
                let index = founders_index(&self.founders, height)?;

                Ok(RewardBranch::Founders {
                    address: &self.founders.addresses[index],
                    percent: self.founders.percent,
                })
            }
        }
    }

    /// Returns the bytes that follow the height push in coinbase scripts.
    pub fn coinbase_tag(&self) -> &[u8] {
        &self.coinbase_tag
    }
}

/// Checks the settings of a reward stream that can be paid.
fn check_stream(
    stream: RewardStream,
    percent: f64,
    address_change_interval: u32,
    address_count: usize,
) -> Result<(), ConfigError> {
    if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
        return Err(ConfigError::InvalidPercent { stream, percent });
    }
    if address_change_interval == 0 {
        return Err(ConfigError::ZeroChangeInterval { stream });
    }
    if address_count == 0 {
        return Err(ConfigError::EmptyAddressList { stream });
    }

    Ok(())
}

/// Returns the founders address index for `height`.
///
/// The founders addresses do not wrap around, so later heights can run off
/// the end of the list.
fn founders_index(founders: &FoundersConfig, height: Height) -> Result<usize, ConfigError> {
    let stream = RewardStream::Founders;
    if founders.address_change_interval == 0 {
        return Err(ConfigError::ZeroChangeInterval { stream });
    }

    let index = (height.0 / founders.address_change_interval) as usize;
    if index >= founders.addresses.len() {
        return Err(ConfigError::AddressIndexOutOfRange {
            stream,
            height,
            index,
            len: founders.addresses.len(),
        });
    }

    Ok(index)
}

/// Returns the treasury address index for `height`, which must be at or above
/// the treasury `start` height.
fn treasury_index(
    treasury: &TreasuryConfig,
    start: u32,
    height: Height,
) -> Result<usize, ConfigError> {
    let stream = RewardStream::Treasury;
    if treasury.address_change_interval == 0 {
        return Err(ConfigError::ZeroChangeInterval { stream });
    }
    if treasury.addresses.is_empty() {
        return Err(ConfigError::EmptyAddressList { stream });
    }

    let offset = height.0 - start;
    let index = (offset / treasury.address_change_interval) as usize % treasury.addresses.len();

    Ok(index)
}
