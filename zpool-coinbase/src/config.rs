//! Reward schedule configuration.
//!
//! This is the `[coinbase]` section of the pool's configuration file. It is
//! validated once, by [`RewardSchedule::new`](crate::RewardSchedule::new),
//! when the pool starts.

use serde::{Deserialize, Serialize};

/// Coinbase configuration section.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// The founders reward schedule.
    pub founders: FoundersConfig,

    /// The treasury reward schedule.
    ///
    /// Only used when founders rewards are enabled.
    pub treasury: TreasuryConfig,

    /// Text appended to the height push in the coinbase script, as UTF-8.
    ///
    /// If neither this nor `coinbase_tag_hex` is set, the default pool tag is
    /// used.
    pub coinbase_tag: Option<String>,

    /// Raw coinbase script data, as hex.
    ///
    /// Can't be used together with `coinbase_tag`.
    pub coinbase_tag_hex: Option<String>,
}

/// Founders reward configuration.
///
/// The founders address changes every `address_change_interval` blocks,
/// starting from the first address at height 0.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct FoundersConfig {
    /// Are founders (and treasury) rewards paid by this chain?
    pub enabled: bool,

    /// The percentage of the block reward paid to the founders.
    pub percent: f64,

    /// The last height where founders rewards are paid.
    pub max_block_height: u32,

    /// The number of blocks that use each founders address.
    pub address_change_interval: u32,

    /// Founders P2SH addresses, in rotation order.
    pub addresses: Vec<String>,
}

/// Treasury reward configuration.
///
/// The treasury address changes every `address_change_interval` blocks,
/// starting from the first address at `start_block_height`, and cycles back to
/// the first address after the last one.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct TreasuryConfig {
    /// The first height where treasury rewards are paid.
    ///
    /// Treasury rewards are disabled if this is unset or zero.
    pub start_block_height: Option<u32>,

    /// The percentage of the block reward paid to the treasury.
    pub percent: f64,

    /// The number of blocks that use each treasury address.
    pub address_change_interval: u32,

    /// Treasury P2SH addresses, in rotation order.
    pub addresses: Vec<String>,
}

impl TreasuryConfig {
    /// Returns the treasury start height, if treasury rewards are enabled.
    pub fn start_height(&self) -> Option<u32> {
        self.start_block_height.filter(|&start| start > 0)
    }
}
