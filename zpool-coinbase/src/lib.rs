//! Coinbase transaction generation for Zcash-family mining pools.
//!
//! Given a block template from the daemon, [`generate_coinbase`] builds the
//! coinbase transaction that pays the block reward: the pool's share plus all
//! the transaction fees, the founders or treasury share required by the
//! chain, and the pool fee recipients' shares.
//!
//! The founders and treasury schedules are read from a [`Config`] and
//! validated once by [`RewardSchedule::new`]. Address decoding, transaction
//! encoding and hashing go through a [`TransactionCodec`], which is
//! [`ZcashCodec`] in production.
#![deny(missing_docs)]
#![allow(clippy::try_err)]
#![forbid(unsafe_code)]

mod allocation;
mod codec;
mod config;
mod error;
mod fees;
mod generate;
mod schedule;

#[cfg(test)]
mod tests;

pub use allocation::Recipient;
pub use codec::{TransactionCodec, ZcashCodec};
pub use config::{Config, FoundersConfig, TreasuryConfig};
pub use error::{CoinbaseError, ConfigError, RewardStream};
pub use fees::{sum_fees, FeeEntry};
pub use generate::{generate_coinbase, BlockTemplateParams, GeneratedCoinbase};
pub use schedule::{RewardBranch, RewardSchedule, DEFAULT_COINBASE_TAG, MAX_COINBASE_TAG_LEN};

pub use zpool_chain::transparent::encode_height_push;

use zpool_chain::transparent::{Script, ADDRESS_HASH_LEN};

/// Returns the pay-to-public-key-hash script that pays the pool and its fee
/// recipients.
pub fn build_pub_key_hash_script(pub_key_hash: &[u8; ADDRESS_HASH_LEN]) -> Script {
    Script::pay_to_public_key_hash(pub_key_hash)
}

/// Returns the pay-to-script-hash script that pays the founders or treasury.
pub fn build_founders_script(script_hash: &[u8; ADDRESS_HASH_LEN]) -> Script {
    Script::pay_to_script_hash(script_hash)
}
