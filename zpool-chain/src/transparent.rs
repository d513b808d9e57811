//! Transparent inputs, outputs and scripts.
//!
//! Coinbase transactions only use the transparent part of a Zcash
//! transaction, which has the same layout as a Bitcoin transaction.
#![allow(clippy::unit_arg)]

mod address;
mod opcodes;
mod script;
mod serialize;

pub use address::{Address, VersionPrefix, ADDRESS_HASH_LEN};
pub use script::Script;
pub use serialize::{
    encode_height_push, parse_height_push, MAX_COINBASE_DATA_LEN, MAX_COINBASE_HEIGHT_PUSH_LEN,
};

use std::fmt;

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;
use serde::{Deserialize, Serialize};

#[cfg(any(test, feature = "proptest-impl"))]
mod arbitrary;

use crate::{
    amount::{Amount, NonNegative},
    block, transaction,
};

/// The signature script of a coinbase input.
///
/// Starts with the block height push, followed by arbitrary data inserted by
/// the miner or pool. The whole script is kept, so re-encoding a parsed
/// coinbase reproduces its original bytes.
#[derive(Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CoinbaseData(
    /// At most [`MAX_COINBASE_DATA_LEN`] bytes: only built by
    /// [`Input::new_coinbase`], or by parsing a length-checked script.
    pub(super) Vec<u8>,
);

impl AsRef<[u8]> for CoinbaseData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for CoinbaseData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Coinbase tags are usually ASCII, so show them as text.
        let text: String = self
            .0
            .iter()
            .flat_map(|&byte| std::ascii::escape_default(byte))
            .map(char::from)
            .collect();

        f.debug_tuple("CoinbaseData").field(&text).finish()
    }
}

/// The transaction and output index of a spent output.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Hash)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub struct OutPoint {
    /// The id of the transaction that created the output.
    pub hash: transaction::Hash,

    /// The position of the output in that transaction's output list.
    pub index: u32,
}

/// A transparent transaction input.
///
/// Generated coinbase transactions have a single `Coinbase` input. `PrevOut`
/// inputs are only parsed, so that daemon transactions with spends are
/// decoded rather than rejected.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Input {
    /// Spends an output of an earlier transaction.
    PrevOut {
        /// The spent output.
        outpoint: OutPoint,
        /// The signature script.
        unlock_script: Script,
        /// The input sequence number.
        sequence: u32,
    },
    /// Claims the block reward and transaction fees.
    Coinbase {
        /// The full coinbase signature script.
        data: CoinbaseData,
        /// The input sequence number.
        sequence: u32,
    },
}

impl Input {
    /// Returns a new coinbase input for `height`, whose signature script is
    /// the height push followed by `tag`.
    ///
    /// The sequence number is `u32::MAX`, so the input is final.
    ///
    /// # Panics
    ///
    /// If the height push and `tag` together are longer than
    /// [`MAX_COINBASE_DATA_LEN`] bytes.
    pub fn new_coinbase(height: block::Height, tag: &[u8]) -> Input {
        let mut data = encode_height_push(height);
        data.extend_from_slice(tag);

        // Consensus limits coinbase scripts to 100 bytes.
        assert!(
            data.len() <= MAX_COINBASE_DATA_LEN,
            "coinbase script is {} bytes ({} byte tag), limit is {MAX_COINBASE_DATA_LEN}",
            data.len(),
            tag.len(),
        );

        Input::Coinbase {
            data: CoinbaseData(data),
            sequence: u32::MAX,
        }
    }

    /// Returns the height encoded at the start of a coinbase input's script.
    ///
    /// Returns `None` for `PrevOut` inputs, and for coinbase scripts that
    /// don't start with a valid height push.
    pub fn coinbase_height(&self) -> Option<block::Height> {
        match self {
            Input::Coinbase { data, .. } => parse_height_push(data.as_ref()).map(|(h, _)| h),
            Input::PrevOut { .. } => None,
        }
    }

    /// Returns the full signature script of a coinbase input, or `None` for
    /// `PrevOut` inputs.
    pub fn coinbase_script(&self) -> Option<&[u8]> {
        match self {
            Input::Coinbase { data, .. } => Some(data.as_ref()),
            Input::PrevOut { .. } => None,
        }
    }

    /// Returns the output spent by a `PrevOut` input.
    pub fn outpoint(&self) -> Option<OutPoint> {
        match self {
            Input::PrevOut { outpoint, .. } => Some(*outpoint),
            Input::Coinbase { .. } => None,
        }
    }

    /// Returns the input's sequence number.
    pub fn sequence(&self) -> u32 {
        match self {
            Input::PrevOut { sequence, .. } | Input::Coinbase { sequence, .. } => *sequence,
        }
    }
}

/// A transparent transaction output.
///
/// Each coinbase output pays one share of the block reward to a lock script.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Hash)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub struct Output {
    /// The number of zatoshis paid.
    pub value: Amount<NonNegative>,

    /// The script that must be satisfied to spend this output.
    pub lock_script: Script,
}

impl Output {
    /// Returns a new coinbase output paying `amount` to `lock_script`.
    pub fn new_coinbase(amount: Amount<NonNegative>, lock_script: Script) -> Output {
        Output {
            value: amount,
            lock_script,
        }
    }

    /// Returns the number of zatoshis paid by this output.
    pub fn value(&self) -> Amount<NonNegative> {
        self.value
    }
}
