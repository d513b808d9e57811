//! Transparent transactions, up to version 4.

use serde::{Deserialize, Serialize};

mod builder;
mod hash;
mod lock_time;
mod serialize;
mod txid;

#[cfg(any(test, feature = "proptest-impl"))]
mod arbitrary;

pub use hash::Hash;
pub use lock_time::LockTime;

use crate::{block, sapling, transparent};

/// A Zcash transaction, up to version 4.
///
/// Each transaction format is a separate enum variant. Coinbase transactions
/// built by a pool only use transparent inputs and outputs. Daemon coinbases
/// can also pay Sapling outputs, which v4 transactions keep as opaque
/// [`sapling::ShieldedData`]. Sprout JoinSplits and versions 5 and later are
/// rejected during parsing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transaction {
    /// A fully transparent transaction (`version = 1`).
    V1 {
        /// The transparent inputs to the transaction.
        inputs: Vec<transparent::Input>,
        /// The transparent outputs from the transaction.
        outputs: Vec<transparent::Output>,
        /// The earliest time or block height that this transaction can be added to the
        /// chain.
        lock_time: LockTime,
    },
    /// A Sprout transaction (`version = 2`), with no JoinSplits.
    V2 {
        /// The transparent inputs to the transaction.
        inputs: Vec<transparent::Input>,
        /// The transparent outputs from the transaction.
        outputs: Vec<transparent::Output>,
        /// The earliest time or block height that this transaction can be added to the
        /// chain.
        lock_time: LockTime,
    },
    /// An Overwinter transaction (`version = 3`), with no JoinSplits.
    V3 {
        /// The transparent inputs to the transaction.
        inputs: Vec<transparent::Input>,
        /// The transparent outputs from the transaction.
        outputs: Vec<transparent::Output>,
        /// The earliest time or block height that this transaction can be added to the
        /// chain.
        lock_time: LockTime,
        /// The latest block height that this transaction can be added to the chain.
        expiry_height: block::Height,
    },
    /// A Sapling transaction (`version = 4`), with no JoinSplits.
    V4 {
        /// The transparent inputs to the transaction.
        inputs: Vec<transparent::Input>,
        /// The transparent outputs from the transaction.
        outputs: Vec<transparent::Output>,
        /// The earliest time or block height that this transaction can be added to the
        /// chain.
        lock_time: LockTime,
        /// The latest block height that this transaction can be added to the chain.
        expiry_height: block::Height,
        /// The Sapling spends and outputs, if there are any.
        sapling_shielded_data: Option<sapling::ShieldedData>,
    },
}

impl Transaction {
    // identifiers and hashes

    /// Compute the hash (mined transaction ID) of this transaction.
    pub fn hash(&self) -> Hash {
        Hash::from(self)
    }

    // header

    /// Returns the transaction version number.
    pub fn version(&self) -> u32 {
        match self {
            Transaction::V1 { .. } => 1,
            Transaction::V2 { .. } => 2,
            Transaction::V3 { .. } => 3,
            Transaction::V4 { .. } => 4,
        }
    }

    /// Returns `true` if the transaction has the `fOverwintered` flag set.
    pub fn is_overwintered(&self) -> bool {
        matches!(self, Transaction::V3 { .. } | Transaction::V4 { .. })
    }

    /// Get this transaction's lock time.
    pub fn lock_time(&self) -> LockTime {
        match self {
            Transaction::V1 { lock_time, .. }
            | Transaction::V2 { lock_time, .. }
            | Transaction::V3 { lock_time, .. }
            | Transaction::V4 { lock_time, .. } => *lock_time,
        }
    }

    /// Get this transaction's expiry height, if any.
    pub fn expiry_height(&self) -> Option<block::Height> {
        match self {
            Transaction::V1 { .. } | Transaction::V2 { .. } => None,
            Transaction::V3 { expiry_height, .. } | Transaction::V4 { expiry_height, .. } => {
                Some(*expiry_height)
            }
        }
    }

    // transparent

    /// Access the transparent inputs of this transaction, regardless of version.
    pub fn inputs(&self) -> &[transparent::Input] {
        match self {
            Transaction::V1 { inputs, .. }
            | Transaction::V2 { inputs, .. }
            | Transaction::V3 { inputs, .. }
            | Transaction::V4 { inputs, .. } => inputs,
        }
    }

    /// Access the transparent outputs of this transaction, regardless of version.
    pub fn outputs(&self) -> &[transparent::Output] {
        match self {
            Transaction::V1 { outputs, .. }
            | Transaction::V2 { outputs, .. }
            | Transaction::V3 { outputs, .. }
            | Transaction::V4 { outputs, .. } => outputs,
        }
    }

    // shielded

    /// Returns the Sapling data of a v4 transaction, if it has any.
    pub fn sapling_shielded_data(&self) -> Option<&sapling::ShieldedData> {
        match self {
            Transaction::V4 {
                sapling_shielded_data,
                ..
            } => sapling_shielded_data.as_ref(),
            Transaction::V1 { .. } | Transaction::V2 { .. } | Transaction::V3 { .. } => None,
        }
    }

    /// Returns `true` if this transaction has exactly one input, and it is a
    /// coinbase input.
    pub fn is_coinbase(&self) -> bool {
        matches!(self.inputs(), [transparent::Input::Coinbase { .. }])
    }

    /// Returns the height encoded in this transaction's coinbase input, if any.
    pub fn coinbase_height(&self) -> Option<block::Height> {
        match self.inputs() {
            [input @ transparent::Input::Coinbase { .. }] => input.coinbase_height(),
            _ => None,
        }
    }
}
