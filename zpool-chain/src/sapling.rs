//! Sapling shielded data carried by v4 transactions.
//!
//! Pools never create shielded data, but a daemon coinbase can pay the miner
//! through Sapling outputs. These types keep each description as opaque
//! bytes, so such a coinbase re-encodes exactly as it was received.

use std::{fmt, io};

use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;

use crate::{
    amount::{Amount, NegativeAllowed},
    serialization::{SerializationError, ZcashDeserialize, ZcashSerialize},
};

#[cfg(any(test, feature = "proptest-impl"))]
mod arbitrary;

/// The encoded size of a v4 Sapling spend description.
///
/// `cv`, `anchor`, `nullifier` and `rk` (32 bytes each), the Groth16 proof
/// (192 bytes) and the spend authorization signature (64 bytes).
pub const SPEND_DESCRIPTION_LEN: usize = 4 * 32 + 192 + 64;

/// The encoded size of a Sapling output description.
///
/// `cv`, `cmu` and `ephemeralKey` (32 bytes each), the note ciphertexts
/// (580 and 80 bytes) and the Groth16 proof (192 bytes).
pub const OUTPUT_DESCRIPTION_LEN: usize = 3 * 32 + 580 + 80 + 192;

/// The encoded size of a Sapling binding signature.
pub const BINDING_SIG_LEN: usize = 64;

macro_rules! opaque_description {
    ($(#[$doc:meta])* $name:ident, $len:expr) => {
        $(#[$doc])*
        #[derive(Clone, Eq, PartialEq, Serialize, Deserialize)]
        pub struct $name(#[serde(with = "BigArray")] pub [u8; $len]);

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&hex::encode(self.0))
                    .finish()
            }
        }

        impl ZcashSerialize for $name {
            fn zcash_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
                writer.write_all(&self.0)
            }
        }

        impl ZcashDeserialize for $name {
            fn zcash_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
                let mut bytes = [0; $len];
                reader.read_exact(&mut bytes)?;
                Ok(Self(bytes))
            }
        }
    };
}

opaque_description!(
    /// An encoded Sapling spend description.
    Spend,
    SPEND_DESCRIPTION_LEN
);

opaque_description!(
    /// An encoded Sapling output description.
    Output,
    OUTPUT_DESCRIPTION_LEN
);

/// The Sapling part of a v4 transaction.
///
/// Only present when the transaction has at least one spend or output, which
/// is also when the encoding has a binding signature. A v4 transaction
/// without Sapling data has `None` instead.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShieldedData {
    /// The net value moved out of the Sapling pool, `valueBalanceSapling`.
    ///
    /// Negative when a coinbase pays into Sapling outputs.
    pub value_balance: Amount<NegativeAllowed>,

    /// The spend descriptions, in transaction order.
    pub spends: Vec<Spend>,

    /// The output descriptions, in transaction order.
    pub outputs: Vec<Output>,

    /// The binding signature, `bindingSigSapling`.
    #[serde(with = "BigArray")]
    pub binding_sig: [u8; BINDING_SIG_LEN],
}

impl ShieldedData {
    /// Returns `true` if there are no spends and no outputs.
    ///
    /// An empty bundle has no valid encoding, so it is never parsed.
    pub fn is_empty(&self) -> bool {
        self.spends.is_empty() && self.outputs.is_empty()
    }
}
