//! Transaction ids.
#![allow(clippy::unit_arg)]

use std::{fmt, str::FromStr};

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;
use serde::{Deserialize, Serialize};

use crate::serialization::SerializationError;

use super::{txid::TxIdBuilder, Transaction};

/// The id of a transaction: the double SHA-256 of its serialized bytes.
///
/// Stored in internal byte order, and shown reversed like other Bitcoin
/// `uint256` values. Daemons, pool software and block explorers all expect
/// the reversed form.
#[derive(Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Hash)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub struct Hash(pub [u8; 32]);

impl From<&Transaction> for Hash {
    fn from(transaction: &Transaction) -> Self {
        TxIdBuilder::new(transaction).txid()
    }
}

impl Hash {
    /// Returns the id bytes in the reversed order used for display.
    pub fn bytes_in_display_order(&self) -> [u8; 32] {
        let mut display = self.0;
        display.reverse();
        display
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.bytes_in_display_order()))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("transaction::Hash")
            .field(&self.to_string())
            .finish()
    }
}

impl FromStr for Hash {
    type Err = SerializationError;

    /// Parses a display-order hex id.
    fn from_str(hex_id: &str) -> Result<Self, Self::Err> {
        let mut internal = [0; 32];
        hex::decode_to_slice(hex_id, &mut internal)
            .map_err(|_| SerializationError::Parse("transaction id is not 32 hex bytes"))?;
        internal.reverse();

        Ok(Hash(internal))
    }
}
