//! Transaction id computation.

use super::{Hash, Transaction};
use crate::serialization::{sha256d, ZcashSerialize};

/// Hashes a transaction into its id.
///
/// Every supported version uses the legacy id: the double SHA-256 of the
/// whole serialized transaction.
pub(super) struct TxIdBuilder<'a> {
    transaction: &'a Transaction,
}

impl<'a> TxIdBuilder<'a> {
    pub fn new(transaction: &'a Transaction) -> Self {
        TxIdBuilder { transaction }
    }

    pub(super) fn txid(self) -> Hash {
        let mut writer = sha256d::Writer::default();

        // The hash writer never returns errors.
        self.transaction
            .zcash_serialize(&mut writer)
            .expect("writing to a hash can't fail");

        Hash(writer.finish())
    }
}
