//! The serialization and hashing boundary used by coinbase generation.
//!
//! Coinbase generation only needs a few chain operations. They are collected
//! in the [`TransactionCodec`] trait, so tests and other chains can supply
//! their own implementation.

use std::io;

use zpool_chain::{
    serialization::{sha256d, SerializationError, ZcashDeserialize, ZcashSerialize},
    transaction::{self, Transaction},
    transparent,
};

/// Address decoding, transaction serialization and transaction hashing.
pub trait TransactionCodec {
    /// Decodes a base58check transparent address.
    fn decode_address(&self, address: &str) -> Result<transparent::Address, SerializationError>;

    /// Serializes `transaction` into its consensus encoding.
    fn encode_transaction(&self, transaction: &Transaction) -> io::Result<Vec<u8>>;

    /// Parses a transaction from its consensus encoding.
    fn decode_transaction(&self, bytes: &[u8]) -> Result<Transaction, SerializationError>;

    /// Returns the transaction ID of the serialized transaction in `bytes`.
    fn hash_transaction(&self, bytes: &[u8]) -> transaction::Hash;
}

/// The Zcash consensus encoding, as implemented by `zpool-chain`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ZcashCodec;

impl TransactionCodec for ZcashCodec {
    fn decode_address(&self, address: &str) -> Result<transparent::Address, SerializationError> {
        address.parse()
    }

    fn encode_transaction(&self, transaction: &Transaction) -> io::Result<Vec<u8>> {
        transaction.zcash_serialize_to_vec()
    }

    fn decode_transaction(&self, bytes: &[u8]) -> Result<Transaction, SerializationError> {
        let mut reader = io::Cursor::new(bytes);
        let transaction = Transaction::zcash_deserialize(&mut reader)?;

        if reader.position() != bytes.len() as u64 {
            return Err(SerializationError::Parse(
                "unexpected trailing data after transaction",
            ));
        }

        Ok(transaction)
    }

    fn hash_transaction(&self, bytes: &[u8]) -> transaction::Hash {
        transaction::Hash(sha256d::hash(bytes))
    }
}
