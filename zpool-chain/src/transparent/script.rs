//! Transparent scripts, and the output script templates used by coinbases.

#![allow(clippy::unit_arg)]

use std::{fmt, io};

use serde::{Deserialize, Serialize};

use crate::serialization::{
    zcash_deserialize_bytes, zcash_serialize_bytes, SerializationError, ZcashDeserialize,
    ZcashSerialize,
};

use super::opcodes::OpCode;

/// A transparent lock or unlock script, without its length prefix.
#[derive(Clone, Eq, PartialEq, Serialize, Deserialize, Hash)]
#[cfg_attr(
    any(test, feature = "proptest-impl"),
    derive(proptest_derive::Arbitrary)
)]
pub struct Script(Vec<u8>);

impl Script {
    /// Wraps `raw_bytes`, which must not start with a length prefix.
    pub fn new(raw_bytes: &[u8]) -> Self {
        Script(raw_bytes.to_vec())
    }

    /// Returns the standard script that pays a public key hash.
    ///
    /// `OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY OP_CHECKSIG`
    pub fn pay_to_public_key_hash(pub_key_hash: &[u8; 20]) -> Self {
        let prefix = [
            OpCode::Dup as u8,
            OpCode::Hash160 as u8,
            OpCode::Push20Bytes as u8,
        ];
        let suffix = [OpCode::EqualVerify as u8, OpCode::CheckSig as u8];

        Script([&prefix[..], &pub_key_hash[..], &suffix[..]].concat())
    }

    /// Returns the standard script that pays a script hash.
    ///
    /// `OP_HASH160 <20 bytes> OP_EQUAL`
    ///
    /// Founders and treasury addresses are script hashes.
    pub fn pay_to_script_hash(script_hash: &[u8; 20]) -> Self {
        let prefix = [OpCode::Hash160 as u8, OpCode::Push20Bytes as u8];
        let suffix = [OpCode::Equal as u8];

        Script([&prefix[..], &script_hash[..], &suffix[..]].concat())
    }

    /// Returns the script bytes.
    ///
    /// Serialized transactions also need the compact size length prefix,
    /// which [`ZcashSerialize`] adds.
    pub fn as_raw_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Script").field(&hex::encode(&self.0)).finish()
    }
}

impl ZcashSerialize for Script {
    fn zcash_serialize<W: io::Write>(&self, writer: W) -> Result<(), io::Error> {
        zcash_serialize_bytes(&self.0, writer)
    }
}

impl ZcashDeserialize for Script {
    fn zcash_deserialize<R: io::Read>(reader: R) -> Result<Self, SerializationError> {
        Ok(Script(zcash_deserialize_bytes(reader)?))
    }
}
