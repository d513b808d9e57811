//! Transparent Address types.

use std::{fmt, io};

use serde::{Deserialize, Serialize};

use crate::{
    parameters::NetworkKind,
    serialization::{SerializationError, ZcashSerialize},
};

/// The length of the hash carried by a transparent address.
pub const ADDRESS_HASH_LEN: usize = 20;

/// The version prefix of a base58check transparent address.
///
/// Zcash uses two version bytes, which fixes the first two characters of its
/// addresses ("t1", "t3", "tm", "t2"). Several Zcash-family chains kept
/// Bitcoin's single version byte instead, so both are accepted.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum VersionPrefix {
    /// A Bitcoin-style one byte prefix.
    OneByte(u8),

    /// A Zcash-style two byte prefix.
    TwoBytes([u8; 2]),
}

impl VersionPrefix {
    fn as_bytes(&self) -> &[u8] {
        match self {
            VersionPrefix::OneByte(byte) => std::slice::from_ref(byte),
            VersionPrefix::TwoBytes(bytes) => bytes,
        }
    }
}

/// A base58check transparent address: a version prefix followed by a 20-byte
/// public key hash or script hash.
///
/// The pool only needs the hash, because it builds output scripts itself.
/// The prefix is kept so that addresses display exactly as they were parsed.
///
/// <https://zips.z.cash/protocol/protocol.pdf#transparentaddrencoding>
#[derive(Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    prefix: VersionPrefix,
    hash_bytes: [u8; ADDRESS_HASH_LEN],
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TransparentAddress")
            .field("prefix", &hex::encode(self.prefix.as_bytes()))
            .field("hash", &hex::encode(self.hash_bytes))
            .finish()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut bytes = io::Cursor::new(Vec::new());
        let _ = self.zcash_serialize(&mut bytes);

        f.write_str(&bs58::encode(bytes.get_ref()).with_check().into_string())
    }
}

impl std::str::FromStr for Address {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let data = bs58::decode(s).with_check(None).into_vec()?;

        // The checksum has already been stripped by `with_check`.
        let (prefix, hash) = match data.len() {
            21 => (VersionPrefix::OneByte(data[0]), &data[1..]),
            22 => (VersionPrefix::TwoBytes([data[0], data[1]]), &data[2..]),
            _ => return Err(SerializationError::Parse("unexpected t-addr payload length")),
        };

        let mut hash_bytes = [0; ADDRESS_HASH_LEN];
        hash_bytes.copy_from_slice(hash);

        Ok(Address { prefix, hash_bytes })
    }
}

impl TryFrom<String> for Address {
    type Error = SerializationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}

impl ZcashSerialize for Address {
    fn zcash_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_all(self.prefix.as_bytes())?;
        writer.write_all(&self.hash_bytes)
    }
}

impl Address {
    /// Create an address from a version prefix and a hash.
    pub fn from_parts(prefix: VersionPrefix, hash_bytes: [u8; ADDRESS_HASH_LEN]) -> Self {
        Self { prefix, hash_bytes }
    }

    /// Create a Zcash P2PKH address for the given public key hash and network.
    pub fn from_pub_key_hash(network_kind: NetworkKind, pub_key_hash: [u8; 20]) -> Self {
        Self::from_parts(
            VersionPrefix::TwoBytes(network_kind.b58_pubkey_address_prefix()),
            pub_key_hash,
        )
    }

    /// Create a Zcash P2SH address for the given script hash and network.
    pub fn from_script_hash(network_kind: NetworkKind, script_hash: [u8; 20]) -> Self {
        Self::from_parts(
            VersionPrefix::TwoBytes(network_kind.b58_script_address_prefix()),
            script_hash,
        )
    }

    /// Returns the version prefix of this address.
    pub fn prefix(&self) -> VersionPrefix {
        self.prefix
    }

    /// Returns the Zcash network of this address, if it has a known Zcash prefix.
    pub fn network_kind(&self) -> Option<NetworkKind> {
        [NetworkKind::Mainnet, NetworkKind::Testnet]
            .into_iter()
            .find(|network| {
                let prefix = VersionPrefix::TwoBytes(network.b58_pubkey_address_prefix());
                let script_prefix = VersionPrefix::TwoBytes(network.b58_script_address_prefix());
                self.prefix == prefix || self.prefix == script_prefix
            })
    }

    /// Returns `true` if this address has a known Zcash P2SH prefix.
    pub fn is_script_hash(&self) -> bool {
        self.network_kind().is_some_and(|network| {
            self.prefix == VersionPrefix::TwoBytes(network.b58_script_address_prefix())
        })
    }

    /// Returns the hash bytes for this address, regardless of the address type.
    pub fn hash_bytes(&self) -> [u8; ADDRESS_HASH_LEN] {
        self.hash_bytes
    }
}
