//! Network kinds and their transparent address prefixes.

use serde::{Deserialize, Serialize};

/// The kind of Zcash network an address belongs to.
///
/// Only the Zcash base58check prefixes are known here. Forks with other
/// prefixes still decode, see [`crate::transparent::Address`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "proptest-impl"),
    derive(proptest_derive::Arbitrary)
)]
pub enum NetworkKind {
    /// The production network.
    Mainnet,

    /// The test network.
    Testnet,
}

impl NetworkKind {
    /// Returns the base58check version prefix for P2PKH addresses on this network.
    pub fn b58_pubkey_address_prefix(self) -> [u8; 2] {
        match self {
            NetworkKind::Mainnet => [0x1c, 0xb8],
            NetworkKind::Testnet => [0x1d, 0x25],
        }
    }

    /// Returns the base58check version prefix for P2SH addresses on this network.
    pub fn b58_script_address_prefix(self) -> [u8; 2] {
        match self {
            NetworkKind::Mainnet => [0x1c, 0xbd],
            NetworkKind::Testnet => [0x1c, 0xba],
        }
    }
}

#[cfg(test)]
mod tests {
    use zcash_protocol::constants::{mainnet, testnet};

    use super::*;

    #[test]
    fn prefixes_match_zcash_protocol_constants() {
        let _init_guard = zpool_test::init();

        assert_eq!(
            NetworkKind::Mainnet.b58_pubkey_address_prefix(),
            mainnet::B58_PUBKEY_ADDRESS_PREFIX
        );
        assert_eq!(
            NetworkKind::Mainnet.b58_script_address_prefix(),
            mainnet::B58_SCRIPT_ADDRESS_PREFIX
        );
        assert_eq!(
            NetworkKind::Testnet.b58_pubkey_address_prefix(),
            testnet::B58_PUBKEY_ADDRESS_PREFIX
        );
        assert_eq!(
            NetworkKind::Testnet.b58_script_address_prefix(),
            testnet::B58_SCRIPT_ADDRESS_PREFIX
        );
    }
}
