//! Coinbase generation tests.

use std::{cell::Cell, collections::HashMap, io};

use zpool_chain::{
    serialization::{SerializationError, ZcashDeserializeInto, ZcashSerialize},
    transaction::{self, Transaction},
    transparent,
};

use crate::{Config, FoundersConfig, RewardSchedule, TransactionCodec, TreasuryConfig};

mod vectors;

/// Pool P2PKH address, hash `11` * 20.
const POOL: &str = "t1KRqwQhktLV4BjbNLiuH6pb3AMoszZKcQB";

/// Fee recipient P2PKH addresses, hashes `22` * 20 and `77` * 20.
const RECIPIENTS: [&str; 2] = [
    "t1Lz5sUzNoMBWmq8qk1zS4q5A54RgF5e4Ua",
    "t1UmHXrRUNQfoiJrCkVSCtsVkcZWf7TYZGk",
];

/// Founders P2SH addresses, hashes `f0` * 20 to `f4` * 20.
const FOUNDERS: [&str; 5] = [
    "t3gXbjobjRdbgh6at5ry8nGFR7MxWYqWD8T",
    "t3gcuckSUUkTq5aCrHU6G8ckN73snyJZmDa",
    "t3giDVhHDXsKyU3ppV5DPUyFK6jo5FJ5EX2",
    "t3goXNe7xazC7rXSnggLWqKkG6RiMbBY6mY",
    "t3gtqFaxhe74GF14ktHTeBgFD67ddykKkBL",
];

/// Treasury P2SH addresses, hashes `a0` * 20 to `a2` * 20.
const TREASURY: [&str; 3] = [
    "t3ZCwUANM8AS7gzyN5R8zhzKZYJTwYUHviX",
    "t3ZJFM7D6BHJG5UbLH2G84LpWXzPDpV8g6J",
    "t3ZPZE43qEQAQTxDJUdPFQhKTXgJWEsGU9v",
];

/// The height where the test treasury starts.
const TREASURY_START: u32 = 500_000;

/// Returns a schedule paying 20% to five rotating founders addresses up to
/// height 499,999, followed by 5% to three rotating treasury addresses.
fn test_schedule(with_treasury: bool) -> RewardSchedule {
    let config = Config {
        founders: FoundersConfig {
            enabled: true,
            percent: 20.0,
            max_block_height: TREASURY_START - 1,
            address_change_interval: 100_000,
            addresses: FOUNDERS.iter().map(ToString::to_string).collect(),
        },
        treasury: TreasuryConfig {
            start_block_height: with_treasury.then_some(TREASURY_START),
            percent: 5.0,
            address_change_interval: 50_000,
            addresses: TREASURY.iter().map(ToString::to_string).collect(),
        },
        coinbase_tag: Some("/zpool/".to_string()),
        coinbase_tag_hex: None,
    };

    RewardSchedule::new(config).expect("test schedule is valid")
}

/// A codec that decodes addresses from a fixed table, and counts its calls.
///
/// Transactions use the real encoding, but are hashed to a fixed value.
#[derive(Default)]
struct FakeCodec {
    addresses: HashMap<&'static str, [u8; 20]>,
    address_decodes: Cell<usize>,
    transaction_decodes: Cell<usize>,
}

impl FakeCodec {
    const HASH: transaction::Hash = transaction::Hash([0xab; 32]);

    fn new() -> Self {
        let addresses = [(POOL, 0x11), (RECIPIENTS[0], 0x22), (RECIPIENTS[1], 0x77)]
            .into_iter()
            .chain(FOUNDERS.into_iter().zip(0xf0..))
            .chain(TREASURY.into_iter().zip(0xa0..))
            .map(|(address, byte)| (address, [byte; 20]))
            .collect();

        Self {
            addresses,
            ..Self::default()
        }
    }
}

impl TransactionCodec for FakeCodec {
    fn decode_address(&self, address: &str) -> Result<transparent::Address, SerializationError> {
        self.address_decodes.set(self.address_decodes.get() + 1);

        let hash = self
            .addresses
            .get(address)
            .ok_or(SerializationError::Parse("unknown test address"))?;

        Ok(transparent::Address::from_parts(
            transparent::VersionPrefix::OneByte(0),
            *hash,
        ))
    }

    fn encode_transaction(&self, transaction: &Transaction) -> io::Result<Vec<u8>> {
        transaction.zcash_serialize_to_vec()
    }

    fn decode_transaction(&self, mut bytes: &[u8]) -> Result<Transaction, SerializationError> {
        self.transaction_decodes
            .set(self.transaction_decodes.get() + 1);

        (&mut bytes).zcash_deserialize_into()
    }

    fn hash_transaction(&self, _bytes: &[u8]) -> transaction::Hash {
        Self::HASH
    }
}
