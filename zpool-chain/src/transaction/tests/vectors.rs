//! Fixed test vectors for transactions.

use zpool_test::{
    prelude::*,
    vectors::{
        DAEMON_COINBASE_V4_SAPLING_TX, DAEMON_COINBASE_V4_SAPLING_TXID, DAEMON_COINBASE_V4_TX,
        DAEMON_COINBASE_V4_TXID, MAINNET_V4_TRANSPARENT_TX, MAINNET_V4_TRANSPARENT_TXID,
    },
};

use crate::{
    amount::{Amount, NegativeAllowed, NonNegative},
    block::Height,
    parameters::NetworkKind,
    sapling,
    serialization::{ZcashDeserializeInto, ZcashSerialize},
    transaction::{LockTime, Transaction},
    transparent::{self, Address, Script},
};

#[test]
fn mainnet_v4_transparent_round_trip() -> Result<()> {
    let _init_guard = zpool_test::init();

    let transaction: Transaction = MAINNET_V4_TRANSPARENT_TX.as_slice().zcash_deserialize_into()?;

    assert_eq!(transaction.version(), 4);
    assert!(!transaction.is_coinbase());
    assert_eq!(transaction.inputs().len(), 1);
    assert_eq!(transaction.inputs()[0].sequence(), 0xffff_fffe);
    assert_eq!(transaction.lock_time(), LockTime(0x000d_0762));
    assert_eq!(transaction.expiry_height(), Some(Height(0x000d_0795)));

    let outputs = transaction.outputs();
    assert_eq!(outputs.len(), 2);
    assert_eq!(outputs[0].value(), Amount::<NonNegative>::new(8_000_000_000));
    assert_eq!(outputs[1].value(), Amount::<NonNegative>::new(13_199_999_757));

    // The lock scripts match the scripts the pool builds for the same hashes.
    let script_address: Address = "t3M5FDmPfWNRG3HRLddbicsuSCvKuk9hxzZ".parse()?;
    let pub_key_address: Address = "t1ekRwsd4LaSsd6NXgsx66q2HxQWTLCF44y".parse()?;
    assert_eq!(
        outputs[0].lock_script,
        Script::pay_to_script_hash(&script_address.hash_bytes())
    );
    assert_eq!(
        outputs[1].lock_script,
        Script::pay_to_public_key_hash(&pub_key_address.hash_bytes())
    );

    let reencoded = transaction.zcash_serialize_to_vec()?;
    assert_eq!(reencoded, *MAINNET_V4_TRANSPARENT_TX);
    assert_eq!(transaction.hash().to_string(), MAINNET_V4_TRANSPARENT_TXID);

    Ok(())
}

#[test]
fn daemon_coinbase_round_trip() -> Result<()> {
    let _init_guard = zpool_test::init();

    let transaction: Transaction = DAEMON_COINBASE_V4_TX.as_slice().zcash_deserialize_into()?;

    assert!(transaction.is_coinbase());
    assert_eq!(transaction.coinbase_height(), Some(Height(1_000_000)));
    assert_eq!(transaction.expiry_height(), Some(Height(1_000_000)));
    assert_eq!(
        transaction.inputs()[0].coinbase_script(),
        Some(&hex::decode("0340420f0004deadbeef")?[..])
    );

    let reencoded = transaction.zcash_serialize_to_vec()?;
    assert_eq!(reencoded, *DAEMON_COINBASE_V4_TX);
    assert_eq!(transaction.hash().to_string(), DAEMON_COINBASE_V4_TXID);

    Ok(())
}

#[test]
fn new_v4_coinbase_layout() -> Result<()> {
    let _init_guard = zpool_test::init();

    let pool = Address::from_pub_key_hash(NetworkKind::Mainnet, [0x11; 20]);
    let founders = Address::from_script_hash(NetworkKind::Mainnet, [0xf0; 20]);

    let transaction = Transaction::new_v4_coinbase(
        Height(1),
        vec![
            (
                Amount::new(1_000_000_000),
                Script::pay_to_public_key_hash(&pool.hash_bytes()),
            ),
            (
                Amount::new(250_000_000),
                Script::pay_to_script_hash(&founders.hash_bytes()),
            ),
        ],
        b"tag",
    );

    let bytes = transaction.zcash_serialize_to_vec()?;
    let expected = [
        // header, version group id
        "04000080",
        "85202f89",
        // one coinbase input: height 1 push, OP_0, tag
        "01",
        &"00".repeat(32),
        "ffffffff",
        "06",
        "010100",
        &hex::encode(b"tag"),
        "ffffffff",
        // two outputs
        "02",
        "00ca9a3b00000000",
        "1976a914",
        &"11".repeat(20),
        "88ac",
        "80b2e60e00000000",
        "17a914",
        &"f0".repeat(20),
        "87",
        // lock time, expiry height, value balance, empty shielded counts
        "00000000",
        "00000000",
        "0000000000000000",
        "000000",
    ]
    .concat();
    assert_eq!(hex::encode(&bytes), expected);

    let parsed: Transaction = bytes.as_slice().zcash_deserialize_into()?;
    assert_eq!(parsed, transaction);
    assert_eq!(parsed.coinbase_height(), Some(Height(1)));

    Ok(())
}

#[test]
#[should_panic(expected = "coinbase transactions need an output")]
fn new_v4_coinbase_requires_outputs() {
    let _init_guard = zpool_test::init();

    Transaction::new_v4_coinbase(Height(1), Vec::new(), b"");
}

/// Returns a copy of the daemon coinbase with the byte at `offset` from the
/// end replaced by `byte`.
fn daemon_coinbase_with_trailer_byte(offset: usize, byte: u8) -> Vec<u8> {
    let mut bytes = DAEMON_COINBASE_V4_TX.clone();
    let index = bytes.len() - offset;
    bytes[index] = byte;
    bytes
}

#[test]
fn daemon_sapling_coinbase_round_trip() -> Result<()> {
    let _init_guard = zpool_test::init();

    let transaction: Transaction = DAEMON_COINBASE_V4_SAPLING_TX
        .as_slice()
        .zcash_deserialize_into()?;

    assert!(transaction.is_coinbase());
    assert_eq!(transaction.coinbase_height(), Some(Height(1_000_000)));
    assert_eq!(transaction.outputs().len(), 2);

    let shielded = transaction
        .sapling_shielded_data()
        .expect("the coinbase has a Sapling output");
    assert_eq!(
        shielded.value_balance,
        Amount::<NegativeAllowed>::try_from(-25_000_000i64)?
    );
    assert!(shielded.spends.is_empty());
    assert_eq!(shielded.outputs.len(), 1);
    assert_eq!(shielded.outputs[0].0[..32], [0x11; 32]);
    assert_eq!(
        shielded.outputs[0].0[sapling::OUTPUT_DESCRIPTION_LEN - 192..],
        [0x66; 192]
    );
    assert_eq!(shielded.binding_sig, [0x77; sapling::BINDING_SIG_LEN]);

    let reencoded = transaction.zcash_serialize_to_vec()?;
    assert_eq!(reencoded, *DAEMON_COINBASE_V4_SAPLING_TX);
    assert_eq!(transaction.hash().to_string(), DAEMON_COINBASE_V4_SAPLING_TXID);

    Ok(())
}

#[test]
fn rejects_joinsplits_and_truncated_shielded_data() {
    let _init_guard = zpool_test::init();

    // nJoinSplit is the last byte.
    daemon_coinbase_with_trailer_byte(1, 1)
        .as_slice()
        .zcash_deserialize_into::<Transaction>()
        .expect_err("JoinSplits are not supported");

    // nOutputsSapling and nSpendsSapling, without the descriptions they count.
    for offset in 2..=3 {
        daemon_coinbase_with_trailer_byte(offset, 1)
            .as_slice()
            .zcash_deserialize_into::<Transaction>()
            .expect_err("the descriptions are missing");
    }

    // The low byte of valueBalanceSapling.
    daemon_coinbase_with_trailer_byte(11, 1)
        .as_slice()
        .zcash_deserialize_into::<Transaction>()
        .expect_err("a value balance needs spends or outputs");

    // A Sapling coinbase without its binding signature.
    let truncated = &DAEMON_COINBASE_V4_SAPLING_TX[..DAEMON_COINBASE_V4_SAPLING_TX.len() - 1];
    truncated
        .zcash_deserialize_into::<Transaction>()
        .expect_err("the binding signature is truncated");
}

#[test]
fn rejects_unsupported_headers() {
    let _init_guard = zpool_test::init();

    let with_header = |header: &str, group_id: &str| {
        let mut bytes = hex::decode([header, group_id].concat()).unwrap();
        bytes.extend_from_slice(&DAEMON_COINBASE_V4_TX[8..]);
        bytes
    };

    // v5
    with_header("05000080", "0a27a726")
        .as_slice()
        .zcash_deserialize_into::<Transaction>()
        .expect_err("v5 is not supported");
    // v4 without fOverwintered
    with_header("04000000", "85202f89")
        .as_slice()
        .zcash_deserialize_into::<Transaction>()
        .expect_err("v4 requires fOverwintered");
    // v4 with the Overwinter version group id
    with_header("04000080", "7082c403")
        .as_slice()
        .zcash_deserialize_into::<Transaction>()
        .expect_err("v4 requires the Sapling version group id");
}

#[test]
fn v1_coinbase_round_trip() -> Result<()> {
    let _init_guard = zpool_test::init();

    let transaction = Transaction::V1 {
        inputs: vec![transparent::Input::new_coinbase(Height(17), b"")],
        outputs: vec![transparent::Output::new_coinbase(
            Amount::new(50 * crate::amount::COIN),
            Script::pay_to_public_key_hash(&[0x22; 20]),
        )],
        lock_time: LockTime::unlocked(),
    };

    let bytes = transaction.zcash_serialize_to_vec()?;
    assert_eq!(&bytes[..4], &[1, 0, 0, 0]);

    let parsed: Transaction = bytes.as_slice().zcash_deserialize_into()?;
    assert_eq!(parsed, transaction);
    assert_eq!(parsed.expiry_height(), None);

    Ok(())
}
