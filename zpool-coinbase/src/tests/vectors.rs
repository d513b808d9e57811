//! Fixed coinbase generation scenarios.

use color_eyre::eyre::Result;

use zpool_chain::{
    amount::{Amount, NonNegative},
    block::Height,
    serialization::ZcashDeserializeInto,
    transaction::Transaction,
    transparent,
};
use zpool_test::vectors::{
    DAEMON_COINBASE_V4_SAPLING_TX, DAEMON_COINBASE_V4_SAPLING_TXID, DAEMON_COINBASE_V4_TX,
    DAEMON_COINBASE_V4_TXID,
};

use crate::{
    build_founders_script, build_pub_key_hash_script, generate_coinbase, BlockTemplateParams,
    CoinbaseError, Config, ConfigError, FoundersConfig, Recipient, RewardSchedule, RewardStream,
    ZcashCodec,
};

use super::*;

const BLOCK_REWARD: Amount<NonNegative> = Amount::new(1_250_000_000);

fn params<'a>(
    height: u32,
    recipients: &'a [Recipient],
    reward_schedule: &'a RewardSchedule,
) -> BlockTemplateParams<'a> {
    BlockTemplateParams {
        height: Height(height),
        block_reward: BLOCK_REWARD,
        fee_reward: Amount::zero(),
        recipients,
        pool_address: POOL,
        reward_schedule,
        daemon_coinbase: None,
    }
}

fn recipient(address: &str, percent: f64) -> Recipient {
    Recipient {
        address: address.to_string(),
        percent,
    }
}

/// Returns the value and script of each output of `transaction`.
fn outputs(transaction: &Transaction) -> Vec<(i64, transparent::Script)> {
    transaction
        .outputs()
        .iter()
        .map(|output| (output.value().zatoshis(), output.lock_script.clone()))
        .collect()
}

#[test]
fn founders_reward_without_recipients() -> Result<()> {
    let _init_guard = zpool_test::init();

    let codec = FakeCodec::new();
    let schedule = test_schedule(false);

    let coinbase = generate_coinbase(&codec, &params(100_000, &[], &schedule))?;

    assert_eq!(
        outputs(&coinbase.transaction),
        [
            (1_000_000_000, build_pub_key_hash_script(&[0x11; 20])),
            (250_000_000, build_founders_script(&[0xf1; 20])),
        ]
    );
    assert_eq!(coinbase.hash, FakeCodec::HASH);
    assert_eq!(codec.address_decodes.get(), 2);
    assert_eq!(codec.transaction_decodes.get(), 0);

    Ok(())
}

#[test]
fn single_founders_address_at_height_one() -> Result<()> {
    let _init_guard = zpool_test::init();

    let founders = FoundersConfig {
        enabled: true,
        percent: 20.0,
        max_block_height: 1_000_000,
        address_change_interval: 100_000,
        addresses: vec![FOUNDERS[0].to_string()],
    };

    // One address only covers heights below the first address change, so a
    // founders period up to 1,000,000 is rejected when the pool starts.
    let config = Config {
        founders: founders.clone(),
        ..Config::default()
    };
    assert_eq!(
        RewardSchedule::new(config),
        Err(ConfigError::AddressIndexOutOfRange {
            stream: RewardStream::Founders,
            height: Height(1_000_000),
            index: 10,
            len: 1,
        })
    );

    let schedule = RewardSchedule::new(Config {
        founders: FoundersConfig {
            max_block_height: 99_999,
            ..founders
        },
        ..Config::default()
    })?;

    let codec = FakeCodec::new();
    let coinbase = generate_coinbase(&codec, &params(1, &[], &schedule))?;

    assert_eq!(
        outputs(&coinbase.transaction),
        [
            (1_000_000_000, build_pub_key_hash_script(&[0x11; 20])),
            (250_000_000, build_founders_script(&[0xf0; 20])),
        ]
    );
    assert_eq!(coinbase.transaction.coinbase_height(), Some(Height(1)));

    Ok(())
}

#[test]
fn founders_reward_with_recipient() -> Result<()> {
    let _init_guard = zpool_test::init();

    let codec = FakeCodec::new();
    let schedule = test_schedule(false);
    let recipients = [recipient(RECIPIENTS[0], 2.0)];

    let coinbase = generate_coinbase(&codec, &params(499_999, &recipients, &schedule))?;

    assert_eq!(
        outputs(&coinbase.transaction),
        [
            (975_000_000, build_pub_key_hash_script(&[0x11; 20])),
            (250_000_000, build_founders_script(&[0xf4; 20])),
            (25_000_000, build_pub_key_hash_script(&[0x22; 20])),
        ]
    );

    Ok(())
}

#[test]
fn no_reward_after_founders_period() -> Result<()> {
    let _init_guard = zpool_test::init();

    let codec = FakeCodec::new();
    let schedule = test_schedule(false);
    let recipients = [
        recipient(RECIPIENTS[0], 2.0),
        recipient(RECIPIENTS[1], 0.5),
    ];

    let mut params = params(500_000, &recipients, &schedule);
    params.fee_reward = Amount::new(12_345);

    let coinbase = generate_coinbase(&codec, &params)?;

    assert_eq!(
        outputs(&coinbase.transaction),
        [
            (1_218_762_345, build_pub_key_hash_script(&[0x11; 20])),
            (25_000_000, build_pub_key_hash_script(&[0x22; 20])),
            (6_250_000, build_pub_key_hash_script(&[0x77; 20])),
        ]
    );

    Ok(())
}

#[test]
fn treasury_boundary() -> Result<()> {
    let _init_guard = zpool_test::init();

    let codec = FakeCodec::new();
    let schedule = test_schedule(true);

    let before = generate_coinbase(&codec, &params(TREASURY_START - 1, &[], &schedule))?;
    let at = generate_coinbase(&codec, &params(TREASURY_START, &[], &schedule))?;
    let wrapped = generate_coinbase(&codec, &params(TREASURY_START + 150_000, &[], &schedule))?;

    assert_eq!(
        outputs(&before.transaction)[1],
        (250_000_000, build_founders_script(&[0xf4; 20]))
    );
    assert_eq!(
        outputs(&at.transaction),
        [
            (1_187_500_000, build_pub_key_hash_script(&[0x11; 20])),
            (62_500_000, build_founders_script(&[0xa0; 20])),
        ]
    );
    assert_eq!(
        outputs(&wrapped.transaction)[1],
        (62_500_000, build_founders_script(&[0xa0; 20]))
    );

    Ok(())
}

#[test]
fn fees_are_paid_to_the_pool() -> Result<()> {
    let _init_guard = zpool_test::init();

    let codec = FakeCodec::new();
    let schedule = test_schedule(false);

    let mut params = params(0, &[], &schedule);
    params.fee_reward = Amount::new(10_000);

    let coinbase = generate_coinbase(&codec, &params)?;

    assert_eq!(coinbase.transaction.outputs()[0].value(), 1_000_010_000);
    assert_eq!(coinbase.transaction.outputs()[1].value(), 250_000_000);

    Ok(())
}

#[test]
fn coinbase_transaction_layout() -> Result<()> {
    let _init_guard = zpool_test::init();

    let schedule = RewardSchedule::new(Config {
        founders: FoundersConfig {
            enabled: true,
            percent: 20.0,
            max_block_height: 1_499_999,
            address_change_interval: 500_000,
            addresses: FOUNDERS[..3].iter().map(ToString::to_string).collect(),
        },
        coinbase_tag: Some("/zpool/".to_string()),
        ..Config::default()
    })?;
    let recipients = [recipient(RECIPIENTS[0], 2.0)];

    let mut params = params(1_000_000, &recipients, &schedule);
    params.fee_reward = Amount::new(12_500);

    let coinbase = generate_coinbase(&ZcashCodec, &params)?;

    assert_eq!(
        coinbase.hex(),
        "0400008085202f89010000000000000000000000000000000000000000000000000000000000000000\
         ffffffff0c0340420f002f7a706f6f6c2fffffffff0394821d3a000000001976a91411111111111111\
         1111111111111111111111111188ac80b2e60e0000000017a914f2f2f2f2f2f2f2f2f2f2f2f2f2f2f2\
         f2f2f2f2f28740787d01000000001976a914222222222222222222222222222222222222222288ac00\
         000000000000000000000000000000000000"
    );
    assert_eq!(
        coinbase.hash.to_string(),
        "5381c18907f473c814eaa3411f3872fd90e173f786a20d8167e9877308b85696"
    );
    assert_eq!(coinbase.hash, coinbase.transaction.hash());
    assert!(coinbase.transaction.is_coinbase());
    assert_eq!(coinbase.transaction.coinbase_height(), Some(Height(1_000_000)));

    let decoded: Transaction = coinbase.bytes.zcash_deserialize_into()?;
    assert_eq!(decoded, coinbase.transaction);

    Ok(())
}

#[test]
fn daemon_coinbase_skips_allocation() -> Result<()> {
    let _init_guard = zpool_test::init();

    let codec = FakeCodec::new();
    let schedule = test_schedule(false);

    let mut params = params(1_000_000, &[], &schedule);
    params.pool_address = "not a pool address";
    params.daemon_coinbase = Some(DAEMON_COINBASE_V4_TX.as_slice());

    let coinbase = generate_coinbase(&codec, &params)?;

    assert_eq!(coinbase.bytes, *DAEMON_COINBASE_V4_TX);
    assert_eq!(coinbase.hash, FakeCodec::HASH);
    assert_eq!(codec.address_decodes.get(), 0);
    assert_eq!(codec.transaction_decodes.get(), 1);

    // The real codec hashes the daemon transaction.
    let coinbase = generate_coinbase(&ZcashCodec, &params)?;
    assert_eq!(coinbase.bytes, *DAEMON_COINBASE_V4_TX);
    assert_eq!(coinbase.hash.to_string(), DAEMON_COINBASE_V4_TXID);

    Ok(())
}

#[test]
fn daemon_coinbase_with_sapling_output() -> Result<()> {
    let _init_guard = zpool_test::init();

    let schedule = test_schedule(false);

    let mut params = params(1_000_000, &[], &schedule);
    params.daemon_coinbase = Some(DAEMON_COINBASE_V4_SAPLING_TX.as_slice());

    let coinbase = generate_coinbase(&ZcashCodec, &params)?;

    assert_eq!(coinbase.bytes, *DAEMON_COINBASE_V4_SAPLING_TX);
    assert_eq!(coinbase.hash.to_string(), DAEMON_COINBASE_V4_SAPLING_TXID);
    assert_eq!(
        coinbase
            .transaction
            .sapling_shielded_data()
            .map(|sapling| sapling.outputs.len()),
        Some(1)
    );

    Ok(())
}

#[test]
fn invalid_daemon_coinbase() -> Result<()> {
    let _init_guard = zpool_test::init();

    let schedule = test_schedule(false);
    let truncated = &DAEMON_COINBASE_V4_TX[..DAEMON_COINBASE_V4_TX.len() - 1];

    let mut params = params(1_000_000, &[], &schedule);
    params.daemon_coinbase = Some(truncated);

    let error = generate_coinbase(&ZcashCodec, &params).expect_err("truncated transaction");
    assert!(matches!(error, CoinbaseError::DaemonCoinbase(_)));

    Ok(())
}

#[test]
fn address_errors_are_fatal() -> Result<()> {
    let _init_guard = zpool_test::init();

    let codec = FakeCodec::new();
    let schedule = test_schedule(false);

    let mut bad_pool = params(0, &[], &schedule);
    bad_pool.pool_address = "t1NotAnAddress";
    let error = generate_coinbase(&codec, &bad_pool).expect_err("unknown pool address");
    assert!(matches!(
        error,
        CoinbaseError::Address { ref address, .. } if address == "t1NotAnAddress"
    ));

    let recipients = [
        recipient(RECIPIENTS[0], 1.0),
        recipient("t1NotARecipient", 1.0),
    ];
    let error = generate_coinbase(&ZcashCodec, &params(0, &recipients, &schedule))
        .expect_err("invalid recipient address");
    assert!(matches!(
        error,
        CoinbaseError::Address { ref address, .. } if address == "t1NotARecipient"
    ));

    Ok(())
}

#[test]
fn percent_errors_are_fatal() -> Result<()> {
    let _init_guard = zpool_test::init();

    let codec = FakeCodec::new();
    let schedule = test_schedule(false);

    let recipients = [recipient(RECIPIENTS[0], 70.0), recipient(RECIPIENTS[1], 10.5)];
    let error = generate_coinbase(&codec, &params(0, &recipients, &schedule))
        .expect_err("founders and recipients take more than the block reward");
    assert!(matches!(
        error,
        CoinbaseError::Config(ConfigError::PercentOverflow { total }) if total == 100.5
    ));

    // Without founders rewards, the recipients fit.
    generate_coinbase(&codec, &params(500_000, &recipients, &schedule))?;

    let recipients = [recipient(RECIPIENTS[0], -1.0)];
    let error = generate_coinbase(&codec, &params(500_000, &recipients, &schedule))
        .expect_err("negative recipient percent");
    assert!(matches!(
        error,
        CoinbaseError::Config(ConfigError::InvalidRecipientPercent { .. })
    ));

    Ok(())
}

#[test]
fn recipients_deserialize_from_json() -> Result<()> {
    let _init_guard = zpool_test::init();

    let recipients: Vec<Recipient> = serde_json::from_str(
        r#"[{ "address": "t1Lz5sUzNoMBWmq8qk1zS4q5A54RgF5e4Ua", "percent": 1.5 }]"#,
    )?;

    assert_eq!(recipients, [recipient(RECIPIENTS[0], 1.5)]);

    Ok(())
}
