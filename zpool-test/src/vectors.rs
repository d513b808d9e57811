//! Transaction test vectors

#![allow(missing_docs)]

use hex::FromHex;
use once_cell::sync::Lazy;

/// A mainnet v4 transaction with one transparent input and two transparent outputs,
/// a P2SH output followed by a P2PKH output.
pub static MAINNET_V4_TRANSPARENT_TX: Lazy<Vec<u8>> = Lazy::new(|| {
    <Vec<u8>>::from_hex(
        "0400008085202f8901fcaf44919d4a17f6181a02a7ebe0420be6f7dad1ef86755b81d5a956745665\
         3c010000006a473044022035224ed7276e61affd53315eca059c92876bc2df61d84277cafd7af61d\
         4dbf4002203ed72ea497a9f6b38eb29df08e830d99e32377edb8a574b8a289024f0241d7c4012103\
         1f54b095eae066d96b2557c1f99e40e967978a5fd117465dbec0986ca74201a6feffffff020050d6\
         dc0100000017a9141b8a9bda4b62cd0d0582b55455d0778c86f8628f870d03c81203000000197\
         6a914e4ff5512ffafe9287992a1cd177ca6e408e0300388ac62070d0095070d00000000000000000\
         0000000",
    )
    .expect("Transaction bytes are in valid hex representation")
});

/// The transaction id of [`MAINNET_V4_TRANSPARENT_TX`], in RPC display order.
pub const MAINNET_V4_TRANSPARENT_TXID: &str =
    "00ce8def1a7b84e66da8ce06df1ed589c28b6c71e0608fdf1cc95643649e3b20";

/// A daemon-style v4 coinbase transaction for height 1_000_000.
///
/// The coinbase script starts with the BIP-34 height push `03 40 42 0f`,
/// followed by `OP_0` and four bytes of extra nonce. It pays a P2PKH output
/// and a P2SH output.
pub static DAEMON_COINBASE_V4_TX: Lazy<Vec<u8>> = Lazy::new(|| {
    <Vec<u8>>::from_hex(
        "0400008085202f89010000000000000000000000000000000000000000000000000000000000000000\
         ffffffff0a0340420f0004deadbeefffffffff0280b2e60e000000001976a9140102030405060708\
         090a0b0c0d0e0f101112131488aca0acb9030000000017a91415161718191a1b1c1d1e1f20212223\
         2425262728870000000040420f000000000000000000000000",
    )
    .expect("Transaction bytes are in valid hex representation")
});

/// The transaction id of [`DAEMON_COINBASE_V4_TX`], in RPC display order.
pub const DAEMON_COINBASE_V4_TXID: &str =
    "6d02ca624ea6f838c2dd4b5885f913a959826a296a356ab1a6470aac433e95c7";

/// [`DAEMON_COINBASE_V4_TX`], with one Sapling output that moves 0.25 ZEC
/// into the Sapling pool.
///
/// The output description and binding signature are filler bytes: each
/// field of the output repeats one byte, from `0x11` for `cv` to `0x66` for
/// the proof, and the signature is all `0x77`.
pub static DAEMON_COINBASE_V4_SAPLING_TX: Lazy<Vec<u8>> = Lazy::new(|| {
    // Drop valueBalanceSapling, nSpendsSapling, nOutputsSapling and nJoinSplit.
    let transparent = &DAEMON_COINBASE_V4_TX[..DAEMON_COINBASE_V4_TX.len() - 11];

    let mut bytes = transparent.to_vec();
    bytes.extend_from_slice(&(-25_000_000i64).to_le_bytes());
    // nSpendsSapling, nOutputsSapling
    bytes.extend_from_slice(&[0x00, 0x01]);
    for (byte, len) in [
        (0x11, 32),
        (0x22, 32),
        (0x33, 32),
        (0x44, 580),
        (0x55, 80),
        (0x66, 192),
    ] {
        bytes.extend(std::iter::repeat(byte).take(len));
    }
    // nJoinSplit
    bytes.push(0x00);
    bytes.extend_from_slice(&[0x77; 64]);

    bytes
});

/// The transaction id of [`DAEMON_COINBASE_V4_SAPLING_TX`], in RPC display order.
pub const DAEMON_COINBASE_V4_SAPLING_TXID: &str =
    "7ee111ae52b94fda2ee51a145fc95b2b63e4ff0edf2a01177212755000a2aaad";
