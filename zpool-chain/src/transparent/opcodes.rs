//! Script opcodes used by coinbase transactions.

/// Supported opcodes
///
/// <https://github.com/zcash/zcash/blob/8b16094f6672d8268ff25b2d7bddd6a6207873f7/src/script/script.h#L39>
pub enum OpCode {
    // Pushes an empty byte vector. Pools append it after the coinbase height.
    Op0 = 0x00,
    // Small integer pushes, used by daemons for heights 1 to 16.
    PushNum1 = 0x51,
    PushNum16 = 0x60,
    // Opcodes used to generate P2SH scripts.
    Equal = 0x87,
    Hash160 = 0xa9,
    Push20Bytes = 0x14,
    // Additional opcodes used to generate P2PKH scripts.
    Dup = 0x76,
    EqualVerify = 0x88,
    CheckSig = 0xac,
}
