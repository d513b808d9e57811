use std::io;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::{
    block,
    serialization::{
        zcash_deserialize_bytes_external_count, zcash_serialize_bytes, ReadZcashExt,
        SerializationError, WriteZcashExt, ZcashDeserialize, ZcashDeserializeInto,
        ZcashSerialize,
    },
    transaction,
};

use super::{opcodes::OpCode, CoinbaseData, Input, OutPoint, Output, Script};

/// The maximum length of a coinbase input's signature script, in bytes.
///
/// > A coinbase transaction script MUST have length in {2 .. 100} bytes.
///
/// <https://zips.z.cash/protocol/protocol.pdf#txnconsensus>
pub const MAX_COINBASE_DATA_LEN: usize = 100;

/// The longest output of [`encode_height_push`]: a length byte, five height
/// bytes, and the trailing `OP_0`.
pub const MAX_COINBASE_HEIGHT_PUSH_LEN: usize = 7;

// BIP34 puts the block height at the start of the coinbase script, as a
// script push. Pools add an `OP_0` after it, then their tag.

/// Encodes `height` as a length-prefixed script push, followed by `OP_0`.
///
/// The push uses the minimal number of bytes that can hold `height << 1`, so
/// the most significant pushed byte never has its sign bit set. Height 0 is
/// pushed as a single zero byte rather than an empty push.
///
/// ```
/// use zpool_chain::{block::Height, transparent::encode_height_push};
///
/// assert_eq!(encode_height_push(Height(0)), [0x01, 0x00, 0x00]);
/// assert_eq!(encode_height_push(Height(128)), [0x02, 0x80, 0x00, 0x00]);
/// assert_eq!(
///     encode_height_push(Height(1_000_000)),
///     [0x03, 0x40, 0x42, 0x0f, 0x00],
/// );
/// ```
pub fn encode_height_push(height: block::Height) -> Vec<u8> {
    let shifted = u64::from(height.0) << 1;
    let significant_bits = u64::BITS - shifted.leading_zeros();
    let len = significant_bits.div_ceil(8).max(1) as usize;

    let mut push = Vec::with_capacity(len + 2);
    push.push(len as u8);
    push.extend_from_slice(&u64::from(height.0).to_le_bytes()[..len]);
    push.push(OpCode::Op0 as u8);
    push
}

/// Parses the height push at the start of a coinbase signature script.
///
/// Returns the height and the rest of the script after the push. Accepts the
/// `OP_0` and `OP_1` to `OP_16` small number opcodes used by daemons, and
/// 1 to 5 byte pushes whose most significant byte does not have the sign bit
/// set. Returns `None` if the script does not start with a valid height, or
/// if the height does not fit in a `u32`.
pub fn parse_height_push(script: &[u8]) -> Option<(block::Height, &[u8])> {
    use block::Height;

    let (&first, rest) = script.split_first()?;

    match first {
        op if op == OpCode::Op0 as u8 => Some((Height(0), rest)),
        op if (OpCode::PushNum1 as u8..=OpCode::PushNum16 as u8).contains(&op) => {
            Some((Height(u32::from(op - OpCode::PushNum1 as u8) + 1), rest))
        }
        len @ 1..=5 => {
            let len = usize::from(len);
            let (height_bytes, rest) = (rest.len() >= len).then(|| rest.split_at(len))?;

            // The Bitcoin encoding requires that the most significant byte is below 0x80.
            if height_bytes[len - 1] >= 0x80 {
                return None;
            }

            let mut le_bytes = [0u8; 8];
            le_bytes[..len].copy_from_slice(height_bytes);
            let height = u32::try_from(u64::from_le_bytes(le_bytes)).ok()?;

            Some((Height(height), rest))
        }
        _ => None,
    }
}

/// Coinbase inputs spend this null outpoint.
const NULL_OUTPOINT: OutPoint = OutPoint {
    hash: transaction::Hash([0; 32]),
    index: u32::MAX,
};

impl ZcashSerialize for OutPoint {
    fn zcash_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_32_bytes(&self.hash.0)?;
        writer.write_u32::<LittleEndian>(self.index)
    }
}

impl ZcashDeserialize for OutPoint {
    fn zcash_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        let hash = transaction::Hash(reader.read_32_bytes()?);
        let index = reader.read_u32::<LittleEndian>()?;

        Ok(OutPoint { hash, index })
    }
}

impl ZcashSerialize for Input {
    fn zcash_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        let sequence = match self {
            Input::PrevOut {
                outpoint,
                unlock_script,
                sequence,
            } => {
                outpoint.zcash_serialize(&mut writer)?;
                unlock_script.zcash_serialize(&mut writer)?;
                sequence
            }
            Input::Coinbase { data, sequence } => {
                NULL_OUTPOINT.zcash_serialize(&mut writer)?;
                zcash_serialize_bytes(&data.0, &mut writer)?;
                sequence
            }
        };

        writer.write_u32::<LittleEndian>(*sequence)
    }
}

impl ZcashDeserialize for Input {
    fn zcash_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        let outpoint = OutPoint::zcash_deserialize(&mut reader)?;

        if outpoint.hash != NULL_OUTPOINT.hash {
            return Ok(Input::PrevOut {
                outpoint,
                unlock_script: Script::zcash_deserialize(&mut reader)?,
                sequence: reader.read_u32::<LittleEndian>()?,
            });
        }

        if outpoint.index != NULL_OUTPOINT.index {
            return Err(SerializationError::Parse("coinbase input has a non-null index"));
        }

        let len = reader.read_compactsize()?;
        if len > MAX_COINBASE_DATA_LEN as u64 {
            return Err(SerializationError::Parse("coinbase script is too long"));
        }
        let data = zcash_deserialize_bytes_external_count(len as usize, &mut reader)?;

        Ok(Input::Coinbase {
            data: CoinbaseData(data),
            sequence: reader.read_u32::<LittleEndian>()?,
        })
    }
}

impl ZcashSerialize for Output {
    fn zcash_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        self.value.zcash_serialize(&mut writer)?;
        self.lock_script.zcash_serialize(&mut writer)
    }
}

impl ZcashDeserialize for Output {
    fn zcash_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        Ok(Output {
            value: (&mut reader).zcash_deserialize_into()?,
            lock_script: Script::zcash_deserialize(&mut reader)?,
        })
    }
}
