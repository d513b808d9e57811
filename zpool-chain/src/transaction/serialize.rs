//! Transaction encodings for versions 1 to 4.

use std::io;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::{
    amount::{Amount, NegativeAllowed},
    block,
    parameters::{
        MAX_SUPPORTED_TX_VERSION, OVERWINTERED_FLAG, OVERWINTER_VERSION_GROUP_ID,
        SAPLING_VERSION_GROUP_ID,
    },
    sapling,
    serialization::{
        ReadZcashExt, SerializationError, WriteZcashExt, ZcashDeserialize, ZcashDeserializeInto,
        ZcashSerialize,
    },
};

use super::{LockTime, Transaction};

impl ZcashSerialize for Transaction {
    fn zcash_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        // header: the version number, with the fOverwintered flag in the high bit
        let mut header = self.version();
        if self.is_overwintered() {
            header |= OVERWINTERED_FLAG;
        }
        writer.write_u32::<LittleEndian>(header)?;

        match self {
            Transaction::V1 {
                inputs,
                outputs,
                lock_time,
            } => {
                inputs.zcash_serialize(&mut writer)?;
                outputs.zcash_serialize(&mut writer)?;
                lock_time.zcash_serialize(&mut writer)?;
            }
            Transaction::V2 {
                inputs,
                outputs,
                lock_time,
            } => {
                inputs.zcash_serialize(&mut writer)?;
                outputs.zcash_serialize(&mut writer)?;
                lock_time.zcash_serialize(&mut writer)?;
                // nJoinSplit
                writer.write_compactsize(0)?;
            }
            Transaction::V3 {
                inputs,
                outputs,
                lock_time,
                expiry_height,
            } => {
                writer.write_u32::<LittleEndian>(OVERWINTER_VERSION_GROUP_ID)?;
                inputs.zcash_serialize(&mut writer)?;
                outputs.zcash_serialize(&mut writer)?;
                lock_time.zcash_serialize(&mut writer)?;
                writer.write_u32::<LittleEndian>(expiry_height.0)?;
                // nJoinSplit
                writer.write_compactsize(0)?;
            }
            Transaction::V4 {
                inputs,
                outputs,
                lock_time,
                expiry_height,
                sapling_shielded_data,
            } => {
                writer.write_u32::<LittleEndian>(SAPLING_VERSION_GROUP_ID)?;
                inputs.zcash_serialize(&mut writer)?;
                outputs.zcash_serialize(&mut writer)?;
                lock_time.zcash_serialize(&mut writer)?;
                writer.write_u32::<LittleEndian>(expiry_height.0)?;

                match sapling_shielded_data {
                    Some(sapling) => {
                        sapling.value_balance.zcash_serialize(&mut writer)?;
                        sapling.spends.zcash_serialize(&mut writer)?;
                        sapling.outputs.zcash_serialize(&mut writer)?;
                        // nJoinSplit
                        writer.write_compactsize(0)?;
                        writer.write_all(&sapling.binding_sig)?;
                    }
                    None => {
                        // valueBalanceSapling, nSpendsSapling, nOutputsSapling
                        Amount::<NegativeAllowed>::zero().zcash_serialize(&mut writer)?;
                        writer.write_compactsize(0)?;
                        writer.write_compactsize(0)?;
                        // nJoinSplit
                        writer.write_compactsize(0)?;
                    }
                }
            }
        }

        Ok(())
    }
}

/// Reads `nJoinSplit`, and rejects transactions with Sprout JoinSplits.
///
/// Coinbase transactions can't have JoinSplits after Sapling activation.
fn read_empty_joinsplit_count<R: io::Read>(mut reader: R) -> Result<(), SerializationError> {
    if reader.read_compactsize()? != 0 {
        return Err(SerializationError::Parse("JoinSplits are not supported"));
    }
    Ok(())
}

/// Reads the Sapling fields and `nJoinSplit` of a v4 transaction.
///
/// The binding signature comes after the JoinSplit fields, and is only
/// present if there are Sapling spends or outputs.
fn read_v4_shielded_fields<R: io::Read>(
    mut reader: R,
) -> Result<Option<sapling::ShieldedData>, SerializationError> {
    let value_balance: Amount<NegativeAllowed> = (&mut reader).zcash_deserialize_into()?;
    let spends: Vec<sapling::Spend> = (&mut reader).zcash_deserialize_into()?;
    let outputs: Vec<sapling::Output> = (&mut reader).zcash_deserialize_into()?;
    read_empty_joinsplit_count(&mut reader)?;

    if spends.is_empty() && outputs.is_empty() {
        if value_balance != Amount::<NegativeAllowed>::zero() {
            return Err(SerializationError::Parse(
                "non-zero Sapling value balance without spends or outputs",
            ));
        }
        return Ok(None);
    }

    let mut binding_sig = [0; sapling::BINDING_SIG_LEN];
    reader.read_exact(&mut binding_sig)?;

    Ok(Some(sapling::ShieldedData {
        value_balance,
        spends,
        outputs,
        binding_sig,
    }))
}

impl ZcashDeserialize for Transaction {
    fn zcash_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        let header = reader.read_u32::<LittleEndian>()?;
        let overwintered = header & OVERWINTERED_FLAG != 0;
        let version = header & !OVERWINTERED_FLAG;

        if version > MAX_SUPPORTED_TX_VERSION {
            return Err(SerializationError::Parse(
                "transaction versions 5 and later are not supported",
            ));
        }

        match (version, overwintered) {
            (1, false) => Ok(Transaction::V1 {
                inputs: (&mut reader).zcash_deserialize_into()?,
                outputs: (&mut reader).zcash_deserialize_into()?,
                lock_time: (&mut reader).zcash_deserialize_into()?,
            }),
            (2, false) => {
                let inputs = (&mut reader).zcash_deserialize_into()?;
                let outputs = (&mut reader).zcash_deserialize_into()?;
                let lock_time = (&mut reader).zcash_deserialize_into()?;
                read_empty_joinsplit_count(&mut reader)?;

                Ok(Transaction::V2 {
                    inputs,
                    outputs,
                    lock_time,
                })
            }
            (3, true) => {
                if reader.read_u32::<LittleEndian>()? != OVERWINTER_VERSION_GROUP_ID {
                    return Err(SerializationError::Parse("expected OVERWINTER_VERSION_GROUP_ID"));
                }
                let inputs = (&mut reader).zcash_deserialize_into()?;
                let outputs = (&mut reader).zcash_deserialize_into()?;
                let lock_time = (&mut reader).zcash_deserialize_into()?;
                let expiry_height = block::Height(reader.read_u32::<LittleEndian>()?);
                read_empty_joinsplit_count(&mut reader)?;

                Ok(Transaction::V3 {
                    inputs,
                    outputs,
                    lock_time,
                    expiry_height,
                })
            }
            (4, true) => {
                if reader.read_u32::<LittleEndian>()? != SAPLING_VERSION_GROUP_ID {
                    return Err(SerializationError::Parse("expected SAPLING_VERSION_GROUP_ID"));
                }
                let inputs = (&mut reader).zcash_deserialize_into()?;
                let outputs = (&mut reader).zcash_deserialize_into()?;
                let lock_time: LockTime = (&mut reader).zcash_deserialize_into()?;
                let expiry_height = block::Height(reader.read_u32::<LittleEndian>()?);
                let sapling_shielded_data = read_v4_shielded_fields(&mut reader)?;

                Ok(Transaction::V4 {
                    inputs,
                    outputs,
                    lock_time,
                    expiry_height,
                    sapling_shielded_data,
                })
            }
            (1 | 2, true) => Err(SerializationError::Parse(
                "fOverwintered flag set on a pre-Overwinter transaction",
            )),
            (3 | 4, false) => Err(SerializationError::Parse(
                "fOverwintered flag missing on an Overwinter or Sapling transaction",
            )),
            (_, _) => Err(SerializationError::Parse("bad tx header")),
        }
    }
}
