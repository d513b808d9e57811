//! Transaction lock times.

use std::io;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use serde::{Deserialize, Serialize};

use crate::serialization::{SerializationError, ZcashDeserialize, ZcashSerialize};

/// The raw `nLockTime` field of a transaction.
///
/// Small values are block heights and large values are Unix times, but
/// coinbase transactions are never locked, so the value is not interpreted.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "proptest-impl"),
    derive(proptest_derive::Arbitrary)
)]
pub struct LockTime(pub u32);

impl LockTime {
    /// Returns the lock time used by coinbase transactions, which is zero.
    pub fn unlocked() -> Self {
        LockTime(0)
    }
}

impl ZcashSerialize for LockTime {
    fn zcash_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_u32::<LittleEndian>(self.0)
    }
}

impl ZcashDeserialize for LockTime {
    fn zcash_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        reader.read_u32::<LittleEndian>().map(LockTime).map_err(Into::into)
    }
}
