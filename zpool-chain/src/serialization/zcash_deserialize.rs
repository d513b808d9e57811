use std::io;

use super::{ReadZcashExt, SerializationError, MAX_PROTOCOL_MESSAGE_LEN};

/// The longest byte string that fits in a protocol message after its
/// 5-byte `CompactSize` length.
pub(crate) const MAX_U8_ALLOCATION: usize = MAX_PROTOCOL_MESSAGE_LEN - 5;

/// Parsing from the consensus encoding used by Zcash nodes.
pub trait ZcashDeserialize: Sized {
    /// Reads a `Self` from `reader`, rejecting anything that is not a valid
    /// consensus encoding.
    fn zcash_deserialize<R: io::Read>(reader: R) -> Result<Self, SerializationError>;
}

/// Lists are a `CompactSize` item count, followed by the items.
///
/// The list grows as items are read, so a large count in a short message
/// fails at the end of the data, rather than allocating the whole count.
impl<T: ZcashDeserialize> ZcashDeserialize for Vec<T> {
    fn zcash_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        let count = reader.read_compactsize()?;

        (0..count)
            .map(|_| T::zcash_deserialize(&mut reader))
            .collect()
    }
}

/// Reads a byte string with a `CompactSize` length prefix, such as a script.
pub fn zcash_deserialize_bytes<R: io::Read>(mut reader: R) -> Result<Vec<u8>, SerializationError> {
    let len = reader.read_compactsize()?.try_into()?;
    zcash_deserialize_bytes_external_count(len, reader)
}

/// Reads `external_count` bytes, where the count came from earlier data.
pub fn zcash_deserialize_bytes_external_count<R: io::Read>(
    external_count: usize,
    mut reader: R,
) -> Result<Vec<u8>, SerializationError> {
    if external_count > MAX_U8_ALLOCATION {
        return Err(SerializationError::Parse(
            "byte string longer than the protocol message limit",
        ));
    }

    let mut bytes = vec![0; external_count];
    reader.read_exact(&mut bytes)?;
    Ok(bytes)
}

/// Lets the target type of a read be inferred:
/// `let tx: Transaction = bytes.zcash_deserialize_into()?`.
pub trait ZcashDeserializeInto {
    /// Reads a `T` from `self`.
    fn zcash_deserialize_into<T>(self) -> Result<T, SerializationError>
    where
        T: ZcashDeserialize;
}

impl<R: io::Read> ZcashDeserializeInto for R {
    fn zcash_deserialize_into<T>(self) -> Result<T, SerializationError>
    where
        T: ZcashDeserialize,
    {
        T::zcash_deserialize(self)
    }
}
