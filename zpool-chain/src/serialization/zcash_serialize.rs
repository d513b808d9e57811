use std::io;

use super::WriteZcashExt;

/// The largest message a Zcash node accepts, in bytes.
///
/// Also bounds the lengths accepted when reading.
pub const MAX_PROTOCOL_MESSAGE_LEN: usize = 2 * 1024 * 1024;

/// Serialization into the consensus encoding used by Zcash nodes.
///
/// Configuration and RPC formats use Serde instead.
pub trait ZcashSerialize: Sized {
    /// Writes `self` to `writer` in its consensus encoding.
    ///
    /// The only errors come from `writer`: types that implement this trait
    /// can't represent values that have no valid encoding.
    fn zcash_serialize<W: io::Write>(&self, writer: W) -> Result<(), io::Error>;

    /// Returns the consensus encoding of `self`.
    fn zcash_serialize_to_vec(&self) -> Result<Vec<u8>, io::Error> {
        let mut data = Vec::new();
        self.zcash_serialize(&mut data)?;
        Ok(data)
    }
}

/// Lists are a `CompactSize` item count, followed by the items.
impl<T: ZcashSerialize> ZcashSerialize for Vec<T> {
    fn zcash_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_compactsize(self.len() as u64)?;
        self.iter()
            .try_for_each(|item| item.zcash_serialize(&mut writer))
    }
}

/// Writes `bytes` with a `CompactSize` length prefix, as used for scripts.
pub fn zcash_serialize_bytes<W: io::Write>(bytes: &[u8], mut writer: W) -> Result<(), io::Error> {
    writer.write_compactsize(bytes.len() as u64)?;
    writer.write_all(bytes)
}
