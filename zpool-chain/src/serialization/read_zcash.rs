use std::io;

use byteorder::{LittleEndian, ReadBytesExt};

use super::{SerializationError, MAX_PROTOCOL_MESSAGE_LEN};

/// Reading helpers for the Bitcoin-derived encodings used in transactions.
pub trait ReadZcashExt: io::Read {
    /// Reads a Bitcoin `CompactSize` length.
    ///
    /// Only the shortest encoding of each value is accepted, and lengths above
    /// [`MAX_PROTOCOL_MESSAGE_LEN`] are rejected, so callers can't be made to
    /// allocate huge buffers.
    ///
    /// ```
    /// use std::io::Cursor;
    /// use zpool_chain::serialization::ReadZcashExt;
    ///
    /// assert_eq!(Cursor::new(b"\x12").read_compactsize().unwrap(), 0x12);
    /// assert_eq!(Cursor::new(b"\xfd\xfd\x00").read_compactsize().unwrap(), 0xfd);
    ///
    /// // 0x12 fits in one byte, so its three-byte encoding is rejected.
    /// Cursor::new(b"\xfd\x12\x00").read_compactsize().unwrap_err();
    /// ```
    fn read_compactsize(&mut self) -> Result<u64, SerializationError> {
        let non_canonical = SerializationError::Parse("non-canonical compactsize");

        let size = match self.read_u8()? {
            small @ 0x00..=0xfc => u64::from(small),
            0xfd => match self.read_u16::<LittleEndian>()? {
                n if n >= 0xfd => u64::from(n),
                _ => return Err(non_canonical),
            },
            0xfe => match self.read_u32::<LittleEndian>()? {
                n if n > 0xffff => u64::from(n),
                _ => return Err(non_canonical),
            },
            0xff => match self.read_u64::<LittleEndian>()? {
                n if n > 0xffff_ffff => n,
                _ => return Err(non_canonical),
            },
        };

        if size > MAX_PROTOCOL_MESSAGE_LEN as u64 {
            return Err(SerializationError::Parse(
                "compactsize larger than protocol message limit",
            ));
        }

        Ok(size)
    }

    /// Reads exactly 32 bytes, for example a transaction hash.
    fn read_32_bytes(&mut self) -> io::Result<[u8; 32]> {
        let mut bytes = [0; 32];
        self.read_exact(&mut bytes)?;
        Ok(bytes)
    }
}

impl<R: io::Read + ?Sized> ReadZcashExt for R {}
