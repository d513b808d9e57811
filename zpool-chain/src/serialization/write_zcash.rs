use std::io;

use byteorder::{LittleEndian, WriteBytesExt};

/// Writing helpers for the Bitcoin-derived encodings used in transactions.
pub trait WriteZcashExt: io::Write {
    /// Writes `n` as a Bitcoin `CompactSize`, using its shortest encoding.
    ///
    /// ```
    /// use zpool_chain::serialization::WriteZcashExt;
    ///
    /// let mut buf = Vec::new();
    /// buf.write_compactsize(0x12).unwrap();
    /// buf.write_compactsize(0xfd).unwrap();
    /// assert_eq!(buf, b"\x12\xfd\xfd\x00");
    /// ```
    fn write_compactsize(&mut self, n: u64) -> io::Result<()> {
        if let Ok(small) = u8::try_from(n) {
            if small <= 0xfc {
                return self.write_u8(small);
            }
        }

        if let Ok(n) = u16::try_from(n) {
            self.write_u8(0xfd)?;
            self.write_u16::<LittleEndian>(n)
        } else if let Ok(n) = u32::try_from(n) {
            self.write_u8(0xfe)?;
            self.write_u32::<LittleEndian>(n)
        } else {
            self.write_u8(0xff)?;
            self.write_u64::<LittleEndian>(n)
        }
    }

    /// Writes exactly 32 bytes, for example a transaction hash.
    fn write_32_bytes(&mut self, bytes: &[u8; 32]) -> io::Result<()> {
        self.write_all(bytes)
    }
}

impl<W: io::Write + ?Sized> WriteZcashExt for W {}
