//! SHA256d, a.k.a. double SHA256, a.k.a. "hash twice", used for transaction ids.

use std::io::prelude::*;

use sha2::{Digest, Sha256};

/// An `io::Write` instance that produces a SHA256d output.
#[derive(Default)]
pub struct Writer {
    hash: Sha256,
}

impl Writer {
    /// Consume the Writer and produce the hash result.
    pub fn finish(self) -> [u8; 32] {
        let result1 = self.hash.finalize();
        let result2 = Sha256::digest(result1);
        let mut buffer = [0u8; 32];
        buffer[0..32].copy_from_slice(&result2[0..32]);
        buffer
    }
}

impl Write for Writer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.hash.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Hash `data` with SHA256d, returning the digest in internal byte order.
pub fn hash(data: &[u8]) -> [u8; 32] {
    let mut writer = Writer::default();
    writer.hash.update(data);
    writer.finish()
}
