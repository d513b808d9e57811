//! The Zcash wire format.
//!
//! [`ZcashSerialize`] and [`ZcashDeserialize`] write and read the
//! consensus encoding of a type. [`WriteZcashExt`] and [`ReadZcashExt`] add
//! the Bitcoin compact size integers and fixed-size fields that encoding is
//! built from.

mod error;
mod read_zcash;
mod write_zcash;
mod zcash_deserialize;
mod zcash_serialize;

pub mod sha256d;


pub use error::SerializationError;
pub use read_zcash::ReadZcashExt;
pub use write_zcash::WriteZcashExt;
pub use zcash_deserialize::{
    zcash_deserialize_bytes, zcash_deserialize_bytes_external_count, ZcashDeserialize,
    ZcashDeserializeInto,
};
pub use zcash_serialize::{zcash_serialize_bytes, ZcashSerialize, MAX_PROTOCOL_MESSAGE_LEN};
