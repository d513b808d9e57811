//! Block-related structures used by coinbase transactions.

mod height;

pub use height::Height;
