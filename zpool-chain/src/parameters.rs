//! Consensus parameters needed to encode and parse pool transactions.

mod network;
mod transaction;

pub use network::NetworkKind;
pub use transaction::*;
