//! Zcash-family chain data structures for mining pool coinbase generation.
//!
//! This crate holds the consensus-critical encodings that a pool needs to build
//! and hash a coinbase transaction: zatoshi [`amount`]s, block [`block::Height`]s,
//! [`transparent`] scripts, addresses, inputs and outputs, and [`transaction`]s
//! up to version 4. Daemon coinbases can also carry opaque [`sapling`] data.
#![deny(missing_docs)]
#![allow(clippy::try_err)]
#![forbid(unsafe_code)]

pub mod amount;
pub mod block;
pub mod parameters;
pub mod sapling;
pub mod serialization;
pub mod transaction;
pub mod transparent;
