//! Transaction version parameters.

/// The Overwinter version group ID, used by v3 transactions.
pub const OVERWINTER_VERSION_GROUP_ID: u32 = 0x03C4_8270;

/// The Sapling version group ID, used by v4 transactions.
pub const SAPLING_VERSION_GROUP_ID: u32 = 0x892F_2085;

/// The `fOverwintered` flag, stored in the high bit of the header field.
pub const OVERWINTERED_FLAG: u32 = 1 << 31;

/// The largest transaction version this crate can parse.
pub const MAX_SUPPORTED_TX_VERSION: u32 = 4;
