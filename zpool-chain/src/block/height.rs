//! Block heights.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::serialization::SerializationError;

/// The number of blocks between a block and the genesis block.
///
/// Coinbase scripts start with the height of their block, and the founders
/// and treasury schedules are keyed by height.
///
/// Heights are never above [`Height::MAX`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Height(pub u32);

impl Height {
    /// The genesis block height.
    pub const MIN: Height = Height(0);

    /// The highest valid height. Larger lock time values are Unix times.
    pub const MAX: Height = Height(499_999_999);
}

impl FromStr for Height {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let height = s
            .parse()
            .map(Height)
            .map_err(|_| SerializationError::Parse("block height is not a u32"))?;

        if height > Height::MAX {
            return Err(SerializationError::Parse("block height is above the maximum"));
        }

        Ok(height)
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Height> for u32 {
    fn from(height: Height) -> Self {
        height.0
    }
}

#[cfg(any(test, feature = "proptest-impl"))]
impl proptest::arbitrary::Arbitrary for Height {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        use proptest::prelude::*;

        (Height::MIN.0..=Height::MAX.0).prop_map(Height).boxed()
    }
}
