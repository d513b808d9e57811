//! Block template transaction fees.

use serde::{Deserialize, Deserializer, Serialize};

use zpool_chain::amount::{self, Amount, NonNegative};

/// A transaction in a daemon block template, reduced to its fee.
///
/// Deserializes from the `transactions` entries of a `getblocktemplate`
/// response. Other fields are ignored.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct FeeEntry {
    /// The fee paid by this transaction.
    #[serde(deserialize_with = "deserialize_fee")]
    pub fee: Amount<NonNegative>,
}

/// Returns the total fee of `entries`.
pub fn sum_fees<'a>(
    entries: impl IntoIterator<Item = &'a FeeEntry>,
) -> Result<Amount<NonNegative>, amount::Error> {
    entries.into_iter().map(|entry| entry.fee).sum()
}

/// Some daemons send fees as JSON numbers, others as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    String(String),
}

fn deserialize_fee<'de, D>(deserializer: D) -> Result<Amount<NonNegative>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let zatoshis = match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(zatoshis) => zatoshis,
        NumberOrString::String(zatoshis) => zatoshis.trim().parse().map_err(D::Error::custom)?,
    };

    Amount::try_from(zatoshis).map_err(D::Error::custom)
}
