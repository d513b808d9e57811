//! Splitting the block reward between the pool, reward streams and fee recipients.

use serde::{Deserialize, Serialize};

use zpool_chain::{
    amount::{self, Amount, NonNegative},
    transparent,
};

use crate::{
    codec::TransactionCodec,
    error::{CoinbaseError, ConfigError},
    generate::BlockTemplateParams,
    schedule::RewardBranch,
};

/// A pool fee recipient, paid a percentage of the block reward.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Recipient {
    /// The recipient's transparent address.
    pub address: String,

    /// The recipient's share of the block reward.
    pub percent: f64,
}

/// Returns the coinbase outputs for `params`, in block order: the pool output,
/// then the founders or treasury output for `branch`, then one output per
/// recipient.
///
/// The pool is paid what is left of the block reward after the other shares,
/// plus all the transaction fees. Every share is rounded to the nearest
/// zatoshi separately, so the total can differ from the block reward plus fees
/// by up to half a zatoshi per output.
pub(crate) fn allocate_outputs<C>(
    codec: &C,
    params: &BlockTemplateParams<'_>,
    branch: RewardBranch<'_>,
) -> Result<Vec<(Amount<NonNegative>, transparent::Script)>, CoinbaseError>
where
    C: TransactionCodec + ?Sized,
{
    let fee_percent = fee_percent(params.recipients)?;

    let total_percent = branch.percent() + fee_percent;
    if total_percent > 100.0 {
        return Err(ConfigError::PercentOverflow {
            total: total_percent,
        }
        .into());
    }

    let reward = params.block_reward.zatoshis() as f64;
    let pool_hash = decode_hash(codec, params.pool_address)?;

    let mut outputs = Vec::with_capacity(params.recipients.len() + 2);

    let pool_reward = rounded_amount(reward * (1.0 - total_percent / 100.0))?;
    outputs.push((
        (pool_reward + params.fee_reward)?,
        transparent::Script::pay_to_public_key_hash(&pool_hash),
    ));

    if let Some(address) = branch.address() {
        let stream_hash = decode_hash(codec, address)?;
        let stream_reward = rounded_amount(reward * (branch.percent() / 100.0))?;

        outputs.push((
            stream_reward,
            transparent::Script::pay_to_script_hash(&stream_hash),
        ));
    }

    for recipient in params.recipients {
        let recipient_hash = decode_hash(codec, &recipient.address)?;
        let recipient_reward = rounded_amount(reward * (recipient.percent / 100.0))?;

        outputs.push((
            recipient_reward,
            transparent::Script::pay_to_public_key_hash(&recipient_hash),
        ));
    }

    Ok(outputs)
}

/// Returns the total percentage paid to `recipients`, summed in list order.
fn fee_percent(recipients: &[Recipient]) -> Result<f64, ConfigError> {
    recipients.iter().try_fold(0.0, |total, recipient| {
        if !recipient.percent.is_finite() || recipient.percent < 0.0 {
            return Err(ConfigError::InvalidRecipientPercent {
                address: recipient.address.clone(),
                percent: recipient.percent,
            });
        }

        Ok(total + recipient.percent)
    })
}

/// Rounds `zatoshis` to the nearest whole zatoshi, with halves rounded up.
fn rounded_amount(zatoshis: f64) -> Result<Amount<NonNegative>, amount::Error> {
    Amount::try_from(zatoshis.round() as i64)
}

/// Decodes `address`, and returns its 20-byte hash.
fn decode_hash<C>(codec: &C, address: &str) -> Result<[u8; 20], CoinbaseError>
where
    C: TransactionCodec + ?Sized,
{
    codec
        .decode_address(address)
        .map(|address| address.hash_bytes())
        .map_err(|source| CoinbaseError::Address {
            address: address.to_string(),
            source,
        })
}

#[cfg(any(test, feature = "proptest-impl"))]
impl proptest::arbitrary::Arbitrary for Recipient {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        use proptest::prelude::*;
        use zpool_chain::{parameters::NetworkKind, transparent::Address};

        (any::<[u8; 20]>(), 0.0..=5.0f64)
            .prop_map(|(hash, percent)| Recipient {
                address: Address::from_pub_key_hash(NetworkKind::Mainnet, hash).to_string(),
                percent,
            })
            .boxed()
    }

    type Strategy = proptest::strategy::BoxedStrategy<Self>;
}
