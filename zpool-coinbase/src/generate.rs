//! Coinbase transaction generation for block templates.

use tracing::instrument;

use zpool_chain::{
    amount::{self, Amount, NonNegative},
    block::Height,
    transaction::{self, Transaction},
};

use crate::{
    allocation::{allocate_outputs, Recipient},
    codec::TransactionCodec,
    error::CoinbaseError,
    schedule::RewardSchedule,
};

/// The block template data needed to generate a coinbase transaction.
#[derive(Copy, Clone, Debug)]
pub struct BlockTemplateParams<'a> {
    /// The height of the block being mined.
    pub height: Height,

    /// The block subsidy paid by the coinbase transaction.
    pub block_reward: Amount<NonNegative>,

    /// The total fees of the other transactions in the block.
    /// Paid to the pool.
    pub fee_reward: Amount<NonNegative>,

    /// Pool fee recipients, in output order.
    pub recipients: &'a [Recipient],

    /// The pool's transparent address.
    pub pool_address: &'a str,

    /// The founders and treasury reward schedule.
    pub reward_schedule: &'a RewardSchedule,

    /// A complete coinbase transaction supplied by the daemon.
    ///
    /// If present, it is used instead of generating a transaction.
    pub daemon_coinbase: Option<&'a [u8]>,
}

/// A generated coinbase transaction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedCoinbase {
    /// The coinbase transaction.
    pub transaction: Transaction,

    /// The serialized transaction.
    pub bytes: Vec<u8>,

    /// The transaction ID.
    pub hash: transaction::Hash,
}

impl GeneratedCoinbase {
    /// Returns the serialized transaction as a hex string, as sent to miners.
    pub fn hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

/// Returns a coinbase transaction for the supplied block template parameters.
///
/// If the daemon supplied a coinbase transaction, it is decoded, re-encoded
/// and hashed. Otherwise, a new version 4 coinbase transaction pays the pool,
/// the founders or treasury, and the pool fee recipients.
#[instrument(skip(codec, params), fields(height = %params.height))]
pub fn generate_coinbase<C>(
    codec: &C,
    params: &BlockTemplateParams<'_>,
) -> Result<GeneratedCoinbase, CoinbaseError>
where
    C: TransactionCodec + ?Sized,
{
    let transaction = match params.daemon_coinbase {
        Some(daemon_coinbase) => {
            tracing::info!(
                len = daemon_coinbase.len(),
                "using the daemon coinbase transaction, skipping reward allocation"
            );

            codec
                .decode_transaction(daemon_coinbase)
                .map_err(CoinbaseError::DaemonCoinbase)?
        }
        None => {
            let branch = params.reward_schedule.branch(params.height)?;
            tracing::debug!(?branch, "selected reward branch");

            let outputs = allocate_outputs(codec, params, branch)?;
            check_output_total(params, &outputs)?;

            Transaction::new_v4_coinbase(
                params.height,
                outputs,
                params.reward_schedule.coinbase_tag(),
            )
        }
    };

    let bytes = codec.encode_transaction(&transaction)?;
    let hash = codec.hash_transaction(&bytes);

    tracing::debug!(%hash, len = bytes.len(), "generated coinbase transaction");

    Ok(GeneratedCoinbase {
        transaction,
        bytes,
        hash,
    })
}

/// Logs a warning if rounding made the outputs pay more than the block
/// reward and fees.
fn check_output_total<S>(
    params: &BlockTemplateParams<'_>,
    outputs: &[(Amount<NonNegative>, S)],
) -> Result<(), CoinbaseError> {
    let available = (params.block_reward + params.fee_reward)?;
    let paid: Amount<NonNegative> = outputs
        .iter()
        .map(|(amount, _script)| *amount)
        .sum::<amount::Result<_>>()?;

    if paid > available {
        tracing::warn!(
            %paid,
            %available,
            "rounded coinbase outputs pay more than the block reward and fees"
        );
    }

    Ok(())
}
