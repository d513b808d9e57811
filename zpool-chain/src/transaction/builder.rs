//! Coinbase transaction construction.

use crate::{
    amount::{Amount, NonNegative},
    block::Height,
    transaction::{LockTime, Transaction},
    transparent,
};

impl Transaction {
    /// Returns a version 4 coinbase transaction for the block at `height`.
    ///
    /// The transaction has a single coinbase input, whose script is the height
    /// push followed by `tag`, and one output for each `(amount, script)`
    /// pair, in order.
    ///
    /// # Panics
    ///
    /// If `outputs` is empty, or if the coinbase script is longer than
    /// [`transparent::MAX_COINBASE_DATA_LEN`].
    pub fn new_v4_coinbase(
        height: Height,
        outputs: impl IntoIterator<Item = (Amount<NonNegative>, transparent::Script)>,
        tag: &[u8],
    ) -> Transaction {
        let outputs: Vec<transparent::Output> = outputs
            .into_iter()
            .map(|(amount, script)| transparent::Output::new_coinbase(amount, script))
            .collect();
        assert!(!outputs.is_empty(), "coinbase transactions need an output");

        // Consensus requires the height push at the start of the script.
        let inputs = vec![transparent::Input::new_coinbase(height, tag)];

        // Pools leave both the lock time and the expiry height at zero.
        Transaction::V4 {
            inputs,
            outputs,
            lock_time: LockTime::unlocked(),
            expiry_height: Height(0),
            sapling_shielded_data: None,
        }
    }
}
