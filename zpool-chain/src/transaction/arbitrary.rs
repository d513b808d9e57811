//! Arbitrary data generation for transaction proptests

use proptest::{collection::vec, prelude::*};

use crate::{block, sapling, transparent};

use super::{LockTime, Transaction};

impl Transaction {
    /// Generate a proptest strategy for the transparent parts of a transaction:
    /// a coinbase or spending input list, and a non-empty output list.
    fn transparent_strategy() -> BoxedStrategy<(
        Vec<transparent::Input>,
        Vec<transparent::Output>,
        LockTime,
        block::Height,
    )> {
        let inputs = prop_oneof![
            any::<block::Height>()
                .prop_flat_map(|height| transparent::Input::arbitrary_with(Some(height)))
                .prop_map(|input| vec![input]),
            vec(transparent::Input::arbitrary_with(None), 1..4).prop_filter(
                "a null outpoint hash is parsed as a coinbase input",
                |inputs| inputs
                    .iter()
                    .all(|input| input.outpoint().map(|o| o.hash.0) != Some([0; 32])),
            ),
        ];

        (
            inputs,
            vec(any::<transparent::Output>(), 1..5),
            any::<LockTime>(),
            any::<block::Height>(),
        )
            .boxed()
    }
}

impl Arbitrary for Transaction {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        let sapling = proptest::option::of(any::<sapling::ShieldedData>());

        (1u32..=4, Transaction::transparent_strategy(), sapling)
            .prop_map(|(version, transparent, sapling_shielded_data)| {
                let (inputs, outputs, lock_time, expiry_height) = transparent;

                match version {
                    1 => Transaction::V1 {
                        inputs,
                        outputs,
                        lock_time,
                    },
                    2 => Transaction::V2 {
                        inputs,
                        outputs,
                        lock_time,
                    },
                    3 => Transaction::V3 {
                        inputs,
                        outputs,
                        lock_time,
                        expiry_height,
                    },
                    _ => Transaction::V4 {
                        inputs,
                        outputs,
                        lock_time,
                        expiry_height,
                        sapling_shielded_data,
                    },
                }
            })
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
