use proptest::{collection::vec, prelude::*};

use crate::block;

use super::{
    Address, Input, OutPoint, Script, VersionPrefix, MAX_COINBASE_DATA_LEN,
    MAX_COINBASE_HEIGHT_PUSH_LEN,
};

impl Arbitrary for Input {
    /// A coinbase input for the height, or a `PrevOut` input for `None`.
    type Parameters = Option<block::Height>;

    fn arbitrary_with(height: Self::Parameters) -> Self::Strategy {
        let max_tag_len = MAX_COINBASE_DATA_LEN - MAX_COINBASE_HEIGHT_PUSH_LEN;

        match height {
            Some(height) => vec(any::<u8>(), 0..=max_tag_len)
                .prop_map(move |tag| Input::new_coinbase(height, &tag))
                .boxed(),
            None => any::<(OutPoint, Script, u32)>()
                .prop_map(|(outpoint, unlock_script, sequence)| Input::PrevOut {
                    outpoint,
                    unlock_script,
                    sequence,
                })
                .boxed(),
        }
    }

    type Strategy = BoxedStrategy<Self>;
}

impl Arbitrary for VersionPrefix {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        prop_oneof![
            any::<u8>().prop_map(VersionPrefix::OneByte),
            any::<[u8; 2]>().prop_map(VersionPrefix::TwoBytes),
        ]
        .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

impl Arbitrary for Address {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        any::<(VersionPrefix, [u8; 20])>()
            .prop_map(|(prefix, hash)| Address::from_parts(prefix, hash))
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
