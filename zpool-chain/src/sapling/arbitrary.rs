use proptest::{collection::vec, prelude::*};

use crate::amount::{Amount, NegativeAllowed};

use super::{
    Output, ShieldedData, Spend, BINDING_SIG_LEN, OUTPUT_DESCRIPTION_LEN, SPEND_DESCRIPTION_LEN,
};

/// Returns a strategy for a fixed-size array of bytes, which proptest only
/// provides for short arrays.
fn byte_array<const N: usize>() -> impl Strategy<Value = [u8; N]> {
    vec(any::<u8>(), N).prop_map(|bytes| {
        let mut array = [0; N];
        array.copy_from_slice(&bytes);
        array
    })
}

impl Arbitrary for Spend {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        byte_array::<SPEND_DESCRIPTION_LEN>().prop_map(Spend).boxed()
    }
}

impl Arbitrary for Output {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        byte_array::<OUTPUT_DESCRIPTION_LEN>().prop_map(Output).boxed()
    }
}

impl Arbitrary for ShieldedData {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (
            any::<Amount<NegativeAllowed>>(),
            vec(any::<Spend>(), 0..2),
            vec(any::<Output>(), 0..3),
            byte_array::<BINDING_SIG_LEN>(),
        )
            .prop_filter(
                "a bundle needs a spend or an output",
                |(_, spends, outputs, _)| !spends.is_empty() || !outputs.is_empty(),
            )
            .prop_map(|(value_balance, spends, outputs, binding_sig)| ShieldedData {
                value_balance,
                spends,
                outputs,
                binding_sig,
            })
            .boxed()
    }
}
