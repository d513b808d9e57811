//! Zatoshi amounts whose range is checked by their type.
//!
//! An [`Amount`] carries a [`Constraint`] marker, which fixes the range of
//! values it can hold. Coinbase outputs are always [`NonNegative`].
//! Arithmetic on amounts is checked, so `+`, `-` and [`Iterator::sum`]
//! return a [`Result`](std::result::Result) instead of wrapping or panicking.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    io,
    marker::PhantomData,
    ops::RangeInclusive,
};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use serde::{Deserialize, Serialize};

use crate::serialization::{SerializationError, ZcashDeserialize, ZcashSerialize};


/// The result of an amount operation.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Number of zatoshis in 1 ZEC
pub const COIN: i64 = 100_000_000;

/// The largest number of zatoshis that can exist.
pub const MAX_MONEY: i64 = 21_000_000 * COIN;

/// A number of zatoshis, within the range allowed by `C`.
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
#[serde(bound = "C: Constraint + Clone")]
pub struct Amount<C = NegativeAllowed>(i64, #[serde(skip)] PhantomData<C>);

/// The range of values allowed in an [`Amount`].
pub trait Constraint {
    /// Returns the allowed values.
    fn valid_range() -> RangeInclusive<i64>;

    /// Returns `value` if it is allowed, or a [`Error::Constraint`] if it isn't.
    fn validate(value: i64) -> Result<i64> {
        let range = Self::valid_range();

        if range.contains(&value) {
            Ok(value)
        } else {
            Err(Error::Constraint { value, range })
        }
    }
}

/// Allows any value between `-MAX_MONEY` and `MAX_MONEY`.
///
/// ```
/// # use zpool_chain::amount::{Constraint, MAX_MONEY, NegativeAllowed};
/// assert_eq!(NegativeAllowed::valid_range(), -MAX_MONEY..=MAX_MONEY);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub struct NegativeAllowed;

impl Constraint for NegativeAllowed {
    fn valid_range() -> RangeInclusive<i64> {
        -MAX_MONEY..=MAX_MONEY
    }
}

/// Allows any value between zero and `MAX_MONEY`.
///
/// ```
/// # use zpool_chain::amount::{Constraint, MAX_MONEY, NonNegative};
/// assert_eq!(NonNegative::valid_range(), 0..=MAX_MONEY);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default)]
pub struct NonNegative;

impl Constraint for NonNegative {
    fn valid_range() -> RangeInclusive<i64> {
        0..=MAX_MONEY
    }
}

/// Errors from creating or combining [`Amount`]s.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value is outside the constraint's range.
    #[error("{value} zatoshis is outside the valid amount range {range:?}")]
    Constraint {
        /// The rejected value.
        value: i64,
        /// The constraint's range.
        range: RangeInclusive<i64>,
    },

    /// The value does not fit in an `i64`.
    #[error("{value} zatoshis does not fit in an i64 amount")]
    Convert {
        /// The rejected value.
        value: i128,
        /// The integer conversion error.
        source: std::num::TryFromIntError,
    },

    /// A running total left the constraint's range.
    #[error("amount sum overflowed at {partial_sum} zatoshis, with {remaining_items} items left")]
    SumOverflow {
        /// The out-of-range running total.
        partial_sum: i64,
        /// The number of items after the one that overflowed.
        remaining_items: usize,
    },
}

impl Amount<NonNegative> {
    /// Returns a non-negative amount of `zatoshis`, for use in constants and tests.
    ///
    /// # Panics
    ///
    /// If `zatoshis` is negative or greater than [`MAX_MONEY`].
    pub const fn new(zatoshis: i64) -> Self {
        assert!(zatoshis >= 0 && zatoshis <= MAX_MONEY);
        Self(zatoshis, PhantomData)
    }
}

impl<C> Amount<C> {
    /// Returns the number of zatoshis in this amount.
    pub fn zatoshis(&self) -> i64 {
        self.0
    }

    /// Converts this amount to another constraint, if it is in that constraint's range.
    pub fn constrain<C2: Constraint>(self) -> Result<Amount<C2>> {
        Amount::checked(self.0)
    }

    /// Returns an amount of zero zatoshis, which every constraint allows.
    pub fn zero() -> Self
    where
        C: Constraint,
    {
        Self(0, PhantomData)
    }

    fn checked(value: i64) -> Result<Self>
    where
        C: Constraint,
    {
        C::validate(value).map(|value| Self(value, PhantomData))
    }
}

impl<C> fmt::Display for Amount<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.0 >= 0, "", &self.0.unsigned_abs().to_string())
    }
}

impl<C> fmt::Debug for Amount<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(&format!("Amount<{}>", std::any::type_name::<C>()))
            .field(&self.0)
            .finish()
    }
}

// Both operands are at most `MAX_MONEY` in magnitude, so the `i64` operations
// can't overflow before the constraint is checked.

impl<C: Constraint> std::ops::Add<Amount<C>> for Amount<C> {
    type Output = Result<Amount<C>>;

    fn add(self, rhs: Amount<C>) -> Self::Output {
        Amount::checked(self.0 + rhs.0)
    }
}

impl<C: Constraint> std::ops::Add<Amount<C>> for Result<Amount<C>> {
    type Output = Result<Amount<C>>;

    fn add(self, rhs: Amount<C>) -> Self::Output {
        self? + rhs
    }
}

impl<C: Constraint> std::ops::Sub<Amount<C>> for Amount<C> {
    type Output = Result<Amount<C>>;

    fn sub(self, rhs: Amount<C>) -> Self::Output {
        Amount::checked(self.0 - rhs.0)
    }
}

impl<C: Constraint> std::iter::Sum<Amount<C>> for Result<Amount<C>> {
    fn sum<I: Iterator<Item = Amount<C>>>(mut iter: I) -> Self {
        let mut total = Amount::zero();

        while let Some(amount) = iter.next() {
            // `C` isn't always `Copy`, so the addition consumes both amounts.
            let partial_sum = total.0 + amount.0;

            match total + amount {
                Ok(sum) => total = sum,
                Err(_) => {
                    return Err(Error::SumOverflow {
                        partial_sum,
                        remaining_items: iter.count(),
                    })
                }
            }
        }

        Ok(total)
    }
}

impl<'amt, C: Constraint + Copy + 'amt> std::iter::Sum<&'amt Amount<C>> for Result<Amount<C>> {
    fn sum<I: Iterator<Item = &'amt Amount<C>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<C> From<Amount<C>> for i64 {
    fn from(amount: Amount<C>) -> Self {
        amount.0
    }
}

impl From<Amount<NonNegative>> for u64 {
    fn from(amount: Amount<NonNegative>) -> Self {
        amount.0.unsigned_abs()
    }
}

impl<C: Constraint> TryFrom<i64> for Amount<C> {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Amount::checked(value)
    }
}

impl<C: Constraint> TryFrom<i32> for Amount<C> {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        Amount::checked(value.into())
    }
}

impl<C: Constraint> TryFrom<u64> for Amount<C> {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        let value = i64::try_from(value).map_err(|source| Error::Convert {
            value: value.into(),
            source,
        })?;

        Amount::checked(value)
    }
}

// Amounts compare by value, whatever their constraints.

impl<C1, C2> PartialEq<Amount<C2>> for Amount<C1> {
    fn eq(&self, other: &Amount<C2>) -> bool {
        self.0 == other.0
    }
}

impl<C> Eq for Amount<C> {}

impl<C> PartialEq<i64> for Amount<C> {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl<C> PartialEq<Amount<C>> for i64 {
    fn eq(&self, other: &Amount<C>) -> bool {
        *self == other.0
    }
}

impl<C1, C2> PartialOrd<Amount<C2>> for Amount<C1> {
    fn partial_cmp(&self, other: &Amount<C2>) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl<C> Ord for Amount<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<C> Hash for Amount<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Transaction output values and value balances are little-endian 64-bit
/// integers.
impl ZcashSerialize for Amount<NegativeAllowed> {
    fn zcash_serialize<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_i64::<LittleEndian>(self.0)
    }
}

impl ZcashDeserialize for Amount<NegativeAllowed> {
    fn zcash_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        Ok(reader.read_i64::<LittleEndian>()?.try_into()?)
    }
}

impl ZcashSerialize for Amount<NonNegative> {
    fn zcash_serialize<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_u64::<LittleEndian>(u64::from(*self))
    }
}

impl ZcashDeserialize for Amount<NonNegative> {
    fn zcash_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        Ok(reader.read_u64::<LittleEndian>()?.try_into()?)
    }
}

#[cfg(any(test, feature = "proptest-impl"))]
impl<C> proptest::arbitrary::Arbitrary for Amount<C>
where
    C: Constraint + fmt::Debug,
{
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        use proptest::prelude::*;

        C::valid_range().prop_map(|v| Self(v, PhantomData)).boxed()
    }

    type Strategy = proptest::strategy::BoxedStrategy<Self>;
}
