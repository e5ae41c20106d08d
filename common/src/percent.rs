//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::{Decimal, RoundingStrategy};

/// Floating-point percentage.
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
pub struct Percent(Decimal);

impl Percent {
    /// A [`Percent`] of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Percent`] by checking the provided values is
    /// greater than `0` and less than `100`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < Decimal::ZERO || val > Decimal::ONE_HUNDRED {
            None
        } else {
            Some(Self(val))
        }
    }

    /// Creates a new [`Percent`] expressing which share of `total` the
    /// provided `part` makes, rounded to 1 decimal place (half away from
    /// zero).
    ///
    /// A zero `total` yields [`Percent::ZERO`].
    #[must_use]
    pub fn ratio(part: u32, total: u32) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        let rate =
            Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(total);
        Self(rate.round_dp_with_strategy(
            1,
            RoundingStrategy::MidpointAwayFromZero,
        ))
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(test)]
mod spec {
    use super::Percent;

    fn percent(s: &str) -> Percent {
        s.parse().unwrap()
    }

    #[test]
    fn ratio_rounds_to_one_decimal_place() {
        assert_eq!(Percent::ratio(2, 3), percent("66.7"));
        assert_eq!(Percent::ratio(1, 3), percent("33.3"));
        assert_eq!(Percent::ratio(1, 1), percent("100"));
        assert_eq!(Percent::ratio(1, 16), percent("6.3"));
    }

    #[test]
    fn ratio_of_zero_total_is_zero() {
        assert_eq!(Percent::ratio(0, 0), Percent::ZERO);
    }

    #[test]
    fn orders_numerically() {
        assert!(percent("66.7") > percent("33.3"));
        assert!(Percent::ZERO < percent("0.1"));
    }
}
