//! Prices and discounts as exact cents.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// An amount of money, always held at two decimal places.
///
/// Budget arithmetic (`10.00 - 6.90 - 0.50 ...`) stays exact because every
/// value is a scaled integer underneath.
///
/// ```
/// use shipping_discounts::Money;
///
/// let price: Money = "6.9".parse().unwrap();
/// assert_eq!(price, Money::from_cents(690));
/// assert_eq!(price.to_string(), "6.90");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    pub const CENTS_SCALE: u32 = 2;

    pub const ZERO: Self = Money::from_cents(0);

    pub const fn from_cents(cents: i64) -> Self {
        let magnitude = cents.unsigned_abs();
        Money(Decimal::from_parts(
            magnitude as u32,
            (magnitude >> 32) as u32,
            0,
            cents < 0,
            Self::CENTS_SCALE,
        ))
    }

    /// Rounds half away from zero to whole cents.
    pub fn from_decimal(value: Decimal) -> Self {
        let mut cents =
            value.round_dp_with_strategy(Self::CENTS_SCALE, RoundingStrategy::MidpointAwayFromZero);
        cents.rescale(Self::CENTS_SCALE);
        Money(cents)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<Decimal>().map(Money::from_decimal)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

// Both operands already carry two decimal places, so sums and differences do too.
impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Money(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
