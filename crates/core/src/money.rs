use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

/// Largest magnitude accepted from receipt text or item JSON, in cents.
pub const MAX_CENTS: i64 = 100_000_000_000_000;

/// An amount in major currency units, held at two fractional digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Whole cents, saturating at the `i64` range.
    pub fn to_cents(self) -> i64 {
        self.0
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.round().to_i64())
            .unwrap_or(if self.is_negative() { i64::MIN } else { i64::MAX })
    }

    /// Round to cents, rejecting amounts beyond [`MAX_CENTS`].
    pub fn checked_from_decimal(decimal: Decimal) -> Option<Self> {
        let money = Money::from_decimal(decimal);
        (money.0.abs() <= Decimal::new(MAX_CENTS, 2)).then_some(money)
    }

    pub fn from_decimal(decimal: Decimal) -> Self {
        Money(decimal.round_dp(2))
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Parse an amount as printed on a receipt: `"2,50"`, `"-0.99"`, `"12.5"`.
    ///
    /// A comma decimal separator is accepted in place of a period. Returns
    /// `None` when the text is not a number or is out of range.
    pub fn parse_receipt_amount(s: &str) -> Option<Self> {
        let normalized = s.trim().replacen(',', ".", 1);
        Decimal::from_str(&normalized).ok().and_then(Money::checked_from_decimal)
    }

    /// Split into two halves that add back up to exactly `self`.
    ///
    /// Returns `(me_half, you_half)`. When the amount has an odd final cent,
    /// the party named by `odd_cent` receives the rounded-up half.
    pub fn halve(self, odd_cent: OddCent) -> (Money, Money) {
        let cents = self.to_cents();
        let low = cents.div_euclid(2);
        let high = cents - low;
        match odd_cent {
            OddCent::Me => (Money::from_cents(high), Money::from_cents(low)),
            OddCent::You => (Money::from_cents(low), Money::from_cents(high)),
        }
    }

    /// Receipt-style rendering: comma separator, always two decimals (`"-2,50"`).
    pub fn to_receipt_string(self) -> String {
        let formatted = format!("{:.2}", self.0.abs()).replace('.', ",");
        if self.is_negative() {
            format!("-{formatted}")
        } else {
            formatted
        }
    }

    /// Receipt-style rendering followed by a currency marker (`"2,50 €"`).
    pub fn to_string_with_marker(self, marker: &str) -> String {
        format!("{} {marker}", self.to_receipt_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let decimal = <Decimal as Deserialize>::deserialize(deserializer)?;
        Money::checked_from_decimal(decimal)
            .ok_or_else(|| de::Error::custom(format!("amount {decimal} is out of range")))
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

/// Which party absorbs the odd cent when a shared total cannot be halved evenly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OddCent {
    #[default]
    Me,
    You,
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_marker("€"))
    }
}

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

impl Neg for Money {
    type Output = Self;
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |a, b| a + b)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
