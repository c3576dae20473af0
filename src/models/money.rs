//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64) to avoid floating-point
//! precision issues. Budget and expense totals are plain integer sums.
//!
//! On disk and in JSON reports an amount is a plain number in major units
//! (`5000`, `12.5`), the layout stored ledgers have always used.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Currency symbols accepted (and ignored) in front of a parsed amount
const KNOWN_SYMBOLS: [char; 4] = ['₹', '$', '€', '£'];

/// Largest magnitude, in minor units, a budget, an expense or a ledger total may hold
const MAX_CENTS: i64 = 1_000_000_000_000_000;

/// Represents a monetary amount stored in minor units (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted as a budget, an expense or a ledger total
    /// (ten trillion units). Sums of in-range amounts never overflow `i64`
    /// and stay exact as JSON numbers.
    pub const MAX: Money = Money(MAX_CENTS);

    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use easybudget::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    ///
    /// Saturates at the `i64` bounds; such amounts are rejected by ledger
    /// validation since they exceed [`Money::MAX`].
    ///
    /// # Examples
    /// ```
    /// use easybudget::models::Money;
    /// assert_eq!(Money::from_units(1200).cents(), 120_000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor units portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Check that the magnitude does not exceed [`Money::MAX`]
    pub const fn is_within_limit(&self) -> bool {
        -MAX_CENTS <= self.0 && self.0 <= MAX_CENTS
    }

    /// Add two amounts, `None` on `i64` overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "1200", "12.50", "-12.50", "₹1200", "$12.5".
    /// Digits past the second decimal place are truncated. Amounts beyond
    /// [`Money::MAX`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, body) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };
        let body = body.trim_start_matches(KNOWN_SYMBOLS).trim();

        let (whole, fraction) = match body.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (body, ""),
        };

        if whole.is_empty() || !is_ascii_digits(whole) || !is_ascii_digits(fraction) {
            return Err(invalid());
        }

        let units: i64 = whole.parse().map_err(|_| invalid())?;
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction[..2].parse().map_err(|_| invalid())?,
        };

        let total = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(invalid)?;
        if total > MAX_CENTS {
            return Err(MoneyParseError::OutOfRange(s.to_string()));
        }

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

fn is_ascii_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Plain decimal form without a symbol, e.g. `1200.00` or `-50.00`
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.cents_part() == 0 {
            serializer.serialize_i64(self.units())
        } else {
            serializer.serialize_f64(self.0 as f64 / 100.0)
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

/// Reads a major-unit JSON number; fractions are rounded to the nearest minor unit
struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an amount in currency units, at most {}", Money::MAX)
    }

    fn visit_i64<E: de::Error>(self, units: i64) -> Result<Money, E> {
        units
            .checked_mul(100)
            .map(Money)
            .filter(Money::is_within_limit)
            .ok_or_else(|| E::custom(format!("amount {} out of range", units)))
    }

    fn visit_u64<E: de::Error>(self, units: u64) -> Result<Money, E> {
        let units = i64::try_from(units)
            .map_err(|_| E::custom(format!("amount {} out of range", units)))?;
        self.visit_i64(units)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Money, E> {
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents.abs() > MAX_CENTS as f64 {
            return Err(E::custom(format!("amount {} out of range", value)));
        }
        Ok(Money(cents as i64))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
            MoneyParseError::OutOfRange(s) => {
                write!(f, "Amount too large: '{}' (at most {})", s, Money::MAX)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}
