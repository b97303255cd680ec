//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Amounts coming from the outside world are never negative; a
//! negative value only appears as the result of a subtraction (e.g. a
//! balance).

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use crate::error::{SpendwiseError, SpendwiseResult};

/// Largest single amount, in cents (10 trillion currency units)
///
/// Every cent value up to this bound is exact as an `f64`, and about nine
/// thousand maximal amounts still sum inside an `i64`.
pub const MAX_CENTS: i64 = 1_000_000_000_000_000;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from a decimal value, rounded to the nearest cent
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for negative, NaN or infinite values and for
    /// values above [`MAX_CENTS`].
    ///
    /// # Examples
    /// ```
    /// use spendwise::models::Money;
    /// let amount = Money::new(10.5).unwrap();
    /// assert_eq!(amount.cents(), 1050);
    /// assert!(Money::new(-1.0).is_err());
    /// ```
    pub fn new(value: f64) -> SpendwiseResult<Self> {
        if !value.is_finite() {
            return Err(SpendwiseError::InvalidAmount(format!(
                "{} is not a finite number",
                value
            )));
        }
        if value < 0.0 {
            return Err(SpendwiseError::InvalidAmount(format!(
                "Money amount cannot be negative: {}",
                value
            )));
        }
        let cents = (value * 100.0).round();
        if cents > MAX_CENTS as f64 {
            return Err(too_large(value));
        }
        Ok(Self(cents as i64))
    }

    /// Create a Money amount from cents
    pub fn from_cents(cents: i64) -> SpendwiseResult<Self> {
        if cents < 0 {
            return Err(SpendwiseError::InvalidAmount(format!(
                "Money amount cannot be negative: {} cents",
                cents
            )));
        }
        if cents > MAX_CENTS {
            return Err(too_large(cents as f64 / 100.0));
        }
        Ok(Self(cents))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a plain decimal number
    pub fn value(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative (only possible after a subtraction)
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Return a new amount holding `self + other`, saturating at the `i64` range
    pub fn add(&self, other: Money) -> Money {
        *self + other
    }

    /// Return a new amount holding `self - other`; the result may be negative
    pub fn subtract(&self, other: Money) -> Money {
        *self - other
    }

    /// Sum that fails instead of saturating
    ///
    /// # Errors
    ///
    /// `InvalidAmount` when the result does not fit in an `i64` of cents.
    pub fn checked_add(&self, other: Money) -> SpendwiseResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| SpendwiseError::InvalidAmount("Total amount overflowed".into()))
    }

    /// Difference that fails instead of saturating
    pub fn checked_sub(&self, other: Money) -> SpendwiseResult<Money> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or_else(|| SpendwiseError::InvalidAmount("Total amount overflowed".into()))
    }

    /// Parse a money amount from user input
    ///
    /// Accepts "10.50", "10", "R$ 10.50" or "$10.50". Negative input is rejected.
    pub fn parse(s: &str) -> SpendwiseResult<Self> {
        let trimmed = s.trim();
        let number = trimmed
            .strip_prefix("R$")
            .or_else(|| trimmed.strip_prefix('$'))
            .unwrap_or(trimmed)
            .trim();

        let value: f64 = number
            .parse()
            .map_err(|_| SpendwiseError::Validation(format!("Invalid money format: {}", s)))?;

        Self::new(value)
    }

    /// Format using the default locale (pt-BR)
    pub fn format(&self) -> String {
        self.format_with(&CurrencyFormat::default())
    }

    /// Format using the given locale conventions
    pub fn format_with(&self, format: &CurrencyFormat) -> String {
        let units = (self.0 / 100).abs();
        let cents = (self.0 % 100).abs();
        let sign = if self.is_negative() { "-" } else { "" };
        let spacing = if format.symbol_spacing { " " } else { "" };

        format!(
            "{}{}{}{}{}{:02}",
            sign,
            format.symbol,
            spacing,
            group_thousands(units, format.thousands_separator),
            format.decimal_separator,
            cents
        )
    }
}

fn too_large(value: f64) -> SpendwiseError {
    SpendwiseError::InvalidAmount(format!(
        "Money amount {} exceeds the maximum of {}",
        value,
        MAX_CENTS / 100
    ))
}

/// Insert a separator every three digits, counting from the right
fn group_thousands(value: i64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }

    grouped
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// Serialized as a plain decimal number, e.g. `1765.5`
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
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

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Locale conventions used when rendering currency text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_separator: char,
    pub thousands_separator: char,
    /// Whether a space separates the symbol from the number
    pub symbol_spacing: bool,
}

impl CurrencyFormat {
    /// Brazilian real, e.g. `R$ 1.234,56`
    pub fn pt_br() -> Self {
        Self {
            symbol: "R$".to_string(),
            decimal_separator: ',',
            thousands_separator: '.',
            symbol_spacing: true,
        }
    }

    /// US dollar, e.g. `$1,234.56`
    pub fn en_us() -> Self {
        Self {
            symbol: "$".to_string(),
            decimal_separator: '.',
            thousands_separator: ',',
            symbol_spacing: false,
        }
    }

    /// Resolve a locale tag such as `pt-BR` or `en_US`
    pub fn for_locale(locale: &str) -> SpendwiseResult<Self> {
        match locale.replace('_', "-").to_lowercase().as_str() {
            "pt-br" | "pt" => Ok(Self::pt_br()),
            "en-us" | "en" => Ok(Self::en_us()),
            other => Err(SpendwiseError::Config(format!(
                "Unsupported locale: {}",
                other
            ))),
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::pt_br()
    }
}
