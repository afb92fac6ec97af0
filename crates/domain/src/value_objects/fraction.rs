use primitive_types::U256;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An exact ratio of raw integer amounts.
///
/// Arithmetic never rounds; precision is only lost at the formatting
/// step. `divide` performs plain cross multiplication, so dividing by a
/// zero-valued fraction yields a result whose denominator is zero.
/// Callers inspect that with [`Fraction::is_denominator_zero`] rather
/// than this type rejecting the division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: U256,
    pub denominator: U256,
}

impl Fraction {
    pub fn new(numerator: impl Into<U256>, denominator: impl Into<U256>) -> Self {
        Self {
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }

    /// The canonical zero value, `0/1`.
    pub fn zero() -> Self {
        Self::new(0u64, 1u64)
    }

    pub fn is_denominator_zero(&self) -> bool {
        self.denominator.is_zero()
    }

    pub fn multiply(&self, other: &Fraction) -> Result<Fraction, &'static str> {
        let numerator = self
            .numerator
            .checked_mul(other.numerator)
            .ok_or("Overflow")?;
        let denominator = self
            .denominator
            .checked_mul(other.denominator)
            .ok_or("Overflow")?;
        Ok(Fraction {
            numerator,
            denominator,
        })
    }

    pub fn multiply_scalar(&self, scalar: u64) -> Result<Fraction, &'static str> {
        let numerator = self
            .numerator
            .checked_mul(U256::from(scalar))
            .ok_or("Overflow")?;
        Ok(Fraction {
            numerator,
            denominator: self.denominator,
        })
    }

    /// `self / other` by cross multiplication. No zero guard: the result
    /// carries a zero denominator when `other` has a zero numerator.
    pub fn divide(&self, other: &Fraction) -> Result<Fraction, &'static str> {
        let numerator = self
            .numerator
            .checked_mul(other.denominator)
            .ok_or("Overflow")?;
        let denominator = self
            .denominator
            .checked_mul(other.numerator)
            .ok_or("Overflow")?;
        Ok(Fraction {
            numerator,
            denominator,
        })
    }

    /// Converts to a `Decimal`, reducing by gcd first so that raw-unit
    /// terms (routinely 10^18-scaled on both sides) fit Decimal's 28-digit
    /// range. `None` when the denominator is zero or the reduced terms
    /// still do not fit; callers render that as unavailable.
    pub fn to_decimal(&self) -> Option<Decimal> {
        if self.denominator.is_zero() {
            return None;
        }
        let divisor = gcd(self.numerator, self.denominator);
        let numerator = Decimal::from_str(&(self.numerator / divisor).to_string()).ok()?;
        let denominator = Decimal::from_str(&(self.denominator / divisor).to_string()).ok()?;
        numerator.checked_div(denominator)
    }

    /// Formats to `digits` significant digits with `group_separator`
    /// inserted every three integer digits. Rounds half away from zero.
    pub fn to_significant(&self, digits: u32, group_separator: char) -> Option<String> {
        let value = self.to_decimal()?;
        let rounded = value
            .round_sf_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)?
            .normalize();
        Some(group_digits(&rounded.to_string(), group_separator))
    }

    /// Formats to exactly `places` decimal places with `group_separator`
    /// inserted every three integer digits. Rounds half away from zero.
    pub fn to_fixed(&self, places: u32, group_separator: char) -> Option<String> {
        let value = self.to_decimal()?;
        let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(places);
        Some(group_digits(&rounded.to_string(), group_separator))
    }
}

fn gcd(mut a: U256, mut b: U256) -> U256 {
    while !b.is_zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Inserts `separator` every three digits of the integer part.
fn group_digits(value: &str, separator: char) -> String {
    let (integer, fraction) = match value.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (value, None),
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }

    let mut out = format!("{sign}{grouped}");
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
