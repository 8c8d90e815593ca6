//! Fixed-point money. Amounts are integer cents end to end; rounding to two
//! decimals happens only when an amount is rendered.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::LedgerError;

/// Signed money amount stored as integer cents.
///
/// Entry amounts are validated non-negative before they reach a ledger; the
/// sign exists so balances can go below zero without a separate type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Creates an amount from integer cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Raw value in cents.
    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Checked addition, `None` on overflow.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Checked subtraction, `None` on overflow.
    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    /// Renders the amount with a currency symbol prefix, e.g. `₹12.34`.
    pub fn format_with(self, symbol: &str) -> String {
        format!("{}{}", symbol, self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 += rhs.0;
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        Amount(self.0 - rhs.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Amount) {
        self.0 -= rhs.0;
    }
}

impl Neg for Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        Amount(-self.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, |acc, amount| acc + *amount)
    }
}

impl FromStr for Amount {
    type Err = LedgerError;

    /// Parses a decimal string into cents.
    ///
    /// Accepts an optional leading sign and `.` or `,` as the decimal
    /// separator; rejects more than two fractional digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| LedgerError::InvalidAmount(format!("{} `{}`", reason, s));

        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let body = body.replace(',', ".");
        let (units_str, frac_str) = match body.split_once('.') {
            Some((units, frac)) => (units, frac),
            None => (body.as_str(), ""),
        };

        if units_str.is_empty() && frac_str.is_empty() {
            return Err(LedgerError::InvalidAmount("empty amount".into()));
        }
        let all_digits = |value: &str| value.chars().all(|c| c.is_ascii_digit());
        if !all_digits(units_str) || !all_digits(frac_str) {
            return Err(invalid("not a decimal number:"));
        }
        if frac_str.len() > 2 {
            return Err(invalid("more than two decimal places:"));
        }

        let units: i64 = if units_str.is_empty() {
            0
        } else {
            units_str.parse().map_err(|_| invalid("amount too large:"))?
        };
        let cents: i64 = match frac_str.len() {
            0 => 0,
            1 => frac_str.parse::<i64>().map_err(|_| invalid("not a decimal number:"))? * 10,
            _ => frac_str.parse::<i64>().map_err(|_| invalid("not a decimal number:"))?,
        };

        let total = units
            .checked_mul(100)
            .and_then(|value| value.checked_add(cents))
            .ok_or_else(|| invalid("amount too large:"))?;
        let signed = if negative {
            total.checked_neg().ok_or_else(|| invalid("amount too large:"))?
        } else {
            total
        };
        Ok(Amount(signed))
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AmountVisitor)
    }
}

/// Persisted amounts may be decimal strings or plain JSON numbers; both
/// collapse to cents here.
struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string or a number of currency units")
    }

    fn visit_str<E>(self, value: &str) -> Result<Amount, E>
    where
        E: de::Error,
    {
        value.parse().map_err(E::custom)
    }

    fn visit_f64<E>(self, value: f64) -> Result<Amount, E>
    where
        E: de::Error,
    {
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return Err(E::custom(format!("amount out of range: {}", value)));
        }
        Ok(Amount(cents as i64))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Amount, E>
    where
        E: de::Error,
    {
        value
            .checked_mul(100)
            .map(Amount)
            .ok_or_else(|| E::custom(format!("amount out of range: {}", value)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Amount, E>
    where
        E: de::Error,
    {
        i64::try_from(value)
            .ok()
            .and_then(|units| units.checked_mul(100))
            .map(Amount)
            .ok_or_else(|| E::custom(format!("amount out of range: {}", value)))
    }
}
