use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

/// An exact monetary amount, stored as a signed count of cents.
///
/// Serializes as the bare cent count so totals survive a JSON round trip
/// without floating-point drift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub fn checked_add(self, other: Price) -> Option<Price> {
        self.0.checked_add(other.0).map(Price)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl Sub for Price {
    type Output = Price;

    fn sub(self, rhs: Price) -> Price {
        Price(self.0 - rhs.0)
    }
}

impl Neg for Price {
    type Output = Price;

    fn neg(self) -> Price {
        Price(-self.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
        iter.copied().sum()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// Errors raised when parsing a decimal amount
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    #[error("Empty price")]
    Empty,

    #[error("Invalid price: {0}")]
    Invalid(String),

    #[error("Too many decimal places in price: {0}")]
    TooPrecise(String),

    #[error("Price out of range: {0}")]
    Overflow(String),
}

pub type PriceResult<T> = Result<T, PriceError>;

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> PriceResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, frac) = match unsigned.split_once('.') {
            Some((whole, frac)) => (whole, Some(frac)),
            None => (unsigned, None),
        };

        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

        if !all_digits(whole) {
            return Err(PriceError::Invalid(s.to_string()));
        }

        let frac_cents = match frac {
            None => 0,
            Some(frac) if !all_digits(frac) => return Err(PriceError::Invalid(s.to_string())),
            Some(frac) if frac.len() > 2 => return Err(PriceError::TooPrecise(s.to_string())),
            // "0.5" means fifty cents
            Some(frac) if frac.len() == 1 => frac.parse::<i64>().map_err(|_| PriceError::Invalid(s.to_string()))? * 10,
            Some(frac) => frac.parse::<i64>().map_err(|_| PriceError::Invalid(s.to_string()))?,
        };

        let cents = whole
            .parse::<i64>()
            .ok()
            .and_then(|w| w.checked_mul(100))
            .and_then(|w| w.checked_add(frac_cents))
            .ok_or_else(|| PriceError::Overflow(s.to_string()))?;

        Ok(Price(if negative { -cents } else { cents }))
    }
}
