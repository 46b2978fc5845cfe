//! Monetary amounts.
//!
//! Prices are held in whole cents so differences are exact. Whole-dollar
//! amounts render without decimals (`22050`); anything else renders with
//! exactly two (`22050.50`).

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Sub;

/// An exact monetary amount in US dollars, stored as cents.
///
/// May be negative: the difference between two prices is also a `Price`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price {
    cents: i64,
}

impl Price {
    /// Creates a price from whole dollars.
    pub const fn dollars(dollars: i64) -> Self {
        Self {
            cents: dollars * 100,
        }
    }

    /// Creates a price from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Returns the amount in cents.
    pub const fn cents(self) -> i64 {
        self.cents
    }

    /// Returns true if the amount has no fractional cents part.
    pub const fn is_whole_dollars(self) -> bool {
        self.cents % 100 == 0
    }

    /// Returns the amount as fractional dollars.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_dollars_f64(self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl Sub for Price {
    type Output = Price;

    fn sub(self, rhs: Price) -> Price {
        Price::from_cents(self.cents - rhs.cents)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole_dollars() {
            return write!(f, "{}", self.cents / 100);
        }
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole_dollars() {
            serializer.serialize_i64(self.cents / 100)
        } else {
            serializer.serialize_f64(self.as_dollars_f64())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_whole_dollars() {
        assert_eq!(Price::dollars(22050).to_string(), "22050");
        assert_eq!(Price::dollars(0).to_string(), "0");
    }

    #[test]
    fn test_display_fractional() {
        assert_eq!(Price::from_cents(2_205_050).to_string(), "22050.50");
        assert_eq!(Price::from_cents(101).to_string(), "1.01");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Price::dollars(-4910).to_string(), "-4910");
        assert_eq!(Price::from_cents(-50).to_string(), "-0.50");
        assert_eq!(Price::from_cents(-1_234).to_string(), "-12.34");
    }

    #[test]
    fn test_sub_is_exact() {
        let delta = Price::dollars(26960) - Price::dollars(22050);
        assert_eq!(delta, Price::dollars(4910));

        let back = Price::dollars(22050) - Price::dollars(26960);
        assert_eq!(back.cents(), -491_000);
    }

    #[test]
    fn test_ordering() {
        assert!(Price::dollars(27205) > Price::dollars(26960));
        assert!(Price::dollars(-1) < Price::default());
    }
}
