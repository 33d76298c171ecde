//! Amount type for monetary values that travel as text.
//!
//! The expenses API sends `amount` as a string and makes no promise that the string is
//! numeric. This module provides the `Amount` type, which keeps the wire text verbatim and
//! parses it to a `Decimal` on demand.

use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A monetary amount as it appeared on the wire.
///
/// The raw text is kept verbatim: it is what gets rendered, and duplicate detection compares
/// amounts by exact text equality rather than numeric tolerance. `value()` exposes the parsed
/// number for aggregation; an amount whose text does not parse has no numeric value and
/// contributes nothing to any sum, but is still displayed.
///
/// Equality, ordering and hashing are all over the raw text.
///
/// # Examples
///
/// Parseable text exposes a numeric value:
/// ```
/// # use expense_tracker::model::Amount;
/// # use rust_decimal::Decimal;
/// # use std::str::FromStr;
/// let amount = Amount::new("50.00");
/// assert_eq!(amount.value(), Some(Decimal::from_str("50.00").unwrap()));
/// ```
///
/// Unparseable text is retained but has no value:
/// ```
/// # use expense_tracker::model::Amount;
/// let amount = Amount::new("abc");
/// assert_eq!(amount.value(), None);
/// assert_eq!(amount.to_string(), "abc");
/// ```
///
/// Text equivalency, not value equivalency:
/// ```
/// # use expense_tracker::model::Amount;
/// let a = Amount::new("50");
/// let b = Amount::new("50.00");
/// assert_ne!(a, b);
/// assert_eq!(a.value(), b.value());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount {
    /// The text exactly as it was received or entered.
    raw: String,
}

impl Amount {
    /// Creates a new Amount from the raw wire or input text.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Returns the raw text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parses the raw text to a `Decimal`, or `None` if the text is not numeric.
    ///
    /// Parsing tolerates surrounding whitespace, a leading dollar sign, and commas as
    /// thousands separators, so `-$1,000.00` parses to `-1000.00`. Empty text has no value.
    pub fn value(&self) -> Option<Decimal> {
        let trimmed = self.raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        // Remove a dollar sign, which may follow a minus sign: "-$50.00" or "$50.00"
        let (sign, unsigned) = match trimmed.strip_prefix('-') {
            Some(after_minus) => ("-", after_minus),
            None => ("", trimmed),
        };
        let without_dollar = unsigned.strip_prefix('$').unwrap_or(unsigned);

        // Remove commas (thousand separators)
        let cleaned = format!("{sign}{}", without_dollar.replace(',', ""));

        Decimal::from_str(&cleaned).ok()
    }

    /// Returns true if the raw text parses to a number.
    pub fn is_numeric(&self) -> bool {
        self.value().is_some()
    }
}

impl FromStr for Amount {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Amount::new(s))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Serialize as the raw text, exactly as it arrived
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // The API should send a string, but some servers send back a bare JSON number for
        // records they have normalized. Accept both.
        deserializer.deserialize_any(AmountVisitor)
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or number representing a monetary amount")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Amount::new(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Amount::new(v.to_string()))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Amount::new(v.to_string()))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Amount::new(v.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let amount = Amount::new("50.00");
        assert_eq!(amount.value(), Some(Decimal::from_str("50.00").unwrap()));
    }

    #[test]
    fn test_parse_negative() {
        let amount = Amount::new("-50.00");
        assert_eq!(amount.value(), Some(Decimal::from_str("-50.00").unwrap()));
    }

    #[test]
    fn test_parse_with_dollar_sign() {
        let amount = Amount::new("$50.00");
        assert_eq!(amount.value(), Some(Decimal::from_str("50.00").unwrap()));
    }

    #[test]
    fn test_parse_negative_with_dollar_sign() {
        let amount = Amount::new("-$50.00");
        assert_eq!(amount.value(), Some(Decimal::from_str("-50.00").unwrap()));
    }

    #[test]
    fn test_parse_with_commas() {
        let amount = Amount::new("1,234,567.89");
        assert_eq!(
            amount.value(),
            Some(Decimal::from_str("1234567.89").unwrap())
        );
    }

    #[test]
    fn test_parse_whitespace() {
        let amount = Amount::new("  $50.00  ");
        assert_eq!(amount.value(), Some(Decimal::from_str("50.00").unwrap()));
    }

    #[test]
    fn test_parse_empty_string() {
        let amount = Amount::new("");
        assert_eq!(amount.value(), None);
        assert!(!amount.is_numeric());
    }

    #[test]
    fn test_parse_not_a_number() {
        let amount = Amount::new("abc");
        assert_eq!(amount.value(), None);
    }

    #[test]
    fn test_raw_text_is_retained() {
        let amount = Amount::new("not-a-number");
        assert_eq!(amount.raw(), "not-a-number");
        assert_eq!(amount.to_string(), "not-a-number");
    }

    #[test]
    fn test_equality_is_textual() {
        let a = Amount::new("50");
        let b = Amount::new("50.00");
        assert_ne!(a, b);
        assert_eq!(a.value(), b.value());
        assert_eq!(Amount::new("50"), Amount::new("50"));
    }

    #[test]
    fn test_serialize() {
        let amount = Amount::new("50.00");
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"50.00\"");
    }

    #[test]
    fn test_deserialize_string() {
        let amount: Amount = serde_json::from_str("\"50.00\"").unwrap();
        assert_eq!(amount.raw(), "50.00");
    }

    #[test]
    fn test_deserialize_number() {
        let amount: Amount = serde_json::from_str("50.5").unwrap();
        assert_eq!(amount.value(), Some(Decimal::from_str("50.5").unwrap()));
    }

    #[test]
    fn test_deserialize_integer() {
        let amount: Amount = serde_json::from_str("50").unwrap();
        assert_eq!(amount.raw(), "50");
    }

    #[test]
    fn test_deserialize_unparseable_is_not_an_error() {
        let amount: Amount = serde_json::from_str("\"twelve dollars\"").unwrap();
        assert_eq!(amount.value(), None);
        assert_eq!(amount.raw(), "twelve dollars");
    }
}
