//! Prices

use std::{fmt, ops::Deref, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A price as the shop API reports it: a plain JSON number in dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price {
    value: Decimal,
}

impl Price {
    /// Creates a new Price
    pub fn new(value: Decimal) -> Self {
        Price { value }
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Price::new(value)
    }
}

impl Deref for Price {
    type Target = Decimal;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.value.normalize())
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    /// Parses `2.50` or `$2.50`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let amount = trimmed.strip_prefix('$').unwrap_or(trimmed);

        Decimal::from_str(amount.trim()).map(Price::new)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.value, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer).map(Price::new)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn price_derefs_to_decimal() {
        let price = Price::new(Decimal::new(250, 2));

        assert_eq!(*price, Decimal::new(25, 1));
    }

    #[test]
    fn whole_prices_display_without_fraction() {
        assert_eq!(Price::new(Decimal::new(2, 0)).to_string(), "$2");
        assert_eq!(Price::new(Decimal::new(200, 2)).to_string(), "$2");
    }

    #[test]
    fn fractional_prices_display_trimmed() {
        assert_eq!(Price::new(Decimal::new(250, 2)).to_string(), "$2.5");
        assert_eq!(Price::new(Decimal::new(1999, 2)).to_string(), "$19.99");
    }

    #[test]
    fn parses_with_or_without_dollar_sign() -> TestResult {
        assert_eq!("2.50".parse::<Price>()?, Price::new(Decimal::new(250, 2)));
        assert_eq!(" $3 ".parse::<Price>()?, Price::new(Decimal::new(3, 0)));
        assert!("three".parse::<Price>().is_err(), "words are not prices");

        Ok(())
    }

    #[test]
    fn deserializes_integer_and_float_numbers() -> TestResult {
        let whole: Price = serde_json::from_str("2")?;
        let fractional: Price = serde_json::from_str("19.99")?;

        assert_eq!(whole.to_string(), "$2");
        assert_eq!(fractional.to_string(), "$19.99");

        Ok(())
    }

    #[test]
    fn serializes_as_json_number() -> TestResult {
        let json = serde_json::to_value(Price::new(Decimal::new(350, 2)))?;

        assert_eq!(json, serde_json::json!(3.5));

        Ok(())
    }
}
