//! Orders

use std::{fmt, num::NonZeroU32, str::FromStr};

use jiff::{Timestamp, civil::DateTime, tz::TimeZone};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::{nullable, prices::Price, products::ProductId};

/// Order identifier assigned by the shop API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Wraps a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Errors raised when turning user input into a [`Quantity`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// Nothing was entered.
    #[error("quantity is required")]
    Empty,

    /// The input is not a whole number.
    #[error("quantity `{0}` is not a whole number")]
    NotANumber(String),

    /// Zero or negative.
    #[error("quantity must be at least {min}, got {0}", min = Quantity::MIN)]
    BelowMinimum(i64),

    /// Larger than the API accepts.
    #[error("quantity {0} is too large")]
    TooLarge(i64),
}

/// Number of units requested for a line item. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// Smallest orderable quantity.
    pub const MIN: u32 = 1;

    /// One unit.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Number of units.
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<i64> for Quantity {
    type Error = QuantityError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < i64::from(Self::MIN) {
            return Err(QuantityError::BelowMinimum(value));
        }

        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(QuantityError::TooLarge(value))
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Err(QuantityError::Empty);
        }

        let value = trimmed
            .parse::<i64>()
            .map_err(|_err| QuantityError::NotANumber(trimmed.to_string()))?;

        Self::try_from(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A purchased line on a stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product that was bought
    pub product_id: ProductId,

    /// Units bought. The shop does not check the sign, so this is kept as stored.
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub quantity: i64,

    /// Unit price captured when the order was placed
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub price_at_purchase: Price,
}

/// Order as returned by `GET /orders` and `GET /orders/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier
    pub id: OrderId,

    /// Name the order was placed under
    #[serde(default)]
    pub customer_name: Option<String>,

    /// When the order was placed. Absent on the single-order endpoint.
    #[serde(default, deserialize_with = "deserialize_order_date")]
    pub order_date: Option<Timestamp>,

    /// Fulfilment status, e.g. `Pending`. Empty when the shop stored none.
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub status: String,

    /// Order total computed by the shop
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub total_price: Price,

    /// Purchased lines, in order
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub items: Vec<LineItem>,
}

/// Order date that matched none of the accepted formats.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized order date `{0}`")]
pub struct OrderDateError(String);

/// Parse an order timestamp.
///
/// Accepts HTTP/RFC 2822 dates (`Tue, 20 Oct 2026 10:15:00 GMT`), RFC 3339
/// timestamps, and offset-less ISO datetimes, which are read as UTC.
///
/// # Errors
///
/// Returns an error when the input matches none of those formats.
pub fn parse_order_date(raw: &str) -> Result<Timestamp, OrderDateError> {
    let trimmed = raw.trim();

    if let Ok(zoned) = jiff::fmt::rfc2822::parse(trimmed) {
        return Ok(zoned.timestamp());
    }

    if let Ok(timestamp) = trimmed.parse::<Timestamp>() {
        return Ok(timestamp);
    }

    trimmed
        .parse::<DateTime>()
        .and_then(|civil| civil.to_zoned(TimeZone::UTC))
        .map(|zoned| zoned.timestamp())
        .map_err(|_err| OrderDateError(raw.to_string()))
}

fn deserialize_order_date<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    parse_order_date(&raw)
        .map(Some)
        .map_err(serde::de::Error::custom)
}

/// One requested line on an [`OrderDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DraftItem {
    /// Product to order
    pub product_id: ProductId,

    /// Units to order
    pub quantity: Quantity,
}

/// Body of `POST /orders`. Built right before submission and dropped after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDraft {
    /// Name to place the order under
    pub customer_name: String,

    /// Requested lines
    pub items: Vec<DraftItem>,
}

impl OrderDraft {
    /// Draft with exactly one line item.
    pub fn single(
        customer_name: impl Into<String>,
        product_id: ProductId,
        quantity: Quantity,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            items: vec![DraftItem {
                product_id,
                quantity,
            }],
        }
    }
}

/// Response of `POST /orders`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderCreated {
    /// Server message
    #[serde(default)]
    pub message: String,

    /// Identifier of the new order
    pub id: OrderId,

    /// Total the shop computed from its current prices
    #[serde(default)]
    pub total_price: Option<Price>,
}

/// Body of `PUT /orders/{id}/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderStatusUpdate {
    /// New status label
    pub status: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn quantity_defaults_to_one() {
        assert_eq!(Quantity::default().get(), 1);
    }

    #[test]
    fn quantity_parses_positive_integers() -> TestResult {
        assert_eq!("3".parse::<Quantity>()?.get(), 3);
        assert_eq!(" 12 ".parse::<Quantity>()?.get(), 12);

        Ok(())
    }

    #[test]
    fn quantity_rejects_zero_and_negatives() {
        assert_eq!("0".parse::<Quantity>(), Err(QuantityError::BelowMinimum(0)));
        assert_eq!(
            "-4".parse::<Quantity>(),
            Err(QuantityError::BelowMinimum(-4))
        );
    }

    #[test]
    fn quantity_rejects_blank_and_non_numeric_input() {
        assert_eq!("  ".parse::<Quantity>(), Err(QuantityError::Empty));
        assert_eq!(
            "two".parse::<Quantity>(),
            Err(QuantityError::NotANumber("two".to_string()))
        );
        assert_eq!(
            "1.5".parse::<Quantity>(),
            Err(QuantityError::NotANumber("1.5".to_string()))
        );
    }

    #[test]
    fn quantity_rejects_values_beyond_u32() {
        let too_large = i64::from(u32::MAX) + 1;

        assert_eq!(
            Quantity::try_from(too_large),
            Err(QuantityError::TooLarge(too_large))
        );
    }

    #[test]
    fn single_draft_serializes_to_order_payload() -> TestResult {
        let draft = OrderDraft::single("Frontend User", ProductId::new(1), "3".parse()?);

        assert_eq!(
            serde_json::to_value(&draft)?,
            json!({
                "customer_name": "Frontend User",
                "items": [{ "product_id": 1, "quantity": 3 }]
            })
        );

        Ok(())
    }

    #[test]
    fn order_deserializes_http_date() -> TestResult {
        let order: Order = serde_json::from_value(json!({
            "id": 5,
            "customer_name": "Frontend User",
            "status": "Pending",
            "total_price": 4.0,
            "order_date": "Tue, 20 Oct 2026 10:15:00 GMT",
            "items": [{ "product_id": 1, "quantity": 2, "price_at_purchase": 2.0 }]
        }))?;

        let expected: Timestamp = "2026-10-20T10:15:00Z".parse()?;

        assert_eq!(order.order_date, Some(expected));
        assert_eq!(order.items.len(), 1, "expected one line item");
        assert_eq!(order.total_price.to_string(), "$4");

        Ok(())
    }

    #[test]
    fn order_without_date_or_status_deserializes() -> TestResult {
        let order: Order = serde_json::from_value(json!({
            "id": 5,
            "items": [{ "product_id": 1, "quantity": 2, "price_at_purchase": 2 }]
        }))?;

        assert_eq!(order.order_date, None);
        assert_eq!(order.status, "");
        assert_eq!(order.customer_name, None);

        Ok(())
    }

    #[test]
    fn order_date_accepts_rfc3339_and_naive_iso() -> TestResult {
        let expected: Timestamp = "2026-10-20T10:15:00Z".parse()?;

        assert_eq!(parse_order_date("2026-10-20T10:15:00+00:00")?, expected);
        assert_eq!(parse_order_date("2026-10-20T10:15:00")?, expected);

        Ok(())
    }

    #[test]
    fn order_listing_tolerates_null_status_and_negative_quantity() -> TestResult {
        let orders: Vec<Order> = serde_json::from_value(json!([
            {
                "id": 1,
                "status": "Shipped",
                "total_price": 4,
                "items": [{ "product_id": 1, "quantity": 2, "price_at_purchase": 2 }]
            },
            {
                "id": 2,
                "customer_name": null,
                "order_date": null,
                "status": null,
                "total_price": null,
                "items": [{ "product_id": 1, "quantity": -2, "price_at_purchase": null }]
            }
        ]))?;

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].status, "Shipped");
        assert_eq!(orders[1].status, "");
        assert_eq!(orders[1].total_price, Price::default());
        assert_eq!(orders[1].items[0].quantity, -2);
        assert_eq!(orders[1].items[0].price_at_purchase, Price::default());

        Ok(())
    }

    #[test]
    fn order_date_rejects_garbage() {
        assert!(parse_order_date("yesterday").is_err());
    }

    #[test]
    fn malformed_order_date_fails_deserialization() {
        let result = serde_json::from_value::<Order>(json!({
            "id": 1,
            "order_date": "not a date",
        }));

        assert!(result.is_err(), "expected malformed date to be rejected");
    }
}
