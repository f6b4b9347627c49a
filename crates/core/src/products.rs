//! Products

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{nullable, prices::Price};

/// Product identifier assigned by the shop API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Wraps a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Product as listed by `GET /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Display name
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub name: String,

    /// Free-form description, when the shop has one
    #[serde(default)]
    pub description: Option<String>,

    /// Current shelf price
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub price: Price,

    /// Units in stock. The shop decrements this on every order, so it can go negative.
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub stock_quantity: i64,
}

/// Body of `POST /products`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    /// Display name
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Shelf price
    pub price: Price,

    /// Initial stock level
    pub stock_quantity: i64,
}

/// Body of `PUT /products/{id}`. Omitted fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductUpdate {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,

    /// New stock level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
}

impl ProductUpdate {
    /// Whether the update would leave the product unchanged.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock_quantity.is_none()
    }
}

/// Response of `POST /products`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductCreated {
    /// Server message
    #[serde(default)]
    pub message: String,

    /// Identifier of the new product
    pub id: ProductId,
}
