//! Order history view model.
//!
//! Orders from the shop only carry product ids, so each line is joined back
//! to a product name through a [`ProductDirectory`]. Prices always come from
//! the line itself; the live product price is never consulted.

use std::fmt;

use futures::join;
use rustc_hash::FxHashMap;
use tracing::warn;

use crate::{
    api::StorefrontApi,
    load::LoadState,
    orders::{LineItem, Order, OrderId},
    prices::Price,
    products::{Product, ProductId},
};

/// Name shown for lines whose product is not in the catalog.
pub const UNKNOWN_PRODUCT: &str = "Unknown product";

/// Product id -> name lookup, built once per render.
#[derive(Debug, Clone, Default)]
pub struct ProductDirectory<'a> {
    names: FxHashMap<ProductId, &'a str>,
}

impl<'a> ProductDirectory<'a> {
    /// Index `products` by id. When an id repeats, the first product wins.
    pub fn new(products: &'a [Product]) -> Self {
        let mut names = FxHashMap::default();

        for product in products {
            names.entry(product.id).or_insert(product.name.as_str());
        }

        Self { names }
    }

    /// Name for `id`, or [`UNKNOWN_PRODUCT`].
    pub fn name_of(&self, id: ProductId) -> &'a str {
        self.names.get(&id).copied().unwrap_or(UNKNOWN_PRODUCT)
    }

    /// Number of indexed products.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no products are indexed.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Display model for one order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSummary {
    /// Resolved product name
    pub name: String,

    /// Units bought
    pub quantity: i64,

    /// Unit price captured at purchase
    pub price_at_purchase: Price,
}

impl LineSummary {
    /// Resolve `item` against `directory`.
    pub fn new(item: &LineItem, directory: &ProductDirectory<'_>) -> Self {
        Self {
            name: directory.name_of(item.product_id).to_string(),
            quantity: item.quantity,
            price_at_purchase: item.price_at_purchase,
        }
    }
}

impl fmt::Display for LineSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} × {} (at {})",
            self.name, self.quantity, self.price_at_purchase
        )
    }
}

/// Display model for one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    /// Order identifier
    pub id: OrderId,

    /// Order date as `YYYY-MM-DD` (UTC), when known
    pub date: Option<String>,

    /// Status label
    pub status: String,

    /// Order total
    pub total_price: Price,

    /// Resolved lines
    pub lines: Vec<LineSummary>,
}

impl OrderSummary {
    /// Build the display model for `order`.
    pub fn new(order: &Order, directory: &ProductDirectory<'_>) -> Self {
        Self {
            id: order.id,
            date: order
                .order_date
                .map(|timestamp| timestamp.strftime("%Y-%m-%d").to_string()),
            status: order.status.clone(),
            total_price: order.total_price,
            lines: order
                .items
                .iter()
                .map(|item| LineSummary::new(item, directory))
                .collect(),
        }
    }

    /// Heading line, e.g. `Order #5`.
    pub fn title(&self) -> String {
        format!("Order #{}", self.id)
    }
}

/// Resolve every order against `products`.
pub fn summarize(orders: &[Order], products: &[Product]) -> Vec<OrderSummary> {
    let directory = ProductDirectory::new(products);

    orders
        .iter()
        .map(|order| OrderSummary::new(order, &directory))
        .collect()
}

/// The two independently loaded collections behind the history view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderHistory {
    /// Result of `GET /orders`
    pub orders: LoadState<Vec<Order>>,

    /// Result of `GET /products`
    pub products: LoadState<Vec<Product>>,
}

impl OrderHistory {
    /// Fetch orders and products concurrently.
    pub async fn load<A>(api: &A) -> Self
    where
        A: StorefrontApi + ?Sized,
    {
        let (orders, products) = join!(api.list_orders(), api.list_products());

        if let Err(error) = &orders {
            warn!("failed to load orders: {error}");
        }

        if let Err(error) = &products {
            warn!("failed to load products for order history: {error}");
        }

        Self {
            orders: LoadState::from_result(orders),
            products: LoadState::from_result(products),
        }
    }

    /// Summaries for whatever has loaded so far.
    ///
    /// Until products arrive, every line resolves to [`UNKNOWN_PRODUCT`].
    pub fn summaries(&self) -> Vec<OrderSummary> {
        let Some(orders) = self.orders.ready() else {
            return Vec::new();
        };

        let products = self.products.ready().map_or(&[][..], Vec::as_slice);

        summarize(orders, products)
    }
}
