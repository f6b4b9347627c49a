//! Catalog view model: product listing, quantity entry, and order submission.

use std::fmt;

use tracing::{info, warn};

use crate::{
    api::{ApiError, StorefrontApi},
    load::LoadState,
    orders::{OrderCreated, OrderDraft, Quantity, QuantityError},
    prices::Price,
    products::{Product, ProductId},
};

/// Name orders from the catalog are placed under.
pub const DEFAULT_CUSTOMER_NAME: &str = "Frontend User";

/// Display model for one catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    /// Product identifier
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Shelf price
    pub price: Price,

    /// Units in stock
    pub stock_quantity: i64,
}

impl From<&Product> for CatalogRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            stock_quantity: product.stock_quantity,
        }
    }
}

impl fmt::Display for CatalogRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (Stock: {})",
            self.name, self.price, self.stock_quantity
        )
    }
}

/// Fetch the product list for the catalog.
pub async fn load_catalog<A>(api: &A) -> LoadState<Vec<Product>>
where
    A: StorefrontApi + ?Sized,
{
    let result = api.list_products().await;

    if let Err(error) = &result {
        warn!("failed to load catalog: {error}");
    }

    LoadState::from_result(result)
}

/// Controlled state behind a quantity field.
///
/// Holds whatever the user typed so the field can show it back verbatim;
/// [`QuantityInput::quantity`] decides whether it is submittable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityInput {
    raw: String,
}

impl Default for QuantityInput {
    fn default() -> Self {
        Self {
            raw: Quantity::default().to_string(),
        }
    }
}

impl QuantityInput {
    /// Current field text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Replace the field text.
    pub fn set(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
    }

    /// Parsed quantity.
    ///
    /// # Errors
    ///
    /// Returns an error when the text is empty, not a whole number, or below one.
    pub fn quantity(&self) -> Result<Quantity, QuantityError> {
        self.raw.parse()
    }
}

/// Progress of an order submission from a catalog row.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Submission {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// Request sent, no answer yet. Submitting again is blocked.
    InFlight,

    /// The shop accepted the order.
    Placed(OrderCreated),

    /// The shop or the network refused the order.
    Failed(String),
}

impl Submission {
    /// Fold a submission result into a state.
    pub fn from_result(result: Result<OrderCreated, ApiError>) -> Self {
        match result {
            Ok(created) => Self::Placed(created),
            Err(error) => Self::Failed(error.to_string()),
        }
    }

    /// Whether a request is outstanding.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// Whether the submit action should be enabled for `input`.
    pub fn can_submit(&self, input: &QuantityInput) -> bool {
        !self.is_in_flight() && input.quantity().is_ok()
    }

    /// Text to surface to the user for the current state.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Idle | Self::InFlight => None,
            Self::Placed(created) => Some(confirmation(created)),
            Self::Failed(error) => Some(format!("Order failed: {error}")),
        }
    }
}

/// Confirmation shown once an order is placed.
pub fn confirmation(created: &OrderCreated) -> String {
    format!("Order placed! Order ID: {}", created.id)
}

/// Build a one-line draft for `product_id` and send it to the shop.
///
/// Stock is not checked here; the shop decides whether to accept.
///
/// # Errors
///
/// Returns the API error when the order could not be created.
pub async fn submit_order<A>(
    api: &A,
    customer_name: &str,
    product_id: ProductId,
    quantity: Quantity,
) -> Result<OrderCreated, ApiError>
where
    A: StorefrontApi + ?Sized,
{
    let draft = OrderDraft::single(customer_name, product_id, quantity);

    info!(%product_id, %quantity, "submitting order");

    let created = api.create_order(draft).await?;

    info!(order_id = %created.id, "order placed");

    Ok(created)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        api::MockStorefrontApi,
        orders::{DraftItem, OrderId},
    };

    use super::*;

    fn pen() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Pen".to_string(),
            description: None,
            price: Price::new(Decimal::new(2, 0)),
            stock_quantity: 10,
        }
    }

    fn created(id: u64) -> OrderCreated {
        OrderCreated {
            message: "Order created".to_string(),
            id: OrderId::new(id),
            total_price: None,
        }
    }

    #[test]
    fn row_renders_name_price_and_stock() {
        assert_eq!(CatalogRow::from(&pen()).to_string(), "Pen - $2 (Stock: 10)");
    }

    #[test]
    fn quantity_input_defaults_to_one() -> TestResult {
        let input = QuantityInput::default();

        assert_eq!(input.raw(), "1");
        assert_eq!(input.quantity()?, Quantity::ONE);

        Ok(())
    }

    #[test]
    fn zero_or_negative_quantity_is_not_submittable() {
        let mut input = QuantityInput::default();
        let idle = Submission::Idle;

        input.set("0");
        assert!(!idle.can_submit(&input), "zero should block submission");

        input.set("-2");
        assert!(!idle.can_submit(&input), "negative should block submission");

        input.set("");
        assert!(!idle.can_submit(&input), "blank should block submission");

        input.set("2");
        assert!(idle.can_submit(&input), "two should be submittable");
    }

    #[test]
    fn in_flight_submission_blocks_resubmit() {
        let input = QuantityInput::default();

        assert!(!Submission::InFlight.can_submit(&input), "in-flight should block");
        assert!(
            Submission::Failed("boom".to_string()).can_submit(&input),
            "failure should allow retry"
        );
    }

    #[test]
    fn placed_submission_surfaces_order_id() {
        let placed = Submission::from_result(Ok(created(17)));

        assert_eq!(
            placed.message().as_deref(),
            Some("Order placed! Order ID: 17")
        );
    }

    #[test]
    fn failed_submission_surfaces_error() {
        let failed = Submission::from_result(Err(ApiError::Status {
            method: "POST".to_string(),
            path: "/orders".to_string(),
            status: 404,
            body: String::new(),
        }));

        assert!(
            failed
                .message()
                .is_some_and(|message| message.starts_with("Order failed:")),
            "expected failure message, got {failed:?}"
        );
    }

    #[tokio::test]
    async fn submit_sends_exactly_one_line_item() -> TestResult {
        let quantity: Quantity = "3".parse()?;
        let expected = OrderDraft {
            customer_name: "Frontend User".to_string(),
            items: vec![DraftItem {
                product_id: ProductId::new(1),
                quantity,
            }],
        };

        let mut api = MockStorefrontApi::new();

        api.expect_create_order()
            .once()
            .withf(move |draft| *draft == expected)
            .return_once(|_| Ok(created(5)));

        api.expect_list_products().never();
        api.expect_list_orders().never();

        let result =
            submit_order(&api, DEFAULT_CUSTOMER_NAME, ProductId::new(1), quantity).await?;

        assert_eq!(result.id, OrderId::new(5));

        Ok(())
    }

    #[tokio::test]
    async fn submit_propagates_api_failure() {
        let mut api = MockStorefrontApi::new();

        api.expect_create_order().once().return_once(|_| {
            Err(ApiError::Status {
                method: "POST".to_string(),
                path: "/orders".to_string(),
                status: 404,
                body: "Not Found".to_string(),
            })
        });

        let result = submit_order(&api, DEFAULT_CUSTOMER_NAME, ProductId::new(99), Quantity::ONE)
            .await;

        assert_eq!(result.err().and_then(|error| error.status()), Some(404));
    }

    #[tokio::test]
    async fn load_catalog_reports_ready_products() {
        let mut api = MockStorefrontApi::new();

        api.expect_list_products()
            .once()
            .return_once(|| Ok(vec![pen()]));

        let state = load_catalog(&api).await;

        assert_eq!(state.ready().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn load_catalog_reports_failure() {
        let mut api = MockStorefrontApi::new();

        api.expect_list_products().once().return_once(|| {
            Err(ApiError::InvalidBaseUrl {
                url: "nope".to_string(),
                reason: "relative URL without a base".to_string(),
            })
        });

        let state = load_catalog(&api).await;

        assert!(
            state.error().is_some_and(|message| message.contains("nope")),
            "expected failure state, got {state:?}"
        );
    }
}
