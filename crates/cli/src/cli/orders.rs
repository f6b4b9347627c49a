use std::io;

use clap::{Args, Subcommand};
use futures::join;
use storefront::{
    api::StorefrontApi,
    catalog::{DEFAULT_CUSTOMER_NAME, confirmation, submit_order},
    history::{OrderHistory, OrderSummary, ProductDirectory},
    load::LoadState,
    orders::{OrderId, Quantity},
    products::ProductId,
};
use tracing::warn;

use crate::render;

use super::write_failed;

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// Show order history
    List,

    /// Show one order
    Show(ShowOrderArgs),

    /// Order a product
    Place(PlaceOrderArgs),

    /// Change an order's status
    Status(OrderStatusArgs),
}

#[derive(Debug, Args)]
struct ShowOrderArgs {
    /// Order identifier
    id: u64,
}

#[derive(Debug, Args)]
struct PlaceOrderArgs {
    /// Product to order
    #[arg(long)]
    product: u64,

    /// Units to order (at least 1)
    #[arg(long, default_value = "1")]
    quantity: Quantity,

    /// Name to place the order under
    #[arg(long, default_value = DEFAULT_CUSTOMER_NAME)]
    customer_name: String,
}

#[derive(Debug, Args)]
struct OrderStatusArgs {
    /// Order identifier
    id: u64,

    /// New status, e.g. `Shipped`
    status: String,
}

pub(crate) async fn run<A>(
    command: OrdersCommand,
    api: &A,
    out: &mut impl io::Write,
) -> Result<(), String>
where
    A: StorefrontApi + ?Sized,
{
    match command.command {
        OrdersSubcommand::List => list(api, out).await,
        OrdersSubcommand::Show(args) => show(api, args, out).await,
        OrdersSubcommand::Place(args) => place(api, args, out).await,
        OrdersSubcommand::Status(args) => status(api, args, out).await,
    }
}

async fn list<A>(api: &A, out: &mut impl io::Write) -> Result<(), String>
where
    A: StorefrontApi + ?Sized,
{
    let history = OrderHistory::load(api).await;

    if let Some(error) = history.orders.error() {
        return Err(format!("failed to load orders: {error}"));
    }

    render::write_history(out, &history.summaries()).map_err(|error| write_failed(&error))
}

async fn show<A>(api: &A, args: ShowOrderArgs, out: &mut impl io::Write) -> Result<(), String>
where
    A: StorefrontApi + ?Sized,
{
    let (order, products) = join!(api.get_order(OrderId::new(args.id)), api.list_products());

    let order = order.map_err(|error| format!("failed to fetch order: {error}"))?;

    let products = match LoadState::from_result(products) {
        LoadState::Ready(products) => products,
        LoadState::Failed(error) => {
            warn!("product names unavailable: {error}");

            Vec::new()
        }
        LoadState::Awaiting => Vec::new(),
    };

    let summary = OrderSummary::new(&order, &ProductDirectory::new(&products));

    render::write_order(out, &summary).map_err(|error| write_failed(&error))
}

async fn place<A>(api: &A, args: PlaceOrderArgs, out: &mut impl io::Write) -> Result<(), String>
where
    A: StorefrontApi + ?Sized,
{
    let created = submit_order(
        api,
        &args.customer_name,
        ProductId::new(args.product),
        args.quantity,
    )
    .await
    .map_err(|error| format!("failed to place order: {error}"))?;

    writeln!(out, "{}", confirmation(&created)).map_err(|error| write_failed(&error))?;

    if let Some(total) = created.total_price {
        writeln!(out, "Total: {total}").map_err(|error| write_failed(&error))?;
    }

    Ok(())
}

async fn status<A>(api: &A, args: OrderStatusArgs, out: &mut impl io::Write) -> Result<(), String>
where
    A: StorefrontApi + ?Sized,
{
    api.update_order_status(OrderId::new(args.id), args.status.clone())
        .await
        .map_err(|error| format!("failed to update order status: {error}"))?;

    writeln!(out, "order {} status set to {}", args.id, args.status)
        .map_err(|error| write_failed(&error))
}
