use std::io;

use clap::{Args, Subcommand};
use storefront::{
    api::StorefrontApi,
    catalog::load_catalog,
    load::LoadState,
    prices::Price,
    products::{NewProduct, ProductId, ProductUpdate},
};

use crate::render;

use super::write_failed;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// Show the catalog
    List,

    /// Show one product
    Show(ShowProductArgs),

    /// Add a product
    Create(CreateProductArgs),

    /// Change a product
    Update(UpdateProductArgs),

    /// Remove a product
    Delete(DeleteProductArgs),
}

#[derive(Debug, Args)]
struct ShowProductArgs {
    /// Product identifier
    id: u64,
}

#[derive(Debug, Args)]
struct CreateProductArgs {
    /// Product name
    #[arg(long)]
    name: String,

    /// Shelf price, e.g. `2.50`
    #[arg(long)]
    price: Price,

    /// Initial stock level
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    stock: i64,

    /// Optional description
    #[arg(long)]
    description: Option<String>,
}

#[derive(Debug, Args)]
struct UpdateProductArgs {
    /// Product identifier
    id: u64,

    /// New name
    #[arg(long)]
    name: Option<String>,

    /// New shelf price
    #[arg(long)]
    price: Option<Price>,

    /// New stock level
    #[arg(long, allow_negative_numbers = true)]
    stock: Option<i64>,

    /// New description
    #[arg(long)]
    description: Option<String>,
}

#[derive(Debug, Args)]
struct DeleteProductArgs {
    /// Product identifier
    id: u64,
}

pub(crate) async fn run<A>(
    command: ProductsCommand,
    api: &A,
    out: &mut impl io::Write,
) -> Result<(), String>
where
    A: StorefrontApi + ?Sized,
{
    match command.command {
        ProductsSubcommand::List => list(api, out).await,
        ProductsSubcommand::Show(args) => show(api, args, out).await,
        ProductsSubcommand::Create(args) => create(api, args, out).await,
        ProductsSubcommand::Update(args) => update(api, args, out).await,
        ProductsSubcommand::Delete(args) => delete(api, args, out).await,
    }
}

async fn list<A>(api: &A, out: &mut impl io::Write) -> Result<(), String>
where
    A: StorefrontApi + ?Sized,
{
    match load_catalog(api).await {
        LoadState::Ready(products) => {
            render::write_catalog(out, &products).map_err(|error| write_failed(&error))
        }
        LoadState::Failed(error) => Err(format!("failed to load products: {error}")),
        LoadState::Awaiting => Ok(()),
    }
}

async fn show<A>(api: &A, args: ShowProductArgs, out: &mut impl io::Write) -> Result<(), String>
where
    A: StorefrontApi + ?Sized,
{
    let product = api
        .get_product(ProductId::new(args.id))
        .await
        .map_err(|error| format!("failed to fetch product: {error}"))?;

    render::write_product(out, &product).map_err(|error| write_failed(&error))
}

async fn create<A>(api: &A, args: CreateProductArgs, out: &mut impl io::Write) -> Result<(), String>
where
    A: StorefrontApi + ?Sized,
{
    let created = api
        .create_product(NewProduct {
            name: args.name,
            description: args.description,
            price: args.price,
            stock_quantity: args.stock,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    writeln!(out, "product_id: {}", created.id).map_err(|error| write_failed(&error))
}

async fn update<A>(api: &A, args: UpdateProductArgs, out: &mut impl io::Write) -> Result<(), String>
where
    A: StorefrontApi + ?Sized,
{
    let update = ProductUpdate {
        name: args.name,
        description: args.description,
        price: args.price,
        stock_quantity: args.stock,
    };

    if update.is_empty() {
        return Err(
            "nothing to update; pass at least one of --name, --price, --stock, --description"
                .to_string(),
        );
    }

    api.update_product(ProductId::new(args.id), update)
        .await
        .map_err(|error| format!("failed to update product: {error}"))?;

    writeln!(out, "product {} updated", args.id).map_err(|error| write_failed(&error))
}

async fn delete<A>(api: &A, args: DeleteProductArgs, out: &mut impl io::Write) -> Result<(), String>
where
    A: StorefrontApi + ?Sized,
{
    api.delete_product(ProductId::new(args.id))
        .await
        .map_err(|error| format!("failed to delete product: {error}"))?;

    writeln!(out, "product {} deleted", args.id).map_err(|error| write_failed(&error))
}
