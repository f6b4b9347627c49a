//! Remote shop API

mod client;
mod config;
mod errors;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    orders::{Order, OrderCreated, OrderDraft, OrderId},
    products::{NewProduct, Product, ProductCreated, ProductId, ProductUpdate},
};

pub use client::HttpStorefrontApi;
pub use config::ApiConfig;
pub use errors::ApiError;

/// Operations the storefront performs against the shop API.
///
/// Futures are not required to be `Send` so the same client runs on a
/// browser event loop and on a Tokio runtime.
#[automock]
#[async_trait(?Send)]
pub trait StorefrontApi {
    /// `GET /products`
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /products/{id}`
    async fn get_product(&self, id: ProductId) -> Result<Product, ApiError>;

    /// `POST /products`
    async fn create_product(&self, product: NewProduct) -> Result<ProductCreated, ApiError>;

    /// `PUT /products/{id}`
    async fn update_product(&self, id: ProductId, update: ProductUpdate) -> Result<(), ApiError>;

    /// `DELETE /products/{id}`
    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError>;

    /// `GET /orders`
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError>;

    /// `GET /orders/{id}`
    async fn get_order(&self, id: OrderId) -> Result<Order, ApiError>;

    /// `POST /orders`
    async fn create_order(&self, draft: OrderDraft) -> Result<OrderCreated, ApiError>;

    /// `PUT /orders/{id}/status`
    async fn update_order_status(&self, id: OrderId, status: String) -> Result<(), ApiError>;
}
