//! Storefront client: typed models for the remote shop API, an HTTP client,
//! and the view models behind the catalog and order-history screens.

pub mod api;
pub mod catalog;
pub mod history;
pub mod load;
mod nullable;
pub mod orders;
pub mod prices;
pub mod products;
