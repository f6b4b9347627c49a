//! HTTP implementation of the shop API.

use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    orders::{Order, OrderCreated, OrderDraft, OrderId, OrderStatusUpdate},
    products::{NewProduct, Product, ProductCreated, ProductId, ProductUpdate},
};

use super::{ApiConfig, ApiError, StorefrontApi};

/// [`StorefrontApi`] over HTTP + JSON.
#[derive(Debug, Clone)]
pub struct HttpStorefrontApi {
    config: ApiConfig,
    http: Client,
}

impl HttpStorefrontApi {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Method::GET, path, None::<&()>).await?;

        decode(path, response).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        debug!(%method, path, "sending shop API request");

        let mut request = self
            .http
            .request(method.clone(), self.config.endpoint(path));

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|source| {
            warn!(%method, path, "shop API unreachable: {source}");

            ApiError::Network {
                path: path.to_string(),
                source,
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            warn!(%method, path, %status, "shop API rejected request");

            return Err(ApiError::Status {
                method: method.to_string(),
                path: path.to_string(),
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
    let text = response.text().await.map_err(|source| ApiError::Network {
        path: path.to_string(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| {
        warn!(path, "shop API returned malformed payload: {source}");

        ApiError::Decode {
            path: path.to_string(),
            source,
        }
    })
}

#[async_trait(?Send)]
impl StorefrontApi for HttpStorefrontApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.fetch("/products").await
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        self.fetch(&format!("/products/{id}")).await
    }

    async fn create_product(&self, product: NewProduct) -> Result<ProductCreated, ApiError> {
        let path = "/products";
        let response = self.send(Method::POST, path, Some(&product)).await?;

        decode(path, response).await
    }

    async fn update_product(&self, id: ProductId, update: ProductUpdate) -> Result<(), ApiError> {
        self.send(Method::PUT, &format!("/products/{id}"), Some(&update))
            .await
            .map(drop)
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        self.send(Method::DELETE, &format!("/products/{id}"), None::<&()>)
            .await
            .map(drop)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.fetch("/orders").await
    }

    async fn get_order(&self, id: OrderId) -> Result<Order, ApiError> {
        self.fetch(&format!("/orders/{id}")).await
    }

    async fn create_order(&self, draft: OrderDraft) -> Result<OrderCreated, ApiError> {
        let path = "/orders";
        let response = self.send(Method::POST, path, Some(&draft)).await?;

        decode(path, response).await
    }

    async fn update_order_status(&self, id: OrderId, status: String) -> Result<(), ApiError> {
        self.send(
            Method::PUT,
            &format!("/orders/{id}/status"),
            Some(&OrderStatusUpdate { status }),
        )
        .await
        .map(drop)
    }
}
