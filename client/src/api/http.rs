//! reqwest client for the inventory REST API

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use shared::{NewProduct, OneOrMany, Product, Warehouse};

use super::InventoryApi;
use crate::error::{ClientError, ClientResult, ErrorBody};

/// HTTP implementation of [`InventoryApi`]
#[derive(Clone)]
pub struct HttpInventoryApi {
    client: Client,
    base_url: String,
}

impl HttpInventoryApi {
    /// Create a new client for the API rooted at `base_url`
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a new client reusing an existing reqwest `Client`
    pub fn with_client(client: Client, base_url: &str) -> ClientResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        Url::parse(base_url).map_err(|e| {
            ClientError::Configuration(format!("Invalid API base URL '{}': {}", base_url, e))
        })?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn warehouses_url(&self) -> String {
        format!("{}/almacenes", self.base_url)
    }

    pub fn products_url(&self) -> String {
        format!("{}/inventario/productos", self.base_url)
    }

    /// Turn a response into `T`, mapping non-success statuses to
    /// [`ClientError::Server`] with the body's `message` when present
    async fn read_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: ErrorBody::message_from(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

impl InventoryApi for HttpInventoryApi {
    async fn list_warehouses(&self) -> ClientResult<Vec<Warehouse>> {
        let url = self.warehouses_url();
        tracing::debug!(%url, "Fetching warehouses");

        let response = self.client.get(&url).send().await?;
        Self::read_json(response).await
    }

    async fn list_products(&self, warehouse_id: i64) -> ClientResult<Vec<Product>> {
        let url = self.products_url();
        tracing::debug!(%url, warehouse_id, "Fetching products");

        let response = self
            .client
            .get(&url)
            .query(&[("almacenId", warehouse_id)])
            .send()
            .await?;

        let body: OneOrMany<Product> = Self::read_json(response).await?;
        Ok(body.into_vec())
    }

    async fn create_product(&self, product: &NewProduct) -> ClientResult<Product> {
        let url = self.products_url();
        tracing::debug!(%url, code = %product.code, "Creating product");

        let response = self.client.post(&url).json(product).send().await?;
        Self::read_json(response).await
    }
}
