//! Inventory API access
//!
//! Screens talk to the backend only through [`InventoryApi`]; the reqwest
//! implementation lives in [`http`].

use std::future::Future;

use shared::{NewProduct, Product, Warehouse};

use crate::error::ClientResult;

pub mod http;

pub use http::HttpInventoryApi;

/// The three operations of the external inventory API
///
/// Each call is a single request: no retry, no batching, no caching.
pub trait InventoryApi {
    /// List every warehouse
    fn list_warehouses(&self) -> impl Future<Output = ClientResult<Vec<Warehouse>>> + Send;

    /// List the products stocked in one warehouse
    fn list_products(
        &self,
        warehouse_id: i64,
    ) -> impl Future<Output = ClientResult<Vec<Product>>> + Send;

    /// Create a product and return the stored record
    fn create_product(
        &self,
        product: &NewProduct,
    ) -> impl Future<Output = ClientResult<Product>> + Send;
}
