//! Record store access
//!
//! The remote record API exposes two collections (products and refrigeration
//! equipment) behind plain CRUD endpoints. Services depend on the `RecordApi`
//! trait so view logic can be exercised against a mock store.

pub mod http;
pub mod local;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{CreateEquipment, Equipment, Product},
};

pub use http::RecordStoreClient;
pub use local::LocalReferenceStore;

/// CRUD surface of the remote record store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordApi: Send + Sync {
    /// Fetch the full product collection
    async fn list_products(&self) -> AppResult<Vec<Product>>;

    /// Create a product; the client supplies the id
    async fn create_product(&self, product: &Product) -> AppResult<Product>;

    /// Delete a product; `NotFound` when the store reports 404
    async fn delete_product(&self, id: &str) -> AppResult<()>;

    /// Fetch the full equipment collection
    async fn list_equipment(&self) -> AppResult<Vec<Equipment>>;

    /// Create an equipment record; the store assigns the id
    async fn create_equipment(&self, data: &CreateEquipment) -> AppResult<Equipment>;

    /// Delete an equipment record; `NotFound` when the store reports 404
    async fn delete_equipment(&self, id: i64) -> AppResult<()>;
}
