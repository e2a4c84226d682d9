//! Product catalog view model for the inventory view

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{CreateProduct, Product},
    store::RecordApi,
};

/// The inventory view shows at most the first six products
pub const CATALOG_LIMIT: usize = 6;

pub struct ProductCatalog {
    store: Arc<dyn RecordApi>,
    items: Vec<Product>,
    inspected: Option<Product>,
}

impl ProductCatalog {
    pub fn new(store: Arc<dyn RecordApi>) -> Self {
        Self {
            store,
            items: Vec::new(),
            inspected: None,
        }
    }

    /// Products currently held by the view
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Replace the held slice with the first six products in store order.
    ///
    /// On failure the prior state is kept and the error is only logged; the
    /// view renders whatever it already had.
    pub async fn load(&mut self) {
        match self.store.list_products().await {
            Ok(list) => {
                self.items = list.into_iter().take(CATALOG_LIMIT).collect();
            }
            Err(e) => {
                tracing::error!("Error loading products: {e}");
            }
        }
    }

    /// Mark one held product as currently inspected
    pub fn select(&mut self, id: &str) -> Option<&Product> {
        self.inspected = self.items.iter().find(|p| p.id == id).cloned();
        self.inspected.as_ref()
    }

    /// Close the inspection card
    pub fn clear(&mut self) {
        self.inspected = None;
    }

    pub fn inspected(&self) -> Option<&Product> {
        self.inspected.as_ref()
    }

    /// Validate and submit the form, then append the store's copy.
    ///
    /// Validation failure blocks the submission before any network call.
    pub async fn add(&mut self, form: CreateProduct, photos: Vec<String>) -> AppResult<Product> {
        form.validate()?;
        let product = form.into_product(photos);
        let created = self.store.create_product(&product).await?;
        self.items.push(created.clone());
        Ok(created)
    }

    /// Remove remotely, then locally; 404 counts as already deleted.
    pub async fn remove(&mut self, id: &str) -> AppResult<()> {
        match self.store.delete_product(id).await {
            Ok(()) => {
                tracing::debug!("Product {id} deleted");
            }
            Err(AppError::NotFound(_)) => {
                tracing::warn!("Product {id} not found on the server; removing locally");
            }
            Err(e) => return Err(e),
        }
        self.items.retain(|p| p.id != id);
        if self.inspected.as_ref().is_some_and(|p| p.id == id) {
            self.inspected = None;
        }
        Ok(())
    }
}
