//! HTTP implementation of the record store client

use async_trait::async_trait;
use reqwest::StatusCode;
use validator::Validate;

use super::RecordApi;
use crate::{
    error::{AppError, AppResult},
    models::{CreateEquipment, Equipment, Product},
};

/// Client for the remote record API.
///
/// No request timeout is configured; a hung request leaves the calling view
/// in its current state.
#[derive(Clone)]
pub struct RecordStoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl RecordStoreClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl RecordApi for RecordStoreClient {
    async fn list_products(&self) -> AppResult<Vec<Product>> {
        let products = self
            .http
            .get(self.url("product"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(products)
    }

    async fn create_product(&self, product: &Product) -> AppResult<Product> {
        let created = self
            .http
            .post(self.url("product"))
            .json(product)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(created)
    }

    async fn delete_product(&self, id: &str) -> AppResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("product/{id}")))
            .send()
            .await?;
        check_delete(response.status(), &format!("product {id}"))
    }

    async fn list_equipment(&self) -> AppResult<Vec<Equipment>> {
        let equipment: Vec<Equipment> = self
            .http
            .get(self.url("refrigeration"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(retain_valid(equipment))
    }

    async fn create_equipment(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let created = self
            .http
            .post(self.url("refrigeration"))
            .json(data)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(created)
    }

    async fn delete_equipment(&self, id: i64) -> AppResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("refrigeration/{id}")))
            .send()
            .await?;
        check_delete(response.status(), &format!("equipment {id}"))
    }
}

/// 404 on delete means the record is already gone; callers decide whether
/// that counts as success.
fn check_delete(status: StatusCode, what: &str) -> AppResult<()> {
    if status.is_success() {
        Ok(())
    } else if status == StatusCode::NOT_FOUND {
        Err(AppError::NotFound(what.to_string()))
    } else {
        Err(AppError::UnexpectedResponse(format!("{status} deleting {what}")))
    }
}

/// Drop records that fail structural validation instead of trusting the
/// store blindly.
fn retain_valid(records: Vec<Equipment>) -> Vec<Equipment> {
    records
        .into_iter()
        .filter(|record| match record.validate() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Dropping invalid equipment record {}: {e}", record.id);
                false
            }
        })
        .collect()
}
