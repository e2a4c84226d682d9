//! ColdTrack Refrigeration Inventory Management
//!
//! A Rust client for the ColdTrack inventory system: catalogs of products and
//! refrigeration equipment backed by a generic remote record store, with
//! maintenance-overdue tracking over the equipment lifecycle.

use std::sync::Arc;

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all views
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: services::Services,
}
