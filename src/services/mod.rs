//! View-model services

pub mod equipment;
pub mod maintenance;
pub mod products;

use std::sync::Arc;

use crate::store::{LocalReferenceStore, RecordApi};

pub use equipment::{EquipmentCatalog, Selection};
pub use maintenance::AlertBanner;
pub use products::ProductCatalog;

/// Container for all view-model services
pub struct Services {
    pub equipment: EquipmentCatalog,
    pub products: ProductCatalog,
}

impl Services {
    /// Create all services over one record store client
    pub fn new(store: Arc<dyn RecordApi>, references: LocalReferenceStore) -> Self {
        Self {
            equipment: EquipmentCatalog::new(store.clone(), references),
            products: ProductCatalog::new(store),
        }
    }
}
