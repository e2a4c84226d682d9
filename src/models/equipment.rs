//! Equipment model

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use validator::Validate;

/// Image reference used when no upload was supplied
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x180?text=No+Image";

/// Refrigeration equipment record as held in the remote collection
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    /// Store-assigned identifier; some deployments return it as a string
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub id: i64,
    /// Display name; list -> detail lookup key alongside the id
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    /// Status label, conventionally "Active"
    pub description: String,
    /// Free-form display text, may include units
    pub capacity: String,
    pub temperature: String,
    pub humidity: String,
    /// ISO dates in string form; no ordering is enforced between them
    pub last_maintenance: String,
    pub next_maintenance: String,
    pub installed_date: String,
    pub model: String,
    pub serial_number: String,
    pub image: String,
}

impl Equipment {
    /// Whether the status label renders as active in the cards view
    pub fn is_active(&self) -> bool {
        self.description == "Active"
    }

    /// Hard-coded demo card shown when the remote list cannot be loaded
    pub fn fallback_card() -> Self {
        Self {
            id: 1,
            title: "Refrigerator A1".to_string(),
            description: "Active".to_string(),
            capacity: "Capacity: 80%".to_string(),
            temperature: "-18°C".to_string(),
            humidity: "65%".to_string(),
            last_maintenance: "2024-08-15".to_string(),
            next_maintenance: "2024-12-15".to_string(),
            installed_date: "2023-01-10".to_string(),
            model: "CoolMax 3000".to_string(),
            serial_number: "CM3K-12345".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

/// Create equipment request, built from the add-equipment form.
///
/// The store assigns the id. Numeric fields travel in string form, matching
/// the records the collection already holds.
#[serde_as]
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    /// Fill level percentage
    #[serde_as(as = "DisplayFromStr")]
    #[validate(range(min = 0.0, max = 100.0, message = "capacity must be between 0 and 100"))]
    pub capacity: f64,
    /// Operating temperature in °C
    #[serde_as(as = "DisplayFromStr")]
    #[validate(range(min = -50.0, max = 50.0, message = "temperature must be between -50 and 50"))]
    pub temperature: f64,
    #[validate(length(min = 1, message = "humidity is required"))]
    pub humidity: String,
    #[validate(length(min = 1, message = "last maintenance date is required"))]
    pub last_maintenance: String,
    #[validate(length(min = 1, message = "next maintenance date is required"))]
    pub next_maintenance: String,
    #[validate(length(min = 1, message = "model is required"))]
    pub model: String,
    #[validate(length(min = 1, message = "serial number is required"))]
    pub serial_number: String,
    #[validate(length(min = 1, message = "installed date is required"))]
    pub installed_date: String,
    /// Upload reference, or the placeholder when none was selected
    pub image: String,
}

impl CreateEquipment {
    /// An inverted maintenance window is accepted at write time; the form
    /// only warns about it.
    pub fn maintenance_window_inverted(&self) -> bool {
        !self.next_maintenance.is_empty()
            && !self.last_maintenance.is_empty()
            && self.next_maintenance < self.last_maintenance
    }
}
