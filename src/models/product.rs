//! Product model and inventory form types

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use validator::Validate;

/// Image reference used when a product is submitted without photos
pub const PLACEHOLDER_PHOTO: &str = "assets/images/placeholder.png";

/// One image reference or an ordered sequence of them.
///
/// The collection holds both shapes; older records carry a single string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Photo {
    One(String),
    Many(Vec<String>),
}

impl Default for Photo {
    fn default() -> Self {
        Photo::One(PLACEHOLDER_PHOTO.to_string())
    }
}

impl Photo {
    /// Wrap a submission's staged photos, defaulting to the placeholder
    pub fn from_selection(selected: Vec<String>) -> Self {
        if selected.is_empty() {
            Photo::Many(vec![PLACEHOLDER_PHOTO.to_string()])
        } else {
            Photo::Many(selected)
        }
    }

    /// References in display order
    pub fn refs(&self) -> Vec<&str> {
        match self {
            Photo::One(r) => vec![r.as_str()],
            Photo::Many(rs) => rs.iter().map(String::as_str).collect(),
        }
    }
}

/// Photos staged for the next submission.
///
/// Mirrors the upload widget: references accumulate in selection order and
/// can be removed by index before the form is submitted.
#[derive(Debug, Default, Clone)]
pub struct PhotoSelection(Vec<String>);

impl PhotoSelection {
    pub fn push(&mut self, reference: String) {
        self.0.push(reference);
    }

    /// Remove one staged photo; out-of-range indexes are a no-op
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

/// Product record as held in the remote collection
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Product {
    /// Client-generated timestamp string; uniqueness relies on
    /// creation-time granularity
    pub id: String,
    #[validate(length(min = 1, message = "nombre must not be empty"))]
    pub nombre: String,
    /// Free-text categorical label
    pub estado: String,
    pub fecha: String,
    pub marca: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub cantidad: i64,
    /// Free-text categorical label
    pub rubro: String,
    #[serde(default)]
    pub detalles: String,
    #[serde(default)]
    pub photo: Photo,
}

/// Create product request, built from the inventory form
#[derive(Debug, Clone, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "nombre is required"))]
    pub nombre: String,
    #[validate(length(min = 1, message = "estado is required"))]
    pub estado: String,
    #[validate(length(min = 1, message = "fecha is required"))]
    pub fecha: String,
    #[validate(length(min = 1, message = "marca is required"))]
    pub marca: String,
    #[validate(range(min = 1, message = "cantidad must be at least 1"))]
    pub cantidad: i64,
    #[validate(length(min = 1, message = "rubro is required"))]
    pub rubro: String,
    pub detalles: String,
}

impl CreateProduct {
    /// Assemble the record sent to the store.
    ///
    /// The id is derived from the current timestamp; collisions are possible
    /// at millisecond granularity and are not checked.
    pub fn into_product(self, photos: Vec<String>) -> Product {
        Product {
            id: Utc::now().timestamp_millis().to_string(),
            nombre: self.nombre,
            estado: self.estado,
            fecha: self.fecha,
            marca: self.marca,
            cantidad: self.cantidad,
            rubro: self.rubro,
            detalles: self.detalles,
            photo: Photo::from_selection(photos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CreateProduct {
        CreateProduct {
            nombre: "Leche entera".to_string(),
            estado: "Disponible".to_string(),
            fecha: "2025-03-01".to_string(),
            marca: "La Serenísima".to_string(),
            cantidad: 12,
            rubro: "Lácteos".to_string(),
            detalles: String::new(),
        }
    }

    #[test]
    fn photo_decodes_single_reference_and_sequence() {
        let single: Product = serde_json::from_value(serde_json::json!({
            "id": "1700000000000",
            "nombre": "Queso",
            "estado": "Disponible",
            "fecha": "2025-03-01",
            "marca": "X",
            "cantidad": 2,
            "rubro": "Lácteos",
            "photo": "data:image/jpeg;base64,abc"
        }))
        .unwrap();
        assert_eq!(single.photo, Photo::One("data:image/jpeg;base64,abc".to_string()));

        let many: Product = serde_json::from_value(serde_json::json!({
            "id": "1700000000001",
            "nombre": "Queso",
            "estado": "Disponible",
            "fecha": "2025-03-01",
            "marca": "X",
            "cantidad": "2",
            "rubro": "Lácteos",
            "photo": ["a.png", "b.png"]
        }))
        .unwrap();
        assert_eq!(many.photo.refs(), vec!["a.png", "b.png"]);
        // cantidad arrived as a string above
        assert_eq!(many.cantidad, 2);
    }

    #[test]
    fn missing_photo_defaults_to_placeholder() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": "1700000000002",
            "nombre": "Queso",
            "estado": "Disponible",
            "fecha": "2025-03-01",
            "marca": "X",
            "cantidad": 1,
            "rubro": "Lácteos"
        }))
        .unwrap();
        assert_eq!(product.photo.refs(), vec![PLACEHOLDER_PHOTO]);
    }

    #[test]
    fn empty_selection_submits_the_placeholder() {
        let product = form().into_product(Vec::new());
        assert_eq!(product.photo, Photo::Many(vec![PLACEHOLDER_PHOTO.to_string()]));
        assert!(!product.id.is_empty());
    }

    #[test]
    fn cantidad_below_one_is_rejected() {
        let mut invalid = form();
        invalid.cantidad = 0;
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn photo_selection_removes_by_index() {
        let mut staged = PhotoSelection::default();
        staged.push("a.png".to_string());
        staged.push("b.png".to_string());
        staged.push("c.png".to_string());

        assert_eq!(staged.remove(1), Some("b.png".to_string()));
        assert_eq!(staged.remove(9), None);
        assert_eq!(staged.into_inner(), vec!["a.png".to_string(), "c.png".to_string()]);
    }
}
