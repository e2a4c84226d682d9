//! Equipment catalog for the list and detail views

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{CreateEquipment, Equipment},
    store::{local::SELECTED_EQUIPMENT_TITLE, LocalReferenceStore, RecordApi},
};

/// Navigation context produced when a card is selected.
///
/// Carried explicitly from the list view to the detail view; the title is
/// additionally mirrored to the reference store so a fresh process can
/// resume the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub id: i64,
    pub title: String,
}

pub struct EquipmentCatalog {
    store: Arc<dyn RecordApi>,
    references: LocalReferenceStore,
    cards: Vec<Equipment>,
}

impl EquipmentCatalog {
    pub fn new(store: Arc<dyn RecordApi>, references: LocalReferenceStore) -> Self {
        Self {
            store,
            references,
            cards: Vec::new(),
        }
    }

    /// Cards currently held by the list view
    pub fn cards(&self) -> &[Equipment] {
        &self.cards
    }

    /// Replace the held cards with the full remote collection.
    ///
    /// A failed fetch degrades to the single hard-coded demo card instead
    /// of an empty list.
    pub async fn load(&mut self) {
        match self.store.list_equipment().await {
            Ok(list) => {
                tracing::debug!("Loaded {} equipment records", list.len());
                self.cards = list;
            }
            Err(e) => {
                tracing::error!("Error loading equipment: {e}");
                self.cards = vec![Equipment::fallback_card()];
            }
        }
    }

    /// Validate and submit a new record, then append the store's copy.
    ///
    /// Validation failure blocks the submission before any network call.
    pub async fn add(&mut self, form: &CreateEquipment) -> AppResult<Equipment> {
        form.validate()?;
        let created = self.store.create_equipment(form).await?;
        self.cards.push(created.clone());
        Ok(created)
    }

    /// Remove remotely, then locally.
    ///
    /// A 404 means the record is already gone and counts as success; any
    /// other failure leaves the held list untouched.
    pub async fn remove(&mut self, id: i64) -> AppResult<()> {
        match self.store.delete_equipment(id).await {
            Ok(()) => {
                tracing::debug!("Equipment {id} deleted");
            }
            Err(AppError::NotFound(_)) => {
                tracing::warn!("Equipment {id} not found on the server; removing locally");
            }
            Err(e) => return Err(e),
        }
        self.cards.retain(|card| card.id != id);
        Ok(())
    }

    /// Select a card for the detail view, mirroring its title to the
    /// reference store. `None` when the id is not in the held list.
    pub fn select(&self, id: i64) -> AppResult<Option<Selection>> {
        let Some(card) = self.find_by_id(id) else {
            return Ok(None);
        };
        self.references.set(SELECTED_EQUIPMENT_TITLE, &card.title)?;
        Ok(Some(Selection {
            id: card.id,
            title: card.title.clone(),
        }))
    }

    /// Title recorded by the last selection, if any (fresh process, no
    /// in-memory navigation context).
    pub fn stored_selection(&self) -> AppResult<Option<String>> {
        self.references.get(SELECTED_EQUIPMENT_TITLE)
    }

    /// Resolve a navigation context against the held cards by id
    pub fn resolve(&self, selection: &Selection) -> Option<&Equipment> {
        self.find_by_id(selection.id)
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Equipment> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Title lookup used when only the stored reference is available.
    /// Titles are not guaranteed unique; the first match wins.
    pub fn find_by_title(&self, title: &str) -> Option<&Equipment> {
        self.cards.iter().find(|card| card.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PLACEHOLDER_IMAGE;
    use crate::store::MockRecordApi;
    use tempfile::tempdir;

    fn card(id: i64, title: &str) -> Equipment {
        let mut card = Equipment::fallback_card();
        card.id = id;
        card.title = title.to_string();
        card
    }

    fn catalog(mock: MockRecordApi, references: LocalReferenceStore) -> EquipmentCatalog {
        EquipmentCatalog::new(Arc::new(mock), references)
    }

    fn scratch_references(dir: &tempfile::TempDir) -> LocalReferenceStore {
        LocalReferenceStore::new(dir.path().join("references.json"))
    }

    #[tokio::test]
    async fn load_replaces_cards_with_the_full_collection() {
        let mut mock = MockRecordApi::new();
        mock.expect_list_equipment()
            .times(1)
            .returning(|| Ok(vec![card(1, "Refrigerator A1"), card(2, "Freezer C3")]));

        let dir = tempdir().unwrap();
        let mut catalog = catalog(mock, scratch_references(&dir));
        catalog.load().await;

        assert_eq!(catalog.cards().len(), 2);
        assert_eq!(catalog.cards()[1].title, "Freezer C3");
    }

    #[tokio::test]
    async fn failed_load_degrades_to_the_fallback_card() {
        let mut mock = MockRecordApi::new();
        mock.expect_list_equipment()
            .times(1)
            .returning(|| Err(AppError::UnexpectedResponse("503 Service Unavailable".into())));

        let dir = tempdir().unwrap();
        let mut catalog = catalog(mock, scratch_references(&dir));
        catalog.load().await;

        assert_eq!(catalog.cards().len(), 1);
        assert_eq!(catalog.cards()[0], Equipment::fallback_card());
    }

    #[tokio::test]
    async fn remove_is_idempotent_across_a_not_found() {
        let mut mock = MockRecordApi::new();
        mock.expect_list_equipment()
            .returning(|| Ok(vec![card(7, "Refrigerator A1")]));
        mock.expect_delete_equipment()
            .times(1)
            .returning(|_| Ok(()));
        mock.expect_delete_equipment()
            .times(1)
            .returning(|id| Err(AppError::NotFound(format!("equipment {id}"))));

        let dir = tempdir().unwrap();
        let mut catalog = catalog(mock, scratch_references(&dir));
        catalog.load().await;

        catalog.remove(7).await.unwrap();
        assert!(catalog.find_by_id(7).is_none());

        // Second delete: the store reports 404, treated as already gone
        catalog.remove(7).await.unwrap();
        assert!(catalog.cards().is_empty());
    }

    #[tokio::test]
    async fn failed_remove_keeps_the_card() {
        let mut mock = MockRecordApi::new();
        mock.expect_list_equipment()
            .returning(|| Ok(vec![card(7, "Refrigerator A1")]));
        mock.expect_delete_equipment()
            .times(1)
            .returning(|_| Err(AppError::UnexpectedResponse("500 Internal Server Error".into())));

        let dir = tempdir().unwrap();
        let mut catalog = catalog(mock, scratch_references(&dir));
        catalog.load().await;

        assert!(catalog.remove(7).await.is_err());
        assert!(catalog.find_by_id(7).is_some());
    }

    #[tokio::test]
    async fn invalid_form_blocks_the_submission() {
        // No create_equipment expectation: a network call would panic
        let mock = MockRecordApi::new();

        let dir = tempdir().unwrap();
        let mut catalog = catalog(mock, scratch_references(&dir));

        let form = CreateEquipment {
            title: String::new(),
            description: "Active".to_string(),
            capacity: 80.0,
            temperature: -18.0,
            humidity: "65%".to_string(),
            last_maintenance: "2024-08-15".to_string(),
            next_maintenance: "2024-12-15".to_string(),
            model: "CoolMax 3000".to_string(),
            serial_number: "CM3K-12345".to_string(),
            installed_date: "2023-01-10".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
        };

        let result = catalog.add(&form).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(catalog.cards().is_empty());
    }

    #[tokio::test]
    async fn add_appends_the_created_record() {
        let mut mock = MockRecordApi::new();
        mock.expect_create_equipment()
            .times(1)
            .returning(|_| Ok(card(42, "Freezer C3")));

        let dir = tempdir().unwrap();
        let mut catalog = catalog(mock, scratch_references(&dir));

        let form = CreateEquipment {
            title: "Freezer C3".to_string(),
            description: "Active".to_string(),
            capacity: 60.0,
            temperature: -20.0,
            humidity: "55%".to_string(),
            last_maintenance: "2025-01-10".to_string(),
            next_maintenance: "2025-07-10".to_string(),
            model: "FrostLine 900".to_string(),
            serial_number: "FL9-00042".to_string(),
            installed_date: "2024-11-02".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
        };

        let created = catalog.add(&form).await.unwrap();
        assert_eq!(created.id, 42);
        assert_eq!(catalog.cards().len(), 1);
    }

    #[tokio::test]
    async fn select_mirrors_the_title_to_the_reference_store() {
        let mut mock = MockRecordApi::new();
        mock.expect_list_equipment()
            .returning(|| Ok(vec![card(3, "Freezer C3")]));

        let dir = tempdir().unwrap();
        let references = scratch_references(&dir);
        let mut catalog = catalog(mock, references.clone());
        catalog.load().await;

        let selection = catalog.select(3).unwrap().unwrap();
        assert_eq!(
            selection,
            Selection {
                id: 3,
                title: "Freezer C3".to_string()
            }
        );
        assert_eq!(
            references.get(SELECTED_EQUIPMENT_TITLE).unwrap().as_deref(),
            Some("Freezer C3")
        );
        assert_eq!(catalog.resolve(&selection).map(|c| c.id), Some(3));

        // Unknown ids produce no selection and leave the store untouched
        assert!(catalog.select(99).unwrap().is_none());
        assert_eq!(
            references.get(SELECTED_EQUIPMENT_TITLE).unwrap().as_deref(),
            Some("Freezer C3")
        );
    }

    #[tokio::test]
    async fn title_lookup_returns_the_first_match() {
        let mut mock = MockRecordApi::new();
        mock.expect_list_equipment()
            .returning(|| Ok(vec![card(1, "Refrigerator A1"), card(2, "Refrigerator A1")]));

        let dir = tempdir().unwrap();
        let mut catalog = catalog(mock, scratch_references(&dir));
        catalog.load().await;

        assert_eq!(catalog.find_by_title("Refrigerator A1").map(|c| c.id), Some(1));
        assert!(catalog.find_by_title("Walk-in B2").is_none());
    }
}
