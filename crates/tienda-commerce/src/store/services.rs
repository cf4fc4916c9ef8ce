//! Repository over the `services` collection.

use super::{Record, Repository};
use crate::ids::ServiceId;
use crate::services::{NewService, Service, ServicePatch, ServiceType};
use crate::CommerceError;
use chrono::{DateTime, Utc};
use tienda_db::{StoredDocument, SERVICES};

pub type ServiceRepository = Repository<Service>;

impl Record for Service {
    const COLLECTION: &'static str = SERVICES;
    type Draft = NewService;
    type Patch = ServicePatch;

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn from_draft(draft: NewService, now: DateTime<Utc>) -> Self {
        draft.into_service(ServiceId::default(), now)
    }

    fn set_id(&mut self, id: String) {
        self.id = ServiceId::new(id);
    }

    fn set_updated_at(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    fn apply_patch(&mut self, patch: &ServicePatch) {
        patch.apply_to(self);
    }

    fn check_patch(&self, patch: &ServicePatch) -> Result<(), CommerceError> {
        patch.check_type(self.service_type())
    }

    fn decode(doc: &StoredDocument) -> Result<Self, CommerceError> {
        let value = serde_json::Value::Object(doc.data.clone());
        let mut service: Service = match serde_json::from_value(value) {
            Ok(service) => service,
            Err(e) => {
                return Err(CommerceError::InvalidContent {
                    service_type: doc
                        .get("type")
                        .and_then(|t| t.as_str())
                        .unwrap_or("unknown")
                        .to_string(),
                    reason: format!("document {}: {}", doc.id, e),
                })
            }
        };
        service.id = ServiceId::new(doc.id.clone());
        Ok(service)
    }
}

impl Repository<Service> {
    /// Services of one type, in list order.
    pub fn by_type(&self, service_type: ServiceType) -> Vec<&Service> {
        self.items()
            .iter()
            .filter(|s| s.service_type() == service_type)
            .collect()
    }

    /// Services visible on the storefront.
    pub fn active(&self) -> Vec<&Service> {
        self.items().iter().filter(|s| s.is_active).collect()
    }

    /// Active services flagged for the home page.
    pub fn featured(&self) -> Vec<&Service> {
        self.items()
            .iter()
            .filter(|s| s.is_active && s.is_featured)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{initial_content, ServiceContent, TourList, ToursContent};
    use serde_json::json;
    use std::sync::Arc;
    use tienda_db::{to_document, DocumentStore, MemoryStore};

    async fn seeded() -> (Arc<MemoryStore>, ServiceRepository, Service) {
        let store = Arc::new(MemoryStore::new());
        let mut repo = ServiceRepository::new(store.clone());
        let service = repo
            .add(NewService::new("Cusco Mágico", initial_content(ServiceType::Tours)).with_subtitle("4 días"))
            .await
            .unwrap();
        (store, repo, service)
    }

    #[tokio::test]
    async fn test_add_prepends_and_stamps() {
        let (store, mut repo, first) = seeded().await;
        let second = repo
            .add(NewService::new("Hotel Lima", initial_content(ServiceType::Hotels)))
            .await
            .unwrap();

        assert_eq!(repo.items()[0].id, second.id);
        assert_eq!(repo.items()[1].id, first.id);
        assert_eq!(first.created_at, first.updated_at);
        assert_eq!(store.count(SERVICES), 2);
    }

    #[tokio::test]
    async fn test_update_merges_not_replaces() {
        let (store, mut repo, service) = seeded().await;
        let updated = repo
            .update(service.id.as_str(), ServicePatch::subtitle("x"))
            .await
            .unwrap();

        assert_eq!(updated.subtitle, "x");
        assert_eq!(updated.title, service.title);
        assert_eq!(updated.content, service.content);
        assert_eq!(updated.created_at, service.created_at);
        assert!(updated.updated_at >= service.updated_at);

        let stored = store.get(SERVICES, service.id.as_str()).await.unwrap().unwrap();
        assert_eq!(stored.get("title"), Some(&json!("Cusco Mágico")));
        assert_eq!(stored.get("subtitle"), Some(&json!("x")));
    }

    #[tokio::test]
    async fn test_update_cannot_change_type() {
        let (store, mut repo, service) = seeded().await;
        let patch = ServicePatch::content(initial_content(ServiceType::Flights));

        let err = repo.update(service.id.as_str(), patch).await.unwrap_err();
        assert!(matches!(err, CommerceError::ServiceTypeChange { .. }));

        let stored = store.get(SERVICES, service.id.as_str()).await.unwrap().unwrap();
        assert_eq!(stored.get("type"), Some(&json!("tours")));
        assert_eq!(repo.items()[0].service_type(), ServiceType::Tours);
    }

    #[tokio::test]
    async fn test_update_content_of_same_type() {
        let (_store, mut repo, service) = seeded().await;
        let mut tours = ToursContent::default();
        tours.add(TourList::Recomendaciones, "Llevar abrigo");

        let updated = repo
            .update(service.id.as_str(), ServicePatch::content(ServiceContent::Tours(tours.clone())))
            .await
            .unwrap();
        assert_eq!(updated.content, ServiceContent::Tours(tours));
        assert_eq!(updated.subtitle, "4 días");
    }

    #[tokio::test]
    async fn test_failed_writes_leave_list_untouched() {
        let (store, mut repo, service) = seeded().await;
        let before = repo.items().to_vec();
        store.set_available(false);

        assert!(repo.update(service.id.as_str(), ServicePatch::subtitle("x")).await.is_err());
        assert!(repo.remove(service.id.as_str()).await.is_err());
        assert!(repo
            .add(NewService::new("Visa USA", initial_content(ServiceType::Visas)))
            .await
            .is_err());
        assert!(repo.load().await.is_err());

        assert_eq!(repo.items(), before.as_slice());
    }

    #[tokio::test]
    async fn test_load_and_remove() {
        let (store, _repo, service) = seeded().await;
        let mut fresh = ServiceRepository::new(store.clone());
        assert!(!fresh.is_loaded());

        fresh.load().await.unwrap();
        assert_eq!(fresh.items().len(), 1);
        assert_eq!(fresh.get(service.id.as_str()), Some(&service));

        fresh.remove(service.id.as_str()).await.unwrap();
        assert!(fresh.items().is_empty());
        assert_eq!(store.count(SERVICES), 0);

        fresh.invalidate();
        assert!(!fresh.is_loaded());
    }

    #[tokio::test]
    async fn test_load_rejects_corrupt_content() {
        let store = Arc::new(MemoryStore::new());
        let mut doc = to_document(
            &NewService::new("Rutas", initial_content(ServiceType::Tours))
                .into_service(ServiceId::default(), Utc::now()),
        )
        .unwrap();
        doc.insert("content".to_string(), json!({"destinos": "Cusco"}));
        store.seed(SERVICES, "bad", doc).unwrap();

        let mut repo = ServiceRepository::new(store);
        let err = repo.load().await.unwrap_err();
        assert!(matches!(err, CommerceError::InvalidContent { ref service_type, .. } if service_type == "tours"));
        assert!(!repo.is_loaded());
    }

    #[tokio::test]
    async fn test_views() {
        let (_store, mut repo, service) = seeded().await;
        let mut hidden = NewService::new("Envíos", initial_content(ServiceType::Shipping));
        hidden.is_active = false;
        hidden.is_featured = true;
        repo.add(hidden).await.unwrap();
        repo.update(service.id.as_str(), ServicePatch {
            is_featured: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();

        assert_eq!(repo.by_type(ServiceType::Shipping).len(), 1);
        assert_eq!(repo.active().len(), 1);
        assert_eq!(repo.featured()[0].id, service.id);
    }
}
