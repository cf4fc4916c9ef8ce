//! Service records as stored in the `services` collection.

use super::{ServiceContent, ServiceType};
use crate::ids::ServiceId;
use crate::CommerceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tourism service offered on the storefront.
///
/// The type is not stored separately: it is always the tag of `content`,
/// so a service cannot hold content of the wrong shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ServiceDocument", into = "ServiceDocument")]
pub struct Service {
    /// Store-assigned identifier.
    pub id: ServiceId,
    pub title: String,
    pub subtitle: String,
    /// Cover image reference (data URI or URL).
    pub main_image: String,
    /// Additional image references, in display order.
    pub gallery: Vec<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub content: ServiceContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    pub fn service_type(&self) -> ServiceType {
        self.content.service_type()
    }
}

/// Document layout of a service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServiceDocument {
    #[serde(default)]
    id: ServiceId,
    #[serde(rename = "type")]
    service_type: ServiceType,
    title: String,
    #[serde(default)]
    subtitle: String,
    #[serde(default)]
    main_image: String,
    #[serde(default)]
    gallery: Vec<String>,
    #[serde(default = "default_true")]
    is_active: bool,
    #[serde(default)]
    is_featured: bool,
    content: Value,
    #[serde(default)]
    created_at: DateTime<Utc>,
    #[serde(default)]
    updated_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

impl TryFrom<ServiceDocument> for Service {
    type Error = CommerceError;

    fn try_from(doc: ServiceDocument) -> Result<Self, Self::Error> {
        Ok(Service {
            id: doc.id,
            title: doc.title,
            subtitle: doc.subtitle,
            main_image: doc.main_image,
            gallery: doc.gallery,
            is_active: doc.is_active,
            is_featured: doc.is_featured,
            content: ServiceContent::from_parts(doc.service_type, doc.content)?,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}

impl From<Service> for ServiceDocument {
    fn from(service: Service) -> Self {
        let service_type = service.service_type();
        let content = match service.content.to_value() {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(service_id = %service.id, error = %e, "failed to encode content");
                Value::Object(Default::default())
            }
        };
        ServiceDocument {
            id: service.id,
            service_type,
            title: service.title,
            subtitle: service.subtitle,
            main_image: service.main_image,
            gallery: service.gallery,
            is_active: service.is_active,
            is_featured: service.is_featured,
            content,
            created_at: service.created_at,
            updated_at: service.updated_at,
        }
    }
}

/// A service that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub title: String,
    pub subtitle: String,
    pub main_image: String,
    pub gallery: Vec<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub content: ServiceContent,
}

impl NewService {
    pub fn new(title: impl Into<String>, content: ServiceContent) -> Self {
        Self {
            title: title.into(),
            subtitle: String::new(),
            main_image: String::new(),
            gallery: Vec::new(),
            is_active: true,
            is_featured: false,
            content,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Attach the store id and write timestamps.
    pub fn into_service(self, id: ServiceId, now: DateTime<Utc>) -> Service {
        Service {
            id,
            title: self.title,
            subtitle: self.subtitle,
            main_image: self.main_image,
            gallery: self.gallery,
            is_active: self.is_active,
            is_featured: self.is_featured,
            content: self.content,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of a service. There is no type field: a service keeps
/// the type it was created with.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ServiceContent>,
}

impl ServicePatch {
    pub fn subtitle(subtitle: impl Into<String>) -> Self {
        Self {
            subtitle: Some(subtitle.into()),
            ..Default::default()
        }
    }

    pub fn content(content: ServiceContent) -> Self {
        Self {
            content: Some(content),
            ..Default::default()
        }
    }

    /// Reject content of a different type than `stored`.
    pub fn check_type(&self, stored: ServiceType) -> Result<(), CommerceError> {
        match &self.content {
            Some(content) if content.service_type() != stored => {
                Err(CommerceError::ServiceTypeChange {
                    stored: stored.to_string(),
                    requested: content.service_type().to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Merge the patch over `service`, field by field.
    pub fn apply_to(&self, service: &mut Service) {
        if let Some(title) = &self.title {
            service.title = title.clone();
        }
        if let Some(subtitle) = &self.subtitle {
            service.subtitle = subtitle.clone();
        }
        if let Some(main_image) = &self.main_image {
            service.main_image = main_image.clone();
        }
        if let Some(gallery) = &self.gallery {
            service.gallery = gallery.clone();
        }
        if let Some(is_active) = self.is_active {
            service.is_active = is_active;
        }
        if let Some(is_featured) = self.is_featured {
            service.is_featured = is_featured;
        }
        if let Some(content) = &self.content {
            service.content = content.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{initial_content, ToursContent};
    use serde_json::json;

    fn tour() -> Service {
        NewService::new("Cusco Mágico", initial_content(ServiceType::Tours))
            .with_subtitle("4 días")
            .into_service(ServiceId::new("s1"), Utc::now())
    }

    #[test]
    fn test_document_layout() {
        let json = serde_json::to_value(tour()).unwrap();
        assert_eq!(json["type"], "tours");
        assert_eq!(json["title"], "Cusco Mágico");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["content"]["noIncluye"], json!([]));
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_decode_round_trip() {
        let service = tour();
        let json = serde_json::to_value(&service).unwrap();
        let decoded: Service = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, service);
    }

    #[test]
    fn test_decode_rejects_mismatched_content() {
        let mut json = serde_json::to_value(tour()).unwrap();
        json["type"] = json!("flights");
        assert!(serde_json::from_value::<Service>(json).is_err());
    }

    #[test]
    fn test_decode_rejects_unknown_type() {
        let mut json = serde_json::to_value(tour()).unwrap();
        json["type"] = json!("cruises");
        assert!(serde_json::from_value::<Service>(json).is_err());
    }

    #[test]
    fn test_patch_type_check() {
        let patch = ServicePatch::content(ServiceContent::Tours(ToursContent::default()));
        assert!(patch.check_type(ServiceType::Tours).is_ok());
        assert!(matches!(
            patch.check_type(ServiceType::Hotels),
            Err(CommerceError::ServiceTypeChange { .. })
        ));
    }

    #[test]
    fn test_patch_merges_not_replaces() {
        let mut service = tour();
        let before = service.clone();
        ServicePatch::subtitle("x").apply_to(&mut service);

        assert_eq!(service.subtitle, "x");
        assert_eq!(service.title, before.title);
        assert_eq!(service.content, before.content);
        assert_eq!(service.gallery, before.gallery);
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let json = serde_json::to_value(ServicePatch::subtitle("x")).unwrap();
        assert_eq!(json, json!({"subtitle": "x"}));
    }
}
