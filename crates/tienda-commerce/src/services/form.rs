//! Admin form for creating and editing services.

use super::{initial_content, NewService, Service, ServiceContent, ServicePatch, ServiceType};
use crate::ids::ServiceId;
use crate::store::ServiceRepository;
use crate::CommerceError;
use tienda_db::{validate_image, ObjectStore, ObjectUpload, UploadLimits, UploadedObject};

/// Folder that service images are uploaded to.
pub const SERVICE_IMAGE_FOLDER: &str = "services";

#[derive(Debug, Clone, PartialEq)]
enum FormMode {
    Create,
    Edit { id: ServiceId, stored_type: ServiceType },
}

/// Working copy of a service being created or edited.
///
/// Content is edited in place through [`ServiceForm::content_mut`]; the
/// per-type panel methods live on the content payloads.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceForm {
    mode: FormMode,
    pub title: String,
    pub subtitle: String,
    pub main_image: String,
    pub gallery: Vec<String>,
    pub is_active: bool,
    pub is_featured: bool,
    content: ServiceContent,
}

impl ServiceForm {
    /// Blank form for a new service of `service_type`.
    pub fn create(service_type: ServiceType) -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            subtitle: String::new(),
            main_image: String::new(),
            gallery: Vec::new(),
            is_active: true,
            is_featured: false,
            content: initial_content(service_type),
        }
    }

    /// Form pre-filled from a stored service. The type is locked.
    pub fn edit(service: &Service) -> Self {
        Self {
            mode: FormMode::Edit {
                id: service.id.clone(),
                stored_type: service.service_type(),
            },
            title: service.title.clone(),
            subtitle: service.subtitle.clone(),
            main_image: service.main_image.clone(),
            gallery: service.gallery.clone(),
            is_active: service.is_active,
            is_featured: service.is_featured,
            content: service.content.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    /// Type of the service being edited. While editing this is always the
    /// stored type.
    pub fn service_type(&self) -> ServiceType {
        match &self.mode {
            FormMode::Edit { stored_type, .. } => *stored_type,
            FormMode::Create => self.content.service_type(),
        }
    }

    pub fn content(&self) -> &ServiceContent {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut ServiceContent {
        &mut self.content
    }

    /// Switch the type of a new service, resetting its content.
    ///
    /// Selecting the current type keeps the content as is.
    pub fn select_type(&mut self, service_type: ServiceType) -> Result<(), CommerceError> {
        if let FormMode::Edit { stored_type, .. } = &self.mode {
            if *stored_type != service_type {
                return Err(CommerceError::ServiceTypeChange {
                    stored: stored_type.to_string(),
                    requested: service_type.to_string(),
                });
            }
            return Ok(());
        }

        if self.content.service_type() != service_type {
            self.content = initial_content(service_type);
        }
        Ok(())
    }

    pub fn add_gallery_image(&mut self, reference: &str) -> bool {
        super::panel::push_text(&mut self.gallery, reference)
    }

    pub fn remove_gallery_image(&mut self, index: usize) -> bool {
        super::panel::remove_at(&mut self.gallery, index)
    }

    /// Check the form before anything is sent to the store.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.title.trim().is_empty() {
            return Err(CommerceError::ValidationError(
                "service title is required".to_string(),
            ));
        }
        if self.content.service_type() != self.service_type() {
            return Err(CommerceError::ServiceTypeChange {
                stored: self.service_type().to_string(),
                requested: self.content.service_type().to_string(),
            });
        }
        Ok(())
    }

    /// Validate, upload and set the cover image.
    pub async fn upload_main_image(
        &mut self,
        objects: &dyn ObjectStore,
        upload: ObjectUpload,
        limits: &UploadLimits,
    ) -> Result<UploadedObject, CommerceError> {
        validate_image(&upload, limits)?;
        let uploaded = objects.upload(upload, SERVICE_IMAGE_FOLDER).await?;
        self.main_image = uploaded.url.clone();
        Ok(uploaded)
    }

    /// Validate, upload and append a gallery image.
    pub async fn upload_gallery_image(
        &mut self,
        objects: &dyn ObjectStore,
        upload: ObjectUpload,
        limits: &UploadLimits,
    ) -> Result<UploadedObject, CommerceError> {
        validate_image(&upload, limits)?;
        let uploaded = objects.upload(upload, SERVICE_IMAGE_FOLDER).await?;
        self.gallery.push(uploaded.url.clone());
        Ok(uploaded)
    }

    /// Persist the form: create adds a record, edit updates the stored one.
    pub async fn submit(&self, repository: &mut ServiceRepository) -> Result<Service, CommerceError> {
        self.validate()?;

        match &self.mode {
            FormMode::Create => {
                let draft = NewService {
                    title: self.title.trim().to_string(),
                    subtitle: self.subtitle.trim().to_string(),
                    main_image: self.main_image.clone(),
                    gallery: self.gallery.clone(),
                    is_active: self.is_active,
                    is_featured: self.is_featured,
                    content: self.content.clone(),
                };
                repository.add(draft).await
            }
            FormMode::Edit { id, .. } => {
                let patch = ServicePatch {
                    title: Some(self.title.trim().to_string()),
                    subtitle: Some(self.subtitle.trim().to_string()),
                    main_image: Some(self.main_image.clone()),
                    gallery: Some(self.gallery.clone()),
                    is_active: Some(self.is_active),
                    is_featured: Some(self.is_featured),
                    content: Some(self.content.clone()),
                };
                repository.update(id.as_str(), patch).await
            }
        }
    }
}
