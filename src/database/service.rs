use crate::auth::require_admin;
use crate::database::local_repository::{LocalRepository, new_id};
use crate::error::app_error::AppError;
use crate::models::service::Service;
use crate::storage::StorageBackend;
use tracing::info;
use validator::Validate;

impl<S: StorageBackend> LocalRepository<S> {
    pub fn upsert_service(&mut self, mut service: Service) -> Result<Service, AppError> {
        require_admin(self.current_user.as_ref())?;
        service.validate()?;

        if service.id.is_empty() {
            service.id = new_id();
        }

        match self.services.iter_mut().find(|s| s.id == service.id) {
            Some(existing) => *existing = service.clone(),
            None => self.services.push(service.clone()),
        }
        info!(service_id = %service.id, "service saved");

        self.persist_services()?;
        Ok(service)
    }

    pub fn delete_service(&mut self, id: &str) -> Result<(), AppError> {
        require_admin(self.current_user.as_ref())?;

        self.services.retain(|s| s.id != id);
        info!(service_id = %id, "service deleted");

        self.persist_services()
    }
}
