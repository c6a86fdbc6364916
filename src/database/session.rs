use crate::database::local_repository::LocalRepository;
use crate::error::app_error::AppError;
use crate::storage::StorageBackend;
use tracing::info;

impl<S: StorageBackend> LocalRepository<S> {
    /// Clears the session pointer and deletes its slot.
    pub fn logout(&mut self) -> Result<(), AppError> {
        if let Some(user) = self.current_user.take() {
            info!(user_id = %user.id, "user logged out");
        }
        self.persist_session()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn is_admin_session(&self) -> bool {
        self.current_user.as_ref().is_some_and(|u| u.is_admin)
    }
}
