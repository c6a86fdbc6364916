use crate::auth::{require_admin, require_session};
use crate::database::local_repository::{LocalRepository, new_id};
use crate::error::app_error::AppError;
use crate::models::testimonial::{Testimonial, TestimonialRequest};
use crate::models::user::User;
use crate::storage::StorageBackend;
use tracing::{debug, info};
use validator::Validate;

impl<S: StorageBackend> LocalRepository<S> {
    /// Submits a testimonial for moderation. The author name is frozen at submission.
    pub fn create_testimonial(&mut self, request: &TestimonialRequest, acting_user: Option<&User>) -> Result<Testimonial, AppError> {
        let user = require_session(acting_user)?;
        request.validate()?;

        let testimonial = Testimonial {
            id: new_id(),
            name: user.full_name(),
            rating: request.rating,
            comment: request.comment.clone(),
            approved: false,
        };

        self.testimonials.push(testimonial.clone());
        self.persist_testimonials()?;

        info!(testimonial_id = %testimonial.id, rating = testimonial.rating, "testimonial submitted");
        Ok(testimonial)
    }

    /// Publishes a testimonial. Requires an admin session; idempotent.
    pub fn approve_testimonial(&mut self, id: &str) -> Result<(), AppError> {
        require_admin(self.current_user.as_ref())?;

        match self.testimonials.iter_mut().find(|t| t.id == id) {
            Some(testimonial) => {
                testimonial.approved = true;
                info!(testimonial_id = %id, "testimonial approved");
            }
            None => debug!(testimonial_id = %id, "testimonial not found, nothing to approve"),
        }

        self.persist_testimonials()
    }

    pub fn delete_testimonial(&mut self, id: &str) -> Result<(), AppError> {
        require_admin(self.current_user.as_ref())?;

        self.testimonials.retain(|t| t.id != id);
        info!(testimonial_id = %id, "testimonial deleted");

        self.persist_testimonials()
    }
}

#[cfg(test)]
mod tests {
    use crate::database::seed::{ADMIN_EMAIL, ADMIN_PASSWORD, PATIENT_EMAIL, PATIENT_PASSWORD};
    use crate::error::app_error::AppError;
    use crate::models::testimonial::TestimonialRequest;
    use crate::service::catalog::approved_testimonials;
    use crate::test_utils::{login, memory_repository};

    fn great_service() -> TestimonialRequest {
        TestimonialRequest {
            rating: 5,
            comment: "Great service".to_string(),
        }
    }

    #[test]
    fn submitted_testimonial_waits_for_approval() {
        let mut repository = memory_repository();
        let patient = login(&mut repository, PATIENT_EMAIL, PATIENT_PASSWORD);

        let testimonial = repository.create_testimonial(&great_service(), Some(&patient)).unwrap();

        assert!(!testimonial.approved);
        assert_eq!(testimonial.name, "Juan Pérez");
        assert_eq!(repository.testimonials().len(), 6);
        assert!(!approved_testimonials(repository.testimonials()).iter().any(|t| t.id == testimonial.id));
    }

    #[test]
    fn approval_publishes_and_is_idempotent() {
        let mut repository = memory_repository();
        let patient = login(&mut repository, PATIENT_EMAIL, PATIENT_PASSWORD);
        let testimonial = repository.create_testimonial(&great_service(), Some(&patient)).unwrap();

        login(&mut repository, ADMIN_EMAIL, ADMIN_PASSWORD);
        repository.approve_testimonial(&testimonial.id).unwrap();
        repository.approve_testimonial(&testimonial.id).unwrap();

        assert_eq!(repository.testimonials().len(), 6);
        let stored = repository.testimonials().iter().find(|t| t.id == testimonial.id).unwrap();
        assert!(stored.approved);
        assert!(approved_testimonials(repository.testimonials()).iter().any(|t| t.id == testimonial.id));
    }

    #[test]
    fn author_name_is_not_rewritten_by_profile_changes() {
        let mut repository = memory_repository();
        let mut patient = login(&mut repository, PATIENT_EMAIL, PATIENT_PASSWORD);
        let testimonial = repository.create_testimonial(&great_service(), Some(&patient)).unwrap();

        patient.name = "Juanito".to_string();
        repository.update_user(patient).unwrap();

        let stored = repository.testimonials().iter().find(|t| t.id == testimonial.id).unwrap();
        assert_eq!(stored.name, "Juan Pérez");
    }

    #[test]
    fn moderation_requires_admin() {
        let mut repository = memory_repository();
        assert!(matches!(repository.approve_testimonial("1"), Err(AppError::PreconditionFailed(_))));

        login(&mut repository, PATIENT_EMAIL, PATIENT_PASSWORD);
        assert!(matches!(repository.approve_testimonial("1"), Err(AppError::PermissionDenied(_))));
        assert!(matches!(repository.delete_testimonial("1"), Err(AppError::PermissionDenied(_))));
        assert_eq!(repository.testimonials().len(), 5);
    }

    #[test]
    fn admin_deletes_testimonial() {
        let mut repository = memory_repository();
        login(&mut repository, ADMIN_EMAIL, ADMIN_PASSWORD);

        repository.delete_testimonial("3").unwrap();
        repository.delete_testimonial("missing").unwrap();

        assert_eq!(repository.testimonials().len(), 4);
        assert!(repository.testimonials().iter().all(|t| t.id != "3"));
    }

    #[test]
    fn testimonial_requires_session_and_valid_rating() {
        let mut repository = memory_repository();
        assert!(matches!(repository.create_testimonial(&great_service(), None), Err(AppError::PreconditionFailed(_))));

        let patient = login(&mut repository, PATIENT_EMAIL, PATIENT_PASSWORD);
        let request = TestimonialRequest {
            rating: 6,
            comment: "Too good".to_string(),
        };
        assert!(matches!(repository.create_testimonial(&request, Some(&patient)), Err(AppError::ValidationError(_))));
    }
}
