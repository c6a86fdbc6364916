use crate::auth::require_admin;
use crate::database::local_repository::{LocalRepository, new_id};
use crate::error::app_error::AppError;
use crate::models::doctor::Doctor;
use crate::storage::StorageBackend;
use tracing::info;
use validator::Validate;

impl<S: StorageBackend> LocalRepository<S> {
    /// Replaces the doctor with the same id, or appends it. An empty id is
    /// treated as a new record and gets a fresh one.
    pub fn upsert_doctor(&mut self, mut doctor: Doctor) -> Result<Doctor, AppError> {
        require_admin(self.current_user.as_ref())?;
        doctor.validate()?;

        if doctor.id.is_empty() {
            doctor.id = new_id();
        }

        match self.doctors.iter_mut().find(|d| d.id == doctor.id) {
            Some(existing) => {
                *existing = doctor.clone();
                info!(doctor_id = %doctor.id, "doctor updated");
            }
            None => {
                self.doctors.push(doctor.clone());
                info!(doctor_id = %doctor.id, "doctor added");
            }
        }

        self.persist_doctors()?;
        Ok(doctor)
    }

    pub fn delete_doctor(&mut self, id: &str) -> Result<(), AppError> {
        require_admin(self.current_user.as_ref())?;

        self.doctors.retain(|d| d.id != id);
        info!(doctor_id = %id, "doctor deleted");

        self.persist_doctors()
    }
}

#[cfg(test)]
mod tests {
    use crate::database::seed::{ADMIN_EMAIL, ADMIN_PASSWORD, PATIENT_EMAIL, PATIENT_PASSWORD};
    use crate::error::app_error::AppError;
    use crate::models::doctor::Doctor;
    use crate::test_utils::{appointment_request, login, memory_repository};

    fn new_doctor() -> Doctor {
        Doctor {
            id: String::new(),
            name: "Dra. Elena Vargas".to_string(),
            specialty: "Odontopediatría".to_string(),
            description: "Atención dental para niños.".to_string(),
            image: "https://images.unsplash.com/photo-1565090567208-c8038cfcf6cd".to_string(),
        }
    }

    #[test]
    fn upsert_appends_new_doctor_with_generated_id() {
        let mut repository = memory_repository();
        login(&mut repository, ADMIN_EMAIL, ADMIN_PASSWORD);

        let stored = repository.upsert_doctor(new_doctor()).unwrap();

        assert!(!stored.id.is_empty());
        assert_eq!(repository.doctors().len(), 7);
        assert_eq!(repository.doctors().last(), Some(&stored));
    }

    #[test]
    fn upsert_replaces_existing_doctor_in_place() {
        let mut repository = memory_repository();
        login(&mut repository, ADMIN_EMAIL, ADMIN_PASSWORD);

        let mut doctor = repository.doctors()[1].clone();
        doctor.description = "Implantes y cirugía guiada.".to_string();
        repository.upsert_doctor(doctor.clone()).unwrap();

        assert_eq!(repository.doctors().len(), 6);
        assert_eq!(repository.doctors()[1], doctor);
    }

    #[test]
    fn deleting_doctor_keeps_appointments_that_name_them() {
        let mut repository = memory_repository();
        let patient = login(&mut repository, PATIENT_EMAIL, PATIENT_PASSWORD);
        let appointment = repository.create_appointment(&appointment_request(), Some(&patient)).unwrap();

        login(&mut repository, ADMIN_EMAIL, ADMIN_PASSWORD);
        repository.delete_doctor("1").unwrap();

        assert_eq!(repository.doctors().len(), 5);
        assert_eq!(repository.appointments(), &[appointment]);
    }

    #[test]
    fn catalog_edits_require_admin() {
        let mut repository = memory_repository();
        assert!(matches!(repository.upsert_doctor(new_doctor()), Err(AppError::PreconditionFailed(_))));

        login(&mut repository, PATIENT_EMAIL, PATIENT_PASSWORD);
        assert!(matches!(repository.upsert_doctor(new_doctor()), Err(AppError::PermissionDenied(_))));
        assert!(matches!(repository.delete_doctor("1"), Err(AppError::PermissionDenied(_))));
        assert_eq!(repository.doctors().len(), 6);
    }

    #[test]
    fn invalid_doctor_is_rejected() {
        let mut repository = memory_repository();
        login(&mut repository, ADMIN_EMAIL, ADMIN_PASSWORD);

        let mut doctor = new_doctor();
        doctor.image = "file:///etc/passwd".to_string();
        assert!(matches!(repository.upsert_doctor(doctor), Err(AppError::ValidationError(_))));
    }
}
