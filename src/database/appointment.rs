use crate::auth::require_session;
use crate::database::local_repository::{LocalRepository, new_id};
use crate::error::app_error::AppError;
use crate::models::appointment::{Appointment, AppointmentRequest, AppointmentStatus};
use crate::models::user::User;
use crate::storage::StorageBackend;
use tracing::{debug, info};
use validator::Validate;

impl<S: StorageBackend> LocalRepository<S> {
    /// Books an appointment on behalf of `acting_user`.
    ///
    /// The doctor is stored by name; later doctor edits do not touch existing bookings.
    pub fn create_appointment(&mut self, request: &AppointmentRequest, acting_user: Option<&User>) -> Result<Appointment, AppError> {
        let user = require_session(acting_user)?;
        request.validate()?;

        let appointment = Appointment {
            id: new_id(),
            user_id: user.id.clone(),
            date: request.date.clone(),
            time: request.time.clone(),
            specialty: request.specialty.clone(),
            doctor: request.doctor.clone(),
            status: AppointmentStatus::Upcoming,
        };

        self.appointments.push(appointment.clone());
        self.persist_appointments()?;

        info!(appointment_id = %appointment.id, user_id = %appointment.user_id, date = %appointment.date, "appointment created");
        Ok(appointment)
    }

    pub fn delete_appointment(&mut self, id: &str) -> Result<(), AppError> {
        let before = self.appointments.len();
        self.appointments.retain(|a| a.id != id);

        if self.appointments.len() == before {
            debug!(appointment_id = %id, "appointment not found, nothing to delete");
        } else {
            info!(appointment_id = %id, "appointment cancelled");
        }

        self.persist_appointments()
    }
}
