use crate::config::DEFAULT_KEY_PREFIX;
use crate::database::seed;
use crate::error::app_error::AppError;
use crate::models::appointment::Appointment;
use crate::models::doctor::Doctor;
use crate::models::service::Service;
use crate::models::testimonial::Testimonial;
use crate::models::user::User;
use crate::storage::StorageBackend;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const USERS_KEY: &str = "users";
pub const APPOINTMENTS_KEY: &str = "appointments";
pub const DOCTORS_KEY: &str = "doctors";
pub const SERVICES_KEY: &str = "services";
pub const TESTIMONIALS_KEY: &str = "testimonials";
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Owner of every clinic collection and of the session pointer.
///
/// Reads are served from memory. Every mutation rewrites the whole affected
/// collection to its slot; the in-memory change is applied first, so a failed
/// write is returned to the caller with memory already updated.
#[derive(Debug)]
pub struct LocalRepository<S: StorageBackend> {
    storage: S,
    key_prefix: String,
    pub(crate) users: Vec<User>,
    pub(crate) appointments: Vec<Appointment>,
    pub(crate) doctors: Vec<Doctor>,
    pub(crate) services: Vec<Service>,
    pub(crate) testimonials: Vec<Testimonial>,
    pub(crate) current_user: Option<User>,
}

impl<S: StorageBackend> LocalRepository<S> {
    pub fn open(storage: S) -> Result<Self, AppError> {
        Self::open_with_prefix(storage, DEFAULT_KEY_PREFIX)
    }

    /// Rehydrates every collection from `storage`, seeding the ones whose slot is empty.
    pub fn open_with_prefix(storage: S, key_prefix: impl Into<String>) -> Result<Self, AppError> {
        let key_prefix = key_prefix.into();

        let stored_users = read_slot(&storage, &key_prefix, USERS_KEY)?;
        let stored_appointments = read_slot(&storage, &key_prefix, APPOINTMENTS_KEY)?;
        let stored_doctors = read_slot(&storage, &key_prefix, DOCTORS_KEY)?;
        let stored_services = read_slot(&storage, &key_prefix, SERVICES_KEY)?;
        let stored_testimonials = read_slot(&storage, &key_prefix, TESTIMONIALS_KEY)?;
        let current_user = read_slot(&storage, &key_prefix, CURRENT_USER_KEY)?;

        let mut repository = Self {
            storage,
            key_prefix,
            users: Vec::new(),
            appointments: Vec::new(),
            doctors: Vec::new(),
            services: Vec::new(),
            testimonials: Vec::new(),
            current_user: current_user.into_option(),
        };

        match stored_users {
            Slot::Stored(users) => repository.users = users,
            Slot::Undecodable => repository.users = seed::users(),
            Slot::Empty => {
                repository.users = seed::users();
                repository.persist_users()?;
            }
        }
        match stored_appointments {
            Slot::Stored(appointments) => repository.appointments = appointments,
            Slot::Undecodable => {}
            Slot::Empty => repository.persist_appointments()?,
        }
        match stored_doctors {
            Slot::Stored(doctors) => repository.doctors = doctors,
            Slot::Undecodable => repository.doctors = seed::doctors(),
            Slot::Empty => {
                repository.doctors = seed::doctors();
                repository.persist_doctors()?;
            }
        }
        match stored_services {
            Slot::Stored(services) => repository.services = services,
            Slot::Undecodable => repository.services = seed::services(),
            Slot::Empty => {
                repository.services = seed::services();
                repository.persist_services()?;
            }
        }
        match stored_testimonials {
            Slot::Stored(testimonials) => repository.testimonials = testimonials,
            Slot::Undecodable => repository.testimonials = seed::testimonials(),
            Slot::Empty => {
                repository.testimonials = seed::testimonials();
                repository.persist_testimonials()?;
            }
        }

        info!(
            users = repository.users.len(),
            appointments = repository.appointments.len(),
            doctors = repository.doctors.len(),
            services = repository.services.len(),
            testimonials = repository.testimonials.len(),
            session = repository.current_user.as_ref().map(|u| u.id.as_str()).unwrap_or("none"),
            "local repository opened"
        );

        Ok(repository)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn slot_name(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }

    pub(crate) fn persist_users(&mut self) -> Result<(), AppError> {
        write_slot(&mut self.storage, &self.key_prefix, USERS_KEY, &self.users)
    }

    pub(crate) fn persist_appointments(&mut self) -> Result<(), AppError> {
        write_slot(&mut self.storage, &self.key_prefix, APPOINTMENTS_KEY, &self.appointments)
    }

    pub(crate) fn persist_doctors(&mut self) -> Result<(), AppError> {
        write_slot(&mut self.storage, &self.key_prefix, DOCTORS_KEY, &self.doctors)
    }

    pub(crate) fn persist_services(&mut self) -> Result<(), AppError> {
        write_slot(&mut self.storage, &self.key_prefix, SERVICES_KEY, &self.services)
    }

    pub(crate) fn persist_testimonials(&mut self) -> Result<(), AppError> {
        write_slot(&mut self.storage, &self.key_prefix, TESTIMONIALS_KEY, &self.testimonials)
    }

    /// The session slot is deleted rather than written empty when nobody is logged in.
    pub(crate) fn persist_session(&mut self) -> Result<(), AppError> {
        match &self.current_user {
            Some(user) => write_slot(&mut self.storage, &self.key_prefix, CURRENT_USER_KEY, user),
            None => {
                let slot = format!("{}{}", self.key_prefix, CURRENT_USER_KEY);
                self.storage.remove(&slot)
            }
        }
    }
}

pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// What a slot held when the store was opened.
enum Slot<T> {
    Empty,
    Stored(T),
    /// Present but not decodable; the raw value is left in storage untouched.
    Undecodable,
}

impl<T> Slot<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Slot::Stored(value) => Some(value),
            Slot::Empty | Slot::Undecodable => None,
        }
    }
}

fn read_slot<S, T>(storage: &S, prefix: &str, key: &str) -> Result<Slot<T>, AppError>
where
    S: StorageBackend,
    T: DeserializeOwned,
{
    let slot = format!("{}{}", prefix, key);
    let Some(raw) = storage.get(&slot)? else {
        debug!(slot = %slot, "slot empty");
        return Ok(Slot::Empty);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Slot::Stored(value)),
        Err(e) => {
            warn!(slot = %slot, error = %e, "stored slot could not be decoded, serving seed without overwriting it");
            Ok(Slot::Undecodable)
        }
    }
}

fn write_slot<S, T>(storage: &mut S, prefix: &str, key: &str, value: &T) -> Result<(), AppError>
where
    S: StorageBackend,
    T: Serialize + ?Sized,
{
    let slot = format!("{}{}", prefix, key);
    let json = serde_json::to_string(value).map_err(|e| AppError::serialization(format!("Failed to encode slot {}", slot), e))?;
    storage.set(&slot, &json)
}
