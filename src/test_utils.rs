use crate::database::LocalRepository;
use crate::error::app_error::AppError;
use crate::models::appointment::AppointmentRequest;
use crate::models::user::{RegisterRequest, User};
use crate::storage::{MemoryStorage, StorageBackend};
use std::cell::Cell;
use std::rc::Rc;

pub fn memory_repository() -> LocalRepository<MemoryStorage> {
    LocalRepository::open(MemoryStorage::default()).expect("memory storage never fails")
}

pub fn login<S: StorageBackend>(repository: &mut LocalRepository<S>, email: &str, password: &str) -> User {
    repository
        .authenticate(email, password)
        .expect("storage failure during login")
        .unwrap_or_else(|| panic!("credentials for {} were rejected", email))
}

pub fn register_request(email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        name: "Ana".to_string(),
        last_name: "Ruiz".to_string(),
        dni: "1".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: password.to_string(),
        phone: None,
        address: None,
        profile_image: None,
    }
}

pub fn appointment_request() -> AppointmentRequest {
    AppointmentRequest {
        date: "2025-03-14".to_string(),
        time: "16:30".to_string(),
        specialty: "Endodoncia".to_string(),
        doctor: "Dra. Patricia Silva".to_string(),
    }
}

/// Memory storage whose reads or writes can be made to fail.
#[derive(Debug, Default)]
pub struct FailingStorage {
    inner: MemoryStorage,
    fail_reads: bool,
    fail_writes: Rc<Cell<bool>>,
}

impl FailingStorage {
    pub fn unreadable() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    /// Flip to `true` to make every later write fail.
    pub fn write_switch(&self) -> Rc<Cell<bool>> {
        self.fail_writes.clone()
    }

    fn fault(key: &str) -> AppError {
        AppError::storage(format!("Injected fault on {}", key), std::io::Error::other("quota exceeded"))
    }
}

impl StorageBackend for FailingStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        if self.fail_reads {
            return Err(Self::fault(key));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        if self.fail_writes.get() {
            return Err(Self::fault(key));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), AppError> {
        if self.fail_writes.get() {
            return Err(Self::fault(key));
        }
        self.inner.remove(key)
    }
}
