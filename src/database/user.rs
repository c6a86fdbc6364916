use crate::auth::require_self_or_admin;
use crate::database::local_repository::{LocalRepository, new_id};
use crate::error::app_error::AppError;
use crate::models::image::parse_image_source;
use crate::models::user::{PasswordChange, RegisterRequest, User};
use crate::storage::StorageBackend;
use argon2::Argon2;
use password_hash::rand_core::OsRng;
use password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use std::sync::LazyLock;
use tracing::{info, warn};
use validator::{Validate, ValidationError, ValidationErrors};

/// A real Argon2 hash generated once, used as a timing decoy so that logins for
/// unknown emails cost the same as logins for existing ones.
static DUMMY_HASH: LazyLock<String> = LazyLock::new(|| password_hash("dummy-never-matches").expect("failed to generate dummy hash"));

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PasswordCheck {
    Match,
    /// Stored value predates hashing and equals the supplied password.
    LegacyMatch,
    Mismatch,
}

impl<S: StorageBackend> LocalRepository<S> {
    /// Logs in the first user whose email and password both match.
    ///
    /// Returns `Ok(None)` on a mismatch and leaves the session untouched.
    pub fn authenticate(&mut self, email: &str, password: &str) -> Result<Option<User>, AppError> {
        let candidates: Vec<usize> = self.users.iter().enumerate().filter(|(_, u)| u.email == email).map(|(i, _)| i).collect();

        if candidates.is_empty() {
            dummy_verify(password);
            info!(email = %email, "login failed: unknown email");
            return Ok(None);
        }

        for index in candidates {
            match check_password(&self.users[index].password, password) {
                PasswordCheck::Mismatch => continue,
                PasswordCheck::LegacyMatch => {
                    self.users[index].password = password_hash(password)?;
                    self.persist_users()?;
                    info!(user_id = %self.users[index].id, "upgraded plaintext password to argon2");
                }
                PasswordCheck::Match => {}
            }

            let user = self.users[index].clone();
            self.current_user = Some(user.clone());
            self.persist_session()?;
            info!(user_id = %user.id, is_admin = user.is_admin, "user logged in");
            return Ok(Some(user));
        }

        info!(email = %email, "login failed: wrong password");
        Ok(None)
    }

    /// Creates a non-admin account. Returns `Ok(false)` when the email is taken;
    /// the collision check runs before field validation.
    pub fn register(&mut self, request: &RegisterRequest) -> Result<bool, AppError> {
        if self.users.iter().any(|u| u.email == request.email) {
            info!(email = %request.email, "registration rejected: email already registered");
            return Ok(false);
        }

        request.validate()?;

        let user = User {
            id: new_id(),
            name: request.name.clone(),
            last_name: request.last_name.clone(),
            dni: request.dni.clone(),
            email: request.email.clone(),
            password: password_hash(&request.password)?,
            is_admin: false,
            profile_image: request.profile_image.clone(),
            phone: request.phone.clone(),
            address: request.address.clone(),
        };

        info!(user_id = %user.id, "user registered");
        self.users.push(user);
        self.persist_users()?;

        Ok(true)
    }

    /// Replaces the stored record with the same id and refreshes the session
    /// pointer when it refers to that user.
    pub fn update_user(&mut self, mut user: User) -> Result<(), AppError> {
        let actor_is_admin = require_self_or_admin(self.current_user.as_ref(), &user.id)?.is_admin;

        if !actor_is_admin && user.is_admin {
            return Err(AppError::PermissionDenied("only administrators can grant administrator rights".to_string()));
        }

        if let Some(image) = &user.profile_image
            && parse_image_source(image).is_none()
        {
            let mut errors = ValidationErrors::new();
            errors.add("profile_image", ValidationError::new("invalid_image_source"));
            return Err(errors.into());
        }

        // The profile form may carry a freshly typed password; never store it in the clear.
        if PasswordHash::new(&user.password).is_err() {
            user.password = password_hash(&user.password)?;
        }

        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user.clone(),
            None => warn!(user_id = %user.id, "update for unknown user, collection unchanged"),
        }
        self.persist_users()?;

        if self.current_user.as_ref().is_some_and(|current| current.id == user.id) {
            self.current_user = Some(user.clone());
            self.persist_session()?;
        }

        info!(user_id = %user.id, "user updated");
        Ok(())
    }

    /// Verifies the current password and replaces it with the new one.
    pub fn change_password(&mut self, user_id: &str, current_password: &str, new_password: &str) -> Result<(), AppError> {
        let actor_id = require_self_or_admin(self.current_user.as_ref(), user_id)?.id.clone();
        if actor_id != user_id {
            return Err(AppError::PermissionDenied("passwords can only be changed by their owner".to_string()));
        }

        PasswordChange {
            new_password: new_password.to_string(),
        }
        .validate()?;

        let user = self.users.iter_mut().find(|u| u.id == user_id).ok_or(AppError::UserNotFound)?;
        if check_password(&user.password, current_password) == PasswordCheck::Mismatch {
            return Err(AppError::InvalidCredentials);
        }

        user.password = password_hash(new_password)?;
        let updated = user.clone();
        self.persist_users()?;

        if self.current_user.as_ref().is_some_and(|current| current.id == user_id) {
            self.current_user = Some(updated);
            self.persist_session()?;
        }

        info!(user_id = %user_id, "password changed");
        Ok(())
    }
}

pub(crate) fn password_hash(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::password_hash("Failed to hash password", e))?;

    Ok(hash.to_string())
}

pub(crate) fn check_password(stored: &str, password: &str) -> PasswordCheck {
    match PasswordHash::new(stored) {
        Ok(hash) => {
            if Argon2::default().verify_password(password.as_bytes(), &hash).is_ok() {
                PasswordCheck::Match
            } else {
                PasswordCheck::Mismatch
            }
        }
        Err(_) if stored == password => PasswordCheck::LegacyMatch,
        Err(_) => PasswordCheck::Mismatch,
    }
}

fn dummy_verify(password: &str) {
    let _ = check_password(&DUMMY_HASH, password);
}
