use crate::error::app_error::AppError;
use crate::models::user::User;

/// Returns the acting user or fails when nobody is logged in.
pub fn require_session(acting_user: Option<&User>) -> Result<&User, AppError> {
    acting_user.ok_or_else(AppError::no_session)
}

/// Gate for the admin dashboard operations (doctor, service and testimonial moderation).
pub fn require_admin(acting_user: Option<&User>) -> Result<&User, AppError> {
    let user = require_session(acting_user)?;
    if user.is_admin {
        Ok(user)
    } else {
        Err(AppError::PermissionDenied(format!("user {} is not an administrator", user.id)))
    }
}

/// A user may edit their own profile; administrators may edit anyone's.
pub fn require_self_or_admin<'a>(acting_user: Option<&'a User>, target_id: &str) -> Result<&'a User, AppError> {
    let user = require_session(acting_user)?;
    if user.is_admin || user.id == target_id {
        Ok(user)
    } else {
        Err(AppError::PermissionDenied(format!("user {} cannot modify user {}", user.id, target_id)))
    }
}
