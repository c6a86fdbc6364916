use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Upcoming,
    Past,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub time: String,
    pub specialty: String,
    /// Doctor's display name, copied by value at booking time.
    pub doctor: String,
    pub status: AppointmentStatus,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct AppointmentRequest {
    #[validate(custom(function = "validate_date"))]
    pub date: String,
    #[validate(custom(function = "validate_time"))]
    pub time: String,
    #[validate(length(min = 1))]
    pub specialty: String,
    #[validate(length(min = 1))]
    pub doctor: String,
}

fn validate_date(date: &str) -> Result<(), ValidationError> {
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_date"))
    }
}

fn validate_time(time: &str) -> Result<(), ValidationError> {
    if NaiveTime::parse_from_str(time, "%H:%M").is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_time"))
    }
}
