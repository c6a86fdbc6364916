use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::models::doctor::Doctor;
use crate::models::testimonial::Testimonial;

pub fn approved_testimonials(testimonials: &[Testimonial]) -> Vec<&Testimonial> {
    testimonials.iter().filter(|t| t.approved).collect()
}

/// Moderation queue shown on the admin dashboard.
pub fn pending_testimonials(testimonials: &[Testimonial]) -> Vec<&Testimonial> {
    testimonials.iter().filter(|t| !t.approved).collect()
}

pub fn average_rating(testimonials: &[Testimonial]) -> Option<f64> {
    let approved = approved_testimonials(testimonials);
    if approved.is_empty() {
        return None;
    }

    let total: u32 = approved.iter().map(|t| u32::from(t.rating)).sum();
    Some(f64::from(total) / approved.len() as f64)
}

pub fn appointments_for_user<'a>(appointments: &'a [Appointment], user_id: &str) -> Vec<&'a Appointment> {
    appointments.iter().filter(|a| a.user_id == user_id).collect()
}

/// Splits a patient's bookings into (upcoming, past).
pub fn split_by_status<'a>(appointments: &[&'a Appointment]) -> (Vec<&'a Appointment>, Vec<&'a Appointment>) {
    appointments.iter().copied().partition(|a| a.status == AppointmentStatus::Upcoming)
}

/// Distinct specialties in first-seen order, as offered in the booking form.
pub fn specialties(doctors: &[Doctor]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for doctor in doctors {
        if !seen.contains(&doctor.specialty.as_str()) {
            seen.push(&doctor.specialty);
        }
    }
    seen
}

/// An empty specialty means "no filter".
pub fn doctors_by_specialty<'a>(doctors: &'a [Doctor], specialty: &str) -> Vec<&'a Doctor> {
    doctors.iter().filter(|d| specialty.is_empty() || d.specialty == specialty).collect()
}
