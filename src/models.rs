pub mod appointment;
pub mod doctor;
pub mod image;
pub mod service;
pub mod testimonial;
pub mod user;
