pub mod appointment;
pub mod doctor;
pub mod local_repository;
pub mod seed;
pub mod service;
pub mod session;
pub mod testimonial;
pub mod user;

pub use local_repository::LocalRepository;
