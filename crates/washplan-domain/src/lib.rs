//! Domain layer: repository traits, status workflow, filter engine

pub mod repository;
pub mod service;

pub use repository::{AppointmentRepository, UserAccountRepository};
pub use service::filter::FilterSpec;
