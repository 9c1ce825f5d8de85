//! Infrastructure layer: file-backed persistence

pub mod persistence;

pub use persistence::{FileAppointmentRepository, FileUserRepository};
