//! File-based repository implementations

mod file_appointment_repo;
mod file_user_repo;

pub use file_appointment_repo::FileAppointmentRepository;
pub use file_user_repo::FileUserRepository;
