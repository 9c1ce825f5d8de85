//! Repository adapters for the persistence layer

use std::path::PathBuf;

use washplan_infra::persistence::{FileAppointmentRepository, FileUserRepository};
use washplan_types::Result;

use crate::config::Config;

/// Open the file-based appointment repository
pub fn open_appointment_repo(config: &Config) -> Result<FileAppointmentRepository> {
    let data_dir = config.data_dir()?;
    Ok(FileAppointmentRepository::open(data_dir))
}

/// Open the file-based user account repository
pub fn open_user_repo(config: &Config) -> Result<FileUserRepository> {
    let data_dir = config.data_dir()?;
    FileUserRepository::open(data_dir)
}

/// Open the appointment repository at a custom directory
pub fn open_appointment_repo_at(data_dir: PathBuf) -> FileAppointmentRepository {
    FileAppointmentRepository::open(data_dir)
}

/// Open the user account repository at a custom directory
pub fn open_user_repo_at(data_dir: PathBuf) -> Result<FileUserRepository> {
    FileUserRepository::open(data_dir)
}
