//! Repository trait definitions for data persistence

use chrono::NaiveDate;

use washplan_types::{Appointment, AppointmentRequest, AppointmentUpdate, Error, UserAccount};

/// Repository for wash-service appointments.
///
/// Implementations work against durable storage on every call; there is no
/// long-lived in-memory copy of the collection between operations.
pub trait AppointmentRepository {
    /// Create an appointment with a fresh unique id and the workflow's
    /// initial status.
    fn create(&self, request: AppointmentRequest) -> Result<Appointment, Error>;

    /// Find an appointment by id. Scan order is creation order, so the
    /// first stored match is authoritative.
    fn find_by_id(&self, id: u64) -> Result<Option<Appointment>, Error>;

    /// Overwrite every mutable field of an appointment.
    fn update(&self, id: u64, fields: AppointmentUpdate) -> Result<Appointment, Error>;

    /// All appointments in creation order.
    fn find_all(&self) -> Result<Vec<Appointment>, Error>;

    /// Appointments created on the given day.
    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Appointment>, Error>;

    /// Set the status of an appointment.
    fn set_status(&self, id: u64, status: &str) -> Result<Appointment, Error>;
}

/// Repository for staff accounts, owned by the authentication
/// collaborator. The scheduling core only ever talks to this interface.
pub trait UserAccountRepository {
    /// Check a username/password pair against the stored accounts.
    fn verify(&self, username: &str, password: &str) -> Result<Option<UserAccount>, Error>;

    /// All accounts.
    fn find_all(&self) -> Result<Vec<UserAccount>, Error>;

    /// Register a new account. Usernames are unique.
    fn register(&mut self, username: &str, password: &str) -> Result<UserAccount, Error>;

    /// Overwrite an account's username and credential.
    fn update(&mut self, id: u64, username: &str, password: &str) -> Result<UserAccount, Error>;

    /// Delete an account. Returns false when no such account exists.
    fn delete(&mut self, id: u64) -> Result<bool, Error>;
}
