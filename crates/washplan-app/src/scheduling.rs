//! Scheduling service - the boundary the presentation layer calls
//!
//! Thin orchestration over the appointment repository and the domain
//! services. Lookups that come back empty surface `Error::NotFound`; the
//! caller decides how to present it.

use std::path::PathBuf;

use chrono::NaiveDate;

use washplan_domain::repository::AppointmentRepository;
use washplan_domain::service::workflow;
use washplan_domain::FilterSpec;
use washplan_infra::persistence::FileAppointmentRepository;
use washplan_types::{Appointment, AppointmentRequest, AppointmentUpdate, Error, Result};

/// Appointment scheduling boundary.
pub struct SchedulingService {
    appointments: FileAppointmentRepository,
}

impl SchedulingService {
    /// Open the service over the given data directory.
    pub fn open(data_dir: PathBuf) -> Self {
        Self {
            appointments: FileAppointmentRepository::open(data_dir),
        }
    }

    /// Wrap an already-opened repository.
    pub fn new(appointments: FileAppointmentRepository) -> Self {
        Self { appointments }
    }

    /// Submit a new appointment request. Starts in the workflow's initial
    /// status with a fresh unique id.
    pub fn create_appointment(&self, request: AppointmentRequest) -> Result<Appointment> {
        self.appointments.create(request)
    }

    /// Fetch one appointment.
    pub fn get_appointment(&self, id: u64) -> Result<Appointment> {
        self.appointments.find_by_id(id)?.ok_or(Error::NotFound(id))
    }

    /// Overwrite every mutable field of an appointment.
    pub fn update_appointment(&self, id: u64, fields: AppointmentUpdate) -> Result<Appointment> {
        self.appointments.update(id, fields)
    }

    /// All appointments, creation order.
    pub fn list_appointments(&self) -> Result<Vec<Appointment>> {
        self.appointments.find_all()
    }

    /// Appointments created on the given day. The caller supplies the
    /// date, so "today" is the presentation layer's notion of today.
    pub fn list_todays_appointments(&self, today: NaiveDate) -> Result<Vec<Appointment>> {
        self.appointments.find_by_date(today)
    }

    /// Accept an appointment. Idempotent: re-accepting an accepted
    /// appointment succeeds and re-saves.
    pub fn accept_appointment(&self, id: u64) -> Result<Appointment> {
        self.appointments.set_status(id, workflow::ACCEPTED)
    }

    /// Generic status transition. Any non-empty status is allowed.
    pub fn set_appointment_status(&self, id: u64, status: &str) -> Result<Appointment> {
        self.appointments.set_status(id, status)
    }

    /// Appointments matching the filter, in collection order.
    pub fn query_appointments(&self, filter: &FilterSpec) -> Result<Vec<Appointment>> {
        let appointments = self.appointments.find_all()?;
        Ok(filter.apply(&appointments))
    }
}
