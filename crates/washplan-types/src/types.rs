//! Record types for appointments and user accounts

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single wash-service appointment request.
///
/// The serialized field names are part of the on-disk layout and must stay
/// stable so existing deployments can be migrated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Unique identifier, assigned at creation, never reused.
    pub id: u64,
    pub client_name: String,
    pub phone: String,
    pub plate: String,
    /// Service category, drawn from an externally configured set.
    pub wash_type: String,
    /// Chosen extras from the service catalog, order preserved.
    #[serde(default)]
    pub service_options: Vec<String>,
    /// Creation timestamp, `YYYY-MM-DD HH:MM:SS`. Set once at creation and
    /// rewritable only through an explicit edit.
    pub created_at: String,
    pub status: String,
    /// Fields this version does not know about, carried verbatim through
    /// load and save.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Appointment {
    /// Service options joined for display.
    pub fn service_options_display(&self) -> String {
        self.service_options.join(", ")
    }
}

/// Input for creating an appointment.
#[derive(Debug, Clone, Default)]
pub struct AppointmentRequest {
    pub client_name: String,
    pub phone: String,
    pub plate: String,
    pub wash_type: String,
    pub service_options: Vec<String>,
}

/// Input for editing an appointment. Every mutable field is overwritten,
/// including `status` and `created_at`; this is a full overwrite, not a
/// merge.
#[derive(Debug, Clone)]
pub struct AppointmentUpdate {
    pub client_name: String,
    pub phone: String,
    pub plate: String,
    pub wash_type: String,
    pub service_options: Vec<String>,
    pub created_at: String,
    pub status: String,
}

/// A staff account, owned by the authentication collaborator. The
/// credential is opaque to this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: u64,
    pub username: String,
    pub password: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
