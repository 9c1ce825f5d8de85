//! Appointment status workflow
//!
//! A new appointment starts as `Pending` and is moved to `Accepted` by
//! staff review. The generic transition accepts any non-empty status
//! string: the vocabulary below is a convention enforced by the calling
//! UI, not a closed set checked here.

use washplan_types::{Error, Result};

/// Initial status of every new appointment.
pub const PENDING: &str = "Pending";

/// Status set by the accept transition.
pub const ACCEPTED: &str = "Accepted";

pub const COMPLETED: &str = "Completed";
pub const CANCELLED: &str = "Cancelled";

/// Status vocabulary offered to callers building a status picker.
pub const KNOWN_STATUSES: [&str; 4] = [PENDING, ACCEPTED, COMPLETED, CANCELLED];

/// Status every appointment starts in.
pub fn initial_status() -> String {
    PENDING.to_string()
}

/// Reject empty or blank status values. Anything else passes; an
/// appointment may move from any status to any other.
pub fn validate_status(status: &str) -> Result<()> {
    if status.trim().is_empty() {
        return Err(Error::InvalidInput("status must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_status_is_pending() {
        assert_eq!(initial_status(), "Pending");
    }

    #[test]
    fn empty_status_is_rejected() {
        assert!(matches!(
            validate_status(""),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            validate_status("   "),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn any_non_empty_status_passes() {
        validate_status("Accepted").unwrap();
        validate_status("Waiting for parts").unwrap();
    }
}
