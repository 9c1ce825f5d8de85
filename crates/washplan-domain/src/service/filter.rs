//! Appointment filter engine
//!
//! Drives the reporting and print views. Every criterion is optional; an
//! empty criterion matches everything. Name and plate filters use a
//! truncate-then-equal prefix test: the stored value, case-folded and cut
//! to the filter's length, must equal the filter. A filter longer than the
//! stored value never matches. This is deliberately not a substring
//! search.

use std::collections::BTreeSet;

use washplan_types::Appointment;

/// Caller-supplied criteria for selecting appointments.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    /// Client-name prefix, case-insensitive.
    pub client: Option<String>,
    /// Plate prefix, case-insensitive, hyphens ignored on both sides.
    pub plate: Option<String>,
    /// Month of creation, `YYYY-MM`.
    pub month: Option<String>,
    /// Acceptable status values. Empty set means no status restriction.
    pub statuses: BTreeSet<String>,
}

impl FilterSpec {
    /// Same criteria with the month restriction dropped. The print view
    /// filters by name, plate, and status only.
    pub fn without_month(&self) -> FilterSpec {
        FilterSpec {
            month: None,
            ..self.clone()
        }
    }

    /// True when the appointment satisfies every criterion.
    pub fn matches(&self, appointment: &Appointment) -> bool {
        if let Some(ref client) = self.client {
            if !prefix_matches(client, &appointment.client_name) {
                return false;
            }
        }
        if let Some(ref plate) = self.plate {
            let filter = plate.replace('-', "");
            let stored = appointment.plate.replace('-', "");
            if !prefix_matches(&filter, &stored) {
                return false;
            }
        }
        if let Some(ref month) = self.month {
            if !month.is_empty() {
                let stored_month: String = appointment.created_at.chars().take(7).collect();
                if stored_month != *month {
                    return false;
                }
            }
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&appointment.status) {
            return false;
        }
        true
    }

    /// The matching subset of a collection, original order preserved.
    pub fn apply(&self, appointments: &[Appointment]) -> Vec<Appointment> {
        appointments
            .iter()
            .filter(|a| self.matches(a))
            .cloned()
            .collect()
    }
}

/// Truncate-then-equal prefix test, case-folded.
fn prefix_matches(filter: &str, stored: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let filter = filter.to_lowercase();
    let prefix: String = stored
        .to_lowercase()
        .chars()
        .take(filter.chars().count())
        .collect();
    prefix == filter
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment(id: u64, client: &str, plate: &str, created_at: &str, status: &str) -> Appointment {
        Appointment {
            id,
            client_name: client.into(),
            phone: "555-0100".into(),
            plate: plate.into(),
            wash_type: "Simple".into(),
            service_options: vec![],
            created_at: created_at.into(),
            status: status.into(),
            extra: Default::default(),
        }
    }

    fn statuses(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_spec_matches_everything() {
        let appt = appointment(1, "John", "AB-1234", "2026-08-01 10:00:00", "Pending");
        assert!(FilterSpec::default().matches(&appt));
    }

    #[test]
    fn client_prefix_is_truncate_then_equal() {
        let john = appointment(1, "John", "AB-1234", "2026-08-01 10:00:00", "Pending");
        let spec = FilterSpec {
            client: Some("Jo".into()),
            ..Default::default()
        };
        assert!(spec.matches(&john));

        // Filter longer than the stored name: "An" truncated to 3 chars is
        // still "an", which never equals "ana".
        let an = appointment(2, "An", "AB-1234", "2026-08-01 10:00:00", "Pending");
        let spec = FilterSpec {
            client: Some("Ana".into()),
            ..Default::default()
        };
        assert!(!spec.matches(&an));
    }

    #[test]
    fn client_prefix_is_case_folded() {
        let appt = appointment(1, "JOana", "AB-1234", "2026-08-01 10:00:00", "Pending");
        let spec = FilterSpec {
            client: Some("joa".into()),
            ..Default::default()
        };
        assert!(spec.matches(&appt));
    }

    #[test]
    fn client_prefix_is_not_a_substring_search() {
        let appt = appointment(1, "Maria John", "AB-1234", "2026-08-01 10:00:00", "Pending");
        let spec = FilterSpec {
            client: Some("John".into()),
            ..Default::default()
        };
        assert!(!spec.matches(&appt));
    }

    #[test]
    fn plate_filter_ignores_hyphens_on_both_sides() {
        let bare = appointment(1, "John", "AB1234", "2026-08-01 10:00:00", "Pending");
        let dashed = appointment(2, "John", "AB-1234", "2026-08-01 10:00:00", "Pending");
        let spec = FilterSpec {
            plate: Some("ab-1234".into()),
            ..Default::default()
        };
        assert!(spec.matches(&bare));
        assert!(spec.matches(&dashed));

        let other = appointment(3, "John", "CD-5678", "2026-08-01 10:00:00", "Pending");
        assert!(!spec.matches(&other));
    }

    #[test]
    fn month_filter_compares_first_seven_chars() {
        let august = appointment(1, "John", "AB-1234", "2026-08-15 10:00:00", "Pending");
        let spec = FilterSpec {
            month: Some("2026-08".into()),
            ..Default::default()
        };
        assert!(spec.matches(&august));

        let july = appointment(2, "John", "AB-1234", "2026-07-15 10:00:00", "Pending");
        assert!(!spec.matches(&july));
    }

    #[test]
    fn status_set_restricts_membership() {
        let pending = appointment(1, "John", "AB-1234", "2026-08-01 10:00:00", "Pending");
        let accepted = appointment(2, "Ana", "CD-5678", "2026-08-01 11:00:00", "Accepted");
        let spec = FilterSpec {
            statuses: statuses(&["Accepted"]),
            ..Default::default()
        };
        assert!(!spec.matches(&pending));
        assert!(spec.matches(&accepted));
    }

    #[test]
    fn empty_status_set_matches_all() {
        let pending = appointment(1, "John", "AB-1234", "2026-08-01 10:00:00", "Pending");
        assert!(FilterSpec::default().matches(&pending));
    }

    #[test]
    fn apply_preserves_collection_order() {
        let items = vec![
            appointment(1, "John", "AB-1234", "2026-08-01 10:00:00", "Accepted"),
            appointment(2, "Ana", "CD-5678", "2026-08-02 10:00:00", "Pending"),
            appointment(3, "Joana", "EF-9012", "2026-08-03 10:00:00", "Accepted"),
        ];
        let spec = FilterSpec {
            statuses: statuses(&["Accepted"]),
            ..Default::default()
        };
        let result = spec.apply(&items);
        let ids: Vec<u64> = result.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn all_criteria_must_hold() {
        let appt = appointment(1, "John", "AB-1234", "2026-08-01 10:00:00", "Accepted");
        let spec = FilterSpec {
            client: Some("jo".into()),
            plate: Some("AB".into()),
            month: Some("2026-08".into()),
            statuses: statuses(&["Accepted"]),
        };
        assert!(spec.matches(&appt));

        let wrong_month = FilterSpec {
            month: Some("2026-07".into()),
            ..spec.clone()
        };
        assert!(!wrong_month.matches(&appt));
    }

    #[test]
    fn without_month_drops_only_the_month() {
        let spec = FilterSpec {
            client: Some("jo".into()),
            month: Some("2026-07".into()),
            statuses: statuses(&["Accepted"]),
            ..Default::default()
        };
        let print_spec = spec.without_month();
        assert!(print_spec.month.is_none());
        assert_eq!(print_spec.client, spec.client);
        assert_eq!(print_spec.statuses, spec.statuses);

        let appt = appointment(1, "John", "AB-1234", "2026-08-01 10:00:00", "Accepted");
        assert!(!spec.matches(&appt));
        assert!(print_spec.matches(&appt));
    }
}
