//! File-based appointment repository
//!
//! Every operation re-reads the full collection from disk, mutates in
//! memory, and writes the full collection back; there is no cache between
//! calls, so external edits to the file are picked up on the next
//! operation. Mutating operations are funnelled through one write mutex so
//! interleaved load/save cycles cannot drop each other's changes or hand
//! out the same id twice. Reads stay lock-free.

use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use chrono::{Local, NaiveDate};

use washplan_domain::repository::AppointmentRepository;
use washplan_domain::service::workflow;
use washplan_store::JsonCollection;
use washplan_types::{Appointment, AppointmentRequest, AppointmentUpdate, Error};

/// Timestamp layout of `created_at`, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// File-based appointment repository (JSON)
pub struct FileAppointmentRepository {
    collection: JsonCollection<Appointment>,
    write_lock: Mutex<()>,
}

impl FileAppointmentRepository {
    /// Bind the repository to `appointments.json` under the store
    /// directory. The file appears on the first write.
    pub fn open(store_dir: PathBuf) -> Self {
        Self {
            collection: JsonCollection::new(store_dir.join("appointments.json")),
            write_lock: Mutex::new(()),
        }
    }

    /// Ids are one past the highest id present, not collection length plus
    /// one: a record removed from the file by hand must not cause the next
    /// create to reuse an existing id.
    fn next_id(appointments: &[Appointment]) -> u64 {
        appointments.iter().map(|a| a.id).max().unwrap_or(0) + 1
    }
}

impl AppointmentRepository for FileAppointmentRepository {
    fn create(&self, request: AppointmentRequest) -> Result<Appointment, Error> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut appointments = self.collection.load_all()?;
        let appointment = Appointment {
            id: Self::next_id(&appointments),
            client_name: request.client_name,
            phone: request.phone,
            plate: request.plate,
            wash_type: request.wash_type,
            service_options: request.service_options,
            created_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            status: workflow::initial_status(),
            extra: Default::default(),
        };
        appointments.push(appointment.clone());
        self.collection.save_all(&appointments)?;
        Ok(appointment)
    }

    fn find_by_id(&self, id: u64) -> Result<Option<Appointment>, Error> {
        let appointments = self.collection.load_all()?;
        Ok(appointments.into_iter().find(|a| a.id == id))
    }

    fn update(&self, id: u64, fields: AppointmentUpdate) -> Result<Appointment, Error> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut appointments = self.collection.load_all()?;
        let appointment = appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(Error::NotFound(id))?;

        appointment.client_name = fields.client_name;
        appointment.phone = fields.phone;
        appointment.plate = fields.plate;
        appointment.wash_type = fields.wash_type;
        appointment.service_options = fields.service_options;
        appointment.created_at = fields.created_at;
        appointment.status = fields.status;
        let updated = appointment.clone();

        self.collection.save_all(&appointments)?;
        Ok(updated)
    }

    fn find_all(&self) -> Result<Vec<Appointment>, Error> {
        self.collection.load_all()
    }

    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Appointment>, Error> {
        let prefix = date.format("%Y-%m-%d").to_string();
        let appointments = self.collection.load_all()?;
        Ok(appointments
            .into_iter()
            .filter(|a| a.created_at.starts_with(&prefix))
            .collect())
    }

    fn set_status(&self, id: u64, status: &str) -> Result<Appointment, Error> {
        workflow::validate_status(status)?;

        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut appointments = self.collection.load_all()?;
        let appointment = appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(Error::NotFound(id))?;
        appointment.status = status.to_string();
        let updated = appointment.clone();

        self.collection.save_all(&appointments)?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use tempfile::tempdir;

    fn request(client: &str, plate: &str) -> AppointmentRequest {
        AppointmentRequest {
            client_name: client.into(),
            phone: "555-0100".into(),
            plate: plate.into(),
            wash_type: "Simple".into(),
            service_options: vec!["Wax".into(), "Interior".into()],
        }
    }

    fn full_update(appointment: &Appointment) -> AppointmentUpdate {
        AppointmentUpdate {
            client_name: appointment.client_name.clone(),
            phone: appointment.phone.clone(),
            plate: appointment.plate.clone(),
            wash_type: appointment.wash_type.clone(),
            service_options: appointment.service_options.clone(),
            created_at: appointment.created_at.clone(),
            status: appointment.status.clone(),
        }
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let dir = tempdir().unwrap();
        let repo = FileAppointmentRepository::open(dir.path().to_path_buf());

        let first = repo.create(request("Maria", "XYZ-9876")).unwrap();
        let second = repo.create(request("John", "AB-1234")).unwrap();
        let third = repo.create(request("Ana", "CD-5678")).unwrap();

        assert_eq!((first.id, second.id, third.id), (1, 2, 3));
        assert_eq!(first.status, "Pending");
    }

    #[test]
    fn create_after_manual_removal_does_not_reuse_ids() {
        let dir = tempdir().unwrap();
        let repo = FileAppointmentRepository::open(dir.path().to_path_buf());

        repo.create(request("Maria", "XYZ-9876")).unwrap();
        repo.create(request("John", "AB-1234")).unwrap();
        repo.create(request("Ana", "CD-5678")).unwrap();

        // Simulate an operator deleting a record from the file by hand.
        // Length-based assignment would now hand out id 3 again.
        let collection: JsonCollection<Appointment> =
            JsonCollection::new(dir.path().join("appointments.json"));
        let kept: Vec<Appointment> = collection
            .load_all()
            .unwrap()
            .into_iter()
            .filter(|a| a.id != 2)
            .collect();
        collection.save_all(&kept).unwrap();

        let fresh = repo.create(request("Rita", "EF-9012")).unwrap();
        assert_eq!(fresh.id, 4);

        let mut ids: Vec<u64> = repo.find_all().unwrap().iter().map(|a| a.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn concurrent_creates_yield_distinct_ids() {
        let dir = tempdir().unwrap();
        let repo = Arc::new(FileAppointmentRepository::open(dir.path().to_path_buf()));

        let mut handles = Vec::new();
        for n in 0..8 {
            let repo = Arc::clone(&repo);
            handles.push(thread::spawn(move || {
                for k in 0..5 {
                    repo.create(request(&format!("Client {n}-{k}"), "AB-1234"))
                        .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let mut ids: Vec<u64> = repo.find_all().unwrap().iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), 40);
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 40);
    }

    #[test]
    fn find_by_id_scans_in_creation_order() {
        let dir = tempdir().unwrap();
        let repo = FileAppointmentRepository::open(dir.path().to_path_buf());

        repo.create(request("Maria", "XYZ-9876")).unwrap();
        let found = repo.find_by_id(1).unwrap().unwrap();
        assert_eq!(found.client_name, "Maria");
        assert!(repo.find_by_id(2).unwrap().is_none());
    }

    #[test]
    fn update_overwrites_every_field() {
        let dir = tempdir().unwrap();
        let repo = FileAppointmentRepository::open(dir.path().to_path_buf());

        let created = repo.create(request("Maria", "XYZ-9876")).unwrap();
        let mut fields = full_update(&created);
        fields.client_name = "Maria Silva".into();
        fields.created_at = "2026-07-01 08:00:00".into();
        fields.status = "Accepted".into();
        fields.service_options = vec!["Polish".into()];

        let updated = repo.update(created.id, fields).unwrap();
        assert_eq!(updated.client_name, "Maria Silva");
        assert_eq!(updated.created_at, "2026-07-01 08:00:00");
        assert_eq!(updated.status, "Accepted");
        assert_eq!(updated.service_options, vec!["Polish".to_string()]);

        let stored = repo.find_by_id(created.id).unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[test]
    fn update_is_idempotent() {
        let dir = tempdir().unwrap();
        let repo = FileAppointmentRepository::open(dir.path().to_path_buf());

        let created = repo.create(request("Maria", "XYZ-9876")).unwrap();
        let mut fields = full_update(&created);
        fields.phone = "555-0199".into();

        let once = repo.update(created.id, fields.clone()).unwrap();
        let twice = repo.update(created.id, fields).unwrap();
        assert_eq!(once, twice);
        assert_eq!(repo.find_by_id(created.id).unwrap().unwrap(), twice);
    }

    #[test]
    fn update_missing_appointment_is_not_found() {
        let dir = tempdir().unwrap();
        let repo = FileAppointmentRepository::open(dir.path().to_path_buf());

        let created = repo.create(request("Maria", "XYZ-9876")).unwrap();
        let result = repo.update(99, full_update(&created));
        assert!(matches!(result, Err(Error::NotFound(99))));
    }

    #[test]
    fn find_by_date_uses_literal_prefix() {
        let dir = tempdir().unwrap();
        let repo = FileAppointmentRepository::open(dir.path().to_path_buf());

        let first = repo.create(request("Maria", "XYZ-9876")).unwrap();
        let second = repo.create(request("John", "AB-1234")).unwrap();

        let mut fields = full_update(&first);
        fields.created_at = "2026-08-25 09:00:00".into();
        repo.update(first.id, fields).unwrap();

        let mut fields = full_update(&second);
        fields.created_at = "2026-08-26 09:00:00".into();
        repo.update(second.id, fields).unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        let todays = repo.find_by_date(date).unwrap();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].id, second.id);
    }

    #[test]
    fn set_status_rejects_empty_status() {
        let dir = tempdir().unwrap();
        let repo = FileAppointmentRepository::open(dir.path().to_path_buf());

        repo.create(request("Maria", "XYZ-9876")).unwrap();
        assert!(matches!(
            repo.set_status(1, ""),
            Err(Error::InvalidInput(_))
        ));
        // Validation happens before the existence check.
        assert!(matches!(
            repo.set_status(99, " "),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn set_status_on_missing_appointment_is_not_found() {
        let dir = tempdir().unwrap();
        let repo = FileAppointmentRepository::open(dir.path().to_path_buf());
        assert!(matches!(
            repo.set_status(1, "Accepted"),
            Err(Error::NotFound(1))
        ));
    }

    #[test]
    fn fresh_store_lists_empty() {
        let dir = tempdir().unwrap();
        let repo = FileAppointmentRepository::open(dir.path().to_path_buf());
        assert!(repo.find_all().unwrap().is_empty());
    }
}
