//! Read-mostly cached snapshot of the remote appointment collections.
//!
//! The remote API owns the records; refreshes replace a collection wholesale
//! and only the named admin mutators change anything in between. A record
//! may appear in both the public and the user-scoped collection, so every
//! mutator is applied to both.
use crate::booking::model::Appointment;
use crate::booking::status::{AdminAction, apply_admin};

#[derive(Debug, Default, Clone)]
pub struct AppointmentStore {
    available: Vec<Appointment>,
    mine: Vec<Appointment>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn available(&self) -> &[Appointment] {
        &self.available
    }

    pub fn mine(&self) -> &[Appointment] {
        &self.mine
    }

    pub fn find(&self, id: &str) -> Option<&Appointment> {
        self.available
            .iter()
            .chain(self.mine.iter())
            .find(|a| a.appointment_id == id)
    }

    pub fn replace_available(&mut self, items: Vec<Appointment>) {
        self.available = items;
    }

    pub fn replace_mine(&mut self, items: Vec<Appointment>) {
        self.mine = items;
    }

    pub fn push_available(&mut self, appointment: Appointment) {
        self.available.push(appointment);
    }

    /// Applies an admin action to every collection holding the record.
    /// Returns whether any record changed.
    pub fn apply(&mut self, id: &str, action: &AdminAction) -> bool {
        let mut changed = false;
        for appointment in self
            .available
            .iter_mut()
            .chain(self.mine.iter_mut())
            .filter(|a| a.appointment_id == id)
        {
            changed |= apply_admin(appointment, action);
        }
        changed
    }

    /// Patches the note text; status is never touched here.
    pub fn set_notes(&mut self, id: &str, notes: &str) {
        for appointment in self
            .available
            .iter_mut()
            .chain(self.mine.iter_mut())
            .filter(|a| a.appointment_id == id)
        {
            appointment.notes = notes.to_string();
        }
    }

    /// Removes the record from every collection simultaneously.
    pub fn remove(&mut self, id: &str) {
        self.available.retain(|a| a.appointment_id != id);
        self.mine.retain(|a| a.appointment_id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::model::AppointmentStatus;

    fn appointment(id: &str, status: AppointmentStatus) -> Appointment {
        Appointment {
            appointment_id: id.to_string(),
            therapy_id: "t1".to_string(),
            date: "2025-11-10".to_string(),
            start_time: "10:00".to_string(),
            end_time: "10:20".to_string(),
            max_participants: 1,
            current_participants: 0,
            user_email: None,
            participants: Vec::new(),
            status,
            notes: String::new(),
            created_at: None,
        }
    }

    fn store_with(id: &str, status: AppointmentStatus) -> AppointmentStore {
        let mut store = AppointmentStore::new();
        store.replace_available(vec![appointment(id, status)]);
        store.replace_mine(vec![appointment(id, status)]);
        store
    }

    #[test]
    fn admin_actions_reach_both_collections() {
        let mut store = store_with("a1", AppointmentStatus::Pending);
        assert!(store.apply("a1", &AdminAction::Approve));
        assert_eq!(store.available()[0].status, AppointmentStatus::Occupied);
        assert_eq!(store.mine()[0].status, AppointmentStatus::Occupied);
    }

    #[test]
    fn guarded_actions_change_nothing_on_the_wrong_status() {
        let mut store = store_with("a1", AppointmentStatus::Available);
        assert!(!store.apply("a1", &AdminAction::Approve));
        assert_eq!(store.available()[0].status, AppointmentStatus::Available);
    }

    #[test]
    fn unknown_ids_are_a_no_op() {
        let mut store = store_with("a1", AppointmentStatus::Pending);
        assert!(!store.apply("missing", &AdminAction::Approve));
        store.remove("missing");
        assert_eq!(store.available().len(), 1);
    }

    #[test]
    fn remove_drops_the_record_from_both_collections() {
        let mut store = store_with("a1", AppointmentStatus::Occupied);
        store.push_available(appointment("a2", AppointmentStatus::Available));
        store.remove("a1");
        assert_eq!(store.available().len(), 1);
        assert_eq!(store.available()[0].appointment_id, "a2");
        assert!(store.mine().is_empty());
    }

    #[test]
    fn notes_patch_does_not_touch_status() {
        let mut store = store_with("a1", AppointmentStatus::Pending);
        store.set_notes("a1", "traer informe previo");
        assert_eq!(store.available()[0].notes, "traer informe previo");
        assert_eq!(store.available()[0].status, AppointmentStatus::Pending);
        assert_eq!(store.mine()[0].notes, "traer informe previo");
    }
}
