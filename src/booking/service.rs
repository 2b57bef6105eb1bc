//! Orchestration between the repository collaborator and the cached
//! snapshot.
//!
//! Admin actions mutate the cache eagerly, but only after the API confirms;
//! user actions are fire-and-forget and the cache is reconciled by the next
//! full refresh. That asymmetry is the contract, not an oversight: a user
//! request is only a request until staff acts on it, while an admin action
//! *is* the staff acting.
use tracing::{debug, info};

use crate::booking::model::{Appointment, NewAppointment};
use crate::booking::status::AdminAction;
use crate::booking::store::AppointmentStore;
use crate::client::{ApiError, AppointmentRepository};
use crate::schedule::slots;

pub struct BookingService<R> {
    repo: R,
    store: AppointmentStore,
}

impl<R: AppointmentRepository> BookingService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            store: AppointmentStore::new(),
        }
    }

    pub fn store(&self) -> &AppointmentStore {
        &self.store
    }

    pub async fn refresh_available(&mut self) -> Result<(), ApiError> {
        let items = self.repo.list_appointments().await?;
        debug!(count = items.len(), "replaced available appointments");
        self.store.replace_available(items);
        Ok(())
    }

    pub async fn refresh_mine(&mut self, email: &str) -> Result<(), ApiError> {
        let items = self.repo.list_user_appointments(email).await?;
        debug!(count = items.len(), email, "replaced user appointments");
        self.store.replace_mine(items);
        Ok(())
    }

    /// Creates a new slot; the API answers with the `AVAILABLE` record,
    /// which is appended to the cache.
    pub async fn create(&mut self, new: &NewAppointment) -> Result<Appointment, ApiError> {
        if !slots::is_valid_span(&new.start_time, &new.end_time) {
            return Err(ApiError {
                status: 0,
                message: format!(
                    "invalid time span {}-{}",
                    new.start_time, new.end_time
                ),
            });
        }
        let appointment = self.repo.create_appointment(new).await?;
        info!(id = %appointment.appointment_id, "created appointment");
        self.store.push_available(appointment.clone());
        Ok(appointment)
    }

    /// Patches the free-text note; never a status change.
    pub async fn update_note(&mut self, id: &str, notes: &str) -> Result<(), ApiError> {
        self.repo.patch_note(id, notes).await?;
        self.store.set_notes(id, notes);
        Ok(())
    }

    // User actions: forwarded to the API, cache untouched until the next
    // refresh. They take `&self` so a local mutation is unrepresentable.

    pub async fn request(&self, id: &str, email: &str) -> Result<(), ApiError> {
        self.repo.request(id, email).await
    }

    pub async fn join_group(&self, id: &str, email: &str) -> Result<(), ApiError> {
        self.repo.join_group(id, email).await
    }

    pub async fn leave_group(&self, id: &str, email: &str) -> Result<(), ApiError> {
        self.repo.leave_group(id, email).await
    }

    pub async fn request_cancellation(&self, id: &str) -> Result<(), ApiError> {
        self.repo.request_cancellation(id).await
    }

    // Admin actions: all-or-nothing. The cache changes only after the API
    // confirms, so a failed call leaves it in its prior state.

    pub async fn assign(&mut self, id: &str, email: &str) -> Result<(), ApiError> {
        self.repo.assign(id, email).await?;
        info!(id, email, "assigned appointment");
        self.store.apply(
            id,
            &AdminAction::Assign {
                user_email: email.to_string(),
            },
        );
        Ok(())
    }

    pub async fn approve(&mut self, id: &str) -> Result<(), ApiError> {
        self.repo.approve(id).await?;
        info!(id, "approved booking request");
        self.store.apply(id, &AdminAction::Approve);
        Ok(())
    }

    pub async fn approve_cancellation(&mut self, id: &str) -> Result<(), ApiError> {
        self.repo.approve_cancellation(id).await?;
        info!(id, "approved cancellation");
        self.store.apply(id, &AdminAction::ApproveCancellation);
        Ok(())
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), ApiError> {
        self.repo.delete(id).await?;
        info!(id, "deleted appointment");
        self.store.remove(id);
        Ok(())
    }
}
