//! The status lifecycle of a cached appointment.
//!
//! Only the admin actions listed here ever change a cached status;
//! user-initiated requests are forwarded to the API and reconciled by the
//! next full refresh. Illegal transitions are no-ops, not errors.
use tracing::warn;

use crate::booking::model::{Appointment, AppointmentStatus};

impl AppointmentStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Completed | AppointmentStatus::Cancelled
        )
    }
}

/// The admin operations that mutate cached status eagerly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    /// Direct override: occupies the slot for `user_email` regardless of
    /// prior status.
    Assign { user_email: String },
    /// Confirms a pending booking request.
    Approve,
    /// Confirms a pending cancellation request.
    ApproveCancellation,
}

/// Applies an admin action to one record. Returns whether anything changed;
/// a guarded transition whose precondition does not hold leaves the record
/// untouched.
pub fn apply_admin(appointment: &mut Appointment, action: &AdminAction) -> bool {
    match action {
        AdminAction::Assign { user_email } => {
            appointment.status = AppointmentStatus::Occupied;
            appointment.user_email = Some(user_email.clone());
            true
        }
        AdminAction::Approve => transition(
            appointment,
            AppointmentStatus::Pending,
            AppointmentStatus::Occupied,
        ),
        AdminAction::ApproveCancellation => transition(
            appointment,
            AppointmentStatus::CancellationPending,
            AppointmentStatus::Cancelled,
        ),
    }
}

fn transition(
    appointment: &mut Appointment,
    from: AppointmentStatus,
    to: AppointmentStatus,
) -> bool {
    if appointment.status != from {
        warn!(
            id = %appointment.appointment_id,
            status = ?appointment.status,
            "rejected transition to {:?}",
            to
        );
        return false;
    }
    appointment.status = to;
    true
}
