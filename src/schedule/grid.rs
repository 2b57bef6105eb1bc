//! Resolves a flat appointment collection onto per-cell rendering facts for
//! the (day, slot) booking grid.
//!
//! The model assumes appointments on one day do not overlap; when they do,
//! the first occupying match wins.
use crate::booking::model::{Appointment, AppointmentStatus};
use crate::schedule::slots;

/// Render class of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStatus {
    Available,
    Occupied,
    Pending,
    Completed,
    Cancelled,
    Empty,
}

impl CellStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellStatus::Available => "available",
            CellStatus::Occupied => "occupied",
            CellStatus::Pending => "pending",
            CellStatus::Completed => "completed",
            CellStatus::Cancelled => "cancelled",
            CellStatus::Empty => "empty",
        }
    }

    fn from_appointment(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Available => CellStatus::Available,
            AppointmentStatus::Pending => CellStatus::Pending,
            // A cancellation still pending approval keeps the slot held
            AppointmentStatus::Occupied | AppointmentStatus::CancellationPending => {
                CellStatus::Occupied
            }
            AppointmentStatus::Completed => CellStatus::Completed,
            AppointmentStatus::Cancelled => CellStatus::Cancelled,
        }
    }
}

/// Everything the grid needs to render one cell.
#[derive(Debug, Clone)]
pub struct CellFacts<'a> {
    pub appointment: Option<&'a Appointment>,
    pub status: CellStatus,
    /// The appointment's span starts at this slot.
    pub first_cell: bool,
    /// This is the slot immediately preceding the span's end boundary.
    pub last_cell: bool,
    /// Occupied by a span that started at an earlier slot.
    pub continuation: bool,
    /// `current/max`, emitted only for group appointments.
    pub participant_label: Option<String>,
    pub highlighted: bool,
}

impl CellFacts<'_> {
    fn empty() -> Self {
        CellFacts {
            appointment: None,
            status: CellStatus::Empty,
            first_cell: false,
            last_cell: false,
            continuation: false,
            participant_label: None,
            highlighted: false,
        }
    }

    /// Space-separated class list: status first, then modifiers.
    pub fn css_classes(&self) -> String {
        let mut classes = vec![self.status.as_str()];
        if self.continuation {
            classes.push("continuation");
        }
        if self.first_cell {
            classes.push("first-cell");
        }
        if self.last_cell {
            classes.push("last-cell");
        }
        classes.join(" ")
    }
}

fn occupies(appointment: &Appointment, date_iso: &str, slot_index: usize) -> bool {
    if appointment.date != date_iso {
        return false;
    }
    // An appointment whose start or end is not in the catalog never
    // occupies anything.
    match (
        slots::index_of(&appointment.start_time),
        slots::index_of(&appointment.end_time),
    ) {
        (Some(start), Some(end)) => start <= slot_index && slot_index < end,
        _ => false,
    }
}

/// Resolves one cell of the grid. `hovered_id` links the cell to an
/// externally tracked hover; only `AVAILABLE` appointments highlight, since
/// hovering is a booking affordance.
pub fn resolve_cell<'a>(
    appointments: &'a [Appointment],
    date_iso: &str,
    slot: &str,
    hovered_id: Option<&str>,
) -> CellFacts<'a> {
    let slot = slots::normalize(slot);
    let Some(slot_index) = slots::index_of(&slot) else {
        return CellFacts::empty();
    };
    let Some(appointment) = appointments
        .iter()
        .find(|a| occupies(a, date_iso, slot_index))
    else {
        return CellFacts::empty();
    };

    let first_cell = slots::normalize(&appointment.start_time) == slot;
    let last_cell = slots::normalize(&appointment.end_time) == slots::next_slot(&slot);
    CellFacts {
        appointment: Some(appointment),
        status: CellStatus::from_appointment(appointment.status),
        first_cell,
        last_cell,
        continuation: !first_cell,
        participant_label: appointment.is_group().then(|| {
            format!(
                "{}/{}",
                appointment.current_participants, appointment.max_participants
            )
        }),
        highlighted: appointment.status == AppointmentStatus::Available
            && hovered_id == Some(appointment.appointment_id.as_str()),
    }
}

/// Payload emitted when a cell is clicked. Callers act only when the status
/// is `available` and an appointment exists; authentication is theirs to
/// check, not this module's.
#[derive(Debug, Clone)]
pub struct CellClick {
    pub date: String,
    pub slot: String,
    pub appointment: Option<Appointment>,
    pub status: CellStatus,
}

pub fn click_payload(appointments: &[Appointment], date_iso: &str, slot: &str) -> CellClick {
    let facts = resolve_cell(appointments, date_iso, slot, None);
    CellClick {
        date: date_iso.to_string(),
        slot: slots::normalize(slot),
        appointment: facts.appointment.cloned(),
        status: facts.status,
    }
}
