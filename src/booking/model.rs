//! Wire types for the appointment API
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status as reported by the remote API. Transitions applied to the local
/// cache go through `booking::status`, never by writing this field directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Available,
    Pending,
    Occupied,
    CancellationPending,
    Cancelled,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub appointment_id: String,
    pub therapy_id: String,
    /// ISO date `YYYY-MM-DD`, local time, no timezone conversion.
    pub date: String,
    /// Catalog slot strings, `H:MM` without a leading zero.
    pub start_time: String,
    pub end_time: String,
    #[serde(default = "default_max_participants")]
    pub max_participants: u32,
    #[serde(default)]
    pub current_participants: u32,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub participants: Vec<Participant>,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_max_participants() -> u32 {
    1
}

impl Appointment {
    /// Group appointments accrue participants; individual ones never do.
    pub fn is_group(&self) -> bool {
        self.max_participants > 1
    }

    /// True when `email` is the primary booker or any group participant.
    pub fn involves_user(&self, email: &str) -> bool {
        self.user_email.as_deref() == Some(email)
            || self.participants.iter().any(|p| p.email == email)
    }
}

/// Payload for creating a new appointment; the server answers with the
/// full `Appointment` record in `AVAILABLE` state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub therapy_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub max_participants: u32,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Therapy {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}
