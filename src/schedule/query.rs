//! Chronological sorting and faceted filtering over appointment
//! collections, shared by the public grid and the admin dashboard.
use itertools::Itertools;

use crate::booking::model::{Appointment, Therapy, User};
use crate::schedule::slots;

/// All facets are independently optional; absence means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// `YYYY-MM`
    pub month: Option<String>,
    pub therapy_id: Option<String>,
    pub user_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TherapyFacet {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFacet {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facets {
    pub months: Vec<String>,
    pub therapies: Vec<TherapyFacet>,
    pub users: Vec<UserFacet>,
}

/// An appointment decorated with resolved display fields.
#[derive(Debug, Clone)]
pub struct AppointmentView {
    pub appointment: Appointment,
    pub therapy_title: String,
    pub user_name: String,
}

/// Time-of-day in minutes; malformed times sort as midnight.
pub fn time_to_minutes(time: &str) -> u32 {
    slots::minutes_of(time).unwrap_or(0)
}

/// Sorts descending by date (most recent first). When dates tie and a time
/// extractor is supplied, sorts ascending by time-of-day; otherwise ties
/// keep their original relative order (`sort_by` is stable).
pub fn sort_by_date_time<T>(
    items: &mut [T],
    date_of: impl Fn(&T) -> String,
    time_of: Option<&dyn Fn(&T) -> String>,
) {
    items.sort_by(|a, b| {
        let by_date = date_of(b).cmp(&date_of(a));
        match (by_date, time_of) {
            (std::cmp::Ordering::Equal, Some(time_of)) => {
                time_to_minutes(&time_of(a)).cmp(&time_to_minutes(&time_of(b)))
            }
            (order, _) => order,
        }
    });
}

/// Derives the filterable dimensions from the current collections: distinct
/// appointment months ascending, every known therapy, and every user with
/// both email and name present.
pub fn available_facets(
    appointments: &[Appointment],
    therapies: &[Therapy],
    users: &[User],
) -> Facets {
    let months = appointments
        .iter()
        .filter_map(|a| a.date.get(..7))
        .map(str::to_string)
        .sorted()
        .dedup()
        .collect();
    let therapies = therapies
        .iter()
        .map(|t| TherapyFacet {
            id: t.id.clone(),
            title: t.title.clone(),
        })
        .collect();
    let users = users
        .iter()
        .filter(|u| !u.email.is_empty() && !u.name.is_empty())
        .map(|u| UserFacet {
            email: u.email.clone(),
            name: u.name.clone(),
        })
        .collect();
    Facets {
        months,
        therapies,
        users,
    }
}

fn matches(appointment: &Appointment, criteria: &FilterCriteria) -> bool {
    if let Some(month) = &criteria.month {
        if appointment.date.get(..7) != Some(month.as_str()) {
            return false;
        }
    }
    if let Some(therapy_id) = &criteria.therapy_id {
        if &appointment.therapy_id != therapy_id {
            return false;
        }
    }
    if let Some(email) = &criteria.user_email {
        if !appointment.involves_user(email) {
            return false;
        }
    }
    true
}

fn decorate(appointment: &Appointment, therapies: &[Therapy], users: &[User]) -> AppointmentView {
    let therapy_title = therapies
        .iter()
        .find(|t| t.id == appointment.therapy_id)
        .map(|t| t.title.clone())
        .unwrap_or_else(|| "Terapia".to_string());
    let user_name = match &appointment.user_email {
        Some(email) => users
            .iter()
            .find(|u| u.email == *email && !u.name.is_empty())
            .map(|u| u.name.clone())
            .unwrap_or_else(|| email.clone()),
        None => String::new(),
    };
    AppointmentView {
        appointment: appointment.clone(),
        therapy_title,
        user_name,
    }
}

/// An appointment passes when every supplied facet matches; the user facet
/// matches the primary booker or any group participant.
pub fn apply_filter(
    appointments: &[Appointment],
    criteria: &FilterCriteria,
    therapies: &[Therapy],
    users: &[User],
) -> Vec<AppointmentView> {
    appointments
        .iter()
        .filter(|a| matches(a, criteria))
        .map(|a| decorate(a, therapies, users))
        .collect()
}
