//! Command line front end over the scheduling engine.
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::booking::model::Appointment;
use crate::booking::service::BookingService;
use crate::client::{AppointmentRepository, HttpAppointmentClient};
use crate::core::AppConfig;
use crate::schedule::grid::{CellStatus, resolve_cell};
use crate::schedule::query::{FilterCriteria, apply_filter, sort_by_date_time};
use crate::schedule::rules::is_blocked;
use crate::schedule::slots::TIME_SLOTS;
use crate::schedule::week::{WeekNavigator, WeekWindow};

#[derive(Subcommand)]
enum Command {
    /// Print the booking grid for the week containing a date
    Grid {
        /// Anchor date, `YYYY-MM-DD`; defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// List appointments, optionally filtered by facet
    List {
        /// Month facet, `YYYY-MM`
        #[arg(long)]
        month: Option<String>,
        /// Therapy id facet
        #[arg(long)]
        therapy: Option<String>,
        /// Participant email facet
        #[arg(long)]
        user: Option<String>,
    },
    /// Assign an appointment directly to a user
    Assign {
        #[arg(long)]
        id: String,
        #[arg(long)]
        email: String,
    },
    /// Approve a pending booking request
    Approve {
        #[arg(long)]
        id: String,
    },
    /// Approve a pending cancellation request
    ApproveCancellation {
        #[arg(long)]
        id: String,
    },
    /// Delete an appointment
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

/// Renders the week grid as text: one row per slot, one column per visible
/// day. Policy-blocked cells render as `bloqueado` regardless of content.
pub fn render_grid(window: &WeekWindow, appointments: &[Appointment]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<8}", ""));
    for day in &window.days {
        out.push_str(&format!("{:<14}", format!("{} {}", day.name, day.day_of_month)));
    }
    out.push('\n');
    for slot in TIME_SLOTS {
        out.push_str(&format!("{:<8}", slot));
        for day in &window.days {
            let text = if is_blocked(&day.date, slot) {
                "bloqueado".to_string()
            } else {
                let facts = resolve_cell(appointments, &day.date, slot, None);
                match facts.status {
                    CellStatus::Empty => "·".to_string(),
                    status => match &facts.participant_label {
                        Some(label) => format!("{} {}", status.as_str(), label),
                        None => status.as_str().to_string(),
                    },
                }
            };
            out.push_str(&format!("{:<14}", text));
        }
        out.push('\n');
    }
    out
}

pub async fn run() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Cli::parse();
    let config = AppConfig::default();
    let client = HttpAppointmentClient::new(&config.api_base_url, config.api_token.clone());
    let mut service = BookingService::new(client);

    match args.command {
        Some(Command::Grid { date }) => {
            let anchor = match date {
                Some(date) => NaiveDate::parse_from_str(&date, "%Y-%m-%d")?,
                None => chrono::Local::now().date_naive(),
            };
            service.refresh_available().await?;
            let nav = WeekNavigator::new(anchor);
            println!("{}", nav.month_label());
            println!("{}", render_grid(&nav.window(), service.store().available()));
        }
        Some(Command::List {
            month,
            therapy,
            user,
        }) => {
            service.refresh_available().await?;
            let client = HttpAppointmentClient::new(&config.api_base_url, config.api_token);
            let therapies = client.list_therapies().await?;
            let users = client.list_users().await?;
            let criteria = FilterCriteria {
                month,
                therapy_id: therapy,
                user_email: user,
            };
            let mut views = apply_filter(
                service.store().available(),
                &criteria,
                &therapies,
                &users,
            );
            let time_of =
                |v: &crate::schedule::query::AppointmentView| v.appointment.start_time.clone();
            sort_by_date_time(&mut views, |v| v.appointment.date.clone(), Some(&time_of));
            for view in views {
                println!(
                    "{}  {} {}-{}  {:?}  {}  {}",
                    view.appointment.appointment_id,
                    view.appointment.date,
                    view.appointment.start_time,
                    view.appointment.end_time,
                    view.appointment.status,
                    view.therapy_title,
                    view.user_name,
                );
            }
        }
        Some(Command::Assign { id, email }) => {
            service.refresh_available().await?;
            service.assign(&id, &email).await?;
        }
        Some(Command::Approve { id }) => {
            service.refresh_available().await?;
            service.approve(&id).await?;
        }
        Some(Command::ApproveCancellation { id }) => {
            service.refresh_available().await?;
            service.approve_cancellation(&id).await?;
        }
        Some(Command::Delete { id }) => {
            service.refresh_available().await?;
            service.delete(&id).await?;
        }
        None => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::model::AppointmentStatus;
    use chrono::NaiveDate;

    #[test]
    fn grid_marks_blocked_and_occupied_cells() {
        // Week of Monday 2025-11-10
        let nav = WeekNavigator::new(NaiveDate::from_ymd_opt(2025, 11, 12).unwrap());
        let appointments = vec![Appointment {
            appointment_id: "a1".to_string(),
            therapy_id: "t1".to_string(),
            date: "2025-11-11".to_string(),
            start_time: "16:15".to_string(),
            end_time: "16:45".to_string(),
            max_participants: 1,
            current_participants: 0,
            user_email: None,
            participants: Vec::new(),
            status: AppointmentStatus::Available,
            notes: String::new(),
            created_at: None,
        }];

        let rendered = render_grid(&nav.window(), &appointments);
        assert!(rendered.contains("lunes 10"));
        assert!(rendered.contains("bloqueado"));
        assert!(rendered.contains("available"));
    }
}
