//! Week window navigation for the booking grid.
//!
//! The grid shows four days (Monday through Thursday) anchored to the Monday
//! of the selected date. Paging is bounded to one week back and three weeks
//! ahead of today's week.
use chrono::{Datelike, Days, NaiveDate};

pub const WEEKS_IN_PAST: u64 = 1;
pub const WEEKS_IN_FUTURE: u64 = 3;
pub const VISIBLE_DAYS: u64 = 4;

const DAY_NAMES: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDay {
    pub name: String,
    pub day_of_month: u32,
    /// ISO `YYYY-MM-DD`
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekWindow {
    pub days: Vec<WeekDay>,
}

/// The Monday of the week containing `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// Snapshot of the grid's position in time. `moved` returns a new snapshot
/// rather than mutating, so out-of-range paging is a plain no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekNavigator {
    anchor: NaiveDate,
    today: NaiveDate,
}

impl WeekNavigator {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            anchor: today,
            today,
        }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// The four visible days, Monday through Thursday.
    pub fn window(&self) -> WeekWindow {
        let start = monday_of(self.anchor);
        let days = (0..VISIBLE_DAYS)
            .filter_map(|offset| start.checked_add_days(Days::new(offset)))
            .map(|d| WeekDay {
                name: DAY_NAMES[d.weekday().num_days_from_monday() as usize].to_string(),
                day_of_month: d.day(),
                date: d.format("%Y-%m-%d").to_string(),
            })
            .collect();
        WeekWindow { days }
    }

    /// Month name and year of the anchor, e.g. `"noviembre 2025"`.
    pub fn month_label(&self) -> String {
        format!(
            "{} {}",
            MONTH_NAMES[self.anchor.month0() as usize],
            self.anchor.year()
        )
    }

    /// Whether paging one week in `direction` (-1 or +1) stays within the
    /// bounded range, compared Monday to Monday.
    pub fn can_move(&self, direction: i64) -> bool {
        let step = match direction {
            -1 => -7,
            1 => 7,
            _ => return false,
        };
        let Some(candidate) = self.anchor.checked_add_signed(chrono::Duration::days(step))
        else {
            return false;
        };
        let here = monday_of(self.today);
        let target = monday_of(candidate);
        if direction < 0 {
            match here.checked_sub_days(Days::new(7 * WEEKS_IN_PAST)) {
                Some(floor) => target >= floor,
                None => false,
            }
        } else {
            match here.checked_add_days(Days::new(7 * WEEKS_IN_FUTURE)) {
                Some(ceiling) => target <= ceiling,
                None => false,
            }
        }
    }

    /// Pages the anchor one week in `direction`; unchanged at either bound.
    pub fn moved(&self, direction: i64) -> Self {
        if !self.can_move(direction) {
            return *self;
        }
        let step = if direction < 0 { -7 } else { 7 };
        match self.anchor.checked_add_signed(chrono::Duration::days(step)) {
            Some(anchor) => Self {
                anchor,
                today: self.today,
            },
            None => *self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn monday_of_normalizes_to_week_start() {
        // 2025-11-12 is a Wednesday
        assert_eq!(monday_of(date(2025, 11, 12)), date(2025, 11, 10));
        assert_eq!(monday_of(date(2025, 11, 10)), date(2025, 11, 10));
        // Sunday belongs to the week that started six days earlier
        assert_eq!(monday_of(date(2025, 11, 16)), date(2025, 11, 10));
    }

    #[test]
    fn window_covers_monday_through_thursday() {
        let nav = WeekNavigator::new(date(2025, 11, 12));
        let window = nav.window();

        assert_eq!(window.days.len(), 4);
        assert_eq!(window.days[0].name, "lunes");
        assert_eq!(window.days[0].date, "2025-11-10");
        assert_eq!(window.days[0].day_of_month, 10);
        assert_eq!(window.days[3].name, "jueves");
        assert_eq!(window.days[3].date, "2025-11-13");

        let thursday = NaiveDate::parse_from_str(&window.days[3].date, "%Y-%m-%d").unwrap();
        assert_eq!(thursday.weekday(), Weekday::Thu);
    }

    #[test]
    fn month_label_is_localized() {
        let nav = WeekNavigator::new(date(2025, 11, 12));
        assert_eq!(nav.month_label(), "noviembre 2025");
    }

    #[test]
    fn forward_paging_stops_after_three_weeks() {
        let today = date(2025, 11, 12);
        let mut nav = WeekNavigator::new(today);

        for _ in 0..3 {
            assert!(nav.can_move(1));
            nav = nav.moved(1);
        }
        assert_eq!(nav.anchor(), date(2025, 12, 3));

        // Repeated paging past the bound never changes the snapshot
        assert!(!nav.can_move(1));
        let stuck = nav.moved(1).moved(1).moved(1);
        assert_eq!(stuck, nav);
    }

    #[test]
    fn backward_paging_stops_after_one_week() {
        let today = date(2025, 11, 12);
        let mut nav = WeekNavigator::new(today);

        assert!(nav.can_move(-1));
        nav = nav.moved(-1);
        assert_eq!(nav.anchor(), date(2025, 11, 5));

        assert!(!nav.can_move(-1));
        let stuck = nav.moved(-1).moved(-1);
        assert_eq!(stuck, nav);
    }

    #[test]
    fn other_directions_never_move() {
        let nav = WeekNavigator::new(date(2025, 11, 12));
        assert!(!nav.can_move(0));
        assert!(!nav.can_move(2));
        assert_eq!(nav.moved(0), nav);
    }
}
