//! Weekly birthday reminders.
//!
//! The scheduler looks [`REMINDER_WINDOW_DAYS`] days ahead and files each
//! upcoming birthday under the weekday its reminder should surface on.
//! Birthdays falling on a weekend close to today surface on Monday instead.

use crate::domain::Birthday;
use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

/// How many days ahead birthdays are looked up.
pub const REMINDER_WINDOW_DAYS: i64 = 7;

/// Full English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Weekday on which the reminder for `birthday` surfaces, if it is due
/// within the window starting at `today`.
pub fn reminder_weekday(birthday: &Birthday, today: NaiveDate) -> Option<Weekday> {
    let mut occurrence = birthday.occurrence_in(today.year());
    let mut delta = (occurrence - today).num_days();

    if delta < 0 {
        occurrence = birthday.occurrence_in(today.year() + 1);
        delta = (occurrence - today).num_days();
        if delta > REMINDER_WINDOW_DAYS {
            return None;
        }
    }

    if delta > REMINDER_WINDOW_DAYS {
        return None;
    }

    // Weekend birthdays move to Monday only while Monday is still near.
    let weekday = match occurrence.weekday() {
        Weekday::Sat if delta < REMINDER_WINDOW_DAYS - 2 => Weekday::Mon,
        Weekday::Sun if delta < REMINDER_WINDOW_DAYS - 1 => Weekday::Mon,
        other => other,
    };

    Some(weekday)
}

/// Contact names grouped by reminder weekday.
///
/// Only weekdays with at least one contact are present. Groups keep the
/// order in which their weekday first appeared and names keep the order in
/// which they were pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyReminders {
    groups: Vec<(Weekday, Vec<String>)>,
}

impl WeeklyReminders {
    pub fn new() -> Self {
        Self::default()
    }

    /// File `name` under `weekday`.
    pub fn push(&mut self, weekday: Weekday, name: impl Into<String>) {
        let name = name.into();
        match self.groups.iter_mut().find(|(day, _)| *day == weekday) {
            Some((_, names)) => names.push(name),
            None => self.groups.push((weekday, vec![name])),
        }
    }

    /// Names due on `weekday`, if any.
    pub fn get(&self, weekday: Weekday) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(day, _)| *day == weekday)
            .map(|(_, names)| names.as_slice())
    }

    /// Weekday groups as `(weekday name, names)`.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        self.groups
            .iter()
            .map(|(day, names)| (weekday_name(*day), names.as_slice()))
    }

    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.groups.iter().map(|(day, _)| *day)
    }

    /// Number of weekdays with reminders.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl fmt::Display for WeeklyReminders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .iter()
            .map(|(day, names)| format!("{}: {}", day, names.join(", ")))
            .collect::<Vec<_>>();
        write!(f, "{}", lines.join("\n"))
    }
}
