//! Recurring-date arithmetic for annual birthdays.
//!
//! All functions are pure and take "today" explicitly so callers decide which
//! clock and timezone apply.
//!
//! A birthday on Feb 29 is observed on Feb 28 in non-leap years. Both the
//! next occurrence and the current age follow that observed date.

use chrono::{Datelike, NaiveDate};

/// The next time a birthday comes around, seen from a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextOccurrence {
    /// Date the birthday is observed on
    pub date: NaiveDate,
    /// Whole days from today until `date`, zero when the birthday is today
    pub days_until: i64,
    /// Age the person turns on `date`
    pub age_at_occurrence: i32,
}

impl NextOccurrence {
    /// Whether the birthday falls on the reference day itself.
    #[must_use]
    pub const fn is_today(&self) -> bool {
        self.days_until == 0
    }
}

/// Returns the day a birthday is observed on in `year`.
#[must_use]
pub fn occurrence_in(birth_date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(birth_date)
}

/// Whole years elapsed between `birth_date` and `today`.
///
/// One less than the year difference while this year's birthday is still ahead.
#[must_use]
pub fn current_age(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - birth_date.year();
    if today < occurrence_in(birth_date, today.year()) {
        years - 1
    } else {
        years
    }
}

/// Finds the soonest occurrence on or after `today`.
#[must_use]
pub fn next_occurrence(birth_date: NaiveDate, today: NaiveDate) -> NextOccurrence {
    let mut date = occurrence_in(birth_date, today.year());
    if date < today {
        date = occurrence_in(birth_date, today.year() + 1);
    }

    NextOccurrence {
        date,
        days_until: (date - today).num_days(),
        age_at_occurrence: date.year() - birth_date.year(),
    }
}

/// Finds the most recent occurrence strictly before `today`.
///
/// Returns `None` when there is none yet, i.e. the person was born today or later.
#[must_use]
pub fn last_occurrence(birth_date: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in(birth_date, today.year());
    let date = if this_year < today {
        this_year
    } else {
        occurrence_in(birth_date, today.year() - 1)
    };

    (date > birth_date).then_some(date)
}
