//! Ranking of birthday entries by their next occurrence.

use crate::{
    core::occurrence::{self, NextOccurrence},
    entities::birthday,
};
use chrono::NaiveDate;

/// A stored entry together with the values derived from "today".
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingBirthday {
    /// The stored entry
    pub entry: birthday::Model,
    /// Date the next birthday is observed on
    pub occurrence: NaiveDate,
    /// Whole days until `occurrence`
    pub days_until: i64,
    /// Age the person turns on `occurrence`
    pub age_at_occurrence: i32,
    /// Age the person is today
    pub current_age: i32,
}

impl UpcomingBirthday {
    /// Computes the derived fields of `entry` relative to `today`.
    #[must_use]
    pub fn new(entry: birthday::Model, today: NaiveDate) -> Self {
        let NextOccurrence {
            date,
            days_until,
            age_at_occurrence,
        } = occurrence::next_occurrence(entry.birth_date, today);
        let current_age = occurrence::current_age(entry.birth_date, today);

        Self {
            entry,
            occurrence: date,
            days_until,
            age_at_occurrence,
            current_age,
        }
    }

    /// The birthday is today.
    #[must_use]
    pub const fn is_today(&self) -> bool {
        self.days_until == 0
    }

    /// The birthday is not today but at most `window_days` away.
    #[must_use]
    pub const fn is_upcoming(&self, window_days: i64) -> bool {
        self.days_until > 0 && self.days_until <= window_days
    }
}

/// Attaches next-occurrence data to every entry and sorts by days remaining.
///
/// The sort is stable: entries with the same `days_until` keep their input order.
/// Nothing is cached, each call recomputes from `today`.
#[must_use]
pub fn rank_by_upcoming<I>(entries: I, today: NaiveDate) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = birthday::Model>,
{
    let mut ranked: Vec<UpcomingBirthday> = entries
        .into_iter()
        .map(|entry| UpcomingBirthday::new(entry, today))
        .collect();
    ranked.sort_by_key(|upcoming| upcoming.days_until);
    ranked
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::birthday_model;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rank_orders_by_days_until() {
        let today = date(2025, 3, 10);
        // 5, 0, 364, 1 days away
        let entries = vec![
            birthday_model(1, "Five", date(1990, 3, 15)),
            birthday_model(2, "Zero", date(1980, 3, 10)),
            birthday_model(3, "Far", date(1970, 3, 9)),
            birthday_model(4, "One", date(2000, 3, 11)),
        ];

        let ranked = rank_by_upcoming(entries, today);
        let days: Vec<i64> = ranked.iter().map(|u| u.days_until).collect();
        let ids: Vec<i64> = ranked.iter().map(|u| u.entry.id).collect();

        assert_eq!(days, vec![0, 1, 5, 364]);
        assert_eq!(ids, vec![2, 4, 1, 3]);
        assert!(ranked[0].is_today());
        assert_eq!(ranked[0].age_at_occurrence, 45);
        assert_eq!(ranked[3].age_at_occurrence, 56);
        assert_eq!(ranked[3].current_age, 55);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let today = date(2025, 6, 1);
        let entries = vec![
            birthday_model(1, "A", date(1991, 12, 24)),
            birthday_model(2, "B", date(1992, 6, 2)),
            birthday_model(3, "C", date(1993, 1, 30)),
            birthday_model(4, "D", date(1994, 6, 1)),
        ];

        let first = rank_by_upcoming(entries, today);
        let second = rank_by_upcoming(first.iter().map(|u| u.entry.clone()), today);
        assert_eq!(first, second);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let today = date(2025, 1, 1);
        let entries = vec![
            birthday_model(7, "Older twin", date(1990, 4, 4)),
            birthday_model(3, "Younger twin", date(1990, 4, 4)),
        ];

        let ranked = rank_by_upcoming(entries, today);
        assert_eq!(ranked[0].entry.id, 7);
        assert_eq!(ranked[1].entry.id, 3);
    }

    #[test]
    fn test_upcoming_window() {
        let today = date(2025, 3, 10);
        let soon = UpcomingBirthday::new(birthday_model(1, "Soon", date(1990, 3, 17)), today);
        let later = UpcomingBirthday::new(birthday_model(2, "Later", date(1990, 3, 18)), today);
        let now = UpcomingBirthday::new(birthday_model(3, "Now", date(1990, 3, 10)), today);

        assert!(soon.is_upcoming(7));
        assert!(!later.is_upcoming(7));
        assert!(!now.is_upcoming(7));
        assert!(now.is_today());
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_by_upcoming(Vec::<birthday::Model>::new(), date(2025, 1, 1)).is_empty());
    }
}
