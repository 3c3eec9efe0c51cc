//! Text formatting for birthday lists, cards and share messages.
//!
//! Everything here is pure string building so the bot layer only has to send
//! the result.

use crate::{
    config::settings::Settings,
    core::upcoming::UpcomingBirthday,
};
use chrono::NaiveDate;
use std::fmt::Write;

/// Discord limit for an embed field name
pub const EMBED_FIELD_NAME_MAX: usize = 256;
/// Discord limit for an embed field value
pub const EMBED_FIELD_VALUE_MAX: usize = 1024;
/// Discord limit for all text in one embed
pub const EMBED_TOTAL_MAX: usize = 6000;

/// How prominently a birthday should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    /// The birthday is today
    Today,
    /// The birthday is within the upcoming window
    Upcoming,
    /// Anything further away
    Later,
}

impl CardStatus {
    /// Picks the status for an entry given the upcoming window in days.
    #[must_use]
    pub const fn of(upcoming: &UpcomingBirthday, window_days: i64) -> Self {
        if upcoming.is_today() {
            Self::Today
        } else if upcoming.is_upcoming(window_days) {
            Self::Upcoming
        } else {
            Self::Later
        }
    }

    /// Emoji shown in front of the entry.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Today => "🎉",
            Self::Upcoming => "⏰",
            Self::Later => "📅",
        }
    }
}

/// Capitalizes the first letter of every word and lowercases the rest.
#[must_use]
pub fn format_person_name(name: &str) -> String {
    name.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats the day and month of a date, e.g. `15 March`.
#[must_use]
pub fn format_day_month(date: NaiveDate) -> String {
    date.format("%-d %B").to_string()
}

/// Short countdown text for the number of days left.
#[must_use]
pub fn countdown_label(days_until: i64) -> String {
    match days_until {
        0 => "TODAY! 🎉".to_string(),
        1 => "Tomorrow!".to_string(),
        days => format!("in {days} days"),
    }
}

/// `1 birthday`, `3 birthdays`, `0 birthdays`.
#[must_use]
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 birthday".to_string()
    } else {
        format!("{count} birthdays")
    }
}

/// Formats a budget with the configured currency symbol.
#[must_use]
pub fn format_budget(amount: f64, currency_symbol: &str) -> String {
    format!("{currency_symbol}{amount:.2}")
}

/// Cuts `text` to at most `max` characters, marking the cut with `…`.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// One-line gift summary, or `None` when the entry carries no gift notes.
#[must_use]
pub fn gift_summary(upcoming: &UpcomingBirthday, currency_symbol: &str) -> Option<String> {
    let entry = &upcoming.entry;
    match (&entry.gift_idea, entry.gift_budget) {
        (Some(idea), Some(budget)) => Some(format!(
            "🎁 {idea} ({})",
            format_budget(budget, currency_symbol)
        )),
        (Some(idea), None) => Some(format!("🎁 {idea}")),
        (None, Some(budget)) => Some(format!(
            "🎁 Budget {}",
            format_budget(budget, currency_symbol)
        )),
        (None, None) => None,
    }
}

/// Heading for one entry in a list, e.g. `⏰ Ada Lovelace (#4)`.
#[must_use]
pub fn card_title(upcoming: &UpcomingBirthday, settings: &Settings) -> String {
    let status = CardStatus::of(upcoming, settings.display.upcoming_window_days);
    let title = format!(
        "{} {} (#{})",
        status.emoji(),
        format_person_name(&upcoming.entry.person_name),
        upcoming.entry.id
    );
    truncate_chars(&title, EMBED_FIELD_NAME_MAX)
}

/// Body text for one entry in a list.
pub fn card_body(
    upcoming: &UpcomingBirthday,
    settings: &Settings,
) -> Result<String, std::fmt::Error> {
    let mut body = String::new();
    write!(
        &mut body,
        "{} - {}\nTurns **{}**",
        format_day_month(upcoming.occurrence),
        countdown_label(upcoming.days_until),
        upcoming.age_at_occurrence
    )?;
    if let Some(gift) = gift_summary(upcoming, &settings.gifts.currency_symbol) {
        write!(&mut body, "\n{gift}")?;
    }
    Ok(truncate_chars(&body, EMBED_FIELD_VALUE_MAX))
}

/// Builds `(title, body)` cards for at most `limit` entries.
///
/// Stops early once the cards plus `reserved` characters of other embed text
/// would no longer fit in one embed.
pub fn fit_cards(
    ranked: &[UpcomingBirthday],
    settings: &Settings,
    limit: usize,
    reserved: usize,
) -> Result<Vec<(String, String)>, std::fmt::Error> {
    let mut cards = Vec::new();
    let mut used = reserved;

    for upcoming in ranked.iter().take(limit) {
        let title = card_title(upcoming, settings);
        let body = card_body(upcoming, settings)?;
        used += title.chars().count() + body.chars().count();
        if used > EMBED_TOTAL_MAX {
            break;
        }
        cards.push((title, body));
    }

    Ok(cards)
}

/// Message a user can forward to remind others of a birthday.
#[must_use]
pub fn share_text(upcoming: &UpcomingBirthday) -> String {
    format!(
        "🎂 {}'s birthday\n📅 Date: {}\n🎉 Turning: {}!\n\nDon't forget to send your wishes!",
        format_person_name(&upcoming.entry.person_name),
        format_day_month(upcoming.occurrence),
        upcoming.age_at_occurrence
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{birthday_model, ymd};

    #[test]
    fn test_format_person_name() {
        assert_eq!(format_person_name("ada LOVELACE"), "Ada Lovelace");
        assert_eq!(format_person_name("émile zola"), "Émile Zola");
        assert_eq!(format_person_name("x"), "X");
        assert_eq!(format_person_name(""), "");
    }

    #[test]
    fn test_labels() {
        assert_eq!(countdown_label(0), "TODAY! 🎉");
        assert_eq!(countdown_label(1), "Tomorrow!");
        assert_eq!(countdown_label(12), "in 12 days");

        assert_eq!(count_label(0), "0 birthdays");
        assert_eq!(count_label(1), "1 birthday");
        assert_eq!(count_label(7), "7 birthdays");

        assert_eq!(format_day_month(ymd(2025, 3, 5)), "5 March");
        assert_eq!(format_budget(25.0, "€"), "€25.00");
    }

    #[test]
    fn test_card_status() {
        let today = ymd(2025, 3, 10);
        let now = UpcomingBirthday::new(birthday_model(1, "a", ymd(1990, 3, 10)), today);
        let soon = UpcomingBirthday::new(birthday_model(2, "b", ymd(1990, 3, 12)), today);
        let later = UpcomingBirthday::new(birthday_model(3, "c", ymd(1990, 9, 1)), today);

        assert_eq!(CardStatus::of(&now, 7), CardStatus::Today);
        assert_eq!(CardStatus::of(&soon, 7), CardStatus::Upcoming);
        assert_eq!(CardStatus::of(&later, 7), CardStatus::Later);
    }

    #[test]
    fn test_card_rendering() {
        let settings = Settings::default();
        let mut entry = birthday_model(4, "ada lovelace", ymd(1990, 3, 12));
        entry.gift_idea = Some("Notebook".to_string());
        entry.gift_budget = Some(20.0);
        let upcoming = UpcomingBirthday::new(entry, ymd(2025, 3, 10));

        assert_eq!(card_title(&upcoming, &settings), "⏰ Ada Lovelace (#4)");
        assert_eq!(
            card_body(&upcoming, &settings).unwrap(),
            "12 March - in 2 days\nTurns **35**\n🎁 Notebook (€20.00)"
        );
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exactly", 7), "exactly");
        assert_eq!(truncate_chars("abcdef", 4), "abc…");
        assert_eq!(truncate_chars("ééééé", 3).chars().count(), 3);
    }

    #[test]
    fn test_long_text_fits_embed_limits() {
        let settings = Settings::default();
        let mut entry = birthday_model(1, &"n".repeat(400), ymd(1990, 3, 12));
        entry.gift_idea = Some("g".repeat(1500));
        let upcoming = UpcomingBirthday::new(entry, ymd(2025, 3, 10));

        let title = card_title(&upcoming, &settings);
        let body = card_body(&upcoming, &settings).unwrap();
        assert_eq!(title.chars().count(), EMBED_FIELD_NAME_MAX);
        assert_eq!(body.chars().count(), EMBED_FIELD_VALUE_MAX);
        assert!(body.ends_with('…'));
    }

    #[test]
    fn test_fit_cards_respects_limit_and_total() {
        let settings = Settings::default();
        let today = ymd(2025, 3, 10);

        let short: Vec<UpcomingBirthday> = (1..=5)
            .map(|id| UpcomingBirthday::new(birthday_model(id, "Ada", ymd(1990, 4, 1)), today))
            .collect();
        assert_eq!(fit_cards(&short, &settings, 3, 100).unwrap().len(), 3);

        let long: Vec<UpcomingBirthday> = (1..=25)
            .map(|id| {
                let mut entry = birthday_model(id, "Ada", ymd(1990, 4, 1));
                entry.gift_idea = Some("g".repeat(1000));
                UpcomingBirthday::new(entry, today)
            })
            .collect();
        let cards = fit_cards(&long, &settings, 25, 200).unwrap();
        let total: usize = cards
            .iter()
            .map(|(title, body)| title.chars().count() + body.chars().count())
            .sum();
        assert!(!cards.is_empty());
        assert!(cards.len() < 25);
        assert!(total + 200 <= EMBED_TOTAL_MAX);
    }

    #[test]
    fn test_gift_summary_variants() {
        let today = ymd(2025, 1, 1);
        let mut entry = birthday_model(1, "a", ymd(1990, 3, 10));
        assert_eq!(
            gift_summary(&UpcomingBirthday::new(entry.clone(), today), "$"),
            None
        );

        entry.gift_budget = Some(5.5);
        assert_eq!(
            gift_summary(&UpcomingBirthday::new(entry.clone(), today), "$").unwrap(),
            "🎁 Budget $5.50"
        );

        entry.gift_budget = None;
        entry.gift_idea = Some("Flowers".to_string());
        assert_eq!(
            gift_summary(&UpcomingBirthday::new(entry, today), "$").unwrap(),
            "🎁 Flowers"
        );
    }

    #[test]
    fn test_share_text() {
        let upcoming = UpcomingBirthday::new(
            birthday_model(1, "grace hopper", ymd(1906, 12, 9)),
            ymd(2025, 12, 1),
        );
        let text = share_text(&upcoming);
        assert!(text.starts_with("🎂 Grace Hopper's birthday\n"));
        assert!(text.contains("📅 Date: 9 December"));
        assert!(text.contains("🎉 Turning: 119!"));
    }
}
