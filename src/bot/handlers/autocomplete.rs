//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggests the caller's own saved person names while they type, so commands
//! that take a `person` argument rarely need an `#id`.

use crate::{
    bot::{BotData, owner_id},
    core::birthday,
    errors::Error,
};

/// Discord accepts at most 25 autocomplete choices
const MAX_CHOICES: usize = 25;

/// Filters names by a case-insensitive substring.
///
/// A name shared by several entries is suggested as `#id` values instead so
/// the pick is unambiguous.
#[must_use]
pub fn matching_people(entries: &[(i64, String)], partial: &str) -> Vec<String> {
    let partial_lower = partial.to_lowercase();

    let mut matching: Vec<String> = entries
        .iter()
        .filter(|(_, name)| name.to_lowercase().contains(&partial_lower))
        .map(|(id, name)| {
            let duplicates = entries
                .iter()
                .filter(|(_, other)| other.to_lowercase() == name.to_lowercase())
                .count();
            if duplicates > 1 {
                format!("#{id}")
            } else {
                name.clone()
            }
        })
        .collect();

    matching.sort();
    matching.truncate(MAX_CHOICES);
    matching
}

/// Provides autocomplete suggestions for the caller's saved people.
pub async fn autocomplete_person(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let db = &ctx.data().database;

    let Ok(entries) = birthday::get_birthdays_for_owner(db, &owner_id(ctx)).await else {
        return Vec::new();
    };

    let people: Vec<(i64, String)> = entries
        .into_iter()
        .map(|entry| (entry.id, entry.person_name))
        .collect();

    matching_people(&people, partial)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_people() {
        let people = vec![
            (1, "Ada".to_string()),
            (2, "Grace".to_string()),
            (3, "Adam".to_string()),
        ];

        assert_eq!(matching_people(&people, "ad"), vec!["Ada", "Adam"]);
        assert_eq!(matching_people(&people, "GRA"), vec!["Grace"]);
        assert_eq!(matching_people(&people, "").len(), 3);
        assert!(matching_people(&people, "zz").is_empty());
    }

    #[test]
    fn test_duplicate_names_suggest_ids() {
        let people = vec![(4, "Sam".to_string()), (9, "sam".to_string())];
        assert_eq!(matching_people(&people, "sa"), vec!["#4", "#9"]);
    }

    #[test]
    fn test_choices_are_capped() {
        let people: Vec<(i64, String)> = (0..40).map(|i| (i, format!("Person {i:02}"))).collect();
        assert_eq!(matching_people(&people, "person").len(), MAX_CHOICES);
    }
}
