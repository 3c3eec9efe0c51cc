//! Birthday storage - owner-scoped create, read, update and delete.
//!
//! Every function takes the owner's Discord user ID and only ever sees that
//! owner's rows. Name and date are validated here so every caller gets the
//! same rules.

use crate::{
    entities::{Birthday, birthday},
    errors::{Error, Result},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::debug;

/// Longest person name accepted, in characters
pub const MAX_NAME_LEN: usize = 100;

/// Rejects text longer than `max` characters.
pub(crate) fn check_length(field: &'static str, text: &str, max: usize) -> Result<()> {
    let length = text.chars().count();
    if length > max {
        return Err(Error::TooLong { field, length, max });
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` date typed by a user.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate {
        input: input.to_string(),
    })
}

/// Checks the required fields of an entry and returns the trimmed name.
fn validate_entry(name: &str, birth_date: NaiveDate, today: NaiveDate) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::EmptyName);
    }
    check_length("Name", name, MAX_NAME_LEN)?;
    if birth_date > today {
        return Err(Error::FutureBirthDate { date: birth_date });
    }
    Ok(name.to_string())
}

/// Retrieves all of an owner's entries, ordered by birth date ascending.
pub async fn get_birthdays_for_owner(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<Vec<birthday::Model>> {
    Birthday::find()
        .filter(birthday::Column::OwnerId.eq(owner_id))
        .order_by_asc(birthday::Column::BirthDate)
        .order_by_asc(birthday::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds one of the owner's entries by ID.
pub async fn get_birthday<C>(db: &C, owner_id: &str, id: i64) -> Result<birthday::Model>
where
    C: ConnectionTrait,
{
    Birthday::find_by_id(id)
        .filter(birthday::Column::OwnerId.eq(owner_id))
        .one(db)
        .await?
        .ok_or(Error::BirthdayNotFound { id })
}

/// Finds the owner's entries whose person name matches, ignoring case.
pub async fn find_birthdays_by_name(
    db: &DatabaseConnection,
    owner_id: &str,
    name: &str,
) -> Result<Vec<birthday::Model>> {
    let wanted = name.trim().to_lowercase();
    let entries = get_birthdays_for_owner(db, owner_id).await?;

    Ok(entries
        .into_iter()
        .filter(|entry| entry.person_name.to_lowercase() == wanted)
        .collect())
}

/// Resolves a user-supplied person reference to exactly one entry.
///
/// `#<id>` selects by ID; anything else is matched against person names.
pub async fn resolve_person(
    db: &DatabaseConnection,
    owner_id: &str,
    person: &str,
) -> Result<birthday::Model> {
    if let Some(id) = person.trim().strip_prefix('#').and_then(|s| s.parse().ok()) {
        return get_birthday(db, owner_id, id).await;
    }

    let mut matches = find_birthdays_by_name(db, owner_id, person).await?;
    match matches.len() {
        0 => Err(Error::PersonNotFound {
            name: person.trim().to_string(),
        }),
        1 => Ok(matches.remove(0)),
        count => Err(Error::AmbiguousPerson {
            name: person.trim().to_string(),
            count,
        }),
    }
}

/// Creates a new entry after validating the name and date.
///
/// Gift fields start empty.
pub async fn create_birthday(
    db: &DatabaseConnection,
    owner_id: &str,
    name: &str,
    birth_date: NaiveDate,
    today: NaiveDate,
) -> Result<birthday::Model> {
    let person_name = validate_entry(name, birth_date, today)?;

    let entry = birthday::ActiveModel {
        owner_id: Set(owner_id.to_string()),
        person_name: Set(person_name),
        birth_date: Set(birth_date),
        gift_idea: Set(None),
        gift_budget: Set(None),
        gift_noted_on: Set(None),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let created = entry.insert(db).await?;
    debug!("Created birthday #{} for owner {}", created.id, owner_id);
    Ok(created)
}

/// Replaces the name and birth date of an existing entry.
///
/// Gift notes are left untouched.
pub async fn update_birthday(
    db: &DatabaseConnection,
    owner_id: &str,
    id: i64,
    name: &str,
    birth_date: NaiveDate,
    today: NaiveDate,
) -> Result<birthday::Model> {
    let person_name = validate_entry(name, birth_date, today)?;
    let existing = get_birthday(db, owner_id, id).await?;

    let mut active_model: birthday::ActiveModel = existing.into();
    active_model.person_name = Set(person_name);
    active_model.birth_date = Set(birth_date);

    let updated = active_model.update(db).await?;
    debug!("Updated birthday #{} for owner {}", id, owner_id);
    Ok(updated)
}

/// Deletes one of the owner's entries. Returns whether a row was removed.
pub async fn delete_birthday(db: &DatabaseConnection, owner_id: &str, id: i64) -> Result<bool> {
    let result = Birthday::delete_many()
        .filter(birthday::Column::Id.eq(id))
        .filter(birthday::Column::OwnerId.eq(owner_id))
        .exec(db)
        .await?;

    Ok(result.rows_affected > 0)
}

/// Deletes every entry of the owner. Returns the number of rows removed.
pub async fn delete_all_birthdays(db: &DatabaseConnection, owner_id: &str) -> Result<u64> {
    let result = Birthday::delete_many()
        .filter(birthday::Column::OwnerId.eq(owner_id))
        .exec(db)
        .await?;

    debug!(
        "Deleted {} birthdays for owner {}",
        result.rows_affected, owner_id
    );
    Ok(result.rows_affected)
}
