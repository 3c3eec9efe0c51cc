//! Shared test utilities for `BirthdayBuddy`.
//!
//! Helpers for setting up an in-memory database and building entries with
//! sensible defaults.
#![allow(clippy::unwrap_used)]

use crate::{core::birthday, entities, errors::Result};
use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;

/// Owner used by most tests
pub const TEST_OWNER: &str = "100000000000000001";
/// A second owner for isolation checks
pub const OTHER_OWNER: &str = "100000000000000002";

/// Builds a date, panicking on invalid input.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Fixed "today" used by store tests.
pub fn test_today() -> NaiveDate {
    ymd(2025, 6, 15)
}

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Stores a birthday for `owner_id`, validated against [`test_today`].
pub async fn create_test_birthday(
    db: &DatabaseConnection,
    owner_id: &str,
    name: &str,
    birth_date: NaiveDate,
) -> Result<entities::birthday::Model> {
    birthday::create_birthday(db, owner_id, name, birth_date, test_today()).await
}

/// Builds an unsaved entry for pure tests.
///
/// # Defaults
/// * `owner_id`: [`TEST_OWNER`]
/// * no gift notes
pub fn birthday_model(id: i64, name: &str, birth_date: NaiveDate) -> entities::birthday::Model {
    entities::birthday::Model {
        id,
        owner_id: TEST_OWNER.to_string(),
        person_name: name.to_string(),
        birth_date,
        gift_idea: None,
        gift_budget: None,
        gift_noted_on: None,
        created_at: Utc::now(),
    }
}
