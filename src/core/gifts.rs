//! Gift notes - the optional idea and budget stored with each birthday.
//!
//! Notes are stamped with the day they were written (`gift_noted_on`). Once
//! the birthday that followed that day has passed, the notes are stale and
//! [`clear_stale_gifts`] removes them.

use crate::{
    core::{birthday as birthday_store, occurrence},
    entities::birthday,
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{Set, prelude::*};
use tracing::{debug, info, warn};

/// Outcome of a stale-note clearing pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaleGiftSummary {
    /// Entries whose notes were cleared
    pub cleared: usize,
    /// Entries whose notes could not be cleared
    pub failed: usize,
}

/// Checks a gift budget: it must be a finite, non-negative number.
pub fn validate_budget(budget: Option<f64>) -> Result<Option<f64>> {
    match budget {
        Some(amount) if !amount.is_finite() || amount < 0.0 => {
            Err(Error::InvalidBudget { amount })
        }
        other => Ok(other),
    }
}

/// Whether an entry's gift notes were written for a birthday that has since passed.
#[must_use]
pub fn has_stale_gift(entry: &birthday::Model, today: NaiveDate) -> bool {
    let Some(noted_on) = entry.gift_noted_on else {
        return false;
    };
    if !entry.has_gift_notes() {
        return false;
    }

    occurrence::last_occurrence(entry.birth_date, today).is_some_and(|last| last >= noted_on)
}

/// Longest gift idea accepted, in characters
pub const MAX_GIFT_IDEA_LEN: usize = 300;

/// Updates the gift notes of one entry, field by field.
///
/// `None` keeps the stored value; a blank idea removes the stored idea. When
/// anything changes, the notes are stamped with `today`, or unstamped if
/// nothing is left.
pub async fn set_gift(
    db: &DatabaseConnection,
    owner_id: &str,
    id: i64,
    idea: Option<String>,
    budget: Option<f64>,
    today: NaiveDate,
) -> Result<birthday::Model> {
    let budget = validate_budget(budget)?;
    let idea = idea.map(|text| text.trim().to_string());
    if let Some(text) = &idea {
        birthday_store::check_length("Gift idea", text, MAX_GIFT_IDEA_LEN)?;
    }

    let existing = birthday_store::get_birthday(db, owner_id, id).await?;
    if idea.is_none() && budget.is_none() {
        return Ok(existing);
    }

    let new_idea = match idea {
        Some(text) if text.is_empty() => None,
        Some(text) => Some(text),
        None => existing.gift_idea.clone(),
    };
    let new_budget = budget.or(existing.gift_budget);
    let noted_on = (new_idea.is_some() || new_budget.is_some()).then_some(today);

    let mut active_model: birthday::ActiveModel = existing.into();
    active_model.gift_idea = Set(new_idea);
    active_model.gift_budget = Set(new_budget);
    active_model.gift_noted_on = Set(noted_on);

    let updated = active_model.update(db).await?;
    debug!("Saved gift notes for birthday #{}", id);
    Ok(updated)
}

/// Loads the owner's entries, clearing stale gift notes first when `clear_stale` is set.
pub async fn load_birthdays(
    db: &DatabaseConnection,
    owner_id: &str,
    today: NaiveDate,
    clear_stale: bool,
) -> Result<Vec<birthday::Model>> {
    let mut entries = birthday_store::get_birthdays_for_owner(db, owner_id).await?;

    if clear_stale {
        let summary = clear_stale_gifts(db, &mut entries, today).await;
        if summary.cleared > 0 || summary.failed > 0 {
            info!(
                "Stale gift pass for {}: {} cleared, {} failed",
                owner_id, summary.cleared, summary.failed
            );
        }
    }

    Ok(entries)
}

/// Removes the gift notes of one entry.
pub async fn clear_gift(
    db: &DatabaseConnection,
    owner_id: &str,
    id: i64,
) -> Result<birthday::Model> {
    let existing = birthday_store::get_birthday(db, owner_id, id).await?;
    clear_gift_fields(db, existing).await
}

async fn clear_gift_fields<C>(db: &C, entry: birthday::Model) -> Result<birthday::Model>
where
    C: ConnectionTrait,
{
    let mut active_model: birthday::ActiveModel = entry.into();
    active_model.gift_idea = Set(None);
    active_model.gift_budget = Set(None);
    active_model.gift_noted_on = Set(None);
    active_model.update(db).await.map_err(Into::into)
}

/// Clears stale gift notes in the database and in `entries`.
///
/// Each entry is handled on its own: a failed update is logged and counted,
/// and the in-memory entry keeps its notes, but the pass goes on.
pub async fn clear_stale_gifts(
    db: &DatabaseConnection,
    entries: &mut [birthday::Model],
    today: NaiveDate,
) -> StaleGiftSummary {
    let mut summary = StaleGiftSummary::default();

    for entry in entries.iter_mut().filter(|e| has_stale_gift(e, today)) {
        match clear_gift_fields(db, entry.clone()).await {
            Ok(cleared) => {
                *entry = cleared;
                summary.cleared += 1;
            }
            Err(e) => {
                warn!("Failed to clear stale gift notes for birthday #{}: {}", entry.id, e);
                summary.failed += 1;
            }
        }
    }

    if summary.cleared > 0 {
        debug!("Cleared stale gift notes on {} birthdays", summary.cleared);
    }
    summary
}
