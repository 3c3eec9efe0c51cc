//! Birthday entity - One saved birthday with optional gift notes.
//!
//! Each entry belongs to exactly one Discord user (`owner_id`). Only the stored
//! birth date is persisted; days-until and ages are recomputed on every load.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Birthday database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "birthdays")]
pub struct Model {
    /// Unique identifier for the entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Discord user ID of the owner
    pub owner_id: String,
    /// Name of the person whose birthday this is
    pub person_name: String,
    /// Date of birth; the year only matters for ages
    pub birth_date: Date,
    /// Free-text gift idea
    pub gift_idea: Option<String>,
    /// Planned gift budget, never negative
    pub gift_budget: Option<f64>,
    /// Day the gift notes were last written, used to detect stale notes
    pub gift_noted_on: Option<Date>,
    /// When the entry was created
    pub created_at: DateTimeUtc,
}

impl Model {
    /// Whether any gift note is stored on this entry.
    #[must_use]
    pub const fn has_gift_notes(&self) -> bool {
        self.gift_idea.is_some() || self.gift_budget.is_some()
    }
}

/// `Birthday` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
