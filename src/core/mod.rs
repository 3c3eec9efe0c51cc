//! Core business logic - framework-agnostic birthday operations.
//!
//! `occurrence` and `upcoming` are pure date arithmetic; `birthday` and `gifts`
//! talk to the database; `display` turns results into text.

/// Owner-scoped storage of birthday entries
pub mod birthday;
/// Text formatting for names, dates and countdowns
pub mod display;
/// Gift notes and stale-note clearing
pub mod gifts;
/// Recurring-date arithmetic: ages and next occurrences
pub mod occurrence;
/// Ranking entries by their next occurrence
pub mod upcoming;
