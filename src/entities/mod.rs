//! Entity module - Contains the SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod birthday;

pub use birthday::{Entity as Birthday, Model as BirthdayModel};
