//! Unified error types for `BirthdayBuddy`.
//!
//! Validation and lookup variants are meant to be shown to the user as-is;
//! the remaining variants wrap infrastructure failures.

use chrono::NaiveDate;
use thiserror::Error;

/// Every error the bot can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Person name was empty or whitespace-only
    #[error("A name is required")]
    EmptyName,

    /// Birth date lies after today
    #[error("Birth date {date} is in the future")]
    FutureBirthDate {
        /// The rejected date
        date: NaiveDate,
    },

    /// Date text could not be parsed
    #[error("'{input}' is not a valid date, use YYYY-MM-DD")]
    InvalidDate {
        /// Raw user input
        input: String,
    },

    /// Gift budget was negative or not a finite number
    #[error("Invalid gift budget: {amount}")]
    InvalidBudget {
        /// The rejected amount
        amount: f64,
    },

    /// A destructive bulk action was requested without confirmation
    #[error("This action needs explicit confirmation")]
    ConfirmationRequired,

    /// No entry with this ID belongs to the caller
    #[error("Birthday #{id} not found")]
    BirthdayNotFound {
        /// Entry ID that was looked up
        id: i64,
    },

    /// No entry with this person name belongs to the caller
    #[error("No birthday saved for '{name}'")]
    PersonNotFound {
        /// Name that was looked up
        name: String,
    },

    /// Several entries share the same person name
    #[error("{count} birthdays are saved as '{name}', pick one by its #id")]
    AmbiguousPerson {
        /// Name that was looked up
        name: String,
        /// Number of matching entries
        count: usize,
    },

    /// Text is longer than the bot can store or display
    #[error("{field} is too long ({length} characters, at most {max})")]
    TooLong {
        /// Which input was too long
        field: &'static str,
        /// Characters supplied
        length: usize,
        /// Characters allowed
        max: usize,
    },

    /// Settings or environment could not be loaded
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Query or connection failure reported by `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Filesystem failure, e.g. creating the database directory
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Required environment variable missing or not unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Building a reply string failed
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    /// Discord client or framework failure
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl Error {
    /// Whether the error was caused by user input rather than infrastructure.
    ///
    /// User errors are replied to directly; the rest go to the framework error handler.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyName
                | Self::FutureBirthDate { .. }
                | Self::InvalidDate { .. }
                | Self::InvalidBudget { .. }
                | Self::TooLong { .. }
                | Self::ConfirmationRequired
                | Self::BirthdayNotFound { .. }
                | Self::PersonNotFound { .. }
                | Self::AmbiguousPerson { .. }
        )
    }
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_user_errors_are_classified() {
        assert!(Error::EmptyName.is_user_error());
        assert!(Error::ConfirmationRequired.is_user_error());
        assert!(
            Error::TooLong {
                field: "Name",
                length: 120,
                max: 100
            }
            .is_user_error()
        );
        assert!(Error::PersonNotFound { name: "Ada".to_string() }.is_user_error());
        assert!(
            !Error::Config {
                message: "bad".to_string()
            }
            .is_user_error()
        );
    }

    #[test]
    fn test_error_messages() {
        let date = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert_eq!(
            Error::FutureBirthDate { date }.to_string(),
            "Birth date 2030-01-01 is in the future"
        );
        assert_eq!(
            Error::AmbiguousPerson {
                name: "Sam".to_string(),
                count: 2
            }
            .to_string(),
            "2 birthdays are saved as 'Sam', pick one by its #id"
        );
    }
}
