//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Birthday list and management commands
pub mod birthday;

/// General utility commands
pub mod general;

/// Gift note commands
pub mod gift;

// Export commands
pub use birthday::*;
pub use general::*;
pub use gift::*;
