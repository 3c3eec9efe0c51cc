/// Database configuration and connection management
pub mod database;

/// Display and behaviour settings loaded from config.toml
pub mod settings;
