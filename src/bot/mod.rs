//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for `BirthdayBuddy`: slash
//! commands, autocomplete handlers, the shared bot context and the client loop.
//! Discord is the identity provider, so the command author's user ID is the
//! owner of every entry a command touches.

/// Discord command implementations (birthdays, gifts, general)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;

use crate::{config::settings::Settings, errors::Error};
use chrono::NaiveDate;
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands.
/// Holds the database connection and the loaded settings; there is no other
/// global state, per-user context comes from each command invocation.
pub struct BotData {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
    /// Settings loaded from config.toml
    pub settings: Settings,
}

impl BotData {
    /// Creates a new `BotData` instance.
    #[must_use]
    pub const fn new(database: DatabaseConnection, settings: Settings) -> Self {
        Self { database, settings }
    }
}

/// The reference day for all date calculations, in the bot host's local time.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Owner ID of the user who invoked a command.
#[must_use]
pub fn owner_id(ctx: poise::Context<'_, BotData, Error>) -> String {
    ctx.author().id.to_string()
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            let message = if error.is_user_error() {
                format!("❌ {error}")
            } else {
                error!("Error in command `{}`: {:?}", ctx.command().name, error);
                "❌ An error occurred, please try again later.".to_string()
            };
            if let Err(e) = ctx.say(message).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Builds the poise framework and runs the Discord client until it stops.
#[instrument(skip(token, data))]
pub async fn run_bot(token: String, data: BotData) -> Result<(), serenity::Error> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::add_birthday(),
                commands::birthdays(),
                commands::next_birthday(),
                commands::edit_birthday(),
                commands::delete_birthday(),
                commands::delete_all_birthdays(),
                commands::share_birthday(),
                commands::gift(),
                commands::clear_gift(),
                commands::ping(),
                commands::help(),
            ],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))
}
