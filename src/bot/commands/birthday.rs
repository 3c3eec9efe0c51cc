//! Birthday Discord commands - listing, adding, editing, deleting and sharing.
//!
//! Each command resolves the caller as the owner, calls into the core modules
//! and replies with the result. Validation and lookup errors bubble up with `?`
//! and are answered by the framework error handler.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete, owner_id, today},
        core::{birthday, display, gifts, upcoming},
        errors::{Error, Result},
    };
    use tracing::info;

    /// Lists your saved birthdays, soonest first.
    ///
    /// Stale gift notes are cleared before the list is built when enabled in
    /// the settings.
    #[poise::command(slash_command, prefix_command)]
    pub async fn birthdays(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        use poise::serenity_prelude as serenity;

        let data = ctx.data();
        let db = &data.database;
        let owner = owner_id(ctx);
        let today = today();

        ctx.defer().await?;

        let entries = gifts::load_birthdays(
            db,
            &owner,
            today,
            data.settings.gifts.clear_after_birthday,
        )
        .await?;

        if entries.is_empty() {
            ctx.say("🎂 No birthdays saved yet. Add the first one with `/add_birthday`!")
                .await?;
            return Ok(());
        }

        let total = entries.len();
        let ranked = upcoming::rank_by_upcoming(entries, today);
        let limit = data.settings.display.list_limit.clamp(1, 25);

        // Title, description and footer stay well under this
        let cards = display::fit_cards(&ranked, &data.settings, limit, 200)?;
        let shown = cards.len();
        let embed_fields = cards.into_iter().map(|(title, body)| (title, body, false));

        let footer = if total > shown {
            format!("BirthdayBuddy | showing {shown} of {}", display::count_label(total))
        } else {
            format!("BirthdayBuddy | {}", display::count_label(total))
        };

        let embed = serenity::CreateEmbed::default()
            .title("🎂 Upcoming Birthdays")
            .description(format!("As of {}", today.format("%Y-%m-%d")))
            .color(0x00E9_1E63)
            .fields(embed_fields)
            .footer(serenity::CreateEmbedFooter::new(footer));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Shows the next birthday coming up.
    #[poise::command(slash_command, prefix_command)]
    pub async fn next_birthday(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();
        let today = today();

        let entries = gifts::load_birthdays(
            &data.database,
            &owner_id(ctx),
            today,
            data.settings.gifts.clear_after_birthday,
        )
        .await?;
        let ranked = upcoming::rank_by_upcoming(entries, today);

        let Some(next) = ranked.first() else {
            ctx.say("🎂 No birthdays saved yet. Add the first one with `/add_birthday`!")
                .await?;
            return Ok(());
        };

        ctx.say(format!(
            "**{}**\n{}",
            display::card_title(next, &data.settings),
            display::card_body(next, &data.settings)?
        ))
        .await?;
        Ok(())
    }

    /// Saves a new birthday.
    #[poise::command(slash_command, prefix_command)]
    pub async fn add_birthday(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the person"] name: String,
        #[description = "Date of birth (YYYY-MM-DD)"] date: String,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let owner = owner_id(ctx);
        let today = today();

        let birth_date = birthday::parse_birth_date(&date)?;

        ctx.defer().await?;
        let entry = birthday::create_birthday(db, &owner, &name, birth_date, today).await?;
        info!("Owner {} added birthday #{}", owner, entry.id);

        let next = upcoming::UpcomingBirthday::new(entry, today);
        ctx.say(format!(
            "✅ Saved **{}**'s birthday ({}), {}",
            display::format_person_name(&next.entry.person_name),
            display::format_day_month(next.entry.birth_date),
            display::countdown_label(next.days_until)
        ))
        .await?;
        Ok(())
    }

    /// Changes the name or date of a saved birthday.
    #[poise::command(slash_command, prefix_command)]
    pub async fn edit_birthday(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Person to edit (name or #id)"]
        #[autocomplete = "autocomplete::autocomplete_person"]
        person: String,
        #[description = "New name"] name: Option<String>,
        #[description = "New date of birth (YYYY-MM-DD)"] date: Option<String>,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let owner = owner_id(ctx);

        if name.is_none() && date.is_none() {
            ctx.say("❌ Please specify a new name, a new date, or both.")
                .await?;
            return Ok(());
        }

        let birth_date = date.as_deref().map(birthday::parse_birth_date).transpose()?;

        ctx.defer().await?;
        let existing = birthday::resolve_person(db, &owner, &person).await?;
        let updated = birthday::update_birthday(
            db,
            &owner,
            existing.id,
            name.as_deref().unwrap_or(&existing.person_name),
            birth_date.unwrap_or(existing.birth_date),
            today(),
        )
        .await?;
        info!("Owner {} edited birthday #{}", owner, updated.id);

        ctx.say(format!(
            "✅ Updated birthday #{}: **{}**, {}",
            updated.id,
            display::format_person_name(&updated.person_name),
            updated.birth_date.format("%Y-%m-%d")
        ))
        .await?;
        Ok(())
    }

    /// Deletes a saved birthday.
    #[poise::command(slash_command, prefix_command)]
    pub async fn delete_birthday(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Person to delete (name or #id)"]
        #[autocomplete = "autocomplete::autocomplete_person"]
        person: String,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let owner = owner_id(ctx);

        ctx.defer().await?;
        let entry = birthday::resolve_person(db, &owner, &person).await?;

        if !birthday::delete_birthday(db, &owner, entry.id).await? {
            return Err(Error::BirthdayNotFound { id: entry.id });
        }
        info!("Owner {} deleted birthday #{}", owner, entry.id);

        ctx.say(format!(
            "🗑️ Deleted **{}**'s birthday.",
            display::format_person_name(&entry.person_name)
        ))
        .await?;
        Ok(())
    }

    /// Deletes every birthday you have saved. This cannot be undone.
    #[poise::command(slash_command, prefix_command)]
    pub async fn delete_all_birthdays(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Set to True to confirm deleting your whole list"] confirm: bool,
    ) -> Result<()> {
        if !confirm {
            return Err(Error::ConfirmationRequired);
        }

        let db = &ctx.data().database;
        let owner = owner_id(ctx);

        ctx.defer().await?;
        let removed = birthday::delete_all_birthdays(db, &owner).await?;
        info!("Owner {} deleted all {} birthdays", owner, removed);

        ctx.say(format!(
            "🗑️ Deleted {}.",
            display::count_label(usize::try_from(removed).unwrap_or(usize::MAX))
        ))
        .await?;
        Ok(())
    }

    /// Gives you a reminder text about a birthday to forward to others.
    #[poise::command(slash_command, prefix_command)]
    pub async fn share_birthday(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Person to share (name or #id)"]
        #[autocomplete = "autocomplete::autocomplete_person"]
        person: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let entry = birthday::resolve_person(db, &owner_id(ctx), &person).await?;
        let next = upcoming::UpcomingBirthday::new(entry, today());

        ctx.say(format!("```\n{}\n```", display::share_text(&next)))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
