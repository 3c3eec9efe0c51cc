//! Gift note commands.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete, owner_id, today},
        core::{birthday, display, gifts},
        errors::{Error, Result},
    };
    use tracing::info;

    /// Notes a gift idea and budget for someone's birthday.
    ///
    /// Only the fields you give are changed; an empty idea removes the stored one.
    /// Use `/clear_gift` to remove everything.
    #[poise::command(slash_command, prefix_command)]
    pub async fn gift(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Person (name or #id)"]
        #[autocomplete = "autocomplete::autocomplete_person"]
        person: String,
        #[description = "Gift idea"] idea: Option<String>,
        #[description = "Budget"] budget: Option<f64>,
    ) -> Result<()> {
        let data = ctx.data();
        let db = &data.database;
        let owner = owner_id(ctx);

        if idea.is_none() && budget.is_none() {
            ctx.say("❌ Please specify a gift idea, a budget, or both.")
                .await?;
            return Ok(());
        }
        gifts::validate_budget(budget)?;

        ctx.defer().await?;
        let entry = birthday::resolve_person(db, &owner, &person).await?;
        let updated = gifts::set_gift(db, &owner, entry.id, idea, budget, today()).await?;
        info!("Owner {} saved gift notes on birthday #{}", owner, updated.id);

        let name = display::format_person_name(&updated.person_name);
        let message = match (&updated.gift_idea, updated.gift_budget) {
            (None, None) => format!("✅ Cleared gift notes for **{name}**."),
            (idea, budget) => {
                let idea = idea.as_deref().unwrap_or("no idea yet");
                let budget = budget.map_or_else(
                    || "no budget".to_string(),
                    |amount| display::format_budget(amount, &data.settings.gifts.currency_symbol),
                );
                format!("🎁 Saved gift notes for **{name}**: {idea}, {budget}")
            }
        };

        ctx.say(message).await?;
        Ok(())
    }

    /// Removes the gift notes from a birthday.
    #[poise::command(slash_command, prefix_command)]
    pub async fn clear_gift(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Person (name or #id)"]
        #[autocomplete = "autocomplete::autocomplete_person"]
        person: String,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let owner = owner_id(ctx);

        ctx.defer().await?;
        let entry = birthday::resolve_person(db, &owner, &person).await?;
        let cleared = gifts::clear_gift(db, &owner, entry.id).await?;
        info!("Owner {} cleared gift notes on birthday #{}", owner, cleared.id);

        ctx.say(format!(
            "✅ Cleared gift notes for **{}**.",
            display::format_person_name(&cleared.person_name)
        ))
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
