//! General Discord commands - ping and help.
//! These commands don't touch the database.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**BirthdayBuddy Help**\n\
        Keep track of birthdays and gift ideas. Only you can see and change your list.\n\n\
        **Birthdays**\n\
        • `/add_birthday <name> <date>` - Saves a birthday (date as YYYY-MM-DD).\n\
        • `/birthdays` - Lists your birthdays, soonest first.\n\
        • `/next_birthday` - Shows the next birthday coming up.\n\
        • `/edit_birthday <person> [name] [date]` - Changes a saved birthday.\n\
        • `/delete_birthday <person>` - Deletes a birthday.\n\
        • `/delete_all_birthdays confirm:True` - Deletes your whole list.\n\
        • `/share_birthday <person>` - Gives you a reminder text to forward.\n\n\
        **Gifts**\n\
        • `/gift <person> [idea] [budget]` - Notes a gift idea and/or budget; fields left out are kept.\n\
        • `/clear_gift <person>` - Removes gift notes.\n\
        Gift notes are cleared once the birthday they were noted for has passed (configurable).\n\n\
        **Utility**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.\n\n\
        When two people share a name, refer to them by `#id` as shown in `/birthdays`.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
