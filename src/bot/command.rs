//! Slash command definitions and registration.

use dioxus_logger::tracing;
use serenity::all::{Command, CommandOptionType, CreateCommand, CreateCommandOption, Permissions};
use serenity::http::Http;

use crate::{
    error::AppError,
    model::command::{BotCommand, STATE_OPTION, STATE_OPTION_DESCRIPTION},
};

/// Builds the registration payload for a command.
pub fn create_command(command: BotCommand) -> CreateCommand {
    match command {
        BotCommand::SpamFilter => CreateCommand::new(command.name())
            .description(command.description())
            .default_member_permissions(Permissions::MANAGE_CHANNELS)
            .dm_permission(false)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    STATE_OPTION,
                    STATE_OPTION_DESCRIPTION,
                )
                .required(true)
                .set_autocomplete(true),
            ),
    }
}

/// Registers every bot command globally.
///
/// Overwrites the bot's global command list, so commands that no longer exist are removed.
///
/// # Returns
/// - `Ok(Vec<Command>)` - Commands as registered by Discord
/// - `Err(AppError::DiscordErr)` - Registration request failed
pub async fn register_commands(http: &Http) -> Result<Vec<Command>, AppError> {
    let commands = BotCommand::ALL.into_iter().map(create_command).collect();

    let registered = Command::set_global_commands(http, commands).await?;

    tracing::info!("Registered {} global commands", registered.len());

    Ok(registered)
}
