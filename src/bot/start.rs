use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::handler::Handler, config::Config, error::AppError,
    service::spam_filter::tracker::SpamFilterTracker,
};

/// Gateway intents the bot connects with.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT
}

/// Builds the Discord bot client
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `db` - Database connection used to persist filtered channels
/// - `tracker` - Spam filter state, already restored from the database
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Client creation failed (e.g. malformed token)
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    tracker: SpamFilterTracker,
) -> Result<Client, AppError> {
    let handler = Handler::new(db, tracker);

    let client = Client::builder(&config.discord_bot_token, intents())
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Runs the Discord bot until the gateway connection ends
///
/// # Returns
/// - `Ok(())` - The client shut down cleanly
/// - `Err(AppError::DiscordErr)` - Authentication or gateway failure
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
