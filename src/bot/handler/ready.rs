//! Ready event handler for bot initialization.
//!
//! The ready event fires after every successful gateway handshake, including reconnects
//! that start a new session. Registering commands here keeps the global command list in
//! sync with the running build.

use dioxus_logger::tracing;
use serenity::all::{Context, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// Logs the connection and registers the bot's slash commands.
///
/// # Arguments
/// - `ctx` - Discord context providing the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    if let Err(e) = command::register_commands(&ctx.http).await {
        tracing::error!("Failed to register slash commands: {}", e);
    }
}
