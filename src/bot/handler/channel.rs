use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildChannel, Message};

use crate::service::spam_filter::{tracker::SpamFilterTracker, SpamFilterService};

/// Handle channel deletion
///
/// Disables the spam filter for the deleted channel so its stored record does not
/// outlive the channel.
pub async fn handle_channel_delete(
    db: &DatabaseConnection,
    tracker: &SpamFilterTracker,
    _ctx: Context,
    channel: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    let channel_id = channel.id.get();

    match SpamFilterService::new(db, tracker).disable(channel_id).await {
        Ok(true) => tracing::info!(
            "Disabled spam filter for deleted channel {} in guild {}",
            channel_id,
            channel.guild_id
        ),
        Ok(false) => {}
        Err(e) => tracing::error!(
            "Failed to disable spam filter for deleted channel {}: {}",
            channel_id,
            e
        ),
    }
}
