use chrono::Utc;
use dioxus_logger::tracing;
use serenity::all::{Context, Mentionable, Message};
use serenity::http::Http;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    model::{command::spam_warning, spam_filter::MessageVerdict},
    service::spam_filter::tracker::SpamFilterTracker,
};

/// Handle message creation in a channel
pub async fn handle_message(tracker: &SpamFilterTracker, ctx: Context, message: Message) {
    if !is_moderated(&message) {
        return;
    }

    let verdict = tracker
        .check_message(
            message.channel_id.get(),
            message.author.id.get(),
            message.timestamp.to_utc(),
            Utc::now(),
        )
        .await;

    let MessageVerdict::Filtered { warn } = verdict else {
        return;
    };

    tracing::debug!(
        "Filtering message {} from {} in channel {}",
        message.id,
        message.author.id,
        message.channel_id
    );

    if let Err(e) = message.delete(&ctx.http).await {
        tracing::error!(
            "Failed to delete spam message {} in channel {}: {}",
            message.id,
            message.channel_id,
            e
        );
    }

    if warn {
        send_warning(ctx.http.clone(), &message, tracker.settings().warning_lifetime).await;
    }
}

/// Whether a message is subject to moderation.
///
/// Messages from bots (including this one) and direct messages are never filtered.
pub fn is_moderated(message: &Message) -> bool {
    !message.author.bot && message.guild_id.is_some()
}

/// Posts a spam warning mentioning the author and deletes it after `lifetime`.
async fn send_warning(http: Arc<Http>, message: &Message, lifetime: Duration) {
    let content = spam_warning(message.author.mention());

    let reply = match message.channel_id.say(&http, content).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(
                "Failed to send spam warning in channel {}: {}",
                message.channel_id,
                e
            );
            return;
        }
    };

    tokio::spawn(async move {
        tokio::time::sleep(lifetime).await;

        if let Err(e) = reply.delete(&http).await {
            tracing::warn!(
                "Failed to delete spam warning {} in channel {}: {}",
                reply.id,
                reply.channel_id,
                e
            );
        }
    });
}
