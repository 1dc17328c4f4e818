//! Slash command and autocomplete handling.
//!
//! Every command reply is ephemeral, so only the member who ran the command sees it.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, Context, CreateAutocompleteResponse, CreateInteractionResponse,
    CreateInteractionResponseMessage, Interaction,
};

use crate::{
    model::{
        command::{
            toggle_reply, unknown_state_reply, BotCommand, FilterState, COMMAND_ERROR_REPLY,
            GUILD_ONLY_REPLY, STATE_OPTION,
        },
        spam_filter::EnableSpamFilterParam,
    },
    service::spam_filter::{tracker::SpamFilterTracker, SpamFilterService},
};

/// Values of a `/spamfilter` invocation needed to act on it.
#[derive(Debug, Clone)]
pub struct SpamFilterRequest<'a> {
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    pub user_id: u64,
    /// Raw `state` option as typed by the user.
    pub state: &'a str,
}

pub async fn handle_interaction(
    db: &DatabaseConnection,
    tracker: &SpamFilterTracker,
    ctx: Context,
    interaction: Interaction,
) {
    match interaction {
        Interaction::Command(command) => handle_command(db, tracker, ctx, command).await,
        Interaction::Autocomplete(autocomplete) => handle_autocomplete(ctx, autocomplete).await,
        _ => {}
    }
}

async fn handle_command(
    db: &DatabaseConnection,
    tracker: &SpamFilterTracker,
    ctx: Context,
    command: CommandInteraction,
) {
    let reply = match BotCommand::from_name(&command.data.name) {
        Some(BotCommand::SpamFilter) => {
            let state = command
                .data
                .options
                .iter()
                .find(|option| option.name == STATE_OPTION)
                .and_then(|option| option.value.as_str())
                .unwrap_or_default();

            let request = SpamFilterRequest {
                guild_id: command.guild_id.map(|id| id.get()),
                channel_id: command.channel_id.get(),
                user_id: command.user.id.get(),
                state,
            };

            spam_filter_reply(db, tracker, request).await
        }
        None => {
            tracing::warn!("Received unknown command /{}", command.data.name);
            return;
        }
    };

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(reply)
            .ephemeral(true),
    );

    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!(
            "Failed to reply to /{} in channel {}: {}",
            command.data.name,
            command.channel_id,
            e
        );
    }
}

/// Applies a `/spamfilter` request and builds the reply text.
///
/// The state is validated before anything else; invalid input never touches the filter.
pub async fn spam_filter_reply(
    db: &DatabaseConnection,
    tracker: &SpamFilterTracker,
    request: SpamFilterRequest<'_>,
) -> String {
    let Some(state) = FilterState::parse(request.state) else {
        return unknown_state_reply(request.state);
    };

    let Some(guild_id) = request.guild_id else {
        return GUILD_ONLY_REPLY.to_string();
    };

    let service = SpamFilterService::new(db, tracker);
    let result = match state {
        FilterState::Enable => {
            service
                .enable(EnableSpamFilterParam {
                    guild_id,
                    channel_id: request.channel_id,
                    enabled_by: request.user_id,
                })
                .await
        }
        FilterState::Disable => service.disable(request.channel_id).await,
    };

    match result {
        Ok(changed) => {
            if changed {
                tracing::info!(
                    "User {} set spam filter to {} for channel {} in guild {}",
                    request.user_id,
                    state,
                    request.channel_id,
                    guild_id
                );
            }
            toggle_reply(state, changed, request.channel_id)
        }
        Err(e) => {
            tracing::error!(
                "Failed to {} spam filter for channel {}: {}",
                state,
                request.channel_id,
                e
            );
            COMMAND_ERROR_REPLY.to_string()
        }
    }
}

async fn handle_autocomplete(ctx: Context, autocomplete: CommandInteraction) {
    if BotCommand::from_name(&autocomplete.data.name) != Some(BotCommand::SpamFilter) {
        return;
    }

    let Some(focused) = autocomplete.data.autocomplete() else {
        return;
    };
    if focused.name != STATE_OPTION {
        return;
    }

    let choices = FilterState::completions(focused.value)
        .into_iter()
        .fold(CreateAutocompleteResponse::new(), |response, option| {
            response.add_string_choice(option, option)
        });

    if let Err(e) = autocomplete
        .create_response(&ctx.http, CreateInteractionResponse::Autocomplete(choices))
        .await
    {
        tracing::error!("Failed to send autocomplete choices: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::spam_filter_channel::SpamFilterChannelRepository;
    use crate::model::spam_filter::SpamFilterSettings;
    use test_utils::builder::TestBuilder;

    fn request(state: &str) -> SpamFilterRequest<'_> {
        SpamFilterRequest {
            guild_id: Some(1),
            channel_id: 42,
            user_id: 7,
            state,
        }
    }

    /// Tests enabling then re-enabling through the command.
    ///
    /// Expected: success reply, then already-enabled reply, and the channel is stored
    #[tokio::test]
    async fn enable_replies() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tracker = SpamFilterTracker::new(SpamFilterSettings::default());

        assert_eq!(
            spam_filter_reply(db, &tracker, request("Enable")).await,
            "Spam filter has been enabled for <#42> \u{2705}"
        );
        assert_eq!(
            spam_filter_reply(db, &tracker, request("enable")).await,
            "Spam filter is already enabled for <#42> \u{274C}"
        );

        let stored = SpamFilterChannelRepository::new(db)
            .get_by_channel_id(42)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.enabled_by, "7");
        assert_eq!(stored.guild_id, "1");
    }

    #[tokio::test]
    async fn disable_replies() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tracker = SpamFilterTracker::new(SpamFilterSettings::default());

        assert_eq!(
            spam_filter_reply(db, &tracker, request("disable")).await,
            "Spam filter is already disabled for <#42> \u{274C}"
        );

        spam_filter_reply(db, &tracker, request("enable")).await;
        assert_eq!(
            spam_filter_reply(db, &tracker, request("DISABLE")).await,
            "Spam filter has been disabled for <#42> \u{2705}"
        );
        assert!(!tracker.is_filtered(42).await);
    }

    /// Tests that invalid input is rejected before anything else is checked.
    #[tokio::test]
    async fn unknown_state_is_rejected() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tracker = SpamFilterTracker::new(SpamFilterSettings::default());

        let reply = spam_filter_reply(
            db,
            &tracker,
            SpamFilterRequest {
                guild_id: None,
                ..request("On")
            },
        )
        .await;

        assert_eq!(reply, unknown_state_reply("on"));
        assert!(tracker.filtered_channels().await.is_empty());
    }

    #[tokio::test]
    async fn direct_messages_are_rejected() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tracker = SpamFilterTracker::new(SpamFilterSettings::default());

        let reply = spam_filter_reply(
            db,
            &tracker,
            SpamFilterRequest {
                guild_id: None,
                ..request("enable")
            },
        )
        .await;

        assert_eq!(reply, GUILD_ONLY_REPLY);
    }

    /// Tests the reply when the channel cannot be stored.
    ///
    /// Expected: generic error reply and the channel stays unfiltered
    #[tokio::test]
    async fn storage_failure_replies_with_error() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tracker = SpamFilterTracker::new(SpamFilterSettings::default());

        assert_eq!(
            spam_filter_reply(db, &tracker, request("enable")).await,
            COMMAND_ERROR_REPLY
        );
        assert!(!tracker.is_filtered(42).await);
    }
}
