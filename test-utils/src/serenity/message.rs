//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

use super::user::user_json;

/// Creates a test Serenity Message with plain text content.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was posted in
/// - `guild_id` - Guild of the channel, `None` for direct messages
/// - `author_id` - Discord user ID of the author
/// - `author_bot` - Whether the author is a bot account
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::create_test_message;
///
/// let message = create_test_message(1, 2, Some(3), 4, false);
/// assert_eq!(message.channel_id.get(), 2);
/// ```
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    guild_id: Option<u64>,
    author_id: u64,
    author_bot: bool,
) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": guild_id.map(|id| id.to_string()),
        "author": user_json(author_id, "author", author_bot),
        "content": "test message",
        "timestamp": "2024-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "nonce": null,
        "pinned": false,
        "webhook_id": null,
        "type": 0,
        "flags": 0,
        "components": [],
        "sticker_items": [],
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
