//! Domain models for spam filter moderation and persisted filtered channels.

use chrono::{DateTime, Duration, Utc};

use crate::error::internal::InternalError;

/// Tunable limits applied by the spam filter.
#[derive(Debug, Clone, PartialEq)]
pub struct SpamFilterSettings {
    /// Number of messages inside `window` (the new one included) that trips the filter.
    pub message_limit: usize,
    /// Sliding window over which a user's messages are counted.
    pub window: Duration,
    /// Minimum time between two spam warnings for the same user.
    pub warning_cooldown: Duration,
    /// How long a warning reply stays in the channel before it is deleted.
    pub warning_lifetime: std::time::Duration,
}

impl Default for SpamFilterSettings {
    /// 3 messages per 7 seconds, one warning per user every 8 seconds, warnings
    /// removed after 5 seconds.
    fn default() -> Self {
        Self {
            message_limit: 3,
            window: Duration::milliseconds(7000),
            warning_cooldown: Duration::milliseconds(8000),
            warning_lifetime: std::time::Duration::from_secs(5),
        }
    }
}

/// Outcome of running a message through the spam filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageVerdict {
    /// The channel is not filtered.
    Untracked,
    /// The message is within the rate limit and was recorded.
    Allowed,
    /// The message exceeds the rate limit and should be deleted.
    ///
    /// `warn` is set when the author has not been warned within the cooldown.
    Filtered { warn: bool },
}

/// Channel with the spam filter enabled, as stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredChannel {
    pub id: i32,
    /// Discord guild ID (stored as String).
    pub guild_id: String,
    /// Discord channel ID (stored as String).
    pub channel_id: String,
    /// Discord user ID of the member that enabled the filter (stored as String).
    pub enabled_by: String,
    pub created_at: DateTime<Utc>,
}

impl FilteredChannel {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::spam_filter_channel::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: entity.guild_id,
            channel_id: entity.channel_id,
            enabled_by: entity.enabled_by,
            created_at: entity.created_at,
        }
    }

    /// Parses the stored channel ID back into a Discord snowflake.
    ///
    /// # Returns
    /// - `Ok(u64)` - The channel ID
    /// - `Err(InternalError::ParseStringId)` - Stored value is not a valid u64
    pub fn channel_id_u64(&self) -> Result<u64, InternalError> {
        self.channel_id
            .parse::<u64>()
            .map_err(|source| InternalError::ParseStringId {
                value: self.channel_id.clone(),
                source,
            })
    }
}

/// Parameters for enabling the spam filter in a channel.
#[derive(Debug, Clone)]
pub struct EnableSpamFilterParam {
    pub guild_id: u64,
    pub channel_id: u64,
    /// Discord user ID of the member running the command.
    pub enabled_by: u64,
}
