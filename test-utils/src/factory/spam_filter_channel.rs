//! Spam filter channel factory for creating test filtered channel entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test filtered channel records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::spam_filter_channel::SpamFilterChannelFactory;
///
/// let channel = SpamFilterChannelFactory::new(&db)
///     .channel_id(987654321)
///     .build()
///     .await?;
/// ```
pub struct SpamFilterChannelFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    channel_id: String,
    enabled_by: String,
    created_at: DateTime<Utc>,
}

impl<'a> SpamFilterChannelFactory<'a> {
    /// Creates a new SpamFilterChannelFactory with default values.
    ///
    /// Defaults:
    /// - guild_id, channel_id, enabled_by: unique auto-incremented IDs
    /// - created_at: `Utc::now()`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            channel_id: next_id().to_string(),
            enabled_by: next_id().to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id.to_string();
        self
    }

    pub fn channel_id(mut self, channel_id: u64) -> Self {
        self.channel_id = channel_id.to_string();
        self
    }

    /// Sets the raw stored channel ID, allowing invalid snowflakes in tests.
    pub fn raw_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn enabled_by(mut self, user_id: u64) -> Self {
        self.enabled_by = user_id.to_string();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the filtered channel entity into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::spam_filter_channel::Model, DbErr> {
        entity::spam_filter_channel::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            enabled_by: ActiveValue::Set(self.enabled_by),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a filtered channel record for the given guild and channel.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID
/// - `channel_id` - Discord channel ID
///
/// # Returns
/// - `Ok(Model)` - The created entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_spam_filter_channel(
    db: &DatabaseConnection,
    guild_id: u64,
    channel_id: u64,
) -> Result<entity::spam_filter_channel::Model, DbErr> {
    SpamFilterChannelFactory::new(db)
        .guild_id(guild_id)
        .channel_id(channel_id)
        .build()
        .await
}
