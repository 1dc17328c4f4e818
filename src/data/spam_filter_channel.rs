//! Spam filter channel repository for database operations.
//!
//! Persists the set of channels that have the spam filter enabled so the filter survives
//! bot restarts. Discord snowflakes are stored as strings.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::model::spam_filter::{EnableSpamFilterParam, FilteredChannel};

pub struct SpamFilterChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpamFilterChannelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the filtered channel record for a Discord channel.
    ///
    /// # Returns
    /// - `Ok(Some(FilteredChannel))` - The filter is enabled for the channel
    /// - `Ok(None)` - No record exists for the channel
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_channel_id(&self, channel_id: u64) -> Result<Option<FilteredChannel>, DbErr> {
        let entity = entity::prelude::SpamFilterChannel::find()
            .filter(entity::spam_filter_channel::Column::ChannelId.eq(channel_id.to_string()))
            .one(self.db)
            .await?;

        Ok(entity.map(FilteredChannel::from_entity))
    }

    /// Gets every filtered channel, oldest first.
    pub async fn get_all(&self) -> Result<Vec<FilteredChannel>, DbErr> {
        let entities = entity::prelude::SpamFilterChannel::find()
            .order_by_asc(entity::spam_filter_channel::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(FilteredChannel::from_entity).collect())
    }

    /// Records that the spam filter is enabled for a channel.
    ///
    /// The insert is skipped on a `channel_id` conflict, so concurrent calls for the same
    /// channel all succeed and return the one stored record.
    ///
    /// # Arguments
    /// - `param` - Guild, channel and enabling user
    ///
    /// # Returns
    /// - `Ok(FilteredChannel)` - The created or existing record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: EnableSpamFilterParam) -> Result<FilteredChannel, DbErr> {
        let channel_id = param.channel_id;

        entity::prelude::SpamFilterChannel::insert(entity::spam_filter_channel::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            channel_id: ActiveValue::Set(channel_id.to_string()),
            enabled_by: ActiveValue::Set(param.enabled_by.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::spam_filter_channel::Column::ChannelId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.get_by_channel_id(channel_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("spam_filter_channel {}", channel_id)))
    }

    /// Deletes the record for a channel.
    ///
    /// # Returns
    /// - `Ok(true)` - A record was deleted
    /// - `Ok(false)` - No record existed for the channel
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, channel_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::SpamFilterChannel::delete_many()
            .filter(entity::spam_filter_channel::Column::ChannelId.eq(channel_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
