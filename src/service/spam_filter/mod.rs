//! Spam filter service coordinating persisted and in-memory filter state.
//!
//! The tracker answers every moderation question; the database only remembers which
//! channels are filtered so that the tracker can be rebuilt after a restart. Every toggle
//! writes to the database first and updates the tracker only once the write succeeded.

pub mod tracker;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    data::spam_filter_channel::SpamFilterChannelRepository,
    error::AppError,
    model::spam_filter::EnableSpamFilterParam,
};

use self::tracker::SpamFilterTracker;

pub struct SpamFilterService<'a> {
    db: &'a DatabaseConnection,
    tracker: &'a SpamFilterTracker,
}

impl<'a> SpamFilterService<'a> {
    pub fn new(db: &'a DatabaseConnection, tracker: &'a SpamFilterTracker) -> Self {
        Self { db, tracker }
    }

    /// Enables the spam filter for a channel.
    ///
    /// # Returns
    /// - `Ok(true)` - The filter was enabled
    /// - `Ok(false)` - The filter was already enabled
    /// - `Err(AppError::DbErr)` - Failed to persist the channel; the tracker is unchanged
    pub async fn enable(&self, param: EnableSpamFilterParam) -> Result<bool, AppError> {
        let channel_id = param.channel_id;

        if self.tracker.is_filtered(channel_id).await {
            return Ok(false);
        }

        SpamFilterChannelRepository::new(self.db)
            .create(param)
            .await?;

        Ok(self.tracker.set_channel(channel_id, true).await)
    }

    /// Disables the spam filter for a channel.
    ///
    /// # Returns
    /// - `Ok(true)` - The filter was disabled
    /// - `Ok(false)` - The filter was not enabled
    /// - `Err(AppError::DbErr)` - Failed to remove the stored channel; the tracker is unchanged
    pub async fn disable(&self, channel_id: u64) -> Result<bool, AppError> {
        if !self.tracker.is_filtered(channel_id).await {
            return Ok(false);
        }

        SpamFilterChannelRepository::new(self.db)
            .delete(channel_id)
            .await?;

        Ok(self.tracker.set_channel(channel_id, false).await)
    }

    /// Loads every stored channel into the tracker.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of channels restored
    /// - `Err(AppError::DbErr)` - Failed to read stored channels
    /// - `Err(AppError::InternalErr)` - A stored channel ID is not a valid snowflake
    pub async fn restore(&self) -> Result<usize, AppError> {
        let channels = SpamFilterChannelRepository::new(self.db).get_all().await?;

        let mut restored = 0;
        for channel in &channels {
            let channel_id = channel.channel_id_u64()?;
            if self.tracker.set_channel(channel_id, true).await {
                restored += 1;
            }
        }

        tracing::info!("Restored spam filter for {} channels", restored);

        Ok(restored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::internal::InternalError;
    use crate::model::spam_filter::SpamFilterSettings;
    use test_utils::{builder::TestBuilder, factory};

    fn param(channel_id: u64) -> EnableSpamFilterParam {
        EnableSpamFilterParam {
            guild_id: 1,
            channel_id,
            enabled_by: 2,
        }
    }

    /// Tests enabling a channel twice.
    ///
    /// Expected: first call persists and filters the channel, second reports no change
    #[tokio::test]
    async fn enable_persists_and_tracks() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tracker = SpamFilterTracker::new(SpamFilterSettings::default());
        let service = SpamFilterService::new(db, &tracker);

        assert!(service.enable(param(10)).await?);
        assert!(!service.enable(param(10)).await?);

        assert!(tracker.is_filtered(10).await);
        let stored = SpamFilterChannelRepository::new(db).get_all().await?;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].channel_id, "10");

        Ok(())
    }

    /// Tests two moderators enabling the same channel at once.
    ///
    /// Expected: one call enables the filter, the other reports it already enabled
    #[tokio::test]
    async fn concurrent_enables_both_succeed() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tracker = SpamFilterTracker::new(SpamFilterSettings::default());
        let first = SpamFilterService::new(db, &tracker);
        let second = SpamFilterService::new(db, &tracker);

        let (a, b) = tokio::join!(
            first.enable(EnableSpamFilterParam {
                enabled_by: 1,
                ..param(10)
            }),
            second.enable(EnableSpamFilterParam {
                enabled_by: 2,
                ..param(10)
            })
        );
        let mut changed = [a?, b?];
        changed.sort();

        assert_eq!(changed, [false, true]);
        assert!(tracker.is_filtered(10).await);
        let stored = SpamFilterChannelRepository::new(db).get_all().await?;
        assert_eq!(stored.len(), 1);

        Ok(())
    }

    /// Tests disabling an enabled channel and a channel that was never enabled.
    #[tokio::test]
    async fn disable_removes_stored_channel() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tracker = SpamFilterTracker::new(SpamFilterSettings::default());
        let service = SpamFilterService::new(db, &tracker);

        assert!(!service.disable(10).await?);

        service.enable(param(10)).await?;
        assert!(service.disable(10).await?);

        assert!(!tracker.is_filtered(10).await);
        assert!(SpamFilterChannelRepository::new(db)
            .get_by_channel_id(10)
            .await?
            .is_none());

        Ok(())
    }

    /// Tests that a failed write leaves the tracker untouched.
    ///
    /// Expected: Err(DbErr) and the channel is not filtered
    #[tokio::test]
    async fn enable_without_table_fails_cleanly() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tracker = SpamFilterTracker::new(SpamFilterSettings::default());
        let service = SpamFilterService::new(db, &tracker);

        let result = service.enable(param(10)).await;

        assert!(matches!(result, Err(AppError::DbErr(_))));
        assert!(!tracker.is_filtered(10).await);
    }

    /// Tests restoring stored channels into an empty tracker.
    ///
    /// Expected: Ok(2) with both channels filtered
    #[tokio::test]
    async fn restore_loads_stored_channels() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_spam_filter_channel(db, 1, 10).await?;
        factory::create_spam_filter_channel(db, 1, 11).await?;

        let tracker = SpamFilterTracker::new(SpamFilterSettings::default());
        let restored = SpamFilterService::new(db, &tracker).restore().await?;

        assert_eq!(restored, 2);
        assert!(tracker.is_filtered(10).await);
        assert!(tracker.is_filtered(11).await);
        assert!(!tracker.is_filtered(12).await);

        Ok(())
    }

    /// Tests restoring a row whose channel ID is not a snowflake.
    ///
    /// Expected: Err(InternalErr(ParseStringId))
    #[tokio::test]
    async fn restore_rejects_invalid_channel_id() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::spam_filter_channel::SpamFilterChannelFactory::new(db)
            .raw_channel_id("general")
            .build()
            .await?;

        let tracker = SpamFilterTracker::new(SpamFilterSettings::default());
        let result = SpamFilterService::new(db, &tracker).restore().await;

        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::ParseStringId { ref value, .. }))
                if value == "general"
        ));

        Ok(())
    }
}
