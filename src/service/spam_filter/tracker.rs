//! In-memory rate-limit state for filtered channels.
//!
//! `SpamFilterTracker` keeps, for each filtered channel, the recent message timestamps of
//! every user that posted there, plus the time each user was last warned. A channel is
//! filtered exactly when it has an entry in the channel map. The tracker is cheap to clone
//! and shares one state between the event handler and the sweep job.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::spam_filter::{MessageVerdict, SpamFilterSettings};

/// Message timestamps per user within one channel.
type ChannelHistory = HashMap<u64, Vec<DateTime<Utc>>>;

#[derive(Default)]
struct TrackerState {
    channels: HashMap<u64, ChannelHistory>,
    warnings: HashMap<u64, DateTime<Utc>>,
}

/// Counts of entries removed by [`SpamFilterTracker::prune`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PruneStats {
    pub histories: usize,
    pub warnings: usize,
}

#[derive(Clone)]
pub struct SpamFilterTracker {
    settings: Arc<SpamFilterSettings>,
    state: Arc<RwLock<TrackerState>>,
}

impl SpamFilterTracker {
    pub fn new(settings: SpamFilterSettings) -> Self {
        Self {
            settings: Arc::new(settings),
            state: Arc::new(RwLock::new(TrackerState::default())),
        }
    }

    pub fn settings(&self) -> &SpamFilterSettings {
        &self.settings
    }

    /// Enables or disables filtering for a channel.
    ///
    /// Disabling a channel drops every history recorded in it.
    ///
    /// # Returns
    /// - `true` - The channel changed state
    /// - `false` - The channel was already in the requested state
    pub async fn set_channel(&self, channel_id: u64, enabled: bool) -> bool {
        let mut state = self.state.write().await;
        let filtered = state.channels.contains_key(&channel_id);

        match (enabled, filtered) {
            (true, false) => {
                state.channels.insert(channel_id, HashMap::new());
                true
            }
            (false, true) => {
                state.channels.remove(&channel_id);
                true
            }
            _ => false,
        }
    }

    pub async fn is_filtered(&self, channel_id: u64) -> bool {
        self.state.read().await.channels.contains_key(&channel_id)
    }

    /// IDs of every filtered channel.
    #[cfg(test)]
    pub async fn filtered_channels(&self) -> std::collections::HashSet<u64> {
        self.state.read().await.channels.keys().copied().collect()
    }

    /// Runs a message through the rate limit.
    ///
    /// The author's history is trimmed to entries no older than the window (relative to
    /// `now`), then the message is counted together with the remaining entries. Below the
    /// limit the message timestamp is recorded; at or above it the message is filtered and
    /// never recorded. The whole check happens under one write lock.
    ///
    /// # Arguments
    /// - `channel_id` - Channel the message was posted in
    /// - `author_id` - Author of the message
    /// - `sent_at` - Creation timestamp of the message
    /// - `now` - Current time
    pub async fn check_message(
        &self,
        channel_id: u64,
        author_id: u64,
        sent_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> MessageVerdict {
        let mut state = self.state.write().await;
        let window = self.settings.window;

        let Some(channel) = state.channels.get_mut(&channel_id) else {
            return MessageVerdict::Untracked;
        };

        let history = channel.entry(author_id).or_default();
        history.retain(|timestamp| now.signed_duration_since(*timestamp) <= window);

        let message_count = history.len() + 1;
        if message_count < self.settings.message_limit {
            history.push(sent_at);
            return MessageVerdict::Allowed;
        }

        let warn = !Self::warned_recently(&mut state, &self.settings, author_id, now);
        if warn {
            state.warnings.insert(author_id, now);
        }

        MessageVerdict::Filtered { warn }
    }

    /// Whether `user_id` was warned within the cooldown of `now`.
    fn warned_recently(
        state: &mut TrackerState,
        settings: &SpamFilterSettings,
        user_id: u64,
        now: DateTime<Utc>,
    ) -> bool {
        let Some(warned_at) = state.warnings.get(&user_id).copied() else {
            return false;
        };

        if now.signed_duration_since(warned_at) <= settings.warning_cooldown {
            return true;
        }

        // Stale warnings are dropped as soon as they are seen
        state.warnings.remove(&user_id);
        false
    }

    /// Removes state that can no longer affect a verdict.
    ///
    /// Drops history entries outside the window, user histories left empty, and warnings
    /// older than the cooldown. Filtered channels themselves are kept.
    pub async fn prune(&self, now: DateTime<Utc>) -> PruneStats {
        let mut state = self.state.write().await;
        let window = self.settings.window;
        let cooldown = self.settings.warning_cooldown;
        let mut stats = PruneStats::default();

        for channel in state.channels.values_mut() {
            let before = channel.len();
            channel.retain(|_, history| {
                history.retain(|timestamp| now.signed_duration_since(*timestamp) <= window);
                !history.is_empty()
            });
            stats.histories += before - channel.len();
        }

        let before = state.warnings.len();
        state
            .warnings
            .retain(|_, warned_at| now.signed_duration_since(*warned_at) <= cooldown);
        stats.warnings = before - state.warnings.len();

        stats
    }

    #[cfg(test)]
    async fn history_len(&self, channel_id: u64, user_id: u64) -> Option<usize> {
        self.state
            .read()
            .await
            .channels
            .get(&channel_id)
            .and_then(|channel| channel.get(&user_id))
            .map(Vec::len)
    }
}
