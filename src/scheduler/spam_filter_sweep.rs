use chrono::Utc;
use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::spam_filter::tracker::SpamFilterTracker};

/// Starts the spam filter sweep scheduler
///
/// Runs every minute and prunes message histories and warnings that can no longer
/// affect a moderation verdict, so state for users who stopped posting does not
/// accumulate. Filtered channels are left in place.
///
/// # Arguments
/// - `tracker`: Spam filter state shared with the event handler
///
/// # Returns
/// - `Ok(JobScheduler)` - The running scheduler; keep it alive for the job to keep firing
/// - `Err(AppError::SchedulerErr)` - Failed to create, add or start the job
pub async fn start_scheduler(tracker: SpamFilterTracker) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let tracker = tracker.clone();

        Box::pin(async move {
            let stats = tracker.prune(Utc::now()).await;

            if stats.histories > 0 || stats.warnings > 0 {
                tracing::debug!(
                    "Spam filter sweep removed {} histories and {} warnings",
                    stats.histories,
                    stats.warnings
                );
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Spam filter sweep scheduler started");

    Ok(scheduler)
}
