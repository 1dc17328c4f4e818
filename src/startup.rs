use dioxus_logger::tracing;

use crate::{
    config::Config,
    error::AppError,
    service::spam_filter::{tracker::SpamFilterTracker, SpamFilterService},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the spam filter tracker and restores the channels stored in the database.
///
/// # Returns
/// - `Ok(SpamFilterTracker)` - Tracker with every stored channel filtered
/// - `Err(AppError)` - Failed to read stored channels or a stored ID is invalid
pub async fn setup_spam_filter(
    config: &Config,
    db: &sea_orm::DatabaseConnection,
) -> Result<SpamFilterTracker, AppError> {
    let tracker = SpamFilterTracker::new(config.spam_filter.clone());

    SpamFilterService::new(db, &tracker).restore().await?;

    tracing::debug!(
        "Spam filter limit: {} messages per {}ms",
        config.spam_filter.message_limit,
        config.spam_filter.window.num_milliseconds()
    );

    Ok(tracker)
}
