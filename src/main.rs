mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;

use dioxus_logger::tracing;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    dioxus_logger::init(config.log_level)?;

    let db = startup::connect_to_database(&config).await?;
    let tracker = startup::setup_spam_filter(&config, &db).await?;

    // Keep the scheduler alive for the lifetime of the bot
    let _sweep = scheduler::spam_filter_sweep::start_scheduler(tracker.clone()).await?;

    let client = bot::start::init_bot(&config, db, tracker).await?;

    if let Err(e) = bot::start::start_bot(client).await {
        tracing::error!("Discord bot error: {}", e);
        return Err(e);
    }

    Ok(())
}
