//! Cron jobs run alongside the bot.

pub mod spam_filter_sweep;
