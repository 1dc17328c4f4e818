use dioxus_logger::tracing::Level;
use std::str::FromStr;

use crate::error::{config::ConfigError, AppError};
use crate::model::spam_filter::SpamFilterSettings;

const DEFAULT_DATABASE_URL: &str = "sqlite://spam-filter.db?mode=rwc";

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,
    pub log_level: Level,

    pub spam_filter: SpamFilterSettings,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// `dotenvy` should already have been run so values from `.env` are visible.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// Only `DISCORD_BOT_TOKEN` is required; every other variable falls back to a default.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and valid
    /// - `Err(AppError::ConfigErr)` - Token missing or a numeric variable failed to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SpamFilterSettings::default();

        let discord_bot_token = lookup("DISCORD_BOT_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let log_level: Level = parse_or(&lookup, "LOG_LEVEL", Level::INFO)?;

        let message_limit: usize = parse_or(
            &lookup,
            "SPAM_FILTER_MESSAGE_LIMIT",
            defaults.message_limit,
        )?;
        if message_limit == 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: "SPAM_FILTER_MESSAGE_LIMIT".to_string(),
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        let window_ms = parse_millis_or(&lookup, "SPAM_FILTER_WINDOW_MS", defaults.window)?;
        let warning_cooldown_ms = parse_millis_or(
            &lookup,
            "SPAM_FILTER_WARNING_COOLDOWN_MS",
            defaults.warning_cooldown,
        )?;
        let warning_lifetime_secs: u64 = parse_or(
            &lookup,
            "SPAM_FILTER_WARNING_LIFETIME_SECS",
            defaults.warning_lifetime.as_secs(),
        )?;

        Ok(Self {
            discord_bot_token,
            database_url,
            log_level,
            spam_filter: SpamFilterSettings {
                message_limit,
                window: chrono::Duration::milliseconds(window_ms),
                warning_cooldown: chrono::Duration::milliseconds(warning_cooldown_ms),
                warning_lifetime: std::time::Duration::from_secs(warning_lifetime_secs),
            },
        })
    }
}

/// Parses an optional variable, falling back to `default` when it is unset.
fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}

/// Parses an optional millisecond duration, rejecting negative values.
fn parse_millis_or<F>(lookup: &F, name: &str, default: chrono::Duration) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let millis: i64 = parse_or(lookup, name, default.num_milliseconds())?;
    if millis < 0 {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: millis.to_string(),
            reason: "must not be negative".to_string(),
        });
    }

    Ok(millis)
}
