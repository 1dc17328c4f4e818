//! Discord bot integration.
//!
//! All Discord protocol work (gateway connection, heartbeats, reconnects, REST rate
//! limits, event dispatch) is handled by Serenity. This module only builds the client,
//! declares the slash commands and reacts to the events the spam filter needs.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive channel deletions so filtered channels can be cleaned up
//! - `GUILD_MESSAGES` - Receive the messages the spam filter moderates
//! - `MESSAGE_CONTENT` - Privileged intent, must be enabled in the Discord Developer Portal
//!
//! # Permissions
//!
//! The bot needs `MANAGE_MESSAGES` in filtered channels to delete other users' messages,
//! and `SEND_MESSAGES` to post spam warnings.

pub mod command;
pub mod handler;
pub mod start;
