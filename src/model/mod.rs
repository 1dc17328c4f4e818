//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary. Command
//! models describe the slash commands the bot exposes and the replies they produce.

pub mod command;
pub mod spam_filter;
