//! Slash command models and reply texts.
//!
//! Command names are only ever read through [`BotCommand::name`], so renaming a command
//! is a single-line change here.

use std::fmt;

/// Slash commands registered by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BotCommand {
    SpamFilter,
}

impl BotCommand {
    pub const ALL: [BotCommand; 1] = [BotCommand::SpamFilter];

    /// Name the command is registered under.
    pub fn name(self) -> &'static str {
        match self {
            BotCommand::SpamFilter => "spamfilter",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BotCommand::SpamFilter => "Filter chat for spam.",
        }
    }

    /// Looks a command up by the name Discord sends in an interaction.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }
}

/// Name of the `state` option of the spam filter command.
pub const STATE_OPTION: &str = "state";
pub const STATE_OPTION_DESCRIPTION: &str = "Enable/disable the spam filter";

/// Requested spam filter state for a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    Enable,
    Disable,
}

impl FilterState {
    /// All states in the order they are offered to users.
    pub const ALL: [FilterState; 2] = [FilterState::Enable, FilterState::Disable];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterState::Enable => "enable",
            FilterState::Disable => "disable",
        }
    }

    /// Parses user input, ignoring case.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.to_lowercase();
        Self::ALL.into_iter().find(|state| state.as_str() == input)
    }

    /// Options starting with `prefix`, for autocomplete.
    pub fn completions(prefix: &str) -> Vec<&'static str> {
        Self::ALL
            .into_iter()
            .map(FilterState::as_str)
            .filter(|option| option.starts_with(prefix))
            .collect()
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reply for a state argument that matched no option.
///
/// The input is echoed lower-cased, followed by the list of valid options.
pub fn unknown_state_reply(input: &str) -> String {
    let mut reply = format!(
        "Unknown state argument: `{}` \u{1F914}\n\nAvailable options:",
        input.to_lowercase()
    );
    for state in FilterState::ALL {
        reply.push_str(&format!("\n- *{}*", state));
    }
    reply
}

/// Reply after enabling or disabling the filter in `channel_id`.
///
/// # Arguments
/// - `state` - The state the user asked for
/// - `changed` - Whether the channel actually changed state
/// - `channel_id` - Channel the command was run in
pub fn toggle_reply(state: FilterState, changed: bool, channel_id: u64) -> String {
    let channel = format!("<#{}>", channel_id);
    let verb = match state {
        FilterState::Enable => "enabled",
        FilterState::Disable => "disabled",
    };

    if changed {
        format!("Spam filter has been {} for {} \u{2705}", verb, channel)
    } else {
        format!("Spam filter is already {} for {} \u{274C}", verb, channel)
    }
}

/// Reply when the command could not be processed.
pub const COMMAND_ERROR_REPLY: &str = "Error while processing command. \u{1F937}";

/// Reply when the command is used outside of a guild.
pub const GUILD_ONLY_REPLY: &str = "This command can only be used in a server.";

/// Warning posted when a user's message is filtered.
pub fn spam_warning(mention: impl fmt::Display) -> String {
    format!("Please do not spam {}, thank you \u{1F62E}", mention)
}
