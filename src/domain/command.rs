//! Bot command parsing.

use std::fmt;

/// Supported bot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Top,
    Hot,
}

impl Command {
    /// Every command, in menu order.
    pub const ALL: [Command; 4] = [Command::Top, Command::Hot, Command::Help, Command::Start];

    /// Command name without the leading slash.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Help => "help",
            Self::Top => "top",
            Self::Hot => "hot",
        }
    }

    /// Short description shown in command lists.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Start => "Show the welcome message",
            Self::Help => "Show this help message",
            Self::Top => "Get top cryptocurrencies by market cap",
            Self::Hot => "Get trending cryptocurrencies",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.name())
    }
}

/// Parse error for inbound chat messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
}

impl fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a chat message into a bot command.
///
/// Only the first token counts; a `@botname` suffix is stripped and any
/// trailing arguments are ignored.
pub fn parse_command(text: &str) -> Result<Command, CommandParseError> {
    let Some(raw_command) = text.split_whitespace().next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    match command {
        "/start" => Ok(Command::Start),
        "/help" => Ok(Command::Help),
        "/top" => Ok(Command::Top),
        "/hot" => Ok(Command::Hot),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}
