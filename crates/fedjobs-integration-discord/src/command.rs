//! Prefix command routing

use fedjobs::application::parser::tokenize;

/// Commands the bot answers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    FetchJobs,
    FetchCybersecurity,
    Hello,
    Help,
}

impl Command {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "fetchjobs" => Some(Self::FetchJobs),
            "fetchjobs_cybersecurity" => Some(Self::FetchCybersecurity),
            "hello" => Some(Self::Hello),
            "help" => Some(Self::Help),
            _ => None,
        }
    }
}

/// A recognized command and its argument tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub args: Vec<String>,
}

/// Match message content against `<prefix><command> [args...]`
///
/// Returns `None` for messages without the prefix or with an unknown
/// command name.
pub fn parse_invocation(prefix: &str, content: &str) -> Option<Invocation> {
    let rest = content.trim_start().strip_prefix(prefix)?;
    let (name, args) = match rest.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args),
        None => (rest, ""),
    };

    let command = Command::from_name(name)?;
    Some(Invocation {
        command,
        args: tokenize(args),
    })
}
