//! Command Argument Parser
//!
//! Turns the free-form text after a command name into a [`SearchRequest`].
//!
//! ```text
//! developer -n 5 -l "New York" -p public -p vet
//! ```
//!
//! Flags match by exact name. A flag consumes the following token as its
//! value; a flag at the very end of input has no value and is ignored.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::{Advisory, SearchLimits, SearchRequest};
use crate::domain::errors::ParseError;

const FLAG_COUNT: &str = "-n";
const FLAG_LOCATION: &str = "-l";
const FLAG_HIRING_PATH: &str = "-p";

/// A successfully parsed command together with any advisories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    pub request: SearchRequest,
    pub advisories: Vec<Advisory>,
}

/// Split raw message text into tokens
///
/// Whitespace separates tokens; a double-quoted segment stays one token
/// with the quotes removed. An unterminated quote runs to end of input.
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in raw.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if has_token {
        tokens.push(current);
    }

    tokens
}

fn is_flag(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}

/// Parse command tokens into a search request
pub fn parse<S: AsRef<str>>(
    tokens: &[S],
    limits: &SearchLimits,
) -> Result<ParsedCommand, ParseError> {
    let mut keyword: Vec<&str> = Vec::new();
    let mut request = SearchRequest::new(String::new(), limits);
    let mut advisories = Vec::new();

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_ref();

        if !is_flag(token) {
            keyword.push(token);
            i += 1;
            continue;
        }

        let Some(value): Option<&str> = tokens.get(i + 1).map(|v| v.as_ref()) else {
            debug!(flag = %token, "Flag without value ignored");
            i += 1;
            continue;
        };

        match token {
            FLAG_COUNT => {
                let requested: i64 = value.parse().map_err(|_| ParseError::InvalidNumber {
                    flag: token.to_string(),
                    value: value.to_string(),
                })?;
                let (applied, clamped) = clamp_count(requested, limits.max_result_count);
                if clamped {
                    advisories.push(Advisory::CountClamped { requested, applied });
                }
                request.result_count = applied;
            }
            FLAG_LOCATION => {
                request.location = value.to_string();
            }
            FLAG_HIRING_PATH => {
                let path = value.trim();
                if !path.is_empty() {
                    request.hiring_paths.push(path.to_string());
                }
            }
            unknown => {
                debug!(flag = %unknown, "Unknown flag skipped");
                advisories.push(Advisory::UnknownFlag {
                    flag: unknown.to_string(),
                });
            }
        }
        i += 2;
    }

    if keyword.is_empty() {
        return Err(ParseError::MissingKeyword);
    }
    request.keyword = keyword.join(" ");

    Ok(ParsedCommand {
        request,
        advisories,
    })
}

fn clamp_count(requested: i64, max: u32) -> (u32, bool) {
    let max = max.max(1);
    if requested < 1 {
        (1, true)
    } else if requested > i64::from(max) {
        (max, true)
    } else {
        (requested as u32, false)
    }
}
