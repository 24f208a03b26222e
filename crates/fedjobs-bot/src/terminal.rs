//! Terminal reply sink for `fedjobs search`

use async_trait::async_trait;
use colored::Colorize;
use fedjobs::{DomainError, JobCard, ReplySink, ReplyUnit};

/// Prints reply units to stdout
pub struct TerminalSink;

impl TerminalSink {
    fn render_text(content: &str) -> String {
        // Discord bold markers are dropped in favour of terminal styling.
        match content.strip_prefix("**").and_then(|rest| rest.split_once("**")) {
            Some((title, rest)) => format!("{}{}", title.bold(), rest),
            None => content.to_string(),
        }
    }

    fn render_card(card: &JobCard) -> String {
        let mut out = format!("{}\n  {} {}", card.title.bold(), "Location:".dimmed(), card.location);
        out.push_str(&format!("\n  {} {}", "Hiring paths:".dimmed(), card.hiring_paths));
        if let Some(url) = &card.url {
            out.push_str(&format!("\n  {} {}", "Apply:".dimmed(), url.cyan()));
        }
        if let Some(org) = &card.organization {
            out.push_str(&format!("\n  {}", org.dimmed()));
        }
        out
    }
}

#[async_trait]
impl ReplySink for TerminalSink {
    async fn send(&self, unit: &ReplyUnit) -> Result<(), DomainError> {
        let rendered = match unit {
            ReplyUnit::Text { content } => Self::render_text(content),
            ReplyUnit::Card(card) => Self::render_card(card),
        };
        println!("{}\n", rendered);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_strips_bold_markers() {
        colored::control::set_override(false);
        assert_eq!(
            TerminalSink::render_text("**Cyber Analyst** - Remote"),
            "Cyber Analyst - Remote"
        );
        assert_eq!(TerminalSink::render_text("plain"), "plain");
    }
}
