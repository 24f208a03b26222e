//! Reply Entities
//!
//! Units of output sent back to the invoking channel.

use serde::{Deserialize, Serialize};

/// How job listings are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyStyle {
    /// One markdown line per job
    #[default]
    Plain,
    /// One rich card per job
    Card,
}

/// Structured card for a single job listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCard {
    pub title: String,
    pub url: Option<String>,
    pub location: String,
    pub hiring_paths: String,
    pub organization: Option<String>,
}

/// One discrete message sent to the channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyUnit {
    Text { content: String },
    Card(JobCard),
}

impl ReplyUnit {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    /// Text content if this is a plain message
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { content } => Some(content),
            Self::Card(_) => None,
        }
    }
}
