//! Job Entities
//!
//! Results decoded from the job-search API.

use serde::{Deserialize, Serialize};

use crate::domain::errors::SearchFailure;

/// Display value for a job with no hiring paths listed
pub const HIRING_PATHS_NOT_SPECIFIED: &str = "Not specified";

/// A single job listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobResult {
    pub title: String,
    /// First listed location; multi-location jobs keep only this one
    pub location_name: String,
    pub apply_url: Option<String>,
    #[serde(default)]
    pub hiring_paths: Vec<String>,
    pub organization: Option<String>,
}

impl JobResult {
    pub fn new(title: impl Into<String>, location_name: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            location_name: location_name.into(),
            apply_url: None,
            hiring_paths: Vec::new(),
            organization: None,
        }
    }

    pub fn with_apply_url(mut self, url: impl Into<String>) -> Self {
        self.apply_url = Some(url.into());
        self
    }

    pub fn with_hiring_paths(mut self, paths: Vec<String>) -> Self {
        self.hiring_paths = paths;
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Hiring paths joined for display, or "Not specified"
    pub fn hiring_paths_display(&self) -> String {
        if self.hiring_paths.is_empty() {
            HIRING_PATHS_NOT_SPECIFIED.to_string()
        } else {
            self.hiring_paths.join(", ")
        }
    }
}

/// Result of one search call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Success {
        /// Overall match count reported by the API, may exceed `results.len()`
        total_count: u64,
        results: Vec<JobResult>,
    },
    Failure(SearchFailure),
}

impl SearchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<SearchFailure> for SearchOutcome {
    fn from(failure: SearchFailure) -> Self {
        Self::Failure(failure)
    }
}
