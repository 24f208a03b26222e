//! SearchRequest Entity
//!
//! The structured query produced by the argument parser.

use serde::{Deserialize, Serialize};

/// Location sentinel meaning "do not filter by location"
pub const ALL_LOCATIONS: &str = "All";

/// Hiring path sent when the user did not ask for any
pub const DEFAULT_HIRING_PATH: &str = "public";

/// Bounds and defaults applied while parsing and building queries
///
/// Deserialized values are normalized so that
/// `1 <= default_result_count <= max_result_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSearchLimits")]
pub struct SearchLimits {
    /// Result count used when `-n` is absent
    pub default_result_count: u32,
    /// Upper bound for `-n`; larger values are clamped
    pub max_result_count: u32,
    /// Length of the trailing posting-date window in days
    pub window_days: u32,
}

#[derive(Deserialize)]
struct RawSearchLimits {
    #[serde(default = "default_result_count")]
    default_result_count: u32,
    #[serde(default = "default_max_result_count")]
    max_result_count: u32,
    #[serde(default = "default_window_days")]
    window_days: u32,
}

impl From<RawSearchLimits> for SearchLimits {
    fn from(raw: RawSearchLimits) -> Self {
        Self {
            default_result_count: raw.default_result_count,
            max_result_count: raw.max_result_count,
            window_days: raw.window_days,
        }
        .normalized()
    }
}

fn default_result_count() -> u32 {
    10
}

fn default_max_result_count() -> u32 {
    30
}

fn default_window_days() -> u32 {
    14
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            default_result_count: default_result_count(),
            max_result_count: default_max_result_count(),
            window_days: default_window_days(),
        }
    }
}

impl SearchLimits {
    /// Set the maximum result count
    ///
    /// A maximum of 0 becomes 1, and the default result count is lowered
    /// to the new maximum when it would exceed it.
    pub fn with_max_result_count(mut self, max: u32) -> Self {
        self.max_result_count = max.max(1);
        self.default_result_count = self.default_result_count.clamp(1, self.max_result_count);
        self
    }

    /// Bring the default count into `[1, max_result_count]`
    pub fn normalized(self) -> Self {
        self.with_max_result_count(self.max_result_count)
    }

    /// Set the date window length
    pub fn with_window_days(mut self, days: u32) -> Self {
        self.window_days = days;
        self
    }
}

/// A parsed job search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Space-joined keyword phrase, never empty
    pub keyword: String,
    /// Number of results to show, within `[1, max_result_count]`
    pub result_count: u32,
    /// Location filter, `"All"` when unfiltered
    pub location: String,
    /// Hiring path filters in the order given, empty means public
    pub hiring_paths: Vec<String>,
}

impl SearchRequest {
    /// Create a request with default count and no filters
    pub fn new(keyword: impl Into<String>, limits: &SearchLimits) -> Self {
        Self {
            keyword: keyword.into(),
            result_count: limits
                .default_result_count
                .clamp(1, limits.max_result_count.max(1)),
            location: ALL_LOCATIONS.to_string(),
            hiring_paths: Vec::new(),
        }
    }

    /// Whether a location filter applies
    pub fn has_location(&self) -> bool {
        !self.location.eq_ignore_ascii_case(ALL_LOCATIONS)
    }
}

/// Non-fatal adjustment made while parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// `-n` was outside `[1, max]` and was clamped
    CountClamped { requested: i64, applied: u32 },
    /// A flag nobody handles was skipped with its value
    UnknownFlag { flag: String },
}
