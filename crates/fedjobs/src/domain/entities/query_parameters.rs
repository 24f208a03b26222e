//! QueryParameters Value Object
//!
//! Remote API parameters derived from a SearchRequest.

use serde::{Deserialize, Serialize};

use super::date_window::DateWindow;

/// Parameters for one job-search API call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameters {
    pub keyword: String,
    pub results_per_page: u32,
    /// Present only when a location filter applies
    pub location_name: Option<String>,
    /// Semicolon-joined hiring paths
    pub hiring_path: String,
    pub window: DateWindow,
}

impl QueryParameters {
    /// Query-string pairs in the order the API documents them
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("Keyword", self.keyword.clone()),
            ("ResultsPerPage", self.results_per_page.to_string()),
        ];
        if let Some(location) = &self.location_name {
            pairs.push(("LocationName", location.clone()));
        }
        pairs.push(("HiringPath", self.hiring_path.clone()));
        pairs.push(("DatePosted", self.window.days().to_string()));
        pairs
    }
}
