//! Job Search Service Port
//!
//! Abstract interface for the remote job-search API.

use async_trait::async_trait;

use crate::domain::entities::{QueryParameters, SearchOutcome};

/// Service interface for job search operations
///
/// Implementations issue exactly one outbound call per invocation and
/// never retry. Every failure is folded into [`SearchOutcome::Failure`]
/// instead of being returned as an error.
#[async_trait]
pub trait JobSearchService: Send + Sync {
    /// Run a search with the given query parameters
    async fn search(&self, params: &QueryParameters) -> SearchOutcome;
}
