//! fedjobs Domain Library
//!
//! Core types and the command pipeline for the fedjobs job-search bot.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): request-scoped value types
//!   - `entities/`: SearchRequest, JobResult, SearchOutcome, ReplyUnit
//!   - `errors/`: parse errors, search failures and domain errors
//!
//! - **Ports** (`ports/`): traits for the external collaborators
//!   (the job-search API and the chat reply sink)
//!
//! - **Application** (`application/`): tokenizer, parser, query builder,
//!   formatter and the command dispatcher that ties them together
//!
//! - **Services** (`services/`): the USAJOBS HTTP client
//!
//! # Usage
//!
//! ```rust,ignore
//! use fedjobs::{CommandDispatcher, SearchLimits, UsaJobsClient, UsaJobsConfig};
//!
//! let client = UsaJobsClient::new(UsaJobsConfig::new("api-key", "me@example.com"));
//! let dispatcher = CommandDispatcher::new(Arc::new(client), SearchLimits::default());
//! dispatcher.fetch_jobs(&args, &sink).await?;
//! ```

pub mod application;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use application::{CommandDispatcher, DispatchReport, OutcomeKind, ParsedCommand};
pub use domain::{
    Advisory, DateWindow, DomainError, JobCard, JobResult, ParseError, QueryParameters,
    ReplyStyle, ReplyUnit, SearchFailure, SearchLimits, SearchOutcome, SearchRequest,
};
pub use ports::{JobSearchService, ReplySink};
pub use services::usajobs::{UsaJobsClient, UsaJobsConfig};
