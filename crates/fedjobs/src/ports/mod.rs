//! Ports (Interfaces)
//!
//! Abstract interfaces for the collaborators the pipeline talks to:
//! the remote job-search API and the chat channel receiving replies.
//!
//! Implementations live in `services/` and in the integration crates.

pub mod job_search;
pub mod reply_sink;

// Re-exports
pub use job_search::*;
pub use reply_sink::*;
