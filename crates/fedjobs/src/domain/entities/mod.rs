//! Domain Entities
//!
//! Value objects created at the start of one command invocation and
//! discarded once its replies are sent.
//! - SearchRequest: parsed user query
//! - DateWindow: trailing posting-date window
//! - QueryParameters: remote API query
//! - JobResult / SearchOutcome: decoded API results
//! - ReplyUnit: one message sent back to the channel

mod date_window;
mod job;
mod query_parameters;
mod reply;
mod search_request;

pub use date_window::*;
pub use job::*;
pub use query_parameters::*;
pub use reply::*;
pub use search_request::*;
