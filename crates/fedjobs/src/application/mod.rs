//! Application Layer
//!
//! The command pipeline: tokenize and parse arguments, build the API
//! query, format results, and dispatch replies.

pub mod dispatcher;
pub mod formatter;
pub mod parser;
pub mod query;

pub use dispatcher::{CommandDispatcher, DispatchReport, OutcomeKind};
pub use parser::{parse, tokenize, ParsedCommand};
