//! Domain Layer
//!
//! Request-scoped value types and errors for a single command invocation.
//! Nothing here performs I/O.

pub mod entities;
pub mod errors;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
