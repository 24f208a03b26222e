//! Reply Sink Port
//!
//! Abstract interface for the channel a command replies to.

use async_trait::async_trait;

use crate::domain::entities::ReplyUnit;
use crate::domain::errors::DomainError;

/// Destination for the replies of one command invocation
///
/// # Example
///
/// ```rust,ignore
/// use fedjobs::ports::ReplySink;
///
/// struct ChannelSink { /* ... */ }
///
/// #[async_trait]
/// impl ReplySink for ChannelSink {
///     async fn send(&self, unit: &ReplyUnit) -> Result<(), DomainError> {
///         // Post the unit to the channel
///     }
/// }
/// ```
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Send one reply unit; each call is one outbound message
    async fn send(&self, unit: &ReplyUnit) -> Result<(), DomainError>;
}
