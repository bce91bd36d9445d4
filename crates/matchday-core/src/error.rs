// Error types for action dispatch and state resolution

use thiserror::Error;

use crate::action::ActionKind;

/// Result type alias for scheduler operations
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Errors that can occur while resolving an action
///
/// Absence of an active event is NOT an error; it is reported as a status
/// code on the response envelope. These variants cover real faults.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Malformed request, rejected before any store call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Chat or event store failure
    #[error("Store error: {0}")]
    Store(String),

    /// No handler registered for the action kind
    #[error("No handler registered for action: {0}")]
    UnhandledAction(ActionKind),

    /// The dispatch channel dropped before a reply arrived
    #[error("Dispatch channel closed")]
    ChannelClosed,

    /// Response payload serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl SchedulerError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        SchedulerError::Validation(msg.into())
    }

    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        SchedulerError::Store(msg.into())
    }
}
