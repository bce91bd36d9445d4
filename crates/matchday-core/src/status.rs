// Status registry
//
// A closed set of outcome codes attached to every response envelope. The
// serialized forms are part of the wire contract with callers and must stay
// stable across versions.

use serde::{Deserialize, Serialize};

/// Outcome code attached to every response envelope
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusCode {
    /// The action completed and mutated or read state as requested
    Success,
    /// The chat has no active event
    NoEvent,
    /// The user is already on the roster
    AlreadyJoined,
    /// The user is not on the roster
    NotJoined,
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusCode::Success => write!(f, "success"),
            StatusCode::NoEvent => write!(f, "no_event"),
            StatusCode::AlreadyJoined => write!(f, "already_joined"),
            StatusCode::NotJoined => write!(f, "not_joined"),
        }
    }
}
