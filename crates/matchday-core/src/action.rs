// Inbound action contract
//
// A tagged request carrying chat/user identifiers and action-specific
// parameters. Identifier validation happens here, ahead of any store call.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};

/// Action kinds routed by the dispatcher
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    EventAdd,
    EventInfo,
    EventJoin,
    EventLeave,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::EventAdd => write!(f, "event_add"),
            ActionKind::EventInfo => write!(f, "event_info"),
            ActionKind::EventJoin => write!(f, "event_join"),
            ActionKind::EventLeave => write!(f, "event_leave"),
        }
    }
}

/// The user a request acts on behalf of
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub display_name: String,
}

impl UserRef {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// One inbound request for a chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest {
    pub kind: ActionKind,
    /// Opaque identifier assigned by the chat platform
    pub chat_id: String,
    pub user: UserRef,
    /// Schedule text for event_add, e.g. "2024-05-01T18:00"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<String>,
}

impl ActionRequest {
    pub fn new(kind: ActionKind, chat_id: impl Into<String>, user: UserRef) -> Self {
        Self {
            kind,
            chat_id: chat_id.into(),
            user,
            scheduled_for: None,
        }
    }

    /// Attach schedule text (event_add)
    pub fn with_schedule(mut self, text: impl Into<String>) -> Self {
        self.scheduled_for = Some(text.into());
        self
    }

    /// Reject malformed identifiers before they reach the store layer
    pub fn validate(&self) -> Result<()> {
        if self.chat_id.trim().is_empty() {
            return Err(SchedulerError::validation("chat identifier is empty"));
        }
        if self.user.id.trim().is_empty() {
            return Err(SchedulerError::validation("user identifier is empty"));
        }
        Ok(())
    }
}
