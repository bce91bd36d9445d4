// Event and member domain types
//
// An event is a single scheduled activity owned by exactly one chat; at most
// one event per chat is active at any time. Members associate users with an
// event.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates::format_schedule;

/// A scheduled activity owned by exactly one chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub chat_id: Uuid,
    /// Wall-clock schedule; the wire format carries no timezone
    pub scheduled_for: NaiveDateTime,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// A participant association between a user and an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: String,
    pub display_name: String,
    pub joined_at: DateTime<Utc>,
}

/// Roster snapshot rendered into success payloads
///
/// `players` is ordered by join time and empty (not null) for a fresh event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventDetails {
    pub date: String,
    pub total: i64,
    pub players: Vec<String>,
}

impl EventDetails {
    pub fn new(event: &Event, total: i64, members: &[Member]) -> Self {
        Self {
            date: format_schedule(event.scheduled_for),
            total,
            players: members.iter().map(|m| m.display_name.clone()).collect(),
        }
    }
}
