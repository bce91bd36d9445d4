// Database models (internal, may differ from public domain types)

use chrono::{DateTime, NaiveDateTime, Utc};
use matchday_core::{Chat, Event, Member};
use sqlx::FromRow;
use uuid::Uuid;

// ============================================
// Chat models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct ChatRow {
    pub id: Uuid,
    pub external_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<ChatRow> for Chat {
    fn from(row: ChatRow) -> Self {
        Chat {
            id: row.id,
            external_id: row.external_id,
            created_at: row.created_at,
        }
    }
}

// ============================================
// Event models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub id: Uuid,
    pub chat_id: Uuid,
    pub scheduled_for: NaiveDateTime,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: row.id,
            chat_id: row.chat_id,
            scheduled_for: row.scheduled_for,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEvent {
    pub chat_id: Uuid,
    pub scheduled_for: NaiveDateTime,
}

// ============================================
// Member models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct MemberRow {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: String,
    pub display_name: String,
    pub joined_at: DateTime<Utc>,
}

impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        Member {
            id: row.id,
            event_id: row.event_id,
            user_id: row.user_id,
            display_name: row.display_name,
            joined_at: row.joined_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMember {
    pub event_id: Uuid,
    pub user_id: String,
    pub display_name: String,
}
