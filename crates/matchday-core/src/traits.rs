// Store traits for pluggable persistence backends
//
// These traits let the handlers run against different backends:
// - In-memory implementations for examples and testing
// - Postgres implementation for production

use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::chat::Chat;
use crate::error::Result;
use crate::event::{Event, Member};

// ============================================================================
// ChatStore - Chat row lifecycle
// ============================================================================

/// Trait for chat row lifecycle
///
/// Implementations must keep `ensure_chat` idempotent: concurrent calls for
/// the same identifier insert at most one row.
#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Look up a chat by external identifier, creating it if absent
    async fn ensure_chat(&self, external_id: &str) -> Result<Chat>;

    /// Number of chats known to the store
    async fn count(&self) -> Result<i64>;
}

// ============================================================================
// EventStore - Event and roster lifecycle
// ============================================================================

/// Trait for event and roster lifecycle
///
/// At most one event per chat is active at any time. Creating a new event
/// replaces the previous active one (last-write-wins).
#[async_trait]
pub trait EventStore: Send + Sync {
    /// The chat's current active event, if any; absence is a normal outcome
    async fn active_event(&self, chat_id: Uuid) -> Result<Option<Event>>;

    /// Create a new active event, deactivating any previous one
    async fn create_event(&self, chat_id: Uuid, scheduled_for: NaiveDateTime) -> Result<Event>;

    /// Roster for an event, ordered by join time
    async fn list_members(&self, event_id: Uuid) -> Result<Vec<Member>>;

    /// Roster size for an event
    async fn member_count(&self, event_id: Uuid) -> Result<i64> {
        Ok(self.list_members(event_id).await?.len() as i64)
    }

    /// Add a user to the roster; `None` when the user is already joined
    async fn add_member(
        &self,
        event_id: Uuid,
        user_id: &str,
        display_name: &str,
    ) -> Result<Option<Member>>;

    /// Remove a user from the roster; `false` when the user was not joined
    async fn remove_member(&self, event_id: Uuid, user_id: &str) -> Result<bool>;
}
