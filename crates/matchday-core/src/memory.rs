// In-memory store implementations for examples and testing
//
// These implementations keep all data in memory, making them perfect for:
// - Standalone examples that don't need a database
// - Unit tests
// - Quick prototyping

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::chat::Chat;
use crate::error::Result;
use crate::event::{Event, Member};
use crate::traits::{ChatStore, EventStore};

// ============================================================================
// InMemoryChatStore - Stores chats in memory
// ============================================================================

/// In-memory chat store
///
/// Chats are keyed by external identifier. The write lock serializes
/// concurrent `ensure_chat` calls, so at most one row is ever inserted per
/// identifier.
#[derive(Debug, Default, Clone)]
pub struct InMemoryChatStore {
    chats: Arc<RwLock<HashMap<String, Chat>>>,
}

impl InMemoryChatStore {
    /// Create a new in-memory chat store
    pub fn new() -> Self {
        Self {
            chats: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all chats
    pub async fn clear(&self) {
        self.chats.write().await.clear();
    }
}

#[async_trait]
impl ChatStore for InMemoryChatStore {
    async fn ensure_chat(&self, external_id: &str) -> Result<Chat> {
        let mut chats = self.chats.write().await;
        if let Some(chat) = chats.get(external_id) {
            return Ok(chat.clone());
        }

        let chat = Chat {
            id: Uuid::now_v7(),
            external_id: external_id.to_string(),
            created_at: Utc::now(),
        };
        chats.insert(external_id.to_string(), chat.clone());
        Ok(chat)
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.chats.read().await.len() as i64)
    }
}

// ============================================================================
// InMemoryEventStore - Stores events and rosters in memory
// ============================================================================

/// In-memory event store
///
/// One entry per chat holds the active event; rosters are keyed by event.
/// Replacing an event drops the previous roster with it (last-write-wins).
#[derive(Debug, Default, Clone)]
pub struct InMemoryEventStore {
    active: Arc<RwLock<HashMap<Uuid, Event>>>,
    rosters: Arc<RwLock<HashMap<Uuid, Vec<Member>>>>,
}

impl InMemoryEventStore {
    /// Create a new in-memory event store
    pub fn new() -> Self {
        Self {
            active: Arc::new(RwLock::new(HashMap::new())),
            rosters: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all events and rosters
    pub async fn clear(&self) {
        self.active.write().await.clear();
        self.rosters.write().await.clear();
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn active_event(&self, chat_id: Uuid) -> Result<Option<Event>> {
        Ok(self.active.read().await.get(&chat_id).cloned())
    }

    async fn create_event(&self, chat_id: Uuid, scheduled_for: NaiveDateTime) -> Result<Event> {
        let event = Event {
            id: Uuid::now_v7(),
            chat_id,
            scheduled_for,
            is_active: true,
            created_at: Utc::now(),
        };

        let mut active = self.active.write().await;
        if let Some(previous) = active.insert(chat_id, event.clone()) {
            self.rosters.write().await.remove(&previous.id);
        }
        Ok(event)
    }

    async fn list_members(&self, event_id: Uuid) -> Result<Vec<Member>> {
        Ok(self
            .rosters
            .read()
            .await
            .get(&event_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn add_member(
        &self,
        event_id: Uuid,
        user_id: &str,
        display_name: &str,
    ) -> Result<Option<Member>> {
        let mut rosters = self.rosters.write().await;
        let roster = rosters.entry(event_id).or_default();
        if roster.iter().any(|m| m.user_id == user_id) {
            return Ok(None);
        }

        let member = Member {
            id: Uuid::now_v7(),
            event_id,
            user_id: user_id.to_string(),
            display_name: display_name.to_string(),
            joined_at: Utc::now(),
        };
        roster.push(member.clone());
        Ok(Some(member))
    }

    async fn remove_member(&self, event_id: Uuid, user_id: &str) -> Result<bool> {
        let mut rosters = self.rosters.write().await;
        let Some(roster) = rosters.get_mut(&event_id) else {
            return Ok(false);
        };

        let before = roster.len();
        roster.retain(|m| m.user_id != user_id);
        Ok(roster.len() < before)
    }
}

// ============================================================================
// Tests
// ============================================================================
