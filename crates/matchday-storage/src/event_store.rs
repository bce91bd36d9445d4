// Database-backed EventStore implementation
//
// Implements the core EventStore trait over the events and members tables.
// Creating an event deactivates the previous active one inside a single
// transaction, so Info queries always see the most recent Add and no two
// rows are active at once even under races.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use matchday_core::{traits::EventStore, Event, Member, Result, SchedulerError};
use uuid::Uuid;

use crate::models::{CreateEvent, CreateMember};
use crate::repositories::Database;

// ============================================================================
// DbEventStore - Stores events and rosters in the database
// ============================================================================

/// Database-backed event store
#[derive(Clone)]
pub struct DbEventStore {
    db: Database,
}

impl DbEventStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventStore for DbEventStore {
    async fn active_event(&self, chat_id: Uuid) -> Result<Option<Event>> {
        let row = self
            .db
            .get_active_event(chat_id)
            .await
            .map_err(|e| SchedulerError::store(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn create_event(&self, chat_id: Uuid, scheduled_for: NaiveDateTime) -> Result<Event> {
        let row = self
            .db
            .create_event(CreateEvent {
                chat_id,
                scheduled_for,
            })
            .await
            .map_err(|e| SchedulerError::store(e.to_string()))?;

        tracing::info!(chat_id = %chat_id, event_id = %row.id, "Created active event");

        Ok(row.into())
    }

    async fn list_members(&self, event_id: Uuid) -> Result<Vec<Member>> {
        let rows = self
            .db
            .list_members(event_id)
            .await
            .map_err(|e| SchedulerError::store(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn member_count(&self, event_id: Uuid) -> Result<i64> {
        self.db
            .count_members(event_id)
            .await
            .map_err(|e| SchedulerError::store(e.to_string()))
    }

    async fn add_member(
        &self,
        event_id: Uuid,
        user_id: &str,
        display_name: &str,
    ) -> Result<Option<Member>> {
        let row = self
            .db
            .create_member(CreateMember {
                event_id,
                user_id: user_id.to_string(),
                display_name: display_name.to_string(),
            })
            .await
            .map_err(|e| SchedulerError::store(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn remove_member(&self, event_id: Uuid, user_id: &str) -> Result<bool> {
        self.db
            .delete_member(event_id, user_id)
            .await
            .map_err(|e| SchedulerError::store(e.to_string()))
    }
}

// ============================================================================
// Factory functions
// ============================================================================

/// Create a database-backed event store
pub fn create_db_event_store(db: Database) -> DbEventStore {
    DbEventStore::new(db)
}
