// Database-backed ChatStore implementation
//
// Implements the core ChatStore trait over the chats table. Chat rows are
// materialized lazily: the first reference to an external identifier inserts
// the row, later references return it unchanged.

use async_trait::async_trait;
use matchday_core::{traits::ChatStore, Chat, Result, SchedulerError};

use crate::repositories::Database;

// ============================================================================
// DbChatStore - Stores chats in the database
// ============================================================================

/// Database-backed chat store
#[derive(Clone)]
pub struct DbChatStore {
    db: Database,
}

impl DbChatStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ChatStore for DbChatStore {
    async fn ensure_chat(&self, external_id: &str) -> Result<Chat> {
        let row = self
            .db
            .ensure_chat(external_id)
            .await
            .map_err(|e| SchedulerError::store(e.to_string()))?;

        Ok(row.into())
    }

    async fn count(&self) -> Result<i64> {
        self.db
            .count_chats()
            .await
            .map_err(|e| SchedulerError::store(e.to_string()))
    }
}

// ============================================================================
// Factory functions
// ============================================================================

/// Create a database-backed chat store
pub fn create_db_chat_store(db: Database) -> DbChatStore {
    DbChatStore::new(db)
}
