// Chat domain type
//
// One persisted record per external chat identifier. Created lazily the
// first time a chat is referenced, never deleted by this subsystem.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A conversation scope known to the scheduler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: Uuid,
    /// Opaque identifier assigned by the chat platform (unique)
    pub external_id: String,
    pub created_at: DateTime<Utc>,
}
