// Repository layer for database operations

use anyhow::{Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::*;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    /// Create database connection from DATABASE_URL
    pub async fn from_env() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL environment variable required")?;
        Self::from_url(&database_url).await
    }

    /// Run embedded migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run migrations")?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // ============================================
    // Chats
    // ============================================

    /// Insert-if-absent by external identifier, then fetch.
    ///
    /// The unique constraint on external_id makes concurrent calls for the
    /// same identifier insert at most one row.
    pub async fn ensure_chat(&self, external_id: &str) -> Result<ChatRow> {
        sqlx::query(
            r#"
            INSERT INTO chats (id, external_id)
            VALUES ($1, $2)
            ON CONFLICT (external_id) DO NOTHING
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(external_id)
        .execute(&self.pool)
        .await?;

        let row = sqlx::query_as::<_, ChatRow>(
            r#"
            SELECT id, external_id, created_at
            FROM chats
            WHERE external_id = $1
            "#,
        )
        .bind(external_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn count_chats(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chats")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    // ============================================
    // Events
    // ============================================

    /// Create a new active event, deactivating any previous one in the same
    /// transaction (last-write-wins per chat).
    pub async fn create_event(&self, input: CreateEvent) -> Result<EventRow> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE events
            SET is_active = FALSE
            WHERE chat_id = $1 AND is_active = TRUE
            "#,
        )
        .bind(input.chat_id)
        .execute(&mut *tx)
        .await?;

        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (id, chat_id, scheduled_for, is_active)
            VALUES ($1, $2, $3, TRUE)
            RETURNING id, chat_id, scheduled_for, is_active, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(input.chat_id)
        .bind(input.scheduled_for)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row)
    }

    pub async fn get_active_event(&self, chat_id: Uuid) -> Result<Option<EventRow>> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, chat_id, scheduled_for, is_active, created_at
            FROM events
            WHERE chat_id = $1 AND is_active = TRUE
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(chat_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    // ============================================
    // Members
    // ============================================

    /// Conflict-tolerant roster insert; `None` when the user is already on
    /// the roster.
    pub async fn create_member(&self, input: CreateMember) -> Result<Option<MemberRow>> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            INSERT INTO members (id, event_id, user_id, display_name)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (event_id, user_id) DO NOTHING
            RETURNING id, event_id, user_id, display_name, joined_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(input.event_id)
        .bind(&input.user_id)
        .bind(&input.display_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn delete_member(&self, event_id: Uuid, user_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM members WHERE event_id = $1 AND user_id = $2")
            .bind(event_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list_members(&self, event_id: Uuid) -> Result<Vec<MemberRow>> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, event_id, user_id, display_name, joined_at
            FROM members
            WHERE event_id = $1
            ORDER BY joined_at ASC, id ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn count_members(&self, event_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
