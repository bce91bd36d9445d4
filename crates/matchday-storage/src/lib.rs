// Postgres storage layer with sqlx
//
// This crate provides database implementations for core traits:
// - DbChatStore: implements ChatStore for chat row lifecycle
// - DbEventStore: implements EventStore for event/member row lifecycle

pub mod chat_store;
pub mod event_store;
pub mod models;
pub mod repositories;

pub use chat_store::{create_db_chat_store, DbChatStore};
pub use event_store::{create_db_event_store, DbEventStore};
pub use models::*;
pub use repositories::*;
