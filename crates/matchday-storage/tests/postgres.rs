// Postgres integration tests
// Run with: DATABASE_URL=postgres://... cargo test --test postgres -- --ignored

use matchday_core::dates::parse_schedule;
use matchday_core::traits::{ChatStore, EventStore};
use matchday_storage::{create_db_chat_store, create_db_event_store, Database};
use uuid::Uuid;

async fn connect() -> Database {
    dotenvy::dotenv().ok();
    let db = Database::from_env()
        .await
        .expect("DATABASE_URL must point at a running Postgres");
    db.migrate().await.expect("Failed to run migrations");
    db
}

fn fresh_external_id() -> String {
    format!("it-{}", Uuid::now_v7())
}

#[tokio::test]
#[ignore] // Run with: cargo test --test postgres -- --ignored
async fn test_ensure_chat_is_idempotent() {
    let db = connect().await;
    let chats = create_db_chat_store(db);

    let external_id = fresh_external_id();
    let before = chats.count().await.unwrap();

    let first = chats.ensure_chat(&external_id).await.unwrap();
    let second = chats.ensure_chat(&external_id).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.external_id, external_id);
    assert_eq!(chats.count().await.unwrap(), before + 1);
}

#[tokio::test]
#[ignore]
async fn test_ensure_chat_concurrent_calls_insert_once() {
    let db = connect().await;
    let chats = create_db_chat_store(db);

    let external_id = fresh_external_id();
    let before = chats.count().await.unwrap();

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let chats = chats.clone();
            let external_id = external_id.clone();
            tokio::spawn(async move { chats.ensure_chat(&external_id).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(chats.count().await.unwrap(), before + 1);
}

#[tokio::test]
#[ignore]
async fn test_create_event_last_write_wins() {
    let db = connect().await;
    let chats = create_db_chat_store(db.clone());
    let events = create_db_event_store(db);

    let chat = chats.ensure_chat(&fresh_external_id()).await.unwrap();
    assert!(events.active_event(chat.id).await.unwrap().is_none());

    let first = events
        .create_event(chat.id, parse_schedule("2024-05-01T18:00").unwrap())
        .await
        .unwrap();
    let second = events
        .create_event(chat.id, parse_schedule("2024-06-01T20:30").unwrap())
        .await
        .unwrap();

    let active = events.active_event(chat.id).await.unwrap().unwrap();
    assert_eq!(active.id, second.id);
    assert_ne!(active.id, first.id);
    assert_eq!(
        active.scheduled_for,
        parse_schedule("2024-06-01T20:30").unwrap()
    );
}

#[tokio::test]
#[ignore]
async fn test_roster_lifecycle() {
    let db = connect().await;
    let chats = create_db_chat_store(db.clone());
    let events = create_db_event_store(db);

    let chat = chats.ensure_chat(&fresh_external_id()).await.unwrap();
    let event = events
        .create_event(chat.id, parse_schedule("2024-05-01T18:00").unwrap())
        .await
        .unwrap();

    assert_eq!(events.member_count(event.id).await.unwrap(), 0);
    assert!(events.list_members(event.id).await.unwrap().is_empty());

    let added = events.add_member(event.id, "u1", "Alice").await.unwrap();
    assert!(added.is_some());

    // Second join for the same user hits the roster unique key
    let duplicate = events.add_member(event.id, "u1", "Alice").await.unwrap();
    assert!(duplicate.is_none());

    events.add_member(event.id, "u2", "Bob").await.unwrap();
    assert_eq!(events.member_count(event.id).await.unwrap(), 2);

    let names: Vec<_> = events
        .list_members(event.id)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.display_name)
        .collect();
    assert_eq!(names, vec!["Alice", "Bob"]);

    assert!(events.remove_member(event.id, "u1").await.unwrap());
    assert!(!events.remove_member(event.id, "u1").await.unwrap());
    assert_eq!(events.member_count(event.id).await.unwrap(), 1);
}
