// Dispatch wired to the Postgres-backed stores
//
// Requires a reachable database. Run with:
//   DATABASE_URL=postgres://... cargo run -p matchday-dispatch --example postgres_bus

use std::sync::Arc;

use anyhow::Context;
use matchday_core::{ActionKind, ActionRequest, UserRef};
use matchday_dispatch::{Dispatcher, DispatcherConfig};
use matchday_storage::{create_db_chat_store, create_db_event_store, Database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matchday_dispatch=debug,matchday_storage=debug".into()),
        )
        .init();

    let db = Database::from_env()
        .await
        .context("Failed to connect to database")?;
    db.migrate().await?;
    tracing::info!("Connected to database");

    let chats = Arc::new(create_db_chat_store(db.clone()));
    let events = Arc::new(create_db_event_store(db));

    let config = DispatcherConfig::from_env()?;
    let bus = Dispatcher::with_event_handlers(chats, events).start(config.queue_capacity());

    let alice = UserRef::new("u1", "Alice");

    let envelope = bus
        .submit(
            ActionRequest::new(ActionKind::EventAdd, "demo", alice.clone())
                .with_schedule("2024-05-01T18:00"),
        )
        .await?;
    println!("add: {}", serde_json::to_string(&envelope)?);

    let envelope = bus
        .submit(ActionRequest::new(ActionKind::EventInfo, "demo", alice))
        .await?;
    println!("info: {}", serde_json::to_string(&envelope)?);

    Ok(())
}
