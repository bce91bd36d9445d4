// Complete dispatch round-trip against in-memory stores
//
// Run with: cargo run -p matchday-dispatch --example local_bus

use std::sync::Arc;

use matchday_core::memory::{InMemoryChatStore, InMemoryEventStore};
use matchday_core::{ActionKind, ActionRequest, UserRef};
use matchday_dispatch::{Dispatcher, DispatcherConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matchday_dispatch=debug".into()),
        )
        .init();

    let chats = Arc::new(InMemoryChatStore::new());
    let events = Arc::new(InMemoryEventStore::new());

    let config = DispatcherConfig::from_env()?;
    let bus = Dispatcher::with_event_handlers(chats, events).start(config.queue_capacity());

    let alice = UserRef::new("u1", "Alice");
    let bob = UserRef::new("u2", "Bob");

    let envelope = bus
        .submit(ActionRequest::new(
            ActionKind::EventInfo,
            "c1",
            alice.clone(),
        ))
        .await?;
    println!("info (nothing scheduled): {}", serde_json::to_string(&envelope)?);

    let envelope = bus
        .submit(
            ActionRequest::new(ActionKind::EventAdd, "c1", alice.clone())
                .with_schedule("2024-05-01T18:00"),
        )
        .await?;
    println!("add: {}", serde_json::to_string(&envelope)?);

    let envelope = bus
        .submit(ActionRequest::new(
            ActionKind::EventJoin,
            "c1",
            alice.clone(),
        ))
        .await?;
    println!("join (alice): {}", serde_json::to_string(&envelope)?);

    let envelope = bus
        .submit(ActionRequest::new(ActionKind::EventJoin, "c1", bob))
        .await?;
    println!("join (bob): {}", serde_json::to_string(&envelope)?);

    let envelope = bus
        .submit(ActionRequest::new(ActionKind::EventInfo, "c1", alice))
        .await?;
    println!("info: {}", serde_json::to_string(&envelope)?);

    Ok(())
}
