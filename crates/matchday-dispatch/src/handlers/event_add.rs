// Add Event action
//
// Creates the chat's active event from the request's schedule text. A chat
// that already has an active event gets it replaced (last-write-wins). No
// members are pre-populated.

use std::sync::Arc;

use async_trait::async_trait;
use matchday_core::dates::{format_schedule, parse_schedule};
use matchday_core::traits::{ChatStore, EventStore};
use matchday_core::{ActionRequest, ResponseEnvelope, Result, SchedulerError};
use serde_json::json;

use super::ActionHandler;

pub struct EventAddHandler {
    chats: Arc<dyn ChatStore>,
    events: Arc<dyn EventStore>,
}

impl EventAddHandler {
    pub fn new(chats: Arc<dyn ChatStore>, events: Arc<dyn EventStore>) -> Self {
        Self { chats, events }
    }
}

#[async_trait]
impl ActionHandler for EventAddHandler {
    async fn handle(&self, request: &ActionRequest) -> Result<ResponseEnvelope> {
        request.validate()?;
        let text = request
            .scheduled_for
            .as_deref()
            .ok_or_else(|| SchedulerError::validation("event_add requires a schedule date"))?;
        let scheduled_for = parse_schedule(text)?;

        let chat = self.chats.ensure_chat(&request.chat_id).await?;
        let event = self.events.create_event(chat.id, scheduled_for).await?;

        ResponseEnvelope::success(json!({
            "date": format_schedule(event.scheduled_for),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchday_core::memory::{InMemoryChatStore, InMemoryEventStore};
    use matchday_core::{ActionKind, StatusCode, UserRef};

    fn handler() -> (Arc<InMemoryChatStore>, Arc<InMemoryEventStore>, EventAddHandler) {
        let chats = Arc::new(InMemoryChatStore::new());
        let events = Arc::new(InMemoryEventStore::new());
        let handler = EventAddHandler::new(chats.clone(), events.clone());
        (chats, events, handler)
    }

    fn add_request(date: &str) -> ActionRequest {
        ActionRequest::new(ActionKind::EventAdd, "c1", UserRef::new("u1", "Alice"))
            .with_schedule(date)
    }

    #[tokio::test]
    async fn test_add_creates_chat_and_event() {
        let (chats, events, handler) = handler();

        let envelope = handler.handle(&add_request("2024-05-01T18:00")).await.unwrap();
        assert_eq!(envelope.status_code(), StatusCode::Success);
        assert_eq!(
            envelope.data.unwrap()["date"],
            "01-05-2024 18:00"
        );

        assert_eq!(chats.count().await.unwrap(), 1);
        let chat = chats.ensure_chat("c1").await.unwrap();
        assert!(events.active_event(chat.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_add_requires_schedule_text() {
        let (_, _, handler) = handler();
        let request = ActionRequest::new(ActionKind::EventAdd, "c1", UserRef::new("u1", "Alice"));

        let result = handler.handle(&request).await;
        assert!(matches!(result, Err(SchedulerError::Validation(_))));
    }

    #[tokio::test]
    async fn test_add_rejects_unparseable_date() {
        let (chats, _, handler) = handler();

        let result = handler.handle(&add_request("next tuesday")).await;
        assert!(matches!(result, Err(SchedulerError::Validation(_))));

        // Rejected before any store call
        assert_eq!(chats.count().await.unwrap(), 0);
    }
}
