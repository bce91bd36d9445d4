// Join action
//
// Puts the requesting user on the active event's roster. Joining twice is
// reported as a status, not an error, and leaves the roster untouched.

use std::sync::Arc;

use async_trait::async_trait;
use matchday_core::traits::{ChatStore, EventStore};
use matchday_core::{ActionRequest, EventDetails, ResponseEnvelope, Result, StatusCode};

use super::ActionHandler;

pub struct EventJoinHandler {
    chats: Arc<dyn ChatStore>,
    events: Arc<dyn EventStore>,
}

impl EventJoinHandler {
    pub fn new(chats: Arc<dyn ChatStore>, events: Arc<dyn EventStore>) -> Self {
        Self { chats, events }
    }
}

#[async_trait]
impl ActionHandler for EventJoinHandler {
    async fn handle(&self, request: &ActionRequest) -> Result<ResponseEnvelope> {
        request.validate()?;

        let chat = self.chats.ensure_chat(&request.chat_id).await?;

        let Some(event) = self.events.active_event(chat.id).await? else {
            return Ok(ResponseEnvelope::status(StatusCode::NoEvent));
        };

        let added = self
            .events
            .add_member(event.id, &request.user.id, &request.user.display_name)
            .await?;
        if added.is_none() {
            return Ok(ResponseEnvelope::status(StatusCode::AlreadyJoined));
        }

        let members = self.events.list_members(event.id).await?;
        let total = self.events.member_count(event.id).await?;

        ResponseEnvelope::success(EventDetails::new(&event, total, &members))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchday_core::dates::parse_schedule;
    use matchday_core::memory::{InMemoryChatStore, InMemoryEventStore};
    use matchday_core::{ActionKind, UserRef};

    fn handler() -> (Arc<InMemoryChatStore>, Arc<InMemoryEventStore>, EventJoinHandler) {
        let chats = Arc::new(InMemoryChatStore::new());
        let events = Arc::new(InMemoryEventStore::new());
        let handler = EventJoinHandler::new(chats.clone(), events.clone());
        (chats, events, handler)
    }

    fn join_request(user_id: &str, display_name: &str) -> ActionRequest {
        ActionRequest::new(
            ActionKind::EventJoin,
            "c1",
            UserRef::new(user_id, display_name),
        )
    }

    #[tokio::test]
    async fn test_join_without_event_reports_no_event() {
        let (_, _, handler) = handler();
        let envelope = handler.handle(&join_request("u1", "Alice")).await.unwrap();
        assert_eq!(envelope.status_code(), StatusCode::NoEvent);
    }

    #[tokio::test]
    async fn test_join_twice_reports_already_joined() {
        let (chats, events, handler) = handler();
        let chat = chats.ensure_chat("c1").await.unwrap();
        let event = events
            .create_event(chat.id, parse_schedule("2024-05-01T18:00").unwrap())
            .await
            .unwrap();

        let first = handler.handle(&join_request("u1", "Alice")).await.unwrap();
        assert_eq!(first.status_code(), StatusCode::Success);
        assert_eq!(first.data.unwrap()["players"], serde_json::json!(["Alice"]));

        let second = handler.handle(&join_request("u1", "Alice")).await.unwrap();
        assert_eq!(second.status_code(), StatusCode::AlreadyJoined);
        assert!(second.data.is_none());
        assert_eq!(events.member_count(event.id).await.unwrap(), 1);
    }
}
