// Leave action
//
// Takes the requesting user off the active event's roster. Leaving without
// having joined is reported as a status, not an error.

use std::sync::Arc;

use async_trait::async_trait;
use matchday_core::traits::{ChatStore, EventStore};
use matchday_core::{ActionRequest, EventDetails, ResponseEnvelope, Result, StatusCode};

use super::ActionHandler;

pub struct EventLeaveHandler {
    chats: Arc<dyn ChatStore>,
    events: Arc<dyn EventStore>,
}

impl EventLeaveHandler {
    pub fn new(chats: Arc<dyn ChatStore>, events: Arc<dyn EventStore>) -> Self {
        Self { chats, events }
    }
}

#[async_trait]
impl ActionHandler for EventLeaveHandler {
    async fn handle(&self, request: &ActionRequest) -> Result<ResponseEnvelope> {
        request.validate()?;

        let chat = self.chats.ensure_chat(&request.chat_id).await?;

        let Some(event) = self.events.active_event(chat.id).await? else {
            return Ok(ResponseEnvelope::status(StatusCode::NoEvent));
        };

        let removed = self
            .events
            .remove_member(event.id, &request.user.id)
            .await?;
        if !removed {
            return Ok(ResponseEnvelope::status(StatusCode::NotJoined));
        }

        let members = self.events.list_members(event.id).await?;
        let total = self.events.member_count(event.id).await?;

        ResponseEnvelope::success(EventDetails::new(&event, total, &members))
    }
}
