// Event Info action
//
// Reports the chat's active event and roster. A chat row is materialized
// even for this pure read: the first request for an identifier inserts it,
// repeated queries leave the count unchanged.

use std::sync::Arc;

use async_trait::async_trait;
use matchday_core::traits::{ChatStore, EventStore};
use matchday_core::{ActionRequest, EventDetails, ResponseEnvelope, Result, StatusCode};

use super::ActionHandler;

pub struct EventInfoHandler {
    chats: Arc<dyn ChatStore>,
    events: Arc<dyn EventStore>,
}

impl EventInfoHandler {
    pub fn new(chats: Arc<dyn ChatStore>, events: Arc<dyn EventStore>) -> Self {
        Self { chats, events }
    }
}

#[async_trait]
impl ActionHandler for EventInfoHandler {
    async fn handle(&self, request: &ActionRequest) -> Result<ResponseEnvelope> {
        request.validate()?;

        let chat = self.chats.ensure_chat(&request.chat_id).await?;

        let Some(event) = self.events.active_event(chat.id).await? else {
            return Ok(ResponseEnvelope::status(StatusCode::NoEvent));
        };

        let members = self.events.list_members(event.id).await?;
        let total = self.events.member_count(event.id).await?;

        ResponseEnvelope::success(EventDetails::new(&event, total, &members))
    }
}
