// Action handlers
//
// One handler per action kind. Each handler is a pure orchestration step
// over one request: validate the identifiers, ensure the chat exists, query
// or mutate the active event, and build a status-tagged envelope. Store
// faults propagate unmodified; absence of an event is a status code, not an
// error.

mod event_add;
mod event_info;
mod event_join;
mod event_leave;

pub use event_add::EventAddHandler;
pub use event_info::EventInfoHandler;
pub use event_join::EventJoinHandler;
pub use event_leave::EventLeaveHandler;

use async_trait::async_trait;
use matchday_core::{ActionRequest, ResponseEnvelope, Result};

/// Trait implemented by every action handler
#[async_trait]
pub trait ActionHandler: Send + Sync {
    /// Resolve one request into exactly one response envelope
    async fn handle(&self, request: &ActionRequest) -> Result<ResponseEnvelope>;
}
