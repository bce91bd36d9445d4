// Action dispatch over an mpsc inbound queue
//
// Each inbound request is paired with a one-shot reply channel (the
// correlation mechanism). The dispatch loop routes the request to the
// handler registered for its action kind and resolves the reply exactly
// once, even on internal fault: an unregistered kind rejects immediately,
// and a panicking handler drops its reply sender, which rejects the
// awaiting side rather than leaving it pending.

use std::collections::HashMap;
use std::sync::Arc;

use matchday_core::traits::{ChatStore, EventStore};
use matchday_core::{ActionKind, ActionRequest, ResponseEnvelope, Result, SchedulerError};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::handlers::{
    ActionHandler, EventAddHandler, EventInfoHandler, EventJoinHandler, EventLeaveHandler,
};

/// One inbound request paired with its reply slot
struct InboundAction {
    request: ActionRequest,
    reply: oneshot::Sender<Result<ResponseEnvelope>>,
}

// ============================================================================
// Dispatcher - Handler registry and dispatch loop
// ============================================================================

/// Routes inbound requests to registered handlers
#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<ActionKind, Arc<dyn ActionHandler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Dispatcher with the standard event action handlers registered
    pub fn with_event_handlers(chats: Arc<dyn ChatStore>, events: Arc<dyn EventStore>) -> Self {
        Self::new()
            .register(
                ActionKind::EventAdd,
                Arc::new(EventAddHandler::new(chats.clone(), events.clone())),
            )
            .register(
                ActionKind::EventInfo,
                Arc::new(EventInfoHandler::new(chats.clone(), events.clone())),
            )
            .register(
                ActionKind::EventJoin,
                Arc::new(EventJoinHandler::new(chats.clone(), events.clone())),
            )
            .register(
                ActionKind::EventLeave,
                Arc::new(EventLeaveHandler::new(chats, events)),
            )
    }

    /// Register the handler for an action kind (latest registration wins)
    pub fn register(mut self, kind: ActionKind, handler: Arc<dyn ActionHandler>) -> Self {
        self.handlers.insert(kind, handler);
        self
    }

    /// Start the dispatch loop, returning the handle used to submit requests
    pub fn start(self, queue_capacity: usize) -> BusHandle {
        let (tx, rx) = mpsc::channel(queue_capacity);
        tokio::spawn(dispatch_loop(rx, Arc::new(self.handlers)));
        BusHandle { tx }
    }
}

async fn dispatch_loop(
    mut rx: mpsc::Receiver<InboundAction>,
    handlers: Arc<HashMap<ActionKind, Arc<dyn ActionHandler>>>,
) {
    while let Some(inbound) = rx.recv().await {
        let kind = inbound.request.kind;
        let Some(handler) = handlers.get(&kind).cloned() else {
            warn!(action = %kind, "No handler registered");
            let _ = inbound
                .reply
                .send(Err(SchedulerError::UnhandledAction(kind)));
            continue;
        };

        // Requests run concurrently; within one chat, ordering is whatever
        // the backing store serializes
        tokio::spawn(async move {
            debug!(action = %kind, chat_id = %inbound.request.chat_id, "Dispatching action");
            let result = handler.handle(&inbound.request).await;
            if let Err(error) = &result {
                warn!(action = %kind, %error, "Action handler failed");
            }
            if inbound.reply.send(result).is_err() {
                warn!(action = %kind, "Reply channel abandoned by caller");
            }
        });
    }
}

// ============================================================================
// BusHandle - Submitting requests
// ============================================================================

/// Cloneable handle for submitting requests to the bus
#[derive(Clone)]
pub struct BusHandle {
    tx: mpsc::Sender<InboundAction>,
}

impl BusHandle {
    /// Submit one request and await its reply.
    ///
    /// Exactly one resolution per request: the handler's envelope, the
    /// handler's error, or `ChannelClosed` when the reply slot was dropped
    /// (dispatcher gone or handler panicked).
    pub async fn submit(&self, request: ActionRequest) -> Result<ResponseEnvelope> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(InboundAction {
                request,
                reply: reply_tx,
            })
            .await
            .map_err(|_| SchedulerError::ChannelClosed)?;

        reply_rx.await.map_err(|_| SchedulerError::ChannelClosed)?
    }
}
