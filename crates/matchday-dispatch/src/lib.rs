// Action Dispatch
//
// This crate wires the per-action handlers to an asynchronous bus: requests
// arrive tagged with an action kind, are routed to the matching handler, and
// resolve exactly one reply through a one-shot correlation channel.
//
// Key design decisions:
// - Handlers receive their stores by explicit injection (no ambient global
//   wiring); the dispatcher is constructed with its handler registry at
//   startup
// - Per-request handling is spawned, so requests run concurrently; within a
//   chat the backing store serializes writes (last-write-wins on Add)
// - A fault still resolves the caller's reply slot, never leaves it pending

pub mod config;
pub mod dispatcher;
pub mod handlers;

// Re-exports for convenience
pub use config::DispatcherConfig;
pub use dispatcher::{BusHandle, Dispatcher};
pub use handlers::{
    ActionHandler, EventAddHandler, EventInfoHandler, EventJoinHandler, EventLeaveHandler,
};
