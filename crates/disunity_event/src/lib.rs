//! # disunity_event
//!
//! Frame-scoped publish/subscribe for the Disunity ECS runtime.
//!
//! This crate provides:
//!
//! - [`events`]: the event payloads ([`CollisionEvent`], [`KeyboardEvent`])
//!   and the [`EventKind`] they are routed by.
//! - [`bus`]: the [`EventBus`] and the [`EventContext`] handlers receive.
//!
//! Dispatch is synchronous and happens on the emitting system's call stack.
//! Handlers run in the order they subscribed.

pub mod bus;
pub mod events;

pub use bus::{EventBus, EventContext, Handler};
pub use events::{CollisionEvent, Event, EventKind, Key, KeyboardEvent};
