//! Event payloads.
//!
//! Events are transient values: they exist for the duration of one
//! [`EventBus::emit`](crate::EventBus::emit) call and are never stored.

use disunity_component::EntityId;
use serde::{Deserialize, Serialize};

// ── Routing ─────────────────────────────────────────────────────────────────

/// The key handlers subscribe under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// Two collider boxes overlap.
    Collision,
    /// A bound key is held down.
    Keyboard,
}

impl EventKind {
    /// Stable lowercase name, used as a log field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EventKind::Collision => "collision",
            EventKind::Keyboard => "keyboard",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Payloads ────────────────────────────────────────────────────────────────

/// Emitted once per overlapping collider pair per frame.
///
/// The pair is unordered; `a` is the entity that came first in the alive
/// snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub a: EntityId,
    pub b: EntityId,
}

impl CollisionEvent {
    /// Returns `true` if `id` is either participant.
    #[must_use]
    pub fn involves(&self, id: EntityId) -> bool {
        self.a == id || self.b == id
    }

    /// Both participants as an array.
    #[must_use]
    pub fn entities(&self) -> [EntityId; 2] {
        [self.a, self.b]
    }
}

/// Keys the runtime knows how to bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    Escape,
}

/// Emitted by the keyboard input system for each bound key held this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub key: Key,
}

/// Any event the bus can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Collision(CollisionEvent),
    Keyboard(KeyboardEvent),
}

impl Event {
    /// The kind this event is routed under.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Event::Collision(_) => EventKind::Collision,
            Event::Keyboard(_) => EventKind::Keyboard,
        }
    }
}

impl From<CollisionEvent> for Event {
    fn from(event: CollisionEvent) -> Self {
        Event::Collision(event)
    }
}

impl From<KeyboardEvent> for Event {
    fn from(event: KeyboardEvent) -> Self {
        Event::Keyboard(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_involves_both_participants_only() {
        let hit = CollisionEvent {
            a: EntityId(2),
            b: EntityId(7),
        };
        assert!(hit.involves(EntityId(2)));
        assert!(hit.involves(EntityId(7)));
        assert!(!hit.involves(EntityId(3)));
        assert_eq!(hit.entities(), [EntityId(2), EntityId(7)]);
    }

    #[test]
    fn test_event_kind_follows_payload() {
        let event = Event::from(KeyboardEvent { key: Key::Space });
        assert_eq!(event.kind(), EventKind::Keyboard);
    }
}
