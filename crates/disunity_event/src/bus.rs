//! The event bus.
//!
//! Handlers are boxed closures stored per [`EventKind`] in subscription
//! order. [`EventBus::emit`] calls each of them synchronously with the event
//! and an [`EventContext`] giving mutable access to the entity table and the
//! component stores.
//!
//! ## Failure policy
//!
//! A handler reports failure by returning `Err`. The bus logs the error and
//! moves on to the next handler; the emitting system never sees it.
//!
//! ## Re-entrancy
//!
//! The context does not include the bus, so a handler cannot
//! emit further events while it is being dispatched.

use std::collections::HashMap;

use disunity_component::{EntityTable, Registry};
use tracing::{trace, warn};

use crate::events::{Event, EventKind};

/// World state a handler may read and mutate.
#[derive(Debug)]
pub struct EventContext<'a> {
    pub entities: &'a mut EntityTable,
    pub components: &'a mut Registry,
}

impl<'a> EventContext<'a> {
    /// Bundle the entity table and component stores for dispatch.
    pub fn new(entities: &'a mut EntityTable, components: &'a mut Registry) -> Self {
        Self {
            entities,
            components,
        }
    }
}

/// A subscribed event handler.
pub type Handler = Box<dyn FnMut(&Event, &mut EventContext<'_>) -> anyhow::Result<()>>;

struct Subscriber {
    /// Used only in log output.
    name: String,
    handler: Handler,
}

/// Publish/subscribe channel keyed by [`EventKind`].
#[derive(Default)]
pub struct EventBus {
    subscribers: HashMap<EventKind, Vec<Subscriber>>,
}

impl EventBus {
    /// Create a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler` to the list for `kind`. It will run after every
    /// handler already subscribed to that kind.
    pub fn subscribe<F>(&mut self, kind: EventKind, name: impl Into<String>, handler: F)
    where
        F: FnMut(&Event, &mut EventContext<'_>) -> anyhow::Result<()> + 'static,
    {
        let name = name.into();
        trace!(kind = kind.as_str(), handler = name.as_str(), "subscribed");
        self.subscribers.entry(kind).or_default().push(Subscriber {
            name,
            handler: Box::new(handler),
        });
    }

    /// Drop every subscription of every kind.
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    /// Dispatch `event` to every handler subscribed to its kind, in
    /// subscription order.
    ///
    /// Returns the number of handlers invoked, including ones that failed.
    /// Emitting a kind nobody listens to is a no-op.
    pub fn emit(&mut self, event: &Event, ctx: &mut EventContext<'_>) -> usize {
        let kind = event.kind();
        let Some(subscribers) = self.subscribers.get_mut(&kind) else {
            trace!(kind = kind.as_str(), "no subscribers for event");
            return 0;
        };

        for subscriber in subscribers.iter_mut() {
            if let Err(error) = (subscriber.handler)(event, ctx) {
                warn!(
                    kind = kind.as_str(),
                    handler = subscriber.name.as_str(),
                    error = %error,
                    "event handler failed"
                );
            }
        }
        subscribers.len()
    }

    /// Number of handlers subscribed to `kind`.
    #[must_use]
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscribers.get(&kind).map_or(0, Vec::len)
    }

    /// Names of the handlers subscribed to `kind`, in call order.
    #[must_use]
    pub fn subscriber_names(&self, kind: EventKind) -> Vec<&str> {
        self.subscribers
            .get(&kind)
            .map(|list| list.iter().map(|s| s.name.as_str()).collect())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (kind, list) in &self.subscribers {
            let names: Vec<&str> = list.iter().map(|s| s.name.as_str()).collect();
            map.entry(kind, &names);
        }
        map.finish()
    }
}
