//! Per-frame execution context provided to systems.

use disunity_component::{EntityTable, Registry};
use disunity_event::{Event, EventBus, EventContext};

/// Everything an update-phase system may touch during one frame.
///
/// Systems run one at a time, so each gets exclusive access to the entity
/// table, the component stores and the event bus for the length of its pass.
#[derive(Debug)]
pub struct SystemContext<'a> {
    /// The current frame number, starting at 1.
    pub frame: u64,
    /// Seconds since the previous frame.
    pub dt: f64,
    pub entities: &'a mut EntityTable,
    pub components: &'a mut Registry,
    pub events: &'a mut EventBus,
}

impl<'a> SystemContext<'a> {
    /// Create a context for one frame.
    pub fn new(
        frame: u64,
        dt: f64,
        entities: &'a mut EntityTable,
        components: &'a mut Registry,
        events: &'a mut EventBus,
    ) -> Self {
        Self {
            frame,
            dt,
            entities,
            components,
            events,
        }
    }

    /// Dispatch `event` to its subscribers right away.
    ///
    /// Returns the number of handlers invoked.
    pub fn emit(&mut self, event: impl Into<Event>) -> usize {
        let event = event.into();
        let mut handler_ctx = EventContext::new(&mut *self.entities, &mut *self.components);
        self.events.emit(&event, &mut handler_ctx)
    }
}

/// An update-phase pass over the world.
///
/// Systems keep no per-entity state between frames; anything that must
/// persist (an animation's running time, say) lives in a component.
pub trait System {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Run one pass.
    fn run(&mut self, ctx: &mut SystemContext<'_>);
}
