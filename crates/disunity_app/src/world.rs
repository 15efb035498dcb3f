//! World state owned by the frame loop.
//!
//! The [`World`] bundles the entity table, the component stores and the
//! event bus. Fields are public so callers can split borrows the same way
//! systems do.

use disunity_component::{EntityError, EntityId, EntityTable, Registered, Registry};
use disunity_event::EventBus;
use disunity_system::SystemContext;

/// Everything that lives for the length of a run.
#[derive(Debug, Default)]
pub struct World {
    pub entities: EntityTable,
    pub components: Registry,
    pub events: EventBus,
}

impl World {
    /// Create an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entity with no components.
    pub fn spawn(&mut self) -> EntityId {
        self.entities.create()
    }

    /// Attach `value` to `id`, replacing any previous value of that kind.
    ///
    /// Fails if `id` is not alive.
    pub fn insert<T: Registered>(
        &mut self,
        id: EntityId,
        value: T,
    ) -> Result<Option<T>, EntityError> {
        self.entities.ensure_alive(id)?;
        Ok(self.components.insert(id, value))
    }

    /// Mark `id` for deletion at the next purge point.
    ///
    /// Returns `false` if `id` is not tracked.
    pub fn despawn(&mut self, id: EntityId) -> bool {
        self.entities.mark_for_deletion(id)
    }

    /// Remove every pending entity and its components. This is the purge
    /// point; the frame loop calls it once per frame.
    pub fn purge(&mut self) -> Vec<EntityId> {
        self.entities.purge(&mut self.components)
    }

    /// Borrow the world as a context for one update pass.
    pub fn system_context(&mut self, frame: u64, dt: f64) -> SystemContext<'_> {
        SystemContext::new(
            frame,
            dt,
            &mut self.entities,
            &mut self.components,
            &mut self.events,
        )
    }
}
