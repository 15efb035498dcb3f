//! Update-phase scheduler.
//!
//! Systems run strictly one after another, in the order they were added.
//! The default pipeline is movement, health, animation, box collision; the
//! input and render phases are driven by the frame loop directly because
//! they need the collaborators.

use std::time::Instant;

use disunity_system::{
    AnimationSystem, BoxCollisionSystem, EngineConfig, HealthSystem, MovementSystem, System,
    SystemContext,
};
use tracing::trace;

/// An ordered list of update-phase systems.
pub struct Scheduler {
    systems: Vec<Box<dyn System>>,
}

impl Scheduler {
    /// Create a scheduler with no systems.
    #[must_use]
    pub fn new() -> Self {
        Self {
            systems: Vec::new(),
        }
    }

    /// The built-in update pipeline, configured from `config`.
    #[must_use]
    pub fn with_defaults(config: &EngineConfig) -> Self {
        let mut scheduler = Self::new();
        scheduler.add(MovementSystem::new(config.movement_mode));
        scheduler.add(HealthSystem);
        scheduler.add(AnimationSystem);
        scheduler.add(BoxCollisionSystem);
        scheduler
    }

    /// Append a system to the end of the pipeline.
    pub fn add(&mut self, system: impl System + 'static) {
        self.systems.push(Box::new(system));
    }

    /// System names in run order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|system| system.name()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Run every system once against `ctx`.
    pub fn run(&mut self, ctx: &mut SystemContext<'_>) {
        for system in &mut self.systems {
            let start = Instant::now();
            system.run(ctx);
            trace!(
                frame = ctx.frame,
                system = system.name(),
                elapsed_us = start.elapsed().as_micros() as u64,
                "system ran"
            );
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("systems", &self.names())
            .finish()
    }
}
