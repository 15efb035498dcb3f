//! Health: removes entities that have run out of hit points.

use tracing::debug;

use crate::context::{System, SystemContext};

/// Marks every entity whose `Health` has reached zero for deletion.
///
/// Damage is applied elsewhere (typically a collision event handler); this
/// system only reacts to the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthSystem;

impl System for HealthSystem {
    fn name(&self) -> &'static str {
        "health"
    }

    fn run(&mut self, ctx: &mut SystemContext<'_>) {
        for id in ctx.entities.alive_ids() {
            let depleted = ctx
                .components
                .healths
                .get(id)
                .is_some_and(|health| health.current == 0);
            if depleted {
                debug!(entity = id.id(), "health depleted");
                ctx.entities.mark_for_deletion(id);
            }
        }
    }
}
