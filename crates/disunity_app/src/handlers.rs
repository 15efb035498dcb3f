//! Built-in event handlers.

use disunity_event::{Event, EventBus, EventKind};
use tracing::debug;

/// Damage dealt to each participant of a collision.
pub const COLLISION_DAMAGE: u32 = 1;

/// Subscribe the runtime's default handlers:
///
/// - `collision_damage`: takes [`COLLISION_DAMAGE`] off the `Health` of
///   both colliding entities (saturating at zero). The health system marks
///   them for deletion on a later pass.
/// - `keyboard_log`: logs each held key at debug level.
pub fn register_default_handlers(events: &mut EventBus) {
    events.subscribe(EventKind::Collision, "collision_damage", |event, ctx| {
        let Event::Collision(hit) = event else {
            return Ok(());
        };
        for id in hit.entities() {
            if let Some(health) = ctx.components.healths.get_mut(id) {
                health.damage(COLLISION_DAMAGE);
                debug!(entity = id.id(), current = health.current, "collision damage");
            }
        }
        Ok(())
    });

    events.subscribe(EventKind::Keyboard, "keyboard_log", |event, _ctx| {
        if let Event::Keyboard(keyboard) = event {
            debug!(key = ?keyboard.key, "keyboard event");
        }
        Ok(())
    });
}
