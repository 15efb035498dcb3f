//! Keyboard input: turns held keys into events and world changes.

use disunity_component::EntityId;
use disunity_event::KeyboardEvent;
use tracing::{debug, trace};

use crate::backend::InputSource;
use crate::config::{EngineConfig, KeyAction, KeyBinding};
use crate::context::SystemContext;

/// Polls the configured key bindings once per frame.
///
/// For every held key a `KeyboardEvent` is emitted and the key's action is
/// applied: impulse bindings nudge the controlled entity's
/// `Transform::direction` (consumed by the movement system in impulse mode),
/// the delete binding marks the delete target for deletion.
#[derive(Debug, Clone)]
pub struct KeyboardInputSystem {
    bindings: Vec<KeyBinding>,
    controlled: EntityId,
    delete_target: EntityId,
}

impl KeyboardInputSystem {
    #[must_use]
    pub fn new(bindings: Vec<KeyBinding>, controlled: EntityId, delete_target: EntityId) -> Self {
        Self {
            bindings,
            controlled,
            delete_target,
        }
    }

    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config.key_bindings.clone(),
            config.controlled_entity,
            config.delete_target,
        )
    }

    #[must_use]
    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    /// Apply every held binding. Returns the number of keys that were held.
    pub fn run(&self, input: &dyn InputSource, ctx: &mut SystemContext<'_>) -> usize {
        let mut held = 0;
        for binding in &self.bindings {
            if !input.is_key_down(binding.key) {
                continue;
            }
            held += 1;
            trace!(key = ?binding.key, "key held");

            match binding.action {
                KeyAction::Impulse(impulse) => {
                    if ctx.entities.is_alive(self.controlled)
                        && let Some(transform) = ctx.components.transforms.get_mut(self.controlled)
                    {
                        transform.direction += impulse;
                    }
                }
                KeyAction::DeleteTarget => {
                    if ctx.entities.mark_for_deletion(self.delete_target) {
                        debug!(entity = self.delete_target.id(), "delete target marked");
                    }
                }
            }

            ctx.emit(KeyboardEvent { key: binding.key });
        }
        held
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use disunity_component::Transform;
    use disunity_event::{Event, EventKind, Key};
    use disunity_math::Vec2;

    use super::*;
    use crate::systems::test_support::{Fixture, HeldKeys};

    fn system(controlled: EntityId, target: EntityId) -> KeyboardInputSystem {
        KeyboardInputSystem::new(KeyBinding::defaults(), controlled, target)
    }

    #[test]
    fn test_impulse_keys_accumulate_direction() {
        let mut world = Fixture::default();
        let player = world.entities.create();
        world.components.insert(player, Transform::IDENTITY);

        let input = HeldKeys(vec![Key::W, Key::A]);
        let held = system(player, EntityId::INVALID).run(&input, &mut world.ctx(0.016));

        assert_eq!(held, 2);
        assert_eq!(
            world.components.transforms.get(player).unwrap().direction,
            Vec2::new(1.0, 1.0)
        );
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut world = Fixture::default();
        let player = world.entities.create();
        world.components.insert(player, Transform::IDENTITY);

        let input = HeldKeys(vec![Key::A, Key::D]);
        system(player, EntityId::INVALID).run(&input, &mut world.ctx(0.016));

        assert_eq!(
            world.components.transforms.get(player).unwrap().direction,
            Vec2::ZERO
        );
    }

    #[test]
    fn test_space_marks_delete_target() {
        let mut world = Fixture::default();
        let player = world.entities.create();
        let truck = world.entities.create();

        let input = HeldKeys(vec![Key::Space]);
        system(player, truck).run(&input, &mut world.ctx(0.016));

        assert!(world.entities.is_pending(truck));
        assert!(world.entities.is_alive(player));
    }

    #[test]
    fn test_held_keys_emit_keyboard_events() {
        let mut world = Fixture::default();
        let pressed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&pressed);
        world
            .events
            .subscribe(EventKind::Keyboard, "record", move |event, _| {
                if let Event::Keyboard(keyboard) = event {
                    sink.borrow_mut().push(keyboard.key);
                }
                Ok(())
            });

        let input = HeldKeys(vec![Key::S, Key::Escape]);
        system(EntityId::INVALID, EntityId::INVALID).run(&input, &mut world.ctx(0.016));

        // Escape has no binding.
        assert_eq!(*pressed.borrow(), vec![Key::S]);
    }

    #[test]
    fn test_missing_controlled_entity_is_ignored() {
        let mut world = Fixture::default();
        let other = world.entities.create();
        world.components.insert(other, Transform::IDENTITY);
        world.entities.mark_for_deletion(other);

        let input = HeldKeys(vec![Key::W]);
        let held = system(other, EntityId::INVALID).run(&input, &mut world.ctx(0.016));

        assert_eq!(held, 1);
        assert_eq!(
            world.components.transforms.get(other).unwrap().direction,
            Vec2::ZERO
        );
    }

    #[test]
    fn test_from_config_uses_configured_entities() {
        let config = EngineConfig::default();
        let input = KeyboardInputSystem::from_config(&config);
        assert_eq!(input.bindings().len(), 5);
        assert_eq!(input.controlled, EntityId(4));
        assert_eq!(input.delete_target, EntityId(2));
    }
}
