//! Animation: steps sprite sheets.

use tracing::trace;

use crate::context::{System, SystemContext};

/// Advances looping `Animation`s and slides their `Sprite` source rectangle
/// across the sheet.
///
/// Frames are one-indexed: after the last frame the animation returns to
/// frame 1, and the source x-offset is `current_frame * source.width`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationSystem;

impl System for AnimationSystem {
    fn name(&self) -> &'static str {
        "animation"
    }

    fn run(&mut self, ctx: &mut SystemContext<'_>) {
        let dt = ctx.dt as f32;
        let components = &mut *ctx.components;

        for id in ctx.entities.alive_ids() {
            let Some(animation) = components.animations.get_mut(id) else {
                continue;
            };
            let Some(sprite) = components.sprites.get_mut(id) else {
                continue;
            };
            if !animation.should_loop {
                continue;
            }

            animation.running_time += dt;
            if animation.running_time < animation.frame_rate_speed {
                continue;
            }

            animation.running_time = 0.0;
            animation.current_frame = animation
                .current_frame
                .checked_add(1)
                .filter(|frame| *frame <= animation.num_frames)
                .unwrap_or(1);
            sprite.source.x = animation.current_frame as f32 * sprite.source.width;

            trace!(entity = id.id(), frame = animation.current_frame, "animation advanced");
        }
    }
}

#[cfg(test)]
mod tests {
    use disunity_component::{Animation, Sprite};

    use super::*;
    use crate::systems::test_support::Fixture;

    fn spawn(world: &mut Fixture, animation: Animation) -> disunity_component::EntityId {
        let id = world.entities.create();
        world.components.insert(id, Sprite::new("knight", 16.0, 16.0, 1));
        world.components.insert(id, animation);
        id
    }

    #[test]
    fn test_last_frame_wraps_to_one() {
        let mut world = Fixture::default();
        let id = spawn(
            &mut world,
            Animation {
                num_frames: 6,
                current_frame: 6,
                frame_rate_speed: 1.0 / 12.0,
                running_time: 0.0,
                should_loop: true,
            },
        );

        AnimationSystem.run(&mut world.ctx(1.0 / 12.0));

        let animation = world.components.animations.get(id).unwrap();
        assert_eq!(animation.current_frame, 1);
        assert_eq!(animation.running_time, 0.0);
        assert_eq!(world.components.sprites.get(id).unwrap().source.x, 16.0);
    }

    #[test]
    fn test_out_of_range_frame_wraps_to_one() {
        let mut world = Fixture::default();
        let id = spawn(
            &mut world,
            Animation {
                num_frames: 6,
                current_frame: u32::MAX,
                frame_rate_speed: 0.0,
                running_time: 0.0,
                should_loop: true,
            },
        );

        AnimationSystem.run(&mut world.ctx(0.016));

        assert_eq!(world.components.animations.get(id).unwrap().current_frame, 1);
        assert_eq!(world.components.sprites.get(id).unwrap().source.x, 16.0);
    }

    #[test]
    fn test_accumulates_until_threshold() {
        let mut world = Fixture::default();
        let id = spawn(&mut world, Animation::looping(6, 10.0));

        AnimationSystem.run(&mut world.ctx(0.04));
        assert_eq!(world.components.animations.get(id).unwrap().current_frame, 1);
        assert_eq!(world.components.sprites.get(id).unwrap().source.x, 0.0);

        AnimationSystem.run(&mut world.ctx(0.07));
        let animation = world.components.animations.get(id).unwrap();
        assert_eq!(animation.current_frame, 2);
        assert_eq!(world.components.sprites.get(id).unwrap().source.x, 32.0);
    }

    #[test]
    fn test_non_looping_animation_is_frozen() {
        let mut world = Fixture::default();
        let id = spawn(
            &mut world,
            Animation {
                should_loop: false,
                ..Animation::looping(6, 12.0)
            },
        );

        AnimationSystem.run(&mut world.ctx(1.0));

        let animation = world.components.animations.get(id).unwrap();
        assert_eq!(animation.current_frame, 1);
        assert_eq!(animation.running_time, 0.0);
    }

    #[test]
    fn test_animation_without_sprite_is_skipped() {
        let mut world = Fixture::default();
        let id = world.entities.create();
        world.components.insert(id, Animation::looping(6, 12.0));

        AnimationSystem.run(&mut world.ctx(1.0));

        assert_eq!(world.components.animations.get(id).unwrap().running_time, 0.0);
    }
}
