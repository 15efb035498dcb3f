//! Movement: integrates transforms from rigid bodies.

use disunity_math::Vec2;
use tracing::trace;

use crate::config::MovementMode;
use crate::context::{System, SystemContext};

/// Moves every entity with a `Transform` and a `RigidBody`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementSystem {
    mode: MovementMode,
}

impl MovementSystem {
    /// Create a movement system using `mode`.
    #[must_use]
    pub fn new(mode: MovementMode) -> Self {
        Self { mode }
    }

    /// The integration mode in use.
    #[must_use]
    pub fn mode(&self) -> MovementMode {
        self.mode
    }
}

impl System for MovementSystem {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn run(&mut self, ctx: &mut SystemContext<'_>) {
        let dt = ctx.dt as f32;
        let components = &mut *ctx.components;

        for id in ctx.entities.alive_ids() {
            let Some(&body) = components.rigid_bodies.get(id) else {
                continue;
            };
            let Some(transform) = components.transforms.get_mut(id) else {
                continue;
            };

            match self.mode {
                MovementMode::Velocity => {
                    transform.position += body.velocity * dt;
                }
                MovementMode::Impulse => {
                    // The impulse lasts one frame whether or not it moved us.
                    let direction = std::mem::replace(&mut transform.direction, Vec2::ZERO);
                    if direction != Vec2::ZERO {
                        transform.position -= direction.normalize() * body.velocity.x;
                    }
                }
            }

            trace!(
                entity = id.id(),
                x = transform.position.x,
                y = transform.position.y,
                "moved"
            );
        }
    }
}
