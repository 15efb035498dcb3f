//! The built-in systems.
//!
//! Update phase, in the order the scheduler runs them:
//!
//! | System                  | Requires                  | Writes                   |
//! |-------------------------|---------------------------|--------------------------|
//! | [`MovementSystem`]      | Transform, RigidBody      | Transform                |
//! | [`HealthSystem`]        | Health                    | entity table             |
//! | [`AnimationSystem`]     | Sprite, Animation         | Sprite, Animation        |
//! | [`BoxCollisionSystem`]  | Transform, BoxCollider    | events                   |
//!
//! Input phase: [`KeyboardInputSystem`]. Render phase: [`RenderSystem`]
//! followed by [`DebugBoxSystem`].

mod animation;
mod collision;
mod debug_draw;
mod health;
mod input;
mod movement;
mod render;

#[cfg(test)]
mod test_support;

pub use animation::AnimationSystem;
pub use collision::{BoxCollisionSystem, overlapping_pairs};
pub use debug_draw::DebugBoxSystem;
pub use health::HealthSystem;
pub use input::KeyboardInputSystem;
pub use movement::MovementSystem;
pub use render::RenderSystem;
