//! # disunity_system
//!
//! The per-frame transformation passes of the Disunity ECS runtime and the
//! interfaces they use to reach the outside world.
//!
//! - [`System`] and [`SystemContext`]: the contract for update-phase passes.
//! - [`systems`]: movement, health, animation, box collision, keyboard
//!   input, sprite rendering and collider debug drawing.
//! - [`backend`]: the rendering, texture, input and clock collaborators.
//! - [`EngineConfig`]: runtime settings shared by the frame loop.
//!
//! Every system finds its entities the same way: walk the alive snapshot and
//! keep the ids present in every store it needs. An entity missing one of
//! them is skipped for that system only.

pub mod backend;
pub mod config;
pub mod context;
pub mod systems;

pub use backend::{Clock, InputSource, Renderer, TextureCache, TextureHandle};
pub use config::{EngineConfig, KeyAction, KeyBinding, MovementMode};
pub use context::{System, SystemContext};
pub use systems::{
    AnimationSystem, BoxCollisionSystem, DebugBoxSystem, HealthSystem, KeyboardInputSystem,
    MovementSystem, RenderSystem,
};
