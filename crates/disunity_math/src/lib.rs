//! # disunity_math
//!
//! Math types for the Disunity ECS runtime. Re-exports [`glam`] for vector
//! algebra and defines the screen-space types shared by components, systems
//! and the rendering collaborator.

pub mod color;
pub mod rect;

// Re-export glam types for convenience.
pub use glam::Vec2;

pub use color::Color;
pub use rect::Rect;
