//! Built-in component kinds.
//!
//! All of them are plain, serde-deserialisable values so a level description
//! can spell them out directly. Fields left out of a description take the
//! values from each type's `Default`.

use disunity_math::{Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::component::Component;

/// Position, orientation and scale in screen space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Transform {
    /// Top-left of the entity in pixels.
    pub position: Vec2,
    /// Movement impulse accumulated by input this frame. Consumed and reset
    /// by the movement system in impulse mode.
    pub direction: Vec2,
    /// Uniform scale applied to the sprite's source size when drawing.
    pub scale: f32,
    /// Rotation in degrees.
    pub rotation: f32,
}

impl Transform {
    /// Origin, no impulse, unit scale, no rotation.
    pub const IDENTITY: Self = Self {
        position: Vec2::ZERO,
        direction: Vec2::ZERO,
        scale: 1.0,
        rotation: 0.0,
    };

    /// Create a transform at `position` with unit scale.
    #[must_use]
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Apply a uniform scale factor.
    #[must_use]
    pub fn scaled(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Component for Transform {
    fn type_name() -> &'static str {
        "Transform"
    }
}

/// Linear velocity.
///
/// In impulse movement mode only `velocity.x` is read, as the entity's speed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RigidBody {
    /// Pixels per second.
    pub velocity: Vec2,
}

impl RigidBody {
    /// Create a rigid body with the given velocity.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            velocity: Vec2::new(x, y),
        }
    }
}

impl Component for RigidBody {
    fn type_name() -> &'static str {
        "RigidBody"
    }
}

/// Hit points. An entity at zero is removed by the health system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Health {
    /// Current hit points.
    pub current: u32,
    /// Maximum hit points.
    pub max: u32,
}

impl Health {
    /// Create a health component at full HP.
    #[must_use]
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Returns `true` if the entity has any HP left.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Apply damage, clamping to zero.
    pub fn damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }
}

impl Component for Health {
    fn type_name() -> &'static str {
        "Health"
    }
}

/// A region of a texture to draw for the entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Sprite {
    /// Key resolved against the texture cache.
    pub asset_id: String,
    /// Source rectangle on the texture. `source.x` is advanced by animation.
    pub source: Rect,
    /// Draw layer; lower values are drawn first.
    pub z_index: u32,
}

impl Sprite {
    /// Create a sprite showing the `width` × `height` region at the texture's
    /// top-left corner.
    #[must_use]
    pub fn new(asset_id: impl Into<String>, width: f32, height: f32, z_index: u32) -> Self {
        Self {
            asset_id: asset_id.into(),
            source: Rect::new(0.0, 0.0, width, height),
            z_index,
        }
    }
}

impl Component for Sprite {
    fn type_name() -> &'static str {
        "Sprite"
    }
}

/// Sprite-sheet animation state. Frames are counted from 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Animation {
    /// Number of frames laid out horizontally on the sheet.
    pub num_frames: u32,
    /// Frame currently shown, in `1..=num_frames`.
    pub current_frame: u32,
    /// Seconds each frame stays on screen.
    pub frame_rate_speed: f32,
    /// Seconds accumulated towards the next frame.
    pub running_time: f32,
    /// Animation only advances while this is set.
    pub should_loop: bool,
}

impl Animation {
    /// A looping animation at `frames_per_second`.
    #[must_use]
    pub fn looping(num_frames: u32, frames_per_second: f32) -> Self {
        Self {
            num_frames,
            frame_rate_speed: 1.0 / frames_per_second,
            ..Self::default()
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            num_frames: 1,
            current_frame: 1,
            frame_rate_speed: 1.0 / 12.0,
            running_time: 0.0,
            should_loop: true,
        }
    }
}

impl Component for Animation {
    fn type_name() -> &'static str {
        "Animation"
    }
}

/// An axis-aligned collision box relative to the entity's position.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoxCollider {
    pub width: u32,
    pub height: u32,
    /// Offset of the box's top-left from the transform position.
    pub offset: Vec2,
}

impl BoxCollider {
    /// Create a collider with no offset.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            offset: Vec2::ZERO,
        }
    }

    /// The collider's world-space box for an entity at `position`.
    #[must_use]
    pub fn world_rect(&self, position: Vec2) -> Rect {
        Rect::from_position_size(
            position + self.offset,
            Vec2::new(self.width as f32, self.height as f32),
        )
    }
}

impl Component for BoxCollider {
    fn type_name() -> &'static str {
        "BoxCollider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_damage_saturates() {
        let mut h = Health::full(2);
        h.damage(1);
        assert!(h.is_alive());
        h.damage(5);
        assert_eq!(h.current, 0);
        assert!(!h.is_alive());
    }

    #[test]
    fn test_collider_world_rect_applies_offset() {
        let mut c = BoxCollider::new(32, 16);
        c.offset = Vec2::new(2.0, 4.0);
        let r = c.world_rect(Vec2::new(10.0, 10.0));
        assert_eq!(r, Rect::new(12.0, 14.0, 32.0, 16.0));
    }

    #[test]
    fn test_animation_looping_defaults() {
        let a = Animation::looping(6, 12.0);
        assert_eq!(a.current_frame, 1);
        assert!(a.should_loop);
        assert!((a.frame_rate_speed - 1.0 / 12.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_transform_partial_json_uses_defaults() {
        let t: Transform = serde_json::from_str(r#"{"position":[5.0,6.0]}"#).unwrap();
        assert_eq!(t.position, Vec2::new(5.0, 6.0));
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.direction, Vec2::ZERO);
    }

    #[test]
    fn test_sprite_from_json() {
        let s: Sprite = serde_json::from_str(
            r#"{"asset_id":"tank","source":{"x":0.0,"y":0.0,"width":32.0,"height":32.0},"z_index":1}"#,
        )
        .unwrap();
        assert_eq!(s, Sprite::new("tank", 32.0, 32.0, 1));
    }
}
