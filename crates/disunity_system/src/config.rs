//! Engine configuration.

use std::time::Duration;

use disunity_component::EntityId;
use disunity_event::Key;
use disunity_math::Vec2;
use serde::{Deserialize, Serialize};

/// How the movement system turns a rigid body into a position change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementMode {
    /// `position += velocity * dt` every frame.
    Velocity,
    /// Move against the normalised input impulse by `velocity.x` pixels,
    /// then clear the impulse. Entities with no impulse stay put.
    #[default]
    Impulse,
}

/// What a held key does to the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Add this vector to the controlled entity's movement impulse.
    Impulse(Vec2),
    /// Mark the configured delete target for deletion.
    DeleteTarget,
}

/// A key and the action it triggers while held.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: Key,
    pub action: KeyAction,
}

impl KeyBinding {
    /// Create a binding.
    #[must_use]
    pub const fn new(key: Key, action: KeyAction) -> Self {
        Self { key, action }
    }

    /// The WASD + space layout.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(Key::W, KeyAction::Impulse(Vec2::new(0.0, 1.0))),
            Self::new(Key::A, KeyAction::Impulse(Vec2::new(1.0, 0.0))),
            Self::new(Key::S, KeyAction::Impulse(Vec2::new(0.0, -1.0))),
            Self::new(Key::D, KeyAction::Impulse(Vec2::new(-1.0, 0.0))),
            Self::new(Key::Space, KeyAction::DeleteTarget),
        ]
    }
}

/// Runtime settings for the frame loop and its systems.
///
/// Every field has a default, so a level file may supply any subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Target frames per second. Zero disables frame pacing.
    pub fps: u32,
    /// Window width handed to the rendering collaborator.
    pub window_width: u32,
    /// Window height handed to the rendering collaborator.
    pub window_height: u32,
    pub movement_mode: MovementMode,
    /// Draw collider outlines after sprites.
    pub debug_colliders: bool,
    /// Clear and re-register event handlers at the start of every update.
    pub resubscribe_each_frame: bool,
    /// Stop after this many frames (0 = until the input source asks to close).
    pub max_frames: u64,
    /// Entity steered by impulse key bindings.
    pub controlled_entity: EntityId,
    /// Entity removed by the delete-target key binding.
    pub delete_target: EntityId,
    pub key_bindings: Vec<KeyBinding>,
}

impl EngineConfig {
    /// Wall-clock budget for one frame, or `None` when pacing is disabled.
    #[must_use]
    pub fn frame_budget(&self) -> Option<Duration> {
        (self.fps > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(self.fps)))
    }

    /// Override the frame cap.
    #[must_use]
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Override the movement mode.
    #[must_use]
    pub fn with_movement_mode(mut self, mode: MovementMode) -> Self {
        self.movement_mode = mode;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            window_width: 800,
            window_height: 800,
            movement_mode: MovementMode::Impulse,
            debug_colliders: true,
            resubscribe_each_frame: false,
            max_frames: 0,
            controlled_entity: EntityId(4),
            delete_target: EntityId(2),
            key_bindings: KeyBinding::defaults(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.fps, 60);
        assert_eq!(config.movement_mode, MovementMode::Impulse);
        assert_eq!(config.key_bindings.len(), 5);
        assert!(!config.resubscribe_each_frame);
    }

    #[test]
    fn test_frame_budget() {
        let config = EngineConfig {
            fps: 50,
            ..EngineConfig::default()
        };
        assert_eq!(config.frame_budget(), Some(Duration::from_millis(20)));

        let unpaced = EngineConfig {
            fps: 0,
            ..EngineConfig::default()
        };
        assert_eq!(unpaced.frame_budget(), None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"movement_mode":"velocity","max_frames":3}"#).unwrap();
        assert_eq!(config.movement_mode, MovementMode::Velocity);
        assert_eq!(config.max_frames, 3);
        assert_eq!(config.fps, 60);
        assert_eq!(config.controlled_entity, EntityId(4));
    }

    #[test]
    fn test_key_binding_json() {
        let binding: KeyBinding =
            serde_json::from_str(r#"{"key":"space","action":"delete_target"}"#).unwrap();
        assert_eq!(binding, KeyBinding::new(Key::Space, KeyAction::DeleteTarget));

        let binding: KeyBinding =
            serde_json::from_str(r#"{"key":"w","action":{"impulse":[0.0,2.0]}}"#).unwrap();
        assert_eq!(
            binding,
            KeyBinding::new(Key::W, KeyAction::Impulse(Vec2::new(0.0, 2.0)))
        );
    }
}
