//! Level descriptions.
//!
//! A level is a JSON document listing the textures to register and the
//! entities to create:
//!
//! ```json
//! {
//!   "config": { "fps": 30 },
//!   "textures": [{ "id": "tank-image", "path": "assets/images/tank.png" }],
//!   "entities": [
//!     {
//!       "transform": { "position": [10.0, 30.0], "scale": 3.4 },
//!       "sprite": { "asset_id": "tank-image",
//!                   "source": { "x": 0, "y": 0, "width": 32, "height": 32 },
//!                   "z_index": 1 }
//!     }
//!   ]
//! }
//! ```
//!
//! Every section and every component is optional. Entities are created in
//! file order, so in a fresh world the n-th entry gets id n.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use disunity_component::{Animation, BoxCollider, EntityId, Health, RigidBody, Sprite, Transform};
use disunity_math::Vec2;
use disunity_system::{EngineConfig, TextureCache};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::LevelError;
use crate::world::World;

/// A texture to register before entities are created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureEntry {
    pub id: String,
    pub path: PathBuf,
}

impl TextureEntry {
    #[must_use]
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
        }
    }
}

/// The components of one entity. Absent fields are not attached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rigid_body: Option<RigidBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprite: Option<Sprite>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_collider: Option<BoxCollider>,
}

/// A whole level: optional engine settings, textures and entities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<EngineConfig>,
    pub textures: Vec<TextureEntry>,
    pub entities: Vec<EntityDescription>,
}

impl LevelDescription {
    /// Read and parse a level file.
    ///
    /// # Errors
    ///
    /// [`LevelError::Io`] if the file cannot be read and
    /// [`LevelError::Parse`] if it is not a level description.
    pub fn load(path: &Path) -> Result<Self, LevelError> {
        let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let level = Self::from_json(&text)?;
        info!(
            path = %path.display(),
            textures = level.textures.len(),
            entities = level.entities.len(),
            "level loaded"
        );
        Ok(level)
    }

    /// Parse a level from JSON text.
    pub fn from_json(text: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Check that texture ids are unique and every sprite names a declared
    /// texture.
    pub fn validate(&self) -> Result<(), LevelError> {
        let mut declared = HashSet::new();
        for texture in &self.textures {
            if !declared.insert(texture.id.as_str()) {
                return Err(LevelError::DuplicateTexture(texture.id.clone()));
            }
        }

        for (index, entity) in self.entities.iter().enumerate() {
            if let Some(sprite) = &entity.sprite
                && !declared.contains(sprite.asset_id.as_str())
            {
                return Err(LevelError::UnknownAsset {
                    index,
                    asset_id: sprite.asset_id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Register the textures and create the entities in `world`.
    ///
    /// Validation runs first, so an invalid level leaves `world` and
    /// `textures` untouched. Returns the created ids in file order.
    pub fn apply(
        &self,
        world: &mut World,
        textures: &mut dyn TextureCache,
    ) -> Result<Vec<EntityId>, LevelError> {
        self.validate()?;

        for texture in &self.textures {
            textures.load_texture(&texture.id, &texture.path);
        }

        let mut created = Vec::with_capacity(self.entities.len());
        for description in &self.entities {
            let id = world.spawn();
            if let Some(transform) = description.transform {
                world.insert(id, transform)?;
            }
            if let Some(body) = description.rigid_body {
                world.insert(id, body)?;
            }
            if let Some(health) = description.health {
                world.insert(id, health)?;
            }
            if let Some(sprite) = &description.sprite {
                world.insert(id, sprite.clone())?;
            }
            if let Some(animation) = description.animation {
                world.insert(id, animation)?;
            }
            if let Some(collider) = description.box_collider {
                world.insert(id, collider)?;
            }
            debug!(entity = id.id(), components = world.components.row_count(id), "level entity");
            created.push(id);
        }

        info!(entities = created.len(), "level applied");
        Ok(created)
    }

    /// The built-in demo: a tile map background, a tank, a truck and an
    /// animated knight, created in that order (ids 1 to 4 in a fresh world).
    #[must_use]
    pub fn demo() -> Self {
        let tile_map = EntityDescription {
            transform: Some(Transform::IDENTITY.scaled(4.0)),
            sprite: Some(Sprite::new("tile-map-image", 768.0, 768.0, 0)),
            ..EntityDescription::default()
        };

        let tank = EntityDescription {
            transform: Some(Transform::from_position(Vec2::new(10.0, 30.0)).scaled(3.4)),
            rigid_body: Some(RigidBody::new(100.0, 20.0)),
            health: Some(Health::full(100)),
            sprite: Some(Sprite::new("tank-image", 32.0, 32.0, 1)),
            box_collider: Some(BoxCollider::new(64, 64)),
            ..EntityDescription::default()
        };

        let truck = EntityDescription {
            transform: Some(Transform {
                rotation: 45.0,
                ..Transform::from_position(Vec2::new(50.0, 100.0)).scaled(3.0)
            }),
            rigid_body: Some(RigidBody::new(10.0, 50.0)),
            sprite: Some(Sprite::new("truck-image", 32.0, 32.0, 1)),
            ..EntityDescription::default()
        };

        let knight = EntityDescription {
            transform: Some(Transform::from_position(Vec2::new(500.0, 500.0)).scaled(3.4)),
            rigid_body: Some(RigidBody::new(5.0, 5.0)),
            health: Some(Health::full(100)),
            sprite: Some(Sprite::new("knight-image", 16.0, 16.0, 1)),
            animation: Some(Animation::looping(6, 12.0)),
            box_collider: Some(BoxCollider::new(32, 32)),
        };

        Self {
            config: None,
            textures: vec![
                TextureEntry::new("tile-map-image", "assets/nature_tileset/OpenWorldMap24x24.png"),
                TextureEntry::new("knight-image", "assets/characters/knight_idle_spritesheet.png"),
                TextureEntry::new("truck-image", "assets/images/truck-ford-right.png"),
                TextureEntry::new("tank-image", "assets/images/tank-panther-right.png"),
            ],
            entities: vec![tile_map, tank, truck, knight],
        }
    }
}

#[cfg(test)]
mod tests {
    use disunity_system::TextureHandle;

    use super::*;
    use crate::headless::MemoryTextureCache;

    #[test]
    fn test_demo_creates_four_entities_in_order() {
        let mut world = World::new();
        let mut textures = MemoryTextureCache::new();
        let ids = LevelDescription::demo()
            .apply(&mut world, &mut textures)
            .unwrap();

        assert_eq!(ids, vec![EntityId(1), EntityId(2), EntityId(3), EntityId(4)]);
        assert_eq!(textures.len(), 4);

        let knight = EntityId(4);
        assert!(world.components.animations.contains(knight));
        assert!(world.components.box_colliders.contains(knight));
        assert_eq!(
            world.components.transforms.get(knight).unwrap().position,
            Vec2::new(500.0, 500.0)
        );
        assert_ne!(textures.resolve("knight-image"), TextureHandle::EMPTY);

        let tile_map = EntityId(1);
        assert_eq!(world.components.sprites.get(tile_map).unwrap().z_index, 0);
        assert!(!world.components.rigid_bodies.contains(tile_map));
    }

    #[test]
    fn test_parse_minimal_level() {
        let level = LevelDescription::from_json(
            r#"{
                "textures": [{ "id": "tank", "path": "tank.png" }],
                "entities": [
                    {
                        "transform": { "position": [1.0, 2.0] },
                        "sprite": {
                            "asset_id": "tank",
                            "source": { "x": 0.0, "y": 0.0, "width": 32.0, "height": 32.0 },
                            "z_index": 3
                        }
                    },
                    {}
                ]
            }"#,
        )
        .unwrap();

        assert!(level.config.is_none());
        assert_eq!(level.entities.len(), 2);
        let transform = level.entities[0].transform.unwrap();
        assert_eq!(transform.position, Vec2::new(1.0, 2.0));
        assert_eq!(transform.scale, 1.0);
        assert_eq!(level.entities[0].sprite.as_ref().unwrap().z_index, 3);
        assert_eq!(level.entities[1], EntityDescription::default());
    }

    #[test]
    fn test_config_section_is_read() {
        let level = LevelDescription::from_json(r#"{ "config": { "fps": 30 } }"#).unwrap();
        let config = level.config.unwrap();
        assert_eq!(config.fps, 30);
        assert_eq!(config.window_width, 800);
    }

    #[test]
    fn test_unknown_asset_is_rejected_before_spawning() {
        let mut level = LevelDescription::demo();
        level.entities[2].sprite = Some(Sprite::new("missing", 8.0, 8.0, 0));

        let mut world = World::new();
        let mut textures = MemoryTextureCache::new();
        let err = level.apply(&mut world, &mut textures).unwrap_err();

        assert!(matches!(
            err,
            LevelError::UnknownAsset { index: 2, ref asset_id } if asset_id == "missing"
        ));
        assert!(world.entities.is_empty());
        assert!(textures.is_empty());
    }

    #[test]
    fn test_duplicate_texture_is_rejected() {
        let mut level = LevelDescription::demo();
        level.textures.push(TextureEntry::new("tank-image", "other.png"));
        assert!(matches!(
            level.validate(),
            Err(LevelError::DuplicateTexture(id)) if id == "tank-image"
        ));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(
            LevelDescription::from_json("{ not json"),
            Err(LevelError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = LevelDescription::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, LevelError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn test_demo_round_trips_through_json() {
        let demo = LevelDescription::demo();
        let text = serde_json::to_string_pretty(&demo).unwrap();
        assert_eq!(LevelDescription::from_json(&text).unwrap(), demo);
    }
}
