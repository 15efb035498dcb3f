//! Sprite rendering in z order.

use std::collections::BTreeMap;

use disunity_component::{EntityId, EntityTable, Registry};
use disunity_math::{Color, Rect};
use tracing::{debug, trace};

use crate::backend::{Renderer, TextureCache};

/// Draws every alive entity with a `Transform` and a `Sprite`.
///
/// Entities are bucketed by `z_index` and buckets are drawn in ascending
/// order, so higher layers paint over lower ones. Within a bucket the order
/// is the alive snapshot's (ascending id). This is the only place draw
/// order is guaranteed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderSystem;

impl RenderSystem {
    /// The ids that would be drawn, in draw order.
    #[must_use]
    pub fn draw_order(&self, entities: &EntityTable, components: &Registry) -> Vec<EntityId> {
        let mut layers: BTreeMap<u32, Vec<EntityId>> = BTreeMap::new();
        for id in entities.alive_ids() {
            if !components.transforms.contains(id) {
                continue;
            }
            let Some(sprite) = components.sprites.get(id) else {
                continue;
            };
            layers.entry(sprite.z_index).or_default().push(id);
        }
        layers.into_values().flatten().collect()
    }

    /// Draw the sprites. Returns the number of draw calls issued.
    ///
    /// A sprite whose asset id is unknown to `textures` is still submitted,
    /// with [`TextureHandle::EMPTY`](crate::TextureHandle::EMPTY), which the
    /// renderer ignores.
    pub fn run(
        &self,
        entities: &EntityTable,
        components: &Registry,
        renderer: &mut dyn Renderer,
        textures: &dyn TextureCache,
    ) -> usize {
        let order = self.draw_order(entities, components);
        for &id in &order {
            let (Some(transform), Some(sprite)) =
                (components.transforms.get(id), components.sprites.get(id))
            else {
                continue;
            };

            let texture = textures.resolve(&sprite.asset_id);
            if texture.is_empty() {
                debug!(entity = id.id(), asset = sprite.asset_id.as_str(), "texture not loaded");
            }

            let dest = Rect::new(
                transform.position.x,
                transform.position.y,
                sprite.source.width * transform.scale,
                sprite.source.height * transform.scale,
            );
            let origin = sprite.source.half_extents();
            renderer.draw_sprite(
                texture,
                sprite.source,
                dest,
                origin,
                transform.rotation,
                Color::WHITE,
            );
        }
        trace!(count = order.len(), "sprites drawn");
        order.len()
    }
}
