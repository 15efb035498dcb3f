//! Collider outlines for debugging.

use disunity_component::{EntityTable, Registry};
use disunity_math::Color;

use crate::backend::Renderer;

/// Draws every alive collider box in red, on top of the sprites.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugBoxSystem;

impl DebugBoxSystem {
    /// Draw the outlines. Returns the number drawn.
    pub fn run(
        &self,
        entities: &EntityTable,
        components: &Registry,
        renderer: &mut dyn Renderer,
    ) -> usize {
        let mut drawn = 0;
        for id in entities.alive_ids() {
            let (Some(transform), Some(collider)) = (
                components.transforms.get(id),
                components.box_colliders.get(id),
            ) else {
                continue;
            };
            renderer.draw_rect_outline(collider.world_rect(transform.position), Color::RED);
            drawn += 1;
        }
        drawn
    }
}
