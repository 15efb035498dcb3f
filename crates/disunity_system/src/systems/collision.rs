//! Box collision: pairwise AABB overlap.
//!
//! Every unordered pair of collidable entities is tested once per frame,
//! which is O(n²) in the number of colliders. That is fine for the entity
//! counts a single screen holds; a broad phase would be needed beyond that.

use disunity_component::{EntityId, EntityTable, Registry};
use disunity_event::CollisionEvent;
use disunity_math::Rect;
use tracing::debug;

use crate::context::{System, SystemContext};

/// Emits a [`CollisionEvent`] for each overlapping pair of entities with a
/// `Transform` and a `BoxCollider`.
///
/// Pairs are found before any are dispatched, so an entity a handler marks
/// for deletion still appears in the pairs that follow it this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxCollisionSystem;

impl System for BoxCollisionSystem {
    fn name(&self) -> &'static str {
        "box_collision"
    }

    fn run(&mut self, ctx: &mut SystemContext<'_>) {
        let hits = overlapping_pairs(ctx.entities, ctx.components);
        for hit in hits {
            debug!(a = hit.a.id(), b = hit.b.id(), "collision");
            ctx.emit(hit);
        }
    }
}

/// Every overlapping pair among the alive collidable entities, with
/// `a` before `b` in ascending id order.
///
/// The boxes are snapshotted before any event is dispatched, so handlers
/// that move or delete entities do not change which pairs are reported in
/// the same frame.
#[must_use]
pub fn overlapping_pairs(entities: &EntityTable, components: &Registry) -> Vec<CollisionEvent> {
    let boxes: Vec<(EntityId, Rect)> = entities
        .alive_ids()
        .filter_map(|id| {
            let transform = components.transforms.get(id)?;
            let collider = components.box_colliders.get(id)?;
            Some((id, collider.world_rect(transform.position)))
        })
        .collect();

    let mut hits = Vec::new();
    for (i, (a, a_box)) in boxes.iter().enumerate() {
        for (b, b_box) in &boxes[i + 1..] {
            if a_box.overlaps(b_box) {
                hits.push(CollisionEvent { a: *a, b: *b });
            }
        }
    }
    hits
}
