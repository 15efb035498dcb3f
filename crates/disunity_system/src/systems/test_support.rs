//! Shared fixtures for system tests.

use std::collections::HashMap;
use std::path::Path;

use disunity_component::{EntityTable, Registry};
use disunity_event::{EventBus, Key};
use disunity_math::{Color, Rect, Vec2};

use crate::backend::{InputSource, Renderer, TextureCache, TextureHandle};
use crate::context::SystemContext;

/// Owns the world state a [`SystemContext`] borrows.
#[derive(Debug, Default)]
pub struct Fixture {
    pub entities: EntityTable,
    pub components: Registry,
    pub events: EventBus,
}

impl Fixture {
    pub fn ctx(&mut self, dt: f64) -> SystemContext<'_> {
        SystemContext::new(
            1,
            dt,
            &mut self.entities,
            &mut self.components,
            &mut self.events,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Draw {
    Sprite {
        texture: TextureHandle,
        source: Rect,
        dest: Rect,
        origin: Vec2,
        rotation: f32,
        tint: Color,
    },
    Outline(Rect),
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub draws: Vec<Draw>,
}

impl Renderer for Recorder {
    fn begin_frame(&mut self) {}

    fn draw_sprite(
        &mut self,
        texture: TextureHandle,
        source: Rect,
        dest: Rect,
        origin: Vec2,
        rotation: f32,
        tint: Color,
    ) {
        self.draws.push(Draw::Sprite {
            texture,
            source,
            dest,
            origin,
            rotation,
            tint,
        });
    }

    fn draw_rect_outline(&mut self, rect: Rect, _color: Color) {
        self.draws.push(Draw::Outline(rect));
    }

    fn end_frame(&mut self) {}
}

#[derive(Debug, Default)]
pub struct Textures(pub HashMap<String, TextureHandle>);

impl TextureCache for Textures {
    fn load_texture(&mut self, asset_id: &str, _path: &Path) -> TextureHandle {
        let handle = TextureHandle(self.0.len() as u32 + 1);
        self.0.insert(asset_id.to_string(), handle);
        handle
    }

    fn resolve(&self, asset_id: &str) -> TextureHandle {
        self.0.get(asset_id).copied().unwrap_or(TextureHandle::EMPTY)
    }
}

#[derive(Debug, Default)]
pub struct HeldKeys(pub Vec<Key>);

impl InputSource for HeldKeys {
    fn is_key_down(&self, key: Key) -> bool {
        self.0.contains(&key)
    }

    fn should_close(&self) -> bool {
        false
    }
}
