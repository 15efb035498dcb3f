//! Collaborator interfaces.
//!
//! The runtime decides what exists and in which order it is drawn; getting
//! pixels on screen, reading textures and polling devices belong to these
//! collaborators. The frame loop owns one of each and hands them to the
//! boundary-facing systems.

use std::path::Path;

use disunity_event::Key;
use disunity_math::{Color, Rect, Vec2};

/// An opaque reference to a loaded texture.
///
/// [`TextureHandle::EMPTY`] is returned for unknown asset ids; renderers
/// draw nothing for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureHandle(pub u32);

impl TextureHandle {
    /// The "no texture" sentinel.
    pub const EMPTY: TextureHandle = TextureHandle(0);

    /// Returns `true` for the sentinel.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Draws frames.
pub trait Renderer {
    /// Start a frame and clear the target.
    fn begin_frame(&mut self);

    /// Draw the `source` region of `texture` into `dest`, rotated by
    /// `rotation` degrees around `origin` (relative to `dest`'s corner).
    ///
    /// Must be a no-op for [`TextureHandle::EMPTY`].
    fn draw_sprite(
        &mut self,
        texture: TextureHandle,
        source: Rect,
        dest: Rect,
        origin: Vec2,
        rotation: f32,
        tint: Color,
    );

    /// Draw the outline of `rect`.
    fn draw_rect_outline(&mut self, rect: Rect, color: Color);

    /// Finish the frame.
    fn end_frame(&mut self);

    /// Show the finished frame. Defaults to nothing for targets that
    /// present inside `end_frame`.
    fn present(&mut self) {}
}

/// Maps asset ids to loaded textures.
pub trait TextureCache {
    /// Load the texture at `path` and register it under `asset_id`.
    fn load_texture(&mut self, asset_id: &str, path: &Path) -> TextureHandle;

    /// Look up a texture, returning [`TextureHandle::EMPTY`] if it was never
    /// loaded.
    fn resolve(&self, asset_id: &str) -> TextureHandle;
}

/// Reports device state.
pub trait InputSource {
    /// Refresh device state. Called once at the top of every frame.
    fn poll(&mut self) {}

    /// Returns `true` while `key` is held.
    fn is_key_down(&self, key: Key) -> bool;

    /// Returns `true` once the user has asked to quit.
    fn should_close(&self) -> bool;
}

/// A monotonic time source.
pub trait Clock {
    /// Seconds since an arbitrary fixed point.
    fn now(&self) -> f64;
}
