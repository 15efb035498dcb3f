//! Axis-aligned rectangles.
//!
//! [`Rect`] is used both as a sprite's source region on a texture and as the
//! world-space box tested by the collision system.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width, extending to the right of `x`.
    pub width: f32,
    /// Height, extending down from `y`.
    pub height: f32,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Create a rectangle from its corner and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle whose top-left corner sits at `position`.
    #[must_use]
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Top-left corner.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Width and height as a vector.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Centre of the rectangle relative to its own top-left corner.
    #[must_use]
    pub fn half_extents(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Axis-aligned overlap test.
    ///
    /// Uses strict inequalities, so rectangles that only share an edge do
    /// not overlap:
    ///
    /// ```text
    /// a.x < b.x + b.w && a.x + a.w > b.x &&
    /// a.y < b.y + b.h && a.y + a.h > b.y
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}
