//! RGBA colours passed to the rendering collaborator.

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGBA colour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque white. Used as the neutral sprite tint.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque red. Used for collider outlines.
    pub const RED: Self = Self::rgb(230, 41, 55);

    /// Create an opaque colour.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
