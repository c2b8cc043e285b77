//! Color and drawable value types
//!
//! These are the concrete values a theme resolves a resource id to. `Color`
//! is a plain linear RGBA value; `Drawable` is an opaque handle naming an
//! image-like asset whose pixel data lives with the host's asset pipeline.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// RGBA color with components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    /// Create an opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color with explicit alpha
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a packed `0xRRGGBB` value
    pub fn hex(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as f32 / 255.0,
            ((rgb >> 8) & 0xFF) as f32 / 255.0,
            (rgb & 0xFF) as f32 / 255.0,
        )
    }

    /// Return this color with a different alpha
    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }
}

/// Opaque handle to an image-like asset
///
/// The engine never decodes or rasterizes assets; it only moves handles from
/// a theme into an element. Cloning is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Drawable {
    asset: Arc<str>,
}

impl Drawable {
    pub fn new(asset: impl Into<Arc<str>>) -> Self {
        Self {
            asset: asset.into(),
        }
    }

    /// Asset name this handle refers to
    pub fn asset(&self) -> &str {
        &self.asset
    }
}

/// Observable background state of an element
///
/// Backgrounds accept either a flat color or an image-like backdrop; the two
/// are set through distinct setters and never coerced into each other.
#[derive(Clone, Debug, PartialEq)]
pub enum Background {
    Color(Color),
    Image(Drawable),
}
