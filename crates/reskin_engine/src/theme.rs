//! Theme resolution boundary
//!
//! A theme is an opaque bundle of resource values keyed by resource id. The
//! engine never models a theme's contents; it only asks the [`Theme`] trait
//! for a concrete value at dispatch time. [`Palette`] is a map-backed
//! implementation for hosts that assemble themes in code; hosts loading
//! themes from elsewhere implement the trait themselves.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use reskin_core::{Color, Drawable, ResourceId};

use crate::error::ResourceNotFound;

/// Swappable bundle of resource values
pub trait Theme {
    /// Stable name for diagnostics
    fn name(&self) -> &str;

    /// Resolve a resource id as a color
    fn color(&self, id: ResourceId) -> Result<Color, ResourceNotFound>;

    /// Resolve a resource id as an image-like resource
    fn drawable(&self, id: ResourceId) -> Result<Drawable, ResourceNotFound>;
}

/// Self-theming capability
///
/// An element variant may manage its own attribute updates in response to a
/// theme change. The engine invokes `re_skin` at most once per theme change
/// per registration and imposes no other contract.
pub trait SelfThemed {
    fn re_skin(&mut self, theme: &dyn Theme);
}

/// Shared ownership handle to a self-theming element
pub type SharedSelfThemed = Rc<RefCell<dyn SelfThemed>>;

/// Map-backed theme
#[derive(Debug, Default)]
pub struct Palette {
    name: String,
    colors: FxHashMap<ResourceId, Color>,
    drawables: FxHashMap<ResourceId, Drawable>,
}

impl Palette {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn set_color(&mut self, id: ResourceId, color: Color) {
        self.colors.insert(id, color);
    }

    pub fn set_drawable(&mut self, id: ResourceId, drawable: Drawable) {
        self.drawables.insert(id, drawable);
    }

    /// Builder-style `set_color`
    pub fn with_color(mut self, id: ResourceId, color: Color) -> Self {
        self.set_color(id, color);
        self
    }

    /// Builder-style `set_drawable`
    pub fn with_drawable(mut self, id: ResourceId, drawable: Drawable) -> Self {
        self.set_drawable(id, drawable);
        self
    }
}

impl Theme for Palette {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self, id: ResourceId) -> Result<Color, ResourceNotFound> {
        self.colors.get(&id).copied().ok_or(ResourceNotFound(id))
    }

    fn drawable(&self, id: ResourceId) -> Result<Drawable, ResourceNotFound> {
        self.drawables.get(&id).cloned().ok_or(ResourceNotFound(id))
    }
}
