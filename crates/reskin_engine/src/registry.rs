//! Binding registry
//!
//! The single shared mutable structure of the engine: per-kind collections of
//! weak bindings from live elements to the resource ids that should drive
//! them, plus the collection of self-theming elements.
//!
//! The registry is append-only apart from [`SkinRegistry::remove_custom`] and
//! [`SkinRegistry::clear`]. It never deduplicates: registering an element
//! twice records two bindings, and a re-skin pass applies the same value
//! twice, which is idempotent. Bindings to dropped elements are not pruned
//! eagerly; the dispatcher skips them lazily.

use reskin_core::{Attr, Element, ResourceCategory, ResourceId, WeakHandle};

use crate::theme::SelfThemed;

/// Binding of a text-displaying element's foreground color to a resource
pub struct TextColorBinding {
    pub element: WeakHandle<dyn Element>,
    pub resource: ResourceId,
}

/// Binding of an image-displaying element's content to a resource
pub struct ImageSrcBinding {
    pub element: WeakHandle<dyn Element>,
    pub resource: ResourceId,
}

/// Binding of an element's background to a resource
///
/// Backgrounds accept either resource category, so the category is resolved
/// once at bind time and stored; it decides which setter a pass calls.
pub struct BackgroundBinding {
    pub element: WeakHandle<dyn Element>,
    pub resource: ResourceId,
    pub category: ResourceCategory,
}

/// Descriptor for retroactively registering a code-assembled element
///
/// Elements built programmatically bypass construction-time interception;
/// their owner hands the engine one descriptor per skinnable attribute. The
/// caller is responsible for supplying an app-range resource id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DynamicAttribute {
    pub attr: Attr,
    pub resource: ResourceId,
}

impl DynamicAttribute {
    pub fn new(attr: Attr, resource: ResourceId) -> Self {
        Self { attr, resource }
    }
}

/// Per-kind collections of skin bindings for one screen
#[derive(Default)]
pub struct SkinRegistry {
    backgrounds: Vec<BackgroundBinding>,
    text_colors: Vec<TextColorBinding>,
    image_sources: Vec<ImageSrcBinding>,
    custom: Vec<WeakHandle<dyn SelfThemed>>,
}

impl SkinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_background(
        &mut self,
        element: WeakHandle<dyn Element>,
        resource: ResourceId,
        category: ResourceCategory,
    ) {
        self.backgrounds.push(BackgroundBinding {
            element,
            resource,
            category,
        });
    }

    pub fn push_text_color(&mut self, element: WeakHandle<dyn Element>, resource: ResourceId) {
        self.text_colors.push(TextColorBinding { element, resource });
    }

    pub fn push_image_src(&mut self, element: WeakHandle<dyn Element>, resource: ResourceId) {
        self.image_sources.push(ImageSrcBinding { element, resource });
    }

    pub fn push_custom(&mut self, element: WeakHandle<dyn SelfThemed>) {
        self.custom.push(element);
    }

    /// Remove the first custom binding observing the same element, if any.
    /// Attribute bindings are only ever bulk-cleared; custom bindings support
    /// explicit unregistration because their elements opt in individually.
    pub fn remove_custom(&mut self, element: &crate::theme::SharedSelfThemed) {
        if let Some(pos) = self.custom.iter().position(|h| h.points_to(element)) {
            self.custom.remove(pos);
        }
    }

    /// Drop every binding. Called when the owning screen is torn down.
    pub fn clear(&mut self) {
        self.backgrounds.clear();
        self.text_colors.clear();
        self.image_sources.clear();
        self.custom.clear();
    }

    pub fn backgrounds(&self) -> &[BackgroundBinding] {
        &self.backgrounds
    }

    pub fn text_colors(&self) -> &[TextColorBinding] {
        &self.text_colors
    }

    pub fn image_sources(&self) -> &[ImageSrcBinding] {
        &self.image_sources
    }

    pub fn custom(&self) -> &[WeakHandle<dyn SelfThemed>] {
        &self.custom
    }

    /// Total binding count across every kind, for diagnostics
    pub fn len(&self) -> usize {
        self.backgrounds.len()
            + self.text_colors.len()
            + self.image_sources.len()
            + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
