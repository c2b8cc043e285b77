//! Attribute classifier
//!
//! Decides, per constructed element, which declared attributes reference
//! swappable theme resources and records a binding for each. No opt-in is
//! required from the markup: every resource-referenced attribute of a
//! supported kind is tracked, provided the id is application-defined.
//! Absent attributes, literal values, and reserved-range ids are skipped
//! silently; not every element is themeable.

use reskin_core::{Attr, AttributeSet, ResourceId, ResourceTable, SharedElement, WeakHandle};

use crate::registry::SkinRegistry;

/// Record a binding for each themeable attribute the declaration carries.
///
/// Three independent groups are checked per element capability: background on
/// every element, text color only on text displays, image source only on
/// image displays.
pub fn classify(
    element: &SharedElement,
    attrs: &AttributeSet,
    resources: &dyn ResourceTable,
    registry: &mut SkinRegistry,
) {
    if let Some(id) = skinnable_ref(attrs, Attr::Background) {
        let category = resources.category_of(id);
        tracing::debug!(tag = element.borrow().tag(), ?id, ?category, "tracking background");
        registry.push_background(WeakHandle::new(element), id, category);
    }

    if element.borrow_mut().as_text_mut().is_some() {
        if let Some(id) = skinnable_ref(attrs, Attr::TextColor) {
            tracing::debug!(tag = element.borrow().tag(), ?id, "tracking text color");
            registry.push_text_color(WeakHandle::new(element), id);
        }
    }

    if element.borrow_mut().as_image_mut().is_some() {
        if let Some(id) = skinnable_ref(attrs, Attr::Src) {
            tracing::debug!(tag = element.borrow().tag(), ?id, "tracking image source");
            registry.push_image_src(WeakHandle::new(element), id);
        }
    }
}

/// Resource id bound to `attr`, if present and application-defined
fn skinnable_ref(attrs: &AttributeSet, attr: Attr) -> Option<ResourceId> {
    attrs.resource_ref(attr).filter(|id| id.is_app_resource())
}
