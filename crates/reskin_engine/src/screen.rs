//! Per-screen installation hook
//!
//! One [`ScreenSkin`] is installed per screen instance and is the single
//! logical owner of that screen's bindings. The host routes element
//! construction through [`ScreenSkin::build_element`], registers elements it
//! assembled in code via [`ScreenSkin::register_dynamic`], applies theme
//! switches via [`ScreenSkin::re_skin`], and calls [`ScreenSkin::clear`]
//! when the screen is torn down.

use std::rc::Rc;

use reskin_core::{Attr, AttributeSet, ResourceTable, SharedElement, WeakHandle};

use crate::classifier::classify;
use crate::dispatcher;
use crate::factory::ElementFactory;
use crate::registry::{DynamicAttribute, SkinRegistry};
use crate::theme::{SharedSelfThemed, Theme};

/// Theming engine instance for one screen
pub struct ScreenSkin {
    factory: ElementFactory,
    registry: SkinRegistry,
    resources: Rc<dyn ResourceTable>,
}

impl ScreenSkin {
    /// Install with the default element families
    pub fn install(resources: Rc<dyn ResourceTable>) -> Self {
        Self::with_factory(ElementFactory::default(), resources)
    }

    pub fn with_factory(factory: ElementFactory, resources: Rc<dyn ResourceTable>) -> Self {
        Self {
            factory,
            registry: SkinRegistry::new(),
            resources,
        }
    }

    /// Constructor table, for registering host-specific element types
    pub fn factory_mut(&mut self) -> &mut ElementFactory {
        &mut self.factory
    }

    /// Binding collection owned by this screen
    pub fn registry(&self) -> &SkinRegistry {
        &self.registry
    }

    /// Intercept one element construction.
    ///
    /// Returns the constructed element with its themeable attributes
    /// recorded, or `None` when the tag is delegated to the host (unknown
    /// tag, or an embedded sub-screen).
    pub fn build_element(&mut self, tag: &str, attrs: &AttributeSet) -> Option<SharedElement> {
        let element = self.factory.construct(tag, attrs)?;
        classify(&element, attrs, self.resources.as_ref(), &mut self.registry);
        Some(element)
    }

    /// Retroactively track an element assembled in code.
    ///
    /// Synthesizes the same bindings the classifier would have produced at
    /// construction time. The caller supplies app-range resource ids;
    /// descriptors for non-skinnable attribute kinds are ignored.
    pub fn register_dynamic(&mut self, element: &SharedElement, attrs: &[DynamicAttribute]) {
        for attr in attrs {
            match attr.attr {
                Attr::Background => {
                    let category = self.resources.category_of(attr.resource);
                    self.registry
                        .push_background(WeakHandle::new(element), attr.resource, category);
                }
                Attr::TextColor => {
                    self.registry
                        .push_text_color(WeakHandle::new(element), attr.resource);
                }
                Attr::Src => {
                    self.registry
                        .push_image_src(WeakHandle::new(element), attr.resource);
                }
                _ => {}
            }
        }
    }

    /// Track a self-theming element. Registering twice records two bindings.
    pub fn register_self_themed(&mut self, element: &SharedSelfThemed) {
        self.registry.push_custom(WeakHandle::new(element));
    }

    /// Drop one registration of a self-theming element, by identity
    pub fn unregister_self_themed(&mut self, element: &SharedSelfThemed) {
        self.registry.remove_custom(element);
    }

    /// Apply a newly selected theme across every binding, best effort
    pub fn re_skin(&self, theme: &dyn Theme) {
        dispatcher::apply(&self.registry, theme);
    }

    /// Drop every binding. Called on screen teardown; elements themselves
    /// stay with the host tree.
    pub fn clear(&mut self) {
        self.registry.clear();
    }
}
