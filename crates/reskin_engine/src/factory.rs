//! Construction interceptor
//!
//! Markup declares elements under short tag names (`Label`) that belong to
//! one of a few namespace families, or under a fully-qualified name
//! (`demo.Badge`). [`ElementFactory`] resolves a tag through an explicit
//! constructor table: each namespace prefix is tried in order, then the tag
//! verbatim. Exhausting every attempt is a non-fatal integrity problem; the
//! tag is logged and handed back to the host's default construction path.

use rustc_hash::FxHashMap;

use reskin_core::elements::{ImageBox, Label, Panel};
use reskin_core::{AttributeSet, SharedElement};

/// Tag of an embedded sub-screen. Never intercepted: the host lifecycle must
/// run its own attach sequence for it.
pub const EMBEDDED_SCREEN_TAG: &str = "screen";

/// Namespace prefixes a short tag name may omit, in resolution order
const CLASS_PREFIXES: [&str; 3] = ["widgets.", "containers.", "media."];

/// Constructor for one element type
pub type ElementCtor = fn(&AttributeSet) -> SharedElement;

/// Tag-to-constructor table standing in for reflective instantiation
pub struct ElementFactory {
    ctors: FxHashMap<String, ElementCtor>,
}

impl ElementFactory {
    /// Empty table with no registered element types
    pub fn empty() -> Self {
        Self {
            ctors: FxHashMap::default(),
        }
    }

    /// Register a constructor under a qualified name
    pub fn register(&mut self, qualified: impl Into<String>, ctor: ElementCtor) {
        self.ctors.insert(qualified.into(), ctor);
    }

    /// Construct the element declared by `tag`, or `None` to delegate the
    /// tag to the host's default handling.
    pub fn construct(&self, tag: &str, attrs: &AttributeSet) -> Option<SharedElement> {
        if tag == EMBEDDED_SCREEN_TAG {
            return None;
        }

        for prefix in CLASS_PREFIXES {
            if let Some(ctor) = self.ctors.get(&format!("{prefix}{tag}")) {
                return Some(ctor(attrs));
            }
        }

        // Fully-qualified declaration
        if let Some(ctor) = self.ctors.get(tag) {
            return Some(ctor(attrs));
        }

        tracing::warn!(tag, "no constructor for element tag, delegating to host");
        None
    }
}

impl Default for ElementFactory {
    /// Table pre-populated with the built-in element families
    fn default() -> Self {
        let mut factory = Self::empty();
        factory.register("widgets.Label", Label::build);
        factory.register("containers.Panel", Panel::build);
        factory.register("media.ImageBox", ImageBox::build);
        factory
    }
}
