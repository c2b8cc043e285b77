//! Declared attribute sets
//!
//! A markup or assembly layer hands the engine the attributes an element was
//! declared with. An attribute value is either a literal (not themeable) or a
//! reference to a resource id; only resource references can ever produce a
//! skin binding.

use rustc_hash::FxHashMap;

use crate::color::Color;
use crate::resource::ResourceId;

/// Attribute names the engine understands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attr {
    /// Universal background, accepted on every element
    Background,
    /// Foreground color of text-displaying elements
    TextColor,
    /// Content of image-displaying elements
    Src,
    /// Literal text content (never themeable, consumed at construction)
    Text,
}

/// Value declared for an attribute
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// Inline literal color
    Color(Color),
    /// Literal string
    Text(String),
    /// Reference to a resource id
    Resource(ResourceId),
}

/// Attribute set declared for one element
#[derive(Clone, Debug, Default)]
pub struct AttributeSet {
    values: FxHashMap<Attr, AttrValue>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, attr: Attr, value: AttrValue) {
        self.values.insert(attr, value);
    }

    /// Builder-style `set`
    pub fn with(mut self, attr: Attr, value: AttrValue) -> Self {
        self.set(attr, value);
        self
    }

    pub fn get(&self, attr: Attr) -> Option<&AttrValue> {
        self.values.get(&attr)
    }

    /// Resource id bound to an attribute, if the declaration references one.
    /// Literal values yield `None`; a literal can never be re-themed.
    pub fn resource_ref(&self, attr: Attr) -> Option<ResourceId> {
        match self.values.get(&attr) {
            Some(AttrValue::Resource(id)) => Some(*id),
            _ => None,
        }
    }

    /// Literal color declared for an attribute, if any
    pub fn literal_color(&self, attr: Attr) -> Option<Color> {
        match self.values.get(&attr) {
            Some(AttrValue::Color(color)) => Some(*color),
            _ => None,
        }
    }

    /// Literal text content, if declared
    pub fn text(&self) -> Option<&str> {
        match self.values.get(&Attr::Text) {
            Some(AttrValue::Text(text)) => Some(text),
            _ => None,
        }
    }
}
