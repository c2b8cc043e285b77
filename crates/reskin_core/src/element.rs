//! Element trait family
//!
//! An element is a node in the host's retained visual tree. The engine only
//! needs a narrow view of it: every element has a background, and some
//! elements additionally display text or an image. Those two extras are
//! modeled as capability traits reached through accessor methods, so the
//! classifier can probe capability without knowing concrete types.

use std::cell::RefCell;
use std::rc::Rc;

use crate::color::{Background, Color, Drawable};

/// Shared ownership handle to a tree element, as the host tree stores them
pub type SharedElement = Rc<RefCell<dyn Element>>;

/// A node in the retained visual tree
pub trait Element {
    /// Short tag name this element type is declared under, for diagnostics
    fn tag(&self) -> &'static str;

    /// Replace the background with a flat color
    fn set_background_color(&mut self, color: Color);

    /// Replace the background with an image-like backdrop
    fn set_background_image(&mut self, drawable: Drawable);

    /// Current background, if any has been set
    fn background(&self) -> Option<&Background>;

    /// Text-display capability, if this element has one
    fn as_text_mut(&mut self) -> Option<&mut dyn TextDisplay> {
        None
    }

    /// Image-display capability, if this element has one
    fn as_image_mut(&mut self) -> Option<&mut dyn ImageDisplay> {
        None
    }
}

/// Capability of elements that render text in a foreground color
pub trait TextDisplay {
    fn set_text_color(&mut self, color: Color);
    fn text_color(&self) -> Option<Color>;
}

/// Capability of elements that render an image as their content
pub trait ImageDisplay {
    fn set_image(&mut self, drawable: Drawable);
    fn image(&self) -> Option<&Drawable>;
}
