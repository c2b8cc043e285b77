//! Generic container element

use std::cell::RefCell;
use std::rc::Rc;

use crate::attrs::{Attr, AttributeSet};
use crate::color::{Background, Color, Drawable};
use crate::element::{Element, SharedElement};

/// Generic container: holds children and a background, displays nothing else
#[derive(Default)]
pub struct Panel {
    background: Option<Background>,
    children: Vec<SharedElement>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory constructor
    pub fn build(attrs: &AttributeSet) -> SharedElement {
        let mut panel = Panel::new();
        if let Some(color) = attrs.literal_color(Attr::Background) {
            panel.set_background_color(color);
        }
        Rc::new(RefCell::new(panel))
    }

    pub fn add_child(&mut self, child: SharedElement) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[SharedElement] {
        &self.children
    }
}

impl Element for Panel {
    fn tag(&self) -> &'static str {
        "Panel"
    }

    fn set_background_color(&mut self, color: Color) {
        self.background = Some(Background::Color(color));
    }

    fn set_background_image(&mut self, drawable: Drawable) {
        self.background = Some(Background::Image(drawable));
    }

    fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::AttrValue;
    use crate::elements::Label;

    #[test]
    fn build_applies_literal_background() {
        let attrs = AttributeSet::new().with(Attr::Background, AttrValue::Color(Color::WHITE));
        let panel = Panel::build(&attrs);
        assert_eq!(
            panel.borrow().background(),
            Some(&Background::Color(Color::WHITE))
        );
    }

    #[test]
    fn panel_holds_children_and_displays_nothing_else() {
        let mut panel = Panel::new();
        panel.add_child(Label::build(&AttributeSet::new()));
        assert_eq!(panel.children().len(), 1);
        assert!(panel.as_text_mut().is_none());
        assert!(panel.as_image_mut().is_none());
    }
}
