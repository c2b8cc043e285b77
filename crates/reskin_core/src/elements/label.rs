//! Text display element

use std::cell::RefCell;
use std::rc::Rc;

use crate::attrs::{Attr, AttributeSet};
use crate::color::{Background, Color, Drawable};
use crate::element::{Element, SharedElement, TextDisplay};

/// Text display: a run of text with a foreground color
#[derive(Default)]
pub struct Label {
    text: String,
    text_color: Option<Color>,
    background: Option<Background>,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Factory constructor
    pub fn build(attrs: &AttributeSet) -> SharedElement {
        let mut label = Label::new(attrs.text().unwrap_or_default());
        if let Some(color) = attrs.literal_color(Attr::Background) {
            label.set_background_color(color);
        }
        if let Some(color) = attrs.literal_color(Attr::TextColor) {
            label.text_color = Some(color);
        }
        Rc::new(RefCell::new(label))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Element for Label {
    fn tag(&self) -> &'static str {
        "Label"
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

    fn as_text_mut(&mut self) -> Option<&mut dyn TextDisplay> {
        Some(self)
    }
}

impl TextDisplay for Label {
    fn set_text_color(&mut self, color: Color) {
        self.text_color = Some(color);
    }

    fn text_color(&self) -> Option<Color> {
        self.text_color
    }
}
