//! Image display element

use std::cell::RefCell;
use std::rc::Rc;

use crate::attrs::{Attr, AttributeSet};
use crate::color::{Background, Color, Drawable};
use crate::element::{Element, ImageDisplay, SharedElement};

/// Image display: shows one image-like asset as its content
#[derive(Default)]
pub struct ImageBox {
    image: Option<Drawable>,
    background: Option<Background>,
}

impl ImageBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory constructor
    pub fn build(attrs: &AttributeSet) -> SharedElement {
        let mut image_box = ImageBox::new();
        if let Some(color) = attrs.literal_color(Attr::Background) {
            image_box.set_background_color(color);
        }
        Rc::new(RefCell::new(image_box))
    }
}

impl Element for ImageBox {
    fn tag(&self) -> &'static str {
        "ImageBox"
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

    fn as_image_mut(&mut self) -> Option<&mut dyn ImageDisplay> {
        Some(self)
    }
}

impl ImageDisplay for ImageBox {
    fn set_image(&mut self, drawable: Drawable) {
        self.image = Some(drawable);
    }

    fn image(&self) -> Option<&Drawable> {
        self.image.as_ref()
    }
}
