//! Built-in element families
//!
//! A minimal set of concrete elements covering the capability matrix:
//! [`Panel`] (generic container), [`Label`] (text display), [`ImageBox`]
//! (image display). Hosts with richer toolkits register their own
//! constructors with the factory; these are the defaults.
//!
//! Constructors consume only literal attributes. Resource-referenced
//! attributes carry no value at construction time; they are filled in by the
//! first re-skin pass.

mod image_box;
mod label;
mod panel;

pub use image_box::ImageBox;
pub use label::Label;
pub use panel::Panel;
