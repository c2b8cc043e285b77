//! Reskin Engine
//!
//! Runtime re-skinning for a retained visual-element tree. The engine hooks
//! the host's tree-building pipeline, records which live elements reference
//! swappable theme resources, and re-applies a newly selected theme in place,
//! without rebuilding the tree.
//!
//! # Flow
//!
//! During construction data flows one way:
//!
//! ```text
//! factory (intercept) → classifier → registry
//! ```
//!
//! and during a theme change the other way:
//!
//! ```text
//! registry → theme resolver → elements
//! ```
//!
//! The registry is the single shared mutable structure; everything else is a
//! stateless transformer over it.
//!
//! # Per-screen usage
//!
//! One [`ScreenSkin`] is installed per screen instance. The host routes every
//! element construction through [`ScreenSkin::build_element`], registers
//! code-assembled elements via [`ScreenSkin::register_dynamic`], and calls
//! [`ScreenSkin::clear`] on teardown. [`SkinManager`] coordinates the active
//! theme across screens.
//!
//! Theme application is best effort: a binding whose element has been
//! dropped, or whose resource the new theme does not define, is skipped
//! without disturbing the rest of the pass. Nothing here returns an error to
//! the theme-change caller.

pub mod classifier;
pub mod dispatcher;
pub mod error;
pub mod factory;
pub mod manager;
pub mod registry;
pub mod screen;
pub mod theme;

pub use error::ResourceNotFound;
pub use factory::{ElementFactory, EMBEDDED_SCREEN_TAG};
pub use manager::{SharedScreenSkin, SkinManager};
pub use registry::{
    BackgroundBinding, DynamicAttribute, ImageSrcBinding, SkinRegistry, TextColorBinding,
};
pub use screen::ScreenSkin;
pub use theme::{Palette, SelfThemed, SharedSelfThemed, Theme};
