//! Reskin Core
//!
//! Foundational primitives for the reskin theming engine:
//!
//! - **Colors and drawables**: the values a theme resolves to
//! - **Resources**: opaque resource ids, categories, and the host resource table
//! - **Attributes**: the declared attribute set handed to element construction
//! - **Elements**: the retained-tree element trait family and built-in elements
//! - **Handles**: the uniform non-owning `WeakHandle` used by every binding
//!
//! The engine itself lives in `reskin_engine`; this crate holds only the
//! vocabulary shared between the engine and a host UI toolkit.

pub mod attrs;
pub mod color;
pub mod element;
pub mod elements;
pub mod handle;
pub mod resource;

pub use attrs::{Attr, AttrValue, AttributeSet};
pub use color::{Background, Color, Drawable};
pub use element::{Element, ImageDisplay, SharedElement, TextDisplay};
pub use handle::WeakHandle;
pub use resource::{
    ResourceCategory, ResourceId, ResourceRegistry, ResourceTable, MIN_APP_RESOURCE_ID,
};
