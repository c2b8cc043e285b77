//! Resource identifiers and the host resource table
//!
//! Every themeable value is addressed by an opaque [`ResourceId`]. The id
//! space is split in two: ids at or below [`MIN_APP_RESOURCE_ID`] belong to
//! platform built-ins and can never be re-themed, ids strictly above it are
//! application-defined and eligible for skin tracking.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Largest reserved platform resource id. Application resources live
/// strictly above this value.
pub const MIN_APP_RESOURCE_ID: u32 = 0x7000_0000;

/// Opaque identifier for a themeable resource (color or image-like asset)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceId(pub u32);

impl ResourceId {
    /// Whether this id is application-defined (and therefore re-themeable)
    pub fn is_app_resource(self) -> bool {
        self.0 > MIN_APP_RESOURCE_ID
    }
}

/// Declared category of a resource id
///
/// Backgrounds accept either category, so the category is looked up once at
/// bind time and drives which setter a re-skin pass calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceCategory {
    Color,
    Image,
}

/// Host resource system boundary: category lookup by resource id.
///
/// Anything not declared as a color is reported as image-like, including ids
/// the table has never seen. The permissive fallback is intentional.
pub trait ResourceTable {
    fn category_of(&self, id: ResourceId) -> ResourceCategory;
}

/// In-memory resource table
///
/// Declares named resources and allocates their ids in the application range.
/// Hosts with a real resource compiler would implement [`ResourceTable`]
/// directly; this registry covers programmatic hosts and tests.
#[derive(Debug)]
pub struct ResourceRegistry {
    next_id: u32,
    categories: FxHashMap<ResourceId, ResourceCategory>,
    names: FxHashMap<ResourceId, String>,
}

impl Default for ResourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self {
            next_id: MIN_APP_RESOURCE_ID + 1,
            categories: FxHashMap::default(),
            names: FxHashMap::default(),
        }
    }

    /// Declare a named color resource, allocating a fresh app-range id
    pub fn declare_color(&mut self, name: &str) -> ResourceId {
        self.declare(name, ResourceCategory::Color)
    }

    /// Declare a named image resource, allocating a fresh app-range id
    pub fn declare_image(&mut self, name: &str) -> ResourceId {
        self.declare(name, ResourceCategory::Image)
    }

    /// Declare a resource at a fixed id, overwriting any prior declaration
    pub fn declare_at(&mut self, id: ResourceId, name: &str, category: ResourceCategory) {
        self.categories.insert(id, category);
        self.names.insert(id, name.to_string());
    }

    /// Name a resource was declared under, if any
    pub fn name_of(&self, id: ResourceId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    fn declare(&mut self, name: &str, category: ResourceCategory) -> ResourceId {
        let id = ResourceId(self.next_id);
        self.next_id += 1;
        self.declare_at(id, name, category);
        id
    }
}

impl ResourceTable for ResourceRegistry {
    fn category_of(&self, id: ResourceId) -> ResourceCategory {
        self.categories
            .get(&id)
            .copied()
            .unwrap_or(ResourceCategory::Image)
    }
}
