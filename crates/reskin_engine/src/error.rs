use reskin_core::ResourceId;
use thiserror::Error;

/// A theme does not define a value for the requested resource.
///
/// This is an expected, per-binding outcome: one theme may simply omit a
/// resource another theme defines. A re-skin pass leaves the element's
/// current value in place and moves on; the miss never aborts the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no themed value for resource {0:?}")]
pub struct ResourceNotFound(pub ResourceId);
