//! Re-skin dispatcher
//!
//! One full, best-effort application of a newly selected theme across every
//! current binding. The pass is synchronous and not transactional: each
//! binding is independent, a dead element or a resource the theme omits is
//! skipped, and the pass always runs to completion. A partially-applied pass
//! is a successful pass; a resource missing now is simply re-attempted on
//! the next theme change.

use reskin_core::ResourceCategory;

use crate::registry::SkinRegistry;
use crate::theme::Theme;

#[derive(Default)]
struct PassStats {
    applied: usize,
    dead: usize,
    missing: usize,
}

/// Apply `theme` to every binding in `registry`
pub fn apply(registry: &SkinRegistry, theme: &dyn Theme) {
    let mut stats = PassStats::default();

    for binding in registry.text_colors() {
        let Some(element) = binding.element.resolve() else {
            stats.dead += 1;
            continue;
        };
        match theme.color(binding.resource) {
            Ok(color) => {
                let mut element = element.borrow_mut();
                if let Some(text) = element.as_text_mut() {
                    text.set_text_color(color);
                    stats.applied += 1;
                }
            }
            // Theme omits this resource; keep the current value.
            Err(_) => stats.missing += 1,
        }
    }

    for binding in registry.image_sources() {
        let Some(element) = binding.element.resolve() else {
            stats.dead += 1;
            continue;
        };
        match theme.drawable(binding.resource) {
            Ok(drawable) => {
                let mut element = element.borrow_mut();
                if let Some(image) = element.as_image_mut() {
                    image.set_image(drawable);
                    stats.applied += 1;
                }
            }
            Err(_) => stats.missing += 1,
        }
    }

    for binding in registry.backgrounds() {
        let Some(element) = binding.element.resolve() else {
            stats.dead += 1;
            continue;
        };
        // The stored bind-time category decides which setter runs; a
        // differently-typed resource sharing the id space must not leak
        // through the wrong one.
        match binding.category {
            ResourceCategory::Color => match theme.color(binding.resource) {
                Ok(color) => {
                    element.borrow_mut().set_background_color(color);
                    stats.applied += 1;
                }
                Err(_) => stats.missing += 1,
            },
            ResourceCategory::Image => match theme.drawable(binding.resource) {
                Ok(drawable) => {
                    element.borrow_mut().set_background_image(drawable);
                    stats.applied += 1;
                }
                Err(_) => stats.missing += 1,
            },
        }
    }

    for handle in registry.custom() {
        match handle.resolve() {
            Some(element) => {
                element.borrow_mut().re_skin(theme);
                stats.applied += 1;
            }
            None => stats.dead += 1,
        }
    }

    tracing::debug!(
        theme = theme.name(),
        applied = stats.applied,
        dead = stats.dead,
        missing = stats.missing,
        "re-skin pass complete"
    );
}
