//! Non-owning element handles
//!
//! Elements are owned by the host's retained tree. The engine observes them
//! through [`WeakHandle`], which resolves to the live target or reports it
//! gone; a handle must tolerate resolving to "gone" at any time and never
//! extends the target's lifetime.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Uniform non-owning handle to a shared, interior-mutable target
pub struct WeakHandle<T: ?Sized> {
    inner: Weak<RefCell<T>>,
}

impl<T: ?Sized> WeakHandle<T> {
    pub fn new(strong: &Rc<RefCell<T>>) -> Self {
        Self {
            inner: Rc::downgrade(strong),
        }
    }

    /// Resolve to the live target, or `None` if it has been dropped
    pub fn resolve(&self) -> Option<Rc<RefCell<T>>> {
        self.inner.upgrade()
    }

    /// Whether this handle observes the same allocation as `strong`.
    /// A handle whose target is gone matches nothing.
    pub fn points_to(&self, strong: &Rc<RefCell<T>>) -> bool {
        match self.inner.upgrade() {
            // Compare data addresses only; trait-object handles may carry
            // different vtable pointers for the same allocation.
            Some(live) => Rc::as_ptr(&live) as *const () == Rc::as_ptr(strong) as *const (),
            None => false,
        }
    }
}

impl<T: ?Sized> Clone for WeakHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: ?Sized> std::fmt::Debug for WeakHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.inner.upgrade().is_some() {
            "live"
        } else {
            "gone"
        };
        write!(f, "WeakHandle({state})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_while_target_is_live() {
        let target = Rc::new(RefCell::new(7_u32));
        let handle = WeakHandle::new(&target);
        assert_eq!(*handle.resolve().unwrap().borrow(), 7);
    }

    #[test]
    fn reports_gone_after_drop() {
        let target = Rc::new(RefCell::new(7_u32));
        let handle = WeakHandle::new(&target);
        drop(target);
        assert!(handle.resolve().is_none());
    }

    #[test]
    fn identity_comparison() {
        let a = Rc::new(RefCell::new(1_u32));
        let b = Rc::new(RefCell::new(1_u32));
        let handle = WeakHandle::new(&a);
        assert!(handle.points_to(&a));
        assert!(!handle.points_to(&b));
    }
}
