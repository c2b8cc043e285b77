//! Multi-screen skin coordination
//!
//! A host usually has several live screens at once. [`SkinManager`] owns the
//! active theme and a list of weak handles to each screen's [`ScreenSkin`];
//! a theme switch re-skins every screen that is still alive and silently
//! drops the rest. A freshly created screen asks the manager for the active
//! theme and skins itself immediately.

use std::cell::RefCell;
use std::rc::Rc;

use reskin_core::WeakHandle;

use crate::screen::ScreenSkin;
use crate::theme::Theme;

pub type SharedScreenSkin = Rc<RefCell<ScreenSkin>>;

/// Owner of the active theme across screens
pub struct SkinManager {
    theme: Rc<dyn Theme>,
    screens: Vec<WeakHandle<ScreenSkin>>,
}

impl SkinManager {
    pub fn new(theme: Rc<dyn Theme>) -> Self {
        Self {
            theme,
            screens: Vec::new(),
        }
    }

    /// Currently active theme
    pub fn theme(&self) -> &Rc<dyn Theme> {
        &self.theme
    }

    /// Track a screen's skin. The manager never owns the screen.
    pub fn register_screen(&mut self, screen: &SharedScreenSkin) {
        self.screens.push(WeakHandle::new(screen));
    }

    /// Stop tracking a screen, by identity
    pub fn unregister_screen(&mut self, screen: &SharedScreenSkin) {
        if let Some(pos) = self.screens.iter().position(|h| h.points_to(screen)) {
            self.screens.remove(pos);
        }
    }

    /// Switch the active theme and re-skin every live screen.
    ///
    /// Dead screens are pruned here; a screen that failed to unregister
    /// before teardown costs nothing beyond its stale handle.
    pub fn set_theme(&mut self, theme: Rc<dyn Theme>) {
        tracing::debug!(theme = theme.name(), screens = self.screens.len(), "theme switch");
        self.theme = Rc::clone(&theme);
        self.screens.retain(|handle| match handle.resolve() {
            Some(screen) => {
                screen.borrow().re_skin(theme.as_ref());
                true
            }
            None => false,
        });
    }
}
