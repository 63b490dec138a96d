//! Page-session view state: navbar menu, theme, language, scroll treatment.
//!
//! DESIGN
//! ======
//! Four independent flags live in one plain struct that the app root wraps
//! in an `RwSignal` and provides via context. Each operation touches exactly
//! one flag, so no combination of flags changes another's behavior. Nothing
//! here is persisted; a page load starts from `Default`.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::state::locale::{Locale, NavItem};
use crate::state::theme::Theme;
use crate::util::scroll::is_past_threshold;

/// View flags for the landing page chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Mobile dropdown visibility.
    pub menu_open: bool,
    pub theme: Theme,
    pub locale: Locale,
    /// Whether the page is scrolled past the navbar threshold.
    /// Written only through `on_scroll`.
    pub scrolled: bool,
}

impl ViewState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Hide the dropdown after a link in it was followed.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Switch palettes and return the new one.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn set_language(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn toggle_language(&mut self) {
        self.locale = self.locale.other();
    }

    /// Recompute the scroll flag from a vertical offset.
    ///
    /// Returns `true` when the flag changed, so callers can skip a signal
    /// write (and the re-render it triggers) on every scroll tick.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let next = is_past_threshold(offset);
        let changed = next != self.scrolled;
        self.scrolled = next;
        changed
    }

    /// Navigation entries for the active locale.
    pub fn nav_items(&self) -> Vec<NavItem> {
        self.locale.nav_items()
    }

    /// Navbar modifier class for the current scroll treatment.
    pub fn navbar_class(&self) -> &'static str {
        if self.scrolled {
            "navbar navbar--scrolled"
        } else {
            "navbar navbar--top"
        }
    }
}
