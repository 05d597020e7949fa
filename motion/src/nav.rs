//! Overlay navigation menu state.
//!
//! The menu has two states, `Closed` (initial) and `Open`. Only an explicit
//! toggle from `Closed` can open it. `close` and the wide-viewport resize guard
//! always land on `Closed`.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::WIDE_BREAKPOINT_PX;

/// Open/closed state of the overlay menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Owns the menu state for one mounted page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavController {
    state: MenuState,
}

impl NavController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Flip between `Closed` and `Open`.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        log::debug!("nav: menu toggled to {:?}", self.state);
    }

    /// Force the menu closed. Called whenever a navigation link is followed.
    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }

    /// React to a viewport resize.
    ///
    /// Closes an open menu once the viewport is at least
    /// [`WIDE_BREAKPOINT_PX`] wide and returns `true` when that happened.
    /// Narrower viewports leave the state untouched.
    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        if viewport_width >= WIDE_BREAKPOINT_PX && self.is_open() {
            self.close();
            log::debug!("nav: closed by resize to {viewport_width}px");
            return true;
        }
        false
    }

    /// Label for the toggle control.
    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        if self.is_open() { "Close" } else { "Menu" }
    }

    /// Value for the toggle control's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(&self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}
