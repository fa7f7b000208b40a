//! Local UI chrome state (theme, sidebar).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the auth state so the shell can evolve
//! independently of the session model.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    /// Browser `prefers-color-scheme: dark`, sampled at startup.
    pub system_prefers_dark: bool,
    pub sidebar_expanded: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { theme: Theme::System, system_prefers_dark: false, sidebar_expanded: true }
    }
}

impl UiState {
    /// Effective darkness after resolving [`Theme::System`].
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark(self.system_prefers_dark)
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_expanded = !self.sidebar_expanded;
    }

    /// Advance to the next theme and return it.
    pub fn cycle_theme(&mut self) -> Theme {
        self.theme = self.theme.next();
        self.theme
    }
}
