//! Theme preference: persistence, system detection, and application.
//!
//! Reads the user's choice from `localStorage` and applies a `data-theme`
//! attribute to the `<html>` element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op so server rendering stays deterministic (always light).

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{LOGO_DARK_SRC, LOGO_LIGHT_SRC, THEME_STORAGE_KEY};

use super::storage;

/// User-selected color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    /// Follow `prefers-color-scheme`.
    #[default]
    System,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// Toggle order: light -> dark -> system -> light.
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    pub fn is_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_prefers_dark,
        }
    }

    /// Toggle button glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
            Self::System => "◐",
        }
    }
}

/// Brand logo variant for the effective background.
pub fn logo_src(dark: bool) -> &'static str {
    if dark { LOGO_DARK_SRC } else { LOGO_LIGHT_SRC }
}

/// Read the stored preference, defaulting to [`Theme::System`].
pub fn read_preference() -> Theme {
    storage::get_item(THEME_STORAGE_KEY)
        .ok()
        .flatten()
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or_default()
}

/// Persist `theme` for future visits.
pub fn persist(theme: Theme) {
    if let Err(e) = storage::set_item(THEME_STORAGE_KEY, theme.as_str()) {
        log::debug!("theme preference not saved: {e}");
    }
}

/// Whether the browser reports a dark color-scheme preference.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Value written to `data-theme`.
pub fn theme_attr(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Set `data-theme` on the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            log::debug!("no document element; theme not applied");
            return;
        };
        if let Err(e) = root.set_attribute("data-theme", theme_attr(dark)) {
            log::debug!("theme attribute not set: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}
