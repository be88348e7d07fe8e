//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use drawer_core::{Catalog, Palette, ResolvedTheme};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Resolved theme (light/dark based on config and system preference)
    pub theme: Signal<ResolvedTheme>,
    /// Custom palette from the config file, replacing the theme palette
    pub custom_palette: Signal<Option<Palette>>,
    /// Localized strings with the active locale
    pub catalog: Signal<Catalog>,
}

impl AppState {
    /// Palette currently in effect
    pub fn colors(&self) -> Palette {
        (self.custom_palette)().unwrap_or_else(|| (self.theme)().palette().clone())
    }
}
