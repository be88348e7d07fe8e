//! drawer-core - Core library for the settings drawer row
//!
//! This crate contains the palette and theme resolution, the style builder,
//! the string catalog, and the immutable view tree used by every settings
//! drawer front end (desktop shell and CLI preview).

pub mod config;
pub mod drawer;
pub mod error;
pub mod locale;
pub mod models;
pub mod style;
pub mod tree;
pub mod util;

pub use drawer::{render_tree, PressEvent, SettingsDrawer};
pub use error::{Error, Result};
pub use locale::{Catalog, Localizer};
pub use models::{DrawerProps, Palette, ResolvedTheme, ThemeMode, ThemeProvider};
pub use style::{create_styles, Style, StyleTable};
pub use tree::Node;
