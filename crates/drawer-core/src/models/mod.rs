//! Data models for the settings drawer

mod props;
mod theme;

pub use props::DrawerProps;
pub use theme::{
    is_system_dark_mode, resolve_theme, resolve_theme_with, BackgroundColors, BorderColors, Color,
    IconColors, Palette, ResolvedTheme, TextColors, ThemeMode, ThemeProvider, DARK_PALETTE,
    LIGHT_PALETTE,
};
