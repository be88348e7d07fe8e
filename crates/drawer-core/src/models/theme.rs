//! Theme modes and color palettes

use std::borrow::Cow;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::is_hex_color;

/// A color value, usually a hex string such as `#24272A`.
pub type Color = Cow<'static, str>;

/// Cached system dark mode preference (detected once per process)
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Theme mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
    /// Follow system preference
    #[default]
    System,
}

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Check if the theme is dark
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Get the color palette for this theme
    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

/// Resolve theme mode to actual light/dark theme
pub fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    let system_dark = matches!(mode, ThemeMode::System) && is_system_dark_mode();
    resolve_theme_with(mode, system_dark)
}

/// Resolve theme mode against an explicit system preference.
pub const fn resolve_theme_with(mode: ThemeMode, system_dark: bool) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System if system_dark => ResolvedTheme::Dark,
        ThemeMode::System => ResolvedTheme::Light,
    }
}

/// Detect system dark mode preference (cached after first call)
pub fn is_system_dark_mode() -> bool {
    *SYSTEM_DARK_MODE.get_or_init(detect_system_dark_mode)
}

#[cfg(target_os = "linux")]
fn detect_system_dark_mode() -> bool {
    if let Ok(theme) = std::env::var("GTK_THEME") {
        let is_dark = theme.to_lowercase().contains("dark");
        tracing::debug!(
            "System theme detected from GTK_THEME: {}",
            if is_dark { "dark" } else { "light" }
        );
        is_dark
    } else {
        tracing::debug!("GTK_THEME not set, defaulting to light mode");
        false
    }
}

#[cfg(not(target_os = "linux"))]
fn detect_system_dark_mode() -> bool {
    tracing::debug!("Unsupported platform for system theme detection, defaulting to light mode");
    false
}

/// Background color roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackgroundColors {
    pub default: Color,
}

/// Border color roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BorderColors {
    pub muted: Color,
}

/// Text color roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextColors {
    pub default: Color,
    pub alternative: Color,
}

/// Icon color roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconColors {
    pub alternative: Color,
}

/// Semantic color palette supplied by the host theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    pub background: BackgroundColors,
    pub border: BorderColors,
    pub text: TextColors,
    pub icon: IconColors,
}

/// Light theme colors
pub static LIGHT_PALETTE: Palette = Palette {
    background: BackgroundColors {
        default: Cow::Borrowed("#FFFFFF"),
    },
    border: BorderColors {
        muted: Cow::Borrowed("#D6D9DC"),
    },
    text: TextColors {
        default: Cow::Borrowed("#24272A"),
        alternative: Cow::Borrowed("#535A61"),
    },
    icon: IconColors {
        alternative: Cow::Borrowed("#535A61"),
    },
};

/// Dark theme colors
pub static DARK_PALETTE: Palette = Palette {
    background: BackgroundColors {
        default: Cow::Borrowed("#24272A"),
    },
    border: BorderColors {
        muted: Cow::Borrowed("#3B4046"),
    },
    text: TextColors {
        default: Cow::Borrowed("#FFFFFF"),
        alternative: Cow::Borrowed("#BBC0C5"),
    },
    icon: IconColors {
        alternative: Cow::Borrowed("#BBC0C5"),
    },
};

impl Palette {
    /// Check that every role holds a hex color.
    pub fn validate(&self) -> Result<()> {
        let roles: [(&'static str, &Color); 5] = [
            ("background.default", &self.background.default),
            ("border.muted", &self.border.muted),
            ("text.default", &self.text.default),
            ("text.alternative", &self.text.alternative),
            ("icon.alternative", &self.icon.alternative),
        ];
        for (role, value) in roles {
            if !is_hex_color(value) {
                return Err(Error::InvalidColor {
                    role,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Read-only access to the current palette.
pub trait ThemeProvider {
    fn colors(&self) -> &Palette;
}

impl ThemeProvider for Palette {
    fn colors(&self) -> &Palette {
        self
    }
}

impl ThemeProvider for ResolvedTheme {
    fn colors(&self) -> &Palette {
        self.palette()
    }
}
