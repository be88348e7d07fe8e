//! Appearance configuration file
//!
//! A small JSON document choosing the theme mode, the locale, and optionally
//! a complete custom palette and extra string tables:
//!
//! ```json
//! { "theme": "dark", "locale": "es" }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::locale::Catalog;
use crate::models::{resolve_theme, Palette, ThemeMode};
use crate::util::normalize_text_option;

/// Directory name under the platform config directory
pub const CONFIG_DIR_NAME: &str = "settings-drawer";

/// File name of the configuration document
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Appearance settings shared by the drawer front ends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrawerConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default)]
    pub locale: Option<String>,
    /// Replaces the built-in palette of the resolved theme
    #[serde(default)]
    pub palette: Option<Palette>,
    /// String tables by locale, added to or replacing the bundled ones
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub strings: BTreeMap<String, Value>,
}

impl DrawerConfig {
    /// Parse and validate a configuration document.
    pub fn parse(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!("Loading drawer config from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::parse(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(palette) = &self.palette {
            palette.validate()?;
        }
        Ok(())
    }

    /// Palette to render with: the custom one, else the resolved theme's.
    pub fn palette(&self) -> Palette {
        self.palette
            .clone()
            .unwrap_or_else(|| resolve_theme(self.theme).palette().clone())
    }

    /// Bundled string catalog plus configured tables, switched to the
    /// configured locale.
    pub fn catalog(&self) -> Result<Catalog> {
        let mut catalog = Catalog::bundled();
        for (locale, table) in &self.strings {
            catalog.insert_table(locale, table.clone())?;
        }
        match normalize_text_option(self.locale.clone()) {
            Some(locale) => catalog.with_locale(&locale),
            None => Ok(catalog),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::error::Error;
    use crate::locale::Localizer;
    use crate::models::DARK_PALETTE;

    #[test]
    fn empty_document_uses_defaults() {
        let config = DrawerConfig::parse("{}").unwrap();
        assert_eq!(config, DrawerConfig::default());
        assert_eq!(config.catalog().unwrap().locale(), "en");
    }

    #[test]
    fn explicit_dark_theme_selects_dark_palette() {
        let config = DrawerConfig::parse(r#"{ "theme": "dark" }"#).unwrap();
        assert_eq!(config.palette(), DARK_PALETTE);
    }

    #[test]
    fn custom_palette_overrides_theme() {
        let config = DrawerConfig::parse(
            r##"{
                "theme": "dark",
                "palette": {
                    "background": { "default": "#000" },
                    "border": { "muted": "#111" },
                    "text": { "default": "#fff", "alternative": "#ccc" },
                    "icon": { "alternative": "#bbb" }
                }
            }"##,
        )
        .unwrap();
        assert_eq!(config.palette().background.default, "#000");
    }

    #[test]
    fn invalid_palette_color_is_rejected() {
        let error = DrawerConfig::parse(
            r##"{
                "palette": {
                    "background": { "default": "white" },
                    "border": { "muted": "#111" },
                    "text": { "default": "#fff", "alternative": "#ccc" },
                    "icon": { "alternative": "#bbb" }
                }
            }"##,
        )
        .unwrap_err();
        assert!(matches!(
            error,
            Error::InvalidColor { role: "background.default", .. }
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let error = DrawerConfig::parse(r#"{ "font": "mono" }"#).unwrap_err();
        assert!(error.to_string().contains("unknown field"));
    }

    #[test]
    fn locale_selects_catalog() {
        let config = DrawerConfig::parse(r#"{ "locale": "es" }"#).unwrap();
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.strings("app_settings.lock"), "Bloquear");

        let config = DrawerConfig::parse(r#"{ "locale": "  " }"#).unwrap();
        assert_eq!(config.catalog().unwrap().locale(), "en");

        let config = DrawerConfig::parse(r#"{ "locale": "zz" }"#).unwrap();
        assert!(matches!(config.catalog(), Err(Error::UnknownLocale(_))));
    }

    #[test]
    fn configured_string_tables_extend_the_catalog() {
        let config = DrawerConfig::parse(
            r#"{
                "locale": "de",
                "strings": {
                    "de": { "drawer": { "settings_warning": "Wallet ungeschützt" } }
                }
            }"#,
        )
        .unwrap();
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.locales().collect::<Vec<_>>(), vec!["de", "en", "es"]);
        assert_eq!(catalog.strings("drawer.settings_warning"), "Wallet ungeschützt");
        assert_eq!(catalog.strings("app_settings.lock"), "Lock");
    }

    #[test]
    fn non_object_string_table_is_rejected() {
        let config = DrawerConfig::parse(r#"{ "strings": { "de": "Hallo" } }"#).unwrap();
        assert!(matches!(config.catalog(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "theme": "light", "locale": "es" }}"#).unwrap();
        let config = DrawerConfig::load(file.path()).unwrap();
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.locale.as_deref(), Some("es"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = DrawerConfig::load(&dir.path().join(CONFIG_FILE_NAME)).unwrap_err();
        assert!(matches!(error, Error::Io(_)));
    }
}
