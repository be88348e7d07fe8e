//! Localized string lookup
//!
//! Strings live in nested JSON tables, one per locale, and are addressed by
//! dotted keys such as `drawer.settings_warning`. Lookups fall back to the
//! default locale, then to a visible placeholder.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{Error, Result};

/// Locale used when a key is missing from the active locale
pub const DEFAULT_LOCALE: &str = "en";

const BUNDLED_TABLES: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en.json")),
    ("es", include_str!("../locales/es.json")),
];

/// Lookup of display text by string key.
pub trait Localizer {
    fn strings(&self, key: &str) -> String;
}

impl<F> Localizer for F
where
    F: Fn(&str) -> String,
{
    fn strings(&self, key: &str) -> String {
        self(key)
    }
}

/// String tables keyed by locale code, with one active locale.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    locale: String,
    tables: BTreeMap<String, Value>,
}

impl Catalog {
    /// An empty catalog. Every lookup yields the missing-key placeholder.
    pub fn empty() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            tables: BTreeMap::new(),
        }
    }

    /// Catalog with the string tables shipped in this crate, `en` active.
    pub fn bundled() -> Self {
        let mut catalog = Self::empty();
        for (locale, json) in BUNDLED_TABLES {
            match serde_json::from_str(json) {
                Ok(table) => {
                    catalog.tables.insert((*locale).to_string(), table);
                }
                Err(error) => {
                    tracing::error!("Bundled string table {locale} is invalid: {error}");
                }
            }
        }
        catalog
    }

    /// Add or replace the string table for a locale.
    pub fn insert_table(&mut self, locale: &str, table: Value) -> Result<()> {
        if !table.is_object() {
            return Err(Error::InvalidInput(format!(
                "string table for {locale} must be a JSON object"
            )));
        }
        self.tables.insert(locale.to_string(), table);
        Ok(())
    }

    /// Switch the active locale.
    pub fn with_locale(mut self, locale: &str) -> Result<Self> {
        if !self.tables.contains_key(locale) {
            return Err(Error::UnknownLocale(locale.to_string()));
        }
        locale.clone_into(&mut self.locale);
        Ok(self)
    }

    /// Active locale code.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Locale codes with a string table, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Resolve a key in one locale without fallback.
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        key.split('.')
            .try_fold(self.tables.get(locale)?, |node, segment| node.get(segment))?
            .as_str()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::bundled()
    }
}

impl Localizer for Catalog {
    fn strings(&self, key: &str) -> String {
        if let Some(text) = self
            .lookup(&self.locale, key)
            .or_else(|| self.lookup(DEFAULT_LOCALE, key))
        {
            return text.to_string();
        }
        tracing::warn!("Missing translation for {} in locale {}", key, self.locale);
        format!("[missing \"{}.{key}\" translation]", self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_resolves_settings_warning() {
        let catalog = Catalog::bundled();
        assert_eq!(catalog.strings("drawer.settings_warning"), "Wallet unprotected");
    }

    #[test]
    fn active_locale_is_used_first() {
        let catalog = Catalog::bundled().with_locale("es").unwrap();
        assert_eq!(catalog.locale(), "es");
        assert_eq!(
            catalog.strings("drawer.settings_warning"),
            "Billetera desprotegida"
        );
    }

    #[test]
    fn missing_key_falls_back_to_default_locale() {
        let catalog = Catalog::bundled().with_locale("es").unwrap();
        assert_eq!(
            catalog.strings("app_settings.networks_desc"),
            "Add and edit custom RPC networks"
        );
    }

    #[test]
    fn missing_everywhere_yields_placeholder() {
        let catalog = Catalog::bundled();
        assert_eq!(
            catalog.strings("drawer.nope"),
            "[missing \"en.drawer.nope\" translation]"
        );
    }

    #[test]
    fn non_leaf_key_is_missing() {
        let catalog = Catalog::bundled();
        assert_eq!(catalog.lookup("en", "drawer"), None);
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let error = Catalog::bundled().with_locale("xx").unwrap_err();
        assert!(matches!(error, Error::UnknownLocale(code) if code == "xx"));
    }

    #[test]
    fn insert_table_adds_locale() {
        let mut catalog = Catalog::empty();
        catalog
            .insert_table(
                "de",
                serde_json::json!({ "drawer": { "settings_warning": "Ungeschützt" } }),
            )
            .unwrap();
        let catalog = catalog.with_locale("de").unwrap();
        assert_eq!(catalog.strings("drawer.settings_warning"), "Ungeschützt");
        assert_eq!(catalog.locales().collect::<Vec<_>>(), vec!["de"]);
    }

    #[test]
    fn insert_table_rejects_non_objects() {
        let mut catalog = Catalog::empty();
        let error = catalog
            .insert_table("de", serde_json::json!([1, 2]))
            .unwrap_err();
        assert!(matches!(error, Error::InvalidInput(_)));
        assert!(catalog.with_locale("de").is_err());
    }

    #[test]
    fn closures_act_as_localizers() {
        let upper = |key: &str| key.to_uppercase();
        assert_eq!(upper.strings("drawer.settings_warning"), "DRAWER.SETTINGS_WARNING");
    }
}
