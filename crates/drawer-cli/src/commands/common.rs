use std::path::{Path, PathBuf};

use drawer_core::config::{DrawerConfig, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use drawer_core::util::normalize_text_option;
use drawer_core::{Catalog, Palette, ThemeMode};

use crate::error::CliError;

/// Palette and strings a command renders with
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub palette: Palette,
    pub catalog: Catalog,
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load the config file: an explicit path must exist, the default one may not.
pub fn load_config(explicit_path: Option<&Path>) -> Result<DrawerConfig, CliError> {
    if let Some(path) = explicit_path {
        if !path.exists() {
            return Err(CliError::ConfigNotFound(path.display().to_string()));
        }
        return Ok(DrawerConfig::load(path)?);
    }

    match default_config_path().filter(|path| path.exists()) {
        Some(path) => Ok(DrawerConfig::load(&path)?),
        None => {
            tracing::debug!("No drawer config file found, using defaults");
            Ok(DrawerConfig::default())
        }
    }
}

/// Apply command-line overrides. An explicit theme replaces any custom palette.
pub fn apply_overrides(
    mut config: DrawerConfig,
    theme: Option<ThemeMode>,
    locale: Option<String>,
) -> DrawerConfig {
    if let Some(theme) = theme {
        config.theme = theme;
        config.palette = None;
    }
    if let Some(locale) = normalize_text_option(locale) {
        config.locale = Some(locale);
    }
    config
}

pub fn resolve_context(
    explicit_path: Option<&Path>,
    theme: Option<ThemeMode>,
    locale: Option<String>,
) -> Result<RenderContext, CliError> {
    let config = apply_overrides(load_config(explicit_path)?, theme, locale);
    Ok(RenderContext {
        palette: config.palette(),
        catalog: config.catalog()?,
    })
}
