//! Settings Drawer Desktop Preview
//!
//! A settings screen built from `SettingsDrawer` rows, for checking themes
//! and locales by hand.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod state;

use std::path::PathBuf;

use drawer_core::config::{DrawerConfig, CONFIG_DIR_NAME, CONFIG_FILE_NAME};

/// Location of the user's drawer config file
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load the user config, falling back to defaults on any problem
fn load_config() -> DrawerConfig {
    let Some(path) = config_path().filter(|path| path.exists()) else {
        tracing::debug!("No drawer config file found, using defaults");
        return DrawerConfig::default();
    };

    match DrawerConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config {}: {}", path.display(), e);
            DrawerConfig::default()
        }
    }
}

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("drawer=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting settings drawer preview...");

    let config = load_config();

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(app::App);
}
