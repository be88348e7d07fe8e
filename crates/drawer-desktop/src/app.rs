//! Main application component

use dioxus::prelude::*;

use drawer_core::config::DrawerConfig;
use drawer_core::models::resolve_theme;
use drawer_core::{Catalog, Localizer, ResolvedTheme};

use crate::components::SettingsDrawer;
use crate::state::AppState;

/// Title color of destructive rows
const DANGER_TITLE_COLOR: &str = "#D73A49";

/// Root application component
#[component]
pub fn App() -> Element {
    let config = use_context::<DrawerConfig>();

    let mut theme = use_signal(|| resolve_theme(config.theme));
    let mut custom_palette = use_signal(|| config.palette.clone());
    let catalog = use_signal(|| {
        config.catalog().unwrap_or_else(|e| {
            tracing::error!("Failed to select locale: {}", e);
            Catalog::bundled()
        })
    });
    let mut last_pressed = use_signal(|| None::<String>);

    let state = use_context_provider(|| AppState {
        theme,
        custom_palette,
        catalog,
    });

    let colors = state.colors();
    let current_theme = theme();
    let theme_attr = if current_theme.is_dark() { "dark" } else { "light" };
    let toggle_label = if current_theme.is_dark() {
        "Light theme"
    } else {
        "Dark theme"
    };

    let strings = catalog.read();
    let screen_title = strings.strings("app_settings.title");
    let rows = [
        (
            "general-settings",
            strings.strings("app_settings.general_title"),
            strings.strings("app_settings.general_desc"),
            false,
        ),
        (
            "security-settings",
            strings.strings("app_settings.security_title"),
            strings.strings("app_settings.security_desc"),
            true,
        ),
        (
            "contacts-settings",
            strings.strings("app_settings.contacts_title"),
            strings.strings("app_settings.contacts_desc"),
            false,
        ),
        (
            "networks-settings",
            strings.strings("app_settings.networks_title"),
            strings.strings("app_settings.networks_desc"),
            false,
        ),
    ];
    let lock_title = strings.strings("app_settings.lock");
    drop(strings);

    let mut press = move |test_id: &'static str| {
        tracing::info!("Settings row pressed: {}", test_id);
        last_pressed.set(Some(test_id.to_string()));
    };

    rsx! {
        div {
            class: "app-container",
            "data-theme": "{theme_attr}",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                background: {colors.background.default};
                color: {colors.text.default};
            ",

            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 16px;
                ",
                h1 {
                    style: "margin: 0; font-size: 24px;",
                    "{screen_title}"
                }
                button {
                    r#type: "button",
                    style: "
                        padding: 6px 10px;
                        border: 1px solid {colors.border.muted};
                        border-radius: 8px;
                        background: transparent;
                        color: {colors.text.default};
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        let next = if theme().is_dark() {
                            ResolvedTheme::Light
                        } else {
                            ResolvedTheme::Dark
                        };
                        tracing::debug!("Switching preview theme to {:?}", next);
                        theme.set(next);
                        custom_palette.set(None);
                    },
                    "{toggle_label}"
                }
            }

            div {
                style: "padding-left: 16px;",
                for (test_id, title, description, warning) in rows {
                    SettingsDrawer {
                        key: "{test_id}",
                        title,
                        description,
                        warning,
                        test_id: test_id.to_string(),
                        on_press: move |_| press(test_id),
                    }
                }
                SettingsDrawer {
                    title: lock_title,
                    no_border: true,
                    render_arrow_right: false,
                    title_color: DANGER_TITLE_COLOR.to_string(),
                    test_id: "lock-settings".to_string(),
                    on_press: move |_| press("lock-settings"),
                }
            }

            if let Some(test_id) = last_pressed() {
                p {
                    style: "
                        margin: 0;
                        padding: 16px;
                        font-size: 12px;
                        color: {colors.text.alternative};
                    ",
                    "Last pressed: {test_id}"
                }
            }
        }
    }
}
