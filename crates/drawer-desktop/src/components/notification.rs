//! Notification banner

use dioxus::prelude::*;

const WARNING_BACKGROUND: &str = "#F8C00020";
const WARNING_BORDER: &str = "#F8C000";
const INFO_BACKGROUND: &str = "#037DD620";
const INFO_BORDER: &str = "#037DD6";

/// Inline CSS of the banner box for the given kind flags.
fn banner_style(is_warning: bool, is_notification: bool) -> String {
    let (background, border) = if is_warning {
        (WARNING_BACKGROUND, WARNING_BORDER)
    } else {
        (INFO_BACKGROUND, INFO_BORDER)
    };
    let padding = if is_notification { "4px 8px" } else { "12px 16px" };
    format!(
        "display: flex; align-items: center; gap: 6px; padding: {padding}; \
         border: 1px solid {border}; border-radius: 8px; background: {background};"
    )
}

/// Banner used for warnings and notices in settings screens.
#[component]
pub fn SettingsNotification(
    #[props(into, default)] style: String,
    #[props(default)] is_warning: bool,
    #[props(default)] is_notification: bool,
    children: Element,
) -> Element {
    let banner = banner_style(is_warning, is_notification);

    rsx! {
        div {
            class: "settings-notification",
            role: if is_warning { "alert" } else { "status" },
            style: "{banner} {style}",
            {children}
        }
    }
}
