//! Renders a core view tree with Dioxus elements

use dioxus::prelude::*;

use drawer_core::style::{FlexDirection, Style};
use drawer_core::{Node, PressEvent};

use super::{Icon, SettingsNotification};

const VIEW_BASE_STYLE: &str = "box-sizing: border-box;";

/// One node of the rendered tree. Taps on a touchable call `on_press`.
#[component]
pub(super) fn NodeView(node: Node, on_press: Option<EventHandler<PressEvent>>) -> Element {
    match node {
        Node::Touchable { test_id, children } => {
            let event = PressEvent::new(test_id.clone());
            rsx! {
                div {
                    class: "settings-drawer",
                    role: "button",
                    "data-testid": test_id,
                    style: "cursor: pointer;",
                    onclick: move |_| {
                        if let Some(handler) = &on_press {
                            handler.call(event.clone());
                        }
                    },
                    for child in children {
                        NodeView { node: child }
                    }
                }
            }
        }
        Node::View { style, children } => {
            // Views stack their children vertically unless the style says otherwise.
            let column = Style {
                flex_direction: Some(FlexDirection::Column),
                ..Style::default()
            };
            let css = column.merge(&style).to_css();
            rsx! {
                div {
                    style: "{VIEW_BASE_STYLE} {css}",
                    for child in children {
                        NodeView { node: child }
                    }
                }
            }
        }
        Node::Text { style, content } => {
            let css = style.to_css();
            rsx! {
                p {
                    style: "margin: 0; {css}",
                    "{content}"
                }
            }
        }
        Node::Notification {
            style,
            is_warning,
            is_notification,
            children,
        } => rsx! {
            SettingsNotification {
                style: style.to_css(),
                is_warning,
                is_notification,
                for child in children {
                    NodeView { node: child }
                }
            }
        },
        Node::Icon { name, size, style } => rsx! {
            Icon { name, size, style: style.to_css() }
        },
    }
}
