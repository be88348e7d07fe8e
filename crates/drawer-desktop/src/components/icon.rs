//! Glyph renderer

use dioxus::prelude::*;

/// Map an icon name to the character drawn for it.
fn glyph_for(name: &str) -> Option<&'static str> {
    match name {
        "angle-right" => Some("\u{203A}"),
        _ => None,
    }
}

/// Draws a named glyph at the given size.
#[component]
pub fn Icon(#[props(into)] name: String, size: u16, #[props(into, default)] style: String) -> Element {
    let Some(glyph) = glyph_for(&name) else {
        tracing::warn!("Unknown icon glyph: {}", name);
        return rsx! {};
    };

    rsx! {
        span {
            class: "icon",
            "aria-hidden": "true",
            style: "
                display: inline-block;
                font-size: {size}px;
                line-height: 1;
                {style}
            ",
            "{glyph}"
        }
    }
}
