//! Settings drawer row component

use dioxus::prelude::*;

use drawer_core::{render_tree, DrawerProps, PressEvent};

use super::node_view::NodeView;
use crate::state::AppState;

/// A tappable settings row: title, optional description and warning, and
/// an optional trailing arrow.
#[component]
pub fn SettingsDrawer(
    #[props(into)] title: String,
    description: Option<String>,
    #[props(default)] no_border: bool,
    on_press: Option<EventHandler<PressEvent>>,
    #[props(default)] warning: bool,
    #[props(default = true)] render_arrow_right: bool,
    test_id: Option<String>,
    title_color: Option<String>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = state.colors();
    let catalog = state.catalog.read();

    let props = DrawerProps {
        title,
        description,
        no_border,
        warning,
        render_arrow_right,
        test_id,
        title_color,
    };
    let tree = render_tree(&props, &colors, &*catalog);

    rsx! {
        NodeView { node: tree, on_press }
    }
}
