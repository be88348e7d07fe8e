//! The settings drawer row: render pass and tap dispatch

use std::fmt;

use crate::locale::Localizer;
use crate::models::{DrawerProps, Palette, ThemeProvider};
use crate::style::{create_styles, Style};
use crate::tree::Node;

/// String key of the warning message shown in the notification banner
pub const SETTINGS_WARNING_KEY: &str = "drawer.settings_warning";

/// Glyph of the trailing arrow
pub const ARROW_RIGHT_GLYPH: &str = "angle-right";

/// Size of the trailing arrow glyph
pub const ARROW_RIGHT_SIZE: u16 = 36;

/// Event delivered to a row's press handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PressEvent {
    /// Identifier of the pressed row, if it has one
    pub test_id: Option<String>,
}

impl PressEvent {
    pub const fn new(test_id: Option<String>) -> Self {
        Self { test_id }
    }
}

/// Press handler of a row.
pub type OnPress = Box<dyn Fn(&PressEvent)>;

/// Render one row into its view tree.
///
/// Pure: the same props, palette and strings always produce the same tree.
pub fn render_tree(props: &DrawerProps, colors: &Palette, strings: &impl Localizer) -> Node {
    let styles = create_styles(colors, props.title_color_override());

    let mut content = vec![Node::text(styles.title.clone(), props.title.as_str())];
    if let Some(description) = props.visible_description() {
        content.push(Node::text(styles.description.clone(), description));
    }

    let mut warning_slot = Vec::new();
    if props.warning {
        warning_slot.push(Node::Notification {
            style: styles.warning.clone(),
            is_warning: true,
            is_notification: true,
            children: vec![Node::text(
                styles.menu_item_warning_text.clone(),
                strings.strings(SETTINGS_WARNING_KEY),
            )],
        });
    }
    content.push(Node::view(Style::default(), warning_slot));

    let mut row = vec![Node::view(styles.content.clone(), content)];
    if props.render_arrow_right {
        row.push(Node::view(
            styles.action.clone(),
            vec![Node::Icon {
                name: ARROW_RIGHT_GLYPH.to_string(),
                size: ARROW_RIGHT_SIZE,
                style: styles.icon.clone(),
            }],
        ));
    }

    Node::Touchable {
        test_id: props.test_id.clone(),
        children: vec![Node::view(styles.root_for(props.no_border), row)],
    }
}

/// A settings drawer row with its optional press handler.
pub struct SettingsDrawer {
    props: DrawerProps,
    on_press: Option<OnPress>,
}

impl SettingsDrawer {
    pub fn new(props: DrawerProps) -> Self {
        Self {
            props,
            on_press: None,
        }
    }

    /// Attach a handler invoked on every tap, ignoring the press event.
    #[must_use]
    pub fn on_press(self, handler: impl Fn() + 'static) -> Self {
        self.on_press_event(move |_| handler())
    }

    /// Attach a handler invoked with the press event on every tap.
    #[must_use]
    pub fn on_press_event(mut self, handler: impl Fn(&PressEvent) + 'static) -> Self {
        self.on_press = Some(Box::new(handler));
        self
    }

    pub const fn props(&self) -> &DrawerProps {
        &self.props
    }

    /// Render against the provider's current palette.
    pub fn render(&self, theme: &impl ThemeProvider, strings: &impl Localizer) -> Node {
        render_tree(&self.props, theme.colors(), strings)
    }

    /// Dispatch a tap. Without a handler this does nothing.
    pub fn press(&self) {
        match &self.on_press {
            Some(handler) => {
                tracing::debug!("Settings drawer pressed: {}", self.props.title);
                handler(&PressEvent::new(self.props.test_id.clone()));
            }
            None => tracing::trace!("Settings drawer {} has no press handler", self.props.title),
        }
    }
}

impl fmt::Debug for SettingsDrawer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsDrawer")
            .field("props", &self.props)
            .field("on_press", &self.on_press.is_some())
            .finish()
    }
}

impl From<DrawerProps> for SettingsDrawer {
    fn from(props: DrawerProps) -> Self {
        Self::new(props)
    }
}
