//! Settings drawer row properties

use serde::{Deserialize, Serialize};

const fn default_render_arrow_right() -> bool {
    true
}

/// Input properties for one settings drawer row.
///
/// Field names serialize with the camelCase prop names hosts already use
/// (`noBorder`, `renderArrowRight`, `testID`, `titleColor`). Missing fields
/// take the documented defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DrawerProps {
    /// Row title, rendered as-is (empty included)
    #[serde(default)]
    pub title: String,
    /// Additional descriptive text about this option
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Disable bottom border
    #[serde(default)]
    pub no_border: bool,
    /// Display the settings warning notification
    #[serde(default)]
    pub warning: bool,
    /// Display the trailing arrow (default `true`)
    #[serde(default = "default_render_arrow_right")]
    pub render_arrow_right: bool,
    /// Identifier attached to the tappable region
    #[serde(default, rename = "testID", skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    /// Title color override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
}

impl Default for DrawerProps {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            no_border: false,
            warning: false,
            render_arrow_right: default_render_arrow_right(),
            test_id: None,
            title_color: None,
        }
    }
}

impl DrawerProps {
    /// Create props for a row with the given title and default flags.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_no_border(mut self, no_border: bool) -> Self {
        self.no_border = no_border;
        self
    }

    #[must_use]
    pub fn with_warning(mut self, warning: bool) -> Self {
        self.warning = warning;
        self
    }

    #[must_use]
    pub fn with_arrow_right(mut self, render_arrow_right: bool) -> Self {
        self.render_arrow_right = render_arrow_right;
        self
    }

    #[must_use]
    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    #[must_use]
    pub fn with_title_color(mut self, title_color: impl Into<String>) -> Self {
        self.title_color = Some(title_color.into());
        self
    }

    /// Description text, if one was supplied and is non-empty.
    pub fn visible_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|text| !text.is_empty())
    }

    /// Title color override, if one was supplied and is non-empty.
    pub fn title_color_override(&self) -> Option<&str> {
        self.title_color.as_deref().filter(|color| !color.is_empty())
    }
}
