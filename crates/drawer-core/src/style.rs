//! Style records and the settings drawer style table
//!
//! Styles are plain data. A [`StyleTable`] is derived from a [`Palette`] and
//! an optional title color, and nothing else, so rebuilding it on every
//! render always yields the same values.

use std::borrow::Cow;

use serde::Serialize;

use crate::models::{Color, Palette};

/// Font family of the host's regular text style
pub const FONT_FAMILY_REGULAR: &str = "EuclidCircularB-Regular";

/// Font weight of the host's regular text style
pub const FONT_WEIGHT_REGULAR: u16 = 400;

/// Main axis of a flex container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FlexDirection {
    Row,
    Column,
}

/// Main-axis alignment of a flex container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Justify {
    FlexStart,
    Center,
    FlexEnd,
}

/// Cross-axis alignment of a single child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    FlexStart,
    Center,
    FlexEnd,
}

/// Positioning scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Position {
    Relative,
    Absolute,
}

impl FlexDirection {
    const fn css(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
        }
    }
}

impl Justify {
    const fn css(self) -> &'static str {
        match self {
            Self::FlexStart => "flex-start",
            Self::Center => "center",
            Self::FlexEnd => "flex-end",
        }
    }
}

impl Align {
    const fn css(self) -> &'static str {
        match self {
            Self::FlexStart => "flex-start",
            Self::Center => "center",
            Self::FlexEnd => "flex-end",
        }
    }
}

impl Position {
    const fn css(self) -> &'static str {
        match self {
            Self::Relative => "relative",
            Self::Absolute => "absolute",
        }
    }
}

/// A style record. Unset properties inherit from whatever it is merged onto.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_width: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<Justify>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_vertical: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_horizontal: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<Cow<'static, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<u16>,
}

macro_rules! merge_fields {
    ($base:expr, $over:expr, $($field:ident),+ $(,)?) => {
        Style {
            $($field: $over.$field.clone().or_else(|| $base.$field.clone()),)+
        }
    };
}

impl Style {
    /// The host's regular text style.
    fn normal_font() -> Self {
        Self {
            font_family: Some(Cow::Borrowed(FONT_FAMILY_REGULAR)),
            font_weight: Some(FONT_WEIGHT_REGULAR),
            ..Self::default()
        }
    }

    /// Compose `other` on top of `self`; properties set in `other` win.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        merge_fields!(
            self,
            other,
            background_color,
            border_bottom_color,
            border_bottom_width,
            flex,
            flex_direction,
            justify_content,
            align_self,
            min_height,
            padding_vertical,
            padding_horizontal,
            padding_right,
            margin_top,
            margin_bottom,
            position,
            bottom,
            left,
            color,
            font_family,
            font_weight,
            font_size,
            line_height,
        )
    }

    /// Inline CSS declarations for this record, `px` for lengths.
    pub fn to_css(&self) -> String {
        let mut declarations = Vec::new();
        let mut push = |property: &str, value: &dyn std::fmt::Display| {
            declarations.push(format!("{property}: {value};"));
        };
        let px = |value: u16| format!("{value}px");

        if let Some(color) = &self.background_color {
            push("background-color", color);
        }
        if let Some(color) = &self.border_bottom_color {
            push("border-bottom-color", color);
        }
        if let Some(width) = self.border_bottom_width {
            push("border-bottom-style", &"solid");
            push("border-bottom-width", &px(width));
        }
        // Flex containers stack vertically unless a direction is given.
        let direction = match (self.flex_direction, self.justify_content) {
            (Some(direction), _) => Some(direction),
            (None, Some(_)) => Some(FlexDirection::Column),
            (None, None) => None,
        };
        if direction.is_some() {
            push("display", &"flex");
        }
        if let Some(flex) = self.flex {
            push("flex", &flex);
        }
        if let Some(direction) = direction {
            push("flex-direction", &direction.css());
        }
        if let Some(justify) = self.justify_content {
            push("justify-content", &justify.css());
        }
        if let Some(align) = self.align_self {
            push("align-self", &align.css());
        }
        if let Some(height) = self.min_height {
            push("min-height", &px(height));
        }
        if let Some(padding) = self.padding_vertical {
            push("padding-top", &px(padding));
            push("padding-bottom", &px(padding));
        }
        if let Some(padding) = self.padding_horizontal {
            push("padding-left", &px(padding));
            push("padding-right", &px(padding));
        }
        if let Some(padding) = self.padding_right {
            push("padding-right", &px(padding));
        }
        if let Some(margin) = self.margin_top {
            push("margin-top", &px(margin));
        }
        if let Some(margin) = self.margin_bottom {
            push("margin-bottom", &px(margin));
        }
        if let Some(position) = self.position {
            push("position", &position.css());
        }
        if let Some(bottom) = self.bottom {
            push("bottom", &px(bottom));
        }
        if let Some(left) = self.left {
            push("left", &px(left));
        }
        if let Some(color) = &self.color {
            push("color", color);
        }
        if let Some(family) = &self.font_family {
            push("font-family", &format!("'{family}'"));
        }
        if let Some(weight) = self.font_weight {
            push("font-weight", &weight);
        }
        if let Some(size) = self.font_size {
            push("font-size", &px(size));
        }
        if let Some(height) = self.line_height {
            push("line-height", &px(height));
        }
        declarations.join(" ")
    }
}

/// Named styles of the settings drawer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleTable {
    pub root: Style,
    pub content: Style,
    pub title: Style,
    pub description: Style,
    pub action: Style,
    pub icon: Style,
    pub no_border: Style,
    pub warning: Style,
    pub menu_item_warning_text: Style,
}

impl StyleTable {
    /// Style records keyed by their host-facing names, in declaration order.
    pub fn entries(&self) -> [(&'static str, &Style); 9] {
        [
            ("root", &self.root),
            ("content", &self.content),
            ("title", &self.title),
            ("description", &self.description),
            ("action", &self.action),
            ("icon", &self.icon),
            ("noBorder", &self.no_border),
            ("warning", &self.warning),
            ("menuItemWarningText", &self.menu_item_warning_text),
        ]
    }

    /// Root style, with the border suppressed when `no_border` is set.
    pub fn root_for(&self, no_border: bool) -> Style {
        if no_border {
            self.root.merge(&self.no_border)
        } else {
            self.root.clone()
        }
    }
}

/// Build the style table for a palette and optional title color.
///
/// An empty `title_color` is treated as no override.
pub fn create_styles(colors: &Palette, title_color: Option<&str>) -> StyleTable {
    let title_color = title_color
        .filter(|color| !color.is_empty())
        .map_or_else(|| colors.text.default.clone(), |color| Cow::Owned(color.to_string()));

    StyleTable {
        root: Style {
            background_color: Some(colors.background.default.clone()),
            border_bottom_color: Some(colors.border.muted.clone()),
            border_bottom_width: Some(1),
            flex_direction: Some(FlexDirection::Row),
            min_height: Some(100),
            padding_vertical: Some(18),
            ..Style::default()
        },
        content: Style {
            flex: Some(1),
            justify_content: Some(Justify::Center),
            ..Style::default()
        },
        title: Style {
            color: Some(title_color),
            font_size: Some(20),
            margin_bottom: Some(8),
            ..Style::normal_font()
        },
        description: Style {
            color: Some(colors.text.alternative.clone()),
            font_size: Some(14),
            line_height: Some(20),
            padding_right: Some(8),
            ..Style::normal_font()
        },
        action: Style {
            flex: Some(0),
            padding_horizontal: Some(16),
            justify_content: Some(Justify::Center),
            ..Style::default()
        },
        icon: Style {
            bottom: Some(8),
            color: Some(colors.icon.alternative.clone()),
            left: Some(4),
            position: Some(Position::Relative),
            ..Style::default()
        },
        no_border: Style {
            border_bottom_width: Some(0),
            ..Style::default()
        },
        warning: Style {
            align_self: Some(Align::FlexStart),
            margin_top: Some(20),
            ..Style::default()
        },
        menu_item_warning_text: Style {
            color: Some(colors.text.default.clone()),
            font_size: Some(12),
            ..Style::normal_font()
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{DARK_PALETTE, LIGHT_PALETTE};

    #[test]
    fn create_styles_is_deterministic() {
        for palette in [&LIGHT_PALETTE, &DARK_PALETTE] {
            for title_color in [None, Some("#112233")] {
                assert_eq!(
                    create_styles(palette, title_color),
                    create_styles(palette, title_color)
                );
            }
        }
    }

    #[test]
    fn title_uses_default_text_color_without_override() {
        let styles = create_styles(&LIGHT_PALETTE, None);
        assert_eq!(styles.title.color.as_deref(), Some("#24272A"));
    }

    #[test]
    fn title_uses_override_color() {
        let styles = create_styles(&LIGHT_PALETTE, Some("#112233"));
        assert_eq!(styles.title.color.as_deref(), Some("#112233"));
        assert_eq!(styles.description.color.as_deref(), Some("#535A61"));
    }

    #[test]
    fn empty_override_falls_back_to_palette() {
        let styles = create_styles(&DARK_PALETTE, Some(""));
        assert_eq!(styles.title.color.as_deref(), Some("#FFFFFF"));
    }

    #[test]
    fn root_carries_muted_bottom_border() {
        let styles = create_styles(&DARK_PALETTE, None);
        let root = styles.root_for(false);
        assert_eq!(root.border_bottom_width, Some(1));
        assert_eq!(root.border_bottom_color.as_deref(), Some("#3B4046"));
        assert_eq!(root.background_color.as_deref(), Some("#24272A"));
    }

    #[test]
    fn no_border_zeroes_width_and_keeps_the_rest() {
        let styles = create_styles(&LIGHT_PALETTE, None);
        let root = styles.root_for(true);
        assert_eq!(root.border_bottom_width, Some(0));
        assert_eq!(root.min_height, Some(100));
        assert_eq!(root.flex_direction, Some(FlexDirection::Row));
    }

    #[test]
    fn icon_is_tinted_and_offset() {
        let styles = create_styles(&LIGHT_PALETTE, None);
        assert_eq!(
            styles.icon,
            Style {
                bottom: Some(8),
                color: Some(Cow::Borrowed("#535A61")),
                left: Some(4),
                position: Some(Position::Relative),
                ..Style::default()
            }
        );
    }

    #[test]
    fn warning_text_uses_regular_font_at_small_size() {
        let styles = create_styles(&LIGHT_PALETTE, None);
        let text = &styles.menu_item_warning_text;
        assert_eq!(text.font_size, Some(12));
        assert_eq!(text.font_family.as_deref(), Some(FONT_FAMILY_REGULAR));
        assert_eq!(text.color.as_deref(), Some("#24272A"));
    }

    #[test]
    fn entries_use_host_style_names() {
        let styles = create_styles(&LIGHT_PALETTE, None);
        let names: Vec<_> = styles.entries().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "root",
                "content",
                "title",
                "description",
                "action",
                "icon",
                "noBorder",
                "warning",
                "menuItemWarningText",
            ]
        );
    }

    #[test]
    fn to_css_renders_lengths_in_px() {
        let styles = create_styles(&LIGHT_PALETTE, None);
        assert_eq!(
            styles.root_for(true).to_css(),
            "background-color: #FFFFFF; border-bottom-color: #D6D9DC; \
             border-bottom-style: solid; border-bottom-width: 0px; display: flex; \
             flex-direction: row; min-height: 100px; padding-top: 18px; padding-bottom: 18px;"
        );
        assert_eq!(
            styles.warning.to_css(),
            "align-self: flex-start; margin-top: 20px;"
        );
    }

    #[test]
    fn flex_containers_default_to_column() {
        let styles = create_styles(&LIGHT_PALETTE, None);
        assert_eq!(
            styles.content.to_css(),
            "display: flex; flex: 1; flex-direction: column; justify-content: center;"
        );
        assert!(styles.action.to_css().contains("flex-direction: column;"));
        assert!(styles.root.to_css().contains("flex-direction: row;"));
    }

    #[test]
    fn empty_style_renders_empty_css() {
        assert_eq!(Style::default().to_css(), "");
    }
}
