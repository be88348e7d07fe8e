//! Immutable view tree produced by a render pass
//!
//! Optional parts of a row are left out of the tree entirely instead of being
//! flagged as hidden, so a query either finds a node or it does not.

use std::fmt;

use serde::Serialize;

use crate::style::Style;

/// A node of the rendered view tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Node {
    /// Tappable region dispatching the row's press handler
    Touchable {
        #[serde(rename = "testID", skip_serializing_if = "Option::is_none")]
        test_id: Option<String>,
        children: Vec<Node>,
    },
    /// Layout container
    View { style: Style, children: Vec<Node> },
    /// Text leaf
    Text { style: Style, content: String },
    /// Banner rendered by the host's notification component
    Notification {
        style: Style,
        is_warning: bool,
        is_notification: bool,
        children: Vec<Node>,
    },
    /// Glyph rendered by the host's icon component
    Icon {
        name: String,
        size: u16,
        style: Style,
    },
}

impl Node {
    pub fn view(style: Style, children: Vec<Self>) -> Self {
        Self::View { style, children }
    }

    pub fn text(style: Style, content: impl Into<String>) -> Self {
        Self::Text {
            style,
            content: content.into(),
        }
    }

    /// Direct children of this node.
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Touchable { children, .. }
            | Self::View { children, .. }
            | Self::Notification { children, .. } => children,
            Self::Text { .. } | Self::Icon { .. } => &[],
        }
    }

    /// Style attached to this node, if it carries one.
    pub const fn style(&self) -> Option<&Style> {
        match self {
            Self::Touchable { .. } => None,
            Self::View { style, .. }
            | Self::Text { style, .. }
            | Self::Notification { style, .. }
            | Self::Icon { style, .. } => Some(style),
        }
    }

    /// Depth-first, pre-order traversal starting at this node.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// First node (pre-order) matching the predicate.
    pub fn find(&self, predicate: impl Fn(&Self) -> bool) -> Option<&Self> {
        self.descendants().find(|node| predicate(node))
    }

    /// Node carrying the given test identifier.
    pub fn find_by_test_id(&self, test_id: &str) -> Option<&Self> {
        self.find(|node| {
            matches!(node, Self::Touchable { test_id: Some(id), .. } if id == test_id)
        })
    }

    /// Text leaf with exactly this content.
    pub fn find_text(&self, content: &str) -> Option<&Self> {
        self.find(|node| matches!(node, Self::Text { content: text, .. } if text == content))
    }

    /// Content of every text leaf, in reading order.
    pub fn text_content(&self) -> Vec<&str> {
        self.descendants()
            .filter_map(|node| match node {
                Self::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            Self::Touchable { test_id, .. } => match test_id {
                Some(id) => writeln!(f, "{indent}Touchable testID={id}")?,
                None => writeln!(f, "{indent}Touchable")?,
            },
            Self::View { .. } => writeln!(f, "{indent}View")?,
            Self::Text { content, .. } => writeln!(f, "{indent}Text {content:?}")?,
            Self::Notification {
                is_warning,
                is_notification,
                ..
            } => writeln!(
                f,
                "{indent}Notification warning={is_warning} notification={is_notification}"
            )?,
            Self::Icon { name, size, .. } => writeln!(f, "{indent}Icon {name} size={size}")?,
        }
        for child in self.children() {
            child.write_outline(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Indented outline of the tree, one node per line.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, 0)
    }
}

/// Pre-order iterator over a node and its descendants.
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
