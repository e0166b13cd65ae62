//! The visual-node scene model.
//!
//! A scene is a tree of [`VisualNode`]s built bottom-up during a single
//! synthesis call. Geometry is parent-relative: each node's `x`/`y` offset
//! it within its parent container, except the root, whose offset is
//! viewport-relative. Only containers hold children.

use serde::Serialize;
use stencil_style::Rgb;
use strum_macros::Display;

/// Per-side padding recorded on a container.
///
/// Padding is carried in the model for the host's benefit; the flow
/// algorithm itself positions children at fixed insets and does not
/// consume it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Padding {
    /// Left inset in pixels.
    pub left: f64,
    /// Right inset in pixels.
    pub right: f64,
    /// Top inset in pixels.
    pub top: f64,
    /// Bottom inset in pixels.
    pub bottom: f64,
}

impl Padding {
    /// Uniform padding on all four sides.
    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }
}

/// What a visual node is, together with its kind-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Display)]
#[serde(tag = "kind")]
pub enum NodeKind {
    /// A frame that can hold child nodes and participates in vertical flow.
    Container {
        /// Recorded padding (see [`Padding`]).
        padding: Padding,
        /// Child nodes in attachment order.
        children: Vec<VisualNode>,
    },
    /// A run of text.
    TextLeaf {
        /// The text to display.
        characters: String,
        /// Font size in pixels.
        font_size: f64,
        /// Whether the bold typeface is used.
        bold: bool,
    },
    /// A rectangle standing in for an image.
    RectanglePlaceholder,
}

/// A positioned, styled unit of the output scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualNode {
    /// Display name shown in the host's layer list.
    pub name: String,
    /// Horizontal offset within the parent (viewport-relative for the root).
    pub x: f64,
    /// Vertical offset within the parent (viewport-relative for the root).
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Solid fill color, if any. `None` leaves the host's default paint.
    pub fill: Option<Rgb>,
    /// Stroke color, if any.
    pub stroke: Option<Rgb>,
    /// Stroke weight in pixels; meaningful only with a stroke.
    pub stroke_weight: Option<f64>,
    /// Corner radius in pixels.
    pub corner_radius: Option<f64>,
    /// Opacity in `[0, 1]`, if explicitly styled.
    pub opacity: Option<f64>,
    /// Node kind and kind-specific payload.
    pub kind: NodeKind,
}

impl VisualNode {
    fn new(name: impl Into<String>, x: f64, y: f64, width: f64, height: f64, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            width,
            height,
            fill: None,
            stroke: None,
            stroke_weight: None,
            corner_radius: None,
            opacity: None,
            kind,
        }
    }

    /// Build an empty container frame.
    #[must_use]
    pub fn container(name: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            name,
            x,
            y,
            width,
            height,
            NodeKind::Container {
                padding: Padding::default(),
                children: Vec::new(),
            },
        )
    }

    /// Build a text leaf.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn text_leaf(
        name: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        characters: impl Into<String>,
        font_size: f64,
        bold: bool,
    ) -> Self {
        Self::new(
            name,
            x,
            y,
            width,
            height,
            NodeKind::TextLeaf {
                characters: characters.into(),
                font_size,
                bold,
            },
        )
    }

    /// Build a placeholder rectangle.
    #[must_use]
    pub fn placeholder(name: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(name, x, y, width, height, NodeKind::RectanglePlaceholder)
    }

    /// Whether this node can hold children.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self.kind, NodeKind::Container { .. })
    }

    /// The node's children, in attachment order. Empty for leaf kinds.
    #[must_use]
    pub fn children(&self) -> &[VisualNode] {
        match &self.kind {
            NodeKind::Container { children, .. } => children,
            _ => &[],
        }
    }

    /// Attach a child to this node, preserving attachment order.
    ///
    /// Only containers hold children; attaching to a leaf kind discards
    /// the child. The synthesizer only ever attaches to containers.
    pub fn attach_child(&mut self, child: VisualNode) {
        if let NodeKind::Container { children, .. } = &mut self.kind {
            children.push(child);
        }
    }

    /// Record padding on a container. No effect on leaf kinds.
    pub fn set_padding(&mut self, value: Padding) {
        if let NodeKind::Container { padding, .. } = &mut self.kind {
            *padding = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_preserves_order() {
        let mut parent = VisualNode::container("frame", 0.0, 0.0, 100.0, 100.0);
        parent.attach_child(VisualNode::placeholder("a", 0.0, 0.0, 1.0, 1.0));
        parent.attach_child(VisualNode::placeholder("b", 0.0, 0.0, 1.0, 1.0));
        let names: Vec<&str> = parent.children().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_leaf_kinds_hold_no_children() {
        let mut leaf = VisualNode::text_leaf("t", 0.0, 0.0, 10.0, 10.0, "hi", 14.0, false);
        leaf.attach_child(VisualNode::placeholder("x", 0.0, 0.0, 1.0, 1.0));
        assert!(leaf.children().is_empty());
        assert!(!leaf.is_container());
    }

    #[test]
    fn test_kind_display_names() {
        let container = VisualNode::container("f", 0.0, 0.0, 1.0, 1.0);
        assert_eq!(container.kind.to_string(), "Container");
        let rect = VisualNode::placeholder("r", 0.0, 0.0, 1.0, 1.0);
        assert_eq!(rect.kind.to_string(), "RectanglePlaceholder");
    }
}
