//! Single-pass vertical-flow layout synthesis.
//!
//! Walks the element tree once, resolving each element's computed style and
//! emitting visual nodes by tag category. Siblings stack vertically: a
//! running cursor is threaded through the recursion as an explicit value,
//! advanced after each emitted node by its height plus its margin-bottom.
//!
//! Fidelity notes, preserved deliberately:
//! - A container's height is fixed at its resolved or default value and
//!   never grows to enclose its children's accumulated extent.
//! - Flattened tags thread the incoming cursor through their children
//!   unchanged, so their contents interleave with the surrounding siblings.

use stencil_dom::{ElementData, ElementTree, NodeId};
use stencil_style::{
    ComputedStyle, Rgb, SelectorStyleMap, parse_leading_number, resolve_style, to_rgb, to_size,
};

use crate::category::{TagCategory, default_font_size, is_heading};
use crate::host::Point;
use crate::metrics::TextMetrics;
use crate::node::{Padding, VisualNode};

/// Side length of the fixed root frame.
pub const ROOT_SIZE: f64 = 400.0;
/// Fixed left inset for every child within its parent.
const CHILD_INSET: f64 = 20.0;
/// Starting vertical cursor inside the root and every container.
const INITIAL_CURSOR: f64 = 20.0;
/// Margin below a node when `margin-bottom` is absent.
const DEFAULT_MARGIN_BOTTOM: f64 = 20.0;

const DEFAULT_CONTAINER_WIDTH: f64 = 360.0;
const DEFAULT_CONTAINER_HEIGHT: f64 = 100.0;

const DEFAULT_BUTTON_WIDTH: f64 = 120.0;
const DEFAULT_BUTTON_HEIGHT: f64 = 40.0;
const BUTTON_FILL: &str = "#007bff";
const BUTTON_CORNER_RADIUS: f64 = 4.0;
const BUTTON_FONT_SIZE: f64 = 14.0;

const DEFAULT_INPUT_WIDTH: f64 = 200.0;
const DEFAULT_INPUT_HEIGHT: f64 = 40.0;
const INPUT_STROKE: &str = "#cccccc";
const INPUT_CORNER_RADIUS: f64 = 4.0;
const PLACEHOLDER_FONT_SIZE: f64 = 14.0;
const PLACEHOLDER_COLOR: &str = "#999999";
const PLACEHOLDER_INSET: f64 = 10.0;

const DEFAULT_IMAGE_WIDTH: f64 = 200.0;
const DEFAULT_IMAGE_HEIGHT: f64 = 150.0;
const IMAGE_FILL: &str = "#e0e0e0";
const CAPTION_FONT_SIZE: f64 = 12.0;
const CAPTION_COLOR: &str = "#666666";

/// Produces a visual-node tree from a parsed element tree and stylesheet.
pub struct LayoutSynthesizer<'a> {
    tree: &'a ElementTree,
    sheet: &'a SelectorStyleMap,
    metrics: &'a dyn TextMetrics,
}

impl<'a> LayoutSynthesizer<'a> {
    /// Bind a synthesizer to its inputs. Nothing is computed until
    /// [`synthesize`](Self::synthesize) is called.
    #[must_use]
    pub fn new(
        tree: &'a ElementTree,
        sheet: &'a SelectorStyleMap,
        metrics: &'a dyn TextMetrics,
    ) -> Self {
        Self {
            tree,
            sheet,
            metrics,
        }
    }

    /// Run synthesis, returning the root container.
    ///
    /// The root frame is fixed at 400×400 with a white fill and centered
    /// on the given viewport point. Always succeeds: empty input yields
    /// the bare root frame.
    #[must_use]
    pub fn synthesize(&self, viewport_center: Point) -> VisualNode {
        let mut root = VisualNode::container(
            "Generated Design",
            viewport_center.x - ROOT_SIZE / 2.0,
            viewport_center.y - ROOT_SIZE / 2.0,
            ROOT_SIZE,
            ROOT_SIZE,
        );
        root.fill = Some(Rgb::WHITE);

        let mut cursor = INITIAL_CURSOR;
        for &child in self.tree.children(NodeId::ROOT) {
            cursor = self.place_element(child, &mut root, cursor);
        }
        root
    }

    /// Place one element into `parent` at the given cursor, returning the
    /// cursor for the next sibling.
    fn place_element(&self, id: NodeId, parent: &mut VisualNode, cursor: f64) -> f64 {
        let Some(data) = self.tree.data(id) else {
            return cursor;
        };
        let style = resolve_style(data, self.sheet);

        match TagCategory::from_tag(&data.tag_name) {
            TagCategory::Container => self.place_container(id, data, &style, parent, cursor),
            TagCategory::Button => self.place_button(data, &style, parent, cursor),
            TagCategory::Input => self.place_input(data, &style, parent, cursor),
            TagCategory::TextLeaf => self.place_text(data, &style, parent, cursor),
            TagCategory::Image => self.place_image(data, &style, parent, cursor),
            TagCategory::Flatten => {
                // No node of its own: children surface into the parent's
                // flow, threading the same cursor through.
                let mut cursor = cursor;
                for &child in self.tree.children(id) {
                    cursor = self.place_element(child, parent, cursor);
                }
                cursor
            }
        }
    }

    fn place_container(
        &self,
        id: NodeId,
        data: &ElementData,
        style: &ComputedStyle,
        parent: &mut VisualNode,
        cursor: f64,
    ) -> f64 {
        let width = styled_size(style, "width", DEFAULT_CONTAINER_WIDTH);
        let height = styled_size(style, "height", DEFAULT_CONTAINER_HEIGHT);

        let mut frame =
            VisualNode::container(container_name(data), CHILD_INSET, cursor, width, height);
        apply_surface_styles(&mut frame, style);
        frame.set_padding(resolve_padding(style));

        // Children flow inside the container from a fresh cursor; the
        // container's own height stays fixed regardless of how far they
        // extend.
        let mut inner_cursor = INITIAL_CURSOR;
        for &child in self.tree.children(id) {
            inner_cursor = self.place_element(child, &mut frame, inner_cursor);
        }

        advance(parent, frame, style, cursor)
    }

    fn place_button(
        &self,
        data: &ElementData,
        style: &ComputedStyle,
        parent: &mut VisualNode,
        cursor: f64,
    ) -> f64 {
        let width = styled_size(style, "width", DEFAULT_BUTTON_WIDTH);
        let height = styled_size(style, "height", DEFAULT_BUTTON_HEIGHT);

        let label = if data.text.is_empty() {
            "Button"
        } else {
            data.text.as_str()
        };

        let mut button = VisualNode::container(label, CHILD_INSET, cursor, width, height);
        // The fill is pre-resolved from background-color so a literal
        // "transparent" lands on the keyword fallback (white) instead of
        // being skipped like the surface pass below would.
        button.fill = Some(to_rgb(style.get("background-color").unwrap_or(BUTTON_FILL)));
        button.corner_radius = Some(BUTTON_CORNER_RADIUS);
        apply_surface_styles(&mut button, style);

        let font_size = styled_size(style, "font-size", BUTTON_FONT_SIZE);
        let text_width = self.metrics.text_width(label, font_size, false);
        let text_height = self.metrics.line_height(font_size);
        let mut text = VisualNode::text_leaf(
            label,
            (width - text_width) / 2.0,
            (height - text_height) / 2.0,
            text_width,
            text_height,
            label,
            font_size,
            false,
        );
        text.fill = Some(style.get("color").map_or(Rgb::WHITE, to_rgb));
        button.attach_child(text);

        advance(parent, button, style, cursor)
    }

    fn place_input(
        &self,
        data: &ElementData,
        style: &ComputedStyle,
        parent: &mut VisualNode,
        cursor: f64,
    ) -> f64 {
        let width = styled_size(style, "width", DEFAULT_INPUT_WIDTH);
        let height = styled_size(style, "height", DEFAULT_INPUT_HEIGHT);

        let name = data.placeholder.as_deref().unwrap_or("Input");
        let mut field = VisualNode::container(name, CHILD_INSET, cursor, width, height);
        field.fill = Some(Rgb::WHITE);
        field.stroke = Some(to_rgb(INPUT_STROKE));
        field.stroke_weight = Some(1.0);
        field.corner_radius = Some(INPUT_CORNER_RADIUS);
        apply_surface_styles(&mut field, style);

        if let Some(placeholder) = &data.placeholder {
            let text_width =
                self.metrics
                    .text_width(placeholder, PLACEHOLDER_FONT_SIZE, false);
            let text_height = self.metrics.line_height(PLACEHOLDER_FONT_SIZE);
            let mut text = VisualNode::text_leaf(
                placeholder,
                PLACEHOLDER_INSET,
                (height - text_height) / 2.0,
                text_width,
                text_height,
                placeholder,
                PLACEHOLDER_FONT_SIZE,
                false,
            );
            text.fill = Some(to_rgb(PLACEHOLDER_COLOR));
            field.attach_child(text);
        }

        advance(parent, field, style, cursor)
    }

    fn place_text(
        &self,
        data: &ElementData,
        style: &ComputedStyle,
        parent: &mut VisualNode,
        cursor: f64,
    ) -> f64 {
        // Empty text emits nothing and leaves the cursor untouched.
        if data.text.is_empty() {
            return cursor;
        }

        let font_size = styled_size(style, "font-size", default_font_size(&data.tag_name));
        let bold = is_heading(&data.tag_name) || style.get("font-weight") == Some("bold");

        let width = self.metrics.text_width(&data.text, font_size, bold);
        let height = self.metrics.line_height(font_size);
        let mut text = VisualNode::text_leaf(
            &data.text,
            CHILD_INSET,
            cursor,
            width,
            height,
            &data.text,
            font_size,
            bold,
        );
        text.fill = style.get("color").map(to_rgb);

        advance(parent, text, style, cursor)
    }

    fn place_image(
        &self,
        data: &ElementData,
        style: &ComputedStyle,
        parent: &mut VisualNode,
        cursor: f64,
    ) -> f64 {
        let width = styled_size(style, "width", DEFAULT_IMAGE_WIDTH);
        let height = styled_size(style, "height", DEFAULT_IMAGE_HEIGHT);

        let name = data.alt.as_deref().unwrap_or("Image");
        let mut rect = VisualNode::placeholder(name, CHILD_INSET, cursor, width, height);
        rect.fill = Some(to_rgb(IMAGE_FILL));
        apply_surface_styles(&mut rect, style);

        // The caption is a sibling of the rectangle, centered over it in
        // the parent's coordinate space.
        let caption = data.alt.as_deref().unwrap_or("Image Placeholder");
        let text_width = self.metrics.text_width(caption, CAPTION_FONT_SIZE, false);
        let text_height = self.metrics.line_height(CAPTION_FONT_SIZE);
        let mut text = VisualNode::text_leaf(
            caption,
            CHILD_INSET + (width - text_width) / 2.0,
            cursor + (height - text_height) / 2.0,
            text_width,
            text_height,
            caption,
            CAPTION_FONT_SIZE,
            false,
        );
        text.fill = Some(to_rgb(CAPTION_COLOR));

        let next = advance(parent, rect, style, cursor);
        parent.attach_child(text);
        next
    }
}

/// Attach `node` to `parent` and advance the cursor past it: the node's
/// height plus its resolved margin-bottom.
fn advance(parent: &mut VisualNode, node: VisualNode, style: &ComputedStyle, cursor: f64) -> f64 {
    let height = node.height;
    parent.attach_child(node);
    cursor + height + margin_bottom(style)
}

fn margin_bottom(style: &ComputedStyle) -> f64 {
    styled_size(style, "margin-bottom", DEFAULT_MARGIN_BOTTOM)
}

/// A size property: explicit values go through the size parser, absent
/// values take the per-tag default.
fn styled_size(style: &ComputedStyle, property: &str, default: f64) -> f64 {
    style.get(property).map_or(default, to_size)
}

/// Containers are named after their first class, else id, else tag.
fn container_name(data: &ElementData) -> String {
    data.classes
        .first()
        .cloned()
        .or_else(|| data.id.clone())
        .unwrap_or_else(|| data.tag_name.clone())
}

/// Apply the shared surface properties (fill, border, corner radius,
/// opacity) from a computed style onto a node, overwriting any defaults
/// the caller pre-set.
fn apply_surface_styles(node: &mut VisualNode, style: &ComputedStyle) {
    let background = style
        .get("background-color")
        .or_else(|| style.get("background"));
    if let Some(value) = background
        && value != "transparent"
        && value != "none"
    {
        node.fill = Some(to_rgb(value));
    }

    if let Some(border) = style.get("border") {
        let parts: Vec<&str> = border.split_whitespace().collect();
        let weight = parts
            .first()
            .and_then(|token| parse_leading_number(token))
            .filter(|w| *w != 0.0)
            .unwrap_or(1.0);
        let color = parts.get(2).copied().unwrap_or("#000000");
        node.stroke = Some(to_rgb(color));
        node.stroke_weight = Some(weight);
    }

    if let Some(radius) = style.get("border-radius") {
        node.corner_radius = Some(to_size(radius));
    }

    if let Some(opacity) = style.get("opacity")
        && let Some(value) = parse_leading_number(opacity)
    {
        node.opacity = Some(value);
    }
}

/// Resolve container padding: the `padding` shorthand sets all four sides,
/// then any `padding-{left,right,top,bottom}` overrides its side.
fn resolve_padding(style: &ComputedStyle) -> Padding {
    let mut padding = style
        .get("padding")
        .map(to_size)
        .map_or_else(Padding::default, Padding::uniform);
    if let Some(value) = style.get("padding-left") {
        padding.left = to_size(value);
    }
    if let Some(value) = style.get("padding-right") {
        padding.right = to_size(value);
    }
    if let Some(value) = style.get("padding-top") {
        padding.top = to_size(value);
    }
    if let Some(value) = style.get("padding-bottom") {
        padding.bottom = to_size(value);
    }
    padding
}
