//! Integration tests for layout synthesis.

use stencil_markup::parse_markup;
use stencil_scene::{ApproximateTextMetrics, LayoutSynthesizer, NodeKind, Point, VisualNode};
use stencil_style::{Rgb, parse_stylesheet};

const METRICS: ApproximateTextMetrics = ApproximateTextMetrics;

fn synthesize(markup: &str, stylesheet: &str) -> VisualNode {
    let tree = parse_markup(markup);
    let sheet = parse_stylesheet(stylesheet);
    LayoutSynthesizer::new(&tree, &sheet, &METRICS).synthesize(Point { x: 0.0, y: 0.0 })
}

fn text_payload(node: &VisualNode) -> (&str, f64, bool) {
    match &node.kind {
        NodeKind::TextLeaf {
            characters,
            font_size,
            bold,
        } => (characters, *font_size, *bold),
        other => panic!("expected a text leaf, got {other}"),
    }
}

#[test]
fn test_empty_input_yields_bare_root() {
    let root = synthesize("", "");
    assert!(root.children().is_empty());
    assert!((root.width - 400.0).abs() < 1e-9);
    assert!((root.height - 400.0).abs() < 1e-9);
    assert_eq!(root.fill, Some(Rgb::WHITE));
}

#[test]
fn test_root_centered_on_viewport() {
    let tree = parse_markup("");
    let sheet = parse_stylesheet("");
    let root = LayoutSynthesizer::new(&tree, &sheet, &METRICS)
        .synthesize(Point { x: 500.0, y: 300.0 });
    assert!((root.x - 300.0).abs() < 1e-9);
    assert!((root.y - 100.0).abs() < 1e-9);
}

#[test]
fn test_siblings_stack_with_default_margin() {
    let root = synthesize("<p>one</p><p>two</p>", "");
    let children = root.children();
    assert_eq!(children.len(), 2);
    let first = &children[0];
    let second = &children[1];
    assert!((first.x - 20.0).abs() < 1e-9);
    assert!((first.y - 20.0).abs() < 1e-9);
    // Second node lands at first.y + first.height + default margin 20.
    assert!((second.y - (first.y + first.height + 20.0)).abs() < 1e-9);
}

#[test]
fn test_explicit_margin_bottom_advances_cursor() {
    let root = synthesize(
        r#"<p style="margin-bottom: 5px">one</p><p>two</p>"#,
        "",
    );
    let children = root.children();
    let first = &children[0];
    let second = &children[1];
    assert!((second.y - (first.y + first.height + 5.0)).abs() < 1e-9);
}

#[test]
fn test_unknown_tag_flattens_into_parent() {
    let root = synthesize("<foo><p>Hi</p></foo>", "");
    let children = root.children();
    assert_eq!(children.len(), 1);
    let (characters, _, _) = text_payload(&children[0]);
    assert_eq!(characters, "Hi");
}

#[test]
fn test_flatten_threads_cursor_through() {
    let root = synthesize("<p>a</p><foo><p>b</p></foo><p>c</p>", "");
    let children = root.children();
    assert_eq!(children.len(), 3);
    let ys: Vec<f64> = children.iter().map(|c| c.y).collect();
    assert!(ys[0] < ys[1] && ys[1] < ys[2]);
}

#[test]
fn test_container_defaults_and_fresh_inner_cursor() {
    let root = synthesize("<p>before</p><div><p>inside</p></div>", "");
    let children = root.children();
    let div = &children[1];
    assert!(div.is_container());
    assert!((div.width - 360.0).abs() < 1e-9);
    assert!((div.height - 100.0).abs() < 1e-9);
    // Inner children restart from the initial cursor, local to the frame.
    let inner = &div.children()[0];
    assert!((inner.x - 20.0).abs() < 1e-9);
    assert!((inner.y - 20.0).abs() < 1e-9);
}

#[test]
fn test_container_height_never_grows() {
    let root = synthesize(
        r#"<div style="height: 30px"><p>a</p><p>b</p><p>c</p></div>"#,
        "",
    );
    let div = &root.children()[0];
    assert!((div.height - 30.0).abs() < 1e-9);
    assert_eq!(div.children().len(), 3);
}

#[test]
fn test_container_named_after_class_then_id_then_tag() {
    let root = synthesize(r#"<div class="card wide" id="main">x</div><section>y</section>"#, "");
    let children = root.children();
    assert_eq!(children[0].name, "card");
    assert_eq!(children[1].name, "section");
}

#[test]
fn test_button_defaults() {
    let root = synthesize("<button>Go</button>", "");
    let button = &root.children()[0];
    assert!((button.width - 120.0).abs() < 1e-9);
    assert!((button.height - 40.0).abs() < 1e-9);
    assert_eq!(button.corner_radius, Some(4.0));
    // Default accent fill #007bff.
    let fill = button.fill.unwrap();
    assert!((fill.r - 0.0).abs() < 1e-9);
    assert!((fill.b - 1.0).abs() < 1e-9);

    let label = &button.children()[0];
    let (characters, size, bold) = text_payload(label);
    assert_eq!(characters, "Go");
    assert!((size - 14.0).abs() < 1e-9);
    assert!(!bold);
    assert_eq!(label.fill, Some(Rgb::WHITE));
    // Centered within the button.
    assert!((label.x - (button.width - label.width) / 2.0).abs() < 1e-9);
    assert!((label.y - (button.height - label.height) / 2.0).abs() < 1e-9);
}

#[test]
fn test_empty_button_gets_default_label() {
    let root = synthesize("<button></button>", "");
    let button = &root.children()[0];
    let (characters, _, _) = text_payload(&button.children()[0]);
    assert_eq!(characters, "Button");
    assert_eq!(button.name, "Button");
}

#[test]
fn test_transparent_button_background_falls_to_white() {
    let root = synthesize(r#"<button style="background-color: transparent">Go</button>"#, "");
    let button = &root.children()[0];
    assert_eq!(button.fill, Some(Rgb::WHITE));
}

#[test]
fn test_input_defaults_and_placeholder() {
    let root = synthesize(r#"<input placeholder="Your name"/>"#, "");
    let field = &root.children()[0];
    assert!((field.width - 200.0).abs() < 1e-9);
    assert!((field.height - 40.0).abs() < 1e-9);
    assert_eq!(field.fill, Some(Rgb::WHITE));
    assert_eq!(field.stroke_weight, Some(1.0));
    assert_eq!(field.corner_radius, Some(4.0));
    assert_eq!(field.name, "Your name");

    let hint = &field.children()[0];
    let (characters, size, _) = text_payload(hint);
    assert_eq!(characters, "Your name");
    assert!((size - 14.0).abs() < 1e-9);
    assert!((hint.x - 10.0).abs() < 1e-9);
}

#[test]
fn test_input_without_placeholder_has_no_label() {
    let root = synthesize("<input/>", "");
    let field = &root.children()[0];
    assert!(field.children().is_empty());
    assert_eq!(field.name, "Input");
}

#[test]
fn test_image_placeholder_and_caption() {
    let root = synthesize(r#"<img alt="Logo"/>"#, "");
    let children = root.children();
    // Rectangle and caption are siblings on the same parent.
    assert_eq!(children.len(), 2);
    let rect = &children[0];
    assert!(matches!(rect.kind, NodeKind::RectanglePlaceholder));
    assert!((rect.width - 200.0).abs() < 1e-9);
    assert!((rect.height - 150.0).abs() < 1e-9);
    assert_eq!(rect.name, "Logo");

    let caption = &children[1];
    let (characters, size, _) = text_payload(caption);
    assert_eq!(characters, "Logo");
    assert!((size - 12.0).abs() < 1e-9);
    // Centered over the rectangle in the parent's coordinates.
    assert!((caption.x - (rect.x + (rect.width - caption.width) / 2.0)).abs() < 1e-9);
    assert!((caption.y - (rect.y + (rect.height - caption.height) / 2.0)).abs() < 1e-9);
}

#[test]
fn test_image_without_alt_gets_placeholder_caption() {
    let root = synthesize("<img/>", "");
    let (characters, _, _) = text_payload(&root.children()[1]);
    assert_eq!(characters, "Image Placeholder");
}

#[test]
fn test_image_caption_does_not_advance_cursor() {
    let root = synthesize(r#"<img alt="a"/><p>after</p>"#, "");
    let children = root.children();
    let rect = &children[0];
    // The paragraph lands just past the rectangle, not past the caption.
    let after = children.iter().find(|c| c.name == "after").unwrap();
    assert!((after.y - (rect.y + rect.height + 20.0)).abs() < 1e-9);
}

#[test]
fn test_heading_sizes_and_bold() {
    let root = synthesize("<h1>Big</h1><p>Body</p>", "");
    let children = root.children();
    let (_, h1_size, h1_bold) = text_payload(&children[0]);
    assert!((h1_size - 32.0).abs() < 1e-9);
    assert!(h1_bold);
    let (_, p_size, p_bold) = text_payload(&children[1]);
    assert!((p_size - 14.0).abs() < 1e-9);
    assert!(!p_bold);
}

#[test]
fn test_font_weight_bold_applies_to_plain_text() {
    let root = synthesize(r#"<p style="font-weight: bold">Strong</p>"#, "");
    let (_, _, bold) = text_payload(&root.children()[0]);
    assert!(bold);
}

#[test]
fn test_empty_text_emits_nothing() {
    let root = synthesize("<p>   </p><span></span>", "");
    assert!(root.children().is_empty());
}

#[test]
fn test_cascade_reaches_geometry() {
    // id beats class beats inline, end to end.
    let root = synthesize(
        r#"<div id="main" class="card" style="width: 10px">x</div>"#,
        "#main { width: 300px } .card { width: 200px }",
    );
    let div = &root.children()[0];
    assert!((div.width - 300.0).abs() < 1e-9);
}

#[test]
fn test_styled_container_surface() {
    let root = synthesize(
        r#"<div class="card">x</div>"#,
        ".card { background-color: #ff0000; border: 2px solid blue; border-radius: 8px; opacity: 0.5 }",
    );
    let div = &root.children()[0];
    assert_eq!(div.fill, Some(Rgb { r: 1.0, g: 0.0, b: 0.0 }));
    assert_eq!(div.stroke, Some(Rgb { r: 0.0, g: 0.0, b: 1.0 }));
    assert_eq!(div.stroke_weight, Some(2.0));
    assert_eq!(div.corner_radius, Some(8.0));
    assert_eq!(div.opacity, Some(0.5));
}
