//! Integration tests for the full pipeline and the preview renderer.

use stencil_scene::{
    ApproximateTextMetrics, DesignHost, HostError, Point, TextMetrics, VisualNode,
};
use stencil_studio::{Renderer, generate_design};
use stencil_style::Rgb;

/// A host with fixed metrics and no real font dependency.
struct StubHost {
    center: Point,
    typefaces_ready: bool,
    prepare_calls: usize,
}

impl StubHost {
    fn new() -> Self {
        Self {
            center: Point { x: 200.0, y: 200.0 },
            typefaces_ready: true,
            prepare_calls: 0,
        }
    }
}

impl DesignHost for StubHost {
    fn viewport_center(&self) -> Point {
        self.center
    }

    fn ensure_typefaces(&mut self) -> Result<(), HostError> {
        self.prepare_calls += 1;
        if self.typefaces_ready {
            Ok(())
        } else {
            Err(HostError::TypefaceUnavailable("stub".to_string()))
        }
    }

    fn metrics(&self) -> &dyn TextMetrics {
        &ApproximateTextMetrics
    }
}

#[test]
fn test_generate_design_end_to_end() {
    let mut host = StubHost::new();
    let root = generate_design(
        r#"<div class="card"><h1>Title</h1></div>"#,
        ".card { background-color: #ff0000 }",
        &mut host,
    )
    .unwrap();

    assert!((root.width - 400.0).abs() < 1e-9);
    assert!((root.x - 0.0).abs() < 1e-9);
    assert_eq!(host.prepare_calls, 1);

    let card = &root.children()[0];
    assert_eq!(card.name, "card");
    assert_eq!(card.fill, Some(Rgb { r: 1.0, g: 0.0, b: 0.0 }));
    assert_eq!(card.children().len(), 1);
}

#[test]
fn test_typeface_failure_propagates() {
    let mut host = StubHost::new();
    host.typefaces_ready = false;
    let result = generate_design("<p>x</p>", "", &mut host);
    assert!(matches!(result, Err(HostError::TypefaceUnavailable(_))));
}

#[test]
fn test_empty_inputs_still_produce_a_scene() {
    let mut host = StubHost::new();
    let root = generate_design("", "", &mut host).unwrap();
    assert!(root.children().is_empty());
    assert_eq!(root.fill, Some(Rgb::WHITE));
}

#[test]
fn test_renderer_fills_rectangles() {
    let mut scene = VisualNode::container("frame", 10.0, 10.0, 50.0, 50.0);
    scene.fill = Some(Rgb { r: 1.0, g: 0.0, b: 0.0 });

    let mut renderer = Renderer::new(100, 100);
    renderer.render(&scene);

    assert_eq!(renderer.pixel(30, 30), Some([255, 0, 0, 255]));
    // Outside the frame stays on the white background.
    assert_eq!(renderer.pixel(80, 80), Some([255, 255, 255, 255]));
}

#[test]
fn test_renderer_child_geometry_is_parent_relative() {
    let mut parent = VisualNode::container("outer", 10.0, 10.0, 80.0, 80.0);
    parent.fill = Some(Rgb::WHITE);
    let mut child = VisualNode::placeholder("inner", 20.0, 20.0, 10.0, 10.0);
    child.fill = Some(Rgb { r: 0.0, g: 0.0, b: 1.0 });
    parent.attach_child(child);

    let mut renderer = Renderer::new(100, 100);
    renderer.render(&parent);

    // Child lands at parent origin + its own offset.
    assert_eq!(renderer.pixel(35, 35), Some([0, 0, 255, 255]));
    assert_eq!(renderer.pixel(15, 15), Some([255, 255, 255, 255]));
}

#[test]
fn test_renderer_opacity_blends_toward_background() {
    let mut scene = VisualNode::container("frame", 0.0, 0.0, 10.0, 10.0);
    scene.fill = Some(Rgb::BLACK);
    scene.opacity = Some(0.5);

    let mut renderer = Renderer::new(10, 10);
    renderer.render(&scene);

    let [r, g, b, _] = renderer.pixel(5, 5).unwrap();
    // Half-opaque black over white lands mid-gray.
    assert!(r > 100 && r < 160, "unexpected red channel {r}");
    assert_eq!(r, g);
    assert_eq!(g, b);
}

#[test]
fn test_renderer_strokes_edges() {
    let mut scene = VisualNode::container("frame", 0.0, 0.0, 20.0, 20.0);
    scene.stroke = Some(Rgb { r: 0.0, g: 1.0, b: 0.0 });
    scene.stroke_weight = Some(2.0);

    let mut renderer = Renderer::new(30, 30);
    renderer.render(&scene);

    assert_eq!(renderer.pixel(0, 0), Some([0, 255, 0, 255]));
    assert_eq!(renderer.pixel(10, 1), Some([0, 255, 0, 255]));
    // Interior is untouched (no fill set).
    assert_eq!(renderer.pixel(10, 10), Some([255, 255, 255, 255]));
}
