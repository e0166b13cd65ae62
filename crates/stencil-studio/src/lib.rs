//! High-level pipeline API for the Stencil design converter.
//!
//! # Scope
//!
//! This crate provides:
//! - **Design Generation** — run the full markup + stylesheet → scene
//!   pipeline against a [`DesignHost`]
//! - **Raster Host** — a [`DesignHost`] backed by system typefaces, with
//!   fontdue-measured text extents
//! - **Software Rendering** — headless preview of a finished scene to a
//!   pixel buffer
//!
//! # Not Implemented
//!
//! - External resource loading; markup and stylesheet arrive as plain text
//! - Any interactive host surface (selection, zoom, panels)

/// System typeface discovery shared by the host and the renderer.
mod fonts;
/// Software renderer for headless scene previews.
pub mod renderer;

pub use renderer::Renderer;

use fontdue::Font;
use stencil_common::warning::{Component, clear_warnings, warn_once};
use stencil_markup::parse_markup;
use stencil_scene::{
    ApproximateTextMetrics, DesignHost, HostError, LayoutSynthesizer, Point, TextMetrics,
    VisualNode,
};
use stencil_style::parse_stylesheet;

use crate::fonts::{FONT_BOLD_SEARCH_PATHS, FONT_SEARCH_PATHS, load_font_from_paths};

/// Run the full pipeline: prepare typefaces, parse both inputs, synthesize
/// the scene, and return the root container to the caller.
///
/// Parsing and synthesis never fail; malformed input yields a smaller tree.
///
/// # Errors
///
/// Returns [`HostError`] only when the host cannot prepare its typefaces.
pub fn generate_design(
    markup: &str,
    stylesheet: &str,
    host: &mut dyn DesignHost,
) -> Result<VisualNode, HostError> {
    host.ensure_typefaces()?;

    // Warning deduplication is scoped to one conversion.
    clear_warnings();

    let tree = parse_markup(markup);
    let sheet = parse_stylesheet(stylesheet);
    let synthesizer = LayoutSynthesizer::new(&tree, &sheet, host.metrics());
    Ok(synthesizer.synthesize(host.viewport_center()))
}

/// A design host backed by system typefaces and a fixed-size viewport.
///
/// Typefaces load lazily in [`ensure_typefaces`]; text measurement uses
/// fontdue advance widths once a face is loaded and falls back to
/// [`ApproximateTextMetrics`] ratios before then (or when only the regular
/// face is available and bold is requested).
///
/// [`ensure_typefaces`]: DesignHost::ensure_typefaces
pub struct RasterHost {
    width: u32,
    height: u32,
    font: Option<Font>,
    font_bold: Option<Font>,
}

impl RasterHost {
    /// Create a host with the given viewport dimensions. No font data is
    /// touched until typefaces are prepared.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            font: None,
            font_bold: None,
        }
    }

    fn face_for(&self, bold: bool) -> Option<&Font> {
        if bold {
            self.font_bold.as_ref().or(self.font.as_ref())
        } else {
            self.font.as_ref()
        }
    }
}

impl DesignHost for RasterHost {
    fn viewport_center(&self) -> Point {
        Point {
            x: f64::from(self.width) / 2.0,
            y: f64::from(self.height) / 2.0,
        }
    }

    fn ensure_typefaces(&mut self) -> Result<(), HostError> {
        if self.font.is_none() {
            self.font = load_font_from_paths(FONT_SEARCH_PATHS, "regular");
        }
        if self.font.is_none() {
            return Err(HostError::TypefaceUnavailable(
                "no regular system font found".to_string(),
            ));
        }
        if self.font_bold.is_none() {
            self.font_bold = load_font_from_paths(FONT_BOLD_SEARCH_PATHS, "bold");
            if self.font_bold.is_none() {
                warn_once(Component::Studio, "no bold system font found, using regular");
            }
        }
        Ok(())
    }

    fn metrics(&self) -> &dyn TextMetrics {
        self
    }
}

impl TextMetrics for RasterHost {
    fn text_width(&self, text: &str, font_size: f64, bold: bool) -> f64 {
        let Some(font) = self.face_for(bold) else {
            return ApproximateTextMetrics.text_width(text, font_size, bold);
        };
        // Sum per-character advance widths with Font::metrics(), which
        // skips bitmap generation when only measurements are needed.
        #[allow(clippy::cast_possible_truncation)]
        let size = font_size as f32;
        text.chars()
            .filter(|ch| !ch.is_control())
            .map(|ch| f64::from(font.metrics(ch, size).advance_width))
            .sum()
    }

    fn line_height(&self, font_size: f64) -> f64 {
        font_size * ApproximateTextMetrics::LINE_HEIGHT_RATIO
    }
}
