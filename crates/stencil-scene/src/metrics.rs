//! Text measurement abstraction.
//!
//! Synthesis needs text extents to center button labels and image captions
//! and to advance the flow cursor past text leaves, but must not depend on
//! any concrete font stack. [`TextMetrics`] is that seam; hosts with real
//! glyph data substitute their own implementation.

/// Provides text extents for layout.
pub trait TextMetrics {
    /// Width in pixels of a single line of text at the given size.
    fn text_width(&self, text: &str, font_size: f64, bold: bool) -> f64;

    /// Line height in pixels for the given font size.
    fn line_height(&self, font_size: f64) -> f64;
}

/// Ratio-based text metrics requiring no font data.
///
/// Assumes an average character width of 0.6× the font size and a line
/// height of 1.2× the font size — rough but stable figures for common
/// proportional faces.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateTextMetrics;

impl ApproximateTextMetrics {
    /// Average character width as a fraction of font size.
    pub const CHAR_WIDTH_RATIO: f64 = 0.6;
    /// Line height as a multiple of font size.
    pub const LINE_HEIGHT_RATIO: f64 = 1.2;
}

#[allow(clippy::cast_precision_loss)]
impl TextMetrics for ApproximateTextMetrics {
    fn text_width(&self, text: &str, font_size: f64, _bold: bool) -> f64 {
        text.chars().count() as f64 * font_size * Self::CHAR_WIDTH_RATIO
    }

    fn line_height(&self, font_size: f64) -> f64 {
        font_size * Self::LINE_HEIGHT_RATIO
    }
}
