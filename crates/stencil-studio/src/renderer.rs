//! Software renderer for headless scene previews.
//!
//! Walks a finished `VisualNode` tree and draws it to an RGBA pixel buffer
//! using fontdue for text rasterization. The renderer knows nothing about
//! markup or styles; it only draws what synthesis produced.
//!
//! Known limitation: corner radii are carried in the scene model but the
//! preview draws square corners.

use anyhow::Result;
use fontdue::Font;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;
use stencil_scene::{NodeKind, VisualNode};
use stencil_style::Rgb;

use crate::fonts::{FONT_BOLD_SEARCH_PATHS, FONT_SEARCH_PATHS, load_font_from_paths};

/// Software renderer that draws a scene tree to a pixel buffer.
pub struct Renderer {
    /// RGBA pixel buffer
    buffer: RgbaImage,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Regular font for text rendering (None if no font found)
    font: Option<Font>,
    /// Bold font variant (None falls back to regular)
    font_bold: Option<Font>,
}

impl Renderer {
    /// Create a renderer with the given dimensions on a white background.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let buffer = ImageBuffer::from_pixel(width, height, Rgba([255, 255, 255, 255]));

        let font = load_font_from_paths(FONT_SEARCH_PATHS, "regular");
        let font_bold = load_font_from_paths(FONT_BOLD_SEARCH_PATHS, "bold");

        if font.is_none() {
            eprintln!("Warning: No system font found. Text will not be rendered.");
            eprintln!("Searched paths:");
            for path in FONT_SEARCH_PATHS {
                eprintln!("  - {path}");
            }
        }

        Self {
            buffer,
            width,
            height,
            font,
            font_bold,
        }
    }

    /// Draw a scene tree onto the buffer.
    ///
    /// Geometry in the tree is parent-relative; the walk accumulates
    /// absolute offsets. Opacity multiplies down the tree.
    pub fn render(&mut self, root: &VisualNode) {
        self.draw_node(root, 0.0, 0.0, 1.0);
    }

    fn draw_node(&mut self, node: &VisualNode, origin_x: f64, origin_y: f64, opacity: f64) {
        let x = origin_x + node.x;
        let y = origin_y + node.y;
        let opacity = opacity * node.opacity.unwrap_or(1.0).clamp(0.0, 1.0);

        match &node.kind {
            NodeKind::Container { .. } | NodeKind::RectanglePlaceholder => {
                if let Some(fill) = node.fill {
                    self.fill_rect(x, y, node.width, node.height, fill, opacity);
                }
                if let Some(stroke) = node.stroke {
                    let weight = node.stroke_weight.unwrap_or(1.0);
                    self.stroke_rect(x, y, node.width, node.height, weight, stroke, opacity);
                }
            }
            NodeKind::TextLeaf {
                characters,
                font_size,
                bold,
            } => {
                let color = node.fill.unwrap_or(Rgb::BLACK);
                self.draw_text(characters, x, y, *font_size, *bold, color, opacity);
            }
        }

        for child in node.children() {
            self.draw_node(child, x, y, opacity);
        }
    }

    /// Fill a rectangle, blending by the accumulated opacity.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb, opacity: f64) {
        let rgba = to_rgba(color);
        let alpha = channel(opacity);
        let x = x as i32;
        let y = y as i32;
        let width = width.max(0.0) as u32;
        let height = height.max(0.0) as u32;

        for dy in 0..height {
            for dx in 0..width {
                let px = x + dx as i32;
                let py = y + dy as i32;
                if px >= 0 && py >= 0 && (px as u32) < self.width && (py as u32) < self.height {
                    if alpha == 255 {
                        self.buffer.put_pixel(px as u32, py as u32, rgba);
                    } else {
                        let bg = *self.buffer.get_pixel(px as u32, py as u32);
                        let blended = alpha_blend(rgba, bg, alpha);
                        self.buffer.put_pixel(px as u32, py as u32, blended);
                    }
                }
            }
        }
    }

    /// Outline a rectangle as four edge fills of the given weight.
    fn stroke_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        weight: f64,
        color: Rgb,
        opacity: f64,
    ) {
        let weight = weight.max(0.0);
        self.fill_rect(x, y, width, weight, color, opacity);
        self.fill_rect(x, y + height - weight, width, weight, color, opacity);
        self.fill_rect(x, y, weight, height, color, opacity);
        self.fill_rect(x + width - weight, y, weight, height, color, opacity);
    }

    /// Draw a single line of text at the given position.
    #[allow(
        clippy::too_many_arguments,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_possible_wrap
    )]
    fn draw_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font_size: f64,
        bold: bool,
        color: Rgb,
        opacity: f64,
    ) {
        let font = if bold {
            self.font_bold.as_ref().or(self.font.as_ref())
        } else {
            self.font.as_ref()
        };
        let Some(font) = font else {
            return;
        };

        let rgba = to_rgba(color);
        let size = font_size as f32;
        let mut cursor_x = x as f32;
        let cursor_y = y as f32;

        for ch in text.chars() {
            if ch.is_control() {
                continue;
            }

            let (metrics, bitmap) = font.rasterize(ch, size);
            let glyph_x = cursor_x as i32 + metrics.xmin;
            let glyph_y = cursor_y as i32 + (size as i32 - metrics.ymin - metrics.height as i32);

            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let coverage = f64::from(bitmap[gy * metrics.width + gx]) / 255.0;
                    let alpha = channel(coverage * opacity);
                    if alpha == 0 {
                        continue;
                    }
                    let px = glyph_x + gx as i32;
                    let py = glyph_y + gy as i32;
                    if px >= 0 && py >= 0 && (px as u32) < self.width && (py as u32) < self.height
                    {
                        let bg = *self.buffer.get_pixel(px as u32, py as u32);
                        let blended = alpha_blend(rgba, bg, alpha);
                        self.buffer.put_pixel(px as u32, py as u32, blended);
                    }
                }
            }

            cursor_x += metrics.advance_width;
        }
    }

    /// The rendered pixel at `(x, y)`, if within bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (x < self.width && y < self.height).then(|| self.buffer.get_pixel(x, y).0)
    }

    /// Save the rendered image to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be saved to the given path.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.buffer
            .save(path)
            .map_err(|e| anyhow::anyhow!("failed to save preview to '{}': {e}", path.display()))?;
        Ok(())
    }
}

/// Convert a unit-range color to an opaque RGBA pixel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_rgba(color: Rgb) -> Rgba<u8> {
    Rgba([channel(color.r), channel(color.g), channel(color.b), 255])
}

/// Quantize a unit-range value to a byte channel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Alpha blend a foreground color onto a background color.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn alpha_blend(fg: Rgba<u8>, bg: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    let a = f32::from(alpha) / 255.0;
    let inv_a = 1.0 - a;

    Rgba([
        f32::from(fg[0]).mul_add(a, f32::from(bg[0]) * inv_a) as u8,
        f32::from(fg[1]).mul_add(a, f32::from(bg[1]) * inv_a) as u8,
        f32::from(fg[2]).mul_add(a, f32::from(bg[2]) * inv_a) as u8,
        255,
    ])
}
