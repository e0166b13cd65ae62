//! Color value parsing.
//!
//! Colors normalize to unit-range RGB triples. Parsing is a fixed rule
//! chain where the first match wins: hex notation, `rgb(...)`, the named
//! color table, then a default.
//!
//! The fallback is deliberately asymmetric: a value that *claims* a
//! numeric format but fails to parse (`#12`, `rgb(x,y,z)`) falls back to
//! black, while an unrecognized keyword (`fooColor`) falls back to white —
//! the safer default for fills. Both defaults must be preserved exactly.

use serde::Serialize;

/// An sRGB color with each channel in the unit range `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    /// Red channel (0.0–1.0)
    pub r: f64,
    /// Green channel (0.0–1.0)
    pub g: f64,
    /// Blue channel (0.0–1.0)
    pub b: f64,
}

impl Rgb {
    /// Black (#000000) — the fallback for malformed numeric formats.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// White (#ffffff) — the fallback for unrecognized keywords.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Build from 0–255 channel values.
    #[must_use]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }
}

/// Parse a color value string into an [`Rgb`] triple.
///
/// Rules, in order, first match wins:
/// 1. Empty input → black.
/// 2. Leading `#` → hex notation (3-digit shorthand with replicated
///    digits, or 6-digit); any other length or a bad digit → black.
/// 3. Leading `rgb` → the first three numeric substrings anywhere in the
///    value, divided by 255 and clamped; a bad number → black.
/// 4. Case-insensitive named-color table lookup.
/// 5. Anything else → white.
///
/// Never fails; every input maps to some triple.
#[must_use]
pub fn to_rgb(value: &str) -> Rgb {
    // The empty check precedes trimming, so a whitespace-only value is
    // not "empty" — it falls through the chain to the white default.
    if value.is_empty() {
        return Rgb::BLACK;
    }
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        return from_hex(hex);
    }

    if value.starts_with("rgb") {
        let numbers = numeric_substrings(value);
        if numbers.len() >= 3 {
            return from_rgb_components(&numbers[..3]);
        }
        // Fewer than three numbers: not treated as a numeric format at
        // all; fall through to the keyword rules.
    }

    from_named(value).unwrap_or(Rgb::WHITE)
}

/// Parse the digits of a hex color (without the `#`).
fn from_hex(hex: &str) -> Rgb {
    let channels = match hex.len() {
        // Three-digit shorthand: each digit is replicated, not zero-padded.
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..=i].repeat(2), 16).ok();
            (digit(0), digit(1), digit(2))
        }
        6 => {
            let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            (pair(0), pair(2), pair(4))
        }
        _ => return Rgb::BLACK,
    };
    match channels {
        (Some(r), Some(g), Some(b)) => Rgb::from_u8(r, g, b),
        _ => Rgb::BLACK,
    }
}

/// Collect maximal runs of digits and dots from a value string.
fn numeric_substrings(value: &str) -> Vec<String> {
    let mut runs = Vec::new();
    let mut current = String::new();
    for c in value.chars() {
        if c.is_ascii_digit() || c == '.' {
            current.push(c);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Interpret three numeric substrings as 0–255 channels, clamped.
fn from_rgb_components(components: &[String]) -> Rgb {
    let mut channels = [0.0f64; 3];
    for (slot, text) in channels.iter_mut().zip(components) {
        match text.parse::<f64>() {
            Ok(v) => *slot = (v / 255.0).clamp(0.0, 1.0),
            // A run like "..." is not a number; the whole value falls
            // back to black, same as a bad hex digit.
            Err(_) => return Rgb::BLACK,
        }
    }
    Rgb {
        r: channels[0],
        g: channels[1],
        b: channels[2],
    }
}

/// The fixed named-color table.
///
/// A small set of common keywords only; extending it to the full CSS
/// named-color list is out of scope. Note `green` is the half-intensity
/// CSS green, not `lime`, and `transparent` maps to white because the
/// output model has no alpha channel.
fn from_named(name: &str) -> Option<Rgb> {
    let rgb = match name.to_ascii_lowercase().as_str() {
        "transparent" | "white" => Rgb::WHITE,
        "black" => Rgb::BLACK,
        "red" => Rgb { r: 1.0, g: 0.0, b: 0.0 },
        "green" => Rgb { r: 0.0, g: 0.5, b: 0.0 },
        "blue" => Rgb { r: 0.0, g: 0.0, b: 1.0 },
        "yellow" => Rgb { r: 1.0, g: 1.0, b: 0.0 },
        "cyan" | "aqua" => Rgb { r: 0.0, g: 1.0, b: 1.0 },
        "magenta" | "fuchsia" => Rgb { r: 1.0, g: 0.0, b: 1.0 },
        "gray" | "grey" => Rgb { r: 0.5, g: 0.5, b: 0.5 },
        "orange" => Rgb { r: 1.0, g: 0.65, b: 0.0 },
        "purple" => Rgb { r: 0.5, g: 0.0, b: 0.5 },
        "brown" => Rgb { r: 0.65, g: 0.16, b: 0.16 },
        "pink" => Rgb { r: 1.0, g: 0.75, b: 0.8 },
        "lime" => Rgb { r: 0.0, g: 1.0, b: 0.0 },
        "navy" => Rgb { r: 0.0, g: 0.0, b: 0.5 },
        "teal" => Rgb { r: 0.0, g: 0.5, b: 0.5 },
        "silver" => Rgb { r: 0.75, g: 0.75, b: 0.75 },
        "maroon" => Rgb { r: 0.5, g: 0.0, b: 0.0 },
        "olive" => Rgb { r: 0.5, g: 0.5, b: 0.0 },
        _ => return None,
    };
    Some(rgb)
}
