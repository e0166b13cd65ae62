//! System typeface discovery.
//!
//! The preview stack has no bundled font data; it searches a fixed list of
//! common system locations for a regular and a bold face.

use fontdue::{Font, FontSettings};

/// Common system font paths to search for the regular face.
pub(crate) const FONT_SEARCH_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/SFNS.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// System font paths for the bold face.
pub(crate) const FONT_BOLD_SEARCH_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Try to load a font from a list of filesystem paths.
pub(crate) fn load_font_from_paths(paths: &[&str], label: &str) -> Option<Font> {
    for path in paths {
        if let Ok(data) = std::fs::read(path)
            && let Ok(font) = Font::from_bytes(data, FontSettings::default())
        {
            eprintln!("Loaded {label} font: {path}");
            return Some(font);
        }
    }
    None
}
