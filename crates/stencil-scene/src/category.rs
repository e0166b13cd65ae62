//! Tag-to-handler dispatch.
//!
//! Every element tag maps to exactly one layout category. The mapping is a
//! closed union with [`TagCategory::Flatten`] as the default bucket, so an
//! unrecognized tag never fails — it simply contributes no visual node of
//! its own while still exposing its children to the surrounding flow.

use strum_macros::Display;

/// Layout handler categories, keyed by lowercase tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TagCategory {
    /// Frame tags that hold children and participate in vertical flow.
    Container,
    /// `button`: frame plus a centered label.
    Button,
    /// `input`: bordered frame plus an optional placeholder label.
    Input,
    /// Text tags (`p`, `h1`–`h6`, `span`, `label`).
    TextLeaf,
    /// `img`: a placeholder rectangle plus a centered caption.
    Image,
    /// Everything else: no node, children surface into the parent's flow.
    Flatten,
}

impl TagCategory {
    /// Categorize a normalized (lowercase) tag name.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "div" | "section" | "article" | "main" | "header" | "footer" | "nav" => {
                Self::Container
            }
            "button" => Self::Button,
            "input" => Self::Input,
            "p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "span" | "label" => Self::TextLeaf,
            "img" => Self::Image,
            _ => Self::Flatten,
        }
    }
}

/// Whether a tag is a heading (renders bold by default).
#[must_use]
pub fn is_heading(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

/// Default font size in pixels for a text tag.
#[must_use]
pub fn default_font_size(tag: &str) -> f64 {
    match tag {
        "h1" => 32.0,
        "h2" => 28.0,
        "h3" => 24.0,
        "h4" => 20.0,
        "h5" => 18.0,
        "h6" => 16.0,
        _ => 14.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert_eq!(TagCategory::from_tag("div"), TagCategory::Container);
        assert_eq!(TagCategory::from_tag("nav"), TagCategory::Container);
        assert_eq!(TagCategory::from_tag("button"), TagCategory::Button);
        assert_eq!(TagCategory::from_tag("input"), TagCategory::Input);
        assert_eq!(TagCategory::from_tag("h3"), TagCategory::TextLeaf);
        assert_eq!(TagCategory::from_tag("img"), TagCategory::Image);
    }

    #[test]
    fn test_unknown_tag_flattens() {
        assert_eq!(TagCategory::from_tag("foo"), TagCategory::Flatten);
        assert_eq!(TagCategory::from_tag("table"), TagCategory::Flatten);
        assert_eq!(TagCategory::from_tag(""), TagCategory::Flatten);
    }

    #[test]
    fn test_heading_sizes() {
        assert!((default_font_size("h1") - 32.0).abs() < 1e-9);
        assert!((default_font_size("h6") - 16.0).abs() < 1e-9);
        assert!((default_font_size("p") - 14.0).abs() < 1e-9);
        assert!(is_heading("h2"));
        assert!(!is_heading("p"));
    }
}
