//! Size value parsing.
//!
//! Sizes are the leading numeric portion of a value string, interpreted as
//! pixels. Unit suffixes (`px`, `em`, `%`) are ignored entirely, so
//! `"50%"` means 50 pixels. Values with no usable leading number fall back
//! to [`DEFAULT_SIZE`].

/// Fallback size in pixels when a value has no parseable leading number.
pub const DEFAULT_SIZE: f64 = 100.0;

/// Parse the leading numeric portion of a value string.
///
/// Takes the longest prefix that parses as an `f64`, considering only
/// characters that could belong to a number (digits, sign, decimal point,
/// exponent markers) and shrinking until the prefix is valid — so `"2.5em"`
/// yields 2.5 even though the `e` could have started an exponent. Returns
/// `None` when no prefix parses.
#[must_use]
pub fn parse_leading_number(value: &str) -> Option<f64> {
    let value = value.trim();
    // The candidate prefix is all ASCII, so byte slicing below is safe.
    let mut end = value
        .char_indices()
        .find(|&(_, c)| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .map_or(value.len(), |(i, _)| i);
    while end > 0 {
        if let Ok(number) = value[..end].parse() {
            return Some(number);
        }
        end -= 1;
    }
    None
}

/// Parse a size value, falling back to [`DEFAULT_SIZE`].
///
/// Total: every input maps to a number. `"300px"` → 300, `"2.5em"` → 2.5,
/// `"auto"` → 100.
#[must_use]
pub fn to_size(value: &str) -> f64 {
    parse_leading_number(value).unwrap_or(DEFAULT_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_value() {
        assert!((to_size("300px") - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_unit_ignored() {
        assert!((to_size("50%") - 50.0).abs() < 1e-9);
        assert!((to_size("2.5em") - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_bare_number() {
        assert!((to_size("42") - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative() {
        assert!((to_size("-8px") - -8.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_for_unparseable() {
        assert!((to_size("auto") - DEFAULT_SIZE).abs() < 1e-9);
        assert!((to_size("") - DEFAULT_SIZE).abs() < 1e-9);
        assert!((to_size("px300") - DEFAULT_SIZE).abs() < 1e-9);
    }

    #[test]
    fn test_leading_number_none_on_garbage() {
        assert!(parse_leading_number("auto").is_none());
        assert!(parse_leading_number("..").is_none());
    }
}
