//! Attribute-list extraction.
//!
//! The attribute grammar is a flat sequence of `name`, `name=value`, or
//! `name="value"` / `name='value'` items separated by whitespace. Each
//! attribute of interest is extracted independently, and only the *first*
//! occurrence of a given name on a tag is honored — a duplicated `id` or
//! `class` is ignored, not merged.
//!
//! Everything except `id`, `class`, `style`, `placeholder`, and `alt` is
//! discarded.

use stencil_dom::ElementData;

/// One raw `name=value` pair pulled from the attribute list.
struct RawAttribute {
    name: String,
    value: String,
}

/// Build element data from a tag name and its raw attribute-list text.
pub(crate) fn extract_attributes(tag_name: &str, attr_text: &str) -> ElementData {
    let mut data = ElementData::new(tag_name);

    for attr in parse_attribute_list(attr_text) {
        match attr.name.as_str() {
            "id" if data.id.is_none() => data.id = Some(attr.value),
            // The class attribute's value is split on whitespace into
            // tokens; insertion order equals source order.
            "class" if data.classes.is_empty() => {
                data.classes = attr
                    .value
                    .split_whitespace()
                    .map(ToString::to_string)
                    .collect();
            }
            "style" if data.inline_style.is_empty() => data.inline_style = attr.value,
            "placeholder" if data.placeholder.is_none() => data.placeholder = Some(attr.value),
            "alt" if data.alt.is_none() => data.alt = Some(attr.value),
            _ => {}
        }
    }

    data
}

/// Tokenize the attribute-list text into raw pairs. Names are lowercased;
/// valueless attributes yield an empty value. Malformed fragments are
/// skipped without error.
fn parse_attribute_list(attr_text: &str) -> Vec<RawAttribute> {
    let chars: Vec<char> = attr_text.chars().collect();
    let mut attrs = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        // Skip to the start of the next attribute name.
        if !is_name_char(chars[pos]) {
            pos += 1;
            continue;
        }
        let name_start = pos;
        while pos < chars.len() && is_name_char(chars[pos]) {
            pos += 1;
        }
        let name: String = chars[name_start..pos]
            .iter()
            .collect::<String>()
            .to_ascii_lowercase();

        while matches!(chars.get(pos), Some(c) if c.is_whitespace()) {
            pos += 1;
        }
        if chars.get(pos) != Some(&'=') {
            attrs.push(RawAttribute {
                name,
                value: String::new(),
            });
            continue;
        }
        pos += 1;
        while matches!(chars.get(pos), Some(c) if c.is_whitespace()) {
            pos += 1;
        }

        let value = match chars.get(pos) {
            Some(&quote @ ('"' | '\'')) => {
                pos += 1;
                let value_start = pos;
                while pos < chars.len() && chars[pos] != quote {
                    pos += 1;
                }
                let value: String = chars[value_start..pos].iter().collect();
                // An unterminated quote swallows the rest of the tag, which
                // is the lenient thing to do.
                pos = (pos + 1).min(chars.len());
                value
            }
            Some(_) => {
                let value_start = pos;
                while pos < chars.len() && !chars[pos].is_whitespace() {
                    pos += 1;
                }
                chars[value_start..pos].iter().collect()
            }
            None => String::new(),
        };

        attrs.push(RawAttribute { name, value });
    }

    attrs
}

/// Attribute names: word characters plus `-`.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let data = extract_attributes("div", r#" id="a" id="b" "#);
        assert_eq!(data.id.as_deref(), Some("a"));
    }

    #[test]
    fn test_class_tokens_keep_source_order() {
        let data = extract_attributes("div", r#" class="card wide tall" "#);
        assert_eq!(data.classes, vec!["card", "wide", "tall"]);
    }

    #[test]
    fn test_single_quoted_and_unquoted_values() {
        let data = extract_attributes("input", r"placeholder='Your name' alt=photo");
        assert_eq!(data.placeholder.as_deref(), Some("Your name"));
        assert_eq!(data.alt.as_deref(), Some("photo"));
    }

    #[test]
    fn test_unknown_attributes_discarded() {
        let data = extract_attributes("img", r#" src="x.png" alt="A" data-n="1" "#);
        assert_eq!(data.alt.as_deref(), Some("A"));
        assert!(data.id.is_none());
    }

    #[test]
    fn test_attribute_names_case_insensitive() {
        let data = extract_attributes("div", r#" ID="main" Class="card" "#);
        assert_eq!(data.id.as_deref(), Some("main"));
        assert_eq!(data.classes, vec!["card"]);
    }
}
