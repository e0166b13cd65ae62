//! Stylesheet and declaration parsing.
//!
//! The stylesheet grammar is a flat sequence of `selector { declarations }`
//! rule blocks found by a single global scan. A selector is one token:
//! `.class`, `#id`, or a bare word (bare words are stored but nothing ever
//! looks them up — the resolver only consults class and id keys). There is
//! no support for combinators, selector lists, or nesting; a selector list
//! like `h1, .card` contributes only the token adjacent to the `{`.

use std::collections::HashMap;

/// Mapping from property name to raw value string for one rule block or
/// one element's computed style.
pub type DeclarationMap = HashMap<String, String>;

/// Parsed stylesheet: selector key → declaration mapping.
///
/// If the same selector key appears in multiple rule blocks, the later
/// block's declarations entirely *replace* the earlier ones. There is no
/// property-level merge across occurrences of the same selector.
#[derive(Debug, Clone, Default)]
pub struct SelectorStyleMap {
    rules: HashMap<String, DeclarationMap>,
}

impl SelectorStyleMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the declarations for a selector key, exactly as written
    /// (".card", "#main").
    #[must_use]
    pub fn get(&self, selector: &str) -> Option<&DeclarationMap> {
        self.rules.get(selector)
    }

    /// Store a rule block, replacing any previous block for the selector.
    pub fn insert_rule(&mut self, selector: String, declarations: DeclarationMap) {
        let _ = self.rules.insert(selector, declarations);
    }

    /// Number of distinct selectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the stylesheet had no usable rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Per-element computed style: an ephemeral property → raw value mapping
/// produced fresh during synthesis, never cached or shared across elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedStyle {
    props: DeclarationMap,
}

impl ComputedStyle {
    /// Create an empty computed style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a property's raw value.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.props.get(property).map(String::as_str)
    }

    /// Merge a declaration mapping into this style, overwriting any
    /// previously set property of the same name.
    pub fn merge(&mut self, declarations: &DeclarationMap) {
        for (property, value) in declarations {
            let _ = self.props.insert(property.clone(), value.clone());
        }
    }

    /// Whether no properties are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

/// Parse stylesheet text into a [`SelectorStyleMap`].
///
/// Malformed rule blocks are skipped without error; this function never
/// fails. Empty input yields an empty map.
#[must_use]
pub fn parse_stylesheet(stylesheet: &str) -> SelectorStyleMap {
    let mut map = SelectorStyleMap::new();
    let chars: Vec<char> = stylesheet.chars().collect();
    let mut pos = 0;

    while pos < chars.len() {
        let Some(open_rel) = chars[pos..].iter().position(|&c| c == '{') else {
            break;
        };
        let open = pos + open_rel;
        let Some(close_rel) = chars[open..].iter().position(|&c| c == '}') else {
            break;
        };
        let close = open + close_rel;

        // A zero-length block is not a rule: `.card {}` leaves an earlier
        // `.card` rule in place. A whitespace-only block is a rule with no
        // declarations and *does* replace the earlier one.
        if close > open + 1
            && let Some(selector) = selector_before(&chars[pos..open])
        {
            let block: String = chars[open + 1..close].iter().collect();
            map.insert_rule(selector, parse_declarations(&block));
        }

        pos = close + 1;
    }

    map
}

/// Extract the single selector token immediately preceding a `{`: an
/// optional `.` or `#` sigil followed by word characters and hyphens.
/// Returns `None` when no such token is adjacent (after trailing
/// whitespace is ignored).
fn selector_before(prefix: &[char]) -> Option<String> {
    let mut end = prefix.len();
    while end > 0 && prefix[end - 1].is_whitespace() {
        end -= 1;
    }
    let mut start = end;
    while start > 0 && (prefix[start - 1].is_ascii_alphanumeric() || matches!(prefix[start - 1], '_' | '-')) {
        start -= 1;
    }
    if start == end {
        return None;
    }
    if start > 0 && matches!(prefix[start - 1], '.' | '#') {
        start -= 1;
    }
    Some(prefix[start..end].iter().collect())
}

/// Split declaration text into a property → value mapping.
///
/// Declarations are separated by `;`; each one is split on the *first*
/// `:` into property and value, both trimmed. Declarations missing either
/// half are dropped without error. Used for rule blocks and for inline
/// `style` attribute text — the two share one grammar.
#[must_use]
pub fn parse_declarations(text: &str) -> DeclarationMap {
    let mut declarations = DeclarationMap::new();
    for piece in text.split(';') {
        let Some((property, value)) = piece.split_once(':') else {
            continue;
        };
        let property = property.trim();
        let value = value.trim();
        if property.is_empty() || value.is_empty() {
            continue;
        }
        let _ = declarations.insert(property.to_string(), value.to_string());
    }
    declarations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_rule() {
        let map = parse_stylesheet(".card { width: 300px; background-color: #fff }");
        let decls = map.get(".card").unwrap();
        assert_eq!(decls.get("width").map(String::as_str), Some("300px"));
        assert_eq!(
            decls.get("background-color").map(String::as_str),
            Some("#fff")
        );
    }

    #[test]
    fn test_later_rule_replaces_not_merges() {
        let map = parse_stylesheet(".card { color: red } .card { width: 10px }");
        let decls = map.get(".card").unwrap();
        assert!(decls.get("color").is_none());
        assert_eq!(decls.get("width").map(String::as_str), Some("10px"));
    }

    #[test]
    fn test_id_selector_key_as_written() {
        let map = parse_stylesheet("#main-content { padding: 16px }");
        assert!(map.get("#main-content").is_some());
        assert!(map.get("main-content").is_none());
    }

    #[test]
    fn test_declaration_split_on_first_colon() {
        let map = parse_stylesheet(".x { background: url(a:b) }");
        let decls = map.get(".x").unwrap();
        assert_eq!(decls.get("background").map(String::as_str), Some("url(a:b)"));
    }

    #[test]
    fn test_malformed_declarations_dropped() {
        let map = parse_stylesheet(".x { color: red; broken; : nothing; width: }");
        let decls = map.get(".x").unwrap();
        assert_eq!(decls.len(), 1);
        assert_eq!(decls.get("color").map(String::as_str), Some("red"));
    }

    #[test]
    fn test_selector_list_contributes_adjacent_token_only() {
        let map = parse_stylesheet("h1, .title { color: blue }");
        assert!(map.get(".title").is_some());
        assert!(map.get("h1").is_none());
    }

    #[test]
    fn test_zero_length_block_is_skipped() {
        let map = parse_stylesheet(".card { color: red } .card {}");
        let decls = map.get(".card").unwrap();
        assert_eq!(decls.get("color").map(String::as_str), Some("red"));
    }

    #[test]
    fn test_whitespace_only_block_still_replaces() {
        let map = parse_stylesheet(".card { color: red } .card { }");
        let decls = map.get(".card").unwrap();
        assert!(decls.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let map = parse_stylesheet("");
        assert!(map.is_empty());
    }

    #[test]
    fn test_inline_style_shares_grammar() {
        let decls = parse_declarations("width: 120px; opacity: 0.5");
        assert_eq!(decls.get("width").map(String::as_str), Some("120px"));
        assert_eq!(decls.get("opacity").map(String::as_str), Some("0.5"));
    }
}
