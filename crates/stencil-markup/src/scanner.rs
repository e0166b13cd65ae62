//! Single-pass element scanner.
//!
//! At each nesting level the scanner walks the content once, matching
//! elements against a small grammar:
//!
//! ```text
//! element      = paired | self-closing
//! paired       = "<" tag-name attribute-list ">" content "</" tag-name ">"
//! self-closing = "<" tag-name attribute-list "/>"
//! tag-name     = word-char+
//! ```
//!
//! The close tag of a paired element is located by depth-counting opens
//! and closes of the *same* tag name, so nested same-tag elements pair up
//! correctly. The inner content of a paired match is recursively re-scanned
//! with the same grammar to discover the children one level down.
//!
//! Failure is always silent: a `<` that does not begin a matchable element
//! is skipped and scanning resumes one character later, which is what lets
//! the children of an unclosed tag surface at the enclosing level instead
//! of vanishing with their parent.

use stencil_common::warning::{Component, warn_once};
use stencil_dom::{ElementTree, NodeId};

use crate::attributes::extract_attributes;

/// A successfully matched element within one level's content.
struct ElementMatch {
    /// Tag name exactly as written (normalized later).
    tag_name: String,
    /// The raw attribute-list text between the tag name and `>`.
    attr_text: String,
    /// Inner content for paired elements, `None` for self-closing.
    inner: Option<Vec<char>>,
    /// Index just past the element in the level's content.
    end: usize,
}

/// `\w`-style word character: letters, digits, underscore.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Find `needle` in `haystack` at or after `from`, comparing ASCII
/// case-insensitively.
pub(crate) fn find_ci(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (from..=haystack.len() - needle.len()).find(|&i| starts_with_ci(haystack, i, needle))
}

/// Check whether `haystack[at..]` begins with `needle`, ASCII
/// case-insensitively.
fn starts_with_ci(haystack: &[char], at: usize, needle: &[char]) -> bool {
    haystack.len() >= at + needle.len()
        && haystack[at..at + needle.len()]
            .iter()
            .zip(needle)
            .all(|(a, b)| a.eq_ignore_ascii_case(b))
}

/// Scan one level of content, attaching every matched top-level element to
/// `parent` and recursing into paired elements' inner content.
pub(crate) fn scan_level(content: &[char], tree: &mut ElementTree, parent: NodeId) {
    let mut pos = 0;
    while pos < content.len() {
        if content[pos] != '<' || !matches!(content.get(pos + 1), Some(c) if is_word_char(*c)) {
            pos += 1;
            continue;
        }
        match match_element(content, pos) {
            Some(m) => {
                build_element(&m, tree, parent);
                pos = m.end;
            }
            None => {
                // Unmatched open tag: drop it and keep scanning, so any
                // elements inside it are discovered at this level.
                let tag: String = content[pos + 1..]
                    .iter()
                    .take_while(|c| is_word_char(**c))
                    .collect();
                warn_once(Component::Markup, &format!("dropping unmatched <{tag}> tag"));
                pos += 1;
            }
        }
    }
}

/// Try to match one element starting at `start` (which must point at `<`).
fn match_element(content: &[char], start: usize) -> Option<ElementMatch> {
    let mut i = start + 1;
    let name_start = i;
    while i < content.len() && is_word_char(content[i]) {
        i += 1;
    }
    if i == name_start {
        return None;
    }
    let tag_name: String = content[name_start..i].iter().collect();

    // Attribute list runs to the first `>`. No quote-awareness here: a `>`
    // inside a quoted attribute value ends the tag, matching the lenient
    // single-pass grammar.
    let gt = content[i..].iter().position(|&c| c == '>')? + i;
    let mut attr_text: String = content[i..gt].iter().collect();

    if attr_text.ends_with('/') {
        let _ = attr_text.pop();
        return Some(ElementMatch {
            tag_name,
            attr_text,
            inner: None,
            end: gt + 1,
        });
    }

    let (inner_end, close_end) = find_matching_close(content, gt + 1, &tag_name)?;
    Some(ElementMatch {
        tag_name,
        attr_text,
        inner: Some(content[gt + 1..inner_end].to_vec()),
        end: close_end,
    })
}

/// Locate the close tag pairing with an open tag of `tag_name` whose content
/// begins at `from`. Depth-counts same-name opens so nested same-tag
/// elements resolve to the correct close.
///
/// Returns `(inner_end, close_end)`: the index of the close tag's `<` and
/// the index just past its `>`.
fn find_matching_close(content: &[char], from: usize, tag_name: &str) -> Option<(usize, usize)> {
    let name: Vec<char> = tag_name.chars().collect();
    let mut depth = 1usize;
    let mut j = from;

    while j < content.len() {
        if content[j] != '<' {
            j += 1;
            continue;
        }
        if let Some(close_end) = probe_close(content, j, &name) {
            depth -= 1;
            if depth == 0 {
                return Some((j, close_end));
            }
            j = close_end;
        } else if let Some((self_closing, next)) = probe_open(content, j, &name) {
            if !self_closing {
                depth += 1;
            }
            j = next;
        } else {
            j += 1;
        }
    }
    None
}

/// If `pos` begins `</name ... >`, return the index just past the `>`.
fn probe_close(content: &[char], pos: usize, name: &[char]) -> Option<usize> {
    if content.get(pos + 1) != Some(&'/') || !starts_with_ci(content, pos + 2, name) {
        return None;
    }
    let after = pos + 2 + name.len();
    if matches!(content.get(after), Some(c) if is_word_char(*c)) {
        return None;
    }
    let mut k = after;
    while matches!(content.get(k), Some(c) if c.is_whitespace()) {
        k += 1;
    }
    (content.get(k) == Some(&'>')).then_some(k + 1)
}

/// If `pos` begins an open tag of the same `name`, return whether it is
/// self-closing and the index just past its `>`.
fn probe_open(content: &[char], pos: usize, name: &[char]) -> Option<(bool, usize)> {
    if !starts_with_ci(content, pos + 1, name) {
        return None;
    }
    let after = pos + 1 + name.len();
    if matches!(content.get(after), Some(c) if is_word_char(*c)) {
        return None;
    }
    let gt = content[after..].iter().position(|&c| c == '>')? + after;
    let self_closing = gt > after && content[gt - 1] == '/';
    Some((self_closing, gt + 1))
}

/// Allocate the matched element, recurse into its inner content, derive its
/// text content, and attach it to `parent`.
fn build_element(m: &ElementMatch, tree: &mut ElementTree, parent: NodeId) {
    let data = extract_attributes(&m.tag_name, &m.attr_text);
    let id = tree.alloc(data);

    if let Some(inner) = &m.inner {
        scan_level(inner, tree, id);
        // Text content: when nested elements were found, it is the inner
        // content with all tag markup removed; otherwise the raw inner
        // content. Trimmed either way.
        let text = if tree.children(id).is_empty() {
            inner.iter().collect::<String>().trim().to_string()
        } else {
            strip_tags(inner).trim().to_string()
        };
        if let Some(node) = tree.get_mut(id) {
            node.data.text = text;
        }
    }

    tree.append_child(parent, id);
}

/// Remove every `<...>` span from content, leaving the interleaved text.
/// A `<` with no following `>` is kept as ordinary text.
fn strip_tags(content: &[char]) -> String {
    let mut out = String::new();
    let mut pos = 0;
    while pos < content.len() {
        if content[pos] == '<'
            && let Some(rel) = content[pos + 1..].iter().position(|&c| c == '>')
            && rel > 0
        {
            pos += rel + 2;
        } else {
            out.push(content[pos]);
            pos += 1;
        }
    }
    out
}
