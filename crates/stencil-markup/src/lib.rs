//! Lenient recursive markup parser for the Stencil design converter.
//!
//! # Scope
//!
//! This crate turns raw markup text into an [`ElementTree`] without a full
//! document-object implementation. It is deliberately not a conformant
//! HTML parser:
//!
//! - At each nesting level, a single pass locates top-level elements that
//!   are either a paired open/close tag (same tag name) or a self-closing
//!   tag. The inner content of a paired match is re-scanned with the same
//!   rule to discover the next level of children.
//! - Script blocks and comment blocks are stripped before any element
//!   matching.
//! - Anything that cannot be matched — an unclosed tag, a stray close tag,
//!   tag soup — is dropped silently. Parsing never fails; malformed input
//!   just yields a smaller tree.
//!
//! # Not Implemented
//!
//! - Tag-soup recovery and implied end tags
//! - Entity/character references
//! - The full attribute grammar (only quoted and bare values; only the
//!   attributes the synthesizer consumes are kept)

mod attributes;
mod scanner;

use stencil_dom::{ElementTree, NodeId};

/// Parse markup text into an element tree.
///
/// The returned tree always has a synthetic root standing in for the
/// document body; top-level elements become its children. An empty input
/// yields a root with no children. This function never fails.
#[must_use]
pub fn parse_markup(input: &str) -> ElementTree {
    let mut tree = ElementTree::new();
    let cleaned = preprocess(input);
    scanner::scan_level(&cleaned, &mut tree, NodeId::ROOT);
    tree
}

/// Strip script blocks and comment blocks, unconditionally, before any
/// element matching.
///
/// A `<script>` without a matching close tag is left in place (the element
/// scanner will fail to match it and drop it). An unterminated comment is
/// likewise left alone.
fn preprocess(input: &str) -> Vec<char> {
    let chars: Vec<char> = input.chars().collect();
    let without_scripts = strip_script_blocks(&chars);
    strip_comment_blocks(&without_scripts)
}

/// Remove every `<script ...>...</script>` span (ASCII case-insensitive).
fn strip_script_blocks(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut pos = 0;
    loop {
        match next_script_block(chars, pos) {
            Some((start, end)) => {
                out.extend_from_slice(&chars[pos..start]);
                pos = end;
            }
            None => {
                out.extend_from_slice(&chars[pos..]);
                break;
            }
        }
    }
    out
}

/// Locate the next complete script block at or after `from`, returning its
/// start index and the index just past `</script>`.
fn next_script_block(chars: &[char], from: usize) -> Option<(usize, usize)> {
    const OPEN: &[char] = &['<', 's', 'c', 'r', 'i', 'p', 't'];
    const CLOSE: &[char] = &['<', '/', 's', 'c', 'r', 'i', 'p', 't', '>'];

    let mut search = from;
    while let Some(start) = scanner::find_ci(chars, OPEN, search) {
        // Word boundary after the tag name, so `<scripted>` is untouched.
        if matches!(chars.get(start + OPEN.len()), Some(c) if scanner::is_word_char(*c)) {
            search = start + 1;
            continue;
        }
        // Unclosed script blocks are left in place; the element scanner
        // will fail to match them and drop them.
        let close = scanner::find_ci(chars, CLOSE, start + OPEN.len())?;
        return Some((start, close + CLOSE.len()));
    }
    None
}

/// Remove every `<!-- ... -->` span.
fn strip_comment_blocks(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut pos = 0;
    while pos < chars.len() {
        if let Some(start) = scanner::find_ci(chars, &['<', '!', '-', '-'], pos) {
            if let Some(close) = scanner::find_ci(chars, &['-', '-', '>'], start + 4) {
                out.extend_from_slice(&chars[pos..start]);
                pos = close + 3;
                continue;
            }
        }
        out.extend_from_slice(&chars[pos..]);
        break;
    }
    out
}

/// Print an element tree to stdout for debugging.
pub fn print_tree(tree: &ElementTree, id: NodeId, indent: usize) {
    let prefix = "  ".repeat(indent);
    if let Some(node) = tree.get(id) {
        let data = &node.data;
        let mut attrs: Vec<String> = Vec::new();
        if let Some(id_val) = &data.id {
            attrs.push(format!("id=\"{id_val}\""));
        }
        if !data.classes.is_empty() {
            attrs.push(format!("class=\"{}\"", data.classes.join(" ")));
        }
        if !data.inline_style.is_empty() {
            attrs.push(format!("style=\"{}\"", data.inline_style));
        }
        if attrs.is_empty() {
            println!("{prefix}<{}>", data.tag_name);
        } else {
            println!("{prefix}<{} {}>", data.tag_name, attrs.join(" "));
        }
        if !data.text.is_empty() {
            println!("{prefix}  \"{}\"", data.text);
        }
        for &child_id in tree.children(id) {
            print_tree(tree, child_id, indent + 1);
        }
    }
}
