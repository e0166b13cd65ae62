//! Per-element cascade resolution.

use stencil_dom::ElementData;

use crate::sheet::{ComputedStyle, SelectorStyleMap, parse_declarations};

/// Resolve the computed style for one element.
///
/// Style origins merge in a fixed order, later origins overwriting earlier
/// ones property by property:
///
/// 1. the element's inline `style` attribute text,
/// 2. each class token's `.class` rule, in the order the tokens appear in
///    the `class` attribute,
/// 3. the `#id` rule, if any.
///
/// So id beats class beats inline — precedence is purely origin order,
/// with no specificity arithmetic. Classes and ids with no matching rule
/// contribute nothing. The result is freshly built per call and never
/// cached.
#[must_use]
pub fn resolve_style(element: &ElementData, sheet: &SelectorStyleMap) -> ComputedStyle {
    let mut style = ComputedStyle::new();

    if !element.inline_style.is_empty() {
        style.merge(&parse_declarations(&element.inline_style));
    }

    for class in &element.classes {
        if let Some(declarations) = sheet.get(&format!(".{class}")) {
            style.merge(declarations);
        }
    }

    if let Some(id) = &element.id
        && let Some(declarations) = sheet.get(&format!("#{id}"))
    {
        style.merge(declarations);
    }

    style
}
