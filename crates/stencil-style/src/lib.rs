//! Stylesheet parsing, cascade resolution, and value parsing for the
//! Stencil design converter.
//!
//! # Scope
//!
//! This crate implements:
//! - **Stylesheet parsing** — a single global scan for `selector { ... }`
//!   rule blocks with single-token class/id selectors
//! - **Cascade resolution** — per-element computed style from an ordered
//!   merge of style origins (inline, class tokens, id)
//! - **Color parsing** — hex, `rgb(...)`, and a fixed named-color table,
//!   normalized to unit-range RGB
//! - **Size parsing** — leading numeric portion with a fixed default
//!
//! # Not Implemented
//!
//! - Selector combinators, pseudo-classes, attribute selectors
//! - Specificity; precedence here is purely origin order (see [`resolve`])
//! - Percentage, `calc()`, and relative units — the numeric value is taken
//!   as pixels and any unit suffix is ignored

mod color;
mod resolve;
mod sheet;
mod size;

pub use color::{Rgb, to_rgb};
pub use resolve::resolve_style;
pub use sheet::{ComputedStyle, DeclarationMap, SelectorStyleMap, parse_declarations, parse_stylesheet};
pub use size::{DEFAULT_SIZE, parse_leading_number, to_size};
