//! Visual-node scene model and layout synthesis for the Stencil design
//! converter.
//!
//! # Scope
//!
//! This crate implements:
//! - **Scene model** — [`VisualNode`] with geometry, paint, and a closed
//!   [`NodeKind`] union (container, text leaf, placeholder rectangle)
//! - **Tag dispatch** — [`TagCategory`], a closed union mapping element tag
//!   names to exactly one layout handler, with `Flatten` as the default
//! - **Layout synthesis** — [`LayoutSynthesizer`], a single-pass vertical
//!   flow that stacks siblings below one another with an explicitly threaded
//!   cursor
//! - **Host boundary** — the [`DesignHost`] trait for viewport context and
//!   typeface preparation, and the [`TextMetrics`] measurement seam
//!
//! # Not Implemented
//!
//! - Horizontal flow, wrapping, flexbox, or grid layout
//! - Container auto-sizing: a container's height never grows to enclose its
//!   children's accumulated extent (see [`synthesize`])

/// Tag-to-handler dispatch categories.
pub mod category;
/// The external design-host boundary.
pub mod host;
/// Text measurement abstraction.
pub mod metrics;
/// The visual-node scene model.
pub mod node;
/// Vertical-flow layout synthesis.
pub mod synthesize;

pub use category::TagCategory;
pub use host::{DesignHost, HostError, Point};
pub use metrics::{ApproximateTextMetrics, TextMetrics};
pub use node::{NodeKind, Padding, VisualNode};
pub use synthesize::LayoutSynthesizer;
