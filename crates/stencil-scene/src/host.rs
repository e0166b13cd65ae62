//! The external design-host boundary.
//!
//! The synthesis core consumes, but does not implement, a host that
//! supplies viewport context, typeface readiness, and text measurement.
//! Typeface preparation is the only fallible step in the whole pipeline;
//! everything downstream assumes it already succeeded.

use thiserror::Error;

use crate::metrics::TextMetrics;

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// Errors reported by a design host.
#[derive(Debug, Error)]
pub enum HostError {
    /// A required typeface could not be loaded.
    #[error("typeface unavailable: {0}")]
    TypefaceUnavailable(String),
}

/// The design-tool session the finished scene is handed to.
///
/// Implementations must guarantee that after [`ensure_typefaces`] returns
/// `Ok`, both the regular and bold styles of the host's font family are
/// usable; synthesis performs no waiting of its own.
///
/// [`ensure_typefaces`]: DesignHost::ensure_typefaces
pub trait DesignHost {
    /// Center of the current viewport; the root frame is offset so this
    /// point is its center.
    fn viewport_center(&self) -> Point;

    /// Load the regular and bold typefaces, once, before synthesis.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::TypefaceUnavailable`] when a required face
    /// cannot be loaded.
    fn ensure_typefaces(&mut self) -> Result<(), HostError>;

    /// Text measurement backed by whatever font data the host holds.
    fn metrics(&self) -> &dyn TextMetrics;
}
