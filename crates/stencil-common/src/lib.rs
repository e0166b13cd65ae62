//! Shared utilities for the Stencil design converter.
//!
//! Currently this is just deduplicated warning output. The conversion
//! pipeline never raises; lenient stages report what they dropped through
//! [`warning::warn_once`] instead.

pub mod warning;
