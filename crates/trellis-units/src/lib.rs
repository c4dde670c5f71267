//! Length units and unit conversion for the Trellis layout engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **Units** - [`Unit`] and the [`LengthPair`] value type, with the
//!   `<number>(px|%|vw|vh)` text grammar used by every string-settable
//!   geometry field
//! - **Shorthand lists** - [`Edges`] and the 1/2/3/4-value margin/padding
//!   shorthand
//! - **Unit conversion** - [`convert`], the closed table of pairwise
//!   conversions between pixels, percentages and viewport units
//! - **Contextual resolution** - [`resolve`], which supplies the percentage
//!   base and viewport for one [`Axis`] of a container
//!
//! # Percentages
//!
//! Percentages are stored as fractions everywhere: `"50%"` parses to a
//! [`LengthPair`] of length `0.5`. Viewport units are not: `"50vw"` is `50.0`.

/// Pairwise conversions between length units.
pub mod convert;
/// Four-sided length lists and the margin/padding shorthand.
pub mod edges;
/// Errors produced while parsing length text.
pub mod error;
/// Plain size and point types.
pub mod geometry;
/// Resolution of length pairs against a parent size and the viewport.
pub mod resolve;
/// Units and length pairs.
pub mod unit;

// Re-exports for convenience
pub use edges::{EdgeLengths, Edges, Side};
pub use error::LengthError;
pub use geometry::{Point, Size};
pub use resolve::{Axis, ResolveContext, resolve, resolve_height, resolve_width};
pub use unit::{LengthPair, Unit};
