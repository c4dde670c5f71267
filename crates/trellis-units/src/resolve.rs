//! Resolution of length pairs in the context of a container.
//!
//! [`convert`](crate::convert::convert) knows nothing about containers. This
//! module supplies its `base`: the parent's size on the axis being resolved.
//! Width-like quantities take the parent width, height-like quantities the
//! parent height, so the [`Axis`] is passed explicitly on every call and is
//! never inferred from the unit.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::convert::convert;
use crate::geometry::Size;
use crate::unit::{LengthPair, Unit};

/// The axis a length is measured along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    /// Widths, x positions, left/right margins and paddings.
    Horizontal,
    /// Heights, y positions, up/down margins and paddings.
    Vertical,
}

impl Axis {
    /// The extent of `size` along this axis.
    #[must_use]
    pub const fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }
}

/// Resolve `pair` into `target` units against an explicit percentage base.
///
/// Returns `0.0` when `target` is [`Unit::NotSet`].
#[must_use]
pub fn resolve(pair: LengthPair, base: f64, viewport: Size, target: Unit) -> f64 {
    convert(pair.length, pair.unit, target, base, viewport)
}

/// Resolve a width-axis `pair` against the parent's width.
#[must_use]
pub fn resolve_width(pair: LengthPair, parent_width: f64, viewport: Size, target: Unit) -> f64 {
    resolve(pair, parent_width, viewport, target)
}

/// Resolve a height-axis `pair` against the parent's height.
#[must_use]
pub fn resolve_height(pair: LengthPair, parent_height: f64, viewport: Size, target: Unit) -> f64 {
    resolve(pair, parent_height, viewport, target)
}

/// The two references every resolution needs: the parent's content size and
/// the viewport size.
///
/// A root container (or one whose parent cannot be found) uses the viewport
/// as its parent size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolveContext {
    /// Content size of the parent container.
    pub parent: Size,
    /// Size of the root window.
    pub viewport: Size,
}

impl ResolveContext {
    /// Context for a container nested in a parent of content size `parent`.
    #[must_use]
    pub const fn new(parent: Size, viewport: Size) -> Self {
        Self { parent, viewport }
    }

    /// Context for a root container.
    #[must_use]
    pub const fn root(viewport: Size) -> Self {
        Self::new(viewport, viewport)
    }

    /// The percentage base for `axis`.
    #[must_use]
    pub const fn base(&self, axis: Axis) -> f64 {
        axis.extent(self.parent)
    }

    /// Resolve `pair`, measured along `axis`, into `target` units.
    #[must_use]
    pub fn resolve(&self, pair: LengthPair, axis: Axis, target: Unit) -> f64 {
        match axis {
            Axis::Horizontal => resolve_width(pair, self.parent.width, self.viewport, target),
            Axis::Vertical => resolve_height(pair, self.parent.height, self.viewport, target),
        }
    }

    /// Resolve `pair`, measured along `axis`, into pixels.
    #[must_use]
    pub fn to_px(&self, pair: LengthPair, axis: Axis) -> f64 {
        self.resolve(pair, axis, Unit::Pixel)
    }
}
