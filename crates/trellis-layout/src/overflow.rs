//! Overflow measurement.
//!
//! A container overflows on an axis when the margin boxes of its visible
//! children reach past its total size (positive excess) or into negative
//! coordinates (negative excess). Both contribute to the scrollable range:
//!
//! ```text
//! excess_x   = max(0, max(child.margin_box.right)  - container.total_width)
//! negative_x = max(0, -min(child.margin_box.x))
//! size_x     = excess_x + negative_x
//! ```
//!
//! and symmetrically for `y`.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use trellis_units::Size;

use crate::box_model::Rect;

/// What a container does with content that does not fit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OverflowBehaviour {
    /// Clip, and let the wheel scroll the content.
    #[default]
    Scroll,
    /// Clip without scrolling.
    Hidden,
    /// Never clip.
    Visible,
}

/// Overflow of one container, per axis, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Overflow {
    /// Distance the furthest child reaches past the right edge.
    pub excess_x: f64,
    /// Distance the furthest child reaches past the bottom edge.
    pub excess_y: f64,
    /// Distance the leftmost child reaches into negative `x`.
    pub negative_x: f64,
    /// Distance the topmost child reaches into negative `y`.
    pub negative_y: f64,
}

impl Overflow {
    /// Measure `children` (margin boxes, relative to the container's top-left
    /// corner) against a container of total size `container`.
    #[must_use]
    pub fn measure(children: impl IntoIterator<Item = Rect>, container: Size) -> Self {
        let mut overflow = Self::default();
        for child in children {
            overflow.excess_x = overflow.excess_x.max(child.right() - container.width);
            overflow.excess_y = overflow.excess_y.max(child.bottom() - container.height);
            overflow.negative_x = overflow.negative_x.max(-child.x);
            overflow.negative_y = overflow.negative_y.max(-child.y);
        }
        overflow
    }

    /// Total horizontal scrollable range.
    #[must_use]
    pub fn size_x(&self) -> f64 {
        self.excess_x + self.negative_x
    }

    /// Total vertical scrollable range.
    #[must_use]
    pub fn size_y(&self) -> f64 {
        self.excess_y + self.negative_y
    }

    /// Whether content overflows horizontally.
    #[must_use]
    pub fn is_overflowed_x(&self) -> bool {
        self.size_x() != 0.0
    }

    /// Whether content overflows vertically.
    #[must_use]
    pub fn is_overflowed_y(&self) -> bool {
        self.size_y() != 0.0
    }

    /// Whether content overflows on either axis.
    #[must_use]
    pub fn is_overflowed(&self) -> bool {
        self.is_overflowed_x() || self.is_overflowed_y()
    }
}
