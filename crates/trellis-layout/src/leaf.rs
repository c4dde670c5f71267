//! Opaque leaf widgets.
//!
//! Leaves are the host's own widgets (labels, images, buttons). Layout only
//! knows their measured size and, optionally, their anchors: fractions of the
//! parent's total size that pin each edge.
//!
//! ```text
//! x      = left * parent.width
//! y      = top  * parent.height
//! width  = (right  - left) * parent.width
//! height = (bottom - top)  * parent.height
//! ```

use serde::{Deserialize, Serialize};
use trellis_units::convert::px_to_percentage;
use trellis_units::{Point, Size};

use crate::box_model::{EdgeSizes, Rect};
use crate::positioned::Visibility;

/// Edge anchors of a leaf, as fractions of the parent's total size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Anchors {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
}

impl Anchors {
    /// Anchors that stretch over the whole parent.
    pub const FULL: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Create anchors from the four edges.
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Clamp every anchor into the padded part of a parent of total size
    /// `total`:
    ///
    /// ```text
    /// left, right ∈ [padding.left / width,  1 - padding.right / width]
    /// top, bottom ∈ [padding.up   / height, 1 - padding.down  / height]
    /// ```
    ///
    /// A zero-sized parent yields the unpadded range `[0, 1]`.
    #[must_use]
    pub fn clamp_to_padding(&self, total: Size, padding: &EdgeSizes) -> Self {
        let (min_x, max_x) = (
            px_to_percentage(padding.left, total.width),
            1.0 - px_to_percentage(padding.right, total.width),
        );
        let (min_y, max_y) = (
            px_to_percentage(padding.up, total.height),
            1.0 - px_to_percentage(padding.down, total.height),
        );
        Self::new(
            clamp(self.left, min_x, max_x),
            clamp(self.top, min_y, max_y),
            clamp(self.right, min_x, max_x),
            clamp(self.bottom, min_y, max_y),
        )
    }

    /// The rectangle these anchors describe inside a parent of total size
    /// `total`.
    #[must_use]
    pub fn rect(&self, total: Size) -> Rect {
        Rect::from_parts(
            Point::new(self.left * total.width, self.top * total.height),
            Size::new(
                (self.right - self.left) * total.width,
                (self.bottom - self.top) * total.height,
            ),
        )
    }
}

// When the padding leaves no room (`min > max`) the upper bound wins.
fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// A host widget with no layout of its own.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LeafWidget {
    /// Measured size, used when the leaf flows with its siblings.
    pub size: Size,
    /// Anchors, if the leaf is pinned to its parent instead of flowing.
    pub anchors: Option<Anchors>,
    /// Pixel offsets from the anchored edges; zeroed whenever anchors apply.
    pub offsets: EdgeSizes,
    /// Whether the leaf takes part in layout and is drawn.
    pub visibility: Visibility,
}

impl LeafWidget {
    /// A flowing leaf of the given measured size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            anchors: None,
            offsets: EdgeSizes::new(0.0, 0.0, 0.0, 0.0),
            visibility: Visibility::Visible,
        }
    }

    /// An anchored leaf.
    #[must_use]
    pub const fn anchored(anchors: Anchors) -> Self {
        let mut leaf = Self::new(0.0, 0.0);
        leaf.anchors = Some(anchors);
        leaf
    }

    /// Clamp the anchors into the parent's padded region and drop the
    /// offsets. Returns the resulting rectangle, or `None` for a flowing
    /// leaf.
    pub fn apply_anchors(&mut self, total: Size, padding: &EdgeSizes) -> Option<Rect> {
        let anchors = self.anchors?.clamp_to_padding(total, padding);
        self.anchors = Some(anchors);
        self.offsets = EdgeSizes::default();
        Some(anchors.rect(total))
    }
}
