//! Container box model.
//!
//! Every container declares its geometry as [`LengthPair`]s and resolves it to
//! pixels once per pass against a [`ResolveContext`]. The resolved box has
//! three nested areas:
//!
//! ```text
//! ┌───────────────────────────────┐
//! │          margin-up            │
//! │   ┌───────────────────────┐   │
//! │   │      padding-up       │   │
//! │   │   ┌───────────────┐   │   │
//! │ m │ p │               │ p │ m │
//! │ a │ a │    CONTENT    │ a │ a │
//! │ r │ d │ width, height │ d │ r │
//! │ g │ d │               │ d │ g │
//! │ i │ i │               │ i │ i │
//! │ n │ n │               │ n │ n │
//! │   │ g └───────────────┘ g │   │
//! │   │      padding-down     │   │
//! │   └───────────────────────┘   │
//! │          margin-down          │
//! └───────────────────────────────┘
//! ```
//!
//! The *total* size is content plus padding. Margins are never part of a
//! node's own size: they only space it from its siblings and count towards
//! its parent's overflow.

use serde::{Deserialize, Serialize};
use trellis_units::{Axis, EdgeLengths, Edges, LengthPair, Point, ResolveContext, Size};

/// Pixel sizes of the four sides of a margin or padding.
pub type EdgeSizes = Edges<f64>;

/// A rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f64,
    /// Vertical position of the top-left corner.
    pub y: f64,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its corner and extents.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle at `origin` with extents `size`.
    #[must_use]
    pub const fn from_parts(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// The top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The extents.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether `point` lies inside this rectangle, edges included.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// This rectangle moved by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// This rectangle grown outward by `edges`.
    ///
    /// ```text
    /// x = x - left
    /// y = y - up
    /// width  = width + left + right
    /// height = height + up + down
    /// ```
    #[must_use]
    pub fn expand(&self, edges: &EdgeSizes) -> Self {
        Self::new(
            self.x - edges.left,
            self.y - edges.up,
            self.width + edges.left + edges.right,
            self.height + edges.up + edges.down,
        )
    }
}

/// Declared geometry of a container, in any unit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxGeometry {
    /// Content width.
    pub width: LengthPair,
    /// Content height.
    pub height: LengthPair,
    /// Horizontal offset, used by absolute and relative positioning.
    pub pos_x: LengthPair,
    /// Vertical offset, used by absolute and relative positioning.
    pub pos_y: LengthPair,
    /// Outer spacing, per side.
    pub margin: EdgeLengths,
    /// Inner spacing, per side.
    pub padding: EdgeLengths,
}

impl BoxGeometry {
    /// Resolve every field to pixels.
    ///
    /// Horizontal quantities (width, `pos_x`, left/right sides) resolve against
    /// the parent width, vertical ones against the parent height.
    #[must_use]
    pub fn resolve(&self, ctx: &ResolveContext) -> ResolvedBox {
        ResolvedBox {
            content: Size::new(
                ctx.to_px(self.width, Axis::Horizontal),
                ctx.to_px(self.height, Axis::Vertical),
            ),
            offset: Point::new(
                ctx.to_px(self.pos_x, Axis::Horizontal),
                ctx.to_px(self.pos_y, Axis::Vertical),
            ),
            margin: resolve_edges(&self.margin, ctx),
            padding: resolve_edges(&self.padding, ctx),
        }
    }
}

/// Resolve each side of `edges` along its own axis.
#[must_use]
pub fn resolve_edges(edges: &EdgeLengths, ctx: &ResolveContext) -> EdgeSizes {
    edges.map(|side, pair| ctx.to_px(pair, side.axis()))
}

/// A container's geometry for one pass, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedBox {
    /// Content size (declared width and height).
    pub content: Size,
    /// Resolved `pos_x`/`pos_y`.
    pub offset: Point,
    /// Resolved margins.
    pub margin: EdgeSizes,
    /// Resolved paddings.
    pub padding: EdgeSizes,
}

impl ResolvedBox {
    /// Content width plus left and right padding.
    #[must_use]
    pub fn total_width(&self) -> f64 {
        self.content.width + self.padding.left + self.padding.right
    }

    /// Content height plus top and bottom padding.
    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.content.height + self.padding.up + self.padding.down
    }

    /// Total size on both axes; the size of the node's own rectangle.
    #[must_use]
    pub fn total_size(&self) -> Size {
        Size::new(self.total_width(), self.total_height())
    }

    /// The margin box of a node whose rectangle is `frame`.
    #[must_use]
    pub fn margin_box(&self, frame: Rect) -> Rect {
        frame.expand(&self.margin)
    }
}
