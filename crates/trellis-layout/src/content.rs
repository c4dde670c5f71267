//! The content sub-region of a container.
//!
//! Each container owns one [`ContentRegion`] for its whole lifetime. It holds
//! the clipping and scroll bookkeeping; scrolling never touches the
//! container's box model.
//!
//! Scroll offsets are non-positive: `0` shows the start of the content and
//! `-max` shows the end.
//!
//! ```text
//! scroll_top  ∈ [-max_scroll_top,  min_scroll_top]     max_scroll_top  = overflow.size_y
//! scroll_left ∈ [-max_scroll_left, min_scroll_left]    max_scroll_left = overflow.size_x
//! ```

use trellis_units::{Axis, LengthPair, Point, ResolveContext, Size};

use crate::box_model::Rect;
use crate::config::LayoutConfig;
use crate::overflow::{Overflow, OverflowBehaviour};

/// Mirror of one scrollbar's range and position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollbarState {
    /// Lowest value.
    pub min: f64,
    /// Highest value.
    pub max: f64,
    /// Current value, the magnitude of the scroll offset.
    pub value: f64,
}

/// Scroll actually applied by [`ContentRegion::apply_scroll`], after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollDelta {
    /// Horizontal movement of the content.
    pub dx: f64,
    /// Vertical movement of the content.
    pub dy: f64,
}

impl ScrollDelta {
    /// Whether the content did not move.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Direction of a wheel notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    /// Towards the start of the content.
    Up,
    /// Towards the end of the content.
    Down,
}

/// A wheel event delivered to a container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    /// Wheel direction.
    pub direction: WheelDirection,
    /// Pointer position, relative to the container's top-left corner.
    pub pointer: Point,
}

/// Clipping and scroll state of a container's content.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRegion {
    behaviour: OverflowBehaviour,
    overflow: Overflow,
    clip: bool,
    scroll_top: f64,
    scroll_left: f64,
    min_scroll_top: f64,
    max_scroll_top: f64,
    min_scroll_left: f64,
    max_scroll_left: f64,
    scrollbar_x: ScrollbarState,
    scrollbar_y: ScrollbarState,
    horizontal_scrollbar: Option<Rect>,
    step_x: Option<LengthPair>,
    step_y: Option<LengthPair>,
}

impl Default for ContentRegion {
    fn default() -> Self {
        Self::new(OverflowBehaviour::default())
    }
}

impl ContentRegion {
    /// An un-scrolled, non-overflowing region.
    #[must_use]
    pub const fn new(behaviour: OverflowBehaviour) -> Self {
        Self {
            behaviour,
            overflow: Overflow {
                excess_x: 0.0,
                excess_y: 0.0,
                negative_x: 0.0,
                negative_y: 0.0,
            },
            clip: false,
            scroll_top: 0.0,
            scroll_left: 0.0,
            min_scroll_top: 0.0,
            max_scroll_top: 0.0,
            min_scroll_left: 0.0,
            max_scroll_left: 0.0,
            scrollbar_x: ScrollbarState {
                min: 0.0,
                max: 0.0,
                value: 0.0,
            },
            scrollbar_y: ScrollbarState {
                min: 0.0,
                max: 0.0,
                value: 0.0,
            },
            horizontal_scrollbar: None,
            step_x: None,
            step_y: None,
        }
    }

    /// What happens to overflowing content.
    #[must_use]
    pub const fn behaviour(&self) -> OverflowBehaviour {
        self.behaviour
    }

    /// Change the overflow behaviour. Takes effect on the next pass.
    pub fn set_behaviour(&mut self, behaviour: OverflowBehaviour) {
        self.behaviour = behaviour;
    }

    /// Overflow measured by the last pass.
    #[must_use]
    pub const fn overflow(&self) -> Overflow {
        self.overflow
    }

    /// Whether the host should clip children to the container's rectangle.
    #[must_use]
    pub const fn clips_content(&self) -> bool {
        self.clip
    }

    /// Current vertical offset (`<= 0`).
    #[must_use]
    pub const fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Current horizontal offset (`<= 0`).
    #[must_use]
    pub const fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    /// Upper bound of the vertical offset.
    #[must_use]
    pub const fn min_scroll_top(&self) -> f64 {
        self.min_scroll_top
    }

    /// Magnitude of the lower bound of the vertical offset.
    #[must_use]
    pub const fn max_scroll_top(&self) -> f64 {
        self.max_scroll_top
    }

    /// Upper bound of the horizontal offset.
    #[must_use]
    pub const fn min_scroll_left(&self) -> f64 {
        self.min_scroll_left
    }

    /// Magnitude of the lower bound of the horizontal offset.
    #[must_use]
    pub const fn max_scroll_left(&self) -> f64 {
        self.max_scroll_left
    }

    /// Horizontal scrollbar mirror.
    #[must_use]
    pub const fn scrollbar_x(&self) -> ScrollbarState {
        self.scrollbar_x
    }

    /// Vertical scrollbar mirror.
    #[must_use]
    pub const fn scrollbar_y(&self) -> ScrollbarState {
        self.scrollbar_y
    }

    /// Horizontal scroll step, if this region overrides the configured one.
    #[must_use]
    pub const fn scroll_step_x(&self) -> Option<LengthPair> {
        self.step_x
    }

    /// Vertical scroll step, if this region overrides the configured one.
    #[must_use]
    pub const fn scroll_step_y(&self) -> Option<LengthPair> {
        self.step_y
    }

    /// Override the horizontal scroll step; `None` uses the configured step.
    pub fn set_scroll_step_x(&mut self, step: Option<LengthPair>) {
        self.step_x = step;
    }

    /// Override the vertical scroll step; `None` uses the configured step.
    pub fn set_scroll_step_y(&mut self, step: Option<LengthPair>) {
        self.step_y = step;
    }

    /// Place the horizontal scrollbar's hit region, relative to the
    /// container's top-left corner. `None` uses a strip along the bottom edge.
    pub fn set_horizontal_scrollbar(&mut self, rect: Option<Rect>) {
        self.horizontal_scrollbar = rect;
    }

    /// Hit region of the horizontal scrollbar for a container of total size
    /// `frame`.
    #[must_use]
    pub fn horizontal_scrollbar_rect(&self, frame: Size, thickness: f64) -> Rect {
        self.horizontal_scrollbar.unwrap_or_else(|| {
            let thickness = thickness.min(frame.height).max(0.0);
            Rect::new(0.0, frame.height - thickness, frame.width, thickness)
        })
    }

    /// Record a fresh overflow measurement.
    ///
    /// Updates the scroll bounds, clamps the current offsets into them and
    /// recomputes clipping.
    pub fn update_overflow(&mut self, overflow: Overflow) {
        self.overflow = overflow;
        self.min_scroll_top = 0.0;
        self.max_scroll_top = overflow.size_y();
        self.min_scroll_left = 0.0;
        self.max_scroll_left = overflow.size_x();

        let top = self.scroll_top.clamp(-self.max_scroll_top, self.min_scroll_top);
        let left = self.scroll_left.clamp(-self.max_scroll_left, self.min_scroll_left);
        self.set_scroll_top(top);
        self.set_scroll_left(left);

        self.clip = overflow.is_overflowed() && self.behaviour != OverflowBehaviour::Visible;
    }

    /// Scroll by `(dx, dy)`, truncating at the bounds.
    ///
    /// A delta that would overshoot moves the offset exactly onto the bound.
    /// Returns the delta actually applied; the caller moves the children by it.
    pub fn apply_scroll(&mut self, dx: f64, dy: f64) -> ScrollDelta {
        let top = (self.scroll_top + dy).clamp(-self.max_scroll_top, self.min_scroll_top);
        let left = (self.scroll_left + dx).clamp(-self.max_scroll_left, self.min_scroll_left);
        let applied = ScrollDelta {
            dx: left - self.scroll_left,
            dy: top - self.scroll_top,
        };
        self.set_scroll_top(top);
        self.set_scroll_left(left);
        applied
    }

    /// Offset applied to every child's un-scrolled position.
    ///
    /// The scroll offsets, plus, when scrolling is enabled, the negative
    /// overflow so content placed at negative coordinates is reachable.
    #[must_use]
    pub fn content_offset(&self) -> Point {
        let mut offset = Point::new(self.scroll_left, self.scroll_top);
        if self.behaviour == OverflowBehaviour::Scroll {
            offset = offset.translate(self.overflow.negative_x, self.overflow.negative_y);
        }
        offset
    }

    /// Whether a wheel event with the pointer at `pointer` scrolls vertically.
    ///
    /// Vertical wins unless there is no vertical overflow, or both axes
    /// overflow and the pointer is over the horizontal scrollbar or within
    /// `frame.height * checking_size` above it.
    #[must_use]
    pub fn y_priority(&self, pointer: Point, frame: Size, checking_size: f64, thickness: f64) -> bool {
        if !self.overflow.is_overflowed_y() {
            return false;
        }
        if self.overflow.is_overflowed_x() {
            let slop = frame.height * checking_size;
            let bar = self.horizontal_scrollbar_rect(frame, thickness);
            let hit = Rect::new(bar.x, bar.y - slop, bar.width, bar.height + slop);
            if hit.contains(pointer) {
                return false;
            }
        }
        true
    }

    /// React to a wheel notch over a container of total size `frame`.
    ///
    /// Only scrolls when the behaviour is [`OverflowBehaviour::Scroll`] and
    /// some axis overflows. Steps resolve against the container's own size
    /// on the scroll axis.
    pub fn handle_wheel(
        &mut self,
        input: WheelInput,
        frame: Size,
        viewport: Size,
        config: &LayoutConfig,
    ) -> ScrollDelta {
        if self.behaviour != OverflowBehaviour::Scroll || !self.overflow.is_overflowed() {
            return ScrollDelta::default();
        }
        let sign = match input.direction {
            WheelDirection::Up => 1.0,
            WheelDirection::Down => -1.0,
        };
        let ctx = ResolveContext::new(frame, viewport);
        if self.y_priority(
            input.pointer,
            frame,
            config.scroll_x_checking_size,
            config.scrollbar_thickness,
        ) {
            let step = ctx.to_px(self.step_y.unwrap_or(config.scroll_step_y), Axis::Vertical);
            self.apply_scroll(0.0, sign * step)
        } else {
            let step = ctx.to_px(self.step_x.unwrap_or(config.scroll_step_x), Axis::Horizontal);
            self.apply_scroll(sign * step, 0.0)
        }
    }

    fn set_scroll_top(&mut self, value: f64) {
        self.scroll_top = value;
        self.scrollbar_y = ScrollbarState {
            min: self.min_scroll_top,
            max: self.max_scroll_top,
            value: value.abs(),
        };
    }

    fn set_scroll_left(&mut self, value: f64) {
        self.scroll_left = value;
        self.scrollbar_x = ScrollbarState {
            min: self.min_scroll_left,
            max: self.max_scroll_left,
            value: value.abs(),
        };
    }
}
