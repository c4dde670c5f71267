//! Host-facing driver.
//!
//! The host calls [`LayoutEngine::tick`] once per frame with the elapsed
//! time. A pass runs at most once per configured interval, or immediately
//! when a setter has marked something dirty. Layout is single-threaded: the
//! host must not tick the same tree from several threads.

use crate::config::LayoutConfig;
use crate::content::{ScrollDelta, WheelInput};
use crate::error::ConfigError;
use crate::pass::layout_tree;
use crate::tree::{LayoutTree, NodeId};

/// Accumulates tick deltas and fires once per interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateTimer {
    elapsed: f64,
    interval: f64,
}

impl UpdateTimer {
    /// A timer firing every `interval` time units.
    #[must_use]
    pub const fn new(interval: f64) -> Self {
        Self {
            elapsed: 0.0,
            interval,
        }
    }

    /// Time accumulated since the timer last fired.
    #[must_use]
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Configured interval.
    #[must_use]
    pub const fn interval(&self) -> f64 {
        self.interval
    }

    /// Add `delta` and report whether the interval has been reached.
    ///
    /// Firing consumes one interval; a long stall fires once, not once per
    /// missed interval. Whole intervals beyond the first are dropped and only
    /// the remainder, `(elapsed - interval) % interval`, carries over, so a
    /// stall of 3.5 intervals leaves half an interval accumulated. Negative or
    /// non-finite deltas are ignored.
    pub fn advance(&mut self, delta: f64) -> bool {
        if delta.is_finite() && delta > 0.0 {
            self.elapsed += delta;
        }
        if self.elapsed < self.interval {
            return false;
        }
        self.elapsed = if self.interval > 0.0 {
            (self.elapsed - self.interval) % self.interval
        } else {
            0.0
        };
        true
    }

    /// Forget accumulated time.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// Runs layout passes over a [`LayoutTree`].
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
    timer: UpdateTimer,
}

impl LayoutEngine {
    /// An engine using `config`.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is out of range.
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let timer = UpdateTimer::new(config.update_interval);
        Ok(Self { config, timer })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// The update timer.
    #[must_use]
    pub const fn timer(&self) -> &UpdateTimer {
        &self.timer
    }

    /// Advance the timer by `delta` and run a pass if it fired or the tree
    /// needs layout. Returns whether a pass ran.
    pub fn tick(&mut self, tree: &mut LayoutTree, delta: f64) -> bool {
        let due = self.timer.advance(delta);
        if !due && !tree.needs_layout() {
            return false;
        }
        self.layout(tree);
        true
    }

    /// Run a pass now.
    pub fn layout(&self, tree: &mut LayoutTree) {
        layout_tree(tree, &self.config);
    }

    /// Deliver a wheel notch to the container at `id` and move its children
    /// by the resulting scroll. Returns the applied delta.
    pub fn handle_wheel(&self, tree: &mut LayoutTree, id: NodeId, input: WheelInput) -> ScrollDelta {
        let viewport = tree.viewport();
        let Some(frame) = tree.frame(id) else {
            return ScrollDelta::default();
        };
        let Some(container) = tree.container_mut(id) else {
            return ScrollDelta::default();
        };
        let delta = container
            .content_mut()
            .handle_wheel(input, frame.size(), viewport, &self.config);
        tree.shift_children(id, delta);
        delta
    }
}
