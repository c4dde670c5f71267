//! Box-model layout for Trellis container trees.
//!
//! # Scope
//!
//! This crate implements:
//! - **Box model** - [`BoxGeometry`] resolved to a [`ResolvedBox`] whose total
//!   size is content plus padding
//! - **Positioning** - static stacking, relative offsets and absolute
//!   placement ([`PositionMode`]), and [`Visibility`]
//! - **Layout pass** - [`layout_tree`], a parent-before-child sweep over a
//!   [`LayoutTree`]
//! - **Overflow and scrolling** - [`Overflow`] measurement and the
//!   [`ContentRegion`] that clamps scroll offsets and decides clipping
//! - **Notifications** - [`LayoutChange`] alerts through [`AlertDispatch`]
//! - **Driving** - [`LayoutEngine`], its [`UpdateTimer`] and [`LayoutConfig`]
//! - **Scenes** - JSON descriptions of whole trees ([`Scene`])
//!
//! # Not Yet Implemented
//!
//! - Horizontal flow; every in-flow child starts at the left padding edge
//! - Text measurement; leaves report their own size

/// Layout-change notifications and the alert registry.
pub mod alert;
/// Box model types and resolution.
pub mod box_model;
/// Engine-wide layout settings.
pub mod config;
/// Container nodes and their geometry setters.
pub mod container;
/// Clipping and scroll state of a container's content.
pub mod content;
/// Host-facing driver and update timer.
pub mod engine;
/// Error types.
pub mod error;
/// Opaque leaf widgets and anchors.
pub mod leaf;
/// Overflow behaviour and measurement.
pub mod overflow;
/// The layout pass.
pub mod pass;
/// Positioning modes and visibility.
pub mod positioned;
/// Scene descriptions.
pub mod scene;
/// Arena-based layout tree.
pub mod tree;

// Re-exports for convenience
pub use alert::{
    ALERT_LAYOUT_CHANGE, AlertDispatch, AlertManager, LayoutAlert, LayoutChange, SubscriptionId,
};
pub use box_model::{BoxGeometry, EdgeSizes, Rect, ResolvedBox};
pub use config::LayoutConfig;
pub use container::{ContainerBox, EdgeField, LengthField};
pub use content::{ContentRegion, ScrollDelta, ScrollbarState, WheelDirection, WheelInput};
pub use engine::{LayoutEngine, UpdateTimer};
pub use error::{ConfigError, SceneError, TreeError};
pub use leaf::{Anchors, LeafWidget};
pub use overflow::{Overflow, OverflowBehaviour};
pub use pass::layout_tree;
pub use positioned::{PositionMode, Visibility};
pub use scene::{ContainerAttributes, Scene, SceneNode};
pub use tree::{LayoutTree, Node, NodeId, NodeKind};
